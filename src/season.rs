use anyhow::Result;
use colored::Colorize;
use std::{
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    fs::Filesystem,
    tree::Node,
    video::{episode_file_name, is_linkable_name, season_dir_name},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeLink {
    pub episode: i64,
    pub source: PathBuf,
    pub name: String,
}

/// One deepest directory turned into a season folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonRecord {
    pub season: u32,
    pub source: PathBuf,
    pub directory: String,
    pub first_episode: i64,
    pub episodes: Vec<EpisodeLink>,
}

impl SeasonRecord {
    /// Last episode number assigned, or one before the first when nothing was linked.
    pub fn last_episode(&self) -> i64 {
        self.episodes
            .last()
            .map(|link| link.episode)
            .unwrap_or(self.first_episode - 1)
    }
}

pub fn indent(depth: usize) -> String {
    "\t".repeat(depth)
}

pub struct Materializer<'a, F: Filesystem> {
    fs: &'a F,
    destination: &'a Path,
    dry_run: bool,
}

impl<'a, F: Filesystem> Materializer<'a, F> {
    pub fn new(fs: &'a F, destination: &'a Path, dry_run: bool) -> Self {
        Self {
            fs,
            destination,
            dry_run,
        }
    }

    pub fn materialize(
        &self,
        node: &Node,
        depth: usize,
        season: u32,
        first_episode: i64,
        out: &mut impl Write,
    ) -> Result<SeasonRecord> {
        let leaf_name = node.name()?;
        let directory = season_dir_name(season, leaf_name);
        let season_path = self.destination.join(&directory);

        if !self.dry_run {
            self.fs.create_dir(&season_path)?;
        }

        let prefix = indent(depth);
        writeln!(
            out,
            "{}{} -> {}",
            prefix,
            leaf_name.red().bold(),
            directory.green().bold()
        )?;

        let mut episodes = Vec::new();
        let items = node.entries.iter().filter(|item| is_linkable_name(item));
        for (episode, item) in (first_episode..).zip(items) {
            let name = episode_file_name(season, episode, item);
            let source = node.path.join(item);

            if !self.dry_run {
                self.fs.symlink(&source, &season_path.join(&name))?;
            }

            writeln!(out, "{}\t{} -> {}", prefix, item, name)?;
            episodes.push(EpisodeLink {
                episode,
                source,
                name,
            });
        }

        Ok(SeasonRecord {
            season,
            source: node.path.clone(),
            directory,
            first_episode,
            episodes,
        })
    }
}
