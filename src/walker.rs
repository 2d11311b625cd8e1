use anyhow::Result;
use std::{io::Write, path::Path};
use tracing::debug;

use crate::{
    fs::Filesystem,
    season::{Materializer, SeasonRecord},
    tree::Node,
    video::contains_video,
};

/// Season and episode numbers carried from one directory to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counters {
    pub season: u32,
    pub episode: i64,
}

impl Counters {
    pub fn starting_at(season: u32) -> Self {
        Self { season, episode: 1 }
    }
}

impl Default for Counters {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

/// Depth-first walk that turns every deepest directory into a season.
pub struct Walker<'a, F: Filesystem, W: Write> {
    fs: &'a F,
    materializer: Materializer<'a, F>,
    out: &'a mut W,
    seasons: Vec<SeasonRecord>,
}

impl<'a, F: Filesystem, W: Write> Walker<'a, F, W> {
    pub fn new(fs: &'a F, destination: &'a Path, dry_run: bool, out: &'a mut W) -> Self {
        Self {
            fs,
            materializer: Materializer::new(fs, destination, dry_run),
            out,
            seasons: Vec::new(),
        }
    }

    /// Visits `node` and its video-bearing subdirectories in ordinal order.
    ///
    /// A deepest node is materialized with the incoming counters; its last
    /// episode number becomes the running episode counter and the season
    /// advances by one. Subdirectories with no video anywhere below them are
    /// not entered. Each visited subdirectory receives the counters left by
    /// its previous sibling.
    pub fn walk(&mut self, node: &Node, depth: usize, counters: Counters) -> Result<Counters> {
        let mut counters = counters;

        if node.is_deepest() {
            let record = self.materializer.materialize(
                node,
                depth,
                counters.season,
                counters.episode,
                &mut *self.out,
            )?;
            counters.episode = record.last_episode();
            counters.season += 1;
            self.seasons.push(record);
        } else {
            debug!("Descending into {:?}", node.path);
        }

        let fs = self.fs;
        for path in node.subdirectories(fs) {
            if !contains_video(fs, &path)? {
                debug!("Skipping {:?}: no video files", path);
                continue;
            }
            let child = Node::read(fs, &path)?;
            counters = self.walk(&child, depth + 1, counters)?;
        }

        Ok(counters)
    }

    pub fn finish(self) -> Vec<SeasonRecord> {
        self.seasons
    }
}
