use anyhow::Result;
use std::io::Write;
use tracing::{info, warn};

use crate::{
    config::Config,
    fs::Filesystem,
    order::sort_ordinal,
    season::SeasonRecord,
    tree::Node,
    walker::{Counters, Walker},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub dry_run: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { dry_run: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub seasons: Vec<SeasonRecord>,
    pub next_season: u32,
}

impl Report {
    pub fn episode_count(&self) -> usize {
        self.seasons.iter().map(|record| record.episodes.len()).sum()
    }
}

/// Links every top-level unit of the course into season folders.
///
/// Units are walked in ordinal order. The season counter carries over from
/// one unit to the next while every unit starts again at episode 1.
pub fn link_course<F: Filesystem, W: Write>(
    fs: &F,
    config: &Config,
    options: Options,
    out: &mut W,
) -> Result<Report> {
    let mut units = fs.list(&config.source)?;
    sort_ordinal(&mut units);

    if !options.dry_run {
        fs.create_dir(&config.destination)?;
    }

    let mut walker = Walker::new(fs, &config.destination, options.dry_run, out);
    let mut season = Counters::default().season;
    for unit in &units {
        let path = config.source.join(unit);
        if !fs.is_dir(&path) {
            warn!("Skipping {:?}: not a directory", path);
            continue;
        }
        let node = Node::read(fs, &path)?;
        season = walker.walk(&node, 0, Counters::starting_at(season))?.season;
    }

    let report = Report {
        seasons: walker.finish(),
        next_season: season,
    };
    info!(
        "Linked {} episodes into {} seasons for {:?}",
        report.episode_count(),
        report.seasons.len(),
        config.course
    );
    Ok(report)
}
