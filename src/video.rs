use anyhow::Result;
use std::path::Path;

use crate::fs::Filesystem;

/// Suffixes that make a directory count as holding video.
pub const VIDEO_EXTENSIONS: [&str; 6] = [".mp4", ".mkv", ".mov", ".avi", ".flv", ".wmv"];

/// The only suffix that is actually linked into a season.
pub const LINKED_EXTENSION: &str = ".mp4";

pub fn is_video_name(name: &str) -> bool {
    VIDEO_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

pub fn is_linkable_name(name: &str) -> bool {
    name.ends_with(LINKED_EXTENSION)
}

/// Whether any file anywhere beneath `dir` has a video extension.
pub fn contains_video(fs: &impl Filesystem, dir: &Path) -> Result<bool> {
    fs.any_file_under(dir, &|path| {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(is_video_name)
    })
}

pub fn episode_id(season: u32, episode: i64) -> String {
    format!("S{:02}E{:02}", season, episode)
}

pub fn season_dir_name(season: u32, leaf_name: &str) -> String {
    format!("Season {} - {}", season, leaf_name)
}

pub fn episode_file_name(season: u32, episode: i64, file_name: &str) -> String {
    format!("{} - {}", episode_id(season, episode), file_name)
}
