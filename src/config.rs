use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_SOURCE: &str = "~/Documents/Library/{course}";
pub const DEFAULT_DESTINATION: &str = "~/Documents/Media/Courses";
const COURSE_PLACEHOLDER: &str = "{course}";

/// Paths for one run, resolved before anything is walked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub course: String,
    /// Course root holding the top-level units.
    pub source: PathBuf,
    /// Folder the season directories are created in.
    pub destination: PathBuf,
}

impl Config {
    pub fn resolve(course: &str, source_template: &str, destination_root: &str) -> Result<Self> {
        if course.trim().is_empty() {
            bail!("Course name must not be empty");
        }
        if Path::new(course).components().count() != 1 || course == "." || course == ".." {
            bail!("Course name must be a single directory name: {:?}", course);
        }

        let source = expand(&source_template.replace(COURSE_PLACEHOLDER, course))?;
        let destination = expand(destination_root)?.join(course);
        debug!("Resolved source {:?} and destination {:?}", source, destination);

        Ok(Self {
            course: course.to_string(),
            source,
            destination,
        })
    }
}

/// Expands `~` and anchors relative paths at the working directory.
fn expand(path: &str) -> Result<PathBuf> {
    let expanded = shellexpand::tilde(path).into_owned();
    std::path::absolute(&expanded)
        .with_context(|| format!("Failed to resolve path {:?}", expanded))
}
