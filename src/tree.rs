use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::{fs::Filesystem, order::sort_ordinal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// No subdirectories; materialized as one season.
    Deepest,
    Intermediate,
}

/// A directory read once: its entries in ordinal order and its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub path: PathBuf,
    pub entries: Vec<String>,
    pub kind: Kind,
}

impl Node {
    pub fn read(fs: &impl Filesystem, path: &Path) -> Result<Self> {
        let mut entries = fs.list(path)?;
        sort_ordinal(&mut entries);
        let kind = if entries.iter().any(|entry| fs.is_dir(&path.join(entry))) {
            Kind::Intermediate
        } else {
            Kind::Deepest
        };
        Ok(Self {
            path: path.to_path_buf(),
            entries,
            kind,
        })
    }

    pub fn name(&self) -> Result<&str> {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .with_context(|| format!("Failed to get directory name of {:?}", self.path))
    }

    pub fn is_deepest(&self) -> bool {
        self.kind == Kind::Deepest
    }

    pub fn subdirectories<'a, F: Filesystem>(
        &'a self,
        fs: &'a F,
    ) -> impl Iterator<Item = PathBuf> + 'a {
        self.entries
            .iter()
            .map(move |entry| self.path.join(entry))
            .filter(move |path| fs.is_dir(path))
    }
}
