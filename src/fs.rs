use anyhow::{Context, Result, anyhow};
use std::{fs, io, path::Path};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Filesystem operations needed to link a course.
///
/// `create_dir` and `symlink` succeed without doing anything when the target
/// already exists. Every other failure is returned to the caller.
pub trait Filesystem {
    /// Names of the entries directly inside `dir`, in no particular order.
    fn list(&self, dir: &Path) -> Result<Vec<String>>;
    fn is_dir(&self, path: &Path) -> bool;
    /// True when something is present at `path`, including a dangling symlink.
    fn exists(&self, path: &Path) -> bool;
    fn create_dir(&self, path: &Path) -> Result<()>;
    fn symlink(&self, source: &Path, link: &Path) -> Result<()>;
    /// Whether any non-directory entry beneath `dir` satisfies `matches`.
    /// Stops at the first match.
    fn any_file_under(&self, dir: &Path, matches: &dyn Fn(&Path) -> bool) -> Result<bool>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl Filesystem for LocalFs {
    fn list(&self, dir: &Path) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir).with_context(|| format!("Failed to list {:?}", dir))? {
            let entry = entry.with_context(|| format!("Failed to list {:?}", dir))?;
            let name = entry
                .file_name()
                .into_string()
                .map_err(|name| anyhow!("Entry name is not UTF-8: {:?}", dir.join(name)))?;
            names.push(name);
        }
        Ok(names)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn exists(&self, path: &Path) -> bool {
        path.symlink_metadata().is_ok()
    }

    fn create_dir(&self, path: &Path) -> Result<()> {
        if self.exists(path) {
            debug!("Directory already exists: {:?}", path);
            return Ok(());
        }
        match fs::create_dir(path) {
            Ok(()) => {
                info!("Created directory {:?}", path);
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => Ok(()),
            Err(err) => Err(err).with_context(|| format!("Failed to create directory {:?}", path)),
        }
    }

    fn symlink(&self, source: &Path, link: &Path) -> Result<()> {
        if self.exists(link) {
            debug!("Symlink target already exists: {:?}", link);
            return Ok(());
        }
        match create_symlink(source, link) {
            Ok(()) => {
                info!("Created symlink {:?} -> {:?}", link, source);
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => Ok(()),
            Err(err) => Err(err)
                .with_context(|| format!("Failed to link {:?} -> {:?}", link, source)),
        }
    }

    fn any_file_under(&self, dir: &Path, matches: &dyn Fn(&Path) -> bool) -> Result<bool> {
        for entry in WalkDir::new(dir).min_depth(1) {
            let entry = entry.with_context(|| format!("Failed to walk {:?}", dir))?;
            if !entry.file_type().is_dir() && matches(entry.path()) {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

#[cfg(unix)]
fn create_symlink(source: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(source, link)
}

#[cfg(windows)]
fn create_symlink(source: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(source, link)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use tempfile::TempDir;

    #[test]
    fn test_list_returns_entry_names() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("1. Module")).unwrap();
        fs::File::create(temp_dir.path().join("notes.txt")).unwrap();

        let mut names = LocalFs.list(temp_dir.path()).unwrap();
        names.sort();

        assert_eq!(names, vec!["1. Module", "notes.txt"]);
    }

    #[test]
    fn test_list_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let result = LocalFs.list(&temp_dir.path().join("missing"));
        assert!(result.is_err(), "listing a missing directory should fail");
    }

    #[test]
    fn test_create_dir_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("Season 1 - Intro");

        LocalFs.create_dir(&dir).unwrap();
        LocalFs.create_dir(&dir).unwrap();

        assert!(dir.is_dir(), "directory should exist: {:?}", dir);
    }

    #[test]
    fn test_create_dir_without_parent_fails() {
        let temp_dir = TempDir::new().unwrap();
        let result = LocalFs.create_dir(&temp_dir.path().join("missing").join("child"));
        assert!(result.is_err(), "missing parent should propagate");
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("1.mp4");
        let link = temp_dir.path().join("S01E01 - 1.mp4");
        fs::File::create(&source).unwrap();

        LocalFs.symlink(&source, &link).unwrap();
        LocalFs.symlink(&source, &link).unwrap();

        assert_eq!(fs::read_link(&link).unwrap(), source);
    }

    #[cfg(unix)]
    #[test]
    fn test_exists_sees_dangling_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let link = temp_dir.path().join("dangling");
        std::os::unix::fs::symlink(temp_dir.path().join("gone.mp4"), &link).unwrap();

        assert!(LocalFs.exists(&link), "dangling symlink should count as existing");
        LocalFs
            .symlink(&temp_dir.path().join("other.mp4"), &link)
            .unwrap();
        assert_eq!(
            fs::read_link(&link).unwrap(),
            temp_dir.path().join("gone.mp4"),
            "existing link should be left untouched"
        );
    }

    #[test]
    fn test_any_file_under_is_recursive() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::File::create(nested.join("deep.mkv")).unwrap();
        fs::File::create(temp_dir.path().join("top.txt")).unwrap();

        let found = LocalFs
            .any_file_under(temp_dir.path(), &|path| path.ends_with("a/b/deep.mkv"))
            .unwrap();
        let missing = LocalFs
            .any_file_under(temp_dir.path(), &|path| path.ends_with("b"))
            .unwrap();

        assert!(found, "Nested file should be found");
        assert!(!missing, "Directories should not be matched");
    }

    #[test]
    fn test_any_file_under_stops_at_first_match() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["1.mp4", "2.mp4", "3.mp4"] {
            fs::File::create(temp_dir.path().join(name)).unwrap();
        }

        let visited = Cell::new(0);
        let found = LocalFs
            .any_file_under(temp_dir.path(), &|_| {
                visited.set(visited.get() + 1);
                true
            })
            .unwrap();

        assert!(found);
        assert_eq!(visited.get(), 1, "Walk should stop after the first match");
    }
}
