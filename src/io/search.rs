//! Source image discovery across a list of search directories
//!
//! The working directory is searched first, then directories given on the
//! command line, then any listed in a `paths.txt` file in the working directory.

use std::path::{Path, PathBuf};

use crate::io::configuration::PATHS_FILE;
use crate::io::error::{PatternError, Result};

/// Ordered, de-duplicated set of directories to look for source images in
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPaths {
    directories: Vec<PathBuf>,
}

impl SearchPaths {
    /// Build the search list rooted at the current working directory
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory or `paths.txt` cannot be read
    pub fn discover(extra: &[PathBuf]) -> Result<Self> {
        let root = std::env::current_dir().map_err(|e| PatternError::FileSystem {
            path: PathBuf::from("."),
            operation: "read working directory",
            source: e,
        })?;
        Self::from_root(&root, extra)
    }

    /// Build the search list rooted at `root`
    ///
    /// Relative entries, whether passed in `extra` or listed in
    /// `root/paths.txt`, are taken relative to `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if `root/paths.txt` exists but cannot be read
    pub fn from_root(root: &Path, extra: &[PathBuf]) -> Result<Self> {
        let mut paths = Self::default();
        paths.push(root);
        for dir in extra {
            paths.push(&root.join(dir));
        }
        for dir in read_paths_file(&root.join(PATHS_FILE))? {
            paths.push(&root.join(dir));
        }
        Ok(paths)
    }

    /// Append `dir` unless it is missing or already listed under another spelling
    ///
    /// Returns whether the directory was added.
    pub fn push(&mut self, dir: &Path) -> bool {
        let Ok(canonical) = dir.canonicalize() else {
            return false;
        };
        if !canonical.is_dir() || self.directories.contains(&canonical) {
            return false;
        }
        self.directories.push(canonical);
        true
    }

    /// Directories in search order
    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }

    /// Locate `name`, trying it as given before each search directory in turn
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::ImageNotFound`] if no candidate is a file
    pub fn resolve(&self, name: &Path) -> Result<PathBuf> {
        if name.is_file() {
            return Ok(name.to_path_buf());
        }

        if !name.is_absolute() {
            let found = self
                .directories
                .iter()
                .map(|dir| dir.join(name))
                .find(|candidate| candidate.is_file());
            if let Some(found) = found {
                return Ok(found);
            }
        }

        Err(PatternError::ImageNotFound {
            path: name.to_path_buf(),
            searched: self.directories.clone(),
        })
    }
}

/// Directories listed one per line in `path`
///
/// Blank lines and lines starting with `#` are skipped. A missing file lists nothing.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read
pub fn read_paths_file(path: &Path) -> Result<Vec<PathBuf>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let contents = std::fs::read_to_string(path).map_err(|e| PatternError::FileSystem {
        path: path.to_path_buf(),
        operation: "read search paths",
        source: e,
    })?;

    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(PathBuf::from)
        .collect())
}
