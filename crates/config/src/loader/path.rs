//! Configuration file discovery.
//!
//! Responsibilities:
//! - Normalize each candidate search path to an absolute, lexically clean path.
//! - Scan candidates in order for a regular file with the target name.
//!
//! Does NOT handle:
//! - Reading or decoding the file (see file.rs).
//!
//! Invariants:
//! - The first matching candidate wins; later candidates are not scanned.
//! - An empty candidate list is an error; finding no file is not.
//! - An unreadable candidate directory aborts the search.
//! - Symlinks are never matched, only regular files.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use super::error::ConfigError;

/// A single place to look for the configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    /// A directory searched for the `SearchConfig` filename.
    Dir(PathBuf),
    /// A full file path; its parent directory is searched for its file name.
    File(PathBuf),
}

/// Ordered search locations plus the filename shared by `Candidate::Dir` entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchConfig {
    pub filename: Option<String>,
    pub candidates: Vec<Candidate>,
}

impl SearchConfig {
    /// Search `dirs`, in order, for `filename`.
    pub fn new<I, P>(filename: impl Into<String>, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            filename: Some(filename.into()),
            candidates: dirs
                .into_iter()
                .map(|dir| Candidate::Dir(dir.into()))
                .collect(),
        }
    }
}

/// Find the configuration file described by `search`.
///
/// Returns `Ok(None)` when every candidate was scanned without a match.
pub fn resolve(search: &SearchConfig) -> Result<Option<PathBuf>, ConfigError> {
    if search.candidates.is_empty() {
        return Err(ConfigError::NoSearchPaths);
    }

    for candidate in &search.candidates {
        let (dir, filename) = split_candidate(candidate, search.filename.as_deref())?;
        let dir = absolute_clean(&dir)?;
        tracing::trace!(dir = %dir.display(), filename, "Scanning config search path");

        if let Some(found) = find_in_dir(&dir, OsStr::new(filename))? {
            tracing::debug!(path = %found.display(), "Resolved config file");
            return Ok(Some(found));
        }
    }

    tracing::debug!("No config file found in search paths, using environment only");
    Ok(None)
}

fn split_candidate<'a>(
    candidate: &'a Candidate,
    filename: Option<&'a str>,
) -> Result<(PathBuf, &'a str), ConfigError> {
    match candidate {
        Candidate::Dir(dir) => {
            let filename = filename
                .filter(|name| !name.is_empty())
                .ok_or_else(|| ConfigError::MissingFilename(dir.clone()))?;
            Ok((dir.clone(), filename))
        }
        Candidate::File(path) => {
            let filename = path
                .file_name()
                .and_then(OsStr::to_str)
                .ok_or_else(|| ConfigError::MissingFilename(path.clone()))?;
            let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
            Ok((dir, filename))
        }
    }
}

fn find_in_dir(dir: &Path, filename: &OsStr) -> Result<Option<PathBuf>, ConfigError> {
    let read_error = |source: std::io::Error| ConfigError::SearchDirRead {
        path: dir.to_path_buf(),
        source,
    };

    for entry in std::fs::read_dir(dir).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        if entry.file_name().as_os_str() != filename {
            continue;
        }
        // DirEntry::file_type does not follow symlinks.
        if entry.file_type().map_err(read_error)?.is_file() {
            return Ok(Some(dir.join(filename)));
        }
    }

    Ok(None)
}

/// Make `path` absolute against the working directory and remove `.`/`..` segments.
fn absolute_clean(path: &Path) -> Result<PathBuf, ConfigError> {
    let path = if path.as_os_str().is_empty() {
        Path::new(".")
    } else {
        path
    };
    let absolute = std::path::absolute(path).map_err(|source| ConfigError::SearchDirRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(clean_path(&absolute))
}

fn clean_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            Component::Normal(part) => out.push(part),
            Component::RootDir => out.push(Component::RootDir.as_os_str()),
            Component::Prefix(prefix) => out.push(prefix.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_clean_path_removes_dot_segments() {
        assert_eq!(
            clean_path(Path::new("/etc/./app/../app//config")),
            PathBuf::from("/etc/app/config")
        );
        assert_eq!(clean_path(Path::new("/../etc")), PathBuf::from("/etc"));
    }

    #[test]
    fn test_absolute_clean_of_empty_path_is_cwd() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(absolute_clean(Path::new("")).unwrap(), clean_path(&cwd));
    }

    #[test]
    fn test_find_in_dir_skips_directories_with_matching_name() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("config.yaml")).unwrap();

        let found = find_in_dir(temp_dir.path(), OsStr::new("config.yaml")).unwrap();
        assert!(found.is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_find_in_dir_skips_symlinks() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.yaml");
        fs::write(&target, "a: 1\n").unwrap();
        std::os::unix::fs::symlink(&target, temp_dir.path().join("config.yaml")).unwrap();

        let found = find_in_dir(temp_dir.path(), OsStr::new("config.yaml")).unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn test_file_candidate_splits_parent_and_name() {
        let candidate = Candidate::File(PathBuf::from("/etc/app/config.yaml"));
        let (dir, name) = split_candidate(&candidate, None).unwrap();
        assert_eq!(dir, PathBuf::from("/etc/app"));
        assert_eq!(name, "config.yaml");
    }

    #[test]
    fn test_dir_candidate_requires_filename() {
        let candidate = Candidate::Dir(PathBuf::from("/etc/app"));
        assert!(matches!(
            split_candidate(&candidate, None),
            Err(ConfigError::MissingFilename(_))
        ));
        assert!(matches!(
            split_candidate(&candidate, Some("")),
            Err(ConfigError::MissingFilename(_))
        ));
    }
}
