//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `Loader` describing where to look for the config file.
//! - Run resolve, decode and overlay in that order, stopping at the first error.
//! - Optionally run the record's post-load validation.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - File decoding (delegated to file.rs).
//! - Search path scanning (delegated to path.rs).
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over file values.
//! - A missing config file is not an error; the overlay still runs.
//! - `Loader` holds no state between loads; loading twice with unchanged inputs
//!   yields equal records.

use std::path::PathBuf;

use serde::de::DeserializeOwned;

use super::env::apply_env;
use super::error::ConfigError;
use super::file::parse_file;
use super::path::{Candidate, SearchConfig, resolve};
use crate::record::Record;
use crate::validate::Validate;

/// Configuration loader that populates a record from a file and the environment.
#[derive(Debug, Clone, Default)]
pub struct Loader {
    search: SearchConfig,
}

impl Loader {
    /// Create a loader with no filename and no search paths.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader from an existing search description.
    pub fn from_search_config(search: SearchConfig) -> Self {
        Self { search }
    }

    /// Set the filename looked up in every search directory.
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.search.filename = Some(filename.into());
        self
    }

    /// Append a directory to the search list.
    pub fn with_search_path(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search.candidates.push(Candidate::Dir(dir.into()));
        self
    }

    /// Append several directories to the search list, preserving their order.
    pub fn with_search_paths<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.search
            .candidates
            .extend(dirs.into_iter().map(|dir| Candidate::Dir(dir.into())));
        self
    }

    /// Append a full file path; its own file name is looked up in its parent directory.
    pub fn with_candidate_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.search.candidates.push(Candidate::File(path.into()));
        self
    }

    pub fn search_config(&self) -> &SearchConfig {
        &self.search
    }

    /// Find the config file without reading it.
    pub fn resolve(&self) -> Result<Option<PathBuf>, ConfigError> {
        resolve(&self.search)
    }

    /// Populate `dst` from the config file (if one is found) and then the environment.
    ///
    /// Returns `dst` for chaining. On error `dst` may be partially populated.
    pub fn load_into<'a, T>(&self, dst: &'a mut T) -> Result<&'a mut T, ConfigError>
    where
        T: Record + DeserializeOwned,
    {
        if let Some(path) = self.resolve()? {
            parse_file(&path, dst)?;
        }
        apply_env(dst)?;
        Ok(dst)
    }

    /// Load a fresh record, starting from `T::default()`.
    pub fn load<T>(&self) -> Result<T, ConfigError>
    where
        T: Record + DeserializeOwned + Default,
    {
        let mut config = T::default();
        self.load_into(&mut config)?;
        Ok(config)
    }

    /// Load a fresh record and check it with `Validate::validate`.
    pub fn load_validated<T>(&self) -> Result<T, ConfigError>
    where
        T: Record + DeserializeOwned + Default + Validate,
    {
        let config: T = self.load()?;
        config.validate()?;
        Ok(config)
    }
}
