//! Configuration file decoding.
//!
//! Responsibilities:
//! - Read the resolved configuration file in full, read-only.
//! - Decode YAML into the caller's record.
//!
//! Does NOT handle:
//! - Locating the file (see path.rs).
//! - Environment overrides (see env.rs).
//!
//! Invariants:
//! - The file handle is dropped before decoding starts, on success and on error.
//! - Unknown document keys are ignored; missing keys fall back to the record's
//!   serde defaults.
//! - A file with no document (empty, or only comments) decodes as an empty mapping.
//! - Scalars take the type of the field they land in, not a type guessed from their text.
//! - Exactly one YAML document per file.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::error::ConfigError;

/// Decode the YAML file at `path` into `dst`.
///
/// `dst` is replaced wholesale by the decoded value. On error it is left untouched.
pub fn parse_file<T: DeserializeOwned>(path: &Path, dst: &mut T) -> Result<(), ConfigError> {
    let content = read_file(path)?;
    *dst = decode(&content).map_err(|source| ConfigError::ConfigFileParse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

fn read_file(path: &Path) -> Result<Vec<u8>, ConfigError> {
    let read_error = |source: std::io::Error| ConfigError::ConfigFileRead {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(read_error)?;
    let mut content = Vec::new();
    file.read_to_end(&mut content).map_err(read_error)?;
    Ok(content)
}

fn decode<T: DeserializeOwned>(content: &[u8]) -> Result<T, serde_yaml::Error> {
    // Plain scalars are typed by the destination field, so `1.10` stays text
    // for a `String` field.
    let mut documents = serde_yaml::Deserializer::from_slice(content);
    let decoded = match documents.next() {
        Some(document) => T::deserialize(document)?,
        None => T::deserialize(serde_yaml::Value::Mapping(serde_yaml::Mapping::new()))?,
    };
    if documents.next().is_some() {
        return Err(serde::de::Error::custom(
            "config file must contain a single YAML document",
        ));
    }
    Ok(decoded)
}
