//! Configuration loader: path resolution, file decoding, and environment overlay.
//!
//! Responsibilities:
//! - Find the first search directory containing the configuration file.
//! - Decode the file from YAML into the caller's record.
//! - Overlay environment variables bound through field annotations.
//! - Provide a builder-pattern `Loader` that runs the three steps in order.
//!
//! Does NOT handle:
//! - Merging several configuration files.
//! - Writing configuration back to disk.
//! - Loading `.env` files; the process environment is only ever read.
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over file values.
//! - The first error from any step aborts the load; the destination may be partially populated.

mod builder;
mod env;
mod error;
mod file;
mod path;

#[cfg(test)]
mod tests;

pub use builder::Loader;
pub use env::{apply_env, env_var_or_none};
pub use error::{ConfigError, ErrorKind};
pub use file::parse_file;
pub use path::{Candidate, SearchConfig, resolve};
