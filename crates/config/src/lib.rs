//! Locate a configuration file, decode it, and overlay environment variables.
//!
//! A [`Loader`] scans an ordered list of search directories for a named file,
//! decodes the first match from YAML into a caller-defined record, then walks
//! the record's declared [`FieldBinding`]s and replaces any field whose bound
//! environment variable is set and non-empty.
//!
//! Records describe their fields through the [`Record`] trait instead of
//! runtime reflection:
//!
//! ```
//! use serde::Deserialize;
//! use stratum_config::{ConfigError, FieldBinding, Record, Visitor};
//!
//! #[derive(Debug, Default, Deserialize)]
//! #[serde(default)]
//! struct Server {
//!     port: u16,
//! }
//!
//! impl Record for Server {
//!     fn visit(&mut self, visitor: &mut dyn Visitor) -> Result<(), ConfigError> {
//!         const PORT: FieldBinding = FieldBinding::tagged("port", "env=SERVER_PORT");
//!         visitor.value(&PORT, &mut self.port)
//!     }
//! }
//! ```

pub mod binding;
mod loader;
pub mod record;
pub mod validate;

pub use binding::{FieldBinding, Tag};
pub use loader::{
    Candidate, ConfigError, ErrorKind, Loader, SearchConfig, apply_env, env_var_or_none,
    parse_file, resolve,
};
pub use record::{EnvSlot, EnvValue, Record, ValueKind, Visitor};
pub use validate::Validate;
