//! Environment variable overlay for configuration records.
//!
//! Responsibilities:
//! - Walk a record's fields, recursing into nested records.
//! - For each field bound with `env=NAME`, read `NAME` and coerce it into the field.
//!
//! Does NOT handle:
//! - Loading from files (see file.rs).
//! - Sequencing the load steps (see builder.rs).
//!
//! Invariants:
//! - Environment variables take precedence over file values because the overlay runs last.
//! - Unset and empty variables are treated identically: the field is left untouched.
//! - Values are not trimmed; `" 1"` is not an integer.
//! - The process environment is read, never written.

use std::env::VarError;

use super::error::ConfigError;
use crate::binding::FieldBinding;
use crate::record::{EnvSlot, Record, Visitor};

/// Read an environment variable, returning None if unset or empty.
///
/// A value that is not valid Unicode cannot be coerced into any field and is an error.
pub fn env_var_or_none(key: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(key) {
        Ok(value) if value.is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::InvalidValue {
            var: key.to_string(),
            field: String::new(),
            message: "must be valid unicode".to_string(),
        }),
    }
}

/// Apply environment variable overrides to every bound field of `dst`.
///
/// Stops at the first field whose variable cannot be converted; fields visited
/// before it keep their overridden values.
pub fn apply_env<T: Record + ?Sized>(dst: &mut T) -> Result<(), ConfigError> {
    dst.visit(&mut EnvOverlay::default())
}

/// Visitor that carries the dotted path of the record currently being walked.
#[derive(Default)]
struct EnvOverlay {
    parents: Vec<&'static str>,
}

impl EnvOverlay {
    fn field_path(&self, binding: &FieldBinding) -> String {
        let mut path = self.parents.join(".");
        if !path.is_empty() {
            path.push('.');
        }
        path.push_str(binding.name());
        path
    }

    /// Value of the variable bound to `binding`, if the binding exists and the variable is set.
    fn lookup(
        &self,
        binding: &FieldBinding,
    ) -> Result<Option<(&'static str, String)>, ConfigError> {
        let Some(var) = binding.env() else {
            return Ok(None);
        };
        let value = env_var_or_none(var).map_err(|err| match err {
            ConfigError::InvalidValue { var, message, .. } => ConfigError::InvalidValue {
                var,
                field: self.field_path(binding),
                message,
            },
            other => other,
        })?;
        Ok(value.map(|value| (var, value)))
    }
}

impl Visitor for EnvOverlay {
    fn value(&mut self, binding: &FieldBinding, slot: &mut dyn EnvSlot) -> Result<(), ConfigError> {
        let Some((var, raw)) = self.lookup(binding)? else {
            return Ok(());
        };

        let field = self.field_path(binding);
        slot.assign(&raw).map_err(|message| ConfigError::InvalidValue {
            var: var.to_string(),
            field: field.clone(),
            message,
        })?;

        tracing::trace!(var, field = %field, kind = ?slot.kind(), "Applied environment override");
        Ok(())
    }

    fn record(
        &mut self,
        binding: &FieldBinding,
        record: &mut dyn Record,
    ) -> Result<(), ConfigError> {
        self.parents.push(binding.name());
        let result = record.visit(self);
        self.parents.pop();
        result
    }

    fn unsupported(
        &mut self,
        binding: &FieldBinding,
        type_name: &'static str,
    ) -> Result<(), ConfigError> {
        match self.lookup(binding)? {
            Some((var, _)) => Err(ConfigError::UnsupportedType {
                var: var.to_string(),
                field: self.field_path(binding),
                type_name,
            }),
            None => Ok(()),
        }
    }
}
