//! Field introspection for configuration records.
//!
//! Responsibilities:
//! - Define the `Record` trait a destination type implements to expose its fields.
//! - Define the `Visitor` trait the environment overlay implements to walk them.
//! - Coerce environment strings into scalar field types (`EnvValue`).
//!
//! Does NOT handle:
//! - Looking up environment variables (see `loader/env.rs`).
//! - Decoding the configuration file (see `loader/file.rs`).
//!
//! Invariants:
//! - A record visits its fields in declaration order, once each.
//! - Nested records are handed to `Visitor::record`, never flattened.
//! - Coercion failures are reported as messages; the caller attaches variable context.

use std::path::PathBuf;

use crate::binding::FieldBinding;
use crate::loader::ConfigError;

/// Broad category of a scalar field, used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Integer,
    Float,
    Bool,
}

/// A scalar type that can be parsed from an environment variable.
pub trait EnvValue: Sized {
    const KIND: ValueKind;

    fn from_env_str(raw: &str) -> Result<Self, String>;
}

/// Object-safe handle to a scalar field.
///
/// Every `EnvValue` is an `EnvSlot`, so `&mut self.port` coerces directly
/// into `&mut dyn EnvSlot` at a `Visitor::value` call site.
pub trait EnvSlot {
    fn kind(&self) -> ValueKind;

    /// Replace the current value with one parsed from `raw`.
    ///
    /// On error the field is left untouched.
    fn assign(&mut self, raw: &str) -> Result<(), String>;
}

impl<T: EnvValue> EnvSlot for T {
    fn kind(&self) -> ValueKind {
        T::KIND
    }

    fn assign(&mut self, raw: &str) -> Result<(), String> {
        *self = T::from_env_str(raw)?;
        Ok(())
    }
}

/// A structured destination whose fields can be overlaid from the environment.
///
/// Each `FieldBinding` name must equal the key serde decodes that field from,
/// including any `rename`. Nothing checks this at load time; a mismatch only
/// shows up as a wrong field path in error messages.
pub trait Record {
    fn visit(&mut self, visitor: &mut dyn Visitor) -> Result<(), ConfigError>;
}

/// Receives each field of a `Record` together with its binding.
pub trait Visitor {
    /// A scalar field.
    fn value(&mut self, binding: &FieldBinding, slot: &mut dyn EnvSlot) -> Result<(), ConfigError>;

    /// A nested record.
    fn record(
        &mut self,
        binding: &FieldBinding,
        record: &mut dyn Record,
    ) -> Result<(), ConfigError>;

    /// A field whose type has no string coercion, such as a list or a map.
    ///
    /// `type_name` is reported back in errors; `std::any::type_name_of_val`
    /// is the usual way to obtain it.
    fn unsupported(
        &mut self,
        binding: &FieldBinding,
        type_name: &'static str,
    ) -> Result<(), ConfigError>;
}

impl<T: Record + ?Sized> Record for Box<T> {
    fn visit(&mut self, visitor: &mut dyn Visitor) -> Result<(), ConfigError> {
        (**self).visit(visitor)
    }
}

/// An untyped document has no declared fields, so it cannot be overlaid.
impl Record for serde_yaml::Value {
    fn visit(&mut self, _visitor: &mut dyn Visitor) -> Result<(), ConfigError> {
        Err(ConfigError::NotARecord {
            type_name: std::any::type_name::<Self>(),
        })
    }
}

impl EnvValue for String {
    const KIND: ValueKind = ValueKind::Text;

    fn from_env_str(raw: &str) -> Result<Self, String> {
        Ok(raw.to_string())
    }
}

impl EnvValue for PathBuf {
    const KIND: ValueKind = ValueKind::Text;

    fn from_env_str(raw: &str) -> Result<Self, String> {
        Ok(PathBuf::from(raw))
    }
}

impl EnvValue for bool {
    const KIND: ValueKind = ValueKind::Bool;

    fn from_env_str(raw: &str) -> Result<Self, String> {
        parse_bool(raw).ok_or_else(|| "must be one of 1, t, true, 0, f, false".to_string())
    }
}

impl<T: EnvValue> EnvValue for Option<T> {
    const KIND: ValueKind = T::KIND;

    fn from_env_str(raw: &str) -> Result<Self, String> {
        T::from_env_str(raw).map(Some)
    }
}

macro_rules! impl_integer_env_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl EnvValue for $ty {
                const KIND: ValueKind = ValueKind::Integer;

                fn from_env_str(raw: &str) -> Result<Self, String> {
                    raw.parse::<$ty>().map_err(|e| {
                        format!("must be a base-10 integer in range for {}: {e}", stringify!($ty))
                    })
                }
            }
        )*
    };
}

impl_integer_env_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_float_env_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl EnvValue for $ty {
                const KIND: ValueKind = ValueKind::Float;

                fn from_env_str(raw: &str) -> Result<Self, String> {
                    raw.parse::<$ty>()
                        .map_err(|e| format!("must be a decimal number: {e}"))
                }
            }
        )*
    };
}

impl_float_env_value!(f32, f64);

/// Conventional boolean literals, case-insensitive.
fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "t" | "true" => Some(true),
        "0" | "f" | "false" => Some(false),
        _ => None,
    }
}
