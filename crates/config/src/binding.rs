//! Per-field metadata for configuration records.
//!
//! Responsibilities:
//! - Associate a record field with its serialization key and an optional annotation.
//! - Parse annotations written as semicolon-delimited `key=value` pairs or bare flags.
//!
//! Does NOT handle:
//! - Reading environment variables (see `loader/env.rs`).
//! - Decoding documents; serialization keys are informational here and must agree
//!   with the record's serde attributes.
//!
//! Invariants:
//! - Only the `env` key is interpreted by the loader. Unknown keys are preserved
//!   and ignored so other subsystems can share the same annotation.
//! - An entry is split on its first `=`; everything after it is the value.

/// Annotation key naming the environment variable bound to a field.
pub const ENV_KEY: &str = "env";

/// Declared association between a record field, its serialization key and its annotation.
///
/// Bindings are `const`-constructible so records can keep them in a static table:
///
/// ```
/// use stratum_config::FieldBinding;
///
/// const INT_VAL: FieldBinding = FieldBinding::tagged("int_val", "env=INT_VAL");
/// assert_eq!(INT_VAL.env(), Some("INT_VAL"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldBinding {
    name: &'static str,
    tag: Option<&'static str>,
}

impl FieldBinding {
    /// A field with a serialization key and no annotation.
    pub const fn new(name: &'static str) -> Self {
        Self { name, tag: None }
    }

    /// A field with a serialization key and an annotation such as `env=PORT;secret`.
    pub const fn tagged(name: &'static str, tag: &'static str) -> Self {
        Self {
            name,
            tag: Some(tag),
        }
    }

    /// Serialization key of the field. Must match the serde key of the field it binds.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Parsed annotation; empty when the field has none.
    pub fn tag(&self) -> Tag<'static> {
        Tag::parse(self.tag.unwrap_or_default())
    }

    /// Environment variable bound to this field.
    ///
    /// A bare `env` flag or an empty `env=` value binds nothing.
    pub fn env(&self) -> Option<&'static str> {
        self.tag().get(ENV_KEY).filter(|name| !name.is_empty())
    }
}

/// Borrowed view over a `key=value;flag` annotation string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tag<'a> {
    raw: &'a str,
}

impl<'a> Tag<'a> {
    pub const fn parse(raw: &'a str) -> Self {
        Self { raw }
    }

    /// Entries in declaration order. Bare flags yield `None` as their value.
    pub fn entries(&self) -> impl Iterator<Item = (&'a str, Option<&'a str>)> + 'a {
        self.raw
            .split(';')
            .filter(|entry| !entry.is_empty())
            .map(|entry| match entry.split_once('=') {
                Some((key, value)) => (key, Some(value)),
                None => (entry, None),
            })
    }

    /// Value of the first `key=value` entry with this key.
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.entries()
            .find(|(k, value)| *k == key && value.is_some())
            .and_then(|(_, value)| value)
    }

    /// Whether the key appears at all, as a flag or as a pair.
    pub fn has(&self, key: &str) -> bool {
        self.entries().any(|(k, _)| k == key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries().next().is_none()
    }
}
