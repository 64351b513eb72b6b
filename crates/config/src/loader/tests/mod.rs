//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test search path resolution through the `Loader` builder.
//! - Test file decoding followed by environment overlay, and their precedence.
//! - Test the untyped-destination and validation paths.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::Deserialize;

use crate::binding::FieldBinding;
use crate::loader::error::ConfigError;
use crate::record::{Record, Visitor};


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Every environment variable bound by `SampleConfig`.
pub const SAMPLE_ENV_VARS: [&str; 5] = [
    "STRING_VAL",
    "INT_VAL",
    "FLOAT_VAL",
    "BOOL_VAL",
    "NESTED_STRING_VAL",
];

/// The same variables, all unset, for `temp_env::with_vars`.
pub fn unset_sample_env() -> Vec<(&'static str, Option<&'static str>)> {
    SAMPLE_ENV_VARS.iter().map(|var| (*var, None)).collect()
}

pub const SAMPLE_DOCUMENT: &str = "\
string_val: TESTSTRING
int_val: 666
float_val: 2.72
bool_val: true
nested:
  nested_string_val: NESTEDSTRING
";

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NestedConfig {
    pub nested_string_val: String,
}

impl Record for NestedConfig {
    fn visit(&mut self, visitor: &mut dyn Visitor) -> Result<(), ConfigError> {
        const NESTED_STRING_VAL: FieldBinding =
            FieldBinding::tagged("nested_string_val", "env=NESTED_STRING_VAL");
        visitor.value(&NESTED_STRING_VAL, &mut self.nested_string_val)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SampleConfig {
    pub string_val: String,
    pub int_val: i64,
    pub float_val: f64,
    pub bool_val: bool,
    pub nested: NestedConfig,
}

impl Record for SampleConfig {
    fn visit(&mut self, visitor: &mut dyn Visitor) -> Result<(), ConfigError> {
        const STRING_VAL: FieldBinding = FieldBinding::tagged("string_val", "env=STRING_VAL");
        const INT_VAL: FieldBinding = FieldBinding::tagged("int_val", "env=INT_VAL");
        const FLOAT_VAL: FieldBinding = FieldBinding::tagged("float_val", "env=FLOAT_VAL");
        const BOOL_VAL: FieldBinding = FieldBinding::tagged("bool_val", "env=BOOL_VAL");
        const NESTED: FieldBinding = FieldBinding::new("nested");

        visitor.value(&STRING_VAL, &mut self.string_val)?;
        visitor.value(&INT_VAL, &mut self.int_val)?;
        visitor.value(&FLOAT_VAL, &mut self.float_val)?;
        visitor.value(&BOOL_VAL, &mut self.bool_val)?;
        visitor.record(&NESTED, &mut self.nested)
    }
}

/// The record `SAMPLE_DOCUMENT` decodes to.
pub fn sample_from_document() -> SampleConfig {
    SampleConfig {
        string_val: "TESTSTRING".to_string(),
        int_val: 666,
        float_val: 2.72,
        bool_val: true,
        nested: NestedConfig {
            nested_string_val: "NESTEDSTRING".to_string(),
        },
    }
}

/// Writes `content` to `dir/filename` and returns the full path.
pub fn write_config(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let path = dir.join(filename);
    std::fs::write(&path, content).unwrap();
    path
}
