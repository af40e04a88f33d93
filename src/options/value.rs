//! # Option value variants.
//!
//! Configuration options carry one of a closed set of primitive or list
//! kinds. [`OptionValue`] models that set; the dispatcher treats it as opaque
//! and only the publishing adapters look inside.
//!
//! Serialization is untagged: a `Float(0.2)` serializes as `0.2`, a
//! `Strings(["a","b"])` as `["a","b"]`. Adapters that need the kind on the
//! wire pair the value with [`OptionValue::type_label`].

use serde::Serialize;

/// Value of a single configuration option.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Strings(Vec<String>),
    Ints(Vec<i64>),
    Floats(Vec<f64>),
}

impl OptionValue {
    /// Stable wire label for the value kind.
    pub fn type_label(&self) -> &'static str {
        match self {
            OptionValue::Bool(_) => "bool",
            OptionValue::Int(_) => "int",
            OptionValue::Float(_) => "float",
            OptionValue::Str(_) => "string",
            OptionValue::Strings(_) => "strings",
            OptionValue::Ints(_) => "ints",
            OptionValue::Floats(_) => "floats",
        }
    }
}

impl From<bool> for OptionValue {
    fn from(v: bool) -> Self {
        OptionValue::Bool(v)
    }
}

impl From<i64> for OptionValue {
    fn from(v: i64) -> Self {
        OptionValue::Int(v)
    }
}

impl From<f64> for OptionValue {
    fn from(v: f64) -> Self {
        OptionValue::Float(v)
    }
}

impl From<&str> for OptionValue {
    fn from(v: &str) -> Self {
        OptionValue::Str(v.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(v: String) -> Self {
        OptionValue::Str(v)
    }
}
