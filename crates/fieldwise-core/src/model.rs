//! Comparison result types
//!
//! One [`Issue`] per detected discrepancy, in depth-first
//! declaration-order discovery order. Issues carry the original typed
//! values; rendering to strings happens only at the `Display` /
//! `Serialize` boundary.

use crate::path::Path;
use fieldwise_reflect::Value;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;

/// A single difference between the expected and actual record trees.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    /// The value the expected record carries at `path`.
    pub expected: Value,
    /// The value the actual record carries at `path`.
    pub actual: Value,
    /// Location of the discrepancy within the tree.
    pub path: Path,
}

/// Ordered list of discrepancies. Empty means the records matched.
pub type Issues = Vec<Issue>;

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Expected {} to be {} but got {}",
            self.path, self.expected, self.actual
        )
    }
}

impl Serialize for Issue {
    /// Machine-readable report form: path and both values in their stable
    /// rendered string forms.
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Issue", 3)?;
        state.serialize_field("path", &self.path.to_string())?;
        state.serialize_field("expected", &self.expected.to_string())?;
        state.serialize_field("actual", &self.actual.to_string())?;
        state.end()
    }
}
