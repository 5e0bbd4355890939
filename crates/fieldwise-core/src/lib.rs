//! Fieldwise Core - Structural comparator for schema-described records
//!
//! This crate provides the recursive comparison engine test suites use to
//! assert that an "actual" record matches an "expected" record
//! field-by-field, including:
//! - Lock-step traversal of two record trees by schema descriptor
//! - Per-field-kind dispatch (scalar / nested record / repeated list)
//! - Structural short-circuits for type and list-length mismatches
//! - Identifier normalization (`uid:<n>` placeholders vs canonical form)
//! - Immutable path tracking so every discrepancy carries its exact
//!   location in the tree
//!
//! Comparison never stops at the first mismatch: the result is the full
//! ordered list of [`Issue`]s, empty when the records match.

pub mod engine;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod path;
pub mod uid;

// Re-export commonly used types
pub use engine::diff;
pub use errors::{DiffError, Result};
pub use model::{Issue, Issues};
pub use path::Path;
