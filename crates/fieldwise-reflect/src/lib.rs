//! Reflective record surface for the Fieldwise comparator
//!
//! This crate provides the foundational types the comparison engine is
//! written against:
//!
//! - **Descriptor types**: `Descriptor`, `FieldDescriptor`, `FieldKind`,
//!   `Cardinality` — the schema metadata a record exposes
//! - **Record trait**: reflective access to a record's descriptor and
//!   per-field values
//! - **Value**: the closed sum type over everything a comparison can see
//!   or report, with deep structural equality and a deterministic
//!   human-facing rendering

pub mod descriptor;
pub mod record;
pub mod value;

pub use descriptor::{Cardinality, Descriptor, FieldDescriptor, FieldKind};
pub use record::Record;
pub use value::{record_eq, Value};
