//! The reflective record trait

use crate::descriptor::{Descriptor, FieldDescriptor};
use crate::value::Value;
use std::fmt;

/// Reflective access to a structured value.
///
/// Any type with a declared schema can implement `Record` to become
/// comparable: expose its `static` [`Descriptor`], fetch field values by
/// declaration, and render a compact single-line text form. The comparison
/// engine is written purely against this trait, never against concrete
/// record types.
///
/// Implementations must be deterministic: `get` on the same record and
/// field always yields an equal [`Value`], and `render_compact` always
/// yields the same string for the same record value.
pub trait Record: fmt::Debug + Send + Sync {
    /// The descriptor shared by every value of this record type.
    fn descriptor(&self) -> &'static Descriptor;

    /// Fetch the value of a declared field.
    ///
    /// The returned value's shape must agree with the declaration: list
    /// fields yield `Value::List`, record fields yield `Value::Record` (or
    /// `Value::Nil` when unset), scalar fields yield the matching scalar
    /// variant.
    fn get(&self, field: &FieldDescriptor) -> Value;

    /// Compact, deterministic, single-line text representation, used only
    /// for human-facing rendering of reported values.
    fn render_compact(&self) -> String;
}
