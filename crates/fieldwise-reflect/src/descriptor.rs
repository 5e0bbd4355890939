//! Schema descriptor types
//!
//! A record type declares its shape through a [`Descriptor`]: a type name
//! plus an ordered list of [`FieldDescriptor`]s. Descriptors are `static`
//! data — every value of a given record type returns the same descriptor,
//! and descriptor identity (pointer identity) is what "same shape" means.

use serde::{Deserialize, Serialize};

/// Element kind of a field.
///
/// For list fields this is the kind of the elements, not of the list
/// itself; the list-ness is carried by [`Cardinality`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    Int32,
    Int64,
    Uint32,
    Uint64,
    Bool,
    Float,
    Double,
    Bytes,
    Enum,
    Str,
    /// A nested record; the comparator recurses into these.
    Record,
}

/// How many values a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cardinality {
    Singular,
    List,
    /// Associative fields are declared but not supported by the comparator;
    /// encountering one aborts a comparison.
    Map,
}

/// Declaration of a single field: name, element kind, cardinality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    name: &'static str,
    kind: FieldKind,
    cardinality: Cardinality,
}

impl FieldDescriptor {
    /// Declare a singular scalar field.
    pub const fn scalar(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            cardinality: Cardinality::Singular,
        }
    }

    /// Declare a singular nested-record field.
    pub const fn record(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Record,
            cardinality: Cardinality::Singular,
        }
    }

    /// Declare a repeated field with the given element kind.
    pub const fn list(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            cardinality: Cardinality::List,
        }
    }

    /// Declare an associative field with the given value kind.
    pub const fn map(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            cardinality: Cardinality::Map,
        }
    }

    /// Declared text name of the field.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Element kind of the field.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Cardinality of the field.
    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }
}

/// Type-level schema metadata for a record type.
#[derive(Debug)]
pub struct Descriptor {
    type_name: &'static str,
    fields: &'static [FieldDescriptor],
}

impl Descriptor {
    /// Build a descriptor. Intended for `static` items:
    ///
    /// ```
    /// use fieldwise_reflect::{Descriptor, FieldDescriptor, FieldKind};
    ///
    /// static SHELF: Descriptor = Descriptor::new(
    ///     "Shelf",
    ///     &[FieldDescriptor::scalar("name", FieldKind::Str)],
    /// );
    /// ```
    pub const fn new(type_name: &'static str, fields: &'static [FieldDescriptor]) -> Self {
        Self { type_name, fields }
    }

    /// Declared type name.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Field declarations, in declaration order.
    pub fn fields(&self) -> &'static [FieldDescriptor] {
        self.fields
    }

    /// Descriptor identity. Two records have the same shape iff their
    /// descriptors are the same `static`.
    pub fn same_as(&self, other: &Descriptor) -> bool {
        std::ptr::eq(self, other)
    }
}
