//! Shared record fixtures for the integration suites.
//!
//! Each fixture is a plain struct with a `static` descriptor and a
//! hand-written `Record` impl, standing in for whatever schema framework a
//! real consumer binds to the reflect surface.

use fieldwise_reflect::{Descriptor, FieldDescriptor, FieldKind, Record, Value};
use std::sync::Arc;

/// Wrap a concrete fixture in the shared-ownership form `diff` takes.
pub fn rec(r: impl Record + 'static) -> Arc<dyn Record> {
    Arc::new(r)
}

// ---------------------------------------------------------------------------
// Empty — a record with no fields
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct Empty;

static EMPTY: Descriptor = Descriptor::new("Empty", &[]);

impl Record for Empty {
    fn descriptor(&self) -> &'static Descriptor {
        &EMPTY
    }

    fn get(&self, field: &FieldDescriptor) -> Value {
        unreachable!("Empty declares no field `{}`", field.name())
    }

    fn render_compact(&self) -> String {
        String::new()
    }
}

// ---------------------------------------------------------------------------
// Simple — one scalar field of each primitive kind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct Simple {
    pub i32_value: i32,
    pub i64_value: i64,
    pub u32_value: u32,
    pub u64_value: u64,
    pub bool_value: bool,
    pub str_value: String,
}

static SIMPLE: Descriptor = Descriptor::new(
    "Simple",
    &[
        FieldDescriptor::scalar("I32", FieldKind::Int32),
        FieldDescriptor::scalar("I64", FieldKind::Int64),
        FieldDescriptor::scalar("U32", FieldKind::Uint32),
        FieldDescriptor::scalar("U64", FieldKind::Uint64),
        FieldDescriptor::scalar("Bool", FieldKind::Bool),
        FieldDescriptor::scalar("Str", FieldKind::Str),
    ],
);

impl Record for Simple {
    fn descriptor(&self) -> &'static Descriptor {
        &SIMPLE
    }

    fn get(&self, field: &FieldDescriptor) -> Value {
        match field.name() {
            "I32" => Value::Int32(self.i32_value),
            "I64" => Value::Int64(self.i64_value),
            "U32" => Value::Uint32(self.u32_value),
            "U64" => Value::Uint64(self.u64_value),
            "Bool" => Value::Bool(self.bool_value),
            "Str" => Value::Str(self.str_value.clone()),
            other => unreachable!("Simple declares no field `{}`", other),
        }
    }

    fn render_compact(&self) -> String {
        format!(
            "I32:{} I64:{} U32:{} U64:{} Bool:{} Str:\"{}\"",
            self.i32_value,
            self.i64_value,
            self.u32_value,
            self.u64_value,
            self.bool_value,
            self.str_value
        )
    }
}

// ---------------------------------------------------------------------------
// Lists — repeated scalar and repeated record fields
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct Lists {
    pub len: Vec<i32>,
    pub missing: Vec<i32>,
    pub mistake: Vec<Simple>,
}

static LISTS: Descriptor = Descriptor::new(
    "Lists",
    &[
        FieldDescriptor::list("Len", FieldKind::Int32),
        FieldDescriptor::list("Missing", FieldKind::Int32),
        FieldDescriptor::list("Mistake", FieldKind::Record),
    ],
);

impl Record for Lists {
    fn descriptor(&self) -> &'static Descriptor {
        &LISTS
    }

    fn get(&self, field: &FieldDescriptor) -> Value {
        match field.name() {
            "Len" => Value::List(self.len.iter().copied().map(Value::Int32).collect()),
            "Missing" => Value::List(self.missing.iter().copied().map(Value::Int32).collect()),
            "Mistake" => Value::List(
                self.mistake
                    .iter()
                    .map(|s| Value::Record(rec(s.clone())))
                    .collect(),
            ),
            other => unreachable!("Lists declares no field `{}`", other),
        }
    }

    fn render_compact(&self) -> String {
        format!(
            "Len:{:?} Missing:{:?} Mistake:[{}]",
            self.len,
            self.missing,
            self.mistake.len()
        )
    }
}

// ---------------------------------------------------------------------------
// Inventory / Loc — nested records under a repeated field, with uid strings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct Loc {
    pub uid: String,
    pub name: String,
    pub parent: String,
}

static LOC: Descriptor = Descriptor::new(
    "Loc",
    &[
        FieldDescriptor::scalar("uid", FieldKind::Str),
        FieldDescriptor::scalar("name", FieldKind::Str),
        FieldDescriptor::scalar("parent", FieldKind::Str),
    ],
);

impl Record for Loc {
    fn descriptor(&self) -> &'static Descriptor {
        &LOC
    }

    fn get(&self, field: &FieldDescriptor) -> Value {
        match field.name() {
            "uid" => Value::Str(self.uid.clone()),
            "name" => Value::Str(self.name.clone()),
            "parent" => Value::Str(self.parent.clone()),
            other => unreachable!("Loc declares no field `{}`", other),
        }
    }

    fn render_compact(&self) -> String {
        format!(
            "uid:\"{}\" name:\"{}\" parent:\"{}\"",
            self.uid, self.name, self.parent
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct Inventory {
    pub locs: Vec<Loc>,
}

static INVENTORY: Descriptor = Descriptor::new(
    "Inventory",
    &[FieldDescriptor::list("locs", FieldKind::Record)],
);

impl Record for Inventory {
    fn descriptor(&self) -> &'static Descriptor {
        &INVENTORY
    }

    fn get(&self, field: &FieldDescriptor) -> Value {
        match field.name() {
            "locs" => Value::List(
                self.locs
                    .iter()
                    .map(|l| Value::Record(rec(l.clone())))
                    .collect(),
            ),
            other => unreachable!("Inventory declares no field `{}`", other),
        }
    }

    fn render_compact(&self) -> String {
        format!("locs:[{}]", self.locs.len())
    }
}

// ---------------------------------------------------------------------------
// Uids — a repeated string field carrying identifier encodings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct Uids {
    pub uid: Vec<String>,
}

static UIDS: Descriptor =
    Descriptor::new("Uids", &[FieldDescriptor::list("uid", FieldKind::Str)]);

impl Record for Uids {
    fn descriptor(&self) -> &'static Descriptor {
        &UIDS
    }

    fn get(&self, field: &FieldDescriptor) -> Value {
        match field.name() {
            "uid" => Value::List(self.uid.iter().cloned().map(Value::Str).collect()),
            other => unreachable!("Uids declares no field `{}`", other),
        }
    }

    fn render_compact(&self) -> String {
        format!("uid:{:?}", self.uid)
    }
}

// ---------------------------------------------------------------------------
// Holder — an optional singular nested record
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct Holder {
    pub inner: Option<Simple>,
}

static HOLDER: Descriptor =
    Descriptor::new("Holder", &[FieldDescriptor::record("inner")]);

impl Record for Holder {
    fn descriptor(&self) -> &'static Descriptor {
        &HOLDER
    }

    fn get(&self, field: &FieldDescriptor) -> Value {
        match field.name() {
            "inner" => self
                .inner
                .as_ref()
                .map(|s| Value::Record(rec(s.clone())))
                .unwrap_or(Value::Nil),
            other => unreachable!("Holder declares no field `{}`", other),
        }
    }

    fn render_compact(&self) -> String {
        match &self.inner {
            Some(inner) => format!("inner:{{{}}}", inner.render_compact()),
            None => "inner:<unset>".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// WithMap — declares an associative field, which the engine must reject
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct WithMap {
    pub label: String,
    pub attrs: Vec<(String, String)>,
}

static WITH_MAP: Descriptor = Descriptor::new(
    "WithMap",
    &[
        FieldDescriptor::scalar("label", FieldKind::Str),
        FieldDescriptor::map("attrs", FieldKind::Str),
    ],
);

impl Record for WithMap {
    fn descriptor(&self) -> &'static Descriptor {
        &WITH_MAP
    }

    fn get(&self, field: &FieldDescriptor) -> Value {
        match field.name() {
            "label" => Value::Str(self.label.clone()),
            // Never inspected: the engine aborts on the map declaration
            // before fetching a shape it could compare.
            "attrs" => Value::List(
                self.attrs
                    .iter()
                    .map(|(_, v)| Value::Str(v.clone()))
                    .collect(),
            ),
            other => unreachable!("WithMap declares no field `{}`", other),
        }
    }

    fn render_compact(&self) -> String {
        format!("label:\"{}\" attrs:[{}]", self.label, self.attrs.len())
    }
}
