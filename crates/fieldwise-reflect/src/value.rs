//! The comparison value sum type and its rendering contract
//!
//! [`Value`] is the closed set of everything a comparison can fetch from a
//! record or report in an issue. Equality is full deep structural equality;
//! rendering (`Display`) is the stable human-facing form used by issue
//! reports.

use crate::record::Record;
use std::fmt;
use std::sync::Arc;

/// A value fetched from a record field, or reported in an issue.
#[derive(Debug, Clone)]
pub enum Value {
    /// Absent value (unset nested record, or a nil comparison input).
    Nil,
    Bool(bool),
    Int32(i32),
    Int64(i64),
    Uint32(u32),
    Uint64(u64),
    Float(f32),
    Double(f64),
    Bytes(Vec<u8>),
    /// Enumerated value, by number.
    Enum(i32),
    Str(String),
    /// A nested record, shared so values stay cheap to clone.
    Record(Arc<dyn Record>),
    List(Vec<Value>),
    /// An error-like value carried into a report.
    Error(String),
}

/// Deep structural equality over two records: same descriptor `static` and
/// every declared field's value equal, recursively.
pub fn record_eq(a: &dyn Record, b: &dyn Record) -> bool {
    let da = a.descriptor();
    if !da.same_as(b.descriptor()) {
        return false;
    }
    da.fields().iter().all(|field| a.get(field) == b.get(field))
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int32(a), Value::Int32(b)) => a == b,
            (Value::Int64(a), Value::Int64(b)) => a == b,
            (Value::Uint32(a), Value::Uint32(b)) => a == b,
            (Value::Uint64(a), Value::Uint64(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Double(a), Value::Double(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::Enum(a), Value::Enum(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => record_eq(a.as_ref(), b.as_ref()),
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Error(a), Value::Error(b)) => a == b,
            _ => false,
        }
    }
}

impl Value {
    /// Unquoted rendering, used for scalars inside the quoted default form
    /// and for elements of non-record lists.
    fn render_bare(&self) -> String {
        match self {
            Value::Nil => "<nil>".to_string(),
            Value::Bool(v) => v.to_string(),
            Value::Int32(v) => v.to_string(),
            Value::Int64(v) => v.to_string(),
            Value::Uint32(v) => v.to_string(),
            Value::Uint64(v) => v.to_string(),
            Value::Float(v) => v.to_string(),
            Value::Double(v) => v.to_string(),
            Value::Bytes(v) => format!("{:?}", v),
            Value::Enum(v) => v.to_string(),
            Value::Str(v) => v.clone(),
            Value::Record(r) => format!("{}:{}", r.descriptor().type_name(), r.render_compact()),
            Value::List(items) => {
                let parts: Vec<String> = items.iter().map(Value::render_bare).collect();
                format!("[{}]", parts.join(", "))
            }
            Value::Error(msg) => format!("Error '{}'", msg),
        }
    }
}

impl fmt::Display for Value {
    /// Stable rendering contract:
    ///
    /// - nil → `<nil>`
    /// - a record → `<TypeName>:<compact text form>`
    /// - a list of records → `[<TypeName1>, <TypeName2>, ...]` (names only)
    /// - an error-like value → `Error '<message>'`
    /// - anything else → the default quoted form `'<value>'`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "<nil>"),
            Value::Record(r) => {
                write!(f, "{}:{}", r.descriptor().type_name(), r.render_compact())
            }
            Value::List(items) if items.iter().all(|v| matches!(v, Value::Record(_))) => {
                let names: Vec<&str> = items
                    .iter()
                    .filter_map(|v| match v {
                        Value::Record(r) => Some(r.descriptor().type_name()),
                        _ => None,
                    })
                    .collect();
                write!(f, "[{}]", names.join(", "))
            }
            Value::Error(msg) => write!(f, "Error '{}'", msg),
            other => write!(f, "'{}'", other.render_bare()),
        }
    }
}
