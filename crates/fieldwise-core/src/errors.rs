//! Error facility for the comparison engine

use thiserror::Error;

/// Result type alias using DiffError
pub type Result<T> = std::result::Result<T, DiffError>;

/// Fatal comparison errors.
///
/// The engine never fails on well-typed, non-map inputs — nil records,
/// empty lists and deep nesting are all fine. These variants signal an
/// unsupported comparison capability or a [`Record`] implementation that
/// contradicts its own declaration, and they abort the whole comparison:
/// no partial issue list is returned alongside them.
///
/// [`Record`]: fieldwise_reflect::Record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiffError {
    /// A map-kind field was encountered during traversal. Associative
    /// fields are a documented non-goal of the comparator.
    #[error("field `{field}`: map fields are not supported by the comparator")]
    UnsupportedMapField { field: String },

    /// A record implementation returned a value whose shape contradicts
    /// the field's declaration (e.g. a non-list value for a list field).
    #[error("field `{field}`: {detail}")]
    MalformedField { field: String, detail: String },
}

impl DiffError {
    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            DiffError::UnsupportedMapField { .. } => "ERR_UNSUPPORTED_MAP_FIELD",
            DiffError::MalformedField { .. } => "ERR_MALFORMED_FIELD",
        }
    }
}
