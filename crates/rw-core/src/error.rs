use thiserror::Error;

pub type RwResult<T> = Result<T, RwError>;

/// Validation failures raised while turning raw arguments into entities.
///
/// Every variant is raised before a `Measurement` is assembled, so nothing
/// partially valid ever reaches the rounder or the cache.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RwError {
    /// An argument has the wrong runtime type (e.g. a name that is not a string).
    #[error("`{what}` must be {expected}, not {found}")]
    TypeMismatch {
        what: &'static str,
        expected: &'static str,
        found: String,
    },

    /// A string that should encode a number does not parse.
    #[error("String value must be a valid number, not {literal}")]
    Format { literal: String },

    /// A number violates a domain constraint.
    #[error("Out of range: {what}")]
    Range { what: String },

    /// An uncertainty entry is neither a scalar nor a (value, label) pair.
    #[error("Each uncertainty must be a (value, label) pair or a number, not {found}")]
    Shape { found: String },
}

impl RwError {
    pub fn range(what: impl Into<String>) -> Self {
        Self::Range { what: what.into() }
    }
}
