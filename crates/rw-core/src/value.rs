//! Measured values.

use core::fmt;

use crate::numeric::{Real, ensure_finite};
use crate::{RwError, RwResult};

/// A number as the caller supplied it: either a float or a numeric string.
#[derive(Debug, Clone, PartialEq)]
pub enum NumberInput {
    Float(Real),
    Text(String),
}

impl NumberInput {
    /// Parse into a finite float.
    ///
    /// Strings are trimmed before parsing; a string that does not parse
    /// yields [`RwError::Format`] carrying the literal.
    pub fn parse(&self) -> RwResult<Real> {
        let v = match self {
            Self::Float(v) => *v,
            Self::Text(s) => s.trim().parse::<Real>().map_err(|_| RwError::Format {
                literal: s.clone(),
            })?,
        };
        ensure_finite(v, "numeric input")
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }
}

impl From<Real> for NumberInput {
    fn from(v: Real) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for NumberInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for NumberInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl fmt::Display for NumberInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// A single measured value.
///
/// Immutable once constructed; `magnitude` is always finite.
#[derive(Debug, Clone, PartialEq)]
pub struct Value {
    raw: NumberInput,
    magnitude: Real,
}

impl Value {
    pub fn new(raw: impl Into<NumberInput>) -> RwResult<Self> {
        let raw = raw.into();
        let magnitude = raw.parse()?;
        Ok(Self { raw, magnitude })
    }

    /// The input this value was parsed from.
    pub fn raw(&self) -> &NumberInput {
        &self.raw
    }

    pub fn magnitude(&self) -> Real {
        self.magnitude
    }

    /// Same raw input, new magnitude. Used when producing rounded copies.
    pub fn with_magnitude(&self, magnitude: Real) -> RwResult<Self> {
        Ok(Self {
            raw: self.raw.clone(),
            magnitude: ensure_finite(magnitude, "value")?,
        })
    }
}
