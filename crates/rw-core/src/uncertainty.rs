//! Uncertainty components.

use crate::numeric::{Real, ensure_finite, quadrature_sum};
use crate::value::NumberInput;
use crate::{RwError, RwResult};

/// One source of doubt on a measured value.
///
/// An empty label means "unlabeled" (or, for derived totals, "combined").
#[derive(Debug, Clone, PartialEq)]
pub struct Uncertainty {
    magnitude: Real,
    label: String,
}

impl Uncertainty {
    /// Parse an uncertainty supplied by a caller.
    ///
    /// Strings must parse to a strictly positive number. Floats may be
    /// zero but never negative.
    pub fn new(raw: impl Into<NumberInput>, label: impl Into<String>) -> RwResult<Self> {
        let raw = raw.into();
        let magnitude = raw.parse()?;
        if raw.is_text() && magnitude <= 0.0 {
            return Err(RwError::range("uncertainty must be positive"));
        }
        Self::labeled(magnitude, label)
    }

    /// Unlabeled uncertainty from a magnitude computed in code.
    pub fn from_magnitude(magnitude: Real) -> RwResult<Self> {
        Self::labeled(magnitude, "")
    }

    fn labeled(magnitude: Real, label: impl Into<String>) -> RwResult<Self> {
        let magnitude = ensure_finite(magnitude, "uncertainty")?;
        if magnitude < 0.0 {
            return Err(RwError::range(format!(
                "uncertainty must not be negative, got {magnitude}"
            )));
        }
        Ok(Self {
            magnitude,
            label: label.into(),
        })
    }

    /// Quadrature sum of `components`; zero for an empty slice.
    pub fn total(components: &[Uncertainty]) -> Self {
        Self {
            magnitude: quadrature_sum(components.iter().map(|u| u.magnitude)),
            label: String::new(),
        }
    }

    pub fn magnitude(&self) -> Real {
        self.magnitude
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_labeled(&self) -> bool {
        !self.label.is_empty()
    }

    /// Same label, new magnitude. Used when producing rounded copies.
    pub fn with_magnitude(&self, magnitude: Real) -> RwResult<Self> {
        Self::labeled(magnitude, self.label.clone())
    }
}
