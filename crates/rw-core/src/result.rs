//! The measured-result aggregate.

use crate::directive::{DecimalPlaces, SigFigs};
use crate::uncertainty::Uncertainty;
use crate::value::Value;

/// A value that was measured or calculated, with a unit and zero or more
/// uncertainty components.
///
/// `sigfigs` and `decimal_places` are independent here; deciding between
/// them is the rounder's job.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub name: String,
    pub value: Value,
    pub unit: String,
    pub uncertainties: Vec<Uncertainty>,
    pub sigfigs: Option<SigFigs>,
    pub decimal_places: Option<DecimalPlaces>,
}

impl Measurement {
    /// Compose already-validated parts. Component order is kept as given.
    pub fn new(
        name: impl Into<String>,
        value: Value,
        unit: impl Into<String>,
        uncertainties: Vec<Uncertainty>,
        sigfigs: Option<SigFigs>,
        decimal_places: Option<DecimalPlaces>,
    ) -> Self {
        Self {
            name: name.into(),
            value,
            unit: unit.into(),
            uncertainties,
            sigfigs,
            decimal_places,
        }
    }

    /// Quadrature sum of all components (zero when there are none).
    pub fn total_uncertainty(&self) -> Uncertainty {
        Uncertainty::total(&self.uncertainties)
    }

    /// Copy with all components collapsed into the single total.
    pub fn short_result(&self) -> Self {
        Self {
            uncertainties: vec![self.total_uncertainty()],
            ..self.clone()
        }
    }

    pub fn has_uncertainties(&self) -> bool {
        !self.uncertainties.is_empty()
    }
}
