//! Rounded results ready for presentation.

use core::fmt;

use rw_core::{Measurement, Uncertainty};

use crate::digits::format_fixed;

/// Which rule decided the decimal-place count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrecisionRule {
    ExplicitDecimalPlaces,
    ExplicitSigFigs,
    UncertaintyDefault,
    BareValueDefault,
    ZeroMagnitude,
}

impl fmt::Display for PrecisionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::ExplicitDecimalPlaces => "explicit decimal places",
            Self::ExplicitSigFigs => "explicit sigfigs",
            Self::UncertaintyDefault => "uncertainty default",
            Self::BareValueDefault => "bare value default",
            Self::ZeroMagnitude => "zero magnitude",
        };
        f.write_str(s)
    }
}

/// A measurement whose value and uncertainties all carry the same resolved
/// decimal-place count.
///
/// Only the rounder builds these, so a `RoundedResult` is never partially
/// rounded.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedResult {
    pub(crate) measurement: Measurement,
    pub(crate) total: Uncertainty,
    pub(crate) decimal_places: u32,
    pub(crate) rule: PrecisionRule,
}

impl RoundedResult {
    pub fn measurement(&self) -> &Measurement {
        &self.measurement
    }

    pub fn name(&self) -> &str {
        &self.measurement.name
    }

    pub fn unit(&self) -> &str {
        &self.measurement.unit
    }

    pub fn value(&self) -> f64 {
        self.measurement.value.magnitude()
    }

    pub fn uncertainties(&self) -> &[Uncertainty] {
        &self.measurement.uncertainties
    }

    /// Total uncertainty rounded from the unrounded components.
    pub fn total_uncertainty(&self) -> &Uncertainty {
        &self.total
    }

    pub fn decimal_places(&self) -> u32 {
        self.decimal_places
    }

    pub fn rule(&self) -> PrecisionRule {
        self.rule
    }

    pub fn value_text(&self) -> String {
        format_fixed(self.value(), self.decimal_places)
    }

    /// Fixed-point text of each component, paired with its label.
    pub fn uncertainty_texts(&self) -> Vec<(String, &str)> {
        self.uncertainties()
            .iter()
            .map(|u| (format_fixed(u.magnitude(), self.decimal_places), u.label()))
            .collect()
    }

    pub fn total_text(&self) -> String {
        format_fixed(self.total.magnitude(), self.decimal_places)
    }

    /// Same result with the components collapsed into the rounded total.
    pub fn short(&self) -> Self {
        let mut measurement = self.measurement.clone();
        measurement.uncertainties = vec![self.total.clone()];
        Self {
            measurement,
            total: self.total.clone(),
            decimal_places: self.decimal_places,
            rule: self.rule,
        }
    }
}
