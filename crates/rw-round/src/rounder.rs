//! The rounding engine.

use rw_core::{Measurement, RwError, RwResult, Uncertainty};
use tracing::{debug, trace};

use crate::digits::{
    MAX_DECIMAL_PLACES, decimal_places_for_sigfigs, leading_digit, round_to_decimal_places,
};
use crate::policy::RoundingPolicy;
use crate::rounded::{PrecisionRule, RoundedResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct Rounder {
    policy: RoundingPolicy,
}

impl Rounder {
    pub fn new(policy: RoundingPolicy) -> RwResult<Self> {
        policy.validate()?;
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &RoundingPolicy {
        &self.policy
    }

    /// Magnitude that decides precision: the total uncertainty if there are
    /// components, else the value itself.
    pub fn controlling_magnitude(measurement: &Measurement) -> f64 {
        if measurement.has_uncertainties() {
            measurement.total_uncertainty().magnitude()
        } else {
            measurement.value.magnitude().abs()
        }
    }

    /// Decide the decimal-place count for the whole measurement.
    pub fn resolve_decimal_places(
        &self,
        measurement: &Measurement,
    ) -> RwResult<(u32, PrecisionRule)> {
        let (places, rule) = self.resolve_unchecked(measurement);
        if places > MAX_DECIMAL_PLACES {
            return Err(RwError::range(format!(
                "resolved {places} decimal places for `{}`, at most {MAX_DECIMAL_PLACES} are supported",
                measurement.name
            )));
        }
        Ok((places, rule))
    }

    fn resolve_unchecked(&self, measurement: &Measurement) -> (u32, PrecisionRule) {
        // decimal_places beats sigfigs when both are given
        if let Some(dp) = measurement.decimal_places {
            return (dp.get(), PrecisionRule::ExplicitDecimalPlaces);
        }

        let controlling = Self::controlling_magnitude(measurement);
        let Some(lead) = leading_digit(controlling) else {
            return (0, PrecisionRule::ZeroMagnitude);
        };

        let (sigfigs, rule) = match measurement.sigfigs {
            Some(s) => (s.get(), PrecisionRule::ExplicitSigFigs),
            None if measurement.has_uncertainties() => (
                self.policy.uncertainty_sigfigs_for(lead),
                PrecisionRule::UncertaintyDefault,
            ),
            None => (
                self.policy.bare_value_sigfigs,
                PrecisionRule::BareValueDefault,
            ),
        };
        trace!(controlling, lead, sigfigs, "sigfig-derived precision");
        (decimal_places_for_sigfigs(controlling, sigfigs), rule)
    }

    /// Produce a new measurement with the value and every component rounded
    /// to one shared decimal-place count. The input is left untouched.
    pub fn round(&self, measurement: &Measurement) -> RwResult<RoundedResult> {
        let (places, rule) = self.resolve_decimal_places(measurement)?;
        debug!(name = %measurement.name, places, %rule, "resolved precision");

        let value = measurement
            .value
            .with_magnitude(round_to_decimal_places(measurement.value.magnitude(), places))?;
        let uncertainties = measurement
            .uncertainties
            .iter()
            .map(|u| round_uncertainty(u, places))
            .collect::<RwResult<Vec<_>>>()?;
        let total = round_uncertainty(&measurement.total_uncertainty(), places)?;

        Ok(RoundedResult {
            measurement: Measurement {
                value,
                uncertainties,
                ..measurement.clone()
            },
            total,
            decimal_places: places,
            rule,
        })
    }
}

fn round_uncertainty(u: &Uncertainty, places: u32) -> RwResult<Uncertainty> {
    u.with_magnitude(round_to_decimal_places(u.magnitude(), places))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rw_core::{DecimalPlaces, SigFigs, Value};

    fn measurement(
        value: f64,
        uncerts: &[f64],
        sigfigs: Option<i64>,
        decimal_places: Option<i64>,
    ) -> Measurement {
        Measurement::new(
            "x",
            Value::new(value).unwrap(),
            "",
            uncerts
                .iter()
                .map(|m| Uncertainty::from_magnitude(*m).unwrap())
                .collect(),
            sigfigs.map(|s| SigFigs::new(s).unwrap()),
            decimal_places.map(|d| DecimalPlaces::new(d).unwrap()),
        )
    }

    #[test]
    fn leading_one_keeps_two_figures() {
        let r = Rounder::default()
            .round(&measurement(3.14159, &[0.14], None, None))
            .unwrap();
        assert_eq!(r.decimal_places(), 2);
        assert_eq!(r.rule(), PrecisionRule::UncertaintyDefault);
        assert_eq!(r.value_text(), "3.14");
        assert_eq!(r.uncertainty_texts()[0].0, "0.14");
    }

    #[test]
    fn other_leading_digit_keeps_one_figure() {
        let r = Rounder::default()
            .round(&measurement(3.14159, &[0.24], None, None))
            .unwrap();
        assert_eq!(r.decimal_places(), 1);
        assert_eq!(r.value(), 3.1);
        assert_eq!(r.uncertainties()[0].magnitude(), 0.2);
    }

    #[test]
    fn decimal_places_beat_sigfigs() {
        let m = measurement(3.14159, &[0.0123], Some(3), Some(1));
        let (places, rule) = Rounder::default().resolve_decimal_places(&m).unwrap();
        assert_eq!(places, 1);
        assert_eq!(rule, PrecisionRule::ExplicitDecimalPlaces);
    }

    #[test]
    fn sigfigs_counted_on_total_uncertainty() {
        let m = measurement(3.14159, &[0.0123], Some(3), None);
        let r = Rounder::default().round(&m).unwrap();
        assert_eq!(r.decimal_places(), 4);
        assert_eq!(r.rule(), PrecisionRule::ExplicitSigFigs);
        assert_eq!(r.value_text(), "3.1416");
        assert_eq!(r.total_text(), "0.0123");
    }

    #[test]
    fn zero_everything_gives_zero_places() {
        let r = Rounder::default()
            .round(&measurement(0.0, &[], None, None))
            .unwrap();
        assert_eq!(r.decimal_places(), 0);
        assert_eq!(r.rule(), PrecisionRule::ZeroMagnitude);
        assert_eq!(r.value_text(), "0");
    }

    #[test]
    fn absurd_directive_is_range_error() {
        let m = measurement(1.0, &[], None, Some(1000));
        assert!(matches!(
            Rounder::default().round(&m),
            Err(RwError::Range { .. })
        ));
    }

    #[test]
    fn input_is_not_mutated() {
        let m = measurement(3.14159, &[0.24], None, None);
        let before = m.clone();
        let _ = Rounder::default().round(&m).unwrap();
        assert_eq!(m, before);
    }

    #[test]
    fn invalid_policy_rejected() {
        let policy = RoundingPolicy {
            uncertainty_sigfigs: 0,
            ..Default::default()
        };
        assert!(Rounder::new(policy).is_err());
    }
}
