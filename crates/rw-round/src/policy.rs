//! Default significant-figure convention.

use rw_core::{RwError, RwResult};
use serde::{Deserialize, Serialize};

/// Significant figures used when the caller gives no directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundingPolicy {
    /// Figures kept on the total uncertainty.
    pub uncertainty_sigfigs: u32,
    /// Figures kept when the total uncertainty's leading digit is `1`.
    pub leading_one_sigfigs: u32,
    /// Figures kept on a value that has no uncertainty at all.
    pub bare_value_sigfigs: u32,
}

impl Default for RoundingPolicy {
    fn default() -> Self {
        Self {
            uncertainty_sigfigs: 1,
            leading_one_sigfigs: 2,
            bare_value_sigfigs: 2,
        }
    }
}

impl RoundingPolicy {
    pub fn validate(&self) -> RwResult<()> {
        let fields = [
            ("uncertainty_sigfigs", self.uncertainty_sigfigs),
            ("leading_one_sigfigs", self.leading_one_sigfigs),
            ("bare_value_sigfigs", self.bare_value_sigfigs),
        ];
        for (what, n) in fields {
            if n < 1 {
                return Err(RwError::range(format!("`{what}` must be positive, got {n}")));
            }
        }
        Ok(())
    }

    /// Figures to keep on a total uncertainty with the given leading digit.
    pub fn uncertainty_sigfigs_for(&self, leading_digit: u32) -> u32 {
        if leading_digit == 1 {
            self.leading_one_sigfigs
        } else {
            self.uncertainty_sigfigs
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        RoundingPolicy::default().validate().unwrap();
    }

    #[test]
    fn zero_field_rejected() {
        let policy = RoundingPolicy {
            bare_value_sigfigs: 0,
            ..Default::default()
        };
        let err = policy.validate().unwrap_err();
        assert!(err.to_string().contains("bare_value_sigfigs"));
    }

    #[test]
    fn leading_one_gets_extra_figure() {
        let policy = RoundingPolicy::default();
        assert_eq!(policy.uncertainty_sigfigs_for(1), 2);
        assert_eq!(policy.uncertainty_sigfigs_for(2), 1);
        assert_eq!(policy.uncertainty_sigfigs_for(9), 1);
    }
}
