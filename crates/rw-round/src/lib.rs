//! Precision resolution and rounding for measured results.
//!
//! The rounder decides one decimal-place count per result and applies it
//! to the value and every uncertainty component alike, so the value is
//! never shown more precisely than its least precise source of doubt.
//!
//! Precedence, highest first:
//! 1. explicit `decimal_places`
//! 2. explicit `sigfigs`, counted on the controlling magnitude
//! 3. the default convention from [`RoundingPolicy`]
//!
//! The controlling magnitude is the total uncertainty when components
//! exist and the value itself otherwise. A zero controlling magnitude
//! always resolves to zero decimal places.
//!
//! Ties round half away from zero.

pub mod digits;
pub mod policy;
pub mod rounded;
pub mod rounder;

pub use digits::{
    MAX_DECIMAL_PLACES, decimal_exponent, decimal_places_for_sigfigs, format_fixed, leading_digit,
    round_to_decimal_places,
};
pub use policy::RoundingPolicy;
pub use rounded::{PrecisionRule, RoundedResult};
pub use rounder::Rounder;
