//! Decimal digit helpers: exponents, leading digits, fixed-point rounding.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use rw_core::Real;

/// Largest decimal-place count the rounder will resolve to.
pub const MAX_DECIMAL_PLACES: u32 = 300;

/// Beyond this scale `Decimal` cannot hold the number; use scaled floats.
const MAX_EXACT_DECIMAL_PLACES: u32 = 28;

/// Splits the shortest round-trip scientific form, e.g. `1.4e-1`.
fn scientific_parts(magnitude: Real) -> Option<(u32, i32)> {
    let m = magnitude.abs();
    if m == 0.0 || !m.is_finite() {
        return None;
    }
    let repr = format!("{m:e}");
    let (mantissa, exponent) = repr.split_once('e')?;
    let lead = mantissa.chars().next()?.to_digit(10)?;
    let exponent = exponent.parse::<i32>().ok()?;
    Some((lead, exponent))
}

/// Power of ten of the first significant digit (`0.14` -> `-1`).
pub fn decimal_exponent(magnitude: Real) -> Option<i32> {
    scientific_parts(magnitude).map(|(_, e)| e)
}

/// First significant digit (`0.14` -> `1`). `None` for zero or non-finite.
pub fn leading_digit(magnitude: Real) -> Option<u32> {
    scientific_parts(magnitude).map(|(d, _)| d)
}

/// Decimal places needed to show `magnitude` with `sigfigs` significant
/// figures, clamped at zero for magnitudes whose last requested digit lies
/// at or left of the ones place.
pub fn decimal_places_for_sigfigs(magnitude: Real, sigfigs: u32) -> u32 {
    let Some(exponent) = decimal_exponent(magnitude) else {
        return 0;
    };
    let places = i64::from(sigfigs) - 1 - i64::from(exponent);
    u32::try_from(places.max(0)).unwrap_or(u32::MAX)
}

fn exact(x: Real, places: u32) -> Option<Decimal> {
    if places > MAX_EXACT_DECIMAL_PLACES {
        return None;
    }
    // Display gives the shortest string that round-trips, so `0.145` stays
    // `0.145` instead of its binary neighbour.
    let mut d = Decimal::from_str(&x.to_string())
        .ok()?
        .round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    if d.is_zero() {
        d.set_sign_positive(true);
    }
    Some(d)
}

fn scaled(x: Real, places: u32) -> Real {
    // above Decimal's range every double is already an integer
    if x.fract() == 0.0 {
        return x;
    }
    let scale = 10_f64.powi(places.min(MAX_DECIMAL_PLACES) as i32);
    let shifted = x * scale;
    if !shifted.is_finite() {
        return x;
    }
    let r = shifted.round() / scale;
    if r == 0.0 { 0.0 } else { r }
}

/// Round half away from zero to `places` decimal places.
pub fn round_to_decimal_places(x: Real, places: u32) -> Real {
    // parse the decimal text so the result is the double nearest to it
    exact(x, places)
        .and_then(|d| d.to_string().parse::<Real>().ok())
        .unwrap_or_else(|| scaled(x, places))
}

/// Round like [`round_to_decimal_places`] and render with exactly `places`
/// digits after the point (trailing zeros kept).
pub fn format_fixed(x: Real, places: u32) -> String {
    match exact(x, places) {
        Some(d) => pad_fraction(d.to_string(), places),
        None => {
            let r = scaled(x, places);
            if r.fract() == 0.0 {
                // shortest round-trip text, not the full binary expansion
                pad_fraction(r.to_string(), places)
            } else {
                format!("{:.*}", places as usize, r)
            }
        }
    }
}

fn pad_fraction(mut s: String, places: u32) -> String {
    if places == 0 {
        return s;
    }
    let have = s.split_once('.').map_or(0, |(_, frac)| frac.len());
    if have == 0 {
        s.push('.');
    }
    for _ in have..places as usize {
        s.push('0');
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exponent_and_leading_digit() {
        assert_eq!(decimal_exponent(0.14), Some(-1));
        assert_eq!(leading_digit(0.14), Some(1));
        assert_eq!(leading_digit(0.3), Some(3));
        assert_eq!(decimal_exponent(1000.0), Some(3));
        assert_eq!(leading_digit(-27.0), Some(2));
        assert_eq!(decimal_exponent(0.0), None);
    }

    #[test]
    fn places_for_sigfigs() {
        assert_eq!(decimal_places_for_sigfigs(0.14, 2), 2);
        assert_eq!(decimal_places_for_sigfigs(0.24, 1), 1);
        assert_eq!(decimal_places_for_sigfigs(0.0123, 3), 4);
        assert_eq!(decimal_places_for_sigfigs(3.7, 1), 0);
        assert_eq!(decimal_places_for_sigfigs(370.0, 2), 0);
        assert_eq!(decimal_places_for_sigfigs(0.0, 2), 0);
    }

    #[test]
    fn ties_round_away_from_zero() {
        assert_eq!(round_to_decimal_places(0.145, 2), 0.15);
        assert_eq!(round_to_decimal_places(2.5, 0), 3.0);
        assert_eq!(round_to_decimal_places(-2.5, 0), -3.0);
        assert_eq!(round_to_decimal_places(1.005, 2), 1.01);
    }

    #[test]
    fn fixed_keeps_trailing_zeros() {
        assert_eq!(format_fixed(1.5, 2), "1.50");
        assert_eq!(format_fixed(2.0, 3), "2.000");
        assert_eq!(format_fixed(1234.5, 0), "1235");
        assert_eq!(format_fixed(0.14, 2), "0.14");
    }

    #[test]
    fn no_negative_zero() {
        assert_eq!(format_fixed(-0.04, 1), "0.0");
        assert_eq!(round_to_decimal_places(-0.04, 1).to_bits(), 0.0_f64.to_bits());
    }

    #[test]
    fn rounded_double_matches_its_text() {
        let cases = [
            (181_821_591.176_415_18, 8),
            (0.1 + 0.2, 1),
            (123_456.789_012_345, 5),
            (9.995, 2),
        ];
        for (x, places) in cases {
            let text: Real = format_fixed(x, places).parse().unwrap();
            assert_eq!(round_to_decimal_places(x, places), text, "{x} @ {places}");
        }
        assert_eq!(
            round_to_decimal_places(181_821_591.176_415_18, 8),
            181_821_591.176_415_18
        );
    }

    #[test]
    fn huge_numbers_beyond_decimal_range() {
        assert_eq!(format_fixed(1e29, 2), "100000000000000000000000000000.00");
        assert_eq!(format_fixed(-3e35, 0), "-300000000000000000000000000000000000");
        assert_eq!(round_to_decimal_places(1e29, 2), 1e29);
        // same text shape on both sides of the Decimal limit
        assert_eq!(format_fixed(5e28, 1), "50000000000000000000000000000.0");
    }

    #[test]
    fn tiny_numbers_fall_back_to_scaled_floats() {
        let places = 36;
        let r = round_to_decimal_places(6.62607015e-34, places);
        assert!((r - 6.63e-34).abs() < 1e-40);
        let s = format_fixed(6.62607015e-34, places);
        assert!(s.starts_with("0.000000000000000000000000000000000"));
        assert_eq!(s.split_once('.').unwrap().1.len(), places as usize);
    }
}
