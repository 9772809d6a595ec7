use crate::RwError;

/// Floating point type used throughout system
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, RwError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(RwError::range(format!("{what} must be finite, got {v}")))
    }
}

/// Square root of the sum of squares.
///
/// Scales by the largest magnitude first so that very large or very small
/// components do not overflow or flush to zero when squared. Terms are
/// summed in sorted order, so the result does not depend on input order.
pub fn quadrature_sum<I>(magnitudes: I) -> Real
where
    I: IntoIterator<Item = Real>,
{
    let mut values: Vec<Real> = magnitudes.into_iter().map(Real::abs).collect();
    values.sort_by(Real::total_cmp);
    let max = values.last().copied().unwrap_or(0.0);
    if max == 0.0 {
        return 0.0;
    }
    let sum: Real = values.iter().map(|v| (v / max).powi(2)).sum();
    max * sum.sqrt()
}
