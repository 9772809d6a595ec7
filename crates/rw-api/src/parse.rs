//! Validation of raw arguments into core entities.
//!
//! Every check runs before anything is assembled, so a failure never leaves
//! a partially valid measurement behind.

use rw_core::{
    DecimalPlaces, Measurement, NumberInput, RwError, RwResult, SigFigs, Uncertainty, Value,
};

use crate::args::{ResArgs, UncertaintyEntry, UncertaintySpec};
use crate::name::normalize_name;

/// Normalize a result name. The normalized form must not be empty.
pub fn parse_name(name: &str) -> RwResult<String> {
    let parsed = normalize_name(name);
    if parsed.is_empty() {
        return Err(RwError::range(format!(
            "name {name:?} contains no letters or digits"
        )));
    }
    Ok(parsed)
}

pub fn parse_value(value: NumberInput) -> RwResult<Value> {
    Value::new(value)
}

/// Labels go through the same normalization as names but may end up empty.
pub fn parse_uncertainties(spec: UncertaintySpec) -> RwResult<Vec<Uncertainty>> {
    spec.into_entries()
        .into_iter()
        .map(|entry| match entry {
            UncertaintyEntry::Scalar(v) => Uncertainty::new(v, ""),
            UncertaintyEntry::Labeled(v, label) => Uncertainty::new(v, normalize_name(&label)),
        })
        .collect()
}

pub fn parse_sigfigs(sigfigs: Option<i64>) -> RwResult<Option<SigFigs>> {
    sigfigs.map(SigFigs::new).transpose()
}

pub fn parse_decimal_places(decimal_places: Option<i64>) -> RwResult<Option<DecimalPlaces>> {
    decimal_places.map(DecimalPlaces::new).transpose()
}

/// Validate every argument and compose the measurement.
pub fn assemble(args: ResArgs) -> RwResult<Measurement> {
    let name = parse_name(&args.name)?;
    let value = parse_value(args.value)?;
    let uncertainties = parse_uncertainties(args.uncertainty)?;
    let sigfigs = parse_sigfigs(args.sigfigs)?;
    let decimal_places = parse_decimal_places(args.decimal_places)?;

    Ok(Measurement::new(
        name,
        value,
        args.unit,
        uncertainties,
        sigfigs,
        decimal_places,
    ))
}
