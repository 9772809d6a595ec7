//! Decoding untyped JSON argument objects into [`ResArgs`].
//!
//! Accepted keys: `name`, `value`, `uncert`, `sys`, `stat`, `unit`,
//! `sigfigs`, `decimal_places`. `uncert` may be a number, a numeric string,
//! a `{"value": .., "label": ..}` object, or a list whose entries are any of
//! those or a `[value, label]` pair.

use rw_core::{NumberInput, RwError, RwResult};
use serde_json::{Map, Value as Json};
use tracing::warn;

use crate::args::{ResArgs, UncertaintyEntry, UncertaintySpec};

const KNOWN_KEYS: [&str; 8] = [
    "name",
    "value",
    "uncert",
    "sys",
    "stat",
    "unit",
    "sigfigs",
    "decimal_places",
];

fn kind(v: Option<&Json>) -> String {
    match v {
        None | Some(Json::Null) => "nothing",
        Some(Json::Bool(_)) => "a boolean",
        Some(Json::Number(n)) if n.is_f64() => "a float",
        Some(Json::Number(_)) => "an integer",
        Some(Json::String(_)) => "a string",
        Some(Json::Array(_)) => "a list",
        Some(Json::Object(_)) => "an object",
    }
    .to_string()
}

fn mismatch(what: &'static str, expected: &'static str, found: Option<&Json>) -> RwError {
    RwError::TypeMismatch {
        what,
        expected,
        found: kind(found),
    }
}

fn number(v: &Json) -> Option<NumberInput> {
    match v {
        Json::Number(n) => n.as_f64().map(NumberInput::Float),
        Json::String(s) => Some(NumberInput::Text(s.clone())),
        _ => None,
    }
}

fn required_number(args: &Map<String, Json>, what: &'static str) -> RwResult<NumberInput> {
    let v = args.get(what);
    v.and_then(number)
        .ok_or_else(|| mismatch(what, "a float or string", v))
}

fn optional_int(args: &Map<String, Json>, what: &'static str) -> RwResult<Option<i64>> {
    match args.get(what) {
        None | Some(Json::Null) => Ok(None),
        Some(v) => v
            .as_i64()
            .map(Some)
            .ok_or_else(|| mismatch(what, "an int", Some(v))),
    }
}

fn shape(v: &Json) -> RwError {
    RwError::Shape {
        found: v.to_string(),
    }
}

fn labeled_entry(v: &Json) -> Option<UncertaintyEntry> {
    match v {
        Json::Array(pair) => match pair.as_slice() {
            [magnitude, Json::String(label)] => {
                Some(UncertaintyEntry::Labeled(number(magnitude)?, label.clone()))
            }
            _ => None,
        },
        Json::Object(obj) => {
            let magnitude = number(obj.get("value")?)?;
            let label = match obj.get("label") {
                None | Some(Json::Null) => String::new(),
                Some(Json::String(s)) => s.clone(),
                Some(_) => return None,
            };
            Some(UncertaintyEntry::Labeled(magnitude, label))
        }
        _ => None,
    }
}

fn entry(v: &Json) -> RwResult<UncertaintyEntry> {
    number(v)
        .map(UncertaintyEntry::Scalar)
        .or_else(|| labeled_entry(v))
        .ok_or_else(|| shape(v))
}

fn uncertainty(args: &Map<String, Json>) -> RwResult<UncertaintySpec> {
    let uncert = args.get("uncert").filter(|v| !v.is_null());
    let sys = args.get("sys").filter(|v| !v.is_null());
    let stat = args.get("stat").filter(|v| !v.is_null());

    match (uncert, sys, stat) {
        (None, None, None) => Ok(UncertaintySpec::None),
        (None, Some(_), Some(_)) => Ok(UncertaintySpec::SysStat {
            sys: required_number(args, "sys")?,
            stat: required_number(args, "stat")?,
        }),
        (None, Some(v), None) | (None, None, Some(v)) => Err(shape(v)),
        (Some(v), _, _) if sys.is_some() || stat.is_some() => Err(shape(v)),
        (Some(Json::Array(items)), _, _) => Ok(UncertaintySpec::List(
            items.iter().map(entry).collect::<RwResult<_>>()?,
        )),
        (Some(v), _, _) => Ok(match entry(v)? {
            UncertaintyEntry::Scalar(n) => UncertaintySpec::Scalar(n),
            UncertaintyEntry::Labeled(n, label) => UncertaintySpec::Labeled(n, label),
        }),
    }
}

impl ResArgs {
    /// Decode an argument object, checking runtime types as it goes.
    pub fn from_json(json: &Json) -> RwResult<Self> {
        let Json::Object(args) = json else {
            return Err(mismatch("arguments", "an object", Some(json)));
        };

        for key in args.keys() {
            if !KNOWN_KEYS.contains(&key.as_str()) {
                warn!(key = %key, "ignoring unknown argument");
            }
        }

        let name = match args.get("name") {
            Some(Json::String(s)) => s.clone(),
            other => return Err(mismatch("name", "a string", other)),
        };
        let value = required_number(args, "value")?;
        let uncertainty = uncertainty(args)?;
        let unit = match args.get("unit") {
            None | Some(Json::Null) => String::new(),
            Some(Json::String(s)) => s.clone(),
            other => return Err(mismatch("unit", "a string", other)),
        };

        Ok(Self {
            name,
            value,
            uncertainty,
            unit,
            sigfigs: optional_int(args, "sigfigs")?,
            decimal_places: optional_int(args, "decimal_places")?,
        })
    }
}
