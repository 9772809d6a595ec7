//! rw-core: data model for measured quantities.
//!
//! Contains:
//! - value (measured value parsed from a float or numeric string)
//! - uncertainty (non-negative, optionally labeled uncertainty component)
//! - directive (validated `sigfigs` / `decimal_places` rounding directives)
//! - result (the `Measurement` aggregate with quadrature-sum helpers)
//! - numeric (Real + float helpers)
//! - error (shared error taxonomy)

pub mod directive;
pub mod error;
pub mod numeric;
pub mod result;
pub mod uncertainty;
pub mod value;

// Re-exports: nice ergonomics for downstream crates
pub use directive::{DecimalPlaces, SigFigs};
pub use error::{RwError, RwResult};
pub use numeric::*;
pub use result::Measurement;
pub use uncertainty::Uncertainty;
pub use value::{NumberInput, Value};
