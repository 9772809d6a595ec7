//! Rounding directives supplied by the caller.

use core::fmt;
use core::num::NonZeroU32;

use crate::{RwError, RwResult};

/// Requested number of significant figures (always >= 1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SigFigs(NonZeroU32);

impl SigFigs {
    pub fn new(n: i64) -> RwResult<Self> {
        u32::try_from(n)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Self)
            .ok_or_else(|| RwError::range(format!("`sigfigs` must be positive, got {n}")))
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

/// Requested number of decimal places (always >= 0).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DecimalPlaces(u32);

impl DecimalPlaces {
    pub fn new(n: i64) -> RwResult<Self> {
        u32::try_from(n).map(Self).map_err(|_| {
            RwError::range(format!("`decimal_places` must be non-negative, got {n}"))
        })
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SigFigs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl fmt::Display for DecimalPlaces {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
