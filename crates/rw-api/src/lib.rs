//! Caller-facing layer: turns raw `res(...)` arguments into rounded,
//! cached, printable results.
//!
//! ```
//! use rw_api::{ResArgs, Session};
//!
//! let session = Session::default();
//! let g = session
//!     .res(ResArgs::new("g", 9.81234).uncert(0.14).unit("m/s^2"))
//!     .unwrap();
//! assert_eq!(g.to_string(), "9.81 ± 0.14 m/s^2");
//! assert!(session.get("g").is_some());
//! ```

pub mod args;
pub mod config;
pub mod export;
pub mod json_args;
pub mod name;
pub mod parse;
pub mod printable;
pub mod session;

pub use args::{ResArgs, UncertaintyEntry, UncertaintySpec};
pub use config::{ConfigError, ConfigResult, SessionConfig};
pub use export::export_latex;
pub use name::normalize_name;
pub use printable::PrintableResult;
pub use session::Session;

pub use rw_cache::ResultCache;
pub use rw_core::{RwError, RwResult};
