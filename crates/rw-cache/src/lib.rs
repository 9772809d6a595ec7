//! rw-cache: name -> rounded result registry.

pub mod cache;

pub use cache::ResultCache;
