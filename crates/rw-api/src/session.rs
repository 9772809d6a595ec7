//! The `res` entry point.

use std::sync::Arc;

use rw_cache::ResultCache;
use rw_core::RwResult;
use rw_round::Rounder;
use tracing::{debug, warn};

use crate::args::ResArgs;
use crate::config::SessionConfig;
use crate::export::export_latex;
use crate::name::normalize_name;
use crate::parse::assemble;
use crate::printable::PrintableResult;

/// One document-generation session: a rounder plus the cache it fills.
///
/// The cache is injectable so several sessions (or threads) can share one
/// registry; `reset` tears the registry down explicitly.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    rounder: Rounder,
    cache: Arc<ResultCache>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            config: SessionConfig::default(),
            rounder: Rounder::default(),
            cache: Arc::new(ResultCache::new()),
        }
    }
}

impl Session {
    pub fn new(config: SessionConfig) -> RwResult<Self> {
        Self::with_cache(config, Arc::new(ResultCache::new()))
    }

    pub fn with_cache(config: SessionConfig, cache: Arc<ResultCache>) -> RwResult<Self> {
        let rounder = Rounder::new(config.rounding)?;
        Ok(Self {
            config,
            rounder,
            cache,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn cache(&self) -> &Arc<ResultCache> {
        &self.cache
    }

    /// Validate, assemble, round and cache one result.
    ///
    /// Nothing is cached unless every step succeeds.
    pub fn res(&self, args: ResArgs) -> RwResult<PrintableResult> {
        let raw_name = args.name.clone();
        let measurement = assemble(args)
            .inspect_err(|err| warn!(name = %raw_name, %err, "rejected result"))?;
        let rounded = Arc::new(self.rounder.round(&measurement)?);

        let name = rounded.name().to_string();
        debug!(%name, places = rounded.decimal_places(), "caching result");
        self.cache.add(name, Arc::clone(&rounded));

        Ok(PrintableResult::new(rounded))
    }

    /// Decode a JSON argument object and run [`Session::res`] on it.
    pub fn res_json(&self, json: &serde_json::Value) -> RwResult<PrintableResult> {
        self.res(ResArgs::from_json(json)?)
    }

    /// Look up a previously produced result by the name it was created
    /// with. The key is normalized first, so the raw and normalized
    /// spellings both resolve.
    pub fn get(&self, name: &str) -> Option<PrintableResult> {
        self.cache.get(&normalize_name(name)).map(PrintableResult::new)
    }

    pub fn export_latex(&self) -> String {
        export_latex(&self.cache, &self.config)
    }

    /// Drop every cached result.
    pub fn reset(&self) {
        self.cache.clear();
    }
}
