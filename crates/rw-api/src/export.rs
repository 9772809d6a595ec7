//! LaTeX export of every cached result.

use rw_cache::ResultCache;
use tracing::debug;

use crate::config::SessionConfig;
use crate::printable::PrintableResult;

const PREAMBLE: &str = "\
% Generated result commands. Requires the siunitx package.
% Re-generate instead of editing by hand.
";

/// One `\newcommand*` per cached result, ordered by name.
pub fn export_latex(cache: &ResultCache, config: &SessionConfig) -> String {
    let results = cache.snapshot();
    debug!(count = results.len(), "exporting results as LaTeX");

    let mut out = String::new();
    if config.export_preamble {
        out.push_str(PREAMBLE);
        out.push('\n');
    }
    for result in results {
        out.push_str(&PrintableResult::new(result).to_latex_command());
        out.push('\n');
    }
    out
}
