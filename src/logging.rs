//! Optional `tracing` subscriber for debugging inspections from Python.
//!
//! The library itself only emits `trace!`/`debug!` events. Nothing is printed
//! unless the host calls [`init_tracing`] (exposed to Python as
//! `variable_inspector.init_tracing`).

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable read before any caller-supplied filter
pub const LOG_ENV_VAR: &str = "VARIABLE_INSPECTOR_LOG";

pub const DEFAULT_FILTER: &str = "warn";

/// Filter from `VARIABLE_INSPECTOR_LOG`, else `fallback`, else `warn`.
pub fn build_filter(fallback: Option<&str>) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV_VAR) {
        return Ok(filter);
    }
    let directives = fallback.unwrap_or(DEFAULT_FILTER);
    EnvFilter::try_new(directives).with_context(|| format!("invalid log filter '{directives}'"))
}

/// Install a compact stderr subscriber.
///
/// Returns `false` when a global subscriber was already installed (by an
/// earlier call or by the host process); that is not an error.
pub fn init_tracing(fallback: Option<&str>) -> Result<bool> {
    let filter = build_filter(fallback)?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .is_ok();

    Ok(installed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_is_reported() {
        if std::env::var_os(LOG_ENV_VAR).is_some() {
            return;
        }
        let err = build_filter(Some("variable_inspector=notalevel")).unwrap_err();
        assert!(err.to_string().contains("invalid log filter"));
    }

    #[test]
    fn test_init_tracing_is_repeatable() {
        // Only the first successful call installs; later calls are no-ops
        init_tracing(Some("debug")).unwrap();
        assert!(!init_tracing(Some("trace")).unwrap());
    }
}
