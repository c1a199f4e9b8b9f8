//! Console logging for constraint construction and activation.

use std::str::FromStr;
use std::sync::{Mutex, Once, OnceLock};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::INFO;

// ============================================================================
// Global State
// ============================================================================

static TRACING_INSTALLED: Once = Once::new();
static LOG_LEVEL: OnceLock<Mutex<LevelFilter>> = OnceLock::new();

fn log_level_handle() -> &'static Mutex<LevelFilter> {
    LOG_LEVEL.get_or_init(|| Mutex::new(DEFAULT_LOG_LEVEL))
}

/// Update the level used when `RUST_LOG` is not set.
///
/// Unrecognised levels fall back to `info`. Only affects a subsequent
/// [`install_tracing`] call.
pub fn set_log_level(level: &str) {
    let parsed = LevelFilter::from_str(level).unwrap_or(DEFAULT_LOG_LEVEL);
    if let Ok(mut guard) = log_level_handle().lock() {
        *guard = parsed;
    }
}

/// The level used when `RUST_LOG` is not set.
#[must_use]
pub fn log_level() -> LevelFilter {
    log_level_handle()
        .lock()
        .map_or(DEFAULT_LOG_LEVEL, |guard| *guard)
}

// ============================================================================
// Installation
// ============================================================================

/// Install a console subscriber for `waterui-anchor` diagnostics (idempotent).
///
/// The filter is read from `RUST_LOG`, falling back to [`log_level`]. Use
/// `RUST_LOG=waterui_anchor=trace` to see every activated constraint.
pub fn install_tracing() {
    TRACING_INSTALLED.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::default().add_directive(log_level().into()));

        let console = fmt::layer().with_target(true).with_filter(filter);

        if tracing_subscriber::registry()
            .with(console)
            .try_init()
            .is_err()
        {
            eprintln!("waterui-anchor tracing subscriber failed to initialize");
        }
    });
}
