//! xray-tool global switches.

use lazy_static::lazy_static;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

lazy_static! {
    static ref VERBOSE: AtomicBool = AtomicBool::new(false);
}

/// Enable or disable verbose progress reports.
pub fn set_verbose(enabled: bool) {
    VERBOSE.store(enabled, Ordering::Relaxed);
}

/// Get verbose progress status.
pub fn verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Reports a step of work on a file; visible in verbose mode only.
pub fn progress(step: &str, path: &Path) {
    if verbose() {
        tracing::info!("{} '{}'", step, path.display());
    }
}
