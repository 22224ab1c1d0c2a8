//! Tool warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! The renderer uses it to report font fallbacks, which happen once per face
//! but would otherwise be reported for every canvas drawn in a run.

use std::collections::HashSet;
use std::sync::Mutex;

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Record `key` and report whether it had not been seen before.
fn first_occurrence(key: String) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key)
}

/// Warn about a degraded-but-recoverable condition (prints once per unique
/// message).
///
/// # Example
/// ```ignore
/// warn_once("font", "no bold system font found, using the built-in face");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if first_occurrence(format!("[{component}] {message}")) {
        eprintln!("{}", format!("[reefshot {component}] ⚠ {message}").yellow());
    }
}

/// Clear all recorded warnings (call between independent runs).
pub fn clear_warnings() {
    let mut guard = WARNED
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
