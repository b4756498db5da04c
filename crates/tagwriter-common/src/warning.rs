//! Writer warnings with colored terminal output.
//!
//! Provides deduplication so a caller mistake repeated in a loop is reported
//! once. Used by the writer to flag problems that do not change the output,
//! such as releasing a writer while tags are still open.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Format the dedup key for a component/message pair.
fn warning_key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Record a warning, returning `true` the first time this exact
/// component/message pair is seen.
fn record(component: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(warning_key(component, message))
}

/// Warn about a suspicious but non-fatal situation (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("Writer", "released with 1 unclosed tag(s): div");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if record(component, message) {
        eprintln!("{}", format!("[tagwriter {component}] ⚠ {message}").yellow());
    }
}

/// Clear all recorded warnings so they can be reported again.
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deduplicates_and_clear_resets() {
        let component = "WarningTest";
        let message = "dedup check";

        clear_warnings();
        assert!(record(component, message));
        assert!(!record(component, message));
        assert!(record(component, "another message"));

        clear_warnings();
        assert!(record(component, message));
    }
}
