//! Diagnostic warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the HTML tokenizer to echo recoverable parse errors.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Record a warning key, returning true the first time it is seen.
fn first_sighting(key: String) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key)
}

/// Warn about a recoverable problem (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("HTML Tokenizer", "unexpected character '<' in state [AttributeName]");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if first_sighting(format!("[{component}] {message}")) {
        eprintln!("{}", format!("[Lark {component}] ⚠ {message}").yellow());
    }
}

/// Returns true if `warn_once` has already printed this component/message pair.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .is_some_and(|set| set.contains(&key))
}

/// Clear all recorded warnings (call before tokenizing a new document)
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
    fn test_warning_is_deduplicated() {
        let message = "duplicate-warning-probe";
        warn_once("Test", message);
        assert!(has_warned("Test", message));
        assert!(!first_sighting(format!("[Test] {message}")));
    }

    #[test]
    fn test_unseen_warning() {
        assert!(!has_warned("Test", "never-emitted-probe"));
    }
}
