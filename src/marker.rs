// Marker module for idempotent list membership edits
//
// Both the file editor and the startup hook go through these two functions, so
// "installed" means the same thing on disk and in memory.

/// Append `marker` to the end of `list` unless an exact match is already present.
///
/// Returns `true` when the list was changed.
pub fn ensure_present(list: &mut Vec<String>, marker: &str) -> bool {
    if list.iter().any(|entry| entry == marker) {
        return false;
    }
    list.push(marker.to_string());
    true
}

/// Remove every occurrence of `marker` from `list`, keeping the order of the rest.
///
/// Returns `true` when at least one entry was removed.
pub fn remove_all(list: &mut Vec<String>, marker: &str) -> bool {
    let before = list.len();
    list.retain(|entry| entry != marker);
    list.len() != before
}
