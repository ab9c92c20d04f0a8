use super::keys::{present_keys, Platform};
use super::Shortcut;

/// Whether `shortcut` matches `query` by key, title or presented keys.
///
/// Matching is a case-insensitive substring test; an empty query matches.
/// Whitespace is part of the query.
pub fn matches(shortcut: &Shortcut, query: &str, platform: Platform) -> bool {
    let query = query.to_lowercase();
    if query.is_empty() {
        return true;
    }

    shortcut.key.to_lowercase().contains(&query)
        || shortcut.title.to_lowercase().contains(&query)
        || present_keys(&shortcut.key, platform)
            .to_lowercase()
            .contains(&query)
}

/// Shortcuts matching `query`, in their original order.
pub fn search<'a>(shortcuts: &'a [Shortcut], query: &str, platform: Platform) -> Vec<&'a Shortcut> {
    shortcuts
        .iter()
        .filter(|shortcut| matches(shortcut, query, platform))
        .collect()
}
