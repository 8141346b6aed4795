//! Roblox username extraction from Discord display names.
//!
//! Bloxlink-linked members usually carry their Roblox handle in their server nickname,
//! either as `@handle` somewhere in the name or as the first word of it.

use regex::Regex;
use std::sync::LazyLock;

// Word characters are letters, digits and underscore only. Regex `\w` would also keep
// combining marks and joiners such as the emoji variation selector U+FE0F.
static HANDLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@([\p{L}\p{N}_]+)").expect("handle pattern is valid"));

static NON_WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}_\s]").expect("non-word pattern is valid"));

/// Derives a candidate Roblox username from a display name.
///
/// The first `@handle` wins. Without one, punctuation and symbols are stripped and the
/// first remaining word is used. Word characters are Unicode letters, digits and `_`;
/// case is kept.
///
/// # Arguments
/// - `display_name` - Member's display name as shown in the guild
///
/// # Returns
/// - `Some(String)` - Non-empty candidate username
/// - `None` - Display name contains no word characters
pub fn extract_roblox_username(display_name: &str) -> Option<String> {
    if let Some(captures) = HANDLE_PATTERN.captures(display_name) {
        return Some(captures[1].to_string());
    }

    let cleaned = NON_WORD_PATTERN.replace_all(display_name, "");

    cleaned.split_whitespace().next().map(str::to_string)
}
