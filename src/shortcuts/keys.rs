//! Key-combination normalization.
//!
//! A variant is an ordered list of key-name tokens (`["Ctrl", "S"]`). The
//! normalized form is a single canonical string (`"ctrl+s"`) used as the
//! registry key: tokens are lowercased, aliases are resolved, then the list
//! is sorted so that token order does not matter.

/// Separator between tokens in a normalized combination.
pub const KEY_SEPARATOR: char = '+';

/// Canonicalize a single key token.
///
/// Browsers and platforms report the same physical key under several names;
/// this folds them into one spelling.
pub fn canonicalize_key(key: &str) -> String {
    let key_lower = key.to_lowercase();
    match key_lower.as_str() {
        " " | "spacebar" => "space",
        "scroll" => "scrolllock",
        "del" => "delete",
        "esc" => "escape",
        "medianexttrack" => "mediatracknext",
        "mediaprevioustrack" => "mediatrackprevious",
        "volumeup" => "audiovolumeup",
        "volumedown" => "audiovolumedown",
        "volumemute" => "audiovolumemute",
        "multiply" => "*",
        "add" => "+",
        "divide" => "/",
        "subtract" => "-",
        "left" => "arrowleft",
        "right" => "arrowright",
        "up" => "arrowup",
        "down" => "arrowdown",
        _ => return key_lower,
    }
    .to_string()
}

/// Normalize a variant into its canonical combination string.
pub fn normalize_keys(keys: &[&str]) -> String {
    let mut tokens: Vec<String> = keys.iter().map(|k| canonicalize_key(k)).collect();
    tokens.sort();
    tokens.join(&KEY_SEPARATOR.to_string())
}

/// Split a normalized combination back into its tokens.
///
/// A separator at the start of a token is the `+` key itself, so
/// `"++ctrl"` yields `["+", "ctrl"]`.
pub fn keys_list(combination: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for ch in combination.chars() {
        if ch == KEY_SEPARATOR && !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}
