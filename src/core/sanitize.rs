// src/core/sanitize.rs

/// Collapse runs of whitespace into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Everything before the first `" ("`, e.g. `"Mythical Island (A1a) | ..."`
/// → `"Mythical Island"`. Whole string if there is no such marker.
pub fn before_paren(s: &str) -> &str {
    s.split(" (").next().unwrap_or(s)
}

/// `"pa-012"` → `"12"`: drop the set prefix and leading zeros.
pub fn bare_card_number(id: &str, set_code: &str) -> String {
    let lower = id.to_lowercase();
    let rest = lower
        .strip_prefix(set_code)
        .and_then(|r| r.strip_prefix(crate::config::consts::ID_SEP))
        .unwrap_or(&lower);
    s!(rest.trim_start_matches('0'))
}
