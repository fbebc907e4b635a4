// src/core/sanitize.rs

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

/// Anchor id from heading text.
/// Drops everything but ASCII letters, digits and spaces, turns each
/// remaining space into `_`, lowercases. "Getting Started!" -> "getting_started".
/// May return an empty string.
pub fn anchor_from_text(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .map(|c| if c == ' ' { '_' } else { c.to_ascii_lowercase() })
        .collect()
}

/// Shorten a label for log lines.
pub fn preview(s: &str, max: usize) -> String {
    let s = normalize_ws(s);
    match s.char_indices().nth(max) {
        Some((cut, _)) => join!(&s[..cut], "..."),
        None => s,
    }
}
