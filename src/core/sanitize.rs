// src/core/sanitize.rs

/// Collapse whitespace runs to one space and trim the ends.
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

/// Strip sentence punctuation and whitespace hugging a phrase:
/// `"Rivals!! "` → `"Rivals"`. Inner punctuation is kept ("St. Paul").
pub fn trim_punct(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || matches!(c, '.' | ',' | '!' | '?' | ';' | ':' | '-' | '(' | ')'))
}

/// Filesystem-friendly stem from a recap file name: keeps ASCII letters,
/// digits, `-` and `_`; whitespace runs become one `_`.
pub fn sanitize_stem(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' { out.push(ch); last_us = false; }
        else if ch.is_whitespace() || ch == '_' { if !last_us { out.push('_'); last_us = true; } }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!("recap") } else { out }
}
