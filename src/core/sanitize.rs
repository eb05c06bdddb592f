// src/core/sanitize.rs

/// Collapse whitespace runs (including newlines and nbsp) into one space and trim.
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

/// Remove every occurrence of `label` and trim what is left.
pub fn strip_label(text: &str, label: &str) -> String {
    if label.is_empty() { return text.trim().to_string(); }
    text.replace(label, "").trim().to_string()
}

/// `"등록일 : 2025.01.02"` → `"2025.01.02"`. Drops every `:` along with the label.
pub fn strip_label_and_colons(text: &str, label: &str) -> String {
    strip_label(text, label).replace(':', "").trim().to_string()
}
