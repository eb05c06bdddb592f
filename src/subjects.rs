// src/subjects.rs
//! Subject vocabulary.
//!
//! A job field like `"영어(1)명, 정보-컴퓨터"` is cut at commas and each piece is
//! cleaned down to letters (`영어`, `정보컴퓨터`). Across a whole corpus the
//! distinct tokens are folded into *roots*: the shortest tokens that every
//! other token starts with. Selecting a root then matches every posting whose
//! tokens extend it.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use crate::config::consts::{HEADCOUNT_MARK, SUBJECT_SEP};

fn noise_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // (…) groups, digit runs, headcount glyph
    RE.get_or_init(|| {
        Regex::new(&format!(r"\(.*?\)|[0-9]+|{HEADCOUNT_MARK}")).expect("static regex")
    })
}

fn non_letter_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^가-힣a-zA-Z]").expect("static regex"))
}

fn clean_segment(part: &str) -> String {
    let stripped = noise_re().replace_all(part, "");
    non_letter_re().replace_all(&stripped, "").into_owned()
}

/// Cleaned tokens of one job field, in order. Empty segments are dropped.
pub fn clean_tokens(text: &str) -> Vec<String> {
    text.split(SUBJECT_SEP)
        .map(clean_segment)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Same as `clean_tokens` for loosely typed input; anything but a string
/// yields no tokens.
pub fn clean_value(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) => clean_tokens(s),
        _ => Vec::new(),
    }
}

/// Minimal covering set of roots for the given job fields, sorted.
///
/// Tokens are visited shortest first (ties in code-point order); a token
/// becomes a root unless an existing root is a prefix of it.
pub fn extract_roots<'a, I>(job_fields: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let distinct: BTreeSet<String> = job_fields
        .into_iter()
        .flat_map(clean_tokens)
        .collect();

    // BTreeSet iteration is already lexicographic; a stable sort by length
    // keeps that as the tie-break.
    let mut by_len: Vec<String> = distinct.into_iter().collect();
    by_len.sort_by_key(|t| t.chars().count());

    let mut roots: Vec<String> = Vec::new();
    for token in by_len {
        if !roots.iter().any(|r| token.starts_with(r.as_str())) {
            roots.push(token);
        }
    }
    roots.sort();
    roots
}

/// True if any cleaned token of `job_field` starts with any of `roots`.
///
/// Callers treat an empty selection as "no subject filter" and should not
/// call this with one.
pub fn matches_any_root<S: AsRef<str>>(job_field: &str, roots: &[S]) -> bool {
    clean_tokens(job_field)
        .iter()
        .any(|t| roots.iter().any(|r| t.starts_with(r.as_ref())))
}
