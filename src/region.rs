// src/region.rs
use serde_json::Value;

use crate::config::consts::{REGION_SEP, REGION_UNSPECIFIED};

/// `"시급 15,000원 | 안산시"` → `"안산시"`: the trimmed text after the last `|`.
/// No separator → `REGION_UNSPECIFIED`.
pub fn region_of(recruit_info: &str) -> String {
    match recruit_info.rsplit_once(REGION_SEP) {
        Some((_, region)) => s!(region.trim()),
        None => s!(REGION_UNSPECIFIED),
    }
}

/// `region_of` for loosely typed input; non-strings are unspecified.
pub fn region_of_value(value: &Value) -> String {
    match value {
        Value::String(s) => region_of(s),
        _ => s!(REGION_UNSPECIFIED),
    }
}
