// src/record.rs
use serde::{Deserialize, Serialize};

use crate::config::consts::NO_CONTENT;

/// One normalized posting. Every field is always present; values that could
/// not be read are `""` (or `NO_CONTENT` for `job_field`).
///
/// Region and detail link are derived on demand (see `data::Posting`) and
/// are not part of the persisted shape.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Record {
    pub id: String,
    pub school: String,
    pub title: String,
    pub badge: String,
    pub job_field: String,
    pub recruit_info: String,
    pub recruit_count: String,
    pub apply_period: String,
    pub work_period: String,
    pub phone: String,
    pub registered_date: String,
}

impl Record {
    /// Re-apply the `job_field` sentinel. Stored files may carry `""` or omit
    /// the key entirely.
    pub fn normalized(mut self) -> Self {
        self.job_field = job_field_or_sentinel(self.job_field);
        self
    }

    pub fn has_job_field(&self) -> bool {
        !self.job_field.is_empty() && self.job_field != NO_CONTENT
    }
}

/// `""` → `NO_CONTENT`; anything else unchanged.
pub fn job_field_or_sentinel(text: String) -> String {
    if text.is_empty() { s!(NO_CONTENT) } else { text }
}
