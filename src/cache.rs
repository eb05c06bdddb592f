// src/cache.rs
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::data::Corpus;
use crate::record::Record;
use crate::subjects;

/// SHA-256 over the corpus' job fields, in order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContentHash(Vec<u8>);

impl ContentHash {
    pub fn of_job_fields(records: &[Record]) -> Self {
        let mut hasher = Sha256::new();
        for r in records {
            hasher.update(r.job_field.as_bytes());
            hasher.update([0u8]); // field boundary
        }
        Self(hasher.finalize().to_vec())
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

/// Root vocabulary of the last corpus seen. Recomputed only when the
/// job-field fingerprint changes.
#[derive(Debug, Default)]
pub struct RootCache {
    key: Option<ContentHash>,
    /// Corpus version the key was last checked against.
    version: Option<u64>,
    roots: Vec<String>,
    computed: usize,
}

impl RootCache {
    pub fn new() -> Self { Self::default() }

    pub fn roots_for(&mut self, records: &[Record]) -> &[String] {
        let key = ContentHash::of_job_fields(records);
        if self.key.as_ref() != Some(&key) {
            debug!(key = %key.to_hex(), "recomputing subject roots");
            self.roots = subjects::extract_roots(records.iter().map(|r| r.job_field.as_str()));
            self.key = Some(key);
            self.computed += 1;
        }
        &self.roots
    }

    /// Same as `roots_for`, but skips hashing while the corpus version is unchanged.
    pub fn roots_for_corpus(&mut self, corpus: &Corpus) -> &[String] {
        if self.key.is_some() && self.version == Some(corpus.version()) {
            return &self.roots;
        }
        self.version = Some(corpus.version());
        self.roots_for(corpus.records())
    }

    /// Drop the cached key so the next lookup recomputes.
    pub fn invalidate(&mut self) {
        self.key = None;
        self.version = None;
    }

    /// How many times roots were actually computed.
    pub fn computed(&self) -> usize { self.computed }
}
