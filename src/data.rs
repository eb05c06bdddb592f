// src/data.rs
//
// Corpus and view-layer data.
//
// - Corpus: read-only holder for the extracted records. Only a fresh scrape
//           (or reload) replaces it, through one explicit method.
// - Posting: a record plus its derived region and detail link.
// - Filter / SelectionView: row indexes into the corpus that pass the
//           search, region, subject and badge filters, in corpus order.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::consts::REGION_UNSPECIFIED;
use crate::record::Record;
use crate::region::region_of;
use crate::subjects::matches_any_root;

static NEXT_VERSION: AtomicU64 = AtomicU64::new(1);

fn next_version() -> u64 {
    NEXT_VERSION.fetch_add(1, Ordering::Relaxed)
}

/// Authoritative record list. `version` is unique per content within the
/// process: a new corpus and every `replace` draw a fresh one, so equal
/// versions mean equal records (see `cache::RootCache::roots_for_corpus`).
#[derive(Clone, Debug)]
pub struct Corpus {
    records: Vec<Record>,
    version: u64,
}

impl Default for Corpus {
    fn default() -> Self { Self::new(Vec::new()) }
}

impl Corpus {
    pub fn new(records: Vec<Record>) -> Self { Self { records, version: next_version() } }
    pub fn records(&self) -> &[Record] { &self.records }
    pub fn version(&self) -> u64 { self.version }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// The only mutator: swap in a new record list.
    pub fn replace(&mut self, records: Vec<Record>) {
        self.records = records;
        self.version = next_version();
    }

    pub fn posting<'a>(&'a self, ix: usize, base_url: &str) -> Option<Posting<'a>> {
        self.records.get(ix).map(|r| Posting::new(r, base_url))
    }
}

/// A record with its derived fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Posting<'a> {
    pub record: &'a Record,
    pub region: String,
    pub detail_link: String,
}

impl<'a> Posting<'a> {
    pub fn new(record: &'a Record, base_url: &str) -> Self {
        Self {
            record,
            region: region_of(&record.recruit_info),
            detail_link: detail_link(base_url, &record.id),
        }
    }

    /// Region or subject could not be determined. An empty job field counts
    /// as missing too.
    pub fn is_incomplete(&self) -> bool {
        self.region == REGION_UNSPECIFIED || !self.record.has_job_field()
    }
}

pub fn detail_link(base_url: &str, id: &str) -> String {
    let mut link = s!(base_url);
    link.push_str(id);
    link
}

/// Empty fields mean "don't filter on this".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filter {
    /// Plain substring of school or title.
    pub search: String,
    pub regions: Vec<String>,
    /// Subject roots, matched by prefix.
    pub subjects: Vec<String>,
    /// `None` = every badge.
    pub badge: Option<String>,
}

impl Filter {
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.regions.is_empty() && self.subjects.is_empty() && self.badge.is_none()
    }

    pub fn matches_search(&self, rec: &Record) -> bool {
        self.search.is_empty() || rec.school.contains(&self.search) || rec.title.contains(&self.search)
    }

    pub fn matches(&self, rec: &Record) -> bool {
        if !self.matches_search(rec) { return false; }
        if !self.regions.is_empty() {
            let region = region_of(&rec.recruit_info);
            if !self.regions.iter().any(|r| *r == region) { return false; }
        }
        if !self.subjects.is_empty() && !matches_any_root(&rec.job_field, &self.subjects) {
            return false;
        }
        match &self.badge {
            Some(b) => rec.badge == *b,
            None => true,
        }
    }
}

/// Zero-copy filtered view for display.
/// Holds list of row indexes into the corpus.
#[derive(Clone, Debug)]
pub struct SelectionView<'a> {
    /// Positions of kept rows in the corpus
    pub row_ix: Vec<usize>,
    raw: &'a Corpus,
}

impl<'a> SelectionView<'a> {
    pub fn from_filter(raw: &'a Corpus, filter: &Filter) -> Self {
        let row_ix = if filter.is_empty() {
            (0..raw.len()).collect()
        } else {
            raw.records()
                .iter()
                .enumerate()
                .filter(|(_, r)| filter.matches(r))
                .map(|(i, _)| i)
                .collect()
        };
        Self { row_ix, raw }
    }

    /// Checklist of postings with no region or no subject. Ignores every
    /// filter except the search term.
    pub fn missing(raw: &'a Corpus, search: &str) -> Self {
        let filter = Filter { search: s!(search), ..Filter::default() };
        let row_ix = raw.records()
            .iter()
            .enumerate()
            .filter(|(_, r)| filter.matches_search(r) && Posting::new(r, "").is_incomplete())
            .map(|(i, _)| i)
            .collect();
        Self { row_ix, raw }
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// Borrow a single record by projected index (no cloning).
    pub fn row(&self, i: usize) -> Option<&'a Record> {
        self.row_ix.get(i).and_then(|&ix| self.raw.records().get(ix))
    }

    pub fn postings(&self, base_url: &str) -> Vec<Posting<'a>> {
        self.row_ix.iter().filter_map(|&ix| self.raw.posting(ix, base_url)).collect()
    }

    /// Materialize owned records (for export boundaries).
    pub fn to_owned_records(&self) -> Vec<Record> {
        self.row_ix.iter().filter_map(|&ix| self.raw.records().get(ix).cloned()).collect()
    }
}

/// Distinct regions, sorted, with `REGION_UNSPECIFIED` moved to the end.
pub fn region_choices(records: &[Record]) -> Vec<String> {
    let set: BTreeSet<String> = records.iter().map(|r| region_of(&r.recruit_info)).collect();
    let unspecified = set.contains(REGION_UNSPECIFIED);
    let mut out: Vec<String> = set.into_iter().filter(|r| r != REGION_UNSPECIFIED).collect();
    if unspecified {
        out.push(s!(REGION_UNSPECIFIED));
    }
    out
}

/// Distinct badge texts, sorted. `""` (no badge) is a choice too.
pub fn badge_choices(records: &[Record]) -> Vec<String> {
    records.iter()
        .map(|r| r.badge.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
