// src/specs/mod.rs
//! # Page specs
//!
//! Each spec knows *where the ground truth lives* on one page of the source
//! site and how to read it robustly through the `core::Node` interface.
//!
//! ## What lives here
//! - Selector choice and label handling for the listing page.
//! - Tolerant extraction: optional sub-fields are recognised by their labels,
//!   never by position, so a missing span cannot shift the others.
//! - The request contract for the listing endpoint (`ListingQuery`), as data.
//!
//! ## What does **not** live here
//! - Fetching, retries, browser automation.
//! - Persistence (`store`), filtering (`data`), the subject vocabulary (`subjects`).
//! - Per-item error isolation; a spec returns `Err` and `scrape` decides to skip.
//!
//! ## Typical call chain
//! ```text
//! CLI → scrape::collect_pages → core::Page::items
//!                             ↘ specs::recruit_list::extract_item (per item)
//!       store::save_records (outside of specs)
//! ```
pub mod recruit_list;
