// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod cache;
pub mod data;
pub mod error;
pub mod log;
pub mod progress;
pub mod record;
pub mod region;
pub mod scrape;
pub mod store;
pub mod subjects;

pub use record::Record;
