// src/config/settings.rs
//
// Optional `key=value` settings file. Everything is optional; a missing or
// unreadable file means "use defaults".
//
//   # recruit_scrape.conf
//   store=data/recruit_list.json
//   detail_base_url=https://example.org/view?id=
//   workers=4
//   page_size=500
//   log_file=.store/debug.log
//
// Settings are read before the log file (which they may name) is open, so
// loading never logs. Problems are kept in `Loaded` and reported once the
// subscriber is up.

use std::{fs, io, path::{Path, PathBuf}};
use tracing::{debug, warn};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    pub store: Option<String>,
    pub detail_base_url: Option<String>,
    pub workers: Option<usize>,
    pub page_size: Option<u32>,
    pub log_file: Option<String>,
    /// Lines that were skipped: unknown keys or unparsable values.
    pub ignored: Vec<String>,
}

/// Outcome of reading the settings file.
#[derive(Debug)]
pub struct Loaded {
    pub path: PathBuf,
    pub settings: Settings,
    /// Set when the file exists but could not be read.
    pub error: Option<io::Error>,
}

impl Loaded {
    /// Log what went wrong while loading. Call after `log::init`.
    pub fn report(&self) {
        if let Some(e) = &self.error {
            warn!(path = %self.path.display(), error = %e, "settings unreadable, using defaults");
        }
        for line in &self.settings.ignored {
            debug!(path = %self.path.display(), line = %line, "ignoring setting");
        }
    }
}

pub fn load(path: &Path) -> Loaded {
    let (settings, error) = if !path.exists() {
        (Settings::default(), None)
    } else {
        match fs::read_to_string(path) {
            Ok(text) => (parse(&text), None),
            Err(e) => (Settings::default(), Some(e)),
        }
    };
    Loaded { path: path.to_path_buf(), settings, error }
}

pub fn parse(text: &str) -> Settings {
    let mut cfg = Settings::default();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        let Some((key, val)) = line.split_once('=') else {
            cfg.ignored.push(s!(line));
            continue;
        };
        let val = val.trim();
        let ok = match key.trim() {
            "store" => { cfg.store = Some(s!(val)); true }
            "detail_base_url" => { cfg.detail_base_url = Some(s!(val)); true }
            "workers" => { cfg.workers = val.parse().ok(); cfg.workers.is_some() }
            "page_size" => { cfg.page_size = val.parse().ok(); cfg.page_size.is_some() }
            "log_file" => { cfg.log_file = Some(s!(val)); true }
            _ => false,
        };
        if !ok { cfg.ignored.push(s!(line)); }
    }
    cfg
}
