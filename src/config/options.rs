// src/config/options.rs
use std::path::{ Path, PathBuf };

use super::consts::*;
use super::settings::Settings;
use crate::data::Filter;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub store: PathBuf,
    pub log_file: Option<PathBuf>,
    pub detail_base_url: String,
    pub filter: Filter,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            scrape: ScrapeOptions::default(),
            store: PathBuf::from(DEFAULT_STORE_FILE),
            log_file: None,
            detail_base_url: s!(DETAIL_BASE_URL),
            filter: Filter::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// Saved listing pages to parse, in order.
    pub inputs: Vec<PathBuf>,
    pub workers: usize,
    /// Requested rows per listing page (form field `pageIndex`).
    pub page_size: u32,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            workers: WORKERS,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl AppOptions {
    /// Layer a settings file over the defaults. CLI flags are applied after this.
    pub fn apply_settings(&mut self, settings: &Settings) {
        if let Some(store) = &settings.store { self.set_store(store); }
        if let Some(url) = &settings.detail_base_url { self.detail_base_url = url.clone(); }
        if let Some(w) = settings.workers { self.scrape.workers = w.max(1); }
        if let Some(n) = settings.page_size { self.scrape.page_size = n; }
        if let Some(log) = &settings.log_file { self.log_file = Some(PathBuf::from(log)); }
    }

    /// Accept either a file path or a directory; a directory gets the default file name.
    pub fn set_store(&mut self, text: &str) {
        let p = Path::new(text.trim());
        self.store = if looks_like_dir(p) {
            p.join(DEFAULT_STORE_FILE)
        } else {
            p.to_path_buf()
        };
    }
}

/// Existing directory, or a path typed with a trailing separator.
fn looks_like_dir(p: &Path) -> bool {
    if p.is_dir() { return true; }
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_dir_hint_gets_default_file() {
        let mut opts = AppOptions::default();
        opts.set_store("out/");
        assert_eq!(opts.store, Path::new("out").join(DEFAULT_STORE_FILE));

        opts.set_store("out/mine.json");
        assert_eq!(opts.store, PathBuf::from("out/mine.json"));
    }

    #[test]
    fn settings_override_defaults() {
        let mut opts = AppOptions::default();
        let settings = Settings {
            store: Some(s!("data.json")),
            workers: Some(0),
            page_size: Some(50),
            ..Settings::default()
        };
        opts.apply_settings(&settings);
        assert_eq!(opts.store, PathBuf::from("data.json"));
        assert_eq!(opts.scrape.workers, 1);
        assert_eq!(opts.scrape.page_size, 50);
        assert_eq!(opts.detail_base_url, DETAIL_BASE_URL);
    }
}
