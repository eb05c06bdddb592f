// src/core/html.rs
// `Node` over a parsed HTML document (scraper). Selectors are parsed per call;
// an invalid selector is logged and treated as "no match".

use scraper::{ElementRef, Html, Selector};
use tracing::warn;

use super::item::Node;
use super::sanitize::normalize_ws;

fn selector(path: &str) -> Option<Selector> {
    match Selector::parse(path) {
        Ok(sel) => Some(sel),
        Err(e) => {
            warn!(selector = path, error = %e, "invalid selector");
            None
        }
    }
}

impl<'a> Node for ElementRef<'a> {
    fn select_one(&self, path: &str) -> Option<Self> {
        let sel = selector(path)?;
        self.select(&sel).next()
    }

    fn select_all(&self, path: &str) -> Vec<Self> {
        match selector(path) {
            Some(sel) => self.select(&sel).collect(),
            None => Vec::new(),
        }
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.value().attr(name).map(str::to_owned)
    }

    fn text(&self) -> String {
        normalize_ws(&ElementRef::text(self).collect::<String>())
    }
}

/// One fetched listing page.
pub struct Page {
    doc: Html,
}

impl Page {
    pub fn parse(src: &str) -> Self {
        Self { doc: Html::parse_document(src) }
    }

    /// Items matching `path`, in document order.
    pub fn items(&self, path: &str) -> Vec<ElementRef<'_>> {
        self.doc.root_element().select_all(path)
    }
}
