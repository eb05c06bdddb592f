// src/core/item.rs

/// Read-only view of one node in a structured document.
///
/// This is the whole surface the extractor needs from whatever produced the
/// page (a parsed HTML string, a browser session, a test double). Paths are
/// CSS selectors evaluated against the node's descendants.
pub trait Node: Sized {
    /// First matching descendant.
    fn select_one(&self, path: &str) -> Option<Self>;

    /// All matching descendants, in document order.
    fn select_all(&self, path: &str) -> Vec<Self>;

    fn attr(&self, name: &str) -> Option<String>;

    /// Rendered text: whitespace runs collapsed to one space, trimmed.
    fn text(&self) -> String;
}
