// src/core/mod.rs

pub mod html;
pub mod item;
pub mod sanitize;

pub use html::Page;
pub use item::Node;
