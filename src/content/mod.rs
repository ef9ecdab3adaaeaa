// src/content/mod.rs
pub mod markdown;
pub mod sanitize;

pub use markdown::{markdown_to_html, to_markdown, to_sanitized_html};
pub use sanitize::{sanitize, strip_tags};
