//! Rich-text to Markdown conversion.
//!
//! This is the core of the crate: a recursive-descent translation of
//! Slack's rich-text document model (blocks → elements → section
//! elements) into byte-stable Markdown.
//!
//! - [`style`] — composable inline style wrappers
//! - [`convert`] — one pure converter per element kind, plus the
//!   per-message converter
//! - [`document`] — orders channels, messages, and thread replies, and
//!   streams the assembled document to a writer

pub mod convert;
pub mod document;
pub mod style;

pub use convert::{
    convert_list, convert_message, convert_preformatted, convert_quote, convert_section,
};
pub use document::{write_document, write_file};
pub use style::decorate;
