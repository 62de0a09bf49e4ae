//! Block-level converter for Markdown.
//!
//! The block converter is line-oriented and handles:
//! - Fenced code blocks
//! - Blockquotes
//! - ATX headings
//! - Horizontal rules
//! - Ordered and unordered lists, nested by indentation
//! - Everything else as inline text

mod converter;
pub mod line;
mod list;

pub use converter::BlockConverter;
pub use line::ListItem;
pub use list::{ListFrame, ListKind, ListStack};
