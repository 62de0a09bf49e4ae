//! md2steam: Markdown to Steam BBCode converter
//!
//! Converts the Markdown dialect commonly used in READMEs and patch notes
//! into the BBCode-like markup accepted by Steam descriptions, guides and
//! announcements.
//!
//! # Design Principles
//! - Line-oriented: one pass over the input, no AST
//! - Byte-level scanning with `memchr`
//! - Never fails: anything that is not recognized is copied through
//! - Linear time on all inputs
//!
//! # Example
//! ```
//! let bbcode = md2steam::markdown_to_steam_bbcode("# Hello\n- **bold** item");
//! assert_eq!(bbcode, "[h1]Hello[/h1]\n[list]\n[*] [b]bold[/b] item\n[/list]");
//! ```

pub mod block;
#[cfg(feature = "config")]
pub mod config;
pub mod cursor;
pub mod inline;
pub mod range;
pub mod render;

// Re-export primary types
pub use block::{BlockConverter, ListKind};
pub use inline::InlineConverter;
pub use range::Range;
pub use render::BbcodeWriter;

/// Conversion options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "config",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "kebab-case", deny_unknown_fields)
)]
pub struct Options {
    /// Deepest heading level emitted; deeper headings are clamped to it.
    pub max_heading_level: u8,
    /// Tab stop width used when measuring list indentation.
    pub tab_width: usize,
    /// Convert `~~text~~` to `[strike]text[/strike]`.
    pub strikethrough: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_heading_level: 3,
            tab_width: block::line::DEFAULT_TAB_WIDTH,
            strikethrough: true,
        }
    }
}

impl Options {
    /// Heading level cap, clamped to `1..=6`.
    #[inline]
    pub fn heading_level_cap(&self) -> u8 {
        self.max_heading_level.clamp(1, 6)
    }

    /// Tab stop width, at least 1.
    #[inline]
    pub fn tab_stop(&self) -> usize {
        self.tab_width.max(1)
    }
}

/// Convert a Markdown document to Steam BBCode.
///
/// This is the primary API for simple use cases.
///
/// # Example
/// ```
/// let bbcode = md2steam::markdown_to_steam_bbcode("> quote");
/// assert_eq!(bbcode, "[quote]\nquote\n[/quote]");
/// ```
pub fn markdown_to_steam_bbcode(input: &str) -> String {
    to_bbcode_with_options(input, &Options::default())
}

/// Convert a Markdown document to Steam BBCode with options.
pub fn to_bbcode_with_options(input: &str, options: &Options) -> String {
    let mut writer = BbcodeWriter::with_capacity_for(input.len());
    BlockConverter::new_with_options(input, *options).convert(&mut writer);
    writer.into_string()
}

/// Convert a Markdown document, writing into a provided buffer.
///
/// The buffer is cleared first. This avoids allocation if it has
/// sufficient capacity.
pub fn to_bbcode_into(input: &str, out: &mut Vec<u8>) {
    to_bbcode_into_with_options(input, out, &Options::default());
}

/// Convert a Markdown document into a provided buffer with options.
pub fn to_bbcode_into_with_options(input: &str, out: &mut Vec<u8>, options: &Options) {
    out.clear();
    out.reserve(input.len() + input.len() / 4);
    // An empty buffer is always valid UTF-8.
    let buffer = String::from_utf8(std::mem::take(out)).unwrap_or_default();
    let mut writer = BbcodeWriter::from_string(buffer);
    BlockConverter::new_with_options(input, *options).convert(&mut writer);
    *out = writer.into_string().into_bytes();
}

/// Convert the inline spans of a fragment (emphasis, links, images, code,
/// strikethrough). Block structure is not interpreted.
///
/// # Example
/// ```
/// assert_eq!(md2steam::convert_inline("`a**b**`"), "[code]a**b**[/code]");
/// ```
pub fn convert_inline(text: &str) -> String {
    convert_inline_with_options(text, &Options::default())
}

/// Convert the inline spans of a fragment with options.
pub fn convert_inline_with_options(text: &str, options: &Options) -> String {
    InlineConverter::with_options(options).convert(text)
}
