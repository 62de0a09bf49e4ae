//! Inline converter for Markdown spans.
//!
//! Converts one logical line with a fixed pipeline of substitution passes,
//! each running over the output of the previous one:
//! 1. Protect code spans behind placeholder tokens
//! 2. Images, then links
//! 3. Emphasis: triple, double, then single markers
//! 4. Strikethrough
//! 5. Restore code spans as `[code]...[/code]`
//!
//! Passes are not recursive and never fail; anything that does not match a
//! rule is copied through literally.

mod code_span;
mod emphasis;
mod links;
mod strikethrough;

pub use code_span::{pick_sentinel, CodeSpanTable};
pub use emphasis::{replace_delimited, Delimiter, EMPHASIS_RULES};
pub use links::{convert_images, convert_links, parse_destination, Destination};
pub use strikethrough::{convert_strikethrough, STRIKETHROUGH};

use crate::Options;

/// Bytes that can start an inline construct. A line without any of them is
/// copied through untouched.
const SPECIAL: [bool; 256] = {
    let mut table = [false; 256];
    table[b'`' as usize] = true;
    table[b'[' as usize] = true;
    table[b'*' as usize] = true;
    table[b'_' as usize] = true;
    table[b'~' as usize] = true;
    table
};

#[inline]
fn has_special(text: &str) -> bool {
    text.bytes().any(|b| SPECIAL[b as usize])
}

/// Inline converter with reusable buffers.
///
/// One converter can be used for any number of lines; each call starts
/// from a fresh code-span table.
pub struct InlineConverter {
    code_spans: CodeSpanTable,
    /// Output of the last pass.
    front: String,
    /// Scratch target for the next pass.
    back: String,
    strikethrough: bool,
}

impl InlineConverter {
    /// Create a new inline converter with default options.
    pub fn new() -> Self {
        Self::with_options(&Options::default())
    }

    /// Create a new inline converter.
    pub fn with_options(options: &Options) -> Self {
        Self {
            code_spans: CodeSpanTable::new(),
            front: String::with_capacity(128),
            back: String::with_capacity(128),
            strikethrough: options.strikethrough,
        }
    }

    /// Convert inline spans of `text` into a new string.
    pub fn convert(&mut self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + text.len() / 4);
        self.convert_into(text, &mut out);
        out
    }

    /// Convert inline spans of `text`, appending to `out`.
    pub fn convert_into(&mut self, text: &str, out: &mut String) {
        if !has_special(text) {
            out.push_str(text);
            return;
        }

        self.front.clear();
        self.code_spans.protect(text, &mut self.front);

        self.pass(convert_images);
        self.pass(convert_links);
        for rule in EMPHASIS_RULES {
            self.pass(|text, out| replace_delimited(text, rule, out));
        }
        if self.strikethrough {
            self.pass(convert_strikethrough);
        }

        self.code_spans.restore(&self.front, text, out);
    }

    /// Run one substitution pass from `front` into `back`, then swap.
    fn pass<F>(&mut self, stage: F)
    where
        F: FnOnce(&str, &mut String),
    {
        self.back.clear();
        stage(&self.front, &mut self.back);
        std::mem::swap(&mut self.front, &mut self.back);
    }
}

impl Default for InlineConverter {
    fn default() -> Self {
        Self::new()
    }
}
