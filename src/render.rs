//! BBCode output writer.
//!
//! Output is a sequence of units joined by `\n`. A unit is usually one
//! line, but a code block is a single unit that may span several lines.

use crate::block::ListKind;

/// BBCode output writer with a pre-allocated, reusable buffer.
///
/// # Example
/// ```
/// use md2steam::BbcodeWriter;
///
/// let mut writer = BbcodeWriter::new();
/// writer.heading(1, "Title");
/// writer.rule();
/// writer.text("body");
///
/// assert_eq!(writer.into_string(), "[h1]Title[/h1]\n[hr][/hr]\nbody");
/// ```
#[derive(Debug, Default)]
pub struct BbcodeWriter {
    out: String,
    units: usize,
}

impl BbcodeWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// BBCode tags are a little longer than Markdown markers, so reserve
    /// about 1.25x the input.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self::with_capacity(input_len + input_len / 4)
    }

    /// Create with explicit capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_string(String::with_capacity(capacity))
    }

    /// Reuse an existing allocation. The string is cleared first.
    #[inline]
    pub fn from_string(mut out: String) -> Self {
        out.clear();
        Self { out, units: 0 }
    }

    /// Number of units written so far.
    #[inline]
    pub fn units(&self) -> usize {
        self.units
    }

    /// Start a new unit, separating it from the previous one.
    #[inline]
    fn begin_unit(&mut self) {
        if self.units > 0 {
            self.out.push('\n');
        }
        self.units += 1;
    }

    /// Write an empty unit.
    #[inline]
    pub fn blank(&mut self) {
        self.begin_unit();
    }

    /// Write an already converted line as one unit.
    #[inline]
    pub fn text(&mut self, content: &str) {
        self.begin_unit();
        self.out.push_str(content);
    }

    /// Write `[hN]content[/hN]`.
    pub fn heading(&mut self, level: u8, content: &str) {
        debug_assert!((1..=6).contains(&level));
        let digit = char::from(b'0' + level);
        self.begin_unit();
        self.out.push_str("[h");
        self.out.push(digit);
        self.out.push(']');
        self.out.push_str(content);
        self.out.push_str("[/h");
        self.out.push(digit);
        self.out.push(']');
    }

    /// Write `[hr][/hr]`.
    #[inline]
    pub fn rule(&mut self) {
        self.begin_unit();
        self.out.push_str("[hr][/hr]");
    }

    /// Write `[list]` or `[olist]`.
    #[inline]
    pub fn list_start(&mut self, kind: ListKind) {
        self.begin_unit();
        self.out.push('[');
        self.out.push_str(kind.tag());
        self.out.push(']');
    }

    /// Write `[/list]` or `[/olist]`.
    #[inline]
    pub fn list_end(&mut self, kind: ListKind) {
        self.begin_unit();
        self.out.push_str("[/");
        self.out.push_str(kind.tag());
        self.out.push(']');
    }

    /// Write `[*] content`.
    #[inline]
    pub fn list_item(&mut self, content: &str) {
        self.begin_unit();
        self.out.push_str("[*] ");
        self.out.push_str(content);
    }

    #[inline]
    pub fn quote_start(&mut self) {
        self.begin_unit();
        self.out.push_str("[quote]");
    }

    #[inline]
    pub fn quote_end(&mut self) {
        self.begin_unit();
        self.out.push_str("[/quote]");
    }

    /// Close `depth` quote levels at once, as a single unit.
    pub fn quotes_end(&mut self, depth: usize) {
        if depth == 0 {
            return;
        }
        self.begin_unit();
        for _ in 0..depth {
            self.out.push_str("[/quote]");
        }
    }

    /// Write `[code]` + lines joined by `\n` + `[/code]` as one unit.
    pub fn code_block<'a, I>(&mut self, lines: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.begin_unit();
        self.out.push_str("[code]");
        for (i, line) in lines.into_iter().enumerate() {
            if i > 0 {
                self.out.push('\n');
            }
            self.out.push_str(line);
        }
        self.out.push_str("[/code]");
    }

    /// Get the output so far.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Consume the writer and return the output.
    #[inline]
    pub fn into_string(self) -> String {
        self.out
    }

    /// Output length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Clear the buffer for reuse, keeping its allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.out.clear();
        self.units = 0;
    }
}
