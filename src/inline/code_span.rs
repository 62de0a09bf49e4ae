//! Code span protection and restoration.
//!
//! Code spans have highest precedence among inline elements: before any
//! other rule runs, each `` `code` `` is swapped for a placeholder token so
//! that emphasis, link and image rules cannot match inside it. After all
//! rules ran the tokens are swapped back for `[code]...[/code]`.
//!
//! A token is `S<index>S` where `S` is a sentinel char that does not occur
//! anywhere in the line being converted, so user text can never be mistaken
//! for a token.

use memchr::memchr;

use crate::Range;

/// Private-use planes searched for a sentinel, in order.
const SENTINEL_RANGES: [(u32, u32); 2] = [(0xE000, 0xF8FF), (0xF0000, 0xFFFFD)];

/// Pick a sentinel that does not occur in `text`.
///
/// Returns `None` only if every private-use code point appears in the text.
pub fn pick_sentinel(text: &str) -> Option<char> {
    SENTINEL_RANGES.iter().find_map(|&(lo, hi)| first_free(text, lo, hi))
}

/// Lowest code point in `lo..=hi` absent from `text`, found in one pass.
fn first_free(text: &str, lo: u32, hi: u32) -> Option<char> {
    let first = char::from_u32(lo)?;
    if !text.contains(first) {
        return Some(first);
    }

    let span = (hi - lo + 1) as usize;
    let mut seen = vec![0u64; span.div_ceil(64)];
    for cp in text.chars().map(u32::from) {
        if (lo..=hi).contains(&cp) {
            let bit = (cp - lo) as usize;
            seen[bit / 64] |= 1u64 << (bit % 64);
        }
    }

    let (word, bits) = seen.iter().enumerate().find(|(_, bits)| **bits != u64::MAX)?;
    let bit = word * 64 + bits.trailing_ones() as usize;
    if bit >= span {
        return None;
    }
    char::from_u32(lo + bit as u32)
}

/// Placeholder table for the code spans of one line.
#[derive(Debug)]
pub struct CodeSpanTable {
    /// Content ranges (between the backticks) into the original text,
    /// indexed by discovery order.
    spans: Vec<Range>,
    sentinel: char,
}

impl CodeSpanTable {
    pub fn new() -> Self {
        Self {
            spans: Vec::new(),
            sentinel: '\u{E000}',
        }
    }

    /// Number of spans protected by the last call to [`protect`](Self::protect).
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Replace every code span in `text` with a placeholder token, writing
    /// the result to `out`.
    ///
    /// A span is a backtick, one or more non-backtick chars, a backtick.
    /// Spans may not be empty: for ``` `` ``` the second backtick is retried
    /// as an opener.
    pub fn protect(&mut self, text: &str, out: &mut String) {
        self.spans.clear();

        let bytes = text.as_bytes();
        if memchr(b'`', bytes).is_none() {
            out.push_str(text);
            return;
        }
        let Some(sentinel) = pick_sentinel(text) else {
            log::debug!("no free sentinel for code spans, leaving them unprotected");
            out.push_str(text);
            return;
        };
        self.sentinel = sentinel;

        let mut emitted = 0;
        let mut search = 0;
        while let Some(rel) = memchr(b'`', &bytes[search..]) {
            let open = search + rel;
            let content_start = open + 1;
            let Some(rel_close) = memchr(b'`', &bytes[content_start..]) else {
                break;
            };
            let close = content_start + rel_close;
            if close == content_start {
                search = content_start;
                continue;
            }

            // Lines past 4GB keep their remaining spans unprotected.
            let Some(range) = Range::try_from_usize(content_start, close) else {
                break;
            };

            out.push_str(&text[emitted..open]);
            self.write_placeholder(self.spans.len(), out);
            self.spans.push(range);

            emitted = close + 1;
            search = emitted;
        }
        out.push_str(&text[emitted..]);
    }

    /// Swap placeholder tokens in `text` back for `[code]content[/code]`,
    /// reading span content from `original` (the text given to `protect`).
    pub fn restore(&self, text: &str, original: &str, out: &mut String) {
        if self.spans.is_empty() {
            out.push_str(text);
            return;
        }

        let sentinel_len = self.sentinel.len_utf8();
        let mut rest = text;
        while let Some(start) = rest.find(self.sentinel) {
            let after = &rest[start + sentinel_len..];
            let span = after.find(self.sentinel).and_then(|end| {
                let index: usize = after[..end].parse().ok()?;
                Some((self.spans.get(index)?, end))
            });

            match span {
                Some((range, end)) => {
                    out.push_str(&rest[..start]);
                    out.push_str("[code]");
                    out.push_str(range.slice(original));
                    out.push_str("[/code]");
                    rest = &after[end + sentinel_len..];
                }
                None => {
                    out.push_str(&rest[..start + sentinel_len]);
                    rest = after;
                }
            }
        }
        out.push_str(rest);
    }

    fn write_placeholder(&self, index: usize, out: &mut String) {
        out.push(self.sentinel);
        out.push_str(&index.to_string());
        out.push(self.sentinel);
    }
}

impl Default for CodeSpanTable {
    fn default() -> Self {
        Self::new()
    }
}
