//! Byte cursor for scanning Markdown lines.
//!
//! Operates on `&str` with byte offsets. All delimiters the converter looks
//! for are ASCII, so offsets produced by byte scanning always fall on char
//! boundaries; whitespace tests decode full chars so Unicode spaces count.

use crate::Range;

/// Lead bytes of every line break: the ASCII breaks, then `C2` for U+0085
/// and `E2` for U+2028/U+2029.
const BREAK_LEAD: [bool; 256] = {
    let mut table = [false; 256];
    table[b'\n' as usize] = true;
    table[b'\r' as usize] = true;
    table[0x0B] = true;
    table[0x0C] = true;
    table[0x1C] = true;
    table[0x1D] = true;
    table[0x1E] = true;
    table[0xC2] = true;
    table[0xE2] = true;
    table
};

/// Whitespace as Markdown lines see it: Unicode white space plus the
/// information separators U+001C..=U+001F.
#[inline]
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Find the next line break in `bytes`, returning its offset and length.
///
/// Breaks are `\n`, `\r\n`, `\r`, vertical tab, form feed, the file, group
/// and record separators, U+0085, U+2028 and U+2029.
pub fn find_line_break(bytes: &[u8]) -> Option<(usize, usize)> {
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if BREAK_LEAD[b as usize] {
            match b {
                b'\r' if bytes.get(i + 1) == Some(&b'\n') => return Some((i, 2)),
                0xC2 => {
                    if bytes.get(i + 1) == Some(&0x85) {
                        return Some((i, 2));
                    }
                }
                0xE2 => {
                    if bytes.get(i + 1) == Some(&0x80)
                        && matches!(bytes.get(i + 2), Some(0xA8 | 0xA9))
                    {
                        return Some((i, 3));
                    }
                }
                _ => return Some((i, 1)),
            }
        }
        i += 1;
    }
    None
}

/// A cursor for efficient scanning over a line of text.
///
/// # Example
/// ```
/// use md2steam::cursor::Cursor;
///
/// let mut cursor = Cursor::new("## Hello");
///
/// assert_eq!(cursor.skip_while(|c| c == '#'), 2);
/// assert!(cursor.eat_whitespace());
/// assert_eq!(cursor.rest(), "Hello");
/// ```
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor over a string.
    #[inline]
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// Create a cursor starting at a byte offset.
    #[inline]
    pub fn new_at(text: &'a str, offset: usize) -> Self {
        debug_assert!(text.is_char_boundary(offset));
        Self { text, pos: offset }
    }

    /// Current offset from the start of the text.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Number of bytes remaining.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.text.len() - self.pos
    }

    /// Check if cursor is at end of input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Peek the current byte without advancing.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    /// Peek the current char without advancing.
    #[inline]
    pub fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The unconsumed remainder of the text.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    /// Advance past the current char.
    #[inline]
    pub fn bump(&mut self) {
        if let Some(c) = self.peek_char() {
            self.pos += c.len_utf8();
        }
    }

    /// Check if current position matches a byte.
    #[inline]
    pub fn at(&self, b: u8) -> bool {
        self.peek() == Some(b)
    }

    /// Consume a specific ASCII byte if present.
    #[inline]
    pub fn eat(&mut self, b: u8) -> bool {
        debug_assert!(b.is_ascii());
        if self.at(b) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Skip chars while predicate is true. Returns the bytes skipped.
    #[inline]
    pub fn skip_while<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(char) -> bool,
    {
        let start = self.pos;
        for c in self.rest().chars() {
            if !predicate(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        self.pos - start
    }

    /// Skip any run of whitespace, Unicode spaces included.
    #[inline]
    pub fn skip_whitespace(&mut self) -> usize {
        self.skip_while(is_space)
    }

    /// Consume exactly one whitespace char if present.
    #[inline]
    pub fn eat_whitespace(&mut self) -> bool {
        match self.peek_char() {
            Some(c) if is_space(c) => {
                self.pos += c.len_utf8();
                true
            }
            _ => false,
        }
    }

    /// Get a range from a start offset to current position, or `None` if
    /// the offsets do not fit a [`Range`].
    #[inline]
    pub fn range_from(&self, start: usize) -> Option<Range> {
        Range::try_from_usize(start, self.pos)
    }

    /// Advance past the next line break (see [`find_line_break`]), returning
    /// the line without it.
    #[inline]
    pub fn consume_line(&mut self) -> &'a str {
        let start = self.pos;
        match find_line_break(self.rest().as_bytes()) {
            Some((pos, len)) => {
                self.pos = start + pos + len;
                &self.text[start..start + pos]
            }
            None => {
                self.pos = self.text.len();
                &self.text[start..]
            }
        }
    }
}

impl std::fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("offset", &self.offset())
            .field("remaining", &self.remaining())
            .finish()
    }
}
