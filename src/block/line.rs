//! Line classifiers for the block converter.
//!
//! Each classifier looks at a single line (no line break) and either
//! recognizes its construct or returns `None`/`false`. None of them
//! allocate.

use std::sync::OnceLock;

use regex::Regex;

use crate::cursor::{Cursor, is_space};

use super::list::ListKind;

/// Default tab stop used when measuring list indentation.
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// A recognized list item line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListItem<'a> {
    pub kind: ListKind,
    /// Display width of the leading whitespace, tabs expanded.
    pub indent: usize,
    pub text: &'a str,
}

/// Whether the line opens or closes a fenced code block.
#[inline]
pub fn is_fence(line: &str) -> bool {
    line.trim_start_matches(is_space).starts_with("```")
}

/// Whether the line has nothing but whitespace.
#[inline]
pub fn is_blank(line: &str) -> bool {
    line.trim_matches(is_space).is_empty()
}

/// Number of leading `' '` chars. Tabs do not count.
#[inline]
pub fn leading_spaces(line: &str) -> usize {
    line.bytes().take_while(|&b| b == b' ').count()
}

/// Strip `>` markers at the start of the line, each optionally followed by
/// one space. Returns the quote depth and the remaining text.
pub fn strip_quote_markers(line: &str) -> (usize, &str) {
    let mut cursor = Cursor::new(line);
    let mut depth = 0;
    while cursor.eat(b'>') {
        depth += 1;
        cursor.eat(b' ');
    }
    (depth, cursor.rest())
}

/// Parse an ATX heading: 1-6 `#`, at least one whitespace char, then text.
///
/// Returns the marker count (not yet clamped) and the text with its leading
/// whitespace removed.
pub fn parse_heading(line: &str) -> Option<(u8, &str)> {
    let mut cursor = Cursor::new(line);
    let level = cursor.skip_while(|c| c == '#');
    if !(1..=6).contains(&level) {
        return None;
    }
    if cursor.skip_whitespace() == 0 {
        return None;
    }
    Some((level as u8, cursor.rest()))
}

/// Whether the line is a horizontal rule: three or more of the same marker
/// (`-`, `_` or `*`), each optionally followed by one whitespace char, and
/// nothing else.
pub fn is_horizontal_rule(line: &str) -> bool {
    let mut cursor = Cursor::new(line);
    let marker = match cursor.peek() {
        Some(b @ (b'-' | b'_' | b'*')) => b,
        _ => return false,
    };

    let mut count = 0;
    while cursor.eat(marker) {
        count += 1;
        cursor.eat_whitespace();
    }
    count >= 3 && cursor.is_eof()
}

/// Decimal digits (any script) followed by `.`.
fn ordered_marker() -> &'static Regex {
    static ORDERED_MARKER: OnceLock<Regex> = OnceLock::new();
    ORDERED_MARKER.get_or_init(|| Regex::new(r"\A\d+\.").expect("invalid ordered marker regex"))
}

/// Parse a list item: leading whitespace, a marker (`-`, `+`, `*` or
/// decimal digits followed by `.`), at least one whitespace char, then text.
///
/// Digits from any script count, so `١. a` is an ordered item.
pub fn parse_list_item(line: &str, tab_width: usize) -> Option<ListItem<'_>> {
    let mut cursor = Cursor::new(line);
    cursor.skip_whitespace();
    let indent = display_width(&line[..cursor.offset()], tab_width);

    let kind = match cursor.peek_char()? {
        '-' | '+' | '*' => {
            cursor.bump();
            ListKind::Unordered
        }
        c if c.is_numeric() => {
            let marker = ordered_marker().find(cursor.rest())?;
            cursor = Cursor::new_at(line, cursor.offset() + marker.end());
            ListKind::Ordered
        }
        _ => return None,
    };

    if cursor.skip_whitespace() == 0 {
        return None;
    }

    Some(ListItem {
        kind,
        indent,
        text: cursor.rest(),
    })
}

/// Display width of a whitespace run, expanding tabs to `tab_width` stops.
pub fn display_width(whitespace: &str, tab_width: usize) -> usize {
    let tab_width = tab_width.max(1);
    whitespace.chars().fold(0, |col, c| {
        if c == '\t' {
            col + tab_width - col % tab_width
        } else {
            col + 1
        }
    })
}
