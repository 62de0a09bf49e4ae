//! Link and image conversion.
//!
//! Handles:
//! - Images: `![alt](url "title")` → `[img]url[/img]`
//! - Inline links: `[text](url "title")` → `[url=url]text[/url]`
//!
//! Alt text and titles have no Steam equivalent and are dropped. Images run
//! first; a converted image no longer has the `[...](...)` shape, so the
//! link pass cannot fire on it.

use memchr::memchr;
use memchr::memmem;

use crate::cursor::{Cursor, is_space};
use crate::Range;

/// A parsed `(url "title")` destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Destination {
    /// The URL, excluding the parentheses and title.
    pub url: Range,
    /// Offset just past the closing `)`.
    pub end: usize,
}

/// Parse a link destination starting right after `(`.
///
/// The URL is one or more chars other than whitespace, `)` and `"`. It may
/// be followed by whitespace and a double-quoted title before the `)`.
pub fn parse_destination(text: &str, start: usize) -> Option<Destination> {
    let mut cursor = Cursor::new_at(text, start);

    let url_len = cursor.skip_while(|c| c != ')' && c != '"' && !is_space(c));
    if url_len == 0 {
        return None;
    }
    let url = cursor.range_from(start)?;

    if !cursor.eat(b')') {
        if cursor.skip_whitespace() == 0 || !cursor.eat(b'"') {
            return None;
        }
        cursor.skip_while(|c| c != '"');
        if !cursor.eat(b'"') || !cursor.eat(b')') {
            return None;
        }
    }

    Some(Destination {
        url,
        end: cursor.offset(),
    })
}

/// Convert `![alt](url)` images to `[img]url[/img]`.
///
/// Alt text is the shortest run up to a `](` that is followed by a valid
/// destination; it may not cross a line break.
pub fn convert_images(text: &str, out: &mut String) {
    let bytes = text.as_bytes();
    let mut emitted = 0;
    let mut search = 0;

    while let Some(rel) = memmem::find(&bytes[search..], b"![") {
        let open = search + rel;
        let alt_start = open + 2;
        let line_end =
            memchr(b'\n', &bytes[alt_start..]).map_or(bytes.len(), |pos| alt_start + pos);

        let mut dest = None;
        let mut probe = alt_start;
        while let Some(rel_close) = memmem::find(&bytes[probe..line_end], b"](") {
            let close = probe + rel_close;
            dest = parse_destination(text, close + 2);
            if dest.is_some() {
                break;
            }
            probe = close + 1;
        }

        match dest {
            Some(dest) => {
                out.push_str(&text[emitted..open]);
                out.push_str("[img]");
                out.push_str(dest.url.slice(text));
                out.push_str("[/img]");
                emitted = dest.end;
                search = emitted;
            }
            // Later openers on this line would only retry the same closers.
            None => search = line_end,
        }
    }
    out.push_str(&text[emitted..]);
}

/// Convert `[text](url)` links to `[url=url]text[/url]`.
///
/// Link text is one or more chars other than `]`.
pub fn convert_links(text: &str, out: &mut String) {
    let bytes = text.as_bytes();
    let mut emitted = 0;
    let mut search = 0;

    while let Some(rel) = memchr(b'[', &bytes[search..]) {
        let open = search + rel;
        let text_start = open + 1;
        let Some(rel_close) = memchr(b']', &bytes[text_start..]) else {
            break;
        };
        let close = text_start + rel_close;

        let dest = if close > text_start && bytes.get(close + 1) == Some(&b'(') {
            parse_destination(text, close + 2)
        } else {
            None
        };

        match dest {
            Some(dest) => {
                out.push_str(&text[emitted..open]);
                out.push_str("[url=");
                out.push_str(dest.url.slice(text));
                out.push(']');
                out.push_str(&text[text_start..close]);
                out.push_str("[/url]");
                emitted = dest.end;
                search = emitted;
            }
            // Openers before `close` share the same first `]` and fail too.
            None => search = close,
        }
    }
    out.push_str(&text[emitted..]);
}
