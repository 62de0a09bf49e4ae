//! Emphasis substitution (`***`, `___`, `**`, `__`, `*`, `_`).
//!
//! Each rule is a single left-to-right pass that pairs a marker with the
//! nearest following marker on the same line. Rules run in the order of
//! [`EMPHASIS_RULES`]; triple markers must go first so that the double and
//! single rules do not eat part of them.

use memchr::memchr;
use memchr::memmem::Finder;

/// A paired delimiter and the tags it is replaced with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiter {
    pub marker: &'static str,
    pub open: &'static str,
    pub close: &'static str,
}

pub const BOLD_ITALIC_STAR: Delimiter = Delimiter {
    marker: "***",
    open: "[b][i]",
    close: "[/i][/b]",
};

pub const BOLD_ITALIC_UNDERSCORE: Delimiter = Delimiter {
    marker: "___",
    open: "[b][i]",
    close: "[/i][/b]",
};

pub const BOLD_STAR: Delimiter = Delimiter {
    marker: "**",
    open: "[b]",
    close: "[/b]",
};

pub const BOLD_UNDERSCORE: Delimiter = Delimiter {
    marker: "__",
    open: "[b]",
    close: "[/b]",
};

pub const ITALIC_STAR: Delimiter = Delimiter {
    marker: "*",
    open: "[i]",
    close: "[/i]",
};

pub const ITALIC_UNDERSCORE: Delimiter = Delimiter {
    marker: "_",
    open: "[i]",
    close: "[/i]",
};

/// Emphasis rules in application order.
pub const EMPHASIS_RULES: [Delimiter; 6] = [
    BOLD_ITALIC_STAR,
    BOLD_ITALIC_UNDERSCORE,
    BOLD_STAR,
    BOLD_UNDERSCORE,
    ITALIC_STAR,
    ITALIC_UNDERSCORE,
];

/// Replace every `marker text marker` pair in `text`, writing to `out`.
///
/// The closer is the first marker after the opener; content may be empty
/// but may not contain a line break. Unpaired markers are copied as-is.
pub fn replace_delimited(text: &str, delim: Delimiter, out: &mut String) {
    let bytes = text.as_bytes();
    let marker_len = delim.marker.len();
    let finder = Finder::new(delim.marker.as_bytes());

    let mut emitted = 0;
    let mut search = 0;
    while let Some(rel) = finder.find(&bytes[search..]) {
        let open = search + rel;
        let content_start = open + marker_len;
        let line_end = memchr(b'\n', &bytes[content_start..])
            .map_or(bytes.len(), |pos| content_start + pos);

        match finder.find(&bytes[content_start..line_end]) {
            Some(rel_close) => {
                let close = content_start + rel_close;
                out.push_str(&text[emitted..open]);
                out.push_str(delim.open);
                out.push_str(&text[content_start..close]);
                out.push_str(delim.close);
                emitted = close + marker_len;
                search = emitted;
            }
            // No opener later on this line can find a closer either.
            None => search = line_end,
        }
    }
    out.push_str(&text[emitted..]);
}
