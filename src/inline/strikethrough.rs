//! Strikethrough substitution (`~~text~~`).
//!
//! Runs after every emphasis rule and pairs markers the same way they do.

use super::emphasis::{replace_delimited, Delimiter};

pub const STRIKETHROUGH: Delimiter = Delimiter {
    marker: "~~",
    open: "[strike]",
    close: "[/strike]",
};

/// Convert `~~text~~` pairs to `[strike]text[/strike]`.
pub fn convert_strikethrough(text: &str, out: &mut String) {
    replace_delimited(text, STRIKETHROUGH, out);
}
