//! Line-by-line block converter.

use crate::cursor::Cursor;
use crate::inline::InlineConverter;
use crate::render::BbcodeWriter;
use crate::Options;

use super::line::{
    is_blank, is_fence, is_horizontal_rule, leading_spaces, parse_heading, parse_list_item,
    strip_quote_markers,
};
use super::list::ListStack;

/// Block converter state.
///
/// Walks the input one line at a time and writes BBCode units to a
/// [`BbcodeWriter`]. All state lives here, so a converter handles exactly
/// one document.
pub struct BlockConverter<'a> {
    cursor: Cursor<'a>,
    options: Options,
    inline: InlineConverter,
    lists: ListStack,
    /// Open blockquote depth.
    quote_level: usize,
    in_code_block: bool,
    /// Raw lines of the open code block.
    code_lines: Vec<&'a str>,
    /// Inline conversion output for the current line.
    scratch: String,
    line_no: usize,
}

impl<'a> BlockConverter<'a> {
    /// Create a new converter with default options.
    pub fn new(input: &'a str) -> Self {
        Self::new_with_options(input, Options::default())
    }

    /// Create a new converter.
    pub fn new_with_options(input: &'a str, options: Options) -> Self {
        Self {
            cursor: Cursor::new(input),
            options,
            inline: InlineConverter::with_options(&options),
            lists: ListStack::new(),
            quote_level: 0,
            in_code_block: false,
            code_lines: Vec::new(),
            scratch: String::with_capacity(128),
            line_no: 0,
        }
    }

    /// Convert the whole input, writing units to `writer`.
    pub fn convert(&mut self, writer: &mut BbcodeWriter) {
        while !self.cursor.is_eof() {
            let line = self.cursor.consume_line();
            self.line_no += 1;
            self.convert_line(line, writer);
        }
        self.finish(writer);

        log::debug!(
            "converted {} lines into {} units ({} bytes)",
            self.line_no,
            writer.units(),
            writer.len()
        );
    }

    fn convert_line(&mut self, line: &'a str, writer: &mut BbcodeWriter) {
        if self.in_code_block {
            if is_fence(line) {
                log::debug!("line {}: code fence closed", self.line_no);
                self.close_code_block(writer);
            } else {
                self.code_lines.push(line);
            }
            return;
        }

        if is_fence(line) {
            log::debug!("line {}: code fence opened", self.line_no);
            self.in_code_block = true;
            self.code_lines.clear();
            return;
        }

        if is_blank(line) {
            log::trace!("line {}: blank", self.line_no);
            self.lists.close_all(writer);
            self.close_quotes(writer);
            writer.blank();
            return;
        }

        if !self.lists.is_empty()
            && parse_list_item(line, self.options.tab_stop()).is_none()
            && !self.is_quote_inside_list(line)
        {
            log::trace!("line {}: leaves {} open lists", self.line_no, self.lists.depth());
            self.lists.close_all(writer);
        }

        let content = self.sync_quotes(line, writer);

        if self.try_heading(content, writer) {
            return;
        }

        if is_horizontal_rule(content) {
            log::trace!("line {}: horizontal rule", self.line_no);
            writer.rule();
            return;
        }

        if self.try_list_item(content, writer) {
            return;
        }

        log::trace!("line {}: text", self.line_no);
        self.scratch.clear();
        self.inline.convert_into(content, &mut self.scratch);
        writer.text(&self.scratch);
    }

    /// A `>` line indented deeper than the innermost list keeps the list
    /// open, so a list item can carry a quote.
    fn is_quote_inside_list(&self, line: &str) -> bool {
        let Some(top) = self.lists.top() else {
            return false;
        };
        let spaces = leading_spaces(line);
        line[spaces..].starts_with('>') && spaces > top.indent
    }

    /// Bring the open quote depth in line with the `>` markers of `line`.
    /// Returns the line with the markers stripped.
    fn sync_quotes(&mut self, line: &'a str, writer: &mut BbcodeWriter) -> &'a str {
        let (depth, content) = strip_quote_markers(line);
        if depth == 0 {
            self.close_quotes(writer);
            return content;
        }

        if depth != self.quote_level {
            log::trace!(
                "line {}: quote depth {} -> {}",
                self.line_no,
                self.quote_level,
                depth
            );
        }
        for _ in self.quote_level..depth {
            writer.quote_start();
        }
        for _ in depth..self.quote_level {
            writer.quote_end();
        }
        self.quote_level = depth;
        content
    }

    /// Close every open quote level as a single unit.
    fn close_quotes(&mut self, writer: &mut BbcodeWriter) {
        writer.quotes_end(self.quote_level);
        self.quote_level = 0;
    }

    fn try_heading(&mut self, content: &str, writer: &mut BbcodeWriter) -> bool {
        let Some((level, text)) = parse_heading(content) else {
            return false;
        };
        let level = level.min(self.options.heading_level_cap());
        log::trace!("line {}: heading level {}", self.line_no, level);

        self.scratch.clear();
        self.inline.convert_into(text, &mut self.scratch);
        writer.heading(level, &self.scratch);
        true
    }

    fn try_list_item(&mut self, content: &str, writer: &mut BbcodeWriter) -> bool {
        let Some(item) = parse_list_item(content, self.options.tab_stop()) else {
            return false;
        };
        log::trace!(
            "line {}: {:?} item at indent {}",
            self.line_no,
            item.kind,
            item.indent
        );

        self.lists.open_item(item.kind, item.indent, writer);
        self.scratch.clear();
        self.inline.convert_into(item.text, &mut self.scratch);
        writer.list_item(&self.scratch);
        true
    }

    fn close_code_block(&mut self, writer: &mut BbcodeWriter) {
        writer.code_block(self.code_lines.iter().copied());
        self.code_lines.clear();
        self.in_code_block = false;
    }

    /// Close everything still open at end of input.
    fn finish(&mut self, writer: &mut BbcodeWriter) {
        if self.in_code_block {
            log::debug!(
                "unterminated code fence, closing {} lines at end of input",
                self.code_lines.len()
            );
            self.close_code_block(writer);
        }
        self.lists.close_all(writer);
        self.close_quotes(writer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(input: &str) -> String {
        convert_with(input, Options::default())
    }

    fn convert_with(input: &str, options: Options) -> String {
        let mut writer = BbcodeWriter::new();
        BlockConverter::new_with_options(input, options).convert(&mut writer);
        writer.into_string()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(convert(""), "");
    }

    #[test]
    fn test_trailing_newline_dropped() {
        assert_eq!(convert("a\n"), "a");
        assert_eq!(convert("a\n\n"), "a\n");
    }

    #[test]
    fn test_line_endings() {
        assert_eq!(convert("a\r\nb\rc"), "a\nb\nc");
    }

    #[test]
    fn test_heading_clamped() {
        assert_eq!(convert("#### Deep"), "[h3]Deep[/h3]");
        assert_eq!(convert("## **Bold**"), "[h2][b]Bold[/b][/h2]");
    }

    #[test]
    fn test_heading_cap_option() {
        let options = Options {
            max_heading_level: 5,
            ..Options::default()
        };
        assert_eq!(convert_with("#### Deep", options), "[h4]Deep[/h4]");
        assert_eq!(convert_with("###### Deeper", options), "[h5]Deeper[/h5]");
    }

    #[test]
    fn test_fence_keeps_raw_lines() {
        assert_eq!(
            convert("```rust\n  **x**\n\n# y\n```"),
            "[code]  **x**\n\n# y[/code]"
        );
    }

    #[test]
    fn test_unterminated_fence_flushed() {
        assert_eq!(convert("```\na\nb"), "[code]a\nb[/code]");
        assert_eq!(convert("```"), "[code][/code]");
    }

    #[test]
    fn test_fence_inside_list_keeps_list_open() {
        assert_eq!(
            convert("- a\n```\nx\n```\n- b"),
            "[list]\n[*] a\n[code]x[/code]\n[*] b\n[/list]"
        );
    }

    #[test]
    fn test_blank_line_closes_everything() {
        assert_eq!(
            convert("> - a\n\nb"),
            "[quote]\n[list]\n[*] a\n[/list]\n[/quote]\n\nb"
        );
    }

    #[test]
    fn test_quote_depth_changes() {
        assert_eq!(
            convert(">> a\n> b\nc"),
            "[quote]\n[quote]\na\n[/quote]\nb\n[/quote]\nc"
        );
    }

    #[test]
    fn test_quote_closed_at_end_as_one_unit() {
        assert_eq!(convert(">> a"), "[quote]\n[quote]\na\n[/quote][/quote]");
    }

    #[test]
    fn test_quote_inside_list() {
        assert_eq!(
            convert("- a\n  > b\n- c"),
            "[list]\n[*] a\n  > b\n[*] c\n[/list]"
        );
    }

    #[test]
    fn test_paragraph_closes_list() {
        assert_eq!(convert("- a\ntext"), "[list]\n[*] a\n[/list]\ntext");
    }

    #[test]
    fn test_rule_inside_list_does_not_close_it() {
        assert_eq!(convert("- a\n- - -"), "[list]\n[*] a\n[hr][/hr]\n[/list]");
    }
}
