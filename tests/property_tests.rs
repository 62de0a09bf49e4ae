use md2steam::{convert_inline, markdown_to_steam_bbcode};
use proptest::prelude::*;

/// Lines of plain words: no markers, no leading whitespace, no blanks.
fn plain_document() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-zA-Z][a-zA-Z0-9 ,.!?]{0,30}", 1..8).prop_map(|lines| lines.join("\n"))
}

/// Markdown-ish documents built from the constructs the converter knows.
fn markdown_document() -> impl Strategy<Value = String> {
    let line = prop_oneof![
        Just(String::new()),
        "[a-z ]{0,12}",
        "( {0,6}|\t)[-+*] [a-z*_`~]{0,10}",
        "( {0,6})[0-9]{1,2}\\. [a-z]{0,10}",
        "(> ?){1,3}[a-z#*_ -]{0,10}",
        "#{1,7} [a-z]{0,10}",
        Just("```".to_string()),
        Just("---".to_string()),
        "\\[[a-h]{1,5}\\]\\([a-z:/.]{1,10}\\)",
    ];
    prop::collection::vec(line, 0..24).prop_map(|lines| lines.join("\n"))
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

proptest! {
    #[test]
    fn plain_text_is_identity(doc in plain_document()) {
        prop_assert_eq!(markdown_to_steam_bbcode(&doc), doc.clone());
        prop_assert_eq!(convert_inline(&doc), doc);
    }

    #[test]
    fn never_panics(doc in "\\PC{0,200}") {
        let _ = markdown_to_steam_bbcode(&doc);
        let _ = convert_inline(&doc);
    }

    #[test]
    fn never_panics_on_line_breaks(doc in "[\\r\\n>\\-*` a1.#]{0,80}") {
        let _ = markdown_to_steam_bbcode(&doc);
    }

    #[test]
    fn only_newlines_separate_output_lines(
        doc in "[\\r\\n\u{b}\u{c}\u{1c}\u{1d}\u{1e}\u{1f}\u{85}\u{2028}\u{2029}>\\-*` a1١.#]{0,80}"
    ) {
        let output = markdown_to_steam_bbcode(&doc);
        let foreign = ['\r', '\u{b}', '\u{c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}'];
        prop_assert!(!output.contains(foreign), "{:?}", output);
        prop_assert_eq!(count(&output, "[list]"), count(&output, "[/list]"));
        prop_assert_eq!(count(&output, "[olist]"), count(&output, "[/olist]"));
    }

    #[test]
    fn list_tags_balance(doc in markdown_document()) {
        let output = markdown_to_steam_bbcode(&doc);
        prop_assert_eq!(count(&output, "[list]"), count(&output, "[/list]"));
        prop_assert_eq!(count(&output, "[olist]"), count(&output, "[/olist]"));
    }

    #[test]
    fn quote_tags_balance(doc in markdown_document()) {
        let output = markdown_to_steam_bbcode(&doc);
        prop_assert_eq!(count(&output, "[quote]"), count(&output, "[/quote]"));
    }

    #[test]
    fn headings_never_exceed_cap(doc in markdown_document()) {
        let output = markdown_to_steam_bbcode(&doc);
        for level in 4..=6 {
            let tag = format!("[h{level}]");
            prop_assert!(!output.contains(&tag));
        }
    }

    #[test]
    fn structural_output_is_stable(items in prop::collection::vec("[a-z]{1,8}", 1..6)) {
        let doc = items
            .iter()
            .map(|item| format!("- {item}"))
            .collect::<Vec<_>>()
            .join("\n");
        let once = markdown_to_steam_bbcode(&doc);
        prop_assert_eq!(markdown_to_steam_bbcode(&once), once);
    }
}
