use md2steam::{markdown_to_steam_bbcode, to_bbcode_with_options, Options};

fn convert(input: &str) -> String {
    markdown_to_steam_bbcode(input)
}

#[test]
fn unordered_list() {
    assert_eq!(convert("- a\n- b"), "[list]\n[*] a\n[*] b\n[/list]");
}

#[test]
fn unordered_markers() {
    assert_eq!(convert("+ a\n* b"), "[list]\n[*] a\n[*] b\n[/list]");
}

#[test]
fn ordered_list() {
    assert_eq!(convert("1. a\n2. b"), "[olist]\n[*] a\n[*] b\n[/olist]");
}

#[test]
fn ordered_numbers_are_ignored() {
    assert_eq!(convert("10. ten\n3. three"), "[olist]\n[*] ten\n[*] three\n[/olist]");
}

#[test]
fn nested_unordered() {
    assert_eq!(
        convert("- a\n  - b\n  - c\n- d"),
        "[list]\n[*] a\n[list]\n[*] b\n[*] c\n[/list]\n[*] d\n[/list]"
    );
}

#[test]
fn ordered_nested_in_unordered() {
    assert_eq!(
        convert("- a\n  1. b\n  2. c"),
        "[list]\n[*] a\n[olist]\n[*] b\n[*] c\n[/olist]\n[/list]"
    );
}

#[test]
fn three_levels_closed_at_end() {
    assert_eq!(
        convert("- a\n  - b\n    - c"),
        "[list]\n[*] a\n[list]\n[*] b\n[list]\n[*] c\n[/list]\n[/list]\n[/list]"
    );
}

#[test]
fn kind_switch_at_same_indent() {
    assert_eq!(
        convert("- a\n1. b"),
        "[list]\n[*] a\n[/list]\n[olist]\n[*] b\n[/olist]"
    );
}

#[test]
fn dedent_to_unopened_indent() {
    assert_eq!(
        convert("- a\n    - b\n  - c"),
        "[list]\n[*] a\n[list]\n[*] b\n[/list]\n[list]\n[*] c\n[/list]\n[/list]"
    );
}

#[test]
fn dedent_with_kind_switch() {
    assert_eq!(
        convert("1. a\n   - b\n2. c\n- d"),
        "[olist]\n[*] a\n[list]\n[*] b\n[/list]\n[*] c\n[/olist]\n[list]\n[*] d\n[/list]"
    );
}

#[test]
fn tab_indent_nests() {
    assert_eq!(
        convert("- a\n\t- b"),
        "[list]\n[*] a\n[list]\n[*] b\n[/list]\n[/list]"
    );
}

#[test]
fn tab_width_option() {
    let input = "  - a\n\t- b";
    assert_eq!(
        convert(input),
        "[list]\n[*] a\n[list]\n[*] b\n[/list]\n[/list]"
    );

    let options = Options {
        tab_width: 2,
        ..Options::default()
    };
    assert_eq!(
        to_bbcode_with_options(input, &options),
        "[list]\n[*] a\n[*] b\n[/list]"
    );
}

#[test]
fn empty_item() {
    assert_eq!(convert("- "), "[list]\n[*] \n[/list]");
}

#[test]
fn item_inline_content() {
    assert_eq!(
        convert("- **bold** [link](http://x)"),
        "[list]\n[*] [b]bold[/b] [url=http://x]link[/url]\n[/list]"
    );
}

#[test]
fn blank_line_splits_lists() {
    assert_eq!(
        convert("- a\n\n- b"),
        "[list]\n[*] a\n[/list]\n\n[list]\n[*] b\n[/list]"
    );
}

#[test]
fn paragraph_closes_list() {
    assert_eq!(convert("- a\ntext"), "[list]\n[*] a\n[/list]\ntext");
}

#[test]
fn heading_closes_list() {
    assert_eq!(convert("- a\n# H"), "[list]\n[*] a\n[/list]\n[h1]H[/h1]");
}

#[test]
fn indented_continuation_closes_list() {
    assert_eq!(
        convert("- a\n  more"),
        "[list]\n[*] a\n[/list]\n  more"
    );
}

#[test]
fn marker_without_space_is_text() {
    assert_eq!(convert("-a\n1.b"), "-a\n1.b");
}

#[test]
fn tags_balance_on_deep_nesting() {
    let input = "- a\n  - b\n    - c\n      - d\n1. e";
    let output = convert(input);
    assert_eq!(output.matches("[list]").count(), output.matches("[/list]").count());
    assert_eq!(output.matches("[olist]").count(), output.matches("[/olist]").count());
    assert!(output.ends_with("[olist]\n[*] e\n[/olist]"));
}

#[test]
fn ordered_list_with_non_ascii_digits() {
    assert_eq!(convert("١. a\n٢. b"), "[olist]\n[*] a\n[*] b\n[/olist]");
}

#[test]
fn non_ascii_digit_item_switches_kind() {
    assert_eq!(
        convert("- a\n٣. b"),
        "[list]\n[*] a\n[/list]\n[olist]\n[*] b\n[/olist]"
    );
}

#[test]
fn unit_separator_counts_as_indent() {
    assert_eq!(convert("\u{1f}    - x y"), "[list]\n[*] x y\n[/list]");
}

#[test]
fn unit_separator_does_not_keep_list_open_for_quote() {
    assert_eq!(
        convert("- a\n\u{1f}\u{1f}> q"),
        "[list]\n[*] a\n[/list]\n\u{1f}\u{1f}> q"
    );
}
