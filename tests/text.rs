use tuifield::text::{char_width, display_width, truncate_to_width};

#[test]
fn test_display_width_ascii() {
    assert_eq!(display_width("hello"), 5);
    assert_eq!(display_width(""), 0);
    assert_eq!(display_width("a b c"), 5);
}

#[test]
fn test_display_width_cjk() {
    // CJK characters are typically 2 cells wide
    assert_eq!(display_width("日本語"), 6);
    assert_eq!(display_width("한글"), 4);
}

#[test]
fn test_display_width_mixed() {
    assert_eq!(display_width("hello日本語"), 11); // 5 + 6
    assert_eq!(display_width("a日b"), 4); // 1 + 2 + 1
}

#[test]
fn test_char_width() {
    assert_eq!(char_width('a'), 1);
    assert_eq!(char_width('日'), 2);
}

#[test]
fn test_truncate_short_string_unchanged() {
    assert_eq!(truncate_to_width("hello", 10), "hello");
    assert_eq!(truncate_to_width("hello", 5), "hello");
}

#[test]
fn test_truncate_adds_ellipsis() {
    assert_eq!(truncate_to_width("hello world", 8), "hello w…");
}

#[test]
fn test_truncate_zero_width() {
    assert_eq!(truncate_to_width("hello", 0), "");
}

#[test]
fn test_truncate_respects_wide_chars() {
    // 日(2) fits in the 3 cells left after the ellipsis; 本 would not.
    assert_eq!(truncate_to_width("日本語", 4), "日…");
}
