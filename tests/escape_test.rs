use proptest::prelude::*;
use rbstep::xpath::{decode_concat_args, escape, unescape};

#[test]
fn test_apostrophe_value_is_double_quoted() {
    assert_eq!(escape("O'Brien"), "\"O'Brien\"");
}

#[test]
fn test_safe_value_is_single_quoted() {
    assert_eq!(escape("//input[@name=q]"), "'//input[@name=q]'");
}

#[test]
fn test_mixed_quotes_reconstruct_exactly() {
    let raw = r#"a'b"c"#;
    let literal = escape(raw);
    assert!(literal.starts_with("concat("));
    let args = &literal["concat(".len()..literal.len() - 1];
    assert_eq!(decode_concat_args(args).as_deref(), Some(raw));
}

#[test]
fn test_real_world_locator() {
    let raw = r#"//label[text()="Owner's name"]/following-sibling::input"#;
    let literal = escape(raw);
    assert_eq!(
        literal,
        r#"concat('//label[text()="Owner',"'",'s name"]/following-sibling::input')"#
    );
    assert_eq!(unescape(&literal).as_deref(), Some(raw));
}

// Values without quote characters come back single-quoted and untouched
proptest! {
    #[test]
    fn test_quote_free_values_are_single_quoted(raw in "[a-zA-Z0-9/@\\[\\]=()._ -]{0,40}") {
        prop_assert_eq!(escape(&raw), format!("'{}'", raw));
        prop_assert_eq!(unescape(&escape(&raw)), Some(raw));
    }
}

// Any printable value survives escape followed by unescape
proptest! {
    #[test]
    fn test_escape_is_reversible(raw in "[ -~]{0,40}") {
        let literal = escape(&raw);
        prop_assert_eq!(unescape(&literal), Some(raw.clone()));

        let has_single = raw.contains('\'');
        let has_double = raw.contains('"');
        if has_single && has_double {
            prop_assert!(literal.starts_with("concat("));
        } else if has_single {
            prop_assert!(literal.starts_with('"'));
        } else {
            prop_assert!(literal.starts_with('\''));
        }
    }
}
