use pretty_assertions::assert_eq;

use litnav_ir::TokenKind;

use super::*;

fn check(kind: TokenKind, text: &str, start: u32, position: u32) -> bool {
    let token = Token::new(kind, text, start);
    match is_at_closing_quote(&LiteralSyntax::CSHARP, &token, position) {
        Ok(at_quote) => at_quote,
        Err(err) => panic!("unexpected error: {err}"),
    }
}

// === Plain strings ===

#[test]
fn plain_closing_quote_is_last_byte() {
    // `"abc"` at 10..15
    assert!(check(TokenKind::StringLiteral, "\"abc\"", 10, 14));
}

#[test]
fn plain_other_offsets_are_not_closing() {
    for position in 10..14 {
        assert!(
            !check(TokenKind::StringLiteral, "\"abc\"", 10, position),
            "offset {position}"
        );
    }
    assert!(!check(TokenKind::StringLiteral, "\"abc\"", 10, 15));
}

#[test]
fn plain_unterminated_has_no_closing_quote() {
    assert!(!check(TokenKind::StringLiteral, "\"abc", 0, 3));
}

#[test]
fn plain_empty_string() {
    assert!(check(TokenKind::StringLiteral, "\"\"", 0, 1));
    assert!(!check(TokenKind::StringLiteral, "\"\"", 0, 0));
}

#[test]
fn plain_empty_token_text() {
    assert!(!check(TokenKind::StringLiteral, "", 0, 0));
    assert!(!check(TokenKind::StringLiteral, "", 5, 4));
}

// === UTF-8 suffixed strings ===

#[test]
fn utf8_closing_sequence_starts_three_from_end() {
    // `"abc"u8` at 0..7, closing `"u8` at 4
    assert!(check(TokenKind::Utf8StringLiteral, "\"abc\"u8", 0, 4));
    assert!(!check(TokenKind::Utf8StringLiteral, "\"abc\"u8", 0, 3));
    assert!(!check(TokenKind::Utf8StringLiteral, "\"abc\"u8", 0, 5));
    assert!(!check(TokenKind::Utf8StringLiteral, "\"abc\"u8", 0, 6));
    assert!(!check(TokenKind::Utf8StringLiteral, "\"abc\"u8", 0, 7));
}

#[test]
fn utf8_suffix_letter_is_case_insensitive() {
    assert!(check(TokenKind::Utf8StringLiteral, "\"abc\"U8", 0, 4));
    assert!(check(TokenKind::Utf8StringLiteral, "\"abc\"U8", 20, 24));
}

#[test]
fn utf8_wrong_suffix_is_not_closing() {
    // Same length as `"u8`, so only the suffix comparison can reject these.
    for text in ["\"abc\"8u", "\"abc\"u9", "\"abc\"x8", "\"abc\"uu", "\"abc\"88"] {
        assert!(!check(TokenKind::Utf8StringLiteral, text, 0, 4), "{text}");
    }
}

#[test]
fn utf8_quote_byte_must_precede_suffix() {
    assert!(!check(TokenKind::Utf8StringLiteral, "\"abcxu8", 0, 4));
}

#[test]
fn utf8_truncated_suffix_is_not_closing() {
    // Mid-typing: `"abc"u` is 6 bytes, so the expected start is 3.
    assert!(!check(TokenKind::Utf8StringLiteral, "\"abc\"u", 0, 3));
    assert!(!check(TokenKind::Utf8StringLiteral, "\"abc\"u", 0, 4));
    assert!(!check(TokenKind::Utf8StringLiteral, "\"abc\"u", 0, 5));
}

#[test]
fn utf8_shorter_than_closing_sequence() {
    assert!(!check(TokenKind::Utf8StringLiteral, "u8", 0, 0));
    assert!(!check(TokenKind::Utf8StringLiteral, "", 3, 0));
}

#[test]
fn utf8_minimal_token() {
    // `"u8` alone is exactly the closing sequence.
    assert!(check(TokenKind::Utf8StringLiteral, "\"u8", 7, 7));
}

// === Contract ===

#[test]
fn other_kinds_are_a_contract_violation() {
    for kind in [
        TokenKind::CharacterLiteral,
        TokenKind::SingleLineRawStringLiteral,
        TokenKind::Utf8MultiLineRawStringLiteral,
        TokenKind::InterpolatedStringText,
        TokenKind::Identifier,
    ] {
        let token = Token::new(kind, "\"x\"", 0);
        assert_eq!(
            is_at_closing_quote(&LiteralSyntax::CSHARP, &token, 2),
            Err(NavError::UnsupportedTokenKind {
                operation: "is_at_closing_quote",
                kind,
            })
        );
    }
}

// === Custom syntax ===

#[test]
fn custom_quote_character() {
    let Ok(syntax) = LiteralSyntax::new('`', crate::SuffixTable::EMPTY) else {
        panic!("backtick is a valid quote");
    };
    let token = Token::new(TokenKind::StringLiteral, "`abc`", 0);
    assert_eq!(is_at_closing_quote(&syntax, &token, 4), Ok(true));

    let token = Token::new(TokenKind::StringLiteral, "\"abc\"", 0);
    assert_eq!(is_at_closing_quote(&syntax, &token, 4), Ok(false));
}

#[test]
fn utf8_kind_without_table_entry_behaves_like_plain() {
    let Ok(syntax) = LiteralSyntax::new('"', crate::SuffixTable::EMPTY) else {
        panic!("double quote is a valid quote");
    };
    let token = Token::new(TokenKind::Utf8StringLiteral, "\"abc\"", 0);
    assert_eq!(is_at_closing_quote(&syntax, &token, 4), Ok(true));
}
