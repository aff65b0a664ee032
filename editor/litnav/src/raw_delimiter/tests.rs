use pretty_assertions::assert_eq;

use litnav_ir::TokenKind;

use super::*;

fn start_of(kind: TokenKind, text: &str, start: u32) -> u32 {
    let token = Token::new(kind, text, start);
    match raw_delimiter_start(&LiteralSyntax::CSHARP, &token) {
        Ok(offset) => offset,
        Err(err) => panic!("unexpected error: {err}"),
    }
}

#[test]
fn single_line_finds_closing_run() {
    // `"""hello"""`: closing run at relative 8
    assert_eq!(
        start_of(TokenKind::SingleLineRawStringLiteral, r#""""hello""""#, 0),
        8
    );
    assert_eq!(
        start_of(TokenKind::SingleLineRawStringLiteral, r#""""hello""""#, 20),
        28
    );
}

#[test]
fn multi_line_finds_closing_run() {
    let text = "\"\"\"\n  text\n  \"\"\"";
    assert_eq!(text.len(), 16);
    assert_eq!(start_of(TokenKind::MultiLineRawStringLiteral, text, 0), 13);
}

#[test]
fn longer_delimiters_and_inner_quotes() {
    // Four-quote delimiters around `a"b`.
    let text = "\"\"\"\"a\"b\"\"\"\"";
    assert_eq!(text.len(), 11);
    assert_eq!(start_of(TokenKind::SingleLineRawStringLiteral, text, 0), 7);
}

#[test]
fn utf8_suffix_is_excluded() {
    assert_eq!(
        start_of(TokenKind::Utf8SingleLineRawStringLiteral, r#""""hi"""u8"#, 0),
        5
    );
    assert_eq!(
        start_of(TokenKind::Utf8SingleLineRawStringLiteral, r#""""hi"""U8"#, 0),
        5
    );
    let text = "\"\"\"\nhi\n\"\"\"u8";
    assert_eq!(start_of(TokenKind::Utf8MultiLineRawStringLiteral, text, 10), 17);
}

#[test]
fn all_quotes_collapses_after_opening_run() {
    // Six quotes, no content: the whole body counts as delimiter.
    assert_eq!(
        start_of(TokenKind::SingleLineRawStringLiteral, r#""""""""#, 0),
        6
    );
    assert_eq!(
        start_of(TokenKind::SingleLineRawStringLiteral, r#""""""""#, 100),
        106
    );
}

#[test]
fn all_quotes_with_suffix() {
    assert_eq!(
        start_of(TokenKind::Utf8SingleLineRawStringLiteral, "\"\"\"\"\"\"u8", 0),
        6
    );
}

#[test]
fn unterminated_has_no_closing_run() {
    assert_eq!(
        start_of(TokenKind::SingleLineRawStringLiteral, r#""""abc"#, 4),
        10
    );
}

#[test]
fn shorter_than_suffix_does_not_underflow() {
    assert_eq!(start_of(TokenKind::Utf8SingleLineRawStringLiteral, "8", 3), 3);
    assert_eq!(start_of(TokenKind::Utf8MultiLineRawStringLiteral, "", 9), 9);
}

#[test]
fn other_kinds_are_a_contract_violation() {
    for kind in [
        TokenKind::StringLiteral,
        TokenKind::Utf8StringLiteral,
        TokenKind::CharacterLiteral,
        TokenKind::Keyword,
    ] {
        let token = Token::new(kind, r#""""x""""#, 0);
        assert_eq!(
            raw_delimiter_start(&LiteralSyntax::CSHARP, &token),
            Err(NavError::UnsupportedTokenKind {
                operation: "raw_delimiter_start",
                kind,
            })
        );
    }
}
