//! Tokens as handed over by the host's lexer.
//!
//! The navigator never lexes. A [`Token`] is a borrowed view of one
//! already-classified lexical unit: its kind, its exact source text, and
//! its absolute span in the snapshot.

use std::fmt;

use super::{Span, SpanError};

/// A token with its source text and span.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub span: Span,
}

impl<'src> Token<'src> {
    /// Create a token starting at `start`, spanning `text.len()` bytes.
    ///
    /// # Panics
    /// Panics if the token would end past `u32::MAX`.
    /// Use `try_new` for fallible construction.
    #[inline]
    pub fn new(kind: TokenKind, text: &'src str, start: u32) -> Self {
        Self::try_new(kind, text, start).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Create a token starting at `start`, spanning `text.len()` bytes.
    pub fn try_new(kind: TokenKind, text: &'src str, start: u32) -> Result<Self, SpanError> {
        let start = start as usize;
        let span = Span::try_from_range(start..start.saturating_add(text.len()))?;
        Ok(Token { kind, text, span })
    }

    /// Offset of `position` relative to the start of the token text.
    ///
    /// `None` when `position` lies before the token.
    #[inline]
    pub fn relative(&self, position: u32) -> Option<usize> {
        position
            .checked_sub(self.span.start)
            .map(|offset| offset as usize)
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} @ {}", self.kind, self.text, self.span)
    }
}

/// Token kinds the navigator can be asked about.
///
/// The literal kinds are the ones with dedicated word rules. Everything
/// else is listed so hosts can pass any token through and get the
/// generic answer back.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // === Quoted strings ===
    /// `"text"`
    StringLiteral,
    /// `"text"u8`
    Utf8StringLiteral,

    // === Raw strings ===
    /// `"""text"""` on one line
    SingleLineRawStringLiteral,
    /// `"""text"""u8` on one line
    Utf8SingleLineRawStringLiteral,
    /// `"""` newline, text, newline `"""`
    MultiLineRawStringLiteral,
    /// `"""` newline, text, newline `"""u8`
    Utf8MultiLineRawStringLiteral,

    /// `'c'`
    CharacterLiteral,

    // === Literal content segments ===
    /// Text between the holes of an interpolated string.
    InterpolatedStringText,
    /// Text content inside a documentation markup element.
    XmlTextLiteral,

    // === Everything else ===
    Identifier,
    Keyword,
    NumericLiteral,
    Operator,
    Punctuation,
    /// `$"` or `$"""`
    InterpolatedStringStart,
    /// Closing quote(s) of an interpolated string.
    InterpolatedStringEnd,
    EndOfFile,
    Unknown,
}

impl TokenKind {
    /// Which word rule family this kind falls under.
    #[inline]
    pub const fn literal_class(self) -> LiteralClass {
        match self {
            TokenKind::StringLiteral => LiteralClass::Quoted(QuotedStringKind::Plain),
            TokenKind::Utf8StringLiteral => LiteralClass::Quoted(QuotedStringKind::Utf8),
            TokenKind::SingleLineRawStringLiteral => LiteralClass::Raw(RawStringKind::SingleLine),
            TokenKind::Utf8SingleLineRawStringLiteral => {
                LiteralClass::Raw(RawStringKind::Utf8SingleLine)
            }
            TokenKind::MultiLineRawStringLiteral => LiteralClass::Raw(RawStringKind::MultiLine),
            TokenKind::Utf8MultiLineRawStringLiteral => {
                LiteralClass::Raw(RawStringKind::Utf8MultiLine)
            }
            TokenKind::CharacterLiteral => LiteralClass::Character,
            TokenKind::InterpolatedStringText | TokenKind::XmlTextLiteral => {
                LiteralClass::ContentSegment
            }
            TokenKind::Identifier
            | TokenKind::Keyword
            | TokenKind::NumericLiteral
            | TokenKind::Operator
            | TokenKind::Punctuation
            | TokenKind::InterpolatedStringStart
            | TokenKind::InterpolatedStringEnd
            | TokenKind::EndOfFile
            | TokenKind::Unknown => LiteralClass::Other,
        }
    }

    /// The quoted-string flavour of this kind, if it is one.
    #[inline]
    pub const fn quoted_string(self) -> Option<QuotedStringKind> {
        match self.literal_class() {
            LiteralClass::Quoted(kind) => Some(kind),
            _ => None,
        }
    }

    /// The raw-string flavour of this kind, if it is one.
    #[inline]
    pub const fn raw_string(self) -> Option<RawStringKind> {
        match self.literal_class() {
            LiteralClass::Raw(kind) => Some(kind),
            _ => None,
        }
    }

    /// Short human-readable name, used in diagnostics.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::StringLiteral => "string literal",
            TokenKind::Utf8StringLiteral => "UTF-8 string literal",
            TokenKind::SingleLineRawStringLiteral => "single-line raw string literal",
            TokenKind::Utf8SingleLineRawStringLiteral => "UTF-8 single-line raw string literal",
            TokenKind::MultiLineRawStringLiteral => "multi-line raw string literal",
            TokenKind::Utf8MultiLineRawStringLiteral => "UTF-8 multi-line raw string literal",
            TokenKind::CharacterLiteral => "character literal",
            TokenKind::InterpolatedStringText => "interpolated string text",
            TokenKind::XmlTextLiteral => "XML text",
            TokenKind::Identifier => "identifier",
            TokenKind::Keyword => "keyword",
            TokenKind::NumericLiteral => "numeric literal",
            TokenKind::Operator => "operator",
            TokenKind::Punctuation => "punctuation",
            TokenKind::InterpolatedStringStart => "interpolated string start",
            TokenKind::InterpolatedStringEnd => "interpolated string end",
            TokenKind::EndOfFile => "end of file",
            TokenKind::Unknown => "unknown token",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Rule family of a token kind.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LiteralClass {
    /// Single-quote-delimited string, optionally suffixed.
    Quoted(QuotedStringKind),
    /// Multi-quote-delimited string, optionally suffixed.
    Raw(RawStringKind),
    Character,
    /// Literal content carved out of an interpolation or markup.
    ContentSegment,
    /// No literal rule; the generic navigator decides.
    Other,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum QuotedStringKind {
    Plain,
    Utf8,
}

impl From<QuotedStringKind> for TokenKind {
    fn from(kind: QuotedStringKind) -> Self {
        match kind {
            QuotedStringKind::Plain => TokenKind::StringLiteral,
            QuotedStringKind::Utf8 => TokenKind::Utf8StringLiteral,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum RawStringKind {
    SingleLine,
    Utf8SingleLine,
    MultiLine,
    Utf8MultiLine,
}

impl From<RawStringKind> for TokenKind {
    fn from(kind: RawStringKind) -> Self {
        match kind {
            RawStringKind::SingleLine => TokenKind::SingleLineRawStringLiteral,
            RawStringKind::Utf8SingleLine => TokenKind::Utf8SingleLineRawStringLiteral,
            RawStringKind::MultiLine => TokenKind::MultiLineRawStringLiteral,
            RawStringKind::Utf8MultiLine => TokenKind::Utf8MultiLineRawStringLiteral,
        }
    }
}
