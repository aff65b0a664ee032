//! Navigator errors.
//!
//! Only two things can go wrong: a caller routes a token to a rule that
//! does not cover its kind, or a host builds an invalid [`LiteralSyntax`].
//! Degenerate literals (unterminated, empty, shorter than their suffix)
//! are ordinary editor states and never produce an error.
//!
//! [`LiteralSyntax`]: crate::LiteralSyntax

use litnav_ir::TokenKind;

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum NavError {
    /// A rule was called with a token kind it is not defined for.
    #[error("`{operation}` is not defined for {kind} tokens")]
    UnsupportedTokenKind {
        operation: &'static str,
        kind: TokenKind,
    },

    /// Delimiter scanning works on bytes, so quotes must be ASCII.
    #[error("quote character {quote:?} is not ASCII")]
    NonAsciiQuote { quote: char },

    /// Suffixes must be non-empty ASCII alphanumerics.
    #[error("suffix {suffix:?} for {kind} tokens must be non-empty ASCII alphanumeric")]
    InvalidSuffix {
        kind: TokenKind,
        suffix: &'static str,
    },

    /// Only quoted and raw string kinds carry suffixes.
    #[error("{kind} tokens cannot carry a literal suffix")]
    SuffixNotAllowed { kind: TokenKind },

    /// Each kind maps to at most one suffix.
    #[error("{kind} tokens have more than one suffix entry")]
    DuplicateSuffix { kind: TokenKind },
}
