//! Closing-quote detection for quoted strings.
//!
//! The closing delimiter of `"text"` is the final quote; for `"text"u8`
//! it is the quote plus the suffix. Word navigation treats that sequence
//! as its own stop, so the caret halts both before and after it.

use litnav_ir::{QuotedStringKind, Token};

use crate::{LiteralSyntax, NavError};

/// Whether `position` is the first byte of the token's closing quote
/// sequence.
///
/// Only defined for quoted strings. Any other kind is a routing bug in
/// the caller and yields [`NavError::UnsupportedTokenKind`].
pub fn is_at_closing_quote(
    syntax: &LiteralSyntax,
    token: &Token<'_>,
    position: u32,
) -> Result<bool, NavError> {
    let kind = token
        .kind
        .quoted_string()
        .ok_or(NavError::UnsupportedTokenKind {
            operation: "is_at_closing_quote",
            kind: token.kind,
        })?;
    Ok(closing_quote_at(syntax, kind, token, position))
}

/// Infallible form for callers that already matched a quoted kind.
pub(crate) fn closing_quote_at(
    syntax: &LiteralSyntax,
    kind: QuotedStringKind,
    token: &Token<'_>,
    position: u32,
) -> bool {
    closing_quote_offset(syntax, kind, token) == Some(position)
}

/// Absolute offset of the closing quote sequence, or `None` when the token
/// does not end with the quote followed by its suffix.
pub(crate) fn closing_quote_offset(
    syntax: &LiteralSyntax,
    kind: QuotedStringKind,
    token: &Token<'_>,
) -> Option<u32> {
    let suffix = syntax.suffix_for(kind.into()).unwrap_or_default();
    let closing_len = 1 + suffix.len();
    let offset = token
        .span
        .end
        .checked_sub(u32::try_from(closing_len).ok()?)?;

    // Unterminated or too short to hold quote + suffix.
    let bytes = token.text.as_bytes();
    let tail_start = bytes.len().checked_sub(closing_len)?;
    let (&quote, tail) = bytes[tail_start..].split_first()?;
    (quote == syntax.string_quote() && tail.eq_ignore_ascii_case(suffix.as_bytes()))
        .then_some(offset)
}

#[cfg(test)]
mod tests;
