//! Closing delimiter location for raw strings.
//!
//! A raw string opens and closes with a run of three or more quotes and
//! may carry a type suffix after the closing run. The closing run, not the
//! content, is where word navigation should land.

use litnav_ir::{RawStringKind, Token};

use crate::{LiteralSyntax, NavError};

/// Absolute offset where the trailing quote run of a raw string begins.
///
/// Only defined for the four raw string kinds. Any other kind yields
/// [`NavError::UnsupportedTokenKind`].
pub fn raw_delimiter_start(
    syntax: &LiteralSyntax,
    token: &Token<'_>,
) -> Result<u32, NavError> {
    let kind = token
        .kind
        .raw_string()
        .ok_or(NavError::UnsupportedTokenKind {
            operation: "raw_delimiter_start",
            kind: token.kind,
        })?;
    Ok(delimiter_start(syntax, kind, token))
}

/// Infallible form for callers that already matched a raw kind.
///
/// The opening run only bounds the backwards scan. When the body is all
/// quotes the two scans meet and the result is the end of the opening run.
pub(crate) fn delimiter_start(
    syntax: &LiteralSyntax,
    kind: RawStringKind,
    token: &Token<'_>,
) -> u32 {
    let text = token.text.as_bytes();
    let quote = syntax.string_quote();
    let suffix_len = syntax.suffix_for(kind.into()).map_or(0, str::len);

    let mut end = text.len().saturating_sub(suffix_len);
    let mut start = 0;
    while start < end && text[start] == quote {
        start += 1;
    }
    while end > start && text[end - 1] == quote {
        end -= 1;
    }

    let end = u32::try_from(end).unwrap_or(u32::MAX);
    token.span.start.saturating_add(end)
}

#[cfg(test)]
mod tests;
