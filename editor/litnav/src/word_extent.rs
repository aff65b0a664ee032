//! Word extents for literal tokens, with a pluggable generic fallback.

use litnav_ir::{Extent, LiteralClass, Span, Token};

use crate::closing_quote::closing_quote_at;
use crate::raw_delimiter::delimiter_start;
use crate::LiteralSyntax;

/// The generic word-extent resolver used for tokens without a literal
/// rule.
///
/// Implemented for any `Fn(&Token, u32) -> Extent`, so a host can pass a
/// closure or function.
pub trait WordExtentFallback {
    fn extent_of_word(&self, token: &Token<'_>, position: u32) -> Extent;
}

impl<F> WordExtentFallback for F
where
    F: Fn(&Token<'_>, u32) -> Extent,
{
    fn extent_of_word(&self, token: &Token<'_>, position: u32) -> Extent {
        self(token, position)
    }
}

/// Treats the whole token as one significant word.
#[derive(Copy, Clone, Debug, Default)]
pub struct TokenSpanFallback;

impl WordExtentFallback for TokenSpanFallback {
    fn extent_of_word(&self, token: &Token<'_>, _position: u32) -> Extent {
        Extent::significant(token.span)
    }
}

/// Extent a word-navigation step should use for `position` in `token`.
///
/// - Quoted string at its closing quote: the single quote byte, so the
///   caret stops on both sides of it.
/// - Raw string: the closing quote run through the token end. `position`
///   is not consulted for raw strings.
/// - Anything else: `fallback`'s answer, unchanged.
#[tracing::instrument(level = "trace", skip_all, fields(kind = %token.kind, position = position))]
pub fn extent_of_word_from_token<F>(
    syntax: &LiteralSyntax,
    fallback: &F,
    token: &Token<'_>,
    position: u32,
) -> Extent
where
    F: WordExtentFallback + ?Sized,
{
    match token.kind.literal_class() {
        LiteralClass::Quoted(kind) if closing_quote_at(syntax, kind, token, position) => {
            Extent::significant(Span::new(position, position.saturating_add(1)))
        }
        LiteralClass::Raw(kind) => {
            let start = delimiter_start(syntax, kind, token);
            Extent::significant(Span::new(start, token.span.end))
        }
        LiteralClass::Quoted(_)
        | LiteralClass::Character
        | LiteralClass::ContentSegment
        | LiteralClass::Other => {
            tracing::trace!("no literal rule, deferring to fallback");
            fallback.extent_of_word(token, position)
        }
    }
}
