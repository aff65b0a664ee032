//! Natural-language classification inside literal tokens.

use litnav_ir::{LiteralClass, Token};

use crate::closing_quote::closing_quote_at;
use crate::raw_delimiter::delimiter_start;
use crate::LiteralSyntax;

/// Whether `position` lies in literal content that should be navigated
/// word by word as free text.
///
/// - Quoted strings: everything but the closing quote sequence, which is
///   left as its own stop.
/// - Raw strings: everything before the closing quote run.
/// - Character literals: everything but the opening quote. The closing
///   quote is not excluded.
/// - Interpolation and markup text segments: always.
/// - Anything else: never; the generic navigator owns those tokens.
pub fn is_within_natural_language(
    syntax: &LiteralSyntax,
    token: &Token<'_>,
    position: u32,
) -> bool {
    let within = match token.kind.literal_class() {
        LiteralClass::Quoted(kind) => !closing_quote_at(syntax, kind, token, position),
        LiteralClass::Raw(kind) => position < delimiter_start(syntax, kind, token),
        LiteralClass::Character => position != token.span.start,
        LiteralClass::ContentSegment => true,
        LiteralClass::Other => false,
    };
    tracing::trace!(kind = %token.kind, position, within, "natural language check");
    within
}
