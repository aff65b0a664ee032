//! litnav IR - value types for literal-aware word navigation
//!
//! This crate contains the data the navigator reads and produces:
//! - Spans for absolute document offsets
//! - Tokens (kind, text, span) as handed over by the host's lexer
//! - Trivia (comments, whitespace) for the trivia selection rule
//! - Extents, the answer of a single word-navigation step
//!
//! Every type is an immutable `Copy` value. Nothing here allocates, and
//! nothing outlives the call that builds it.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod extent;
mod span;
mod token;
mod trivia;

pub use extent::Extent;
pub use span::{Span, SpanError};
pub use token::{LiteralClass, QuotedStringKind, RawStringKind, Token, TokenKind};
pub use trivia::{Trivia, TriviaKind};
