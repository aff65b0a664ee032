//! litnav - word navigation rules for literal tokens
//!
//! A generic editor navigator treats every token as one word and splits
//! identifiers and operators with language-agnostic rules. That answer is
//! wrong inside literals: quotes, raw-string delimiter runs, and type
//! suffixes are not content, yet the caret still needs predictable stops
//! around them. This crate supplies those rules.
//!
//! # Rules
//!
//! - [`is_within_natural_language`]: should this offset be navigated as
//!   free text?
//! - [`is_at_closing_quote`]: is this offset the start of a quoted
//!   string's closing delimiter?
//! - [`raw_delimiter_start`]: where does a raw string's closing quote run
//!   begin?
//! - [`extent_of_word_from_token`]: the span one word step lands on.
//! - [`should_select_entire_trivia_from_start`]: do comments select whole?
//!
//! All rules are pure functions of their inputs and the explicit
//! [`LiteralSyntax`]. [`LiteralNavigator`] bundles them with the generic
//! fallback and a prose navigator.
//!
//! # Tracing
//!
//! Decisions are traced at `trace` level, fallbacks at `debug`. Call
//! [`init_tracing`] and set `RUST_LOG=litnav=trace` to see them.

mod closing_quote;
mod error;
mod natural_language;
mod navigator;
mod prose;
mod raw_delimiter;
mod syntax;
mod trivia;
mod word_extent;

pub use closing_quote::is_at_closing_quote;
pub use error::NavError;
pub use natural_language::is_within_natural_language;
pub use navigator::LiteralNavigator;
pub use prose::{classify_char, CharClass, NaturalLanguageNavigator, ProseNavigator};
pub use raw_delimiter::raw_delimiter_start;
pub use syntax::{LiteralSyntax, SuffixEntry, SuffixTable};
pub use trivia::should_select_entire_trivia_from_start;
pub use word_extent::{extent_of_word_from_token, TokenSpanFallback, WordExtentFallback};

pub use litnav_ir::{
    Extent, LiteralClass, QuotedStringKind, RawStringKind, Span, SpanError, Token, TokenKind,
    Trivia, TriviaKind,
};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set,
/// e.g. `RUST_LOG=litnav=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
