//! The composed literal navigator.
//!
//! [`LiteralNavigator`] bundles a [`LiteralSyntax`] with the two external
//! collaborators the rules need: a generic word-extent fallback and a
//! natural-language navigator. It exposes every rule as a method and adds
//! [`LiteralNavigator::extent_of_word`], the full single-token decision a
//! host makes for one word step.

use litnav_ir::{Extent, LiteralClass, Span, Token, Trivia};

use crate::closing_quote::closing_quote_offset;
use crate::prose::{NaturalLanguageNavigator, ProseNavigator};
use crate::word_extent::{TokenSpanFallback, WordExtentFallback};
use crate::raw_delimiter::delimiter_start;
use crate::{closing_quote, natural_language, raw_delimiter, trivia, word_extent};
use crate::{LiteralSyntax, NavError};

#[derive(Clone, Debug, Default)]
pub struct LiteralNavigator<F = TokenSpanFallback, N = ProseNavigator> {
    syntax: LiteralSyntax,
    fallback: F,
    prose: N,
}

impl LiteralNavigator {
    /// Navigator with the default collaborators.
    pub fn new(syntax: LiteralSyntax) -> Self {
        LiteralNavigator {
            syntax,
            fallback: TokenSpanFallback,
            prose: ProseNavigator,
        }
    }
}

impl<F, N> LiteralNavigator<F, N> {
    /// Replace the generic word-extent fallback.
    #[must_use]
    pub fn with_fallback<G: WordExtentFallback>(self, fallback: G) -> LiteralNavigator<G, N> {
        LiteralNavigator {
            syntax: self.syntax,
            fallback,
            prose: self.prose,
        }
    }

    /// Replace the natural-language navigator.
    #[must_use]
    pub fn with_prose<M: NaturalLanguageNavigator>(self, prose: M) -> LiteralNavigator<F, M> {
        LiteralNavigator {
            syntax: self.syntax,
            fallback: self.fallback,
            prose,
        }
    }

    pub fn syntax(&self) -> &LiteralSyntax {
        &self.syntax
    }

    pub fn is_within_natural_language(&self, token: &Token<'_>, position: u32) -> bool {
        natural_language::is_within_natural_language(&self.syntax, token, position)
    }

    pub fn is_at_closing_quote(&self, token: &Token<'_>, position: u32) -> Result<bool, NavError> {
        closing_quote::is_at_closing_quote(&self.syntax, token, position)
    }

    pub fn raw_delimiter_start(&self, token: &Token<'_>) -> Result<u32, NavError> {
        raw_delimiter::raw_delimiter_start(&self.syntax, token)
    }

    pub fn should_select_entire_trivia_from_start(&self, trivia: &Trivia) -> bool {
        trivia::should_select_entire_trivia_from_start(trivia)
    }
}

impl<F, N> LiteralNavigator<F, N>
where
    F: WordExtentFallback,
    N: NaturalLanguageNavigator,
{
    pub fn extent_of_word_from_token(&self, token: &Token<'_>, position: u32) -> Extent {
        word_extent::extent_of_word_from_token(&self.syntax, &self.fallback, token, position)
    }

    /// Extent of one word step at `position` in `token`.
    ///
    /// The token end yields an empty, insignificant extent. Natural-language
    /// positions go to the prose navigator; its answer is kept only while
    /// it stays inside the token, and is cut at the closing delimiter so
    /// the delimiter remains its own stop. Everything else goes through
    /// [`Self::extent_of_word_from_token`].
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(kind = %token.kind, position = position)
    )]
    pub fn extent_of_word(&self, token: &Token<'_>, position: u32) -> Extent {
        if position == token.span.end {
            return Extent::insignificant(Span::point(position));
        }

        if self.is_within_natural_language(token, position) {
            let extent = self.prose.extent_of_word(token, position);
            if token.span.contains_span(extent.span) {
                return self.stop_at_closing_delimiter(token, position, extent);
            }
            tracing::debug!(
                token_span = %token.span,
                extent_span = %extent.span,
                "prose extent escapes token, using token rules"
            );
        }

        self.extent_of_word_from_token(token, position)
    }

    /// Cut a prose extent that runs into the closing delimiter.
    ///
    /// The cut keeps the side of the delimiter that holds `position`.
    /// For quoted strings the stop after the delimiter is one byte past
    /// the closing quote, matching the closing-quote extent.
    fn stop_at_closing_delimiter(
        &self,
        token: &Token<'_>,
        position: u32,
        extent: Extent,
    ) -> Extent {
        let delimiter = match token.kind.literal_class() {
            LiteralClass::Quoted(kind) => closing_quote_offset(&self.syntax, kind, token),
            LiteralClass::Raw(kind) => Some(delimiter_start(&self.syntax, kind, token)),
            LiteralClass::Character | LiteralClass::ContentSegment | LiteralClass::Other => None,
        };
        let Some(delimiter) = delimiter else {
            return extent;
        };

        let Extent { span, significant } = extent;
        let cut = if position < delimiter {
            Span::new(span.start, span.end.min(delimiter))
        } else {
            Span::new(span.start.max(delimiter.saturating_add(1)), span.end)
        };
        if cut == span || cut.start > cut.end {
            return extent;
        }
        tracing::trace!(from = %span, to = %cut, "prose extent cut at closing delimiter");
        Extent { span: cut, significant }
    }
}
