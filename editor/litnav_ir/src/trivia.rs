//! Trivia (comments, whitespace, directives) attached to tokens.

use std::fmt;

use super::Span;

/// A piece of trivia with its span.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Trivia {
    pub kind: TriviaKind,
    pub span: Span,
}

impl Trivia {
    #[inline]
    pub fn new(kind: TriviaKind, span: Span) -> Self {
        Trivia { kind, span }
    }
}

impl fmt::Debug for Trivia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

/// The kind of trivia, distinguishing comments from layout.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TriviaKind {
    Whitespace,
    EndOfLine,
    /// `// text`
    SingleLineComment,
    /// `/* text */`
    MultiLineComment,
    /// `/// text`
    SingleLineDocComment,
    /// `/** text */`
    MultiLineDocComment,
    /// `#region`, `#if`, ...
    Directive,
    /// Text excluded by a preprocessor directive.
    DisabledText,
}

impl TriviaKind {
    /// Check if this is a documentation comment.
    #[inline]
    pub fn is_doc_comment(self) -> bool {
        matches!(
            self,
            TriviaKind::SingleLineDocComment | TriviaKind::MultiLineDocComment
        )
    }

    /// Check if this is a regular (non-doc) comment.
    #[inline]
    pub fn is_regular_comment(self) -> bool {
        matches!(
            self,
            TriviaKind::SingleLineComment | TriviaKind::MultiLineComment
        )
    }

    #[inline]
    pub fn is_regular_or_doc_comment(self) -> bool {
        self.is_regular_comment() || self.is_doc_comment()
    }
}
