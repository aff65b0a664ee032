//! Word extents inside natural-language literal content.
//!
//! Text is split into runs of three character categories:
//! - **Whitespace**: spaces, tabs, newlines
//! - **Word**: letters, digits, and underscore
//! - **Symbol**: everything else (punctuation, quotes, operators)
//!
//! So `"don't panic"` steps as `"`, `don`, `'`, `t`, ` `, `panic`, `"`.

use litnav_ir::{Extent, Span, Token};

/// Word navigation over free text inside a token.
pub trait NaturalLanguageNavigator {
    /// Extent of the word containing `position`, within `token.text`.
    fn extent_of_word(&self, token: &Token<'_>, position: u32) -> Extent;
}

/// Character categories for prose word boundaries.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CharClass {
    Whitespace,
    Word,
    Symbol,
}

/// Classify a character for word boundary detection.
pub fn classify_char(c: char) -> CharClass {
    if c.is_whitespace() {
        CharClass::Whitespace
    } else if c.is_alphanumeric() || c == '_' {
        CharClass::Word
    } else {
        CharClass::Symbol
    }
}

/// Run-of-same-class navigator. Whitespace runs are insignificant.
#[derive(Copy, Clone, Debug, Default)]
pub struct ProseNavigator;

impl NaturalLanguageNavigator for ProseNavigator {
    fn extent_of_word(&self, token: &Token<'_>, position: u32) -> Extent {
        let text = token.text;
        let Some(mut offset) = token.relative(position).filter(|&offset| offset < text.len())
        else {
            return Extent::insignificant(Span::point(position));
        };
        while !text.is_char_boundary(offset) {
            offset -= 1;
        }

        let Some(class) = text[offset..].chars().next().map(classify_char) else {
            return Extent::insignificant(Span::point(position));
        };

        let before: usize = text[..offset]
            .chars()
            .rev()
            .take_while(|&c| classify_char(c) == class)
            .map(char::len_utf8)
            .sum();
        let after: usize = text[offset..]
            .chars()
            .take_while(|&c| classify_char(c) == class)
            .map(char::len_utf8)
            .sum();

        let start = token.span.start as usize + offset - before;
        let Ok(span) = Span::try_from_range(start..start + before + after) else {
            return Extent::insignificant(Span::point(position));
        };
        if class == CharClass::Whitespace {
            Extent::insignificant(span)
        } else {
            Extent::significant(span)
        }
    }
}
