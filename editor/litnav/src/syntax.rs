//! Literal syntax configuration.
//!
//! Every rule takes a [`LiteralSyntax`] explicitly instead of reading
//! global constants, so the rules stay pure and a host can describe a
//! dialect with a different quote or suffix set.

use litnav_ir::{LiteralClass, TokenKind};

use crate::NavError;

/// One row of the suffix table: the exact trailing text a kind carries.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SuffixEntry {
    pub kind: TokenKind,
    pub suffix: &'static str,
}

const UTF8_SUFFIXES: [SuffixEntry; 3] = [
    SuffixEntry {
        kind: TokenKind::Utf8StringLiteral,
        suffix: "u8",
    },
    SuffixEntry {
        kind: TokenKind::Utf8SingleLineRawStringLiteral,
        suffix: "u8",
    },
    SuffixEntry {
        kind: TokenKind::Utf8MultiLineRawStringLiteral,
        suffix: "u8",
    },
];

/// Fixed mapping from literal kind to its trailing suffix.
///
/// Suffix letters are matched ASCII case-insensitively, so the `u8`
/// entry accepts both `u8` and `U8`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SuffixTable {
    entries: &'static [SuffixEntry],
}

impl SuffixTable {
    /// No suffixed kinds.
    pub const EMPTY: SuffixTable = SuffixTable { entries: &[] };

    /// `u8` on the three UTF-8 string kinds.
    pub const UTF8: SuffixTable = SuffixTable {
        entries: &UTF8_SUFFIXES,
    };

    /// Build a table from host-provided entries.
    ///
    /// Rejects suffixes on kinds that are not quoted or raw strings,
    /// empty or non-alphanumeric suffixes, and duplicate kinds.
    pub fn new(entries: &'static [SuffixEntry]) -> Result<Self, NavError> {
        for (index, entry) in entries.iter().enumerate() {
            if !matches!(
                entry.kind.literal_class(),
                LiteralClass::Quoted(_) | LiteralClass::Raw(_)
            ) {
                return Err(NavError::SuffixNotAllowed { kind: entry.kind });
            }
            if entry.suffix.is_empty() || !entry.suffix.bytes().all(|b| b.is_ascii_alphanumeric())
            {
                return Err(NavError::InvalidSuffix {
                    kind: entry.kind,
                    suffix: entry.suffix,
                });
            }
            if entries[..index].iter().any(|seen| seen.kind == entry.kind) {
                return Err(NavError::DuplicateSuffix { kind: entry.kind });
            }
        }
        Ok(SuffixTable { entries })
    }

    /// Suffix carried by `kind`, if any.
    #[inline]
    pub fn suffix_for(&self, kind: TokenKind) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|entry| entry.kind == kind)
            .map(|entry| entry.suffix)
    }
}

impl Default for SuffixTable {
    fn default() -> Self {
        Self::UTF8
    }
}

/// Quote character and suffix table for one language.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct LiteralSyntax {
    string_quote: u8,
    suffixes: SuffixTable,
}

impl LiteralSyntax {
    /// `"` strings with `u8` UTF-8 suffixes.
    pub const CSHARP: LiteralSyntax = LiteralSyntax {
        string_quote: b'"',
        suffixes: SuffixTable::UTF8,
    };

    /// Describe a custom dialect.
    pub fn new(string_quote: char, suffixes: SuffixTable) -> Result<Self, NavError> {
        let quote = u8::try_from(string_quote)
            .ok()
            .filter(u8::is_ascii)
            .ok_or(NavError::NonAsciiQuote {
                quote: string_quote,
            })?;
        Ok(LiteralSyntax {
            string_quote: quote,
            suffixes,
        })
    }

    /// The quote byte delimiting quoted and raw strings.
    #[inline]
    pub fn string_quote(&self) -> u8 {
        self.string_quote
    }

    #[inline]
    pub fn suffix_for(&self, kind: TokenKind) -> Option<&'static str> {
        self.suffixes.suffix_for(kind)
    }
}

impl Default for LiteralSyntax {
    fn default() -> Self {
        Self::CSHARP
    }
}
