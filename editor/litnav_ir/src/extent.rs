//! The answer of one word-navigation step.

use std::fmt;

use super::Span;

/// A resolved span plus whether it is a genuine word stop.
///
/// Insignificant extents cover filler such as whitespace; the navigator
/// moves across them without stopping.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Extent {
    pub span: Span,
    pub significant: bool,
}

impl Extent {
    /// An extent the caret stops at.
    #[inline]
    pub const fn significant(span: Span) -> Self {
        Extent {
            span,
            significant: true,
        }
    }

    /// An extent the caret moves across.
    #[inline]
    pub const fn insignificant(span: Span) -> Self {
        Extent {
            span,
            significant: false,
        }
    }
}

impl fmt::Debug for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.significant {
            write!(f, "{}", self.span)
        } else {
            write!(f, "{} (insignificant)", self.span)
        }
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Extent;
    crate::static_assert_size!(Extent, 12);
}
