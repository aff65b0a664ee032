//! Trivia selection rule.

use litnav_ir::Trivia;

/// Whether a word selection starting in `trivia` should take the whole
/// trivia. True for regular and documentation comments.
#[inline]
pub fn should_select_entire_trivia_from_start(trivia: &Trivia) -> bool {
    trivia.kind.is_regular_or_doc_comment()
}
