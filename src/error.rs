//! Layout failure modes

use crate::content::{ParagraphId, SplitGroupId};
use thiserror::Error;

/// Errors surfaced by pagination. All of them indicate a contract violation
/// between the measuring oracle and the layout pass rather than a user
/// error, so callers normally log them and keep the last good page set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The sweep tried to lay out a page past the hard page cap
    #[error("page {page} exceeds the maximum page count")]
    SweepLimitExceeded { page: usize },

    /// The detector flagged a paragraph as exceeding but none of its
    /// visual lines lies past the cutoff, so a split would produce an
    /// empty tail
    #[error("split of paragraph {paragraph:?} would produce an empty tail")]
    EmptyTailSplit { paragraph: ParagraphId },

    /// Distribution found more than one resident fragment of the same
    /// split group on the destination page
    #[error("destination page already holds multiple fragments of split group {group:?}")]
    SplitGroupConflict { group: SplitGroupId },
}
