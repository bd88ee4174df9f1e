//! Caret position tracking across split and merge operations

use crate::content::ParagraphId;

/// Position of the text caret as (paragraph, byte offset within the
/// paragraph's concatenated run text). Explicitly threaded through the
/// layout operations rather than read from any ambient selection state;
/// the host applies it to whatever concrete caret representation it uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caret {
    /// The paragraph holding the caret
    pub paragraph: ParagraphId,
    /// Byte offset within the paragraph content
    pub offset: usize,
}

impl Caret {
    /// Create a caret at the given position
    pub fn new(paragraph: ParagraphId, offset: usize) -> Self {
        Self { paragraph, offset }
    }

    /// Create a caret at the start of a paragraph
    pub fn at_start(paragraph: ParagraphId) -> Self {
        Self::new(paragraph, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_start() {
        let caret = Caret::at_start(ParagraphId(3));
        assert_eq!(caret.paragraph, ParagraphId(3));
        assert_eq!(caret.offset, 0);
    }
}
