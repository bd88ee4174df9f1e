//! Overflow detection against a page's height budget

use crate::content::PageBody;
use crate::geometry::GeometryOracle;
use smallvec::SmallVec;

/// Indices of exceeding paragraphs; small bodies dominate in practice
pub type ExceedSet = SmallVec<[usize; 4]>;

/// First paragraph, in reading order, whose bottom extent exceeds the
/// budget bottom
pub fn first_exceeding(
    page: usize,
    body: &PageBody,
    budget_bottom: f32,
    oracle: &dyn GeometryOracle,
) -> Option<usize> {
    (0..body.len()).find(|&index| oracle.paragraph_extent(page, body, index).bottom > budget_bottom)
}

/// Every paragraph whose bottom extent exceeds the budget bottom, in order.
/// When every paragraph in the body exceeds, the first is excluded so that
/// distribution alone can never empty a page: at least one paragraph always
/// stays on the page that overflowed.
pub fn exceeding_set(
    page: usize,
    body: &PageBody,
    budget_bottom: f32,
    oracle: &dyn GeometryOracle,
) -> ExceedSet {
    let mut exceeding: ExceedSet = (0..body.len())
        .filter(|&index| oracle.paragraph_extent(page, body, index).bottom > budget_bottom)
        .collect();

    if !body.is_empty() && exceeding.len() == body.len() {
        exceeding.remove(0);
    }

    exceeding
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Paragraph, ParagraphId};
    use crate::geometry::{FontMetrics, PageConfig, TextMetricsOracle};

    fn test_oracle() -> TextMetricsOracle {
        // 5 characters per line, 3 lines per page
        TextMetricsOracle::new(
            PageConfig {
                body_width: 40.0,
                body_height: 48.0,
                page_gap: 16.0,
            },
            FontMetrics::monospace(8.0, 16.0),
        )
    }

    fn body_of(texts: &[&str]) -> PageBody {
        let mut body = PageBody::new();
        for (i, text) in texts.iter().enumerate() {
            body.push(Paragraph::from_text(ParagraphId(i as u64), *text));
        }
        body
    }

    #[test]
    fn test_nothing_exceeds_when_content_fits() {
        let oracle = test_oracle();
        let body = body_of(&["aaaa", "bbbb"]);

        assert_eq!(first_exceeding(0, &body, 48.0, &oracle), None);
        assert!(exceeding_set(0, &body, 48.0, &oracle).is_empty());
    }

    #[test]
    fn test_straddling_paragraph_is_first_exceeding() {
        let oracle = test_oracle();
        // 2 lines, then a 2-line paragraph that crosses the 3-line budget
        let body = body_of(&["aaaa bbbb", "cccc dddd"]);

        assert_eq!(first_exceeding(0, &body, 48.0, &oracle), Some(1));
        let set = exceeding_set(0, &body, 48.0, &oracle);
        assert_eq!(set.as_slice(), &[1]);
    }

    #[test]
    fn test_fits_exactly_does_not_exceed() {
        let oracle = test_oracle();
        let body = body_of(&["aaaa bbbb cccc"]);

        assert_eq!(first_exceeding(0, &body, 48.0, &oracle), None);
    }

    #[test]
    fn test_all_exceeding_keeps_first() {
        let oracle = test_oracle();
        // single paragraph taller than the page
        let body = body_of(&["aaaa bbbb cccc dddd eeee"]);

        assert_eq!(first_exceeding(0, &body, 48.0, &oracle), Some(0));
        assert!(exceeding_set(0, &body, 48.0, &oracle).is_empty());
    }

    #[test]
    fn test_all_exceeding_with_many_paragraphs_keeps_only_first() {
        let oracle = test_oracle();
        // first paragraph alone overfills the page, so every paragraph
        // bottoms out past the budget
        let body = body_of(&["aaaa bbbb cccc dddd", "eeee", "ffff"]);

        let set = exceeding_set(0, &body, 48.0, &oracle);
        assert_eq!(set.as_slice(), &[1, 2]);
    }
}
