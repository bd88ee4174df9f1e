//! Moving overflowed paragraphs onto the following page

use crate::content::{PageBody, Paragraph};
use crate::editing::Caret;
use crate::error::LayoutError;
use log::trace;

/// Insert a run of paragraphs removed from one page at the front of the
/// destination page, preserving their order. When the first incoming
/// paragraph and the destination's current first paragraph belong to the
/// same split group, their content is merged back into one paragraph
/// instead of leaving two adjacent fragments on the same page.
pub fn distribute(
    moved: Vec<Paragraph>,
    dest: &mut PageBody,
    mut caret: Option<&mut Caret>,
) -> Result<(), LayoutError> {
    if dest.is_empty() {
        for paragraph in moved {
            dest.push(paragraph);
        }
        return Ok(());
    }

    // reverse order keeps each insertion at index 0 and leaves only the
    // last-processed (first logical) paragraph adjacent to a potential
    // split sibling
    for paragraph in moved.into_iter().rev() {
        if let Some(group) = paragraph.split_group() {
            if dest.split_group_count(group) > 1 {
                return Err(LayoutError::SplitGroupConflict { group });
            }
        }

        let merges_front = paragraph
            .split_group()
            .and_then(|group| dest.find_split_sibling(group))
            == Some(0);

        if merges_front {
            if let Some(sibling) = dest.get_mut(0) {
                let incoming_id = paragraph.id();
                let incoming_len = paragraph.len();
                trace!(
                    "merging {:?} into split sibling {:?}",
                    incoming_id,
                    sibling.id()
                );
                if let Some(caret) = caret.as_deref_mut() {
                    if caret.paragraph == sibling.id() {
                        caret.offset += incoming_len;
                    } else if caret.paragraph == incoming_id {
                        caret.paragraph = sibling.id();
                    }
                }
                sibling.prepend_runs(paragraph.into_runs());
                continue;
            }
        }

        dest.insert(0, paragraph);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ParagraphId, SplitGroupId};

    fn paragraph(id: u64, text: &str) -> Paragraph {
        Paragraph::from_text(ParagraphId(id), text)
    }

    fn grouped(id: u64, text: &str, group: u64) -> Paragraph {
        let mut p = paragraph(id, text);
        p.set_split_group(SplitGroupId(group));
        p
    }

    #[test]
    fn test_fill_empty_destination_in_order() {
        let mut dest = PageBody::default();
        distribute(
            vec![paragraph(1, "one"), paragraph(2, "two")],
            &mut dest,
            None,
        )
        .unwrap();

        assert_eq!(dest.len(), 2);
        assert_eq!(dest.get(0).unwrap().text(), "one");
        assert_eq!(dest.get(1).unwrap().text(), "two");
    }

    #[test]
    fn test_prepend_before_existing_content() {
        let mut dest = PageBody::default();
        dest.push(paragraph(9, "existing"));

        distribute(
            vec![paragraph(1, "one"), paragraph(2, "two")],
            &mut dest,
            None,
        )
        .unwrap();

        assert_eq!(dest.len(), 3);
        assert_eq!(dest.get(0).unwrap().text(), "one");
        assert_eq!(dest.get(1).unwrap().text(), "two");
        assert_eq!(dest.get(2).unwrap().text(), "existing");
    }

    #[test]
    fn test_merge_into_split_sibling() {
        let mut dest = PageBody::default();
        dest.push(grouped(2, "tail", 7));

        distribute(vec![grouped(1, "head ", 7)], &mut dest, None).unwrap();

        assert_eq!(dest.len(), 1);
        assert_eq!(dest.get(0).unwrap().text(), "head tail");
        assert_eq!(dest.get(0).unwrap().id(), ParagraphId(2));
        assert_eq!(dest.get(0).unwrap().split_group(), Some(SplitGroupId(7)));
    }

    #[test]
    fn test_different_group_does_not_merge() {
        let mut dest = PageBody::default();
        dest.push(grouped(2, "tail", 7));

        distribute(vec![grouped(1, "head ", 8)], &mut dest, None).unwrap();

        assert_eq!(dest.len(), 2);
    }

    #[test]
    fn test_caret_in_sibling_shifts_by_incoming_len() {
        let mut dest = PageBody::default();
        dest.push(grouped(2, "tail", 7));
        let mut caret = Caret::new(ParagraphId(2), 2);

        distribute(vec![grouped(1, "head ", 7)], &mut dest, Some(&mut caret)).unwrap();

        assert_eq!(caret, Caret::new(ParagraphId(2), 7));
    }

    #[test]
    fn test_caret_in_incoming_follows_merge() {
        let mut dest = PageBody::default();
        dest.push(grouped(2, "tail", 7));
        let mut caret = Caret::new(ParagraphId(1), 3);

        distribute(vec![grouped(1, "head ", 7)], &mut dest, Some(&mut caret)).unwrap();

        assert_eq!(caret, Caret::new(ParagraphId(2), 3));
    }

    #[test]
    fn test_duplicate_resident_group_is_rejected() {
        let mut dest = PageBody::default();
        dest.push(grouped(2, "a", 7));
        dest.push(grouped(3, "b", 7));

        let result = distribute(vec![grouped(1, "c", 7)], &mut dest, None);

        assert_eq!(
            result,
            Err(LayoutError::SplitGroupConflict {
                group: SplitGroupId(7)
            })
        );
    }
}
