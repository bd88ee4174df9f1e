//! Paragraph splitting at a visual line boundary

use crate::content::{PageBody, Paragraph, ParagraphId, SplitGroupId};
use crate::editing::Caret;
use crate::error::LayoutError;
use crate::geometry::GeometryOracle;
use log::debug;
use unicode_segmentation::UnicodeSegmentation;

/// Identity source for split groups, owned by the engine instance
#[derive(Debug, Default)]
pub struct SplitGroupCounter {
    next: u64,
}

impl SplitGroupCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next unused id
    pub fn allocate(&mut self) -> SplitGroupId {
        self.next += 1;
        SplitGroupId(self.next)
    }
}

/// One measurable unit of paragraph content: a single grapheme cluster with
/// back-references into the run sequence. Materialized only for the duration
/// of one split, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtomicUnit {
    /// Byte offset within the paragraph's concatenated text
    pub offset: usize,
    /// Byte length of the cluster
    pub len: usize,
    /// Index of the originating run
    pub run: usize,
}

/// Decompose a paragraph into atomic units in reading order
pub fn tokenize(paragraph: &Paragraph) -> Vec<AtomicUnit> {
    let mut units = Vec::new();
    let mut base = 0;

    for (run_index, run) in paragraph.runs().iter().enumerate() {
        for (offset, grapheme) in run.text.grapheme_indices(true) {
            units.push(AtomicUnit {
                offset: base + offset,
                len: grapheme.len(),
                run: run_index,
            });
        }
        base += run.text.len();
    }

    units
}

/// A vertically monotonic band of units forming one visual line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineBand {
    /// Index into the unit sequence of the line's first unit
    pub first_unit: usize,
    pub top: f32,
    pub bottom: f32,
}

/// Group units into visual lines from geometry alone: a new line begins
/// whenever a unit's top extent is at or beyond the current band's bottom
pub fn group_lines(
    page: usize,
    body: &PageBody,
    index: usize,
    units: &[AtomicUnit],
    oracle: &dyn GeometryOracle,
) -> Vec<LineBand> {
    let mut lines: Vec<LineBand> = Vec::new();

    for (unit_index, unit) in units.iter().enumerate() {
        let extent = oracle.unit_extent(page, body, index, unit.offset);
        match lines.last_mut() {
            Some(line) if extent.top < line.bottom => {
                line.bottom = line.bottom.max(extent.bottom);
            }
            _ => lines.push(LineBand {
                first_unit: unit_index,
                top: extent.top,
                bottom: extent.bottom,
            }),
        }
    }

    lines
}

/// What the splitter did with the paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitOutcome {
    /// A tail paragraph was created from the content at and after the byte
    /// offset and inserted immediately after the original
    Split { offset: usize },
    /// The paragraph was left whole: it has no units, or even its first
    /// line lies past the cutoff, so distribution should move all of it
    Whole,
}

/// Split the paragraph at `index` so that every visual line past
/// `cutoff_bottom` moves into a new tail paragraph inserted right after it.
/// The tail carries the original's formatting and the paragraph's split
/// group (allocated fresh if the original had none). A caret inside the
/// tail range is translated into the tail paragraph.
///
/// Callers only invoke this for a paragraph the detector confirmed
/// exceeding; a paragraph whose lines all fit the cutoff is a
/// detector/splitter disagreement and is reported as an error.
#[allow(clippy::too_many_arguments)]
pub fn split_paragraph(
    page: usize,
    body: &mut PageBody,
    index: usize,
    cutoff_bottom: f32,
    tail_id: ParagraphId,
    groups: &mut SplitGroupCounter,
    mut caret: Option<&mut Caret>,
    oracle: &dyn GeometryOracle,
) -> Result<SplitOutcome, LayoutError> {
    let paragraph = match body.get(index) {
        Some(p) => p,
        None => return Ok(SplitOutcome::Whole),
    };
    let paragraph_id = paragraph.id();

    let units = tokenize(paragraph);
    if units.is_empty() {
        return Ok(SplitOutcome::Whole);
    }

    let lines = group_lines(page, body, index, &units, oracle);
    let tail_line = lines
        .iter()
        .find(|line| line.bottom > cutoff_bottom)
        .copied()
        .ok_or(LayoutError::EmptyTailSplit {
            paragraph: paragraph_id,
        })?;

    let split_offset = units[tail_line.first_unit].offset;
    if split_offset == 0 {
        // the whole paragraph is past the cutoff; nothing to split
        return Ok(SplitOutcome::Whole);
    }

    let Some(head) = body.get_mut(index) else {
        return Ok(SplitOutcome::Whole);
    };
    let tail_runs = head.split_off(split_offset);

    let group = match head.split_group() {
        // the head is already part of a split; the identity names the
        // logical paragraph, not the split event
        Some(existing) => existing,
        None => {
            let fresh = groups.allocate();
            head.set_split_group(fresh);
            fresh
        }
    };
    head.normalize();

    let mut tail = Paragraph::with_runs(tail_id, tail_runs);
    tail.set_split_group(group);
    body.insert(index + 1, tail);

    if let Some(caret) = caret.as_deref_mut() {
        if caret.paragraph == paragraph_id && caret.offset >= split_offset {
            caret.paragraph = tail_id;
            caret.offset -= split_offset;
        }
    }

    debug!(
        "split paragraph {:?} at byte {} into tail {:?} (group {:?})",
        paragraph_id, split_offset, tail_id, group
    );

    Ok(SplitOutcome::Split {
        offset: split_offset,
    })
}
