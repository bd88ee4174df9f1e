//! The pagination sweep

use crate::content::PageSet;
use crate::editing::Caret;
use crate::error::LayoutError;
use crate::geometry::GeometryOracle;
use crate::layout::distribute::distribute;
use crate::layout::overflow::{exceeding_set, first_exceeding};
use crate::layout::split::{split_paragraph, SplitGroupCounter, SplitOutcome};
use log::{debug, trace, warn};

/// Hard cap on page count. Laying out past this is treated as runaway
/// pagination and aborted.
pub const MAX_PAGES: usize = 100;

/// Outcome of one completed reflow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepReport {
    /// Sweeps run until one completed without mutating content
    pub passes: u32,
    /// Page count after the reflow
    pub pages: usize,
}

/// Drives pagination over a page set. The engine owns the split-group
/// counter, so fragment identities stay unique for the life of one
/// engine (and the paginator holding it).
#[derive(Debug, Default)]
pub struct LayoutEngine {
    groups: SplitGroupCounter,
}

impl LayoutEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconcile every page with its height budget. Sweeps run left to
    /// right and repeat until a sweep completes without touching content,
    /// so chained merges that free space several pages back settle within
    /// one call. The page set is always left structurally valid, even on
    /// error.
    pub fn reflow(
        &mut self,
        pages: &mut PageSet,
        mut caret: Option<&mut Caret>,
        oracle: &dyn GeometryOracle,
    ) -> Result<SweepReport, LayoutError> {
        let mut passes = 0u32;
        loop {
            passes += 1;
            if passes as usize > MAX_PAGES {
                warn!("reflow did not settle after {} sweeps", passes - 1);
                return Err(LayoutError::SweepLimitExceeded {
                    page: pages.page_count(),
                });
            }
            if !self.sweep(pages, caret.as_deref_mut(), oracle)? {
                break;
            }
        }

        let report = SweepReport {
            passes,
            pages: pages.page_count(),
        };
        debug!("reflow settled: {} passes, {} pages", report.passes, report.pages);
        Ok(report)
    }

    /// One left-to-right sweep. Returns whether any content moved. A page
    /// is never revisited within a sweep: once its step completes it is
    /// within budget, and later steps only ever push content forward.
    fn sweep(
        &mut self,
        pages: &mut PageSet,
        mut caret: Option<&mut Caret>,
        oracle: &dyn GeometryOracle,
    ) -> Result<bool, LayoutError> {
        let mut mutated = false;
        let mut page = 0;

        while page < pages.page_count() {
            if page >= MAX_PAGES {
                warn!("aborting sweep: content reaches page {}", page + 1);
                return Err(LayoutError::SweepLimitExceeded {
                    page: pages.page_number(page),
                });
            }
            mutated |= self.layout_page(pages, page, caret.as_deref_mut(), oracle)?;
            page += 1;
        }

        Ok(mutated)
    }

    /// Reconcile a single page: pull content back from the following page
    /// while it fits, then push whatever exceeds the budget forward.
    fn layout_page(
        &mut self,
        pages: &mut PageSet,
        page: usize,
        mut caret: Option<&mut Caret>,
        oracle: &dyn GeometryOracle,
    ) -> Result<bool, LayoutError> {
        let budget = oracle.body_bottom(page);
        let mut mutated = false;

        while self.pull_back(pages, page, budget, caret.as_deref_mut(), oracle) {
            mutated = true;
        }

        let Some(first) = first_exceeding(page, pages.page(page), budget, oracle) else {
            return Ok(mutated);
        };
        trace!("page {}: paragraph {} exceeds budget", page + 1, first);

        let tail_id = pages.alloc_paragraph_id();
        let outcome = split_paragraph(
            page,
            pages.page_mut(page),
            first,
            budget,
            tail_id,
            &mut self.groups,
            caret.as_deref_mut(),
            oracle,
        )?;
        if matches!(outcome, SplitOutcome::Split { .. }) {
            mutated = true;
        }

        let exceeding = exceeding_set(page, pages.page(page), budget, oracle);
        if exceeding.is_empty() {
            return Ok(mutated);
        }

        if page + 1 == pages.page_count() {
            pages.push_page();
        }
        let moved = pages.page_mut(page).remove_many(&exceeding);
        debug!(
            "page {}: moving {} paragraph(s) to page {}",
            page + 1,
            moved.len(),
            page + 2
        );
        distribute(moved, pages.page_mut(page + 1), caret)?;

        Ok(true)
    }

    /// Pull the next page's leading paragraph up if its first visual line
    /// fits in this page's remaining budget. A pulled split sibling merges
    /// into the page's last paragraph; anything else moves whole. The
    /// subsequent overflow step re-splits whatever then no longer fits, so
    /// the settled layout is independent of how content was distributed
    /// before.
    fn pull_back(
        &mut self,
        pages: &mut PageSet,
        page: usize,
        budget: f32,
        caret: Option<&mut Caret>,
        oracle: &dyn GeometryOracle,
    ) -> bool {
        if page + 1 >= pages.page_count() {
            return false;
        }

        let next = pages.page(page + 1);
        if next.is_empty() {
            return false;
        }
        let first_line = oracle.unit_extent(page + 1, next, 0, 0);

        let body = pages.page(page);
        let filled = match body.len() {
            0 => oracle.body_top(page),
            len => oracle.paragraph_extent(page, body, len - 1).bottom,
        };
        if filled + first_line.height() > budget {
            return false;
        }

        let incoming = pages.page_mut(page + 1).remove(0);
        let incoming_id = incoming.id();
        let dest = pages.page_mut(page);

        let merges = incoming.split_group().is_some()
            && dest.last().and_then(|p| p.split_group()) == incoming.split_group();

        if merges {
            if let Some(last) = dest.last_mut() {
                let last_id = last.id();
                let last_len = last.len();
                trace!(
                    "page {}: pulling {:?} back into sibling {:?}",
                    page + 1,
                    incoming_id,
                    last_id
                );
                if let Some(caret) = caret {
                    if caret.paragraph == incoming_id {
                        caret.paragraph = last_id;
                        caret.offset += last_len;
                    }
                }
                last.append_runs(incoming.into_runs());
                return true;
            }
        }

        trace!("page {}: pulling {:?} back whole", page + 1, incoming_id);
        dest.push(incoming);
        true
    }
}
