//! page-flow: a pagination engine for page-oriented rich-text editing
//!
//! Block content lives on a sequence of fixed-height pages. When edits make
//! a page overflow its height budget, paragraphs are split at visual line
//! boundaries and redistributed forward; when content shrinks, fragments are
//! pulled back and merged with their split siblings. Geometry comes from a
//! host-supplied [`GeometryOracle`], so the engine itself never measures
//! text and runs the same against a browser renderer or the built-in
//! [`TextMetricsOracle`].

pub mod content;
pub mod editing;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod wasm;

// Re-export WASM types for direct use
pub use wasm::WasmPaginator;

// Re-export primary types
pub use content::{PageBody, PageSet, Paragraph, ParagraphId, RichContent, RunStyle, SplitGroupId, TextRun};
pub use editing::Caret;
pub use error::LayoutError;
pub use geometry::{Extent, FontMetrics, GeometryOracle, PageConfig, TextMetricsOracle};
pub use layout::{LayoutEngine, ReflowScheduler, SweepReport, MAX_PAGES};

/// The top-level pagination state combining all components. One instance
/// per document; counters for paragraph and split-group identity live
/// inside it, so independent documents never share identity state.
pub struct Paginator {
    pages: PageSet,
    engine: LayoutEngine,
    scheduler: ReflowScheduler,
    caret: Option<Caret>,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new()
    }
}

impl Paginator {
    /// Create a paginator holding one empty page
    pub fn new() -> Self {
        Self {
            pages: PageSet::new(),
            engine: LayoutEngine::new(),
            scheduler: ReflowScheduler::new(),
            caret: None,
        }
    }

    /// Replace the document with new content and lay it out. The caret
    /// moves to the start of the first paragraph.
    pub fn set_content(
        &mut self,
        content: RichContent,
        oracle: &dyn GeometryOracle,
    ) -> Result<SweepReport, LayoutError> {
        let mut pages = PageSet::new();
        let mut paragraphs = Vec::with_capacity(content.paragraphs.len().max(1));
        for runs in content.paragraphs {
            let id = pages.alloc_paragraph_id();
            paragraphs.push(Paragraph::with_runs(id, runs));
        }
        if paragraphs.is_empty() {
            let id = pages.alloc_paragraph_id();
            paragraphs.push(Paragraph::new(id));
        }
        self.caret = paragraphs.first().map(|p| Caret::at_start(p.id()));
        pages.set_page_body(0, paragraphs);
        self.pages = pages;

        self.reflow(oracle)
    }

    /// Lay the current content out against its page budgets
    pub fn reflow(&mut self, oracle: &dyn GeometryOracle) -> Result<SweepReport, LayoutError> {
        self.engine.reflow(&mut self.pages, self.caret.as_mut(), oracle)
    }

    /// Note that content changed; the reflow runs on the next
    /// [`Paginator::run_scheduled`]
    pub fn schedule_reflow(&mut self) {
        self.scheduler.request();
    }

    /// Run the pending reflow, if one was scheduled
    pub fn run_scheduled(
        &mut self,
        oracle: &dyn GeometryOracle,
    ) -> Result<Option<SweepReport>, LayoutError> {
        if self.scheduler.take() {
            return self.reflow(oracle).map(Some);
        }
        Ok(None)
    }

    pub fn pages(&self) -> &PageSet {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.page_count()
    }

    pub fn caret(&self) -> Option<Caret> {
        self.caret
    }

    pub fn set_caret(&mut self, caret: Option<Caret>) {
        self.caret = caret;
    }

    /// Full document text in page and paragraph order
    pub fn text(&self) -> String {
        self.pages.text()
    }

    /// Mutable access to a paragraph for host edits. Callers should
    /// [`Paginator::schedule_reflow`] after changing content.
    pub fn paragraph_mut(&mut self, id: ParagraphId) -> Option<&mut Paragraph> {
        self.pages.paragraph_mut(id)
    }
}
