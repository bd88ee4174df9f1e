//! The ordered page collection

use crate::content::body::PageBody;
use crate::content::paragraph::{Paragraph, ParagraphId};

/// Ordered collection of pages. Page numbers are 1-based and derived from
/// position; they are never stored on the page itself.
#[derive(Debug, Clone)]
pub struct PageSet {
    pages: Vec<PageBody>,
    next_paragraph: u64,
}

impl Default for PageSet {
    fn default() -> Self {
        Self::new()
    }
}

impl PageSet {
    /// Create a page set with one page holding a single empty paragraph
    pub fn new() -> Self {
        let mut set = Self {
            pages: vec![PageBody::new()],
            next_paragraph: 0,
        };
        let id = set.alloc_paragraph_id();
        set.pages[0].push(Paragraph::new(id));
        set
    }

    /// Allocate a fresh paragraph id
    pub fn alloc_paragraph_id(&mut self) -> ParagraphId {
        let id = ParagraphId(self.next_paragraph);
        self.next_paragraph += 1;
        id
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn page(&self, index: usize) -> &PageBody {
        &self.pages[index]
    }

    pub fn page_mut(&mut self, index: usize) -> &mut PageBody {
        &mut self.pages[index]
    }

    /// 1-based page number for a page index
    pub fn page_number(&self, index: usize) -> usize {
        index + 1
    }

    /// Append a new, empty-bodied page
    pub fn push_page(&mut self) {
        self.pages.push(PageBody::new());
    }

    pub fn iter(&self) -> impl Iterator<Item = &PageBody> {
        self.pages.iter()
    }

    /// Replace one page's body content
    pub fn set_page_body(&mut self, index: usize, paragraphs: Vec<Paragraph>) {
        self.pages[index].replace(paragraphs);
    }

    /// Locate a paragraph anywhere in the set as (page index, body index)
    pub fn find_paragraph(&self, id: ParagraphId) -> Option<(usize, usize)> {
        for (page, body) in self.pages.iter().enumerate() {
            if let Some(index) = body.position_of(id) {
                return Some((page, index));
            }
        }
        None
    }

    pub fn paragraph(&self, id: ParagraphId) -> Option<&Paragraph> {
        let (page, index) = self.find_paragraph(id)?;
        self.pages[page].get(index)
    }

    pub fn paragraph_mut(&mut self, id: ParagraphId) -> Option<&mut Paragraph> {
        let (page, index) = self.find_paragraph(id)?;
        self.pages[page].get_mut(index)
    }

    /// Concatenated text of every paragraph across all pages, in page and
    /// paragraph order, with no separators. This is the content-conservation
    /// surface: it must be unchanged by any reflow.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for body in &self.pages {
            out.push_str(&body.text());
        }
        out
    }
}
