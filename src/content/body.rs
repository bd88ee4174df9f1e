//! Page bodies: the ordered paragraph sequence one page owns

use crate::content::paragraph::{Paragraph, ParagraphId, SplitGroupId};

/// The content region of a single page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageBody {
    paragraphs: Vec<Paragraph>,
}

impl PageBody {
    /// Create an empty body
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Paragraph> {
        self.paragraphs.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Paragraph> {
        self.paragraphs.get_mut(index)
    }

    pub fn first(&self) -> Option<&Paragraph> {
        self.paragraphs.first()
    }

    pub fn last(&self) -> Option<&Paragraph> {
        self.paragraphs.last()
    }

    pub fn last_mut(&mut self) -> Option<&mut Paragraph> {
        self.paragraphs.last_mut()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Paragraph> {
        self.paragraphs.iter()
    }

    pub fn push(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    pub fn insert(&mut self, index: usize, paragraph: Paragraph) {
        self.paragraphs.insert(index, paragraph);
    }

    pub fn remove(&mut self, index: usize) -> Paragraph {
        self.paragraphs.remove(index)
    }

    /// Remove the paragraphs at the given ascending indices, preserving
    /// their relative order in the result
    pub fn remove_many(&mut self, indices: &[usize]) -> Vec<Paragraph> {
        let mut removed = Vec::with_capacity(indices.len());
        for &index in indices.iter().rev() {
            removed.push(self.paragraphs.remove(index));
        }
        removed.reverse();
        removed
    }

    /// Replace the whole paragraph sequence
    pub fn replace(&mut self, paragraphs: Vec<Paragraph>) {
        self.paragraphs = paragraphs;
    }

    /// Position of a paragraph by id
    pub fn position_of(&self, id: ParagraphId) -> Option<usize> {
        self.paragraphs.iter().position(|p| p.id() == id)
    }

    /// Find the resident fragment of a split group, if any
    pub fn find_split_sibling(&self, group: SplitGroupId) -> Option<usize> {
        self.paragraphs
            .iter()
            .position(|p| p.split_group() == Some(group))
    }

    /// How many residents of a split group this body holds
    pub fn split_group_count(&self, group: SplitGroupId) -> usize {
        self.paragraphs
            .iter()
            .filter(|p| p.split_group() == Some(group))
            .count()
    }

    /// Concatenated text of every paragraph, in order, no separators
    pub fn text(&self) -> String {
        let mut out = String::new();
        for para in &self.paragraphs {
            out.push_str(&para.text());
        }
        out
    }
}
