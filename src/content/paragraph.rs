//! Paragraphs as ordered sequences of styled text runs

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Stable identifier for paragraphs that survives moves between pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ParagraphId(pub u64);

/// Identity shared by the fragments of one logical paragraph broken
/// across page boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SplitGroupId(pub u64);

/// Inline formatting attached to a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RunStyle {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
}

/// A contiguous stretch of text with uniform formatting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    #[serde(default)]
    pub style: RunStyle,
}

impl TextRun {
    /// Create an unstyled run
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: RunStyle::default(),
        }
    }

    /// Create a run with explicit formatting
    pub fn styled(text: impl Into<String>, style: RunStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Inline run storage; two inline slots cover the common unsplit case
pub type RunSeq = SmallVec<[TextRun; 2]>;

/// A block of rich text owned by exactly one page body
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    id: ParagraphId,
    runs: RunSeq,
    split_group: Option<SplitGroupId>,
}

impl Paragraph {
    /// Create an empty paragraph
    pub fn new(id: ParagraphId) -> Self {
        Self {
            id,
            runs: RunSeq::new(),
            split_group: None,
        }
    }

    /// Create a paragraph holding a single unstyled run
    pub fn from_text(id: ParagraphId, text: impl Into<String>) -> Self {
        let mut para = Self::new(id);
        let text = text.into();
        if !text.is_empty() {
            para.runs.push(TextRun::plain(text));
        }
        para
    }

    /// Create a paragraph from an existing run sequence
    pub fn with_runs(id: ParagraphId, runs: impl IntoIterator<Item = TextRun>) -> Self {
        let mut para = Self::new(id);
        para.runs.extend(runs);
        para.normalize();
        para
    }

    pub fn id(&self) -> ParagraphId {
        self.id
    }

    pub fn split_group(&self) -> Option<SplitGroupId> {
        self.split_group
    }

    pub fn set_split_group(&mut self, group: SplitGroupId) {
        self.split_group = Some(group);
    }

    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    /// Concatenated text of all runs
    pub fn text(&self) -> String {
        let mut out = String::with_capacity(self.len());
        for run in &self.runs {
            out.push_str(&run.text);
        }
        out
    }

    /// Total byte length across runs
    pub fn len(&self) -> usize {
        self.runs.iter().map(|r| r.text.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|r| r.text.is_empty())
    }

    /// Append text to the trailing run, or start one if none exists
    pub fn push_str(&mut self, text: &str) {
        match self.runs.last_mut() {
            Some(run) => run.text.push_str(text),
            None => self.runs.push(TextRun::plain(text)),
        }
    }

    /// Drop everything at and after the given byte offset.
    /// The offset must fall on a character boundary.
    pub fn truncate(&mut self, offset: usize) {
        let _ = self.split_off(offset);
    }

    /// Split the run sequence at a byte offset, keeping the head in place
    /// and returning the tail runs. The offset must fall on a character
    /// boundary within the concatenated text.
    pub fn split_off(&mut self, offset: usize) -> RunSeq {
        let runs = std::mem::take(&mut self.runs);
        let mut tail = RunSeq::new();
        let mut base = 0;

        for run in runs {
            let end = base + run.text.len();
            if end <= offset {
                self.runs.push(run);
            } else if base >= offset {
                tail.push(run);
            } else {
                let cut = offset - base;
                self.runs.push(TextRun::styled(&run.text[..cut], run.style));
                tail.push(TextRun::styled(&run.text[cut..], run.style));
            }
            base = end;
        }

        tail
    }

    /// Transplant runs to the front, before the existing content
    pub fn prepend_runs(&mut self, runs: RunSeq) {
        let mut merged = runs;
        merged.extend(std::mem::take(&mut self.runs));
        self.runs = merged;
        self.normalize();
    }

    /// Transplant runs after the existing content
    pub fn append_runs(&mut self, runs: RunSeq) {
        self.runs.extend(runs);
        self.normalize();
    }

    /// Consume the paragraph, yielding its runs
    pub fn into_runs(self) -> RunSeq {
        self.runs
    }

    /// Coalesce adjacent runs with identical formatting and drop empty runs
    pub fn normalize(&mut self) {
        let runs = std::mem::take(&mut self.runs);
        for run in runs {
            if run.text.is_empty() {
                continue;
            }
            match self.runs.last_mut() {
                Some(last) if last.style == run.style => last.text.push_str(&run.text),
                _ => self.runs.push(run),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bold() -> RunStyle {
        RunStyle {
            bold: true,
            italic: false,
        }
    }

    #[test]
    fn test_text_and_len() {
        let para = Paragraph::with_runs(
            ParagraphId(0),
            [TextRun::plain("Hello "), TextRun::styled("World", bold())],
        );
        assert_eq!(para.text(), "Hello World");
        assert_eq!(para.len(), 11);
        assert!(!para.is_empty());
    }

    #[test]
    fn test_normalize_merges_same_style() {
        let mut para = Paragraph::new(ParagraphId(0));
        para.runs.push(TextRun::plain("ab"));
        para.runs.push(TextRun::plain("cd"));
        para.runs.push(TextRun::styled("ef", bold()));
        para.runs.push(TextRun::plain(""));
        para.normalize();

        assert_eq!(para.runs().len(), 2);
        assert_eq!(para.runs()[0].text, "abcd");
        assert_eq!(para.runs()[1].text, "ef");
    }

    #[test]
    fn test_split_off_mid_run() {
        let mut para = Paragraph::from_text(ParagraphId(0), "Hello World");
        let tail = para.split_off(6);

        assert_eq!(para.text(), "Hello ");
        assert_eq!(tail.len(), 1);
        assert_eq!(tail[0].text, "World");
    }

    #[test]
    fn test_split_off_at_run_boundary() {
        let mut para = Paragraph::with_runs(
            ParagraphId(0),
            [TextRun::plain("Hello "), TextRun::styled("World", bold())],
        );
        let tail = para.split_off(6);

        assert_eq!(para.text(), "Hello ");
        assert_eq!(tail[0].style, bold());
        assert_eq!(tail[0].text, "World");
    }

    #[test]
    fn test_split_off_preserves_style_across_cut() {
        let mut para =
            Paragraph::with_runs(ParagraphId(0), [TextRun::styled("abcdef", bold())]);
        let tail = para.split_off(3);

        assert_eq!(para.runs()[0].style, bold());
        assert_eq!(tail[0].style, bold());
        assert_eq!(para.text(), "abc");
        assert_eq!(tail[0].text, "def");
    }

    #[test]
    fn test_prepend_runs() {
        let mut para = Paragraph::from_text(ParagraphId(0), "World");
        let mut incoming = RunSeq::new();
        incoming.push(TextRun::plain("Hello "));
        para.prepend_runs(incoming);

        assert_eq!(para.text(), "Hello World");
        // same style, so the runs coalesce
        assert_eq!(para.runs().len(), 1);
    }

    #[test]
    fn test_truncate() {
        let mut para = Paragraph::from_text(ParagraphId(0), "Hello World");
        para.truncate(5);
        assert_eq!(para.text(), "Hello");
    }

    #[test]
    fn test_empty_paragraph() {
        let para = Paragraph::new(ParagraphId(3));
        assert!(para.is_empty());
        assert_eq!(para.len(), 0);
        assert_eq!(para.text(), "");
        assert_eq!(para.split_group(), None);
    }
}
