//! Content model: paragraphs, runs, page bodies, and the page set

mod body;
mod page;
mod paragraph;

pub use body::PageBody;
pub use page::PageSet;
pub use paragraph::{Paragraph, ParagraphId, RunSeq, RunStyle, SplitGroupId, TextRun};

use serde::{Deserialize, Serialize};

/// Authored rich-text content handed to the paginator: an ordered list of
/// paragraphs, each an ordered list of styled runs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RichContent {
    pub paragraphs: Vec<Vec<TextRun>>,
}

impl RichContent {
    /// Build content from plain text, one paragraph per line
    pub fn from_plain(text: &str) -> Self {
        Self {
            paragraphs: text
                .split('\n')
                .map(|line| vec![TextRun::plain(line)])
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_plain_splits_paragraphs() {
        let content = RichContent::from_plain("one\ntwo");
        assert_eq!(content.paragraphs.len(), 2);
        assert_eq!(content.paragraphs[0][0].text, "one");
        assert_eq!(content.paragraphs[1][0].text, "two");
    }

    #[test]
    fn test_json_round_trip() {
        let content = RichContent {
            paragraphs: vec![vec![
                TextRun::plain("plain "),
                TextRun::styled(
                    "bold",
                    RunStyle {
                        bold: true,
                        italic: false,
                    },
                ),
            ]],
        };

        let json = serde_json::to_string(&content).unwrap();
        let back: RichContent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, content);
    }

    #[test]
    fn test_style_defaults_in_json() {
        let json = r#"{"paragraphs":[[{"text":"hi"}]]}"#;
        let content: RichContent = serde_json::from_str(json).unwrap();
        assert_eq!(content.paragraphs[0][0].style, RunStyle::default());
    }
}
