//! Measured-advance text layout, standing in for host measurement

use crate::content::PageBody;
use crate::geometry::{Extent, GeometryOracle, PageConfig};
use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::hash::{Hash, Hasher};
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

/// Metrics needed for text layout
#[derive(Debug, Clone)]
pub struct FontMetrics {
    /// Line height in logical pixels
    pub line_height: f32,
    /// Width of ASCII characters (0-127)
    pub char_widths: Vec<f32>,
    /// Default width for non-ASCII characters
    pub default_width: f32,
}

impl Default for FontMetrics {
    fn default() -> Self {
        // 14px * 1.2 line height, monospace-ish advance
        Self::monospace(8.41, 16.8)
    }
}

impl FontMetrics {
    pub fn new(line_height: f32, char_widths: Vec<f32>, default_width: f32) -> Self {
        Self {
            line_height,
            char_widths,
            default_width,
        }
    }

    /// Uniform-advance metrics
    pub fn monospace(char_width: f32, line_height: f32) -> Self {
        Self {
            line_height,
            char_widths: vec![char_width; 128],
            default_width: char_width,
        }
    }

    /// Get width of a character
    pub fn width(&self, c: char) -> f32 {
        if c.is_ascii() {
            if let Some(w) = self.char_widths.get(c as usize) {
                return *w;
            }
        }
        self.default_width
    }

    /// Advance of one grapheme cluster
    pub fn grapheme_width(&self, grapheme: &str) -> f32 {
        if grapheme.chars().all(|c| c.is_control()) {
            return 0.0;
        }
        grapheme.chars().map(|c| self.width(c)).sum()
    }
}

/// A geometry oracle that lays paragraphs out itself from advance widths and
/// Unicode line-break opportunities. Used by tests and benches, and usable
/// by headless hosts that have no renderer to measure.
#[derive(Debug)]
pub struct TextMetricsOracle {
    config: PageConfig,
    metrics: FontMetrics,
    /// Wrap results keyed by content hash
    lines: RefCell<FxHashMap<u64, Vec<Range<usize>>>>,
}

impl TextMetricsOracle {
    pub fn new(config: PageConfig, metrics: FontMetrics) -> Self {
        Self {
            config,
            metrics,
            lines: RefCell::new(FxHashMap::default()),
        }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Greedy wrap of paragraph text into line byte ranges. An empty
    /// paragraph still occupies one line.
    fn wrap(&self, text: &str) -> Vec<Range<usize>> {
        if text.is_empty() {
            return vec![0..0];
        }

        let max_width = self.config.body_width;
        let breaks: Vec<usize> = unicode_linebreak::linebreaks(text)
            .map(|(offset, _)| offset)
            .filter(|&offset| offset < text.len())
            .collect();

        let mut lines = Vec::new();
        let mut line_start = 0;
        let mut x = 0.0;
        // byte offset where the next line could start, and the width
        // consumed up to it
        let mut candidate: Option<(usize, f32)> = None;

        for (byte, grapheme) in text.grapheme_indices(true) {
            if grapheme == "\n" {
                lines.push(line_start..byte);
                line_start = byte + grapheme.len();
                x = 0.0;
                candidate = None;
                continue;
            }

            if byte > line_start && breaks.binary_search(&byte).is_ok() {
                candidate = Some((byte, x));
            }

            let width = self.metrics.grapheme_width(grapheme);
            if x + width > max_width && byte > line_start {
                // break at the last opportunity, or right here if none
                let (break_at, consumed) = candidate.unwrap_or((byte, x));
                lines.push(line_start..break_at);
                line_start = break_at;
                x -= consumed;
                candidate = None;
            }

            x += width;
        }

        lines.push(line_start..text.len());
        lines
    }

    fn with_lines<T>(&self, text: &str, f: impl FnOnce(&[Range<usize>]) -> T) -> T {
        let key = hash_text(text);
        let mut cache = self.lines.borrow_mut();
        let lines = cache.entry(key).or_insert_with(|| self.wrap(text));
        f(lines)
    }

    fn line_count(&self, text: &str) -> usize {
        self.with_lines(text, |lines| lines.len())
    }

    /// Index of the visual line containing a byte offset
    fn line_of_offset(&self, text: &str, offset: usize) -> usize {
        self.with_lines(text, |lines| {
            lines
                .iter()
                .position(|range| offset < range.end)
                .unwrap_or(lines.len().saturating_sub(1))
        })
    }

    fn paragraph_top(&self, page: usize, body: &PageBody, index: usize) -> f32 {
        let mut y = self.config.body_top(page);
        for i in 0..index {
            if let Some(para) = body.get(i) {
                y += self.line_count(&para.text()) as f32 * self.metrics.line_height;
            }
        }
        y
    }
}

impl GeometryOracle for TextMetricsOracle {
    fn body_top(&self, page: usize) -> f32 {
        self.config.body_top(page)
    }

    fn body_bottom(&self, page: usize) -> f32 {
        self.config.body_bottom(page)
    }

    fn paragraph_extent(&self, page: usize, body: &PageBody, index: usize) -> Extent {
        let top = self.paragraph_top(page, body, index);
        let height = match body.get(index) {
            Some(para) => self.line_count(&para.text()) as f32 * self.metrics.line_height,
            None => 0.0,
        };
        Extent::new(top, top + height)
    }

    fn unit_extent(&self, page: usize, body: &PageBody, index: usize, offset: usize) -> Extent {
        let para_top = self.paragraph_top(page, body, index);
        let line = match body.get(index) {
            Some(para) => self.line_of_offset(&para.text(), offset),
            None => 0,
        };
        let top = para_top + line as f32 * self.metrics.line_height;
        Extent::new(top, top + self.metrics.line_height)
    }
}

/// Hash text content for the wrap cache
fn hash_text(text: &str) -> u64 {
    use std::collections::hash_map::DefaultHasher;
    let mut hasher = DefaultHasher::new();
    text.hash(&mut hasher);
    hasher.finish()
}
