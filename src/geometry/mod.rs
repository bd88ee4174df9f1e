//! Geometry: the external measurement interface and page coordinates

mod metrics;

pub use metrics::{FontMetrics, TextMetricsOracle};

use crate::content::PageBody;
use serde::{Deserialize, Serialize};

/// Vertical extent of a rendered node in page-stack coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Extent {
    pub top: f32,
    pub bottom: f32,
}

impl Extent {
    pub fn new(top: f32, bottom: f32) -> Self {
        Self { top, bottom }
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Page geometry configuration. Only the vertical budget influences where
/// content breaks; the width and gap feed the measurement side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Usable width of a page body
    pub body_width: f32,
    /// Height budget of a page body
    pub body_height: f32,
    /// Vertical gap between consecutive page bodies in the page stack
    pub page_gap: f32,
}

impl Default for PageConfig {
    fn default() -> Self {
        // 150mm x 70mm body with a 10mm gap, at 96 dpi
        Self {
            body_width: 566.9,
            body_height: 264.6,
            page_gap: 37.8,
        }
    }
}

impl PageConfig {
    /// Top of a page body in page-stack coordinates
    pub fn body_top(&self, page: usize) -> f32 {
        page as f32 * (self.body_height + self.page_gap)
    }

    /// Bottom of a page body's height budget
    pub fn body_bottom(&self, page: usize) -> f32 {
        self.body_top(page) + self.body_height
    }
}

/// The measurement collaborator. The layout core never computes typography
/// itself; it reads rendered extents through this interface. All extents are
/// in the coordinate space of the page stack; implementations over hosts
/// whose primitives are element-local must sum the ancestor offset chain
/// themselves.
///
/// Bodies are passed explicitly so implementations can be pure functions of
/// `(page, content)`; host-backed oracles that measure a live tree are free
/// to ignore the argument.
pub trait GeometryOracle {
    /// Top of the page body's content area
    fn body_top(&self, page: usize) -> f32;

    /// Bottom of the page body's height budget
    fn body_bottom(&self, page: usize) -> f32;

    /// Extent of the paragraph at `index` within the body
    fn paragraph_extent(&self, page: usize, body: &PageBody, index: usize) -> Extent;

    /// Extent of the atomic unit starting at byte `offset` within the
    /// paragraph at `index`
    fn unit_extent(&self, page: usize, body: &PageBody, index: usize, offset: usize) -> Extent;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent_height() {
        let extent = Extent::new(10.0, 26.0);
        assert_eq!(extent.height(), 16.0);
    }

    #[test]
    fn test_page_config_stacking() {
        let config = PageConfig {
            body_width: 40.0,
            body_height: 48.0,
            page_gap: 16.0,
        };

        assert_eq!(config.body_top(0), 0.0);
        assert_eq!(config.body_bottom(0), 48.0);
        assert_eq!(config.body_top(1), 64.0);
        assert_eq!(config.body_bottom(2), 176.0);
    }
}
