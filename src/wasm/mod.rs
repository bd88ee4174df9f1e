//! WASM bindings for the paginator
//!
//! The host passes measurement callbacks instead of implementing a trait:
//! the paginator's content is mirrored into the host's DOM, so the
//! callbacks only need page and paragraph indices to measure against the
//! rendered nodes.

use crate::content::{PageBody, ParagraphId, RichContent};
use crate::editing::Caret;
use crate::geometry::{Extent, GeometryOracle};
use crate::Paginator;
use js_sys::Function;
use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// A geometry oracle backed by host callbacks. Extent-returning callbacks
/// yield a `[top, bottom]` array; scalar callbacks yield a number. A
/// callback failure measures as zero, which reads as "fits" and never
/// loops the engine.
pub struct JsGeometryOracle {
    body_top: Function,
    body_bottom: Function,
    paragraph_extent: Function,
    unit_extent: Function,
}

impl JsGeometryOracle {
    pub fn new(
        body_top: Function,
        body_bottom: Function,
        paragraph_extent: Function,
        unit_extent: Function,
    ) -> Self {
        Self {
            body_top,
            body_bottom,
            paragraph_extent,
            unit_extent,
        }
    }

    fn scalar(f: &Function, page: usize) -> f32 {
        f.call1(&JsValue::NULL, &JsValue::from_f64(page as f64))
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as f32
    }

    fn extent(value: Result<JsValue, JsValue>) -> Extent {
        let Ok(value) = value else {
            return Extent::default();
        };
        let array = js_sys::Array::from(&value);
        let top = array.get(0).as_f64().unwrap_or(0.0) as f32;
        let bottom = array.get(1).as_f64().unwrap_or(0.0) as f32;
        Extent::new(top, bottom)
    }
}

impl GeometryOracle for JsGeometryOracle {
    fn body_top(&self, page: usize) -> f32 {
        Self::scalar(&self.body_top, page)
    }

    fn body_bottom(&self, page: usize) -> f32 {
        Self::scalar(&self.body_bottom, page)
    }

    fn paragraph_extent(&self, page: usize, _body: &PageBody, index: usize) -> Extent {
        Self::extent(self.paragraph_extent.call2(
            &JsValue::NULL,
            &JsValue::from_f64(page as f64),
            &JsValue::from_f64(index as f64),
        ))
    }

    fn unit_extent(&self, page: usize, _body: &PageBody, index: usize, offset: usize) -> Extent {
        Self::extent(self.unit_extent.call3(
            &JsValue::NULL,
            &JsValue::from_f64(page as f64),
            &JsValue::from_f64(index as f64),
            &JsValue::from_f64(offset as f64),
        ))
    }
}

/// WASM-exposed paginator wrapper
#[wasm_bindgen]
pub struct WasmPaginator {
    paginator: Paginator,
    oracle: JsGeometryOracle,
}

#[wasm_bindgen]
impl WasmPaginator {
    /// Create a paginator measuring through the given host callbacks
    #[wasm_bindgen(constructor)]
    pub fn new(
        body_top: Function,
        body_bottom: Function,
        paragraph_extent: Function,
        unit_extent: Function,
    ) -> Self {
        Self {
            paginator: Paginator::new(),
            oracle: JsGeometryOracle::new(body_top, body_bottom, paragraph_extent, unit_extent),
        }
    }

    /// Replace the document content. Takes the JSON form of rich content:
    /// `{"paragraphs": [[{"text": "...", "style": {"bold": true}}]]}`
    #[wasm_bindgen(js_name = setContent)]
    pub fn set_content(&mut self, json: &str) -> Result<(), JsValue> {
        let content: RichContent =
            serde_json::from_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.paginator
            .set_content(content, &self.oracle)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    /// Flag content as changed; pagination runs on the next runScheduled
    #[wasm_bindgen(js_name = scheduleReflow)]
    pub fn schedule_reflow(&mut self) {
        self.paginator.schedule_reflow();
    }

    /// Run the pending reflow, if any. Returns whether one ran.
    #[wasm_bindgen(js_name = runScheduled)]
    pub fn run_scheduled(&mut self) -> Result<bool, JsValue> {
        self.paginator
            .run_scheduled(&self.oracle)
            .map(|report| report.is_some())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = getPageCount)]
    pub fn get_page_count(&self) -> usize {
        self.paginator.page_count()
    }

    /// Full document text in page and paragraph order
    #[wasm_bindgen(js_name = getText)]
    pub fn get_text(&self) -> String {
        self.paginator.text()
    }

    /// Text of one page (0-based index)
    #[wasm_bindgen(js_name = pageText)]
    pub fn page_text(&self, page: usize) -> Option<String> {
        if page < self.paginator.page_count() {
            Some(self.paginator.pages().page(page).text())
        } else {
            None
        }
    }

    /// Current caret as `{"paragraph": id, "offset": bytes}`, or null
    #[wasm_bindgen(js_name = getCaret)]
    pub fn get_caret(&self) -> Option<String> {
        self.paginator.caret().map(|caret| {
            serde_json::json!({
                "paragraph": caret.paragraph.0,
                "offset": caret.offset,
            })
            .to_string()
        })
    }

    /// Move the caret to a byte offset within a paragraph
    #[wasm_bindgen(js_name = setCaret)]
    pub fn set_caret(&mut self, paragraph: u64, offset: usize) {
        self.paginator
            .set_caret(Some(Caret::new(ParagraphId(paragraph), offset)));
    }

    /// Insert text at the end of a paragraph and schedule a reflow
    #[wasm_bindgen(js_name = appendText)]
    pub fn append_text(&mut self, paragraph: u64, text: &str) -> bool {
        match self.paginator.paragraph_mut(ParagraphId(paragraph)) {
            Some(para) => {
                para.push_str(text);
                self.paginator.schedule_reflow();
                true
            }
            None => false,
        }
    }

    /// Truncate a paragraph to a byte length and schedule a reflow
    #[wasm_bindgen(js_name = truncateText)]
    pub fn truncate_text(&mut self, paragraph: u64, len: usize) -> bool {
        match self.paginator.paragraph_mut(ParagraphId(paragraph)) {
            Some(para) => {
                para.truncate(len);
                self.paginator.schedule_reflow();
                true
            }
            None => false,
        }
    }
}
