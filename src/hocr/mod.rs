//! hOCR input and text overlay placement.
//!
//! hOCR is the XHTML representation of OCR output. Each `div.ocr_page`
//! carries the page's pixel bounding box; each `span.ocrx_word` carries its
//! own box, with the text angle and font size coming from the enclosing
//! line. Boxes are top-origin and measured in the OCR engine's pixels.
//!
//! [`parser`] reads the document; [`overlay`] converts word boxes into text
//! placements in page units, ready to be drawn as an invisible text layer.

pub mod overlay;
pub mod parser;

use serde::{Deserialize, Serialize};

pub use overlay::{place_words, plan_overlay, PageOverlay, TextPlacement};
pub use parser::{expand_ligatures, parse_bytes, parse_file, parse_str};

/// One OCR page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HocrPage {
    /// Page number (1-based)
    pub page: u32,
    /// Page width in OCR pixels
    pub width: f32,
    /// Page height in OCR pixels
    pub height: f32,
    /// Recognized words
    pub words: Vec<HocrWord>,
}

/// One recognized word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HocrWord {
    /// Text, with ligatures expanded
    pub text: String,
    /// Left edge in pixels
    pub x: f32,
    /// Top edge in pixels, from the top of the page
    pub y: f32,
    /// Width in pixels
    pub width: f32,
    /// Height in pixels
    pub height: f32,
    /// Font size of the enclosing line, or -1
    pub font_size: f32,
    /// Text angle of the enclosing line in degrees, or -1
    pub text_angle: f32,
}
