//! Configuration for text location.

use crate::text::{ExtractionMode, DEFAULT_TOLERANCE_X, DEFAULT_TOLERANCE_Y};

/// Text location configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LocateConfig {
    /// Horizontal gap tolerance for tolerance-merge extraction.
    pub tolerance_x: f32,

    /// Vertical tolerance for tolerance-merge extraction.
    pub tolerance_y: f32,

    /// Orientation magnitude (milliradians) beyond which a run is reported
    /// as non-horizontal.
    pub max_orientation_magnitude: i32,

    /// Font size used when an hOCR line carries none.
    pub default_hocr_font_size: f32,

    /// Reconstruct page text with tolerance merging instead of positional
    /// line grouping.
    pub tolerance_merge: bool,
}

impl Default for LocateConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl LocateConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            tolerance_x: DEFAULT_TOLERANCE_X,
            tolerance_y: DEFAULT_TOLERANCE_Y,
            max_orientation_magnitude: 5,
            default_hocr_font_size: 8.0,
            tolerance_merge: false,
        }
    }

    /// Set the horizontal merge tolerance.
    pub fn with_tolerance_x(mut self, value: f32) -> Self {
        self.tolerance_x = value;
        self
    }

    /// Set the vertical merge tolerance.
    pub fn with_tolerance_y(mut self, value: f32) -> Self {
        self.tolerance_y = value;
        self
    }

    /// Set the horizontal orientation threshold.
    pub fn with_max_orientation_magnitude(mut self, value: i32) -> Self {
        self.max_orientation_magnitude = value;
        self
    }

    /// Set the fallback hOCR font size.
    pub fn with_default_hocr_font_size(mut self, value: f32) -> Self {
        self.default_hocr_font_size = value;
        self
    }

    /// Use tolerance-merge extraction for page text.
    pub fn with_tolerance_merge(mut self) -> Self {
        self.tolerance_merge = true;
        self
    }

    /// Page text extraction mode, built from the current tolerances.
    pub fn extraction_mode(&self) -> ExtractionMode {
        if self.tolerance_merge {
            ExtractionMode::ToleranceMerge {
                tolerance_x: self.tolerance_x,
                tolerance_y: self.tolerance_y,
            }
        } else {
            ExtractionMode::Positional
        }
    }
}
