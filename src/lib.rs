// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::too_many_arguments)]
#![allow(clippy::needless_range_loop)]
#![allow(clippy::enum_variant_names)]
#![allow(clippy::len_without_is_empty)]
// Allow unused for tests
#![cfg_attr(test, allow(dead_code))]

//! # PDF Locate
//!
//! Positional text reconstruction and capacity-bounded page splitting for
//! paginated documents exposed as streams of rendered glyph runs.
//!
//! ## Core Features
//!
//! ### Text Location
//! - **Line Grouping**: orientation-aware chain test over paint order, with a
//!   tolerance for diacritical marks
//! - **Word Search**: exact single-token search, case-sensitive or not, with
//!   glyph-accurate bounding boxes
//! - **All Words**: full word reconstruction from inferred and rendered spaces
//! - **Regex Search**: patterns over a page's text in paint order
//! - **Areas**: restrict results to rectangles, strictly or by overlap
//! - **Page Text**: positional or tolerance-merge line dumps
//!
//! ### Splitting
//! - **Capacity Splitter**: binary search over a render-size oracle to cut a
//!   document into ranges under a byte budget
//! - **Page Ranges**: `"3-5"` parsing and split-by-page-number helpers
//!
//! ### OCR Overlay
//! - **hOCR**: page and word boxes, text angles and font sizes
//! - **Placement**: text matrices for an invisible, searchable text layer
//!
//! ## Quick Start
//!
//! ```
//! use pdf_locate::document::{MemoryDocument, MemoryPage, TextLocator};
//! use pdf_locate::geometry::Point;
//! use pdf_locate::search::SearchOptions;
//! use pdf_locate::text::TextRun;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let page = MemoryPage::new(595.0, 842.0)
//!     .with_run(TextRun::horizontal("Total due", Point::new(72.0, 700.0), 6.0, 9.0, 3.0, 3.0));
//! let doc = MemoryDocument::new(vec![page]);
//!
//! let locator = TextLocator::new(&doc);
//! for hit in locator.search_word("due", &SearchOptions::case_insensitive())? {
//!     println!("{} at {}", hit.text, hit.location);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Geometry and areas
pub mod area;
pub mod geometry;

// Text reconstruction
pub mod text;

// Queries
pub mod document;
pub mod search;

// Page range partitioning
pub mod split;

// OCR input
pub mod hocr;

// Re-exports
pub use area::{Area, BoundingBox};
pub use config::LocateConfig;
pub use document::{CancelFlag, CancelToken, GlyphSource, MemoryDocument, NeverCancel, TextLocator};
pub use error::{Error, Result};
pub use search::{SearchOptions, WordLocation};
pub use split::{split_by_capacity, PageRange, RenderOracle};

// Internal utilities
pub(crate) mod utils {
    //! Internal utility functions for the library.

    use std::cmp::Ordering;

    /// Safely compare two floating point numbers, handling NaN cases.
    ///
    /// NaN values are treated as equal to each other and greater than all other values.
    /// This ensures that sorting operations never panic due to NaN comparisons.
    #[inline]
    pub fn safe_float_cmp(a: f32, b: f32) -> Ordering {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater, // NaN > all numbers
            (false, true) => Ordering::Less,    // all numbers < NaN
            (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        }
    }

}

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
