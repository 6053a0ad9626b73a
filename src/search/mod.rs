//! Text search with position tracking.
//!
//! This module provides the regex query mode and the types shared by every
//! query of the [`TextLocator`](crate::document::TextLocator):
//! - [`SearchOptions`]: page, areas, overlap, case and short-circuit options
//! - [`WordLocation`]: a located result
//! - [`TextSearcher`]: regex matching over a page's glyphs
//!
//! ## Example
//!
//! ```
//! use pdf_locate::geometry::Point;
//! use pdf_locate::search::{SearchOptions, TextSearcher};
//! use pdf_locate::text::TextRun;
//!
//! let runs = [TextRun::horizontal("Invoice 2024-117", Point::new(72.0, 700.0), 6.0, 9.0, 3.0, 3.0)];
//! let options = SearchOptions::new();
//! let regex = TextSearcher::build_regex(r"\d{4}-\d+", &options)?;
//! let results = TextSearcher::search_page(&runs, 1, 842.0, &regex, &options);
//! assert_eq!(results[0].text, "2024-117");
//! # Ok::<(), pdf_locate::Error>(())
//! ```

mod text_search;
mod word_location;

pub use text_search::{SearchOptions, TextSearcher};
pub use word_location::{join_text, WordLocation};
