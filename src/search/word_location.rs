//! Query results.

use crate::area::BoundingBox;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A located piece of text: the reconstructed string and where it sits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordLocation {
    /// Reconstructed text
    pub text: String,
    /// Bounding box, including the page
    pub location: BoundingBox,
}

impl WordLocation {
    /// Create a word location.
    pub fn new(text: impl Into<String>, location: BoundingBox) -> Self {
        Self {
            text: text.into(),
            location,
        }
    }

    /// Page number (1-based).
    pub fn page(&self) -> u32 {
        self.location.page
    }
}

impl fmt::Display for WordLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.text, self.location)
    }
}

/// Join the texts of `words` with single spaces.
///
/// Returns `None` for an empty slice.
///
/// # Examples
///
/// ```
/// use pdf_locate::area::BoundingBox;
/// use pdf_locate::search::{join_text, WordLocation};
///
/// let bbox = BoundingBox::new(1, 800.0, 0.0, 0.0, 10.0, 10.0);
/// let words = [WordLocation::new(" Lorem", bbox), WordLocation::new("ipsum ", bbox)];
/// assert_eq!(join_text(&words, true).as_deref(), Some("Lorem ipsum"));
/// assert_eq!(join_text(&[], true), None);
/// ```
pub fn join_text(words: &[WordLocation], trim: bool) -> Option<String> {
    if words.is_empty() {
        return None;
    }
    let parts: Vec<&str> = words
        .iter()
        .map(|w| if trim { w.text.trim() } else { w.text.as_str() })
        .collect();
    Some(parts.join(" "))
}
