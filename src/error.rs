//! Error types for the locate library.
//!
//! This module defines all error types that can occur while reconstructing
//! text, searching words, splitting page ranges and reading hOCR input.

/// Result type alias for locate library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during text location and splitting.
#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)] // "Invalid" prefix is intentional for clarity
pub enum Error {
    /// An argument does not satisfy the operation's preconditions
    /// (e.g. a search word containing whitespace).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A page outside `1..=page_count` was requested
    #[error("Page {page} is out of range (document has {page_count} pages)")]
    PageOutOfRange {
        /// Requested page (1-based)
        page: u32,
        /// Number of pages in the document
        page_count: u32,
    },

    /// A single unit already renders larger than the byte budget
    #[error("Cannot split into {max_bytes} bytes: unit {unit} alone renders to {size} bytes")]
    SizeConstraintUnsatisfiable {
        /// The unit (page) that does not fit on its own
        unit: u32,
        /// Requested budget
        max_bytes: u64,
        /// Rendered size of the unit alone
        size: u64,
    },

    /// The operation was cancelled through its cancellation token
    #[error("Operation cancelled")]
    Cancelled,

    /// The supplied regular expression does not compile
    #[error("Invalid regex pattern: {0}")]
    InvalidRegex(String),

    /// Malformed hOCR document
    #[error("hOCR error: {0}")]
    Hocr(String),

    /// A numeric attribute could not be parsed
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    /// The glyph source or render oracle failed
    #[error("Source error: {0}")]
    Source(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<regex::Error> for Error {
    fn from(e: regex::Error) -> Self {
        Error::InvalidRegex(e.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(e: quick_xml::Error) -> Self {
        Error::Hocr(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_error() {
        let err = Error::InvalidArgument("word contains a space".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("Invalid argument"));
        assert!(msg.contains("word contains a space"));
    }

    #[test]
    fn test_page_out_of_range_error() {
        let err = Error::PageOutOfRange {
            page: 7,
            page_count: 3,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("Page 7"));
        assert!(msg.contains("3 pages"));
    }

    #[test]
    fn test_size_constraint_error() {
        let err = Error::SizeConstraintUnsatisfiable {
            unit: 2,
            max_bytes: 100,
            size: 1500,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("100 bytes"));
        assert!(msg.contains("unit 2"));
        assert!(msg.contains("1500"));
    }

    #[test]
    fn test_regex_error_conversion() {
        let err: Error = regex::Regex::new("(unclosed").unwrap_err().into();
        assert!(matches!(err, Error::InvalidRegex(_)));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
