//! Documents as glyph-run sources, and the query surface over them.
//!
//! A [`GlyphSource`] is anything that can render a page into its glyph runs
//! in paint order. [`MemoryDocument`] is the in-crate implementation, loaded
//! from a JSON dump. [`TextLocator`] runs the word, regex and text queries
//! over any source, page by page, checking a [`CancelToken`] between pages.

use crate::area::BoundingBox;
use crate::config::LocateConfig;
use crate::error::{Error, Result};
use crate::search::{SearchOptions, TextSearcher, WordLocation};
use crate::text::{self, group_lines, validate_words, ChunkLocation, TextChunk, TextRun, WordSpan};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Page dimensions in document units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSize {
    /// Page width
    pub width: f32,
    /// Page height
    pub height: f32,
}

/// A paginated document exposing its rendered glyph runs.
///
/// Pages are numbered from 1.
pub trait GlyphSource {
    /// Number of pages.
    fn page_count(&self) -> u32;

    /// Dimensions of `page`.
    fn page_size(&self, page: u32) -> Result<PageSize>;

    /// Glyph runs of `page`, in paint order.
    ///
    /// The sequence is finite and cannot be restarted; call again to render
    /// the page a second time.
    fn text_runs(&self, page: u32) -> Result<Box<dyn Iterator<Item = TextRun> + '_>>;
}

/// Cooperative cancellation signal, checked once per page.
pub trait CancelToken {
    /// Whether the running operation should stop.
    fn is_cancelled(&self) -> bool;
}

/// A token that is never cancelled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// A shareable cancellation flag.
///
/// Clones share the same flag, so one clone can be handed to the locator
/// while another one cancels from elsewhere.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// Create an unset flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }
}

impl CancelToken for CancelFlag {
    fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// One page of a [`MemoryDocument`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryPage {
    /// Page width
    pub width: f32,
    /// Page height
    pub height: f32,
    /// Glyph runs in paint order
    #[serde(default)]
    pub runs: Vec<TextRun>,
}

impl MemoryPage {
    /// Create an empty page.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            runs: Vec::new(),
        }
    }

    /// Add a run to the page.
    pub fn with_run(mut self, run: TextRun) -> Self {
        self.runs.push(run);
        self
    }
}

/// A document held in memory.
///
/// # Example
///
/// ```
/// use pdf_locate::document::{GlyphSource, MemoryDocument};
///
/// let json = r#"{"pages": [{"width": 595.0, "height": 842.0, "runs": []}]}"#;
/// let doc = MemoryDocument::from_json(json)?;
/// assert_eq!(doc.page_count(), 1);
/// # Ok::<(), pdf_locate::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryDocument {
    /// Pages in order
    pub pages: Vec<MemoryPage>,
}

impl MemoryDocument {
    /// Create a document from its pages.
    pub fn new(pages: Vec<MemoryPage>) -> Self {
        Self { pages }
    }

    /// Parse a document from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON document.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Open a JSON document file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Serialize the document to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    fn page(&self, page: u32) -> Result<&MemoryPage> {
        let page_count = self.page_count();
        if page == 0 || page > page_count {
            return Err(Error::PageOutOfRange { page, page_count });
        }
        Ok(&self.pages[page as usize - 1])
    }

    /// Copy pages `first..=last` into a new document.
    pub fn subset(&self, first: u32, last: u32) -> Result<MemoryDocument> {
        if first > last {
            return Err(Error::InvalidArgument(format!("invalid page range {}-{}", first, last)));
        }
        self.page(first)?;
        self.page(last)?;
        Ok(MemoryDocument {
            pages: self.pages[first as usize - 1..last as usize].to_vec(),
        })
    }

    /// Serialized size, in bytes, of pages `first..=last`.
    ///
    /// Pure and repeatable, so it can serve as a splitting oracle.
    pub fn serialized_size(&self, first: u32, last: u32) -> Result<u64> {
        let subset = self.subset(first, last)?;
        Ok(serde_json::to_vec(&subset)?.len() as u64)
    }
}

impl GlyphSource for MemoryDocument {
    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    fn page_size(&self, page: u32) -> Result<PageSize> {
        let p = self.page(page)?;
        Ok(PageSize {
            width: p.width,
            height: p.height,
        })
    }

    fn text_runs(&self, page: u32) -> Result<Box<dyn Iterator<Item = TextRun> + '_>> {
        let p = self.page(page)?;
        Ok(Box::new(p.runs.iter().cloned()))
    }
}

/// Reconstructed text of one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageText {
    /// Page number (1-based)
    pub page: u32,
    /// Lines joined with `\n`
    pub text: String,
}

/// Query surface over a glyph source.
///
/// # Example
///
/// ```
/// use pdf_locate::document::{MemoryDocument, MemoryPage, TextLocator};
/// use pdf_locate::geometry::Point;
/// use pdf_locate::search::SearchOptions;
/// use pdf_locate::text::TextRun;
///
/// let page = MemoryPage::new(595.0, 842.0)
///     .with_run(TextRun::horizontal("Sample text", Point::new(72.0, 770.0), 6.0, 9.0, 3.0, 3.0));
/// let doc = MemoryDocument::new(vec![page]);
///
/// let hits = TextLocator::new(&doc).search_word("Sample", &SearchOptions::new())?;
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].location.page, 1);
/// # Ok::<(), pdf_locate::Error>(())
/// ```
pub struct TextLocator<'a, S: GlyphSource + ?Sized, C: CancelToken = NeverCancel> {
    source: &'a S,
    config: LocateConfig,
    cancel: C,
}

impl<'a, S: GlyphSource + ?Sized> TextLocator<'a, S, NeverCancel> {
    /// Create a locator with the default configuration.
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            config: LocateConfig::default(),
            cancel: NeverCancel,
        }
    }
}

impl<'a, S: GlyphSource + ?Sized, C: CancelToken> TextLocator<'a, S, C> {
    /// Replace the configuration.
    pub fn with_config(mut self, config: LocateConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a cancellation token.
    pub fn with_cancel<T: CancelToken>(self, cancel: T) -> TextLocator<'a, S, T> {
        TextLocator {
            source: self.source,
            config: self.config,
            cancel,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &LocateConfig {
        &self.config
    }

    /// Pages selected by the options: every page unless one is requested.
    fn select_pages(&self, options: &SearchOptions) -> Result<Vec<u32>> {
        let page_count = self.source.page_count();
        match options.page_filter() {
            None => Ok((1..=page_count).collect()),
            Some(p) if p > page_count => Err(Error::PageOutOfRange { page: p, page_count }),
            Some(p) => Ok(vec![p]),
        }
    }

    /// Render one page after checking for cancellation.
    fn load_page(&self, page: u32) -> Result<(PageSize, Vec<TextRun>)> {
        if self.cancel.is_cancelled() {
            log::debug!("cancelled before page {}", page);
            return Err(Error::Cancelled);
        }

        let size = self.source.page_size(page)?;
        let runs: Vec<TextRun> = self.source.text_runs(page)?.collect();

        // Every run is kept; non-horizontal ones are only reported
        let threshold = self.config.max_orientation_magnitude;
        let rotated = runs
            .iter()
            .filter(|r| {
                let loc = ChunkLocation::new(r.baseline.start, r.baseline.end, r.single_space_width);
                loc.orientation_magnitude().abs() > threshold
            })
            .count();
        if rotated > 0 {
            log::debug!("page {}: {} of {} runs are not horizontal", page, rotated, runs.len());
        }
        log::debug!("page {}: {} runs", page, runs.len());

        Ok((size, runs))
    }

    fn locate(&self, page: u32, page_height: f32, spans: Vec<WordSpan>, options: &SearchOptions) -> Vec<WordLocation> {
        spans
            .into_iter()
            .filter_map(|span| {
                let bbox = BoundingBox::from_corners(page, page_height, span.top_left, span.bottom_right);
                if bbox.is_degenerate() {
                    log::debug!("page {}: dropping degenerate word {:?} at {}", page, span.text, bbox);
                    return None;
                }
                options.accepts(&bbox).then(|| WordLocation::new(span.text, bbox))
            })
            .collect()
    }

    /// Find every occurrence of the given words.
    ///
    /// Words are single tokens; a word containing whitespace is an
    /// [`Error::InvalidArgument`]. Results are ordered by text.
    pub fn search_words(&self, words: &[&str], options: &SearchOptions) -> Result<Vec<WordLocation>> {
        validate_words(words)?;
        let pages = self.select_pages(options)?;

        let mut results = Vec::new();
        for page in pages {
            let (size, runs) = self.load_page(page)?;
            let chunks: Vec<TextChunk> = runs.iter().map(TextChunk::from_run).collect();
            let lines = group_lines(&chunks);
            let spans = text::search_words(&lines, words, options.case_insensitive);
            log::debug!("page {}: {} lines, {} hits", page, lines.len(), spans.len());
            results.extend(self.locate(page, size.height, spans, options));
        }

        results.sort_by(|a, b| a.text.cmp(&b.text));
        Ok(results)
    }

    /// Find every occurrence of one word.
    pub fn search_word(&self, word: &str, options: &SearchOptions) -> Result<Vec<WordLocation>> {
        self.search_words(&[word], options)
    }

    /// Reconstruct every word, ordered by page, then top to bottom, then
    /// left to right.
    pub fn all_words(&self, options: &SearchOptions) -> Result<Vec<WordLocation>> {
        let pages = self.select_pages(options)?;

        let mut results = Vec::new();
        for page in pages {
            let (size, runs) = self.load_page(page)?;
            let chunks: Vec<TextChunk> = runs.iter().map(TextChunk::from_run).collect();
            let lines = group_lines(&chunks);
            let spans = text::all_words(&lines);
            log::debug!("page {}: {} lines, {} words", page, lines.len(), spans.len());
            results.extend(self.locate(page, size.height, spans, options));
        }

        results.sort_by(|a, b| {
            a.location
                .page
                .cmp(&b.location.page)
                .then_with(|| crate::utils::safe_float_cmp(a.location.y_top, b.location.y_top))
                .then_with(|| crate::utils::safe_float_cmp(a.location.x_left, b.location.x_left))
        });
        Ok(results)
    }

    /// Match a regular expression against each page's text, in paint order.
    pub fn search_regex(&self, pattern: &str, options: &SearchOptions) -> Result<Vec<WordLocation>> {
        let regex = TextSearcher::build_regex(pattern, options)?;
        let pages = self.select_pages(options)?;

        let mut results = Vec::new();
        for page in pages {
            let (size, runs) = self.load_page(page)?;
            let matches = TextSearcher::search_page(&runs, page, size.height, &regex, options);
            log::debug!("page {}: {} regex matches", page, matches.len());
            results.extend(matches);

            if options.stop_after_first_match && !results.is_empty() {
                break;
            }
        }

        Ok(results)
    }

    /// Reconstruct the text of one page with the configured extraction mode.
    pub fn page_text(&self, page: u32) -> Result<PageText> {
        let page_count = self.source.page_count();
        if page == 0 || page > page_count {
            return Err(Error::PageOutOfRange { page, page_count });
        }
        let (_, runs) = self.load_page(page)?;
        let lines = text::extract_lines(&runs, self.config.extraction_mode());
        Ok(PageText {
            page,
            text: lines.join("\n"),
        })
    }

    /// Whether each word occurs somewhere in the document, ignoring case.
    ///
    /// Scanning stops as soon as every word has been found.
    pub fn contains_words(&self, words: &[&str]) -> Result<Vec<bool>> {
        validate_words(words)?;
        let targets: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
        let mut found = vec![false; targets.len()];

        for page in 1..=self.source.page_count() {
            if found.iter().all(|&f| f) {
                break;
            }
            let text = self.page_text(page)?.text.to_lowercase();
            for (target, hit) in targets.iter().zip(found.iter_mut()) {
                if !*hit && text.contains(target.as_str()) {
                    *hit = true;
                }
            }
        }

        Ok(found)
    }

    /// Whether `word` occurs somewhere in the document, ignoring case.
    pub fn contains_word(&self, word: &str) -> Result<bool> {
        Ok(self.contains_words(&[word])?.into_iter().all(|f| f))
    }

    /// Whether the document (or one page) has any text besides spaces and
    /// line breaks.
    pub fn contains_any_text(&self, page: Option<u32>) -> Result<bool> {
        let options = SearchOptions {
            page,
            ..Default::default()
        };
        for p in self.select_pages(&options)? {
            let text = self.page_text(p)?.text;
            if text.chars().any(|c| !matches!(c, ' ' | '\n' | '\r')) {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
