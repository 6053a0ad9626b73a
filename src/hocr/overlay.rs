//! Placement of hOCR words on document pages.
//!
//! OCR boxes are measured in pixels from the top of the scanned image; text
//! is drawn in page units from the bottom of the page. The scale is the page
//! width divided by the OCR page width, and the baseline of a word sits at
//! the bottom of its box.

use super::HocrPage;
use crate::document::PageSize;
use serde::{Deserialize, Serialize};

/// Where and how to draw one word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPlacement {
    /// Text to draw
    pub text: String,
    /// Font size in page units
    pub font_size: f32,
    /// Text matrix `[a, b, c, d, e, f]`
    pub matrix: [f32; 6],
}

impl TextPlacement {
    /// Origin of the text, in page units.
    pub fn origin(&self) -> (f32, f32) {
        (self.matrix[4], self.matrix[5])
    }
}

/// Placements for one document page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageOverlay {
    /// Page number (1-based)
    pub page: u32,
    /// Words to draw
    pub placements: Vec<TextPlacement>,
}

/// Compute the placement of every word of an OCR page.
///
/// Words without a usable font size use `default_font_size`. The text
/// matrix follows the word's text angle; rotated words are anchored at the
/// right edge of their box.
///
/// # Examples
///
/// ```
/// use pdf_locate::hocr::{place_words, HocrPage, HocrWord};
///
/// let page = HocrPage {
///     page: 1,
///     width: 1000.0,
///     height: 1000.0,
///     words: vec![HocrWord {
///         text: "scan".into(),
///         x: 100.0,
///         y: 200.0,
///         width: 80.0,
///         height: 20.0,
///         font_size: 10.0,
///         text_angle: 0.0,
///     }],
/// };
/// let placed = place_words(&page, 500.0, 500.0, 8.0);
/// assert_eq!(placed[0].font_size, 5.0);
/// assert_eq!(placed[0].matrix, [1.0, 0.0, 0.0, 1.0, 50.0, 390.0]);
/// ```
pub fn place_words(page: &HocrPage, page_width: f32, page_height: f32, default_font_size: f32) -> Vec<TextPlacement> {
    let scale = page_width / page.width;

    page.words
        .iter()
        .map(|word| {
            let size = if word.font_size > 0.0 {
                word.font_size
            } else {
                default_font_size
            };
            let y = page_height - word.height * scale - word.y * scale;
            let right = (word.x + word.width) * scale;

            let matrix = if word.text_angle == 90.0 {
                [0.0, 1.0, -1.0, 0.0, right, y]
            } else if word.text_angle == 180.0 {
                [-1.0, 0.0, 0.0, 1.0, right, y]
            } else if word.text_angle == 270.0 {
                [0.0, 1.0, 1.0, 0.0, right, y]
            } else {
                [1.0, 0.0, 0.0, 1.0, word.x * scale, y]
            };

            TextPlacement {
                text: word.text.clone(),
                font_size: size * scale,
                matrix,
            }
        })
        .collect()
}

/// Plan the text overlay of a whole document.
///
/// `page_sizes[i]` is the size of page `i + 1`. Document pages without an
/// OCR page, or whose OCR page has no words, get no overlay.
pub fn plan_overlay(hocr_pages: &[HocrPage], page_sizes: &[PageSize], default_font_size: f32) -> Vec<PageOverlay> {
    let mut overlays = Vec::new();

    for (idx, size) in page_sizes.iter().enumerate() {
        let page = idx as u32 + 1;
        let hocr_page = match hocr_pages.iter().find(|p| p.page == page) {
            Some(p) if !p.words.is_empty() => p,
            _ => continue,
        };
        overlays.push(PageOverlay {
            page,
            placements: place_words(hocr_page, size.width, size.height, default_font_size),
        });
    }

    log::debug!("planned text overlay for {} of {} pages", overlays.len(), page_sizes.len());
    overlays
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hocr::HocrWord;

    fn word(text_angle: f32, font_size: f32) -> HocrWord {
        HocrWord {
            text: "w".into(),
            x: 100.0,
            y: 200.0,
            width: 40.0,
            height: 400.0,
            font_size,
            text_angle,
        }
    }

    fn page(words: Vec<HocrWord>) -> HocrPage {
        HocrPage {
            page: 1,
            width: 2000.0,
            height: 2000.0,
            words,
        }
    }

    #[test]
    fn test_rotations() {
        let p = page(vec![word(90.0, 10.0), word(180.0, 10.0), word(270.0, 10.0), word(0.0, 10.0)]);
        let placed = place_words(&p, 1000.0, 1000.0, 8.0);
        // scale 0.5, y = 1000 - 200 - 100
        assert_eq!(placed[0].matrix, [0.0, 1.0, -1.0, 0.0, 70.0, 700.0]);
        assert_eq!(placed[1].matrix, [-1.0, 0.0, 0.0, 1.0, 70.0, 700.0]);
        assert_eq!(placed[2].matrix, [0.0, 1.0, 1.0, 0.0, 70.0, 700.0]);
        assert_eq!(placed[3].matrix, [1.0, 0.0, 0.0, 1.0, 50.0, 700.0]);
        assert_eq!(placed[3].origin(), (50.0, 700.0));
    }

    #[test]
    fn test_unknown_angle_is_upright() {
        let placed = place_words(&page(vec![word(-1.0, 10.0)]), 1000.0, 1000.0, 8.0);
        assert_eq!(placed[0].matrix[..4], [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_default_font_size() {
        let placed = place_words(&page(vec![word(0.0, -1.0), word(0.0, 0.0)]), 1000.0, 1000.0, 8.0);
        assert_eq!(placed[0].font_size, 4.0);
        assert_eq!(placed[1].font_size, 4.0);
    }

    #[test]
    fn test_plan_overlay() {
        let pages = vec![
            page(vec![word(0.0, 10.0)]),
            HocrPage {
                page: 2,
                words: Vec::new(),
                ..page(Vec::new())
            },
            HocrPage {
                page: 3,
                ..page(vec![word(0.0, 10.0)])
            },
        ];
        let sizes = vec![
            PageSize {
                width: 1000.0,
                height: 1000.0,
            };
            4
        ];
        let overlays = plan_overlay(&pages, &sizes, 8.0);
        let numbers: Vec<u32> = overlays.iter().map(|o| o.page).collect();
        assert_eq!(numbers, vec![1, 3]);
    }
}
