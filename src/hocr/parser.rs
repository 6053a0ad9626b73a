//! hOCR parsing.
//!
//! Only the `title` properties the overlay needs are read: `bbox` and
//! `ppageno` on pages, `bbox` on words, `textangle` and `x_fsize` (or
//! `x_size`) on lines. Numbers use Rust's locale-independent parsing.

use super::{HocrPage, HocrWord};
use crate::error::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::path::Path;

/// Line-level classes that carry the text angle and font size of their words.
const LINE_CLASSES: &[&str] = &["ocr_line", "ocr_caption", "ocr_header", "ocr_textfloat"];

const LIGATURES: &[(&str, &str)] = &[
    ("\u{FB00}", "ff"),
    ("\u{FB01}", "fi"),
    ("\u{FB02}", "fl"),
    ("\u{FB03}", "ffi"),
    ("\u{FB04}", "ffl"),
    ("\u{FB05}", "ft"),
    ("\u{FB06}", "st"),
];

/// Replace typographic ligatures with their letter sequences.
///
/// # Examples
///
/// ```
/// use pdf_locate::hocr::expand_ligatures;
///
/// assert_eq!(expand_ligatures("\u{FB01}le \u{FB03}ce"), "file office");
/// ```
pub fn expand_ligatures(text: &str) -> String {
    let mut out = text.to_string();
    for (ligature, letters) in LIGATURES {
        if out.contains(ligature) {
            out = out.replace(ligature, letters);
        }
    }
    out
}

/// Value of `key` in a title attribute (`key value; key value ...`).
fn title_value<'t>(title: &'t str, key: &str) -> Option<&'t str> {
    title
        .split(';')
        .map(str::trim)
        .find_map(|prop| prop.strip_prefix(key)?.strip_prefix(' '))
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

fn parse_f32(value: &str) -> Result<f32> {
    value
        .parse::<f32>()
        .map_err(|_| Error::InvalidNumber(value.to_string()))
}

/// A float property, -1 when absent.
fn title_f32(title: &str, key: &str) -> Result<f32> {
    title_value(title, key).map_or(Ok(-1.0), parse_f32)
}

/// `(x, y, width, height)` from a `bbox x0 y0 x1 y1` property.
fn title_bbox(title: &str) -> Result<Option<(f32, f32, f32, f32)>> {
    let coords: Vec<&str> = match title_value(title, "bbox") {
        Some(value) => value.split_whitespace().collect(),
        None => return Ok(None),
    };
    if coords.len() != 4 {
        return Ok(None);
    }
    let x0 = parse_f32(coords[0])?;
    let y0 = parse_f32(coords[1])?;
    let x1 = parse_f32(coords[2])?;
    let y1 = parse_f32(coords[3])?;
    Ok(Some((x0, y0, x1 - x0, y1 - y0)))
}

fn get_attribute(e: &BytesStart<'_>, name: &str) -> Result<Option<String>> {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == name.as_bytes() {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

fn has_class(class: Option<&str>, wanted: &str) -> bool {
    class.is_some_and(|c| c.split_whitespace().any(|part| part == wanted))
}

struct PageBuilder {
    page: i64,
    width: f32,
    height: f32,
    words: Vec<HocrWord>,
}

struct WordBuilder {
    bbox: Option<(f32, f32, f32, f32)>,
    text: String,
    font_size: f32,
    text_angle: f32,
}

/// Open elements, innermost last.
enum Frame {
    Page,
    Line { font_size: f32, text_angle: f32 },
    Word,
    Other,
}

fn start_page(e: &BytesStart<'_>) -> Result<PageBuilder> {
    let title = get_attribute(e, "title")?.unwrap_or_default();
    let ppageno = match title_value(&title, "ppageno") {
        Some(v) => v.parse::<i64>().map_err(|_| Error::InvalidNumber(v.to_string()))?,
        None => -1,
    };
    let (_, _, width, height) = title_bbox(&title)?.unwrap_or((-1.0, -1.0, -1.0, -1.0));
    Ok(PageBuilder {
        page: ppageno + 1,
        width,
        height,
        words: Vec::new(),
    })
}

fn line_frame(e: &BytesStart<'_>) -> Result<Frame> {
    let title = get_attribute(e, "title")?.unwrap_or_default();
    let mut font_size = title_f32(&title, "x_fsize")?;
    if font_size < 0.0 {
        // Some engines only write x_size
        font_size = title_f32(&title, "x_size")?;
    }
    Ok(Frame::Line {
        font_size,
        text_angle: title_f32(&title, "textangle")?,
    })
}

fn start_word(e: &BytesStart<'_>, stack: &[Frame]) -> Result<WordBuilder> {
    let title = get_attribute(e, "title")?.unwrap_or_default();
    let (font_size, text_angle) = stack
        .iter()
        .rev()
        .find_map(|f| match f {
            Frame::Line {
                font_size,
                text_angle,
            } => Some((*font_size, *text_angle)),
            _ => None,
        })
        .unwrap_or((-1.0, -1.0));
    Ok(WordBuilder {
        bbox: title_bbox(&title)?,
        text: String::new(),
        font_size,
        text_angle,
    })
}

fn finish_word(word: WordBuilder, page: Option<&mut PageBuilder>) {
    let text = expand_ligatures(word.text.trim());
    let (x, y, width, height) = match word.bbox {
        Some(bbox) if bbox.0 > -1.0 => bbox,
        _ => {
            log::warn!("skipping hOCR word {:?} without bbox", text);
            return;
        },
    };
    if text.is_empty() {
        return;
    }
    if let Some(page) = page {
        page.words.push(HocrWord {
            text,
            x,
            y,
            width,
            height,
            font_size: word.font_size,
            text_angle: word.text_angle,
        });
    }
}

fn finish_page(page: PageBuilder, pages: &mut Vec<HocrPage>) {
    if page.page <= 0 || page.width <= 0.0 || page.page > u32::MAX as i64 {
        log::warn!("skipping hOCR page {} with width {}", page.page, page.width);
        return;
    }
    pages.push(HocrPage {
        page: page.page as u32,
        width: page.width,
        height: page.height,
        words: page.words,
    });
}

/// Parse an hOCR document.
///
/// Pages without a positive page number or width are skipped, as are words
/// without a bounding box or text.
pub fn parse_str(xml: &str) -> Result<Vec<HocrPage>> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut pages = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();
    let mut current_page: Option<PageBuilder> = None;
    let mut current_word: Option<WordBuilder> = None;

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => {
                let local_name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                let class = get_attribute(e, "class")?;
                let class = class.as_deref();

                let frame = if local_name == "div" && has_class(class, "ocr_page") {
                    current_page = Some(start_page(e)?);
                    Frame::Page
                } else if local_name == "span" && has_class(class, "ocrx_word") {
                    current_word = Some(start_word(e, &stack)?);
                    Frame::Word
                } else if LINE_CLASSES.iter().any(|c| has_class(class, c)) {
                    line_frame(e)?
                } else {
                    Frame::Other
                };
                stack.push(frame);
            },
            Event::Empty(ref e) => {
                // A self-closing page has no words but still counts
                let local_name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                if local_name == "div" && has_class(get_attribute(e, "class")?.as_deref(), "ocr_page") {
                    finish_page(start_page(e)?, &mut pages);
                }
            },
            Event::Text(e) => {
                if let Some(word) = current_word.as_mut() {
                    word.text.push_str(&e.unescape()?);
                }
            },
            Event::End(_) => match stack.pop() {
                Some(Frame::Word) => {
                    if let Some(word) = current_word.take() {
                        finish_word(word, current_page.as_mut());
                    }
                },
                Some(Frame::Page) => {
                    if let Some(page) = current_page.take() {
                        finish_page(page, &mut pages);
                    }
                },
                _ => {},
            },
            Event::Eof => break,
            _ => {},
        }
    }

    log::info!("parsed {} hOCR pages", pages.len());
    Ok(pages)
}

/// Parse an hOCR document from UTF-8 bytes.
pub fn parse_bytes(bytes: &[u8]) -> Result<Vec<HocrPage>> {
    let xml = std::str::from_utf8(bytes).map_err(|e| Error::Hocr(format!("invalid UTF-8: {}", e)))?;
    parse_str(xml)
}

/// Parse an hOCR file.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Vec<HocrPage>> {
    let xml = std::fs::read_to_string(path)?;
    parse_str(&xml)
}
