//! Locate words in a glyph-run dump
//!
//! Reads a JSON document (pages with their glyph runs) and prints the
//! results of one query as JSON.
//!
//! Usage:
//!   cargo run --bin locate_words -- doc.json --word Sample --word Total
//!   cargo run --bin locate_words -- doc.json --regex "Torqu(.*)t" --first
//!   cargo run --bin locate_words -- doc.json --all-words --page 2 --area 0,0,300,200 --overlap
//!   cargo run --bin locate_words -- doc.json --text
//!   cargo run --bin locate_words -- doc.json --split 60000
//!   cargo run --bin locate_words -- doc.json --hocr scan.hocr
//!
//! Set RUST_LOG=debug for per-page details.

use pdf_locate::document::{GlyphSource, MemoryDocument, TextLocator};
use pdf_locate::hocr;
use pdf_locate::split::{split_ranges_by_capacity, PageRange};
use pdf_locate::{Area, Error, LocateConfig, Result, SearchOptions};
use std::path::PathBuf;

enum Query {
    Words(Vec<String>),
    Regex(String),
    AllWords,
    Text,
    Split(u64),
    Hocr(PathBuf),
}

struct CliConfig {
    input: PathBuf,
    query: Query,
    options: SearchOptions,
    tolerance_merge: bool,
}

fn parse_area(value: &str) -> Result<Area> {
    let coords: Vec<f32> = value
        .split(',')
        .map(|v| v.trim().parse::<f32>().map_err(|_| Error::InvalidNumber(v.to_string())))
        .collect::<Result<_>>()?;
    match coords.as_slice() {
        [x_left, y_top, x_right, y_bottom] => Ok(Area::new(*x_left, *y_top, *x_right, *y_bottom)),
        _ => Err(Error::InvalidArgument(format!("area needs 4 values: {}", value))),
    }
}

fn next_value(args: &[String], i: &mut usize) -> Result<String> {
    *i += 1;
    args.get(*i)
        .cloned()
        .ok_or_else(|| Error::InvalidArgument(format!("{} needs a value", args[*i - 1])))
}

impl CliConfig {
    fn from_args() -> Result<Self> {
        let args: Vec<String> = std::env::args().collect();
        let mut input = None;
        let mut words = Vec::new();
        let mut query = None;
        let mut options = SearchOptions::new();
        let mut areas = Vec::new();
        let mut tolerance_merge = false;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--word" | "-w" => words.push(next_value(&args, &mut i)?),
                "--regex" | "-r" => query = Some(Query::Regex(next_value(&args, &mut i)?)),
                "--all-words" => query = Some(Query::AllWords),
                "--text" => query = Some(Query::Text),
                "--split" => {
                    let bytes = next_value(&args, &mut i)?;
                    let max = bytes.parse().map_err(|_| Error::InvalidNumber(bytes))?;
                    query = Some(Query::Split(max));
                },
                "--hocr" => query = Some(Query::Hocr(PathBuf::from(next_value(&args, &mut i)?))),
                "--page" | "-p" => {
                    let page = next_value(&args, &mut i)?;
                    options.page = Some(page.parse().map_err(|_| Error::InvalidNumber(page))?);
                },
                "--area" => areas.push(parse_area(&next_value(&args, &mut i)?)?),
                "--overlap" => options.accept_overlap = true,
                "--ignore-case" | "-i" => options.case_insensitive = true,
                "--first" => options.stop_after_first_match = true,
                "--tolerance-merge" => tolerance_merge = true,
                other if !other.starts_with('-') && input.is_none() => input = Some(PathBuf::from(other)),
                other => return Err(Error::InvalidArgument(format!("unknown argument {}", other))),
            }
            i += 1;
        }

        if !areas.is_empty() {
            options.areas = Some(areas);
        }
        let query = match query {
            Some(q) => q,
            None if !words.is_empty() => Query::Words(words),
            None => return Err(Error::InvalidArgument("no query given".into())),
        };

        Ok(Self {
            input: input.ok_or_else(|| Error::InvalidArgument("no input document".into()))?,
            query,
            options,
            tolerance_merge,
        })
    }
}

fn run() -> Result<()> {
    let cli = CliConfig::from_args()?;
    let doc = MemoryDocument::open(&cli.input)?;
    log::info!("loaded {} with {} pages", cli.input.display(), doc.page_count());

    let mut config = LocateConfig::default();
    if cli.tolerance_merge {
        config = config.with_tolerance_merge();
    }
    let locator = TextLocator::new(&doc).with_config(config);

    let output = match &cli.query {
        Query::Words(words) => {
            let words: Vec<&str> = words.iter().map(String::as_str).collect();
            serde_json::to_string_pretty(&locator.search_words(&words, &cli.options)?)?
        },
        Query::Regex(pattern) => serde_json::to_string_pretty(&locator.search_regex(pattern, &cli.options)?)?,
        Query::AllWords => serde_json::to_string_pretty(&locator.all_words(&cli.options)?)?,
        Query::Text => {
            let texts = match cli.options.page_filter() {
                Some(page) => vec![locator.page_text(page)?],
                None => (1..=doc.page_count())
                    .map(|page| locator.page_text(page))
                    .collect::<Result<Vec<_>>>()?,
            };
            serde_json::to_string_pretty(&texts)?
        },
        Query::Split(max_bytes) => {
            let oracle = |first: u32, last: u32| doc.serialized_size(first, last);
            let ranges = split_ranges_by_capacity(doc.page_count(), &oracle, *max_bytes)?;
            let ranges: Vec<String> = ranges.iter().map(PageRange::to_string).collect();
            serde_json::to_string_pretty(&ranges)?
        },
        Query::Hocr(path) => {
            let pages = hocr::parse_file(path)?;
            let sizes = (1..=doc.page_count())
                .map(|page| doc.page_size(page))
                .collect::<Result<Vec<_>>>()?;
            let overlays = hocr::plan_overlay(&pages, &sizes, locator.config().default_hocr_font_size);
            serde_json::to_string_pretty(&overlays)?
        },
    };

    println!("{}", output);
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
