//! Word search and splitting benchmarks
//!
//! Measures line grouping, exact word search, full word reconstruction and
//! regex search over synthetic pages, plus the number-of-probes-bound
//! capacity splitter.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pdf_locate::document::{MemoryDocument, MemoryPage, TextLocator};
use pdf_locate::geometry::Point;
use pdf_locate::search::SearchOptions;
use pdf_locate::split::split_by_capacity;
use pdf_locate::text::{group_lines, TextChunk, TextRun};

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "torquent", "per",
];

/// A page of `lines` lines, each made of one run per word.
fn generate_page(lines: usize) -> MemoryPage {
    let mut page = MemoryPage::new(595.0, 842.0);
    for line in 0..lines {
        let y = 800.0 - line as f32 * 12.0;
        let mut x = 40.0;
        for (i, word) in WORDS.iter().enumerate() {
            let text = if (line + i) % 7 == 0 { word.to_uppercase() } else { word.to_string() };
            page = page.with_run(TextRun::horizontal(&text, Point::new(x, y), 5.0, 8.0, 2.0, 3.0));
            x += text.len() as f32 * 5.0 + 3.0;
        }
    }
    page
}

fn generate_document(pages: usize, lines: usize) -> MemoryDocument {
    MemoryDocument::new((0..pages).map(|_| generate_page(lines)).collect())
}

fn bench_line_grouping(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_grouping");
    for lines in [10, 60] {
        let page = generate_page(lines);
        let chunks: Vec<TextChunk> = page.runs.iter().map(TextChunk::from_run).collect();
        group.bench_with_input(BenchmarkId::from_parameter(lines), &chunks, |b, chunks| {
            b.iter(|| group_lines(black_box(chunks)).len())
        });
    }
    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let doc = generate_document(10, 60);
    let locator = TextLocator::new(&doc);
    let options = SearchOptions::case_insensitive();

    c.bench_function("search_words", |b| {
        b.iter(|| locator.search_words(black_box(&["torquent", "amet"]), &options).map(|r| r.len()))
    });
    c.bench_function("all_words", |b| b.iter(|| locator.all_words(&options).map(|r| r.len())));
    c.bench_function("search_regex", |b| {
        b.iter(|| locator.search_regex(black_box("torqu(.*)t"), &options).map(|r| r.len()))
    });
}

fn bench_split(c: &mut Criterion) {
    let sizes: Vec<u64> = (0..2000).map(|i| 1_000 + (i % 13) * 250).collect();
    let oracle = |first: u32, last: u32| -> pdf_locate::Result<u64> {
        Ok(sizes[first as usize - 1..last as usize].iter().sum())
    };

    c.bench_function("split_by_capacity_2000", |b| {
        b.iter(|| split_by_capacity(2000, &oracle, black_box(250_000)).map(|r| r.len()))
    });
}

criterion_group!(benches, bench_line_grouping, bench_queries, bench_split);
criterion_main!(benches);
