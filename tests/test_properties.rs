//! Property-Based Tests
//!
//! Invariants of line grouping, word boundaries, the area filter and the
//! capacity splitter, checked over generated inputs.

use pdf_locate::geometry::Point;
use pdf_locate::split::{ranges_from_boundaries, split_by_capacity};
use pdf_locate::text::{assign_line_ids, ChunkLocation, TextChunk, TextRun};
use pdf_locate::{Area, BoundingBox};
use proptest::prelude::*;

// ============================================================================
// Line Grouping Properties
// ============================================================================

/// Property: horizontal chunks share a line iff their rounded baselines match
#[test]
fn proptest_same_line_follows_baseline() {
    proptest!(|(x1 in 0.0f32..500.0, x2 in 0.0f32..500.0, y in 10i32..800, dy in -20i32..20)| {
        let a = ChunkLocation::new(Point::new(x1, y as f32), Point::new(x1 + 30.0, y as f32), 3.0);
        let b = ChunkLocation::new(Point::new(x2, (y + dy) as f32), Point::new(x2 + 30.0, (y + dy) as f32), 3.0);
        prop_assert_eq!(a.same_line(&b), dy == 0);
        prop_assert_eq!(a.same_line(&b), b.same_line(&a));
    });
}

/// Property: line ids start at 1 and never decrease or skip
#[test]
fn proptest_line_ids_monotonic() {
    proptest!(|(baselines in prop::collection::vec(0u8..5, 0..40))| {
        let runs: Vec<TextRun> = baselines
            .iter()
            .enumerate()
            .map(|(i, b)| TextRun::horizontal("ab", Point::new(i as f32 * 20.0, 700.0 - *b as f32 * 15.0), 5.0, 8.0, 2.0, 3.0))
            .collect();
        let chunks: Vec<TextChunk> = runs.iter().map(TextChunk::from_run).collect();
        let ids = assign_line_ids(&chunks);

        prop_assert_eq!(ids.len(), chunks.len());
        if let Some(first) = ids.first() {
            prop_assert_eq!(*first, 1);
        }
        for pair in ids.windows(2) {
            prop_assert!(pair[1] == pair[0] || pair[1] == pair[0] + 1);
        }
    });
}

// ============================================================================
// Word Boundary Properties
// ============================================================================

/// Property: a gap wider than half a space separates words
#[test]
fn proptest_word_boundary_gap() {
    proptest!(|(start in 0.0f32..300.0, gap in 0.0f32..20.0, space in 1.0f32..10.0)| {
        let previous = ChunkLocation::new(Point::new(start, 500.0), Point::new(start + 40.0, 500.0), space);
        let next_start = start + 40.0 + gap;
        let current = ChunkLocation::new(Point::new(next_start, 500.0), Point::new(next_start + 40.0, 500.0), space);

        let dist = current.distance_from_end_of(&previous);
        prop_assert_eq!(current.is_at_word_boundary(&previous), dist > space / 2.0);
    });
}

// ============================================================================
// Area Filter Properties
// ============================================================================

/// Property: strict inclusion implies inclusion in overlap mode
#[test]
fn proptest_strict_implies_overlap() {
    proptest!(|(
        x in 0.0f32..500.0, y in 0.0f32..700.0, w in 1.0f32..80.0, h in 1.0f32..40.0,
        ax in 0.0f32..500.0, ay in 0.0f32..700.0, aw in 1.0f32..300.0, ah in 1.0f32..300.0
    )| {
        let bbox = BoundingBox::new(1, 842.0, x, y, x + w, y + h);
        let area = Area::new(ax, ay, ax + aw, ay + ah);
        if bbox.is_included_in(&area, false) {
            prop_assert!(bbox.is_included_in(&area, true));
        }
    });
}

// ============================================================================
// Splitter Properties
// ============================================================================

/// Property: the ranges cover every page once, each fits and none can grow
#[test]
fn proptest_split_partition() {
    proptest!(|(sizes in prop::collection::vec(1u64..=100, 1..60), budget in 100u64..400)| {
        let oracle = |first: u32, last: u32| -> pdf_locate::Result<u64> {
            Ok(sizes[first as usize - 1..last as usize].iter().sum())
        };
        let total = sizes.len() as u32;
        let boundaries = split_by_capacity(total, &oracle, budget).unwrap();

        prop_assert_eq!(boundaries.last().copied(), Some(total));
        for pair in boundaries.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        for range in ranges_from_boundaries(&boundaries) {
            prop_assert!(oracle(range.first, range.last).unwrap() <= budget);
            if range.last < total {
                prop_assert!(oracle(range.first, range.last + 1).unwrap() > budget);
            }
        }
    });
}
