//! Tests for line grouping, word assembly and areas through the public API.

use pdf_locate::geometry::{LineSegment, Point};
use pdf_locate::text::{all_words, extract_lines, group_lines, search_words, ExtractionMode, TextChunk, TextRun};
use pdf_locate::{Area, BoundingBox};

fn run(text: &str, x: f32, y: f32) -> TextRun {
    TextRun::horizontal(text, Point::new(x, y), 5.0, 8.0, 2.0, 3.0)
}

fn chunks(runs: &[TextRun]) -> Vec<TextChunk> {
    runs.iter().map(TextChunk::from_run).collect()
}

mod lines {
    use super::*;

    #[test]
    fn test_diacritic_joins_line() {
        let p = Point::new(12.0, 701.0);
        let runs = vec![
            run("Cafe", 0.0, 700.0),
            TextRun::new("\u{301}", LineSegment::new(p, p), p, p, 3.0),
            run("noir", 26.0, 700.0),
        ];
        let chunks = chunks(&runs);
        let lines = group_lines(&chunks);
        assert_eq!(lines.len(), 1);
        let text: String = lines[0].chunks.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(text, "Cafe\u{301}noir");
    }

    #[test]
    fn test_vertical_text_is_its_own_line() {
        let vertical = TextRun::new(
            "up",
            LineSegment::new(Point::new(300.0, 100.0), Point::new(300.0, 110.0)),
            Point::new(292.0, 100.0),
            Point::new(302.0, 110.0),
            3.0,
        );
        let runs = vec![run("left", 0.0, 100.0), vertical, run("right", 400.0, 100.0)];
        let chunks = chunks(&runs);
        assert_eq!(group_lines(&chunks).len(), 3);
    }
}

mod words {
    use super::*;

    #[test]
    fn test_words_split_on_gaps_and_spaces() {
        // "Total" ends at 25; "due now" starts 10 units later
        let runs = vec![run("Total", 0.0, 700.0), run("due now", 35.0, 700.0)];
        let chunks = chunks(&runs);
        let lines = group_lines(&chunks);
        let words: Vec<String> = all_words(&lines).into_iter().map(|w| w.text).collect();
        assert_eq!(words, vec!["Total", "due", "now"]);
    }

    #[test]
    fn test_touching_runs_form_one_word() {
        let runs = vec![run("Tor", 0.0, 700.0), run("quent", 15.0, 700.0)];
        let chunks = chunks(&runs);
        let lines = group_lines(&chunks);

        let words = all_words(&lines);
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].text, "Torquent");
        assert_eq!(words[0].top_left, Point::new(0.0, 708.0));
        assert_eq!(words[0].bottom_right, Point::new(40.0, 698.0));

        let hits = search_words(&lines, &["QUEN"], true);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].text, "quen");
        assert_eq!(hits[0].top_left.x, 15.0);
        assert_eq!(hits[0].bottom_right.x, 35.0);
    }

    #[test]
    fn test_positional_text_inserts_boundary_spaces() {
        let runs = vec![run("Total", 0.0, 700.0), run("due", 35.0, 700.0), run("next", 0.0, 680.0)];
        assert_eq!(extract_lines(&runs, ExtractionMode::Positional), vec!["Total due", "next"]);
    }
}

mod areas {
    use super::*;

    const PAGE_HEIGHT: f32 = 800.0;

    #[test]
    fn test_bottom_origin_area() {
        // Document-space word box from y=690 to y=710
        let bbox = BoundingBox::from_corners(1, PAGE_HEIGHT, Point::new(50.0, 710.0), Point::new(90.0, 690.0));
        assert_eq!((bbox.y_top, bbox.y_bottom), (90.0, 110.0));
        assert_eq!(bbox.y_top_from_bottom(), 710.0);
        assert_eq!(bbox.y_center_from_bottom(), 700.0);

        let from_bottom = Area::new(0.0, 750.0, 200.0, 650.0).with_y_from_bottom(true);
        assert!(bbox.is_included_in(&from_bottom, false));
        let from_top = from_bottom.to_top_origin(PAGE_HEIGHT);
        assert_eq!((from_top.y_top, from_top.y_bottom), (50.0, 150.0));
        assert!(bbox.is_included_in(&from_top, false));
    }

    #[test]
    fn test_overlap_needs_an_edge_inside() {
        let bbox = BoundingBox::new(1, PAGE_HEIGHT, 50.0, 100.0, 90.0, 120.0);
        let corner = Area::new(80.0, 110.0, 200.0, 200.0);
        assert!(!bbox.is_included_in(&corner, false));
        assert!(bbox.is_included_in(&corner, true));

        // Area strictly inside the box touches none of its edges
        let inner = Area::new(60.0, 105.0, 70.0, 115.0);
        assert!(!bbox.is_included_in(&inner, true));
    }

    #[test]
    fn test_area_page_restriction() {
        let bbox = BoundingBox::new(2, PAGE_HEIGHT, 50.0, 100.0, 90.0, 120.0);
        let area = Area::new(0.0, 0.0, 600.0, 800.0);
        assert!(bbox.is_included_in(&area, false));
        assert!(bbox.is_included_in(&area.with_page(0), false));
        assert!(!bbox.is_included_in(&area.with_page(1), false));
        assert!(bbox.is_included_in_any(Some(&[area.with_page(1), area.with_page(2)]), false));
        assert!(bbox.is_included_in_any(None, false));
        assert!(bbox.is_included_in_any(Some(&[]), false));
    }

    #[test]
    fn test_to_area() {
        let bbox = BoundingBox::new(3, PAGE_HEIGHT, 50.0, 100.0, 90.0, 120.0);
        let area = bbox.to_area(true);
        assert_eq!(area.page, Some(3));
        assert_eq!((area.y_top, area.y_bottom), (700.0, 680.0));
        assert!(bbox.is_included_in(&area, false));
    }
}
