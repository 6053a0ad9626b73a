//! Tolerance-merge line extraction.
//!
//! A looser reconstruction for plain text dumps. Runs are bucketed into lines
//! by comparing their baseline y with the first run recorded for each line,
//! so any paint order is tolerated. Lines come out in discovery order, not
//! sorted top to bottom; callers that need reading order must sort.

use super::glyph::TextRun;

/// Default horizontal gap tolerance.
pub const DEFAULT_TOLERANCE_X: f32 = 2.0;

/// Default vertical tolerance.
pub const DEFAULT_TOLERANCE_Y: f32 = 2.0;

struct MergedLine<'a> {
    anchor_y: f32,
    runs: Vec<&'a TextRun>,
}

/// Merge runs into text lines.
///
/// Within a line, runs are ordered by their start x. Two consecutive runs are
/// joined directly when the gap between the end of the first and the start of
/// the second is at most `tolerance_x`, otherwise with a single space.
///
/// # Examples
///
/// ```
/// use pdf_locate::geometry::Point;
/// use pdf_locate::text::{merge_lines, TextRun};
///
/// let runs = [
///     TextRun::horizontal("world", Point::new(40.0, 700.5), 5.0, 8.0, 2.0, 3.0),
///     TextRun::horizontal("Hello", Point::new(0.0, 700.0), 5.0, 8.0, 2.0, 3.0),
/// ];
/// assert_eq!(merge_lines(&runs, 2.0, 2.0), vec!["Hello world"]);
/// ```
pub fn merge_lines(runs: &[TextRun], tolerance_x: f32, tolerance_y: f32) -> Vec<String> {
    let mut lines: Vec<MergedLine<'_>> = Vec::new();

    for run in runs {
        let y = run.baseline.start.y;
        match lines.iter_mut().find(|l| (l.anchor_y - y).abs() <= tolerance_y) {
            Some(line) => line.runs.push(run),
            None => lines.push(MergedLine {
                anchor_y: y,
                runs: vec![run],
            }),
        }
    }

    lines
        .into_iter()
        .map(|mut line| {
            line.runs
                .sort_by(|a, b| crate::utils::safe_float_cmp(a.baseline.start.x, b.baseline.start.x));

            let mut text = String::new();
            let mut previous_end: Option<f32> = None;
            for run in &line.runs {
                if let Some(end) = previous_end {
                    if run.baseline.start.x - end > tolerance_x {
                        text.push(' ');
                    }
                }
                text.push_str(&run.text);
                previous_end = Some(run.baseline.end.x);
            }
            text
        })
        .collect()
}
