//! Capacity-bounded page range partitioning.
//!
//! [`split_by_capacity`] partitions pages `1..=N` into contiguous ranges whose
//! rendered size stays within a byte budget. The size of a range is only
//! known by rendering it through a [`RenderOracle`], which is expensive, so
//! the end of each range is found by binary search instead of a linear scan.
//!
//! The search assumes sizes grow monotonically with the range length.
//!
//! ## Example
//!
//! ```
//! use pdf_locate::split::split_by_capacity;
//!
//! let sizes = [50_000u64, 30_000, 20_000];
//! let oracle = |first: u32, last: u32| -> pdf_locate::Result<u64> {
//!     Ok(sizes[first as usize - 1..last as usize].iter().sum())
//! };
//! assert_eq!(split_by_capacity(3, &oracle, 60_000)?, vec![1, 3]);
//! # Ok::<(), pdf_locate::Error>(())
//! ```

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Renders a contiguous range of units and reports its size in bytes.
///
/// Implementations must be side-effect free: the same range always has the
/// same size, and probing one range must not affect the next.
pub trait RenderOracle {
    /// Size in bytes of units `first..=last` (1-based, inclusive).
    fn render_size(&self, first: u32, last: u32) -> Result<u64>;
}

impl<F> RenderOracle for F
where
    F: Fn(u32, u32) -> Result<u64>,
{
    fn render_size(&self, first: u32, last: u32) -> Result<u64> {
        self(first, last)
    }
}

/// Find the last unit of the range starting at `start`.
///
/// Returns the largest `m` in `start..=total_units` such that
/// `start..=m` fits in `max_bytes`.
pub fn find_next_boundary<O: RenderOracle + ?Sized>(
    total_units: u32,
    oracle: &O,
    max_bytes: u64,
    start: u32,
) -> Result<u32> {
    if start < 1 || start > total_units {
        return Err(Error::InvalidArgument(format!(
            "start unit {} outside 1..={}",
            start, total_units
        )));
    }

    let mut lower = start as i64;
    let mut higher = total_units as i64;
    // The whole remaining range is probed first
    let mut middle = higher;
    let mut best: Option<u32> = None;
    let mut last_size = 0u64;

    while lower <= higher {
        let size = oracle.render_size(start, middle as u32)?;
        log::debug!("probe {}-{}: {} bytes", start, middle, size);
        last_size = size;

        if size > max_bytes {
            higher = middle - 1;
        } else {
            best = Some(middle as u32);
            lower = middle + 1;
        }
        // Rounded up
        middle = lower + (higher - lower + 1) / 2;
    }

    // Without a fit the search narrows down to `start` alone, so the last
    // probe measured that single unit
    best.ok_or(Error::SizeConstraintUnsatisfiable {
        unit: start,
        max_bytes,
        size: last_size,
    })
}

/// Partition units `1..=total_units` into ranges of at most `max_bytes`.
///
/// Returns the last unit of each range, strictly increasing and ending with
/// `total_units`. Fails with [`Error::SizeConstraintUnsatisfiable`] when a
/// single unit alone exceeds the budget.
pub fn split_by_capacity<O: RenderOracle + ?Sized>(total_units: u32, oracle: &O, max_bytes: u64) -> Result<Vec<u32>> {
    let mut boundaries = Vec::new();
    let mut start = 1;

    while start <= total_units {
        let boundary = find_next_boundary(total_units, oracle, max_bytes, start)?;
        boundaries.push(boundary);
        start = boundary + 1;
    }

    log::info!("split {} units into {} ranges: {:?}", total_units, boundaries.len(), boundaries);
    Ok(boundaries)
}

/// Like [`split_by_capacity`], returning the ranges themselves.
pub fn split_ranges_by_capacity<O: RenderOracle + ?Sized>(
    total_units: u32,
    oracle: &O,
    max_bytes: u64,
) -> Result<Vec<PageRange>> {
    Ok(ranges_from_boundaries(&split_by_capacity(total_units, oracle, max_bytes)?))
}

/// An inclusive, 1-based page range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRange {
    /// First page
    pub first: u32,
    /// Last page
    pub last: u32,
}

impl PageRange {
    /// Create a range; `first` must not exceed `last`.
    pub fn new(first: u32, last: u32) -> Result<Self> {
        if first == 0 || first > last {
            return Err(Error::InvalidArgument(format!("invalid page range {}-{}", first, last)));
        }
        Ok(Self { first, last })
    }

    /// Number of pages in the range.
    pub fn len(&self) -> u32 {
        self.last - self.first + 1
    }

    /// Whether `page` is in the range.
    pub fn contains(&self, page: u32) -> bool {
        self.first <= page && page <= self.last
    }
}

impl FromStr for PageRange {
    type Err = Error;

    /// Parse `"3-5"` or `"4"`.
    fn from_str(s: &str) -> Result<Self> {
        let parse = |part: &str| {
            part.trim()
                .parse::<u32>()
                .map_err(|_| Error::InvalidArgument(format!("invalid page range {:?}", s)))
        };

        match s.split_once('-') {
            Some((first, last)) => PageRange::new(parse(first)?, parse(last)?),
            None => {
                let page = parse(s)?;
                PageRange::new(page, page)
            },
        }
    }
}

impl fmt::Display for PageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first, self.last)
    }
}

/// Turn splitter boundaries into the ranges they delimit.
pub fn ranges_from_boundaries(boundaries: &[u32]) -> Vec<PageRange> {
    let mut first = 1;
    boundaries
        .iter()
        .map(|&last| {
            let range = PageRange { first, last };
            first = last + 1;
            range
        })
        .collect()
}

/// Ranges for splitting at the given page numbers.
///
/// Each number starts a new range; page 1 always starts the first one. Every
/// number must lie in `1..=page_count`.
pub fn ranges_from_page_numbers(page_numbers: &[u32], page_count: u32) -> Result<Vec<PageRange>> {
    if let Some(&bad) = page_numbers.iter().find(|&&p| p < 1 || p > page_count) {
        return Err(Error::InvalidArgument(format!("invalid split page number {}", bad)));
    }

    let mut starts: Vec<u32> = page_numbers.to_vec();
    starts.push(1);
    starts.sort_unstable();
    starts.dedup();

    let mut ranges = Vec::with_capacity(starts.len());
    for (i, &first) in starts.iter().enumerate() {
        let last = starts.get(i + 1).map_or(page_count, |next| next - 1);
        ranges.push(PageRange { first, last });
    }
    Ok(ranges)
}
