//! Page areas and word bounding boxes.
//!
//! [`Area`] is a caller-supplied search rectangle which may be expressed with
//! the vertical origin at the top of the page (the default) or at the bottom.
//! [`BoundingBox`] is the read-only location of a result, always stored with
//! the origin at the top, together with the page height needed to convert it.
//!
//! The area filter ([`BoundingBox::is_included_in`] and
//! [`BoundingBox::is_included_in_any`]) decides whether a result lies inside
//! (or, in overlap mode, touches) one of the caller's rectangles.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A rectangular search area on a page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Area {
    /// Left edge
    pub x_left: f32,
    /// Top edge, in the convention given by `y_from_bottom`
    pub y_top: f32,
    /// Right edge
    pub x_right: f32,
    /// Bottom edge, in the convention given by `y_from_bottom`
    pub y_bottom: f32,
    /// Restrict the area to one page (1-based). `None` or `Some(0)` means every page.
    #[serde(default)]
    pub page: Option<u32>,
    /// Whether the y values are measured from the bottom of the page
    #[serde(default)]
    pub y_from_bottom: bool,
}

impl Area {
    /// Create an area measured from the top of the page, valid on every page.
    pub fn new(x_left: f32, y_top: f32, x_right: f32, y_bottom: f32) -> Self {
        Self {
            x_left,
            y_top,
            x_right,
            y_bottom,
            page: None,
            y_from_bottom: false,
        }
    }

    /// Restrict the area to a single page.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Declare the y values as measured from the bottom of the page.
    pub fn with_y_from_bottom(mut self, value: bool) -> Self {
        self.y_from_bottom = value;
        self
    }

    /// Whether this area applies to the given page.
    pub fn applies_to_page(&self, page: u32) -> bool {
        match self.page {
            None | Some(0) => true,
            Some(p) => p == page,
        }
    }

    /// Top edge measured from the top of the page.
    pub fn y_top_from_top(&self, page_height: f32) -> f32 {
        if self.y_from_bottom {
            page_height - self.y_top
        } else {
            self.y_top
        }
    }

    /// Bottom edge measured from the top of the page.
    pub fn y_bottom_from_top(&self, page_height: f32) -> f32 {
        if self.y_from_bottom {
            page_height - self.y_bottom
        } else {
            self.y_bottom
        }
    }

    /// Top edge measured from the bottom of the page.
    pub fn y_top_from_bottom(&self, page_height: f32) -> f32 {
        if self.y_from_bottom {
            self.y_top
        } else {
            page_height - self.y_top
        }
    }

    /// Bottom edge measured from the bottom of the page.
    pub fn y_bottom_from_bottom(&self, page_height: f32) -> f32 {
        if self.y_from_bottom {
            self.y_bottom
        } else {
            page_height - self.y_bottom
        }
    }

    /// Copy of this area expressed with the origin at the top of the page.
    pub fn to_top_origin(&self, page_height: f32) -> Area {
        Area {
            y_top: self.y_top_from_top(page_height),
            y_bottom: self.y_bottom_from_top(page_height),
            y_from_bottom: false,
            ..*self
        }
    }

    /// Copy of this area expressed with the origin at the bottom of the page.
    pub fn to_bottom_origin(&self, page_height: f32) -> Area {
        Area {
            y_top: self.y_top_from_bottom(page_height),
            y_bottom: self.y_bottom_from_bottom(page_height),
            y_from_bottom: true,
            ..*self
        }
    }
}

/// Location of a result on a page, with the vertical origin at the top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Page number (1-based)
    pub page: u32,
    /// Height of the page, used to convert between vertical conventions
    pub page_height: f32,
    /// Left edge
    pub x_left: f32,
    /// Top edge (distance from the top of the page)
    pub y_top: f32,
    /// Right edge
    pub x_right: f32,
    /// Bottom edge (distance from the top of the page)
    pub y_bottom: f32,
}

impl BoundingBox {
    /// Create a bounding box from top-origin coordinates.
    pub fn new(page: u32, page_height: f32, x_left: f32, y_top: f32, x_right: f32, y_bottom: f32) -> Self {
        Self {
            page,
            page_height,
            x_left,
            y_top,
            x_right,
            y_bottom,
        }
    }

    /// Create a bounding box from two document-space corners (y grows upward).
    ///
    /// `top_left` is typically the ascent-line start of the first glyph and
    /// `bottom_right` the descent-line end of the last one.
    pub fn from_corners(page: u32, page_height: f32, top_left: Point, bottom_right: Point) -> Self {
        Self::new(
            page,
            page_height,
            top_left.x,
            page_height - top_left.y,
            bottom_right.x,
            page_height - bottom_right.y,
        )
    }

    /// Horizontal center.
    pub fn x_center(&self) -> f32 {
        self.x_left + (self.x_right - self.x_left) / 2.0
    }

    /// Vertical center, measured from the top.
    pub fn y_center(&self) -> f32 {
        self.y_top + (self.y_bottom - self.y_top) / 2.0
    }

    /// Top edge measured from the bottom of the page.
    pub fn y_top_from_bottom(&self) -> f32 {
        self.page_height - self.y_top
    }

    /// Bottom edge measured from the bottom of the page.
    pub fn y_bottom_from_bottom(&self) -> f32 {
        self.page_height - self.y_bottom
    }

    /// Vertical center, measured from the bottom.
    pub fn y_center_from_bottom(&self) -> f32 {
        self.page_height - self.y_center()
    }

    /// Width of the box.
    pub fn width(&self) -> f32 {
        self.x_right - self.x_left
    }

    /// Height of the box.
    pub fn height(&self) -> f32 {
        self.y_bottom - self.y_top
    }

    /// A box whose top is not strictly above its bottom.
    ///
    /// Such boxes come from hidden or zero-area text runs and are dropped
    /// from results.
    pub fn is_degenerate(&self) -> bool {
        // NaN coordinates also land here
        !(self.y_top < self.y_bottom)
    }

    /// Convert to an [`Area`] restricted to this box's page.
    pub fn to_area(&self, y_from_bottom: bool) -> Area {
        if y_from_bottom {
            Area {
                x_left: self.x_left,
                y_top: self.y_top_from_bottom(),
                x_right: self.x_right,
                y_bottom: self.y_bottom_from_bottom(),
                page: Some(self.page),
                y_from_bottom: true,
            }
        } else {
            Area {
                x_left: self.x_left,
                y_top: self.y_top,
                x_right: self.x_right,
                y_bottom: self.y_bottom,
                page: Some(self.page),
                y_from_bottom: false,
            }
        }
    }

    /// Whether this box lies in `area`.
    ///
    /// Without `accept_overlap` the area must enclose the box on both axes.
    /// With it, the box only has to touch the area: one of its vertical edges
    /// must fall within the area's horizontal span and one of its horizontal
    /// edges within the area's vertical span.
    pub fn is_included_in(&self, area: &Area, accept_overlap: bool) -> bool {
        if !area.applies_to_page(self.page) {
            return false;
        }

        let area_top = area.y_top_from_top(self.page_height);
        let area_bottom = area.y_bottom_from_top(self.page_height);

        if !accept_overlap {
            return area.x_left <= self.x_left
                && area.x_right >= self.x_right
                && area_top <= self.y_top
                && area_bottom >= self.y_bottom;
        }

        let within_x = |x: f32| area.x_left <= x && area.x_right >= x;
        let within_y = |y: f32| area_top <= y && area_bottom >= y;

        (within_x(self.x_left) || within_x(self.x_right))
            && (within_y(self.y_top) || within_y(self.y_bottom))
    }

    /// Whether this box lies in at least one of `areas`.
    ///
    /// `None` or an empty slice means no restriction.
    pub fn is_included_in_any(&self, areas: Option<&[Area]>, accept_overlap: bool) -> bool {
        match areas {
            None => true,
            Some([]) => true,
            Some(areas) => areas
                .iter()
                .any(|area| self.is_included_in(area, accept_overlap)),
        }
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pg{} {};{};{};{}",
            self.page, self.x_left, self.y_top, self.x_right, self.y_bottom
        )
    }
}
