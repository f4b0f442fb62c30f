//! Integer rectangles for region extraction.
//!
//! Coordinates follow the usual image convention: origin at the top-left,
//! X to the right, Y downward. Rectangles are half-open, so `right()` and
//! `bottom()` name the first column and row *outside* the region.
//!
//! ```rust
//! use linimg_core::Rect;
//!
//! let rect = Rect::from_edges(1, 2, 4, 6).unwrap();
//! assert_eq!((rect.width, rect.height), (3, 4));
//! assert!(rect.fits_within(4, 6));
//! assert!(!rect.fits_within(3, 6));
//! ```

use crate::{Error, Result};

/// A rectangle defined by origin (x, y) and dimensions (width, height).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// X coordinate of the left edge (inclusive)
    pub x: u32,
    /// Y coordinate of the top edge (inclusive)
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Rect {
    /// Creates a new rectangle with the given origin and dimensions.
    #[inline]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle at the origin covering `width x height`.
    #[inline]
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Creates the half-open rectangle `[left, right) x [top, bottom)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRegion`] if `right < left` or `bottom < top`.
    pub fn from_edges(left: u32, top: u32, right: u32, bottom: u32) -> Result<Self> {
        if right < left || bottom < top {
            return Err(Error::InvalidRegion {
                left,
                top,
                right,
                bottom,
            });
        }
        Ok(Self::new(left, top, right - left, bottom - top))
    }

    /// Right edge (exclusive), widened so it cannot overflow.
    #[inline]
    pub const fn right(&self) -> u64 {
        self.x as u64 + self.width as u64
    }

    /// Bottom edge (exclusive), widened so it cannot overflow.
    #[inline]
    pub const fn bottom(&self) -> u64 {
        self.y as u64 + self.height as u64
    }

    /// Returns the area of the rectangle in pixels.
    #[inline]
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Returns `true` if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns `true` if the point (px, py) is inside this rectangle.
    #[inline]
    pub const fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x
            && (px as u64) < self.right()
            && py >= self.y
            && (py as u64) < self.bottom()
    }

    /// Returns `true` if the rectangle lies inside a `width x height` extent.
    #[inline]
    pub const fn fits_within(&self, width: u32, height: u32) -> bool {
        self.right() <= width as u64 && self.bottom() <= height as u64
    }
}
