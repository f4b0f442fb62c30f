//! # linimg-core
//!
//! Core types for planar floating-point image processing.
//!
//! This crate provides the value type every other linimg crate operates on:
//!
//! - [`Image`] - Shared, fixed-shape, channel-interleaved `f32` buffer
//! - [`ImageView`] - Borrowed, read-only view over an external `f32` buffer
//! - [`SinglePixel`] - One sampled point, independent of any image storage
//! - [`Rect`] - Integer regions for cropping
//!
//! ## Memory Layout
//!
//! Samples are stored row-major, pixels left to right, channels of a pixel
//! contiguous. Channel `c` of pixel `(x, y)` lives at flat index
//! `(y * width + x) * channels + c`. Every operation in `linimg-ops` relies
//! on this and preserves it.
//!
//! ```text
//! Memory: [c0 c1 c2 | c0 c1 c2 | ...]  <- row 0
//!         [c0 c1 c2 | c0 c1 c2 | ...]  <- row 1
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! linimg-core (this crate)
//!    ^
//!    +-- linimg-ops (transpose, stacking, channels, crop, compare, codec)
//!    +-- linimg-tests (fixtures, golden harness)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod image;
pub mod pixel;
pub mod rect;

pub use error::*;
pub use image::*;
pub use pixel::SinglePixel;
pub use rect::Rect;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use linimg_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::image::{Image, ImageView};
    pub use crate::pixel::SinglePixel;
    pub use crate::rect::Rect;
}
