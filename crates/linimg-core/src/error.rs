//! Error types for linimg-core.
//!
//! Construction of images and views validates shape against the backing
//! buffer. Those checks report through [`Error`].
//!
//! # Usage
//!
//! ```rust
//! use linimg_core::{Error, Image};
//!
//! let err = Image::from_data(2, 2, 1, vec![0.0; 3]).unwrap_err();
//! assert!(matches!(err, Error::BufferSize { .. }));
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while constructing or addressing images.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An image must carry at least one channel.
    #[error("invalid channel count {channels}: images need at least one channel")]
    InvalidChannels {
        /// Requested channel count
        channels: u32,
    },

    /// Backing buffer length does not match `width * height * channels`.
    #[error("buffer holds {got} samples, {width}x{height}x{channels} needs {expected}")]
    BufferSize {
        /// Image width
        width: u32,
        /// Image height
        height: u32,
        /// Channel count
        channels: u32,
        /// Required sample count
        expected: usize,
        /// Provided sample count
        got: usize,
    },

    /// Region edges are inverted.
    ///
    /// Returned by [`crate::Rect::from_edges`] when `right < left` or
    /// `bottom < top`.
    #[error("invalid region: left {left}, top {top}, right {right}, bottom {bottom}")]
    InvalidRegion {
        /// Left edge (inclusive)
        left: u32,
        /// Top edge (inclusive)
        top: u32,
        /// Right edge (exclusive)
        right: u32,
        /// Bottom edge (exclusive)
        bottom: u32,
    },

    /// Pixel coordinates are outside image bounds.
    #[error("pixel ({x}, {y}) out of bounds for image {width}x{height}")]
    OutOfBounds {
        /// X coordinate that was out of bounds
        x: u32,
        /// Y coordinate that was out of bounds
        y: u32,
        /// Image width
        width: u32,
        /// Image height
        height: u32,
    },
}

impl Error {
    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. } | Self::InvalidRegion { .. })
    }
}
