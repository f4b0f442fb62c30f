//! Concatenation of images along one spatial axis.
//!
//! - [`hstack`] - Side by side, left to right
//! - [`vstack`] - Top to bottom
//!
//! Both take the inputs in order; the first image ends up left-most or
//! top-most.
//!
//! # Example
//!
//! ```rust
//! use linimg_core::Image;
//! use linimg_ops::stack::{hstack, vstack};
//!
//! let a = Image::from_data(1, 1, 1, vec![0.2]).unwrap();
//! let b = Image::from_data(1, 1, 1, vec![0.8]).unwrap();
//!
//! let wide = hstack(&[a.clone(), b.clone()]).unwrap();
//! assert_eq!(wide.shape(), (2, 1, 1));
//!
//! let tall = vstack(&[a, b]).unwrap();
//! assert_eq!(tall.shape(), (1, 2, 1));
//! ```

use crate::transform::transpose;
use crate::{OpsError, OpsResult};
use linimg_core::Image;
use tracing::{debug, trace};

/// Validates a stack and returns `(shared extent, channels, summed extent)`.
///
/// `shared` picks the extent that must match, `summed` the one that grows.
fn stack_shape(
    op: &'static str,
    images: &[Image],
    shared_axis: &'static str,
    shared: fn(&Image) -> u32,
    summed: fn(&Image) -> u32,
) -> OpsResult<(u32, u32, u32)> {
    let first = images.first().ok_or(OpsError::EmptyInput { op })?;
    let extent = shared(first);
    let channels = first.channels();
    let mut total = 0u32;

    for img in images {
        if shared(img) != extent {
            return Err(OpsError::ShapeMismatch {
                op,
                axis: shared_axis,
                expected: extent,
                got: shared(img),
            });
        }
        if img.channels() != channels {
            return Err(OpsError::ChannelMismatch {
                op,
                expected: channels,
                got: img.channels(),
            });
        }
        total = total.checked_add(summed(img)).ok_or_else(|| {
            OpsError::InvalidParameter(format!("{op}: stacked extent overflows u32"))
        })?;
    }

    Ok((extent, channels, total))
}

/// Concatenates images left to right.
///
/// All inputs must share height and channel count. The output width is the
/// sum of the input widths. Each output row is assembled from one contiguous
/// row copy per input.
///
/// # Errors
///
/// - [`OpsError::EmptyInput`] for an empty slice
/// - [`OpsError::ShapeMismatch`] if heights differ
/// - [`OpsError::ChannelMismatch`] if channel counts differ
pub fn hstack(images: &[Image]) -> OpsResult<Image> {
    let (height, channels, width) =
        stack_shape("hstack", images, "height", Image::height, Image::width)?;
    trace!(count = images.len(), width, height, channels, "hstack");

    let mut dst = Vec::with_capacity(width as usize * height as usize * channels as usize);
    for y in 0..height {
        for img in images.iter().filter(|img| img.width() > 0) {
            dst.extend_from_slice(img.row(y));
        }
    }

    Ok(Image::from_data(width, height, channels, dst)?)
}

/// Concatenates images top to bottom.
///
/// All inputs must share width and channel count. Computed as
/// `transpose(hstack(transpose(each)))`, reusing the row-copy path instead
/// of copying column runs out of row-major storage.
///
/// # Errors
///
/// - [`OpsError::EmptyInput`] for an empty slice
/// - [`OpsError::ShapeMismatch`] if widths differ
/// - [`OpsError::ChannelMismatch`] if channel counts differ
pub fn vstack(images: &[Image]) -> OpsResult<Image> {
    // Validate up front so errors name the caller's axis, not the transposed one.
    let (width, channels, height) =
        stack_shape("vstack", images, "width", Image::width, Image::height)?;
    debug!(count = images.len(), width, height, channels, "vstack via transpose");

    let flipped: Vec<Image> = images.iter().map(transpose).collect();
    let stacked = hstack(&flipped)?;
    Ok(transpose(&stacked))
}
