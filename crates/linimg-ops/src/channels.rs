//! Channel combination and extraction.
//!
//! - [`combine_channels`] - Interleave N single-channel planes into one image
//! - [`extract_channel`] - Pull one channel back out as a plane
//!
//! ```rust
//! use linimg_core::Image;
//! use linimg_ops::channels::{combine_channels, extract_channel};
//!
//! let r = Image::from_data(1, 1, 1, vec![0.1]).unwrap();
//! let g = Image::from_data(1, 1, 1, vec![0.2]).unwrap();
//! let b = Image::from_data(1, 1, 1, vec![0.3]).unwrap();
//!
//! let rgb = combine_channels(&[r, g.clone(), b]).unwrap();
//! assert_eq!(rgb.pixel(0, 0), &[0.1, 0.2, 0.3]);
//! assert_eq!(extract_channel(&rgb, 1).unwrap(), g);
//! ```

use crate::{OpsError, OpsResult};
use linimg_core::Image;
use tracing::trace;

/// Merges single-channel planes into one multi-channel image.
///
/// Output channel `c` of pixel `n` is sample `n` of `planes[c]`, so channel
/// order follows input order.
///
/// # Errors
///
/// - [`OpsError::EmptyInput`] for an empty slice
/// - [`OpsError::ChannelCount`] if a plane is not single-channel
/// - [`OpsError::ShapeMismatch`] if a plane's width or height differs from
///   the first plane's
pub fn combine_channels(planes: &[Image]) -> OpsResult<Image> {
    const OP: &str = "combine_channels";

    let first = planes.first().ok_or(OpsError::EmptyInput { op: OP })?;
    let (width, height) = first.dimensions();

    for plane in planes {
        if plane.width() != width {
            return Err(OpsError::ShapeMismatch {
                op: OP,
                axis: "width",
                expected: width,
                got: plane.width(),
            });
        }
        if plane.height() != height {
            return Err(OpsError::ShapeMismatch {
                op: OP,
                axis: "height",
                expected: height,
                got: plane.height(),
            });
        }
        if plane.channels() != 1 {
            return Err(OpsError::ChannelCount {
                op: OP,
                expected: 1,
                got: plane.channels(),
            });
        }
    }

    let channels = u32::try_from(planes.len())
        .map_err(|_| OpsError::InvalidParameter(format!("{OP}: too many planes")))?;
    trace!(width, height, channels, "combine_channels");

    let mut dst = Vec::with_capacity(first.pixel_count() * planes.len());
    for n in 0..first.pixel_count() {
        dst.extend(planes.iter().map(|plane| plane.data()[n]));
    }

    Ok(Image::from_data(width, height, channels, dst)?)
}

/// Returns channel `channel` of `image` as a single-channel plane.
///
/// # Errors
///
/// Returns [`OpsError::ChannelOutOfRange`] if `channel >= image.channels()`.
pub fn extract_channel(image: &Image, channel: u32) -> OpsResult<Image> {
    let (width, height, channels) = image.shape();
    if channel >= channels {
        return Err(OpsError::ChannelOutOfRange { channel, channels });
    }
    trace!(width, height, channels, channel, "extract_channel");

    let dst: Vec<f32> = image
        .data()
        .chunks_exact(channels as usize)
        .map(|px| px[channel as usize])
        .collect();

    Ok(Image::from_data(width, height, 1, dst)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plane(width: u32, height: u32, data: &[f32]) -> Image {
        Image::from_data(width, height, 1, data.to_vec()).unwrap()
    }

    #[test]
    fn test_combine_three_pixels() {
        let r = plane(1, 1, &[0.1]);
        let g = plane(1, 1, &[0.2]);
        let b = plane(1, 1, &[0.3]);
        let out = combine_channels(&[r, g, b]).unwrap();
        assert_eq!(out.shape(), (1, 1, 3));
        assert_eq!(out.data(), &[0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_combine_interleaves_in_order() {
        let a = plane(2, 1, &[1.0, 0.0]);
        let b = plane(2, 1, &[0.0, 1.0]);
        let out = combine_channels(&[a, b]).unwrap();
        assert_eq!(out.data(), &[1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_combine_single_plane() {
        let a = plane(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(combine_channels(std::slice::from_ref(&a)).unwrap(), a);
    }

    #[test]
    fn test_combine_empty() {
        assert!(matches!(
            combine_channels(&[]).unwrap_err(),
            OpsError::EmptyInput { .. }
        ));
    }

    #[test]
    fn test_combine_rejects_multichannel_plane() {
        let a = plane(1, 1, &[0.0]);
        let b = Image::new(1, 1, 2);
        assert_eq!(
            combine_channels(&[a, b]).unwrap_err(),
            OpsError::ChannelCount {
                op: "combine_channels",
                expected: 1,
                got: 2,
            }
        );
    }

    #[test]
    fn test_combine_rejects_size_mismatch() {
        let a = plane(2, 1, &[0.0, 0.0]);
        let b = plane(1, 2, &[0.0, 0.0]);
        assert!(matches!(
            combine_channels(&[a, b]).unwrap_err(),
            OpsError::ShapeMismatch { axis: "width", .. }
        ));
    }

    #[test]
    fn test_extract_channel() {
        let img = Image::from_data(2, 1, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let g = extract_channel(&img, 1).unwrap();
        assert_eq!(g.shape(), (2, 1, 1));
        assert_eq!(g.data(), &[2.0, 5.0]);
    }

    #[test]
    fn test_extract_channel_out_of_range() {
        let img = Image::new(1, 1, 3);
        assert_eq!(
            extract_channel(&img, 3).unwrap_err(),
            OpsError::ChannelOutOfRange {
                channel: 3,
                channels: 3,
            }
        );
    }
}
