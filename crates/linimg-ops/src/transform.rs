//! Geometric data movement: transpose and region crop.
//!
//! # Operations
//!
//! - [`transpose`] - Swap axes by moving samples
//! - [`crop_region`] - Extract `[left, right) x [top, bottom)`
//! - [`crop`] - Same, taking a [`Rect`]
//!
//! # Example
//!
//! ```rust
//! use linimg_core::Image;
//! use linimg_ops::transform::{crop_region, transpose};
//!
//! let img = Image::from_data(3, 2, 1, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
//! let t = transpose(&img);
//! assert_eq!(t.shape(), (2, 3, 1));
//! assert_eq!(t.data(), &[0.0, 3.0, 1.0, 4.0, 2.0, 5.0]);
//!
//! let right_column = crop_region(&img, 2, 0, 3, 2).unwrap();
//! assert_eq!(right_column.data(), &[2.0, 5.0]);
//! ```

use crate::{OpsError, OpsResult};
use linimg_core::{Image, Rect};
use tracing::trace;

/// Transposes an image, producing shape `(height, width, channels)`.
///
/// Pixel (x, y) of the input becomes pixel (y, x) of the output. Samples are
/// physically moved rather than flagged, so downstream row-wise passes see a
/// plain row-major buffer. The result never shares storage with the input,
/// square images included.
pub fn transpose(image: &Image) -> Image {
    let (width, height, channels) = image.shape();
    trace!(width, height, channels, "transpose");

    let w = width as usize;
    let h = height as usize;
    let c = channels as usize;
    let mut result = Image::new(height, width, channels);
    let dst = result.data_mut();

    for (n, src_px) in image.data().chunks_exact(c).enumerate() {
        let row = n / w;
        let col = n % w;
        let dst_idx = c * (h * col + row);
        dst[dst_idx..dst_idx + c].copy_from_slice(src_px);
    }

    result
}

/// Extracts the half-open region `[left, right) x [top, bottom)`.
///
/// Output shape is `(right - left, bottom - top, channels)`. Rows are copied
/// as contiguous runs from the source.
///
/// # Errors
///
/// - [`OpsError::Core`] wrapping `InvalidRegion` if `right < left` or
///   `bottom < top`
/// - [`OpsError::Region`] if the rectangle extends past the source
pub fn crop_region(
    image: &Image,
    left: u32,
    top: u32,
    right: u32,
    bottom: u32,
) -> OpsResult<Image> {
    let region = Rect::from_edges(left, top, right, bottom)?;
    crop(image, region)
}

/// Extracts `region` from the image.
///
/// # Errors
///
/// Returns [`OpsError::Region`] if the region does not fit in the image.
pub fn crop(image: &Image, region: Rect) -> OpsResult<Image> {
    let (src_w, src_h, channels) = image.shape();
    trace!(
        x = region.x,
        y = region.y,
        width = region.width,
        height = region.height,
        src_w,
        src_h,
        "crop"
    );

    if !region.fits_within(src_w, src_h) {
        return Err(OpsError::Region {
            x: region.x,
            y: region.y,
            width: region.width,
            height: region.height,
            src_width: src_w,
            src_height: src_h,
        });
    }

    let c = channels as usize;
    let row_len = region.width as usize * c;
    let mut dst = Vec::with_capacity(row_len * region.height as usize);

    if row_len > 0 {
        for y in region.y..region.y + region.height {
            let src = image.samples_from(region.x, y);
            dst.extend_from_slice(&src[..row_len]);
        }
    }

    Ok(Image::from_data(region.width, region.height, channels, dst)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(width: u32, height: u32, channels: u32) -> Image {
        let n = width * height * channels;
        Image::from_data(width, height, channels, (0..n).map(|v| v as f32).collect()).unwrap()
    }

    #[test]
    fn test_transpose_single_channel() {
        // 3 columns, 2 rows: [0 1 2; 3 4 5]
        let src = ramp(3, 2, 1);
        let dst = transpose(&src);
        assert_eq!(dst.shape(), (2, 3, 1));
        assert_eq!(dst.data(), &[0.0, 3.0, 1.0, 4.0, 2.0, 5.0]);
    }

    #[test]
    fn test_transpose_keeps_channel_blocks() {
        let src = ramp(2, 1, 3);
        let dst = transpose(&src);
        assert_eq!(dst.shape(), (1, 2, 3));
        assert_eq!(dst.pixel(0, 0), &[0.0, 1.0, 2.0]);
        assert_eq!(dst.pixel(0, 1), &[3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_transpose_pixel_mapping() {
        let src = ramp(5, 3, 2);
        let dst = transpose(&src);
        for y in 0..3 {
            for x in 0..5 {
                assert_eq!(src.pixel(x, y), dst.pixel(y, x));
            }
        }
    }

    #[test]
    fn test_transpose_square_is_new_buffer() {
        let src = ramp(2, 2, 1);
        let dst = transpose(&src);
        assert!(!src.shares_storage(&dst));
        assert_eq!(dst.data(), &[0.0, 2.0, 1.0, 3.0]);
    }

    #[test]
    fn test_transpose_empty() {
        let src = Image::new(0, 4, 2);
        let dst = transpose(&src);
        assert_eq!(dst.shape(), (4, 0, 2));
    }

    #[test]
    fn test_crop_center() {
        let src = ramp(4, 4, 1);
        let dst = crop_region(&src, 1, 1, 3, 3).unwrap();
        assert_eq!(dst.shape(), (2, 2, 1));
        assert_eq!(dst.data(), &[5.0, 6.0, 9.0, 10.0]);
    }

    #[test]
    fn test_crop_multichannel_offsets() {
        let src = ramp(3, 2, 2);
        let dst = crop_region(&src, 1, 1, 3, 2).unwrap();
        assert_eq!(dst.data(), &[8.0, 9.0, 10.0, 11.0]);
    }

    #[test]
    fn test_crop_full_is_identity() {
        let src = ramp(3, 5, 3);
        let dst = crop(&src, src.bounds()).unwrap();
        assert_eq!(dst, src);
        assert!(!dst.shares_storage(&src));
    }

    #[test]
    fn test_crop_out_of_bounds() {
        let src = ramp(4, 4, 3);
        let err = crop_region(&src, 3, 3, 5, 5).unwrap_err();
        assert!(matches!(err, OpsError::Region { .. }));
    }

    #[test]
    fn test_crop_inverted_edges() {
        let src = ramp(4, 4, 1);
        let err = crop_region(&src, 3, 0, 1, 2).unwrap_err();
        assert!(matches!(
            err,
            OpsError::Core(linimg_core::Error::InvalidRegion { .. })
        ));
    }

    #[test]
    fn test_crop_empty_region() {
        let src = ramp(4, 4, 1);
        let dst = crop_region(&src, 4, 2, 4, 4).unwrap();
        assert_eq!(dst.shape(), (0, 2, 1));
    }
}
