//! Vector-to-color remapping for normal maps and similar vector fields.

use crate::{OpsError, OpsResult};
use linimg_core::Image;
use tracing::trace;

/// Remaps 3-component vectors in [-1, 1] to colors in [0, 1].
///
/// Each sample `v` becomes `0.5 * (v + 1)`. Values outside [-1, 1] are
/// not clamped.
///
/// # Errors
///
/// Returns [`OpsError::ChannelCount`] unless the image has exactly 3 channels.
///
/// # Example
///
/// ```rust
/// use linimg_core::Image;
/// use linimg_ops::vectors::vectors_to_colors;
///
/// let up = Image::from_data(1, 1, 3, vec![0.0, 0.0, 1.0]).unwrap();
/// let color = vectors_to_colors(&up).unwrap();
/// assert_eq!(color.pixel(0, 0), &[0.5, 0.5, 1.0]);
/// ```
pub fn vectors_to_colors(image: &Image) -> OpsResult<Image> {
    let (width, height, channels) = image.shape();
    if channels != 3 {
        return Err(OpsError::ChannelCount {
            op: "vectors_to_colors",
            expected: 3,
            got: channels,
        });
    }
    trace!(width, height, "vectors_to_colors");

    let dst = image.data().iter().map(|v| 0.5 * (v + 1.0)).collect();
    Ok(Image::from_data(width, height, 3, dst)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remap_extremes() {
        let img = Image::from_data(2, 1, 3, vec![-1.0, 0.0, 1.0, 1.0, -1.0, 0.0]).unwrap();
        let out = vectors_to_colors(&img).unwrap();
        assert_eq!(out.shape(), (2, 1, 3));
        assert_eq!(out.data(), &[0.0, 0.5, 1.0, 1.0, 0.0, 0.5]);
    }

    #[test]
    fn test_remap_rejects_other_channel_counts() {
        for channels in [1, 2, 4] {
            let img = Image::new(1, 1, channels);
            assert_eq!(
                vectors_to_colors(&img).unwrap_err(),
                OpsError::ChannelCount {
                    op: "vectors_to_colors",
                    expected: 3,
                    got: channels,
                }
            );
        }
    }

    #[test]
    fn test_remap_leaves_input_untouched() {
        let img = Image::filled(2, 2, &[0.5, -0.5, 0.0]);
        let out = vectors_to_colors(&img).unwrap();
        assert_eq!(img.pixel(1, 1), &[0.5, -0.5, 0.0]);
        assert_eq!(out.pixel(1, 1), &[0.75, 0.25, 0.5]);
    }
}
