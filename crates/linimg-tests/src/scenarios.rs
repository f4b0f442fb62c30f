//! Regression scenes built from fixtures and structural operations.
//!
//! Each scene exercises a different mix of operations and ends in a single
//! 1- or 3-channel atlas suitable for the golden store:
//!
//! | Scene     | Operations                                         |
//! |-----------|----------------------------------------------------|
//! | `grays`   | ascii fixtures, transpose, crop, hstack            |
//! | `colors`  | combine_channels, transpose, diff, hstack, vstack  |
//! | `normals` | normal_map, vectors_to_colors, transpose, diff     |
//! | `depths`  | depth_map, crop, transpose, diff                   |

use crate::fixtures::{depth_map, image_from_ascii, normal_map};
use linimg_core::Image;
use linimg_ops::{
    OpsResult, combine_channels, crop_region, diff_images, hstack, transpose, vectors_to_colors,
    vstack,
};
use tracing::debug;

/// Edge length of the generated normal and depth maps.
pub const DEFAULT_MAP_SIZE: u32 = 64;

/// A named regression image.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    /// Key in the golden store
    pub name: &'static str,
    /// Rendered atlas
    pub image: Image,
}

/// Single-channel scene: a 3x3 impulse and its transpose beside a transposed
/// digit block and a crop of a larger ramp.
pub fn grays() -> OpsResult<Image> {
    let tiny = image_from_ascii("000 010 000")?;
    let src = transpose(&image_from_ascii("012 345 678")?);
    let ramp = image_from_ascii("0123 4567 8901 2345")?;
    let corner = crop_region(&ramp, 1, 1, 4, 4)?;
    hstack(&[tiny.clone(), transpose(&tiny), src, corner])
}

/// Three-channel scene: a red-to-green gradient row over a 5x5 pattern, its
/// transpose and their normalized difference.
pub fn colors() -> OpsResult<Image> {
    let gradient = combine_channels(&[
        image_from_ascii("10")?,
        image_from_ascii("01")?,
        image_from_ascii("00")?,
    ])?;
    let pattern = combine_channels(&[
        image_from_ascii("00000 02020 00100 02020 00000")?,
        image_from_ascii("00000 00000 00100 00000 00000")?,
        image_from_ascii("11111 10001 10101 10001 11111")?,
    ])?;
    let flipped = transpose(&pattern);
    let diff = diff_images(&pattern, &flipped)?;

    let repeated: Vec<Image> = std::iter::repeat_n(gradient, 5).collect();
    let top = hstack(&repeated)?;
    let middle = hstack(&[pattern.clone(), flipped])?;
    let bottom = hstack(&[diff, pattern])?;
    vstack(&[top, middle, bottom])
}

/// Three-channel scene: hemisphere normals as colors, the colors of the
/// transposed normals and their difference.
pub fn normals(size: u32) -> OpsResult<Image> {
    let normals = normal_map(size);
    let direct = vectors_to_colors(&normals)?;
    let swapped = vectors_to_colors(&transpose(&normals))?;
    let diff = diff_images(&direct, &swapped)?;
    hstack(&[direct, swapped, diff])
}

/// Single-channel scene: hemisphere depths, the top half stacked over the
/// bottom half, and the difference against the transpose.
pub fn depths(size: u32) -> OpsResult<Image> {
    let depths = depth_map(size);
    let half = size / 2;
    let halves = vstack(&[
        crop_region(&depths, 0, 0, size, half)?,
        crop_region(&depths, 0, half, size, size)?,
    ])?;
    let diff = diff_images(&depths, &transpose(&depths))?;
    hstack(&[depths, halves, diff])
}

/// Every scene, in a fixed order.
pub fn all(size: u32) -> OpsResult<Vec<Scenario>> {
    let scenes = vec![
        Scenario {
            name: "grays",
            image: grays()?,
        },
        Scenario {
            name: "colors",
            image: colors()?,
        },
        Scenario {
            name: "normals",
            image: normals(size)?,
        },
        Scenario {
            name: "depths",
            image: depths(size)?,
        },
    ];
    for scene in &scenes {
        let (width, height, channels) = scene.image.shape();
        debug!(name = scene.name, width, height, channels, "built scenario");
    }
    Ok(scenes)
}
