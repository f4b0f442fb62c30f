//! Synthetic input images.
//!
//! - [`image_from_ascii`] - Tiny single-channel images from digit patterns
//! - [`normal_map`] - Hemisphere-in-a-plane surface normals
//! - [`depth_map`] - Matching hit depths
//!
//! The hemisphere comes from casting one ray per pixel along -Z from the
//! plane `z = 1` into a sphere centred at `(0.5, 0.5, 0)`. Pixel centres map
//! to `x = (col + 0.5) / size` and `y = 1 - (row + 0.5) / size`, so row 0 is
//! the top of the unit square.

use glam::Vec3;
use linimg_core::Image;
use linimg_ops::{OpsError, OpsResult};

/// Sphere used by [`normal_map`] and [`depth_map`].
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    /// Centre point
    pub center: Vec3,
    /// Squared radius
    pub radius2: f32,
}

impl Sphere {
    /// Sphere used by both map generators.
    pub const HEMISPHERE: Sphere = Sphere {
        center: Vec3::new(0.5, 0.5, 0.0),
        radius2: 0.15,
    };

    /// Distance along the ray to the nearest non-negative hit.
    pub fn intersect(&self, orig: Vec3, dir: Vec3) -> Option<f32> {
        let l = orig - self.center;
        let a = dir.dot(dir);
        let b = 2.0 * dir.dot(l);
        let c = l.dot(l) - self.radius2;
        let (t0, t1) = solve_quadratic(a, b, c)?;
        if t0 >= 0.0 {
            Some(t0)
        } else if t1 >= 0.0 {
            Some(t1)
        } else {
            None
        }
    }
}

/// Real roots of `a*x^2 + b*x + c`, smallest first.
fn solve_quadratic(a: f32, b: f32, c: f32) -> Option<(f32, f32)> {
    let discr = b * b - 4.0 * a * c;
    if discr < 0.0 {
        return None;
    }
    if discr == 0.0 {
        let x = -0.5 * b / a;
        return Some((x, x));
    }
    // Avoids cancellation when b is close to sqrt(discr).
    let q = if b > 0.0 {
        -0.5 * (b + discr.sqrt())
    } else {
        -0.5 * (b - discr.sqrt())
    };
    let (x0, x1) = (q / a, c / q);
    Some(if x0 <= x1 { (x0, x1) } else { (x1, x0) })
}

/// Builds a single-channel image from a whitespace-separated digit pattern.
///
/// Each token is one row; each character `'0'..='9'` becomes its digit
/// value. `"000 010 000"` is a 3x3 image with a single 1.0 in the middle.
///
/// # Errors
///
/// - [`OpsError::InvalidParameter`] for a character that is not a digit
/// - [`OpsError::ShapeMismatch`] if rows have different lengths
pub fn image_from_ascii(pattern: &str) -> OpsResult<Image> {
    const OP: &str = "image_from_ascii";

    let rows: Vec<&str> = pattern.split_whitespace().collect();
    let width = rows.first().map_or(0, |row| row.chars().count());
    let width = u32::try_from(width)
        .map_err(|_| OpsError::InvalidParameter(format!("{OP}: row too long")))?;
    let height = u32::try_from(rows.len())
        .map_err(|_| OpsError::InvalidParameter(format!("{OP}: too many rows")))?;

    let mut data = Vec::with_capacity(width as usize * rows.len());
    for row in &rows {
        let len = row.chars().count() as u32;
        if len != width {
            return Err(OpsError::ShapeMismatch {
                op: OP,
                axis: "width",
                expected: width,
                got: len,
            });
        }
        for ch in row.chars() {
            let digit = ch.to_digit(10).ok_or_else(|| {
                OpsError::InvalidParameter(format!("{OP}: '{ch}' is not a digit"))
            })?;
            data.push(digit as f32);
        }
    }

    Ok(Image::from_data(width, height, 1, data)?)
}

/// Ray origin for pixel `n` of a `size x size` grid.
fn pixel_ray(n: u32, size: u32) -> Vec3 {
    let inv = 1.0 / size as f32;
    let (row, col) = (n / size, n % size);
    Vec3::new(
        (col as f32 + 0.5) * inv,
        1.0 - (row as f32 + 0.5) * inv,
        1.0,
    )
}

/// `size x size` three-channel map of unit surface normals.
///
/// Pixels that miss the sphere get the plane normal `(0, 0, 1)`.
pub fn normal_map(size: u32) -> Image {
    let sphere = Sphere::HEMISPHERE;
    let mut image = Image::new(size, size, 3);
    let dst = image.data_mut();

    for n in 0..size * size {
        let orig = pixel_ray(n, size);
        let normal = match sphere.intersect(orig, Vec3::NEG_Z) {
            Some(t) => (orig + t * Vec3::NEG_Z - sphere.center).normalize(),
            None => Vec3::Z,
        };
        let i = n as usize * 3;
        dst[i..i + 3].copy_from_slice(&normal.to_array());
    }

    image
}

/// `size x size` single-channel map of hit depths (the `z` of the hit).
///
/// Pixels that miss the sphere lie on the plane at depth 1.
pub fn depth_map(size: u32) -> Image {
    let sphere = Sphere::HEMISPHERE;
    let mut image = Image::new(size, size, 1);

    for (n, depth) in image.data_mut().iter_mut().enumerate() {
        let orig = pixel_ray(n as u32, size);
        *depth = sphere
            .intersect(orig, Vec3::NEG_Z)
            .map_or(1.0, |t| (orig + t * Vec3::NEG_Z).z);
    }

    image
}
