//! Approximate comparison and normalized difference maps.
//!
//! # Comparison
//!
//! [`compare`] walks the flattened samples of two images and reports the
//! direction of the first pair that differs by more than `epsilon`. Shape
//! disagreement is not an error here: it is reported as
//! [`Comparison::IncompatibleShapes`] so regression code can branch on it.
//!
//! ```rust
//! use linimg_core::Image;
//! use linimg_ops::compare::{compare, Comparison};
//!
//! let a = Image::from_data(2, 1, 1, vec![0.5, 0.5]).unwrap();
//! let b = Image::from_data(2, 1, 1, vec![0.5, 0.52]).unwrap();
//! assert_eq!(compare(&a, &b, 0.05), Comparison::Equal);
//! assert_eq!(compare(&a, &b, 0.001), Comparison::Less);
//! ```
//!
//! # Difference
//!
//! [`diff_images`] computes `|a - b|` per sample and rescales the observed
//! range onto [0, 1] for visual inspection.

use crate::{OpsError, OpsResult};
use linimg_core::Image;
use std::cmp::Ordering;
use tracing::{debug, trace};

/// Outcome of [`compare`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// Every sample pair is within epsilon.
    Equal,
    /// The first differing sample of `a` is smaller.
    Less,
    /// The first differing sample of `a` is larger.
    Greater,
    /// Width, height or channel count differ.
    IncompatibleShapes,
}

impl Comparison {
    /// Returns `true` for [`Comparison::Equal`].
    #[inline]
    pub fn is_equal(self) -> bool {
        self == Comparison::Equal
    }

    /// Converts to an [`Ordering`], or `None` for incompatible shapes.
    pub fn ordering(self) -> Option<Ordering> {
        match self {
            Comparison::Equal => Some(Ordering::Equal),
            Comparison::Less => Some(Ordering::Less),
            Comparison::Greater => Some(Ordering::Greater),
            Comparison::IncompatibleShapes => None,
        }
    }
}

/// Absolute sample difference; equal samples (matching infinities
/// included) differ by exactly 0.
#[inline]
fn sample_delta(x: f32, y: f32) -> f32 {
    if x == y { 0.0 } else { (x - y).abs() }
}

#[inline]
fn equivalent(x: f32, y: f32, epsilon: f32) -> bool {
    sample_delta(x, y) <= epsilon
}

/// Compares two images sample by sample with tolerance `epsilon`.
///
/// Two samples are equivalent when they are equal (so `inf` matches `inf`)
/// or `|a - b| <= epsilon`. NaN is never equivalent to anything; its
/// direction follows [`f32::total_cmp`].
pub fn compare(a: &Image, b: &Image, epsilon: f32) -> Comparison {
    if a.shape() != b.shape() {
        return Comparison::IncompatibleShapes;
    }

    let first_diff = a
        .data()
        .iter()
        .zip(b.data())
        .find(|(x, y)| !equivalent(**x, **y, epsilon));

    match first_diff {
        None => Comparison::Equal,
        Some((x, y)) => match x.total_cmp(y) {
            Ordering::Less => Comparison::Less,
            // Only NaN reaches here with identical bits.
            Ordering::Equal | Ordering::Greater => Comparison::Greater,
        },
    }
}

/// Absolute difference of two images, normalized so the smallest observed
/// delta maps to 0 and the largest to 1.
///
/// Each output sample is `(|a - b| - min) * scale` where `scale` is
/// `1 / (max - min)`, or `1` when every delta is the same (a self-diff is
/// all zeros, infinite samples included). A pair with exactly one infinite
/// sample gives an infinite delta, which turns finite deltas into zeros and
/// itself into NaN.
///
/// # Errors
///
/// - [`OpsError::ShapeMismatch`] if widths or heights differ
/// - [`OpsError::ChannelMismatch`] if channel counts differ
pub fn diff_images(a: &Image, b: &Image) -> OpsResult<Image> {
    const OP: &str = "diff_images";

    let (width, height, channels) = a.shape();
    if b.width() != width {
        return Err(OpsError::ShapeMismatch {
            op: OP,
            axis: "width",
            expected: width,
            got: b.width(),
        });
    }
    if b.height() != height {
        return Err(OpsError::ShapeMismatch {
            op: OP,
            axis: "height",
            expected: height,
            got: b.height(),
        });
    }
    if b.channels() != channels {
        return Err(OpsError::ChannelMismatch {
            op: OP,
            expected: channels,
            got: b.channels(),
        });
    }
    trace!(width, height, channels, "diff_images");

    let mut largest = 0.0f32;
    let mut smallest = f32::MAX;
    let mut dst: Vec<f32> = a
        .data()
        .iter()
        .zip(b.data())
        .map(|(x, y)| {
            let delta = sample_delta(*x, *y);
            largest = largest.max(delta);
            smallest = smallest.min(delta);
            delta
        })
        .collect();

    let scale = if largest == smallest {
        1.0
    } else {
        1.0 / (largest - smallest)
    };
    debug!(smallest, largest, scale, "diff_images range");

    for v in &mut dst {
        *v = (*v - smallest) * scale;
    }

    Ok(Image::from_data(width, height, channels, dst)?)
}
