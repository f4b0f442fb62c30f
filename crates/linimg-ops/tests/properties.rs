//! Structural properties of the linimg-ops operations.
//!
//! Each property is checked over a small set of shapes, including
//! degenerate ones, rather than a single hand-picked image.

use approx::assert_relative_eq;
use linimg_core::Image;
use linimg_ops::{
    Comparison, OpsError, combine_channels, compare, crop_region, diff_images, extract_channel,
    hstack, transpose, vstack,
};

/// Deterministic image whose samples encode their own flat index.
fn ramp(width: u32, height: u32, channels: u32) -> Image {
    let n = (width * height * channels) as usize;
    let data = (0..n).map(|i| i as f32 * 0.25 - 3.0).collect();
    Image::from_data(width, height, channels, data).unwrap()
}

const SHAPES: &[(u32, u32, u32)] = &[
    (1, 1, 1),
    (3, 2, 1),
    (2, 3, 3),
    (5, 1, 4),
    (1, 7, 2),
    (4, 4, 3),
    (0, 3, 2),
    (3, 0, 1),
];

// ============================================================================
// Transpose
// ============================================================================

#[test]
fn transpose_is_an_involution() {
    for &(w, h, c) in SHAPES {
        let img = ramp(w, h, c);
        let t = transpose(&img);
        assert_eq!(t.shape(), (h, w, c));
        assert_eq!(transpose(&t), img, "shape {w}x{h}x{c}");
    }
}

#[test]
fn transpose_moves_pixels() {
    let img = ramp(4, 3, 2);
    let t = transpose(&img);
    for y in 0..3 {
        for x in 0..4 {
            assert_eq!(img.pixel(x, y), t.pixel(y, x));
        }
    }
}

#[test]
fn transpose_two_by_three() {
    let img = Image::from_data(3, 2, 1, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
    let t = transpose(&img);
    assert_eq!(t.shape(), (2, 3, 1));
    assert_eq!(t.data(), &[0.0, 3.0, 1.0, 4.0, 2.0, 5.0]);
}

// ============================================================================
// Stacking
// ============================================================================

#[test]
fn stacking_a_single_image_is_identity() {
    for &(w, h, c) in SHAPES {
        let img = ramp(w, h, c);
        assert_eq!(hstack(std::slice::from_ref(&img)).unwrap(), img);
        assert_eq!(vstack(std::slice::from_ref(&img)).unwrap(), img);
    }
}

#[test]
fn hstack_layout() {
    let a = ramp(3, 4, 2);
    let b = ramp(2, 4, 2);
    let out = hstack(&[a.clone(), b.clone()]).unwrap();
    assert_eq!(out.shape(), (5, 4, 2));
    for y in 0..4 {
        for x in 0..3 {
            assert_eq!(out.pixel(x, y), a.pixel(x, y));
        }
        for x in 0..2 {
            assert_eq!(out.pixel(3 + x, y), b.pixel(x, y));
        }
    }
}

#[test]
fn vstack_layout() {
    let a = ramp(3, 2, 3);
    let b = ramp(3, 5, 3);
    let out = vstack(&[a.clone(), b.clone()]).unwrap();
    assert_eq!(out.shape(), (3, 7, 3));
    for y in 0..2 {
        assert_eq!(out.row(y), a.row(y));
    }
    for y in 0..5 {
        assert_eq!(out.row(2 + y), b.row(y));
    }
}

#[test]
fn vstack_is_transposed_hstack() {
    let a = ramp(2, 3, 1);
    let b = ramp(2, 1, 1);
    let tall = vstack(&[a.clone(), b.clone()]).unwrap();
    let wide = hstack(&[transpose(&a), transpose(&b)]).unwrap();
    assert_eq!(transpose(&wide), tall);
}

#[test]
fn hstack_two_pixels() {
    let a = Image::from_data(1, 1, 1, vec![0.2]).unwrap();
    let b = Image::from_data(1, 1, 1, vec![0.8]).unwrap();
    let out = hstack(&[a, b]).unwrap();
    assert_eq!(out.shape(), (2, 1, 1));
    assert_eq!(out.data(), &[0.2, 0.8]);
}

#[test]
fn vstack_two_rows() {
    let a = Image::from_data(2, 1, 1, vec![0.1, 0.2]).unwrap();
    let b = Image::from_data(2, 1, 1, vec![0.3, 0.4]).unwrap();
    let out = vstack(&[a, b]).unwrap();
    assert_eq!(out.shape(), (2, 2, 1));
    assert_eq!(out.row(0), &[0.1, 0.2]);
    assert_eq!(out.row(1), &[0.3, 0.4]);
}

#[test]
fn stacking_rejects_bad_input() {
    assert!(matches!(hstack(&[]).unwrap_err(), OpsError::EmptyInput { .. }));
    assert!(matches!(vstack(&[]).unwrap_err(), OpsError::EmptyInput { .. }));

    let a = ramp(2, 2, 1);
    assert!(matches!(
        hstack(&[a.clone(), ramp(2, 3, 1)]).unwrap_err(),
        OpsError::ShapeMismatch { axis: "height", .. }
    ));
    assert!(matches!(
        vstack(&[a.clone(), ramp(3, 2, 1)]).unwrap_err(),
        OpsError::ShapeMismatch { axis: "width", .. }
    ));
    assert!(matches!(
        hstack(&[a.clone(), ramp(2, 2, 3)]).unwrap_err(),
        OpsError::ChannelMismatch { .. }
    ));
    assert!(matches!(
        vstack(&[a, ramp(2, 2, 3)]).unwrap_err(),
        OpsError::ChannelMismatch { .. }
    ));
}

// ============================================================================
// Channels
// ============================================================================

#[test]
fn combine_then_extract_roundtrip() {
    for n in 1..=5u32 {
        let planes: Vec<Image> = (0..n)
            .map(|i| {
                let data = (0..12).map(|v| (v * 10 + i) as f32).collect();
                Image::from_data(4, 3, 1, data).unwrap()
            })
            .collect();
        let combined = combine_channels(&planes).unwrap();
        assert_eq!(combined.shape(), (4, 3, n));
        for (c, plane) in planes.iter().enumerate() {
            assert_eq!(&extract_channel(&combined, c as u32).unwrap(), plane);
        }
    }
}

#[test]
fn combine_three_planes() {
    let planes: Vec<Image> = [0.1, 0.2, 0.3]
        .iter()
        .map(|&v| Image::from_data(1, 1, 1, vec![v]).unwrap())
        .collect();
    let out = combine_channels(&planes).unwrap();
    assert_eq!(out.shape(), (1, 1, 3));
    assert_eq!(out.pixel(0, 0), &[0.1, 0.2, 0.3]);
}

// ============================================================================
// Crop
// ============================================================================

#[test]
fn full_crop_is_identity() {
    for &(w, h, c) in SHAPES {
        let img = ramp(w, h, c);
        assert_eq!(crop_region(&img, 0, 0, w, h).unwrap(), img);
    }
}

#[test]
fn crop_picks_interior() {
    let img = ramp(5, 4, 2);
    let out = crop_region(&img, 1, 2, 4, 4).unwrap();
    assert_eq!(out.shape(), (3, 2, 2));
    for y in 0..2 {
        for x in 0..3 {
            assert_eq!(out.pixel(x, y), img.pixel(x + 1, y + 2));
        }
    }
}

#[test]
fn crop_rejects_bad_regions() {
    let img = ramp(4, 4, 1);
    assert!(matches!(
        crop_region(&img, 0, 0, 5, 4).unwrap_err(),
        OpsError::Region { .. }
    ));
    assert!(matches!(
        crop_region(&img, 3, 0, 1, 4).unwrap_err(),
        OpsError::Core(linimg_core::Error::InvalidRegion { .. })
    ));
}

// ============================================================================
// Compare and diff
// ============================================================================

#[test]
fn compare_is_reflexive() {
    for &(w, h, c) in SHAPES {
        let img = ramp(w, h, c);
        for eps in [0.0, 1e-6, 0.5, 100.0] {
            assert_eq!(compare(&img, &img, eps), Comparison::Equal);
        }
    }

    let extremes = Image::from_data(
        2,
        2,
        1,
        vec![f32::INFINITY, 0.5, f32::NEG_INFINITY, f32::MAX],
    )
    .unwrap();
    for eps in [0.0, 1e-6, 100.0] {
        assert_eq!(compare(&extremes, &extremes, eps), Comparison::Equal);
        assert_eq!(compare(&extremes, &extremes.clone(), eps), Comparison::Equal);
    }
}

#[test]
fn compare_incompatible_regardless_of_epsilon() {
    let a = ramp(2, 3, 1);
    for other in [ramp(3, 2, 1), ramp(2, 3, 2), ramp(2, 4, 1)] {
        for eps in [0.0, 1.0, f32::MAX] {
            assert_eq!(compare(&a, &other, eps), Comparison::IncompatibleShapes);
        }
    }
}

#[test]
fn self_diff_is_zero() {
    for &(w, h, c) in SHAPES {
        let img = ramp(w, h, c);
        let d = diff_images(&img, &img).unwrap();
        assert_eq!(d.shape(), img.shape());
        assert!(d.data().iter().all(|&v| v == 0.0));
    }
}

#[test]
fn self_diff_with_infinities_is_zero() {
    let img = Image::from_data(3, 1, 1, vec![f32::NEG_INFINITY, 2.0, f32::INFINITY]).unwrap();
    let d = diff_images(&img, &img).unwrap();
    assert_eq!(d.data(), &[0.0, 0.0, 0.0]);
}

#[test]
fn diff_maps_delta_range_onto_unit_interval() {
    let a = ramp(3, 3, 3);
    let mut b = a.clone();
    for (i, v) in b.data_mut().iter_mut().enumerate() {
        *v += 0.1 + (i % 7) as f32 * 0.3;
    }
    let d = diff_images(&a, &b).unwrap();

    let min = d.data().iter().copied().fold(f32::MAX, f32::min);
    let max = d.data().iter().copied().fold(f32::MIN, f32::max);
    assert_relative_eq!(min, 0.0, epsilon = 1e-5);
    assert_relative_eq!(max, 1.0, epsilon = 1e-5);

    // delta 0.1 + 0.3 * k over k in 0..7 spans 1.8
    assert_relative_eq!(d.data()[1], 0.3 / 1.8, epsilon = 1e-4);
}
