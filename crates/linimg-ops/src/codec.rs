//! Codec boundary: conversion between [`Image`] and raw interleaved bytes.
//!
//! File encoders and decoders live outside this crate. They exchange pixels
//! through [`RawImage`]: little-endian `f32` samples plus row stride, pixel
//! stride and channel count. Only 1- and 3-channel images cross this
//! boundary.
//!
//! Encoding always produces RGB: single-channel images are replicated into
//! all three channels. Decoding honours arbitrary padding between pixels and
//! rows.
//!
//! ```rust
//! use linimg_core::Image;
//! use linimg_ops::codec::{from_raw, to_raw};
//!
//! let gray = Image::from_data(2, 1, 1, vec![0.25, 1.0]).unwrap();
//! let raw = to_raw(&gray).unwrap();
//! assert_eq!(raw.channels, 3);
//! assert_eq!(raw.row_stride, 2 * 12);
//!
//! let rgb = from_raw(&raw).unwrap();
//! assert_eq!(rgb.pixel(0, 0), &[0.25, 0.25, 0.25]);
//! ```

use crate::{OpsError, OpsResult};
use byteorder::{ByteOrder, LittleEndian};
use linimg_core::Image;
use tracing::trace;

/// Size of one encoded sample in bytes.
pub const BYTES_PER_SAMPLE: usize = std::mem::size_of::<f32>();

/// Interleaved pixel bytes with layout metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct RawImage {
    /// Little-endian `f32` samples.
    pub bytes: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Bytes from the start of one row to the next.
    pub row_stride: usize,
    /// Bytes from the start of one pixel to the next.
    pub pixel_stride: usize,
    /// Samples per pixel (1 or 3).
    pub channels: u32,
}

impl RawImage {
    /// Minimum buffer length the metadata describes, or `None` if it
    /// overflows `usize`.
    pub fn required_len(&self) -> Option<usize> {
        if self.width == 0 || self.height == 0 {
            return Some(0);
        }
        let rows = (self.height as usize - 1).checked_mul(self.row_stride)?;
        let pixels = (self.width as usize - 1).checked_mul(self.pixel_stride)?;
        rows.checked_add(pixels)?
            .checked_add(self.channels as usize * BYTES_PER_SAMPLE)
    }
}

fn check_channels(channels: u32) -> OpsResult<()> {
    match channels {
        1 | 3 => Ok(()),
        other => Err(OpsError::UnsupportedChannels(other)),
    }
}

/// Encodes an image as tightly packed RGB `f32` bytes.
///
/// # Errors
///
/// Returns [`OpsError::UnsupportedChannels`] unless the image has 1 or 3
/// channels.
pub fn to_raw(image: &Image) -> OpsResult<RawImage> {
    let (width, height, channels) = image.shape();
    check_channels(channels)?;
    trace!(width, height, channels, "codec::to_raw");

    let pixel_stride = 3 * BYTES_PER_SAMPLE;
    let mut bytes = vec![0u8; image.pixel_count() * pixel_stride];

    for (src, dst) in image
        .data()
        .chunks_exact(channels as usize)
        .zip(bytes.chunks_exact_mut(pixel_stride))
    {
        for (c, out) in dst.chunks_exact_mut(BYTES_PER_SAMPLE).enumerate() {
            let v = if channels == 1 { src[0] } else { src[c] };
            LittleEndian::write_f32(out, v);
        }
    }

    Ok(RawImage {
        bytes,
        width,
        height,
        row_stride: width as usize * pixel_stride,
        pixel_stride,
        channels: 3,
    })
}

/// Decodes raw interleaved bytes into an image with `raw.channels` channels.
///
/// # Errors
///
/// - [`OpsError::UnsupportedChannels`] unless `raw.channels` is 1 or 3
/// - [`OpsError::BufferTooSmall`] if the strides are smaller than a pixel or
///   a row, the layout size overflows `usize`, or the buffer is shorter than
///   the layout requires
pub fn from_raw(raw: &RawImage) -> OpsResult<Image> {
    check_channels(raw.channels)?;
    let channels = raw.channels as usize;
    let pixel_bytes = channels * BYTES_PER_SAMPLE;

    if raw.pixel_stride < pixel_bytes {
        return Err(OpsError::BufferTooSmall(format!(
            "pixel stride {} < {} bytes per pixel",
            raw.pixel_stride, pixel_bytes
        )));
    }
    let overflow = || {
        OpsError::BufferTooSmall(format!(
            "{}x{} layout with strides {}/{} overflows usize",
            raw.width, raw.height, raw.row_stride, raw.pixel_stride
        ))
    };
    let min_row = (raw.width as usize)
        .checked_mul(raw.pixel_stride)
        .ok_or_else(overflow)?;
    if raw.row_stride < min_row {
        return Err(OpsError::BufferTooSmall(format!(
            "row stride {} < {} bytes per row",
            raw.row_stride, min_row
        )));
    }
    let required = raw.required_len().ok_or_else(overflow)?;
    if raw.bytes.len() < required {
        return Err(OpsError::BufferTooSmall(format!(
            "{} bytes, layout needs {}",
            raw.bytes.len(),
            required
        )));
    }
    trace!(
        width = raw.width,
        height = raw.height,
        channels,
        row_stride = raw.row_stride,
        pixel_stride = raw.pixel_stride,
        "codec::from_raw"
    );

    if raw.width == 0 || raw.height == 0 {
        return Ok(Image::try_new(raw.width, raw.height, raw.channels)?);
    }

    let mut data = Vec::with_capacity(raw.width as usize * raw.height as usize * channels);
    for y in 0..raw.height as usize {
        let row = &raw.bytes[y * raw.row_stride..];
        for x in 0..raw.width as usize {
            let px = &row[x * raw.pixel_stride..x * raw.pixel_stride + pixel_bytes];
            data.extend(px.chunks_exact(BYTES_PER_SAMPLE).map(LittleEndian::read_f32));
        }
    }

    Ok(Image::from_data(raw.width, raw.height, raw.channels, data)?)
}
