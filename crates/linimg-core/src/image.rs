//! Image buffer types.
//!
//! - [`Image`] - Shared, fixed-shape image buffer
//! - [`ImageView`] - Borrowed read-only view over an external buffer
//!
//! # Memory Layout
//!
//! Images store samples in **row-major** order, top-to-bottom, with all
//! channels of a pixel contiguous:
//!
//! ```text
//! Memory: [c0 c1 c2 c0 c1 c2 ...]  <- row 0
//!         [c0 c1 c2 c0 c1 c2 ...]  <- row 1
//!         ...
//! ```
//!
//! The sample for channel `c` of pixel `(x, y)` is at
//! `(y * width + x) * channels + c`. There is no row padding.
//!
//! # Sharing
//!
//! The buffer lives in an [`Arc<Vec<f32>>`]. Cloning an [`Image`] is O(1)
//! and shares storage; the shape is fixed for the lifetime of the value.
//! Sample mutation through [`Image::data_mut`] and friends detaches shared
//! storage first (copy-on-write), so other holders never observe a partial
//! write.
//!
//! ```rust
//! use linimg_core::Image;
//!
//! let a = Image::from_data(2, 1, 1, vec![0.2, 0.8]).unwrap();
//! let mut b = a.clone();
//! assert!(a.shares_storage(&b));
//!
//! b.data_mut()[0] = 1.0;
//! assert!(!a.shares_storage(&b));
//! assert_eq!(a.data(), &[0.2, 0.8]);
//! ```

use crate::{Error, Rect, Result, SinglePixel};
use std::sync::Arc;

#[inline]
fn sample_len(width: u32, height: u32, channels: u32) -> usize {
    width as usize * height as usize * channels as usize
}

fn check_shape(width: u32, height: u32, channels: u32, len: usize) -> Result<()> {
    if channels == 0 {
        return Err(Error::InvalidChannels { channels });
    }
    let expected = sample_len(width, height, channels);
    if len != expected {
        return Err(Error::BufferSize {
            width,
            height,
            channels,
            expected,
            got: len,
        });
    }
    Ok(())
}

/// Shared, channel-interleaved `f32` image with an immutable shape.
///
/// # Example
///
/// ```rust
/// use linimg_core::Image;
///
/// let mut img = Image::new(3, 2, 1);
/// img.pixel_mut(2, 1)[0] = 5.0;
/// assert_eq!(img.data()[5], 5.0);
/// assert_eq!(img.shape(), (3, 2, 1));
/// ```
#[derive(Clone)]
pub struct Image {
    data: Arc<Vec<f32>>,
    width: u32,
    height: u32,
    channels: u32,
}

impl Image {
    /// Creates a zero-filled image.
    ///
    /// # Panics
    ///
    /// Panics if `channels` is zero. Use [`try_new`](Self::try_new) for a
    /// checked constructor.
    pub fn new(width: u32, height: u32, channels: u32) -> Self {
        assert!(channels > 0, "images need at least one channel");
        Self {
            data: Arc::new(vec![0.0; sample_len(width, height, channels)]),
            width,
            height,
            channels,
        }
    }

    /// Creates a zero-filled image, rejecting a zero channel count.
    pub fn try_new(width: u32, height: u32, channels: u32) -> Result<Self> {
        if channels == 0 {
            return Err(Error::InvalidChannels { channels });
        }
        Ok(Self::new(width, height, channels))
    }

    /// Wraps existing interleaved samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChannels`] for zero channels and
    /// [`Error::BufferSize`] if `data.len() != width * height * channels`.
    pub fn from_data(width: u32, height: u32, channels: u32, data: Vec<f32>) -> Result<Self> {
        check_shape(width, height, channels, data.len())?;
        Ok(Self {
            data: Arc::new(data),
            width,
            height,
            channels,
        })
    }

    /// Creates an image with every pixel set to `pixel`.
    ///
    /// The channel count is `pixel.len()`.
    ///
    /// # Panics
    ///
    /// Panics if `pixel` is empty or longer than `u32::MAX`.
    pub fn filled(width: u32, height: u32, pixel: &[f32]) -> Self {
        let channels = match u32::try_from(pixel.len()) {
            Ok(channels) if channels > 0 => channels,
            _ => panic!("images need between 1 and u32::MAX channels"),
        };
        let count = width as usize * height as usize;
        let mut data = Vec::with_capacity(count * pixel.len());
        for _ in 0..count {
            data.extend_from_slice(pixel);
        }
        Self {
            data: Arc::new(data),
            width,
            height,
            channels,
        }
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the number of channels per pixel.
    #[inline]
    pub fn channels(&self) -> u32 {
        self.channels
    }

    /// Returns `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns `(width, height, channels)`.
    #[inline]
    pub fn shape(&self) -> (u32, u32, u32) {
        (self.width, self.height, self.channels)
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns the total number of samples.
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the image has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns a rectangle covering the entire image.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Returns the full interleaved sample buffer.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Returns the sample buffer for writing, detaching shared storage.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f32] {
        Arc::make_mut(&mut self.data).as_mut_slice()
    }

    /// Consumes the image and returns its samples.
    ///
    /// Copies only if the storage is still shared.
    pub fn into_vec(self) -> Vec<f32> {
        Arc::try_unwrap(self.data).unwrap_or_else(|shared| shared.as_ref().clone())
    }

    /// Returns `true` if both handles point at the same storage.
    #[inline]
    pub fn shares_storage(&self, other: &Image) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    #[inline]
    fn pixel_offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * self.channels as usize
    }

    /// Returns the channel block of pixel (x, y).
    ///
    /// # Panics
    ///
    /// Debug builds panic if (x, y) is out of bounds. Release builds only
    /// panic past the end of the buffer; an out-of-range `x` may return a
    /// pixel from the next row. Use [`get_pixel`](Self::get_pixel) for a
    /// checked lookup.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> &[f32] {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let offset = self.pixel_offset(x, y);
        &self.data[offset..offset + self.channels as usize]
    }

    /// Returns the channel block of pixel (x, y) for writing.
    ///
    /// # Panics
    ///
    /// Debug builds panic if (x, y) is out of bounds. Release builds only
    /// panic past the end of the buffer; an out-of-range `x` may return a
    /// pixel from the next row. Use [`get_pixel`](Self::get_pixel) for a
    /// checked lookup.
    #[inline]
    pub fn pixel_mut(&mut self, x: u32, y: u32) -> &mut [f32] {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let offset = self.pixel_offset(x, y);
        let channels = self.channels as usize;
        &mut self.data_mut()[offset..offset + channels]
    }

    /// Returns the channel block of pixel (x, y), or an error if out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<&[f32]> {
        if x < self.width && y < self.height {
            Ok(self.pixel(x, y))
        } else {
            Err(Error::out_of_bounds(x, y, self.width, self.height))
        }
    }

    /// Returns the buffer from pixel (x, y) to the end of the image.
    ///
    /// This is the raw "pointer at pixel" accessor: the slice starts at the
    /// channel block of (x, y) and continues through the following pixels
    /// and rows.
    ///
    /// # Panics
    ///
    /// Debug builds panic if (x, y) is out of bounds. Release builds only
    /// panic past the end of the buffer; an out-of-range `x` may return a
    /// pixel from the next row. Use [`get_pixel`](Self::get_pixel) for a
    /// checked lookup.
    #[inline]
    pub fn samples_from(&self, x: u32, y: u32) -> &[f32] {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        &self.data[self.pixel_offset(x, y)..]
    }

    /// Copies the samples of pixel (x, y) into a [`SinglePixel`].
    pub fn sample_pixel(&self, x: u32, y: u32) -> Result<SinglePixel> {
        self.get_pixel(x, y).map(SinglePixel::from)
    }

    /// Returns row `y` as a slice of `width * channels` samples.
    ///
    /// # Panics
    ///
    /// Debug builds panic if y >= height. Release builds panic only when the
    /// row lies past the end of the buffer.
    #[inline]
    pub fn row(&self, y: u32) -> &[f32] {
        debug_assert!(y < self.height, "row out of bounds");
        let len = self.width as usize * self.channels as usize;
        let start = y as usize * len;
        &self.data[start..start + len]
    }

    /// Returns row `y` for writing.
    ///
    /// # Panics
    ///
    /// Debug builds panic if y >= height. Release builds panic only when the
    /// row lies past the end of the buffer.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [f32] {
        debug_assert!(y < self.height, "row out of bounds");
        let len = self.width as usize * self.channels as usize;
        let start = y as usize * len;
        &mut self.data_mut()[start..start + len]
    }

    /// Borrows the image as an [`ImageView`].
    #[inline]
    pub fn view(&self) -> ImageView<'_> {
        ImageView {
            data: &self.data,
            width: self.width,
            height: self.height,
            channels: self.channels,
        }
    }
}

impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && self.data() == other.data()
    }
}

impl std::fmt::Debug for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("channels", &self.channels)
            .finish()
    }
}

/// Read-only view over an externally owned interleaved buffer.
///
/// The view never copies; the borrow checker ties its lifetime to the
/// buffer. Use [`to_image`](Self::to_image) to get an owned [`Image`].
///
/// # Example
///
/// ```rust
/// use linimg_core::ImageView;
///
/// let samples = [0.0f32, 1.0, 2.0, 3.0, 4.0, 5.0];
/// let view = ImageView::new(&samples, 3, 2, 1).unwrap();
/// assert_eq!(view.row(1), &[3.0, 4.0, 5.0]);
/// ```
#[derive(Clone, Copy)]
pub struct ImageView<'a> {
    data: &'a [f32],
    width: u32,
    height: u32,
    channels: u32,
}

impl<'a> ImageView<'a> {
    /// Wraps `data` as a `width x height x channels` image.
    ///
    /// # Errors
    ///
    /// Same shape checks as [`Image::from_data`].
    pub fn new(data: &'a [f32], width: u32, height: u32, channels: u32) -> Result<Self> {
        check_shape(width, height, channels, data.len())?;
        Ok(Self {
            data,
            width,
            height,
            channels,
        })
    }

    /// Returns the view width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the view height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the number of channels per pixel.
    #[inline]
    pub fn channels(&self) -> u32 {
        self.channels
    }

    /// Returns `(width, height, channels)`.
    #[inline]
    pub fn shape(&self) -> (u32, u32, u32) {
        (self.width, self.height, self.channels)
    }

    /// Returns the borrowed sample buffer.
    #[inline]
    pub fn data(&self) -> &'a [f32] {
        self.data
    }

    /// Returns the channel block of pixel (x, y).
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> &'a [f32] {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let offset = (y as usize * self.width as usize + x as usize) * self.channels as usize;
        &self.data[offset..offset + self.channels as usize]
    }

    /// Returns row `y`.
    #[inline]
    pub fn row(&self, y: u32) -> &'a [f32] {
        debug_assert!(y < self.height, "row out of bounds");
        let len = self.width as usize * self.channels as usize;
        let start = y as usize * len;
        &self.data[start..start + len]
    }

    /// Copies the viewed samples into an owned [`Image`].
    pub fn to_image(&self) -> Image {
        Image {
            data: Arc::new(self.data.to_vec()),
            width: self.width,
            height: self.height,
            channels: self.channels,
        }
    }
}

impl std::fmt::Debug for ImageView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageView")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("channels", &self.channels)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_new() {
        let img = Image::new(100, 50, 3);
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert_eq!(img.channels(), 3);
        assert_eq!(img.pixel_count(), 5000);
        assert_eq!(img.sample_count(), 15000);
        assert!(img.data().iter().all(|&v| v == 0.0));
    }

    #[test]
    #[should_panic]
    fn test_image_new_zero_channels() {
        let _ = Image::new(1, 1, 0);
    }

    #[test]
    #[should_panic(expected = "between 1 and u32::MAX channels")]
    fn test_filled_empty_pixel() {
        let _ = Image::filled(2, 2, &[]);
    }

    #[test]
    fn test_filled_channel_count() {
        let img = Image::filled(3, 1, &[0.1, 0.2, 0.3, 0.4, 0.5]);
        assert_eq!(img.shape(), (3, 1, 5));
        assert_eq!(img.pixel(2, 0), &[0.1, 0.2, 0.3, 0.4, 0.5]);
    }

    #[test]
    fn test_get_pixel_checks_row_end() {
        let img = Image::new(2, 2, 1);
        assert!(img.get_pixel(2, 0).unwrap_err().is_bounds_error());
        assert!(img.get_pixel(1, 1).is_ok());
    }

    #[test]
    fn test_try_new_zero_channels() {
        assert_eq!(
            Image::try_new(4, 4, 0).unwrap_err(),
            Error::InvalidChannels { channels: 0 }
        );
    }

    #[test]
    fn test_zero_area_image() {
        let img = Image::new(0, 7, 2);
        assert!(img.is_empty());
        assert_eq!(img.sample_count(), 0);
    }

    #[test]
    fn test_from_data_wrong_size() {
        let err = Image::from_data(2, 2, 3, vec![0.0; 11]).unwrap_err();
        assert_eq!(
            err,
            Error::BufferSize {
                width: 2,
                height: 2,
                channels: 3,
                expected: 12,
                got: 11,
            }
        );
    }

    #[test]
    fn test_layout_index() {
        let data: Vec<f32> = (0..24).map(|v| v as f32).collect();
        let img = Image::from_data(4, 2, 3, data).unwrap();
        // (y * W + x) * C + c
        assert_eq!(img.pixel(1, 1), &[15.0, 16.0, 17.0]);
        assert_eq!(img.pixel(3, 0), &[9.0, 10.0, 11.0]);
        assert_eq!(img.row(1).len(), 12);
        assert_eq!(img.row(1)[0], 12.0);
        assert_eq!(img.samples_from(3, 1), &[21.0, 22.0, 23.0]);
        assert_eq!(img.samples_from(2, 0).len(), 18);
    }

    #[test]
    fn test_get_pixel_out_of_bounds() {
        let img = Image::new(2, 2, 1);
        assert!(img.get_pixel(1, 1).is_ok());
        assert_eq!(
            img.get_pixel(2, 0).unwrap_err(),
            Error::out_of_bounds(2, 0, 2, 2)
        );
        assert!(img.sample_pixel(0, 5).is_err());
    }

    #[test]
    fn test_sample_pixel_detached() {
        let mut img = Image::filled(2, 2, &[0.1, 0.2, 0.3]);
        let px = img.sample_pixel(1, 1).unwrap();
        img.pixel_mut(1, 1)[0] = 9.0;
        assert_eq!(px.as_slice(), &[0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_clone_shares_then_detaches() {
        let a = Image::filled(3, 3, &[1.0]);
        let mut b = a.clone();
        assert!(a.shares_storage(&b));
        assert_eq!(a, b);

        b.row_mut(2)[0] = 0.0;
        assert!(!a.shares_storage(&b));
        assert_eq!(a.pixel(0, 2), &[1.0]);
        assert_eq!(b.pixel(0, 2), &[0.0]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_equality_is_structural() {
        let a = Image::from_data(2, 1, 1, vec![0.5, 0.25]).unwrap();
        let b = Image::from_data(2, 1, 1, vec![0.5, 0.25]).unwrap();
        let c = Image::from_data(1, 2, 1, vec![0.5, 0.25]).unwrap();
        assert!(!a.shares_storage(&b));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_into_vec() {
        let a = Image::from_data(2, 1, 1, vec![3.0, 4.0]).unwrap();
        let shared = a.clone();
        assert_eq!(a.into_vec(), vec![3.0, 4.0]);
        assert_eq!(shared.into_vec(), vec![3.0, 4.0]);
    }

    #[test]
    fn test_view_over_external_buffer() {
        let samples = vec![0.0f32, 1.0, 2.0, 3.0, 4.0, 5.0];
        let view = ImageView::new(&samples, 1, 2, 3).unwrap();
        assert_eq!(view.shape(), (1, 2, 3));
        assert_eq!(view.pixel(0, 1), &[3.0, 4.0, 5.0]);
        assert_eq!(view.data().as_ptr(), samples.as_ptr());

        let owned = view.to_image();
        assert_eq!(owned.data(), samples.as_slice());
        assert_eq!(owned.view().shape(), view.shape());
    }

    #[test]
    fn test_view_rejects_bad_shape() {
        let samples = [0.0f32; 5];
        assert!(ImageView::new(&samples, 2, 2, 1).is_err());
        assert!(ImageView::new(&samples, 5, 1, 0).is_err());
    }

    #[test]
    fn test_debug_prints_shape_only() {
        let img = Image::new(4, 3, 2);
        assert_eq!(
            format!("{:?}", img),
            "Image { width: 4, height: 3, channels: 2 }"
        );
    }
}
