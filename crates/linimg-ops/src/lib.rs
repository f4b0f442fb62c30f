//! # linimg-ops
//!
//! Structural operations on [`linimg_core::Image`] values.
//!
//! Every operation is pure: inputs are borrowed, a fresh image is returned,
//! and invalid arguments are reported through [`OpsError`].
//!
//! # Modules
//!
//! - [`transform`] - Transpose and crop
//! - [`stack`] - Horizontal and vertical concatenation
//! - [`channels`] - Combine planes into channels and extract them again
//! - [`compare`] - Approximate comparison and normalized difference
//! - [`vectors`] - Remap [-1, 1] vectors to [0, 1] colors
//! - [`resample`] - Filter vocabulary and the pluggable resampler seam
//! - [`codec`] - Raw byte exchange with external encoders
//!
//! # Example
//!
//! ```rust
//! use linimg_core::Image;
//! use linimg_ops::{hstack, transpose, vstack};
//!
//! let a = Image::from_data(1, 2, 1, vec![1.0, 2.0]).unwrap();
//! let b = Image::from_data(1, 2, 1, vec![3.0, 4.0]).unwrap();
//!
//! let wide = hstack(&[a.clone(), b.clone()]).unwrap();
//! assert_eq!(wide.data(), &[1.0, 3.0, 2.0, 4.0]);
//!
//! let tall = vstack(&[transpose(&a), transpose(&b)]).unwrap();
//! assert_eq!(tall, transpose(&wide));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod channels;
pub mod codec;
pub mod compare;
pub mod resample;
pub mod stack;
pub mod transform;
pub mod vectors;

pub use channels::{combine_channels, extract_channel};
pub use codec::{RawImage, from_raw, to_raw};
pub use compare::{Comparison, compare, diff_images};
pub use error::{OpsError, OpsResult};
pub use resample::{Filter, Resampler, SamplerConfig, SourceRegion, resample_image};
pub use stack::{hstack, vstack};
pub use transform::{crop, crop_region, transpose};
pub use vectors::vectors_to_colors;
