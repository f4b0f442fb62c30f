//! Point samples.
//!
//! A [`SinglePixel`] holds the per-channel values of one sampled point. It
//! owns its samples, so it stays valid after the image it came from is
//! dropped. Up to four channels are stored inline.

use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

/// Inline channel capacity before spilling to the heap.
pub const INLINE_CHANNELS: usize = 4;

/// Per-channel values of a single sampled point.
///
/// # Example
///
/// ```rust
/// use linimg_core::SinglePixel;
///
/// let px = SinglePixel::from(&[0.25f32, 0.5, 0.75][..]);
/// assert_eq!(px.channels(), 3);
/// assert_eq!(px[1], 0.5);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SinglePixel {
    samples: SmallVec<[f32; INLINE_CHANNELS]>,
}

impl SinglePixel {
    /// Creates a zeroed pixel with `channels` samples.
    pub fn zeroed(channels: usize) -> Self {
        Self {
            samples: SmallVec::from_elem(0.0, channels),
        }
    }

    /// Returns the number of channels.
    #[inline]
    pub fn channels(&self) -> usize {
        self.samples.len()
    }

    /// Returns the samples as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.samples
    }

    /// Returns the samples as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.samples
    }

    /// Returns `true` if the samples no longer fit inline.
    #[inline]
    pub fn spilled(&self) -> bool {
        self.samples.spilled()
    }
}

impl From<&[f32]> for SinglePixel {
    fn from(samples: &[f32]) -> Self {
        Self {
            samples: SmallVec::from_slice(samples),
        }
    }
}

impl Index<usize> for SinglePixel {
    type Output = f32;

    #[inline]
    fn index(&self, channel: usize) -> &f32 {
        &self.samples[channel]
    }
}

impl IndexMut<usize> for SinglePixel {
    #[inline]
    fn index_mut(&mut self, channel: usize) -> &mut f32 {
        &mut self.samples[channel]
    }
}
