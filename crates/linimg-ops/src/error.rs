//! Error types for image operations.

use thiserror::Error;

/// Error type for image operations.
///
/// Every precondition an operation checks reports through this type; no
/// operation panics on caller input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OpsError {
    /// An operation that needs at least one input got none.
    #[error("{op}: must supply one or more images")]
    EmptyInput {
        /// Operation name
        op: &'static str,
    },

    /// Inputs disagree along an axis that must match.
    #[error("{op}: inconsistent {axis}: expected {expected}, got {got}")]
    ShapeMismatch {
        /// Operation name
        op: &'static str,
        /// "width" or "height"
        axis: &'static str,
        /// Size of the first input along `axis`
        expected: u32,
        /// Offending size
        got: u32,
    },

    /// Inputs have different channel counts.
    #[error("{op}: inconsistent channels: expected {expected}, got {got}")]
    ChannelMismatch {
        /// Operation name
        op: &'static str,
        /// Channel count of the first input
        expected: u32,
        /// Offending channel count
        got: u32,
    },

    /// Input has the wrong channel count for this operation.
    #[error("{op}: requires {expected} channel(s), got {got}")]
    ChannelCount {
        /// Operation name
        op: &'static str,
        /// Required channel count
        expected: u32,
        /// Actual channel count
        got: u32,
    },

    /// Channel index is not present in the image.
    #[error("channel {channel} out of range for {channels}-channel image")]
    ChannelOutOfRange {
        /// Requested channel
        channel: u32,
        /// Channel count of the image
        channels: u32,
    },

    /// Region does not lie within the source image.
    #[error("region {width}x{height} at ({x},{y}) exceeds {src_width}x{src_height}")]
    Region {
        /// Region origin X
        x: u32,
        /// Region origin Y
        y: u32,
        /// Region width
        width: u32,
        /// Region height
        height: u32,
        /// Source width
        src_width: u32,
        /// Source height
        src_height: u32,
    },

    /// Channel count not supported at the codec boundary.
    #[error("unsupported channel count {0}: only 1 and 3 channels convert")]
    UnsupportedChannels(u32),

    /// Raw buffer is too short or its strides are inconsistent.
    #[error("raw buffer: {0}")]
    BufferTooSmall(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A resampler returned an image of the wrong shape.
    #[error("resampler returned {got_width}x{got_height}x{got_channels}, expected {width}x{height}x{channels}")]
    ResamplerContract {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Source channel count
        channels: u32,
        /// Returned width
        got_width: u32,
        /// Returned height
        got_height: u32,
        /// Returned channel count
        got_channels: u32,
    },

    /// Error from image construction.
    #[error(transparent)]
    Core(#[from] linimg_core::Error),
}

/// Result type for image operations.
pub type OpsResult<T> = Result<T, OpsError>;
