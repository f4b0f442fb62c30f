//! Resampler boundary: filter kinds, sampler configuration, and the trait a
//! resampling engine implements.
//!
//! The engine itself lives outside this crate. This module fixes the shape of
//! a request and checks both sides of the call: [`resample_image`] validates
//! the [`SamplerConfig`] before handing it over and verifies the returned
//! image has the requested shape.
//!
//! # Filters
//!
//! - [`Filter::Default`] - Engine's choice (Lanczos up, Mitchell down, typically)
//! - [`Filter::Box`] / [`Filter::Nearest`] - Blocky, no ringing
//! - [`Filter::Hermite`] - Smooth cubic, no overshoot
//! - [`Filter::GaussianScalars`] - Gaussian for scalar data
//! - [`Filter::GaussianNormals`] - Gaussian that renormalizes unit vectors
//! - [`Filter::Mitchell`] / [`Filter::Lanczos`] - Sharp reconstruction
//! - [`Filter::Minimum`] - Keeps the smallest sample (depth maps)
//!
//! # Example
//!
//! ```rust
//! use linimg_ops::resample::{Filter, SamplerConfig, SourceRegion};
//!
//! let config = SamplerConfig::with_filter(Filter::GaussianScalars)
//!     .radius_multiplier(10.0)
//!     .source_region(SourceRegion::new(0.0, 0.25, 0.25, 0.5));
//! assert!(config.validate().is_ok());
//! ```

use crate::{OpsError, OpsResult};
use linimg_core::{Image, SinglePixel};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Reconstruction filter used along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    /// Let the resampler pick based on the scale direction.
    #[default]
    Default,
    /// Box filter.
    Box,
    /// Nearest-neighbor.
    Nearest,
    /// Hermite cubic.
    Hermite,
    /// Gaussian for scalar fields.
    GaussianScalars,
    /// Gaussian for unit vectors (renormalized after filtering).
    GaussianNormals,
    /// Mitchell-Netravali cubic.
    Mitchell,
    /// Lanczos windowed sinc.
    Lanczos,
    /// Minimum of the footprint.
    Minimum,
}

impl Filter {
    /// All filter kinds, in declaration order.
    pub const ALL: [Filter; 9] = [
        Filter::Default,
        Filter::Box,
        Filter::Nearest,
        Filter::Hermite,
        Filter::GaussianScalars,
        Filter::GaussianNormals,
        Filter::Mitchell,
        Filter::Lanczos,
        Filter::Minimum,
    ];

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Filter::Default => "default",
            Filter::Box => "box",
            Filter::Nearest => "nearest",
            Filter::Hermite => "hermite",
            Filter::GaussianScalars => "gaussian_scalars",
            Filter::GaussianNormals => "gaussian_normals",
            Filter::Mitchell => "mitchell",
            Filter::Lanczos => "lanczos",
            Filter::Minimum => "minimum",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Filter {
    type Err = OpsError;

    fn from_str(s: &str) -> OpsResult<Self> {
        let filter = match s.to_lowercase().as_str() {
            "default" => Filter::Default,
            "box" => Filter::Box,
            "nearest" => Filter::Nearest,
            "hermite" => Filter::Hermite,
            "gaussian" | "gaussian_scalars" => Filter::GaussianScalars,
            "gaussian_normals" => Filter::GaussianNormals,
            "mitchell" => Filter::Mitchell,
            "lanczos" => Filter::Lanczos,
            "minimum" | "min" => Filter::Minimum,
            other => {
                return Err(OpsError::InvalidParameter(format!(
                    "unknown filter '{other}'"
                )));
            }
        };
        Ok(filter)
    }
}

/// Sub-rectangle of the source in normalized [0, 1] coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceRegion {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl SourceRegion {
    /// The whole source image.
    pub const FULL: SourceRegion = SourceRegion::new(0.0, 0.0, 1.0, 1.0);

    /// Creates a region from origin and extent.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns `true` for the full-image region.
    pub fn is_full(&self) -> bool {
        *self == Self::FULL
    }

    /// Checks that the region is finite, non-empty and inside the unit square.
    pub fn validate(&self) -> OpsResult<()> {
        let values = [self.x, self.y, self.width, self.height];
        if values.iter().any(|v| !v.is_finite() || *v < 0.0 || *v > 1.0) {
            return Err(OpsError::InvalidParameter(format!(
                "source region {self:?} must lie in [0, 1]"
            )));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(OpsError::InvalidParameter(format!(
                "source region {self:?} is empty"
            )));
        }
        if self.x + self.width > 1.0 || self.y + self.height > 1.0 {
            return Err(OpsError::InvalidParameter(format!(
                "source region {self:?} extends past the image"
            )));
        }
        Ok(())
    }
}

impl Default for SourceRegion {
    fn default() -> Self {
        Self::FULL
    }
}

/// Options a resampler is invoked with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplerConfig {
    /// Filter along X.
    pub horizontal_filter: Filter,
    /// Filter along Y.
    pub vertical_filter: Filter,
    /// Widens kernel support; values above 1 blur.
    pub filter_radius_multiplier: f32,
    /// Part of the source to resample.
    pub source_region: SourceRegion,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            horizontal_filter: Filter::Default,
            vertical_filter: Filter::Default,
            filter_radius_multiplier: 1.0,
            source_region: SourceRegion::FULL,
        }
    }
}

impl SamplerConfig {
    /// Uses `filter` on both axes, other fields default.
    pub fn with_filter(filter: Filter) -> Self {
        Self {
            horizontal_filter: filter,
            vertical_filter: filter,
            ..Self::default()
        }
    }

    /// Sets the horizontal filter.
    pub fn horizontal(mut self, filter: Filter) -> Self {
        self.horizontal_filter = filter;
        self
    }

    /// Sets the vertical filter.
    pub fn vertical(mut self, filter: Filter) -> Self {
        self.vertical_filter = filter;
        self
    }

    /// Sets the radius multiplier.
    pub fn radius_multiplier(mut self, multiplier: f32) -> Self {
        self.filter_radius_multiplier = multiplier;
        self
    }

    /// Sets the source region.
    pub fn source_region(mut self, region: SourceRegion) -> Self {
        self.source_region = region;
        self
    }

    /// Checks the radius multiplier and source region.
    pub fn validate(&self) -> OpsResult<()> {
        let m = self.filter_radius_multiplier;
        if !m.is_finite() || m < 0.0 {
            return Err(OpsError::InvalidParameter(format!(
                "filter radius multiplier {m} must be finite and >= 0"
            )));
        }
        self.source_region.validate()
    }
}

/// A resampling engine.
///
/// Implementations must return a new image of exactly the requested size
/// with the source's channel count.
pub trait Resampler {
    /// Resizes `src` to `width x height`.
    fn resample(
        &self,
        src: &Image,
        width: u32,
        height: u32,
        config: &SamplerConfig,
    ) -> OpsResult<Image>;

    /// Samples `src` at normalized coordinates `(u, v)`.
    fn sample(&self, src: &Image, u: f32, v: f32, config: &SamplerConfig)
    -> OpsResult<SinglePixel>;
}

/// Validates `config`, runs `resampler`, and checks the result's shape.
///
/// # Errors
///
/// - [`OpsError::InvalidParameter`] for an invalid config
/// - any error returned by the resampler
/// - [`OpsError::ResamplerContract`] if the result has the wrong shape
pub fn resample_image(
    resampler: &dyn Resampler,
    src: &Image,
    width: u32,
    height: u32,
    config: &SamplerConfig,
) -> OpsResult<Image> {
    config.validate()?;
    debug!(
        src_w = src.width(),
        src_h = src.height(),
        width,
        height,
        horizontal = %config.horizontal_filter,
        vertical = %config.vertical_filter,
        "resample"
    );

    let out = resampler.resample(src, width, height, config)?;
    let expected = (width, height, src.channels());
    if out.shape() != expected {
        let (got_width, got_height, got_channels) = out.shape();
        return Err(OpsError::ResamplerContract {
            width,
            height,
            channels: src.channels(),
            got_width,
            got_height,
            got_channels,
        });
    }
    Ok(out)
}

/// Point-samples `src` at `(u, v)` after validating `config`.
///
/// # Errors
///
/// - [`OpsError::InvalidParameter`] for an invalid config or coordinates
///   outside [0, 1]
/// - [`OpsError::ResamplerContract`] if the sample has the wrong channel count
pub fn sample_point(
    resampler: &dyn Resampler,
    src: &Image,
    u: f32,
    v: f32,
    config: &SamplerConfig,
) -> OpsResult<SinglePixel> {
    config.validate()?;
    if !(0.0..=1.0).contains(&u) || !(0.0..=1.0).contains(&v) {
        return Err(OpsError::InvalidParameter(format!(
            "sample position ({u}, {v}) outside [0, 1]"
        )));
    }

    let px = resampler.sample(src, u, v, config)?;
    if px.channels() != src.channels() as usize {
        return Err(OpsError::ResamplerContract {
            width: 1,
            height: 1,
            channels: src.channels(),
            got_width: 1,
            got_height: 1,
            got_channels: px.channels() as u32,
        });
    }
    Ok(px)
}
