//! Golden-hash regression store.
//!
//! Regression scenes are not compared pixel by pixel against reference
//! files. Each scene is reduced to a SHA-256 hash of its quantized RGB
//! samples, and the hashes live in one `hashes.json` per reference
//! directory:
//!
//! ```json
//! {
//!   "version": 1,
//!   "images": {
//!     "grays": { "width": 6, "height": 3, "channels": 1, "hash": "9f2c..." }
//!   }
//! }
//! ```
//!
//! The comparison mode is an explicit [`GoldenConfig`] value passed to
//! [`update_or_compare`]; nothing here reads process-wide state.
//!
//! # Hashing
//!
//! The image goes through [`linimg_ops::codec::to_raw`], so only 1- and
//! 3-channel images can be stored and gray images hash as replicated RGB.
//! Each sample is rounded to [`HASH_PRECISION`] decimals and hashed as a
//! little-endian `i64`, which absorbs last-bit float differences between
//! platforms.

use byteorder::{ByteOrder, LittleEndian};
use linimg_core::Image;
use linimg_ops::OpsError;
use linimg_ops::codec::{BYTES_PER_SAMPLE, to_raw};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Decimal places kept before hashing.
pub const HASH_PRECISION: i32 = 5;

/// File name of the store inside a reference directory.
pub const HASHES_FILE: &str = "hashes.json";

const STORE_VERSION: u32 = 1;

/// Errors from the golden store.
#[derive(Error, Debug)]
pub enum GoldenError {
    /// Stored and computed entries differ.
    #[error("golden mismatch for '{name}': expected {expected}, got {got}")]
    Mismatch {
        /// Scene name
        name: String,
        /// Stored entry
        expected: GoldenEntry,
        /// Computed entry
        got: GoldenEntry,
    },

    /// Compare mode found no stored entry.
    #[error("no golden entry for '{name}'; run update first")]
    Missing {
        /// Scene name
        name: String,
    },

    /// Reading or writing the store failed.
    #[error("{path}: {source}")]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The store is not valid JSON.
    #[error("invalid golden store: {0}")]
    Json(#[from] serde_json::Error),

    /// The image could not be encoded for hashing.
    #[error(transparent)]
    Ops(#[from] OpsError),
}

/// Result type for golden-store operations.
pub type GoldenResult<T> = Result<T, GoldenError>;

/// What [`update_or_compare`] does with an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComparisonMode {
    /// Do nothing.
    #[default]
    Skip,
    /// Check against the stored hash.
    Compare,
    /// Overwrite the stored hash.
    Update,
}

/// Comparison mode plus the reference directory it applies to.
#[derive(Debug, Clone, Default)]
pub struct GoldenConfig {
    /// Comparison mode
    pub mode: ComparisonMode,
    /// Directory holding [`HASHES_FILE`]
    pub dir: PathBuf,
}

impl GoldenConfig {
    /// Config that skips all comparisons.
    pub fn skip() -> Self {
        Self::default()
    }

    /// Config that compares against `dir`.
    pub fn compare(dir: impl Into<PathBuf>) -> Self {
        Self {
            mode: ComparisonMode::Compare,
            dir: dir.into(),
        }
    }

    /// Config that rewrites hashes in `dir`.
    pub fn update(dir: impl Into<PathBuf>) -> Self {
        Self {
            mode: ComparisonMode::Update,
            dir: dir.into(),
        }
    }

    /// Path of the hash file.
    pub fn hashes_path(&self) -> PathBuf {
        self.dir.join(HASHES_FILE)
    }
}

/// One stored image: its shape and content hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoldenEntry {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Channel count of the image before RGB expansion
    pub channels: u32,
    /// Hex SHA-256 of the quantized RGB samples
    pub hash: String,
}

impl GoldenEntry {
    /// Computes the entry for an image.
    ///
    /// # Errors
    ///
    /// Returns [`GoldenError::Ops`] unless the image has 1 or 3 channels.
    pub fn from_image(image: &Image) -> GoldenResult<Self> {
        let (width, height, channels) = image.shape();
        Ok(Self {
            width,
            height,
            channels,
            hash: image_hash(image)?,
        })
    }
}

impl fmt::Display for GoldenEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let short = self.hash.get(..12).unwrap_or(&self.hash);
        write!(
            f,
            "{}x{}x{} {}",
            self.width, self.height, self.channels, short
        )
    }
}

/// Hash of an image's quantized RGB encoding.
///
/// # Errors
///
/// Returns [`GoldenError::Ops`] unless the image has 1 or 3 channels.
pub fn image_hash(image: &Image) -> GoldenResult<String> {
    let raw = to_raw(image)?;
    let factor = 10f64.powi(HASH_PRECISION);

    let mut hasher = Sha256::new();
    for sample in raw.bytes.chunks_exact(BYTES_PER_SAMPLE) {
        let v = LittleEndian::read_f32(sample);
        let quantized = (v as f64 * factor).round() as i64;
        hasher.update(quantized.to_le_bytes());
    }

    Ok(hex::encode(hasher.finalize()))
}

/// Persisted set of golden entries keyed by scene name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoldenStore {
    version: u32,
    images: BTreeMap<String, GoldenEntry>,
}

impl Default for GoldenStore {
    fn default() -> Self {
        Self {
            version: STORE_VERSION,
            images: BTreeMap::new(),
        }
    }
}

impl GoldenStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a store, treating a missing file as empty.
    ///
    /// # Errors
    ///
    /// - [`GoldenError::Io`] if the file exists but cannot be read
    /// - [`GoldenError::Json`] if it is not a valid store
    pub fn load(path: &Path) -> GoldenResult<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no golden store, starting empty");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(GoldenError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let store: Self = serde_json::from_str(&content)?;
        debug!(path = %path.display(), entries = store.len(), "loaded golden store");
        Ok(store)
    }

    /// Writes the store as pretty JSON, creating parent directories.
    ///
    /// # Errors
    ///
    /// - [`GoldenError::Io`] if the directory or file cannot be written
    /// - [`GoldenError::Json`] if serialization fails
    pub fn save(&self, path: &Path) -> GoldenResult<()> {
        let io_err = |source| GoldenError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(io_err)?;
        info!(path = %path.display(), entries = self.len(), "saved golden store");
        Ok(())
    }

    /// Stored entry for `name`.
    pub fn get(&self, name: &str) -> Option<&GoldenEntry> {
        self.images.get(name)
    }

    /// Stores `entry` under `name`, returning the previous entry.
    pub fn insert(&mut self, name: impl Into<String>, entry: GoldenEntry) -> Option<GoldenEntry> {
        self.images.insert(name.into(), entry)
    }

    /// Scene names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.images.keys().map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns `true` if the store has no entries.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Result of a successful [`update_or_compare`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoldenOutcome {
    /// Mode was [`ComparisonMode::Skip`].
    Skipped,
    /// The entry was written to the store.
    Updated,
    /// The entry matched the store.
    Matched,
}

/// Records or checks `image` under `name` according to `config.mode`.
///
/// Update mode only modifies `store`; persist it with
/// [`GoldenStore::save`] afterwards.
///
/// # Errors
///
/// - [`GoldenError::Missing`] in compare mode when `name` is not stored
/// - [`GoldenError::Mismatch`] in compare mode when shape or hash differ
/// - [`GoldenError::Ops`] if the image has other than 1 or 3 channels
pub fn update_or_compare(
    config: &GoldenConfig,
    store: &mut GoldenStore,
    name: &str,
    image: &Image,
) -> GoldenResult<GoldenOutcome> {
    if config.mode == ComparisonMode::Skip {
        return Ok(GoldenOutcome::Skipped);
    }

    let got = GoldenEntry::from_image(image)?;
    match config.mode {
        ComparisonMode::Skip => Ok(GoldenOutcome::Skipped),
        ComparisonMode::Update => {
            debug!(name, entry = %got, "golden update");
            store.insert(name, got);
            Ok(GoldenOutcome::Updated)
        }
        ComparisonMode::Compare => {
            let expected = store.get(name).ok_or_else(|| GoldenError::Missing {
                name: name.to_string(),
            })?;
            if *expected != got {
                return Err(GoldenError::Mismatch {
                    name: name.to_string(),
                    expected: expected.clone(),
                    got,
                });
            }
            debug!(name, entry = %got, "golden match");
            Ok(GoldenOutcome::Matched)
        }
    }
}
