//! Regression harness for linimg.
//!
//! - [`fixtures`] - Synthetic inputs (ascii patterns, hemisphere maps)
//! - [`scenarios`] - Named regression scenes built from `linimg-ops`
//! - [`golden`] - Hash store with explicit skip / compare / update modes
//!
//! The `linimg-golden` binary drives all scenes against a reference
//! directory:
//!
//! ```bash
//! linimg-golden update tests/golden
//! linimg-golden compare tests/golden
//! ```

pub mod fixtures;
pub mod golden;
pub mod scenarios;

pub use golden::{
    ComparisonMode, GoldenConfig, GoldenEntry, GoldenError, GoldenOutcome, GoldenResult,
    GoldenStore, update_or_compare,
};
pub use scenarios::Scenario;
