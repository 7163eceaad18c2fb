//! # Configuration Error Types
//!
//! All errors are configuration errors: the layout math itself is total
//! over every validated configuration, so nothing downstream can fail.

use thiserror::Error;

/// Errors rejected when constructing an [`crate::IndicatorConfig`].
///
/// These are fatal by design. An even window size or an inverted
/// `visible`/`center` ordering makes the scale formulas meaningless
/// (the side band would be empty), so construction refuses the value
/// instead of degrading at render time.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A window count that must be odd was even.
    #[error("{field} must be odd, got {value}")]
    EvenWindow {
        /// Which field failed the parity check.
        field: &'static str,
        /// The rejected value.
        value: usize,
    },

    /// `center_count` must be strictly smaller than `visible_count`.
    #[error("center_count ({center_count}) must be less than visible_count ({visible_count})")]
    WindowOrder {
        /// The configured visible window size.
        visible_count: usize,
        /// The configured center band size.
        center_count: usize,
    },

    /// Dot extent must be positive.
    #[error("dot_extent must be > 0, got {0}")]
    NonPositiveDotExtent(f32),

    /// Spacing must not be negative.
    #[error("spacing must be >= 0, got {0}")]
    NegativeSpacing(f32),

    /// Edge scale must lie in (0, 1].
    #[error("edge_scale must be in (0, 1], got {0}")]
    EdgeScaleOutOfRange(f32),

    /// Configuration file could not be parsed.
    #[error("invalid configuration: {0}")]
    Toml(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
