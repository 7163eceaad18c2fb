//! Indicator configuration.
//!
//! One immutable value struct holds every knob the engine reads. It is
//! validated eagerly at construction and then passed around by value;
//! there is no global default singleton beyond [`Default`].

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Configuration for a windowed page indicator strip.
///
/// Invariants, enforced by [`IndicatorConfig::validate`]:
/// - `visible_count` and `center_count` are both odd,
/// - `center_count < visible_count` (so the side band is never empty),
/// - `dot_extent > 0`, `spacing >= 0`, `edge_scale` in `(0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    /// Total number of dots in the strip.
    pub total: usize,
    /// Number of dots shown in the windowed view. Must be odd and
    /// greater than `center_count`.
    pub visible_count: usize,
    /// Number of dots in the fully scaled center band. Must be odd and
    /// less than `visible_count`.
    pub center_count: usize,
    /// Size of one dot along the primary axis.
    pub dot_extent: f32,
    /// Gap between adjacent dots.
    pub spacing: f32,
    /// Scale of the dot at the extreme edge of the window, in (0, 1].
    pub edge_scale: f32,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            total: 0,
            visible_count: 7,
            center_count: 3,
            dot_extent: 8.0,
            spacing: 8.0,
            edge_scale: 0.5,
        }
    }
}

impl IndicatorConfig {
    /// Creates a validated configuration with default metrics.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the window counts violate the
    /// parity or ordering invariants.
    pub fn new(total: usize, visible_count: usize, center_count: usize) -> ConfigResult<Self> {
        Self {
            total,
            visible_count,
            center_count,
            ..Self::default()
        }
        .validated()
    }

    /// Returns the configuration with a new dot extent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonPositiveDotExtent`] for extents `<= 0`.
    pub fn with_dot_extent(mut self, dot_extent: f32) -> ConfigResult<Self> {
        self.dot_extent = dot_extent;
        self.validated()
    }

    /// Returns the configuration with a new inter-dot spacing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NegativeSpacing`] for negative spacing.
    pub fn with_spacing(mut self, spacing: f32) -> ConfigResult<Self> {
        self.spacing = spacing;
        self.validated()
    }

    /// Returns the configuration with a new edge scale.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EdgeScaleOutOfRange`] for values outside
    /// `(0, 1]`.
    pub fn with_edge_scale(mut self, edge_scale: f32) -> ConfigResult<Self> {
        self.edge_scale = edge_scale;
        self.validated()
    }

    /// Loads and validates a configuration from a TOML document.
    ///
    /// Missing fields fall back to their [`Default`] values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] on parse failure, or any
    /// validation error the parsed value would trigger.
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| ConfigError::Toml(e.to_string()))?;
        config.validated()
    }

    /// Consuming form of [`IndicatorConfig::validate`] used by the
    /// constructors: returns the value itself once it passes.
    fn validated(self) -> ConfigResult<Self> {
        self.validate()?;
        Ok(self)
    }

    /// Checks every construction invariant.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.visible_count % 2 == 0 {
            return Err(Self::reject(ConfigError::EvenWindow {
                field: "visible_count",
                value: self.visible_count,
            }));
        }
        if self.center_count % 2 == 0 {
            return Err(Self::reject(ConfigError::EvenWindow {
                field: "center_count",
                value: self.center_count,
            }));
        }
        if self.center_count >= self.visible_count {
            return Err(Self::reject(ConfigError::WindowOrder {
                visible_count: self.visible_count,
                center_count: self.center_count,
            }));
        }
        // NaN metrics are rejected alongside out-of-range ones.
        if self.dot_extent.is_nan() || self.dot_extent <= 0.0 {
            return Err(Self::reject(ConfigError::NonPositiveDotExtent(self.dot_extent)));
        }
        if self.spacing.is_nan() || self.spacing < 0.0 {
            return Err(Self::reject(ConfigError::NegativeSpacing(self.spacing)));
        }
        if self.edge_scale.is_nan() || self.edge_scale <= 0.0 || self.edge_scale > 1.0 {
            return Err(Self::reject(ConfigError::EdgeScaleOutOfRange(self.edge_scale)));
        }
        Ok(())
    }

    /// Dots on each side of the center band that shrink toward the
    /// window edge. Always `>= 1` for a validated configuration.
    #[must_use]
    pub const fn side_count(&self) -> usize {
        (self.visible_count - self.center_count) / 2
    }

    /// Index distance from the window edge to its middle dot.
    #[must_use]
    pub const fn middle_count(&self) -> usize {
        self.visible_count / 2
    }

    /// Extent of the visible window along the primary axis.
    #[must_use]
    pub fn visible_extent(&self) -> f32 {
        Self::extent_of(self.visible_count, self.dot_extent, self.spacing)
    }

    /// Extent of the full strip along the primary axis.
    #[must_use]
    pub fn total_extent(&self) -> f32 {
        Self::extent_of(self.total, self.dot_extent, self.spacing)
    }

    fn extent_of(count: usize, dot_extent: f32, spacing: f32) -> f32 {
        count as f32 * dot_extent + count.saturating_sub(1) as f32 * spacing
    }

    fn reject(error: ConfigError) -> ConfigError {
        tracing::warn!("rejected indicator configuration: {error}");
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(IndicatorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_even_visible_count_rejected() {
        let err = IndicatorConfig::new(20, 6, 3).unwrap_err();
        assert_eq!(
            err,
            ConfigError::EvenWindow {
                field: "visible_count",
                value: 6
            }
        );
    }

    #[test]
    fn test_even_center_count_rejected() {
        let err = IndicatorConfig::new(20, 7, 2).unwrap_err();
        assert_eq!(
            err,
            ConfigError::EvenWindow {
                field: "center_count",
                value: 2
            }
        );
    }

    #[test]
    fn test_center_must_be_smaller_than_visible() {
        let err = IndicatorConfig::new(20, 7, 7).unwrap_err();
        assert_eq!(
            err,
            ConfigError::WindowOrder {
                visible_count: 7,
                center_count: 7
            }
        );
    }

    #[test]
    fn test_metric_bounds() {
        let config = IndicatorConfig::new(20, 7, 3).unwrap();
        assert!(config.with_dot_extent(0.0).is_err());
        assert!(config.with_spacing(-1.0).is_err());
        assert!(config.with_edge_scale(0.0).is_err());
        assert!(config.with_edge_scale(1.5).is_err());
        assert!(config.with_edge_scale(1.0).is_ok());
        assert!(config.with_spacing(0.0).is_ok());
    }

    #[test]
    fn test_builder_chain_returns_validated_value() {
        // Every constructor and builder funnels through the same
        // consuming validation; a valid chain hands the value back
        // with all fields applied.
        let config = IndicatorConfig::new(12, 9, 3)
            .unwrap()
            .with_dot_extent(6.0)
            .unwrap()
            .with_spacing(4.0)
            .unwrap()
            .with_edge_scale(0.25)
            .unwrap();
        assert_eq!(config.total, 12);
        assert_eq!(config.visible_count, 9);
        assert!((config.dot_extent - 6.0).abs() < f32::EPSILON);
        assert!((config.spacing - 4.0).abs() < f32::EPSILON);
        assert!((config.edge_scale - 0.25).abs() < f32::EPSILON);
    }

    #[test]
    fn test_derived_counts() {
        let config = IndicatorConfig::new(20, 7, 3).unwrap();
        assert_eq!(config.side_count(), 2);
        assert_eq!(config.middle_count(), 3);
    }

    #[test]
    fn test_extents() {
        let config = IndicatorConfig::new(9, 7, 3).unwrap();
        // 7 dots of 8.0 with 6 gaps of 8.0
        assert!((config.visible_extent() - 104.0).abs() < f32::EPSILON);
        // 9 dots of 8.0 with 8 gaps of 8.0
        assert!((config.total_extent() - 136.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_zero_total_extent() {
        let config = IndicatorConfig::new(0, 7, 3).unwrap();
        assert!(config.total_extent().abs() < f32::EPSILON);
    }

    #[test]
    fn test_from_toml() {
        let config = IndicatorConfig::from_toml_str(
            "total = 24\nvisible_count = 9\ncenter_count = 5\nedge_scale = 0.4\n",
        )
        .unwrap();
        assert_eq!(config.total, 24);
        assert_eq!(config.visible_count, 9);
        assert_eq!(config.center_count, 5);
        // Unlisted fields fall back to defaults.
        assert!((config.dot_extent - 8.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_from_toml_rejects_invalid() {
        assert!(matches!(
            IndicatorConfig::from_toml_str("visible_count = ["),
            Err(ConfigError::Toml(_))
        ));
        assert!(matches!(
            IndicatorConfig::from_toml_str("visible_count = 4\n"),
            Err(ConfigError::EvenWindow { .. })
        ));
    }
}
