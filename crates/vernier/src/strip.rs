//! Animated indicator strip controller.
//!
//! Owns the current selection, clamps it (the engine deliberately does
//! not), eases the strip offset between selections, and applies the
//! configured direction at the rendering boundary — the engine itself
//! always works in canonical forward orientation.

use vernier_core::offset::strip_offset;
use vernier_core::{ConfigResult, IndicatorConfig, LayoutMode, Region, RenderPlan};

use crate::animation::{Animation, Easing};

/// Primary-axis direction of the rendered strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Leading-to-trailing (left-to-right, top-to-bottom).
    #[default]
    Forward,
    /// Trailing-to-leading; the strip offset is negated at the
    /// boundary.
    Reverse,
}

/// Stateful controller around the pure layout engine.
#[derive(Debug, Clone)]
pub struct IndicatorStrip {
    config: IndicatorConfig,
    standard_limit: usize,
    direction: Direction,
    selection: usize,
    offset: Animation,
}

impl IndicatorStrip {
    /// Creates a strip for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns the configuration's validation error, re-checked here so
    /// a hand-built struct cannot smuggle in an invalid window.
    pub fn new(config: IndicatorConfig, standard_limit: usize) -> ConfigResult<Self> {
        config.validate()?;
        let mut strip = Self {
            config,
            standard_limit,
            direction: Direction::Forward,
            selection: 0,
            offset: Animation::new(0.0, Easing::ExponentialOut),
        };
        strip.offset.set_immediate(strip.raw_offset());
        Ok(strip)
    }

    /// Sets the rendered direction.
    #[must_use]
    pub const fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Current selection index.
    #[must_use]
    pub const fn selection(&self) -> usize {
        self.selection
    }

    /// Layout mode the escalation selector currently picks.
    #[must_use]
    pub const fn mode(&self) -> LayoutMode {
        LayoutMode::choose(self.config.total, self.standard_limit)
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    /// Updates the total dot count, re-clamping the selection and
    /// re-evaluating escalation.
    pub fn set_total(&mut self, total: usize) {
        let old_mode = self.mode();
        self.config.total = total;
        self.selection = self.selection.min(total.saturating_sub(1));
        let new_mode = self.mode();
        if new_mode != old_mode {
            tracing::debug!(total, ?new_mode, "indicator layout switched");
        }
        self.offset.set_target(self.raw_offset());
    }

    /// Selects a dot, clamped to the strip. The offset eases toward the
    /// new window position.
    pub fn select(&mut self, index: usize) {
        let clamped = index.min(self.config.total.saturating_sub(1));
        if clamped == self.selection {
            return;
        }
        tracing::trace!(from = self.selection, to = clamped, "selection moved");
        self.selection = clamped;
        self.offset.set_target(self.raw_offset());
    }

    /// Advances the offset animation by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.offset.update(dt);
    }

    /// Returns true while the offset is still easing.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.offset.is_complete()
    }

    /// Computes the render plan for this frame: engine scales, the
    /// animated offset, and the direction sign applied last.
    #[must_use]
    pub fn plan(&self) -> RenderPlan {
        let mut plan = RenderPlan::compute(&self.config, self.selection, self.standard_limit);
        plan.offset = self.offset.value();
        if self.direction == Direction::Reverse {
            plan.offset = -plan.offset;
        }
        plan
    }

    /// Settled (non-animated) offset for the current selection, in
    /// canonical forward orientation.
    fn raw_offset(&self) -> f32 {
        match self.mode() {
            LayoutMode::Standard => 0.0,
            LayoutMode::Windowed => {
                let region = Region::classify(
                    self.selection,
                    self.config.total,
                    self.config.middle_count(),
                );
                strip_offset(region, self.selection, &self.config)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(total: usize) -> IndicatorStrip {
        let config = IndicatorConfig::new(total, 7, 3).unwrap();
        IndicatorStrip::new(config, LayoutMode::DEFAULT_STANDARD_LIMIT).unwrap()
    }

    fn settle(strip: &mut IndicatorStrip) {
        for _ in 0..120 {
            strip.update(0.016);
        }
    }

    #[test]
    fn test_invalid_config_is_refused() {
        let config = IndicatorConfig {
            visible_count: 6,
            ..IndicatorConfig::default()
        };
        assert!(IndicatorStrip::new(config, 10).is_err());
    }

    #[test]
    fn test_selection_clamps_to_total() {
        let mut strip = strip(20);
        strip.select(250);
        assert_eq!(strip.selection(), 19);
    }

    #[test]
    fn test_offset_eases_to_engine_value() {
        let mut strip = strip(20);
        strip.select(10);
        assert!(strip.is_animating());
        settle(&mut strip);

        let expected =
            RenderPlan::compute(strip.config(), 10, LayoutMode::DEFAULT_STANDARD_LIMIT).offset;
        assert!((strip.plan().offset - expected).abs() < 0.01);
    }

    #[test]
    fn test_reverse_direction_negates_offset() {
        let mut forward = strip(20);
        let mut reverse = strip(20).with_direction(Direction::Reverse);
        forward.select(0);
        reverse.select(0);
        settle(&mut forward);
        settle(&mut reverse);
        assert!((forward.plan().offset + reverse.plan().offset).abs() < 0.01);
    }

    #[test]
    fn test_shrinking_total_reclamps_and_deescalates() {
        let mut strip = strip(20);
        strip.select(19);
        assert_eq!(strip.mode(), LayoutMode::Windowed);

        strip.set_total(5);
        assert_eq!(strip.selection(), 4);
        assert_eq!(strip.mode(), LayoutMode::Standard);
        settle(&mut strip);
        assert!(strip.plan().offset.abs() < 0.01);
    }

    #[test]
    fn test_empty_strip_is_harmless() {
        let mut strip = strip(0);
        strip.select(3);
        assert_eq!(strip.selection(), 0);
        assert!(strip.plan().dots.is_empty());
    }
}
