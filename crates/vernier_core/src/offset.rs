//! Offset calculator: keeps the visible window over the selection.

use crate::config::IndicatorConfig;
use crate::region::Region;

/// Offset for the whole strip along the primary axis.
///
/// The strip is laid out centered, so shifting it by half the hidden
/// extent (`raw`) pins the window to either edge; in the `Center`
/// region an incremental per-selection term walks the window across
/// the strip one dot pitch at a time.
///
/// The result is in canonical forward orientation. Callers rendering
/// in a reversed direction (right-to-left, bottom-to-top) negate it at
/// the rendering boundary; this function never does.
#[must_use]
pub fn strip_offset(region: Region, selection: usize, config: &IndicatorConfig) -> f32 {
    let raw = (config.total_extent() - config.visible_extent()) / 2.0;
    match region {
        Region::Start => raw,
        Region::End => -raw,
        Region::Center => {
            let pitch = config.dot_extent + config.spacing;
            raw - (selection as f32 - config.middle_count() as f32) * pitch
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> IndicatorConfig {
        IndicatorConfig::new(20, 7, 3).unwrap()
    }

    #[test]
    fn test_edge_offsets_are_opposite() {
        let config = config();
        let start = strip_offset(Region::Start, 0, &config);
        let end = strip_offset(Region::End, 19, &config);
        assert!(start > 0.0);
        assert!(end < 0.0);
        assert!((start + end).abs() < 1e-6);
    }

    #[test]
    fn test_center_at_natural_middle_equals_raw() {
        let config = config();
        let raw = (config.total_extent() - config.visible_extent()) / 2.0;
        let offset = strip_offset(Region::Center, config.middle_count(), &config);
        assert!((offset - raw).abs() < 1e-6);
    }

    #[test]
    fn test_center_walks_one_pitch_per_dot() {
        let config = config();
        let pitch = config.dot_extent + config.spacing;
        let at_5 = strip_offset(Region::Center, 5, &config);
        let at_6 = strip_offset(Region::Center, 6, &config);
        assert!((at_5 - at_6 - pitch).abs() < 1e-6);
    }
}
