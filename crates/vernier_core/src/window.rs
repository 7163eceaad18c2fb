//! Windowing engine: which dots are visible and at what scale.
//!
//! Scale ramps linearly from `edge_scale` at the outermost visible dot
//! up to `1.0` at the center band, in `side_count` equal steps. The
//! `End` and `Center` regions share the exact same edge formula; the
//! `Start` region uses its historical mirrored form, which is preserved
//! as-is for behavioral fidelity.

use crate::config::IndicatorConfig;
use crate::region::Region;

/// Maps an absolute dot index to its slot in the visible window.
///
/// Returns `None` when the dot lies outside the window and should not
/// be rendered at all.
#[must_use]
pub fn visible_index(
    index: usize,
    region: Region,
    selection: usize,
    config: &IndicatorConfig,
) -> Option<usize> {
    let visible = config.visible_count;
    match region {
        Region::Start => (index < visible).then_some(index),
        Region::End => {
            let window_start = config.total.saturating_sub(visible);
            (index >= window_start && index < config.total).then(|| index - window_start)
        }
        Region::Center => {
            // The window is centered on the selection: it starts
            // side_count + 1 dots before it.
            let window_start = selection as isize - config.side_count() as isize - 1;
            let slot = index as isize - window_start;
            (0..visible as isize)
                .contains(&slot)
                .then(|| slot as usize)
        }
    }
}

/// Scale factor for the dot at `index`.
///
/// Dots outside the visible window report `1.0` (the no-effect
/// convention); callers decide visibility through [`visible_index`].
#[must_use]
pub fn dot_scale(
    index: usize,
    region: Region,
    selection: usize,
    config: &IndicatorConfig,
) -> f32 {
    let Some(slot) = visible_index(index, region, selection, config) else {
        return 1.0;
    };
    let visible = config.visible_count;
    let side = config.side_count();
    let step = config.edge_scale / side as f32;
    match region {
        Region::Start => {
            if slot >= visible - side {
                let j = side + slot - visible;
                1.0 - (j + 1) as f32 * step
            } else {
                1.0
            }
        }
        Region::End => {
            if slot < side {
                config.edge_scale + slot as f32 * step
            } else {
                1.0
            }
        }
        Region::Center => {
            if slot < side {
                config.edge_scale + slot as f32 * step
            } else if slot >= visible - side {
                let j = visible - slot - 1;
                config.edge_scale + j as f32 * step
            } else {
                1.0
            }
        }
    }
}
