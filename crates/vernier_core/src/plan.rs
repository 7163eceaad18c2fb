//! Render plan assembly and layout escalation.
//!
//! The plan is recomputed from scratch on every selection change: it
//! is plain value data with no hidden state, so identical inputs
//! always produce bit-identical output.

use crate::config::IndicatorConfig;
use crate::offset::strip_offset;
use crate::region::Region;
use crate::window::{dot_scale, visible_index};

/// How the strip is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// All dots at full scale, no windowing, no offset.
    Standard,
    /// A fixed-size window of dots with shrinking edges and a strip
    /// offset that keeps the selection centered.
    Windowed,
}

impl LayoutMode {
    /// Default total-count threshold for escalating to windowed layout.
    pub const DEFAULT_STANDARD_LIMIT: usize = 10;

    /// Picks the layout for `total` dots: [`LayoutMode::Standard`] up
    /// to and including `standard_limit`, [`LayoutMode::Windowed`]
    /// above it.
    #[must_use]
    pub const fn choose(total: usize, standard_limit: usize) -> Self {
        if total <= standard_limit {
            Self::Standard
        } else {
            Self::Windowed
        }
    }
}

/// Per-dot output of the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotRender {
    /// Absolute dot index.
    pub index: usize,
    /// Scale transform for this dot.
    pub scale: f32,
    /// Whether the dot lies inside the visible window.
    pub in_window: bool,
}

/// Complete layout output for one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    /// Layout the escalation selector picked.
    pub mode: LayoutMode,
    /// Shared strip offset along the primary axis.
    pub offset: f32,
    /// One entry per dot, in index order.
    pub dots: Vec<DotRender>,
}

impl RenderPlan {
    /// Computes the plan for the current selection.
    ///
    /// `selection` must be `< total` whenever `total > 0`. The engine
    /// does not clamp: masking an out-of-range selection here would
    /// hide caller bugs, so callers clamp before invoking.
    #[must_use]
    pub fn compute(config: &IndicatorConfig, selection: usize, standard_limit: usize) -> Self {
        debug_assert!(
            config.total == 0 || selection < config.total,
            "selection {selection} out of range for total {}",
            config.total
        );
        let mode = LayoutMode::choose(config.total, standard_limit);
        match mode {
            LayoutMode::Standard => Self {
                mode,
                offset: 0.0,
                dots: (0..config.total)
                    .map(|index| DotRender {
                        index,
                        scale: 1.0,
                        in_window: true,
                    })
                    .collect(),
            },
            LayoutMode::Windowed => {
                let region = Region::classify(selection, config.total, config.middle_count());
                let dots = (0..config.total)
                    .map(|index| DotRender {
                        index,
                        scale: dot_scale(index, region, selection, config),
                        in_window: visible_index(index, region, selection, config).is_some(),
                    })
                    .collect();
                Self {
                    mode,
                    offset: strip_offset(region, selection, config),
                    dots,
                }
            }
        }
    }
}
