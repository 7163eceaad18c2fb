//! The press/click state machine.
//!
//! A click fires only when touch-up lands inside the element's frame
//! (expanded by a tolerance margin) AND the element has not drifted
//! out from under the finger since touch-down. The drift check exists
//! to avoid accidental activation when the element scrolls away under
//! a steady finger. Both checks are conjunctive.

use crate::geometry::{Point, Rect};

/// Tolerances for click acceptance.
#[derive(Debug, Clone, Copy)]
pub struct PressConfig {
    /// Margin beyond the element frame still counted as "inside" at
    /// touch-up.
    pub bounds_tolerance: f32,
    /// Maximum movement of the element's center between touch-down and
    /// touch-up before the click is rejected.
    pub drift_tolerance: f32,
}

impl Default for PressConfig {
    fn default() -> Self {
        Self {
            bounds_tolerance: 10.0,
            drift_tolerance: 5.0,
        }
    }
}

/// Resting states of the recognizer.
///
/// "Clicked" is not a resting state: it is the transient outcome of a
/// successful `Pressing -> Idle` transition, reported through
/// [`PressResponse::clicked`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressPhase {
    /// No active gesture.
    Idle,
    /// A touch is down on the element.
    Pressing,
}

/// What one input event changed.
#[derive(Debug, Clone, Copy, Default)]
pub struct PressResponse {
    /// The continuous `is_pressed` observable flipped.
    pub press_changed: bool,
    /// A click fired on this event.
    pub clicked: bool,
}

/// Press recognizer for one interactive element.
///
/// One gesture sequence (`touch_down` .. `touch_up`/`touch_cancelled`)
/// at a time; redundant events are ignored without corrupting state.
#[derive(Debug, Clone)]
pub struct PressRecognizer {
    phase: PressPhase,
    config: PressConfig,
    /// Element frame captured at touch-down, used for both the bounds
    /// and the drift check at touch-up.
    start_frame: Option<Rect>,
}

impl PressRecognizer {
    /// Creates a recognizer with the given tolerances.
    #[must_use]
    pub const fn new(config: PressConfig) -> Self {
        Self {
            phase: PressPhase::Idle,
            config,
            start_frame: None,
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> PressPhase {
        self.phase
    }

    /// Continuous observable: true while a touch is down.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.phase == PressPhase::Pressing
    }

    /// Touch landed on the element whose frame is `frame`.
    pub fn touch_down(&mut self, frame: Rect) -> PressResponse {
        if self.phase == PressPhase::Pressing {
            return PressResponse::default();
        }
        self.phase = PressPhase::Pressing;
        self.start_frame = Some(frame);
        tracing::trace!("press began");
        PressResponse {
            press_changed: true,
            clicked: false,
        }
    }

    /// Touch lifted at `position`; `frame` is the element's frame now,
    /// which may have moved since touch-down.
    pub fn touch_up(&mut self, position: Point, frame: Rect) -> PressResponse {
        if self.phase == PressPhase::Idle {
            return PressResponse::default();
        }
        self.phase = PressPhase::Idle;
        let start = self.start_frame.take().unwrap_or(frame);

        let inside = start.expand(self.config.bounds_tolerance).contains(position);
        let drift = start.center().distance(frame.center());
        let steady = drift <= self.config.drift_tolerance;
        let clicked = inside && steady;

        tracing::trace!(inside, drift, clicked, "press ended");
        PressResponse {
            press_changed: true,
            clicked,
        }
    }

    /// The host cancelled the gesture (e.g. a scroll view claimed it).
    /// Never fires a click.
    pub fn touch_cancelled(&mut self) -> PressResponse {
        if self.phase == PressPhase::Idle {
            return PressResponse::default();
        }
        self.phase = PressPhase::Idle;
        self.start_frame = None;
        tracing::trace!("press cancelled");
        PressResponse {
            press_changed: true,
            clicked: false,
        }
    }
}

impl Default for PressRecognizer {
    fn default() -> Self {
        Self::new(PressConfig::default())
    }
}
