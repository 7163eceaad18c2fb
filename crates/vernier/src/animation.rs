//! Offset animation for selection changes.
//!
//! The engine itself is pure and stateless; when the selection moves,
//! the strip offset jumps to a new value. This module eases that jump
//! so the window appears to slide. A zero duration degenerates to an
//! immediate snap, so "no animation" needs no special easing variant.

/// Easing function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation.
    Linear,
    /// Exponential ease-out: fast departure, soft arrival.
    #[default]
    ExponentialOut,
}

impl Easing {
    /// Applies the easing function to a progress value in `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::ExponentialOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f32.powf(-10.0 * t)
                }
            }
        }
    }
}

/// A single eased scalar value.
///
/// Tracks elapsed time against a fixed duration; retargeting restarts
/// the clock from the value the animation had reached, never from the
/// old target.
#[derive(Debug, Clone)]
pub struct Animation {
    current: f32,
    target: f32,
    start: f32,
    elapsed: f32,
    duration: f32,
    easing: Easing,
}

impl Animation {
    /// Default animation duration in seconds.
    pub const DEFAULT_DURATION: f32 = 0.2;

    /// Creates an animation resting at `value`.
    #[must_use]
    pub fn new(value: f32, easing: Easing) -> Self {
        Self {
            current: value,
            target: value,
            start: value,
            elapsed: Self::DEFAULT_DURATION,
            duration: Self::DEFAULT_DURATION,
            easing,
        }
    }

    /// Sets a custom duration in seconds. Zero means every retarget
    /// snaps immediately.
    #[must_use]
    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration.max(0.0);
        self.elapsed = self.duration;
        self
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.current
    }

    /// Returns true once the target has been reached.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Retargets the animation, easing from the current value. With a
    /// zero duration this is equivalent to [`Animation::set_immediate`].
    pub fn set_target(&mut self, target: f32) {
        if (target - self.target).abs() <= f32::EPSILON {
            return;
        }
        if self.duration <= 0.0 {
            self.set_immediate(target);
            return;
        }
        self.start = self.current;
        self.target = target;
        self.elapsed = 0.0;
    }

    /// Jumps to `value` with no animation.
    pub fn set_immediate(&mut self, value: f32) {
        self.current = value;
        self.target = value;
        self.start = value;
        self.elapsed = self.duration;
    }

    /// Advances the animation clock by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if self.is_complete() {
            return;
        }
        self.elapsed = (self.elapsed + dt).min(self.duration);
        if self.is_complete() {
            self.current = self.target;
            return;
        }
        let eased = self.easing.apply(self.elapsed / self.duration);
        self.current = self.start + (self.target - self.start) * eased;
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::new(0.0, Easing::ExponentialOut)
    }
}
