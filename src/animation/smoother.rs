use crate::foundation::error::{TimelineError, TimelineResult};
use crate::foundation::math::lerp;

/// Default per-frame smoothing factor.
pub const DEFAULT_SMOOTHING: f64 = 0.12;
/// Default distance under which the displayed value snaps onto its target.
pub const DEFAULT_SNAP_EPSILON: f64 = 1e-4;

/// Fraction of the remaining distance covered per frame. Always in `(0, 1)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(into = "f64")]
pub struct Smoothing(f64);

impl Smoothing {
    /// Validate a smoothing factor.
    pub fn new(factor: f64) -> TimelineResult<Self> {
        if factor.is_nan() || factor <= 0.0 || factor >= 1.0 {
            return Err(TimelineError::validation(format!(
                "smoothing must be in (0, 1), got {factor}"
            )));
        }
        Ok(Self(factor))
    }

    /// Raw factor.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for Smoothing {
    fn default() -> Self {
        Self(DEFAULT_SMOOTHING)
    }
}

impl From<Smoothing> for f64 {
    fn from(s: Smoothing) -> Self {
        s.0
    }
}

impl<'de> serde::Deserialize<'de> for Smoothing {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = f64::deserialize(d)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

/// A displayed scalar trailing a target value frame by frame.
///
/// Each [`tick`](Self::tick) moves `display` a fixed fraction of the way toward `target`
/// and snaps once the gap drops below `epsilon`, so the approach terminates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Smoother {
    target: f64,
    display: f64,
    smoothing: Smoothing,
    epsilon: f64,
}

impl Smoother {
    /// Start settled at `initial_target`; there is no approach from zero on load.
    ///
    /// A non-positive or non-finite `epsilon` falls back to [`DEFAULT_SNAP_EPSILON`]:
    /// without a snap the lerp stalls a few ULPs short of the target and never settles.
    pub fn new(initial_target: f64, smoothing: Smoothing, epsilon: f64) -> Self {
        let epsilon = if epsilon.is_finite() && epsilon > 0.0 {
            epsilon
        } else {
            DEFAULT_SNAP_EPSILON
        };
        Self {
            target: initial_target,
            display: initial_target,
            smoothing,
            epsilon,
        }
    }

    /// Start from an explicit displayed value (used when restoring a view mid-approach).
    pub fn with_display(mut self, display: f64) -> Self {
        self.display = display;
        self
    }

    /// Value the display is converging toward.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Current displayed value.
    pub fn display(&self) -> f64 {
        self.display
    }

    /// Replace the target. The display keeps its position.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Advance one frame and return the new displayed value.
    pub fn tick(&mut self) -> f64 {
        if self.is_settled() {
            return self.display;
        }
        self.display = lerp(self.display, self.target, self.smoothing.get());
        if (self.target - self.display).abs() < self.epsilon {
            tracing::trace!(value = self.target, "smoother snapped");
            self.display = self.target;
        }
        self.display
    }

    /// Jump the display straight onto the target.
    pub fn snap(&mut self) {
        self.display = self.target;
    }

    /// True once display equals target; further ticks are no-ops.
    pub fn is_settled(&self) -> bool {
        self.display == self.target
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/smoother.rs"]
mod tests;
