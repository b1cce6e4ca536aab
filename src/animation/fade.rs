use crate::foundation::core::Progress;
use crate::foundation::error::{TimelineError, TimelineResult};
use crate::foundation::math::clamp01;

/// Four scroll-progress breakpoints controlling one section's visibility.
///
/// Invariant: every point is finite, inside `[0, 1]`, and
/// `fade_in_start <= fade_in_end <= fade_out_start <= fade_out_end`.
/// Windows of different sections may overlap; that is how crossfades happen.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FadeWindow {
    fade_in_start: f64,
    fade_in_end: f64,
    fade_out_start: f64,
    fade_out_end: f64,
}

/// Where progress sits relative to a [`FadeWindow`]. Always recomputed, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionPhase {
    /// Before `fade_in_start` or after `fade_out_end`.
    Hidden,
    /// On the fade-in ramp.
    FadingIn,
    /// Between `fade_in_end` and `fade_out_start` inclusive.
    Visible,
    /// On the fade-out ramp.
    FadingOut,
}

impl FadeWindow {
    /// Build a window, validating range and ordering.
    pub fn new(
        fade_in_start: f64,
        fade_in_end: f64,
        fade_out_start: f64,
        fade_out_end: f64,
    ) -> TimelineResult<Self> {
        let points = [fade_in_start, fade_in_end, fade_out_start, fade_out_end];
        if let Some(bad) = points
            .iter()
            .find(|p| !p.is_finite() || **p < 0.0 || **p > 1.0)
        {
            return Err(TimelineError::schedule(format!(
                "fade window point {bad} is outside [0, 1]"
            )));
        }
        if !points.windows(2).all(|w| w[0] <= w[1]) {
            return Err(TimelineError::schedule(format!(
                "fade window points must be ordered, got {points:?}"
            )));
        }
        Ok(Self {
            fade_in_start,
            fade_in_end,
            fade_out_start,
            fade_out_end,
        })
    }

    /// Symmetric shorthand: fully visible from `trigger` for `visible`, with `fade`-long
    /// ramps on both sides. `trigger` itself must lie in `[0, 1]`; derived points falling
    /// off the page are clamped into it.
    pub fn from_trigger(trigger: f64, visible: f64, fade: f64) -> TimelineResult<Self> {
        if !trigger.is_finite() || !(0.0..=1.0).contains(&trigger) {
            return Err(TimelineError::schedule(format!(
                "trigger {trigger} is outside [0, 1]"
            )));
        }
        if visible.is_nan() || fade.is_nan() || visible < 0.0 || fade < 0.0 {
            return Err(TimelineError::schedule(format!(
                "trigger shorthand needs visible >= 0 and fade >= 0, got visible={visible} fade={fade}"
            )));
        }
        Self::new(
            clamp01(trigger - fade),
            clamp01(trigger),
            clamp01(trigger + visible),
            clamp01(trigger + visible + fade),
        )
    }

    /// Visible from the top of the page, fading out between `start` and `end`.
    pub fn fade_out_only(start: f64, end: f64) -> TimelineResult<Self> {
        Self::new(0.0, 0.0, start, end)
    }

    /// Fades in between `start` and `end`, then stays visible to the bottom.
    pub fn fade_in_only(start: f64, end: f64) -> TimelineResult<Self> {
        Self::new(start, end, 1.0, 1.0)
    }

    /// First point of the fade-in ramp.
    pub fn fade_in_start(&self) -> f64 {
        self.fade_in_start
    }

    /// Point at which the section becomes fully visible.
    pub fn fade_in_end(&self) -> f64 {
        self.fade_in_end
    }

    /// Point at which the section starts fading out.
    pub fn fade_out_start(&self) -> f64 {
        self.fade_out_start
    }

    /// Point at which the section is fully hidden again.
    pub fn fade_out_end(&self) -> f64 {
        self.fade_out_end
    }

    /// Opacity of this window at `progress`. See [`opacity`].
    pub fn opacity(&self, progress: Progress) -> f64 {
        opacity(progress, self)
    }

    /// Phase of this window at `progress`.
    pub fn phase(&self, progress: Progress) -> SectionPhase {
        let p = progress.get();
        if p < self.fade_in_start || p > self.fade_out_end {
            SectionPhase::Hidden
        } else if p >= self.fade_in_end && p <= self.fade_out_start {
            SectionPhase::Visible
        } else if p < self.fade_in_end {
            SectionPhase::FadingIn
        } else {
            SectionPhase::FadingOut
        }
    }
}

/// Opacity in `[0, 1]` for `progress` under `window`.
///
/// Zero outside the window, one on the plateau, linear on the ramps. A zero-length
/// ramp returns `1` rather than dividing by zero.
pub fn opacity(progress: Progress, window: &FadeWindow) -> f64 {
    let p = progress.get();
    match window.phase(progress) {
        SectionPhase::Hidden => 0.0,
        SectionPhase::Visible => 1.0,
        SectionPhase::FadingIn => {
            let span = window.fade_in_end - window.fade_in_start;
            if span <= 0.0 {
                return 1.0;
            }
            clamp01((p - window.fade_in_start) / span)
        }
        SectionPhase::FadingOut => {
            let span = window.fade_out_end - window.fade_out_start;
            if span <= 0.0 {
                return 1.0;
            }
            clamp01(1.0 - (p - window.fade_out_start) / span)
        }
    }
}

#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct FadeWindowDef {
    fade_in_start: f64,
    fade_in_end: f64,
    fade_out_start: f64,
    fade_out_end: f64,
}

impl<'de> serde::Deserialize<'de> for FadeWindow {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let def = FadeWindowDef::deserialize(d)?;
        FadeWindow::new(
            def.fade_in_start,
            def.fade_in_end,
            def.fade_out_start,
            def.fade_out_end,
        )
        .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/fade.rs"]
mod tests;
