use std::time::Duration;

use crate::foundation::error::{TimelineError, TimelineResult};

/// Normalized scroll position: `0` at page top, `1` at page bottom.
///
/// Construction always clamps, so a `Progress` is never outside `[0, 1]` and never NaN.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Progress(f64);

impl Progress {
    /// Page top.
    pub const START: Self = Self(0.0);
    /// Page bottom.
    pub const END: Self = Self(1.0);

    /// Clamp `value` into `[0, 1]`; NaN maps to `0`.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::START;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Raw scalar value.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<f64> for Progress {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Progress> for f64 {
    fn from(p: Progress) -> Self {
        p.0
    }
}

/// Monotonic frame counter supplied by the host's frame clock.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

impl FrameIndex {
    /// Following frame (saturating).
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

/// One tick of the host frame clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameTick {
    /// Index of the frame being produced.
    pub index: FrameIndex,
    /// Wall time elapsed since the previous tick.
    pub dt: Duration,
}

impl FrameTick {
    /// Tick for `index` with an explicit frame interval.
    pub fn new(index: FrameIndex, dt: Duration) -> Self {
        Self { index, dt }
    }

    /// Tick at a fixed frame rate (`fps` > 0).
    pub fn at_rate(index: u64, fps: u32) -> TimelineResult<Self> {
        if fps == 0 {
            return Err(TimelineError::validation("frame rate must be > 0"));
        }
        Ok(Self {
            index: FrameIndex(index),
            dt: Duration::from_secs(1) / fps,
        })
    }
}

/// Scroll metrics reported by the hosting page.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollMetrics {
    /// Current scroll offset in pixels.
    pub offset: f64,
    /// Total height of the scrolled document.
    pub content_height: f64,
    /// Height of the visible viewport.
    pub viewport_height: f64,
}

impl ScrollMetrics {
    /// Metrics for a page that is `page_height_viewports` viewports tall.
    pub fn for_page(offset: f64, viewport_height: f64, page_height_viewports: f64) -> Self {
        Self {
            offset,
            content_height: viewport_height * page_height_viewports,
            viewport_height,
        }
    }

    /// Distance the page can actually scroll. May be `<= 0` on short pages.
    pub fn scrollable_height(self) -> f64 {
        self.content_height - self.viewport_height
    }
}

/// Externally measured heights of a scrolling content list and its viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ContentExtent {
    /// Full height of the content.
    pub content_height: f64,
    /// Height of the clipping viewport.
    pub viewport_height: f64,
}

impl ContentExtent {
    /// Build an extent, rejecting negative or non-finite heights.
    pub fn new(content_height: f64, viewport_height: f64) -> TimelineResult<Self> {
        for (name, v) in [
            ("content_height", content_height),
            ("viewport_height", viewport_height),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(TimelineError::validation(format!(
                    "{name} must be finite and >= 0, got {v}"
                )));
            }
        }
        Ok(Self {
            content_height,
            viewport_height,
        })
    }

    /// How far the content can travel upward; never negative.
    pub fn max_scroll(self) -> f64 {
        (self.content_height - self.viewport_height).max(0.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
