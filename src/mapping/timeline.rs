use crate::foundation::core::{ContentExtent, Progress};
use crate::foundation::error::TimelineResult;
use crate::foundation::math::unlerp;
use crate::mapping::zoom::check_span;

/// Maps progress to the vertical offset of the career timeline list.
///
/// The list rests at `0` before `start` and has scrolled its full overflow
/// (`-(content - viewport)`) by `end`. Heights come from the layout layer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TimelineMapper {
    start: f64,
    end: f64,
}

impl TimelineMapper {
    /// Validate and build a scroll window.
    pub fn new(start: f64, end: f64) -> TimelineResult<Self> {
        check_span("timeline", start, end)?;
        Ok(Self { start, end })
    }

    /// Progress at which the list starts moving.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Progress at which the list reaches its last item.
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Fraction of the travel completed at `progress`.
    pub fn travel(&self, progress: Progress) -> f64 {
        unlerp(progress.get(), self.start, self.end)
    }

    /// Target pixel offset for `progress`, in `[-(max scroll), 0]`.
    pub fn offset(&self, progress: Progress, extent: ContentExtent) -> f64 {
        let t = self.travel(progress);
        let max = extent.max_scroll();
        if t <= 0.0 || max <= 0.0 {
            return 0.0;
        }
        -max * t
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mapping/timeline.rs"]
mod tests;
