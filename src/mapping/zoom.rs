use crate::foundation::core::Progress;
use crate::foundation::error::{TimelineError, TimelineResult};
use crate::foundation::math::{lerp, unlerp};

/// Maps progress to a background scale factor.
///
/// Holds `from_scale` up to `start`, moves linearly to `to_scale` at `end`, then holds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ZoomMapper {
    start: f64,
    end: f64,
    from_scale: f64,
    to_scale: f64,
}

impl ZoomMapper {
    /// Validate and build a zoom range.
    pub fn new(start: f64, end: f64, from_scale: f64, to_scale: f64) -> TimelineResult<Self> {
        check_span("zoom", start, end)?;
        for (name, v) in [("from_scale", from_scale), ("to_scale", to_scale)] {
            if !v.is_finite() || v <= 0.0 {
                return Err(TimelineError::validation(format!(
                    "zoom {name} must be finite and > 0, got {v}"
                )));
            }
        }
        Ok(Self {
            start,
            end,
            from_scale,
            to_scale,
        })
    }

    /// Progress at which the zoom begins.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Progress at which the zoom completes.
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Scale at and before `start`.
    pub fn from_scale(&self) -> f64 {
        self.from_scale
    }

    /// Scale at and after `end`.
    pub fn to_scale(&self) -> f64 {
        self.to_scale
    }

    /// Target scale for `progress`.
    pub fn scale(&self, progress: Progress) -> f64 {
        let t = unlerp(progress.get(), self.start, self.end);
        if t <= 0.0 {
            return self.from_scale;
        }
        if t >= 1.0 {
            return self.to_scale;
        }
        lerp(self.from_scale, self.to_scale, t)
    }
}

pub(crate) fn check_span(what: &str, start: f64, end: f64) -> TimelineResult<()> {
    for v in [start, end] {
        if !v.is_finite() || !(0.0..=1.0).contains(&v) {
            return Err(TimelineError::schedule(format!(
                "{what} point {v} is outside [0, 1]"
            )));
        }
    }
    if start > end {
        return Err(TimelineError::schedule(format!(
            "{what} start {start} is after end {end}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/mapping/zoom.rs"]
mod tests;
