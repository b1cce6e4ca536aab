use crate::foundation::core::{Progress, ScrollMetrics};

/// Normalize a scroll offset against the scrollable height.
///
/// Returns `0` when the page cannot scroll.
pub fn progress_from(offset: f64, scrollable_height: f64) -> Progress {
    if scrollable_height.is_nan() || scrollable_height <= 0.0 {
        return Progress::START;
    }
    Progress::new(offset / scrollable_height)
}

/// Single writer of the current progress, throttled to one publication per frame.
///
/// Scroll events only record the newest sample; [`on_frame`](Self::on_frame)
/// publishes it. Many events between two frames collapse into one update.
#[derive(Clone, Debug, Default)]
pub struct ScrollSampler {
    latest: Progress,
    current: Progress,
    pending: bool,
    published: u64,
    coalesced: u64,
}

impl ScrollSampler {
    /// Sampler at page top with nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a scroll event. Returns `true` when a frame must be requested,
    /// i.e. for the first event since the last publication.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> bool {
        self.latest = progress_from(metrics.offset, metrics.scrollable_height());
        if self.pending {
            self.coalesced += 1;
            tracing::trace!(coalesced = self.coalesced, "scroll event coalesced");
            return false;
        }
        self.pending = true;
        true
    }

    /// Publish the pending sample, if any.
    pub fn on_frame(&mut self) -> Option<Progress> {
        if !self.pending {
            return None;
        }
        self.pending = false;
        self.current = self.latest;
        self.published += 1;
        Some(self.current)
    }

    /// Publish `progress` directly, discarding anything pending.
    pub fn publish(&mut self, progress: Progress) {
        self.pending = false;
        self.latest = progress;
        self.current = progress;
        self.published += 1;
    }

    /// Last published progress.
    pub fn current(&self) -> Progress {
        self.current
    }

    /// True while a sample is waiting for the next frame.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Number of samples published so far.
    pub fn published(&self) -> u64 {
        self.published
    }

    /// Number of scroll events folded into an already pending sample.
    pub fn coalesced(&self) -> u64 {
        self.coalesced
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/sampler.rs"]
mod tests;
