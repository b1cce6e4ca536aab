use std::time::Duration;

use crate::foundation::error::{TimelineError, TimelineResult};

/// Auto-advancing slide index (the testimonial rotator).
///
/// Time only accumulates while the carousel is running; any manual move restarts
/// the interval so a click is never followed by an immediate auto-advance.
#[derive(Clone, Debug, PartialEq)]
pub struct Carousel {
    len: usize,
    interval: Duration,
    paused: bool,
    elapsed: Duration,
    index: usize,
}

/// Serializable snapshot of a [`Carousel`] for the render layer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CarouselState {
    /// Active slide.
    pub index: usize,
    /// Number of slides.
    pub len: usize,
    /// Horizontal track offset in percent of one slide.
    pub track_offset_percent: f64,
    /// Hover pause flag.
    pub paused: bool,
}

impl Carousel {
    /// Build a carousel over `len` slides advancing every `interval`.
    pub fn new(len: usize, interval: Duration) -> TimelineResult<Self> {
        if interval.is_zero() {
            return Err(TimelineError::validation("carousel interval must be > 0"));
        }
        Ok(Self {
            len,
            interval,
            paused: false,
            elapsed: Duration::ZERO,
            index: 0,
        })
    }

    /// Active slide.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when there are no slides.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True when time passing can change the index.
    pub fn is_rotating(&self) -> bool {
        !self.paused && self.len > 1
    }

    /// Pause or resume auto-advance.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Accumulate `dt` and advance once per elapsed interval. Returns true if the index moved.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if !self.is_rotating() {
            return false;
        }
        self.elapsed += dt;
        let mut moved = false;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            self.index = (self.index + 1) % self.len;
            moved = true;
        }
        moved
    }

    /// Step forward, wrapping at the end.
    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + 1) % self.len;
        self.elapsed = Duration::ZERO;
    }

    /// Step back, wrapping at the start.
    pub fn prev(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + self.len - 1) % self.len;
        self.elapsed = Duration::ZERO;
    }

    /// Jump to slide `index`.
    pub fn select(&mut self, index: usize) -> TimelineResult<()> {
        if index >= self.len {
            return Err(TimelineError::validation(format!(
                "slide {index} out of range for {} slides",
                self.len
            )));
        }
        self.index = index;
        self.elapsed = Duration::ZERO;
        Ok(())
    }

    /// Snapshot for rendering.
    pub fn state(&self) -> CarouselState {
        CarouselState {
            index: self.index,
            len: self.len,
            track_offset_percent: -100.0 * self.index as f64,
            paused: self.paused,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/carousel.rs"]
mod tests;
