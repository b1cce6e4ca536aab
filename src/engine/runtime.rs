use crate::animation::carousel::Carousel;
use crate::animation::fade::SectionPhase;
use crate::animation::smoother::Smoother;
use crate::engine::sampler::ScrollSampler;
use crate::engine::state::{SectionVisual, VisualState};
use crate::foundation::core::{ContentExtent, FrameIndex, FrameTick, Progress, ScrollMetrics};
use crate::foundation::error::{TimelineError, TimelineResult};
use crate::schedule::config::EngineConfig;
use crate::schedule::model::Schedule;

/// Scroll-driven animation engine.
///
/// Two independent triggers feed it: scroll events ([`on_scroll`](Self::on_scroll)) and
/// the frame clock ([`frame`](Self::frame)). Section state is recomputed from progress
/// on every frame; the zoom and timeline smoothers are the only values with memory.
#[derive(Clone, Debug)]
pub struct Engine {
    config: EngineConfig,
    sampler: ScrollSampler,
    zoom: Smoother,
    timeline: Smoother,
    extent: ContentExtent,
    carousel: Option<Carousel>,
    pinned: Vec<bool>,
    primed: bool,
    state: VisualState,
}

impl Engine {
    /// Validate `config` and build an engine resting at page top.
    #[tracing::instrument(skip(config), fields(sections = config.schedule.len()))]
    pub fn new(config: EngineConfig) -> TimelineResult<Self> {
        config.validate()?;

        let start = Progress::START;
        let extent = config.timeline_extent;
        let zoom = Smoother::new(config.zoom.scale(start), config.smoothing, config.snap_epsilon);
        let timeline = Smoother::new(
            config.timeline.offset(start, extent),
            config.smoothing,
            config.snap_epsilon,
        );
        let carousel = config
            .carousel
            .map(|c| Carousel::new(c.slides, c.interval))
            .transpose()?;
        let pinned = vec![false; config.schedule.len()];

        let mut engine = Self {
            config,
            sampler: ScrollSampler::new(),
            zoom,
            timeline,
            extent,
            carousel,
            pinned,
            primed: false,
            state: VisualState {
                frame: FrameIndex(0),
                progress: start,
                sections: Vec::new(),
                zoom_scale: 0.0,
                timeline_offset_px: 0.0,
                carousel: None,
            },
        };
        engine.state = engine.evaluate(FrameIndex(0));
        tracing::debug!("engine ready");
        Ok(engine)
    }

    /// Configuration the engine was built from.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Section table.
    pub fn schedule(&self) -> &Schedule {
        &self.config.schedule
    }

    /// Last published progress.
    pub fn progress(&self) -> Progress {
        self.sampler.current()
    }

    /// Most recent frame output.
    pub fn state(&self) -> &VisualState {
        &self.state
    }

    /// Current timeline extent.
    pub fn timeline_extent(&self) -> ContentExtent {
        self.extent
    }

    /// Record a scroll event. Returns `true` when the host should schedule a frame.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> bool {
        self.sampler.on_scroll(metrics)
    }

    /// Replace the measured timeline extent (layout change or resize).
    pub fn set_timeline_extent(&mut self, extent: ContentExtent) -> TimelineResult<()> {
        let extent = ContentExtent::new(extent.content_height, extent.viewport_height)?;
        self.extent = extent;
        self.timeline
            .set_target(self.config.timeline.offset(self.progress(), extent));
        Ok(())
    }

    /// Hold `section` fully visible until [`unpin`](Self::unpin).
    pub fn pin(&mut self, section: &str) -> TimelineResult<()> {
        self.set_pinned(section, true)
    }

    /// Return `section` to its scheduled opacity.
    pub fn unpin(&mut self, section: &str) -> TimelineResult<()> {
        self.set_pinned(section, false)
    }

    fn set_pinned(&mut self, section: &str, pinned: bool) -> TimelineResult<()> {
        let idx = self
            .config
            .schedule
            .index_of(section)
            .ok_or_else(|| TimelineError::schedule(format!("unknown section '{section}'")))?;
        self.pinned[idx] = pinned;
        Ok(())
    }

    /// Carousel, if configured.
    pub fn carousel(&self) -> Option<&Carousel> {
        self.carousel.as_ref()
    }

    /// Mutable carousel for navigation and hover pause.
    pub fn carousel_mut(&mut self) -> Option<&mut Carousel> {
        self.carousel.as_mut()
    }

    /// Produce the visual state for one frame.
    ///
    /// Publishes any pending scroll sample, retargets the smoothers, advances them one
    /// step and re-evaluates every section. The first published sample snaps the
    /// smoothers, so a page restored mid-scroll does not animate in from the top.
    pub fn frame(&mut self, tick: FrameTick) -> &VisualState {
        if let Some(progress) = self.sampler.on_frame() {
            self.retarget(progress);
            if !self.primed {
                self.zoom.snap();
                self.timeline.snap();
                self.primed = true;
            }
        }
        self.zoom.tick();
        self.timeline.tick();
        if let Some(c) = self.carousel.as_mut()
            && c.advance(tick.dt)
        {
            tracing::debug!(index = c.index(), "carousel advanced");
        }
        self.state = self.evaluate(tick.index);
        &self.state
    }

    /// Jump straight to `progress` with both smoothers settled, keeping the current
    /// frame index. Used to restore a scroll position or inspect a single point.
    pub fn seek(&mut self, progress: Progress) -> &VisualState {
        self.sampler.publish(progress);
        self.retarget(progress);
        self.zoom.snap();
        self.timeline.snap();
        self.primed = true;
        self.state = self.evaluate(self.state.frame);
        &self.state
    }

    fn retarget(&mut self, progress: Progress) {
        self.zoom.set_target(self.config.zoom.scale(progress));
        self.timeline
            .set_target(self.config.timeline.offset(progress, self.extent));
    }

    /// True once every scroll-driven value has caught up: no sample is pending and both
    /// smoothers are settled. Ignores the carousel, which rotates on its own clock.
    pub fn is_scroll_settled(&self) -> bool {
        !self.sampler.is_pending() && self.zoom.is_settled() && self.timeline.is_settled()
    }

    /// True when another frame would produce the same state. Hosts may pause their
    /// frame loop until the next scroll event.
    pub fn is_idle(&self) -> bool {
        self.is_scroll_settled()
            && !self.carousel.as_ref().is_some_and(Carousel::is_rotating)
    }

    fn evaluate(&self, frame: FrameIndex) -> VisualState {
        let progress = self.progress();
        let sections = self
            .config
            .schedule
            .iter()
            .zip(&self.pinned)
            .map(|(spec, &pinned)| {
                let (opacity, phase) = if pinned {
                    (1.0, SectionPhase::Visible)
                } else {
                    (spec.window.opacity(progress), spec.window.phase(progress))
                };
                SectionVisual {
                    name: spec.name.clone(),
                    opacity,
                    phase,
                    offset_y_px: spec.lift_px * (1.0 - opacity),
                    interactive: opacity > 0.0,
                    pinned,
                }
            })
            .collect();

        VisualState {
            frame,
            progress,
            sections,
            zoom_scale: self.zoom.display(),
            timeline_offset_px: self.timeline.display(),
            carousel: self.carousel.as_ref().map(Carousel::state),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/runtime.rs"]
mod tests;
