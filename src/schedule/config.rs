//! JSON configuration surface.
//!
//! A config file is parsed into the raw `*Def` types below and then resolved into an
//! immutable [`EngineConfig`]. Shorthand windows and section-edge references are
//! normalized during resolution so the engine only ever sees canonical values.

use std::{path::Path, time::Duration};

use crate::animation::fade::FadeWindow;
use crate::animation::smoother::{DEFAULT_SNAP_EPSILON, Smoothing};
use crate::foundation::core::ContentExtent;
use crate::foundation::error::{TimelineError, TimelineResult};
use crate::mapping::timeline::TimelineMapper;
use crate::mapping::zoom::ZoomMapper;
use crate::schedule::model::{Schedule, SectionSpec};

const DEFAULT_TRIGGER_VISIBLE: f64 = 0.08;
const DEFAULT_TRIGGER_FADE: f64 = 0.04;
const DEFAULT_PAGE_HEIGHT_VIEWPORTS: f64 = 4.0;

/// Immutable engine configuration, explicitly constructed and handed to the engine.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EngineConfig {
    /// Per-frame smoothing shared by the zoom and timeline smoothers.
    pub smoothing: Smoothing,
    /// Gap under which smoothed values snap onto their targets.
    pub snap_epsilon: f64,
    /// Page height in viewports; used by hosts that synthesize scroll metrics.
    pub page_height_viewports: f64,
    /// Section visibility table.
    pub schedule: Schedule,
    /// Background zoom range.
    pub zoom: ZoomMapper,
    /// Timeline list scroll window.
    pub timeline: TimelineMapper,
    /// Initial timeline extent until the layout layer reports a measurement.
    pub timeline_extent: ContentExtent,
    /// Testimonial auto-advance, if the page has a carousel.
    pub carousel: Option<CarouselConfig>,
}

/// Carousel sizing and cadence.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CarouselConfig {
    /// Number of slides.
    pub slides: usize,
    /// Time each slide stays up before auto-advance.
    pub interval: Duration,
}

impl EngineConfig {
    /// Configuration with default smoothing, snap epsilon and page height.
    pub fn new(schedule: Schedule, zoom: ZoomMapper, timeline: TimelineMapper) -> Self {
        Self {
            smoothing: Smoothing::default(),
            snap_epsilon: DEFAULT_SNAP_EPSILON,
            page_height_viewports: DEFAULT_PAGE_HEIGHT_VIEWPORTS,
            schedule,
            zoom,
            timeline,
            timeline_extent: ContentExtent::default(),
            carousel: None,
        }
    }

    /// Override the smoothing factor.
    pub fn with_smoothing(mut self, smoothing: Smoothing) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Attach a carousel.
    pub fn with_carousel(mut self, slides: usize, interval: Duration) -> Self {
        self.carousel = Some(CarouselConfig { slides, interval });
        self
    }

    /// Parse and resolve a JSON document.
    #[tracing::instrument(skip(json), fields(len = json.len()))]
    pub fn from_json_str(json: &str) -> TimelineResult<Self> {
        let def: EngineConfigDef = serde_json::from_str(json)?;
        def.resolve()
    }

    /// Read, parse and resolve a JSON file.
    #[tracing::instrument]
    pub fn from_path(path: &Path) -> TimelineResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            TimelineError::Other(
                anyhow::Error::new(e).context(format!("read config '{}'", path.display())),
            )
        })?;
        Self::from_json_str(&text)
    }

    /// Startup validation of every value that is not already checked by its type.
    pub fn validate(&self) -> TimelineResult<()> {
        if !self.snap_epsilon.is_finite() || self.snap_epsilon <= 0.0 {
            return Err(TimelineError::config(format!(
                "snap_epsilon must be finite and > 0, got {}",
                self.snap_epsilon
            )));
        }
        if !self.page_height_viewports.is_finite() || self.page_height_viewports < 1.0 {
            return Err(TimelineError::config(format!(
                "page_height_viewports must be >= 1, got {}",
                self.page_height_viewports
            )));
        }
        ContentExtent::new(
            self.timeline_extent.content_height,
            self.timeline_extent.viewport_height,
        )?;
        if let Some(c) = &self.carousel
            && c.interval.is_zero()
        {
            return Err(TimelineError::config("carousel interval must be > 0"));
        }
        Ok(())
    }
}

/// Raw top-level config document.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfigDef {
    /// Smoothing factor; defaults to `0.12`.
    #[serde(default)]
    pub smoothing: Smoothing,
    /// Snap epsilon; defaults to `1e-4`.
    #[serde(default = "default_snap_epsilon")]
    pub snap_epsilon: f64,
    /// Page height in viewports; defaults to `4`.
    #[serde(default = "default_page_height")]
    pub page_height_viewports: f64,
    /// Sections in render order.
    pub sections: Vec<SectionDef>,
    /// Background zoom.
    pub zoom: ZoomDef,
    /// Timeline scroll window.
    pub timeline: TimelineDef,
    /// Optional testimonial carousel.
    #[serde(default)]
    pub carousel: Option<CarouselDef>,
}

fn default_snap_epsilon() -> f64 {
    DEFAULT_SNAP_EPSILON
}

fn default_page_height() -> f64 {
    DEFAULT_PAGE_HEIGHT_VIEWPORTS
}

/// One section entry.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionDef {
    /// Unique name.
    pub name: String,
    /// Window in any accepted shape.
    pub window: WindowDef,
    /// Lift while faded, in pixels.
    #[serde(default)]
    pub lift_px: f64,
}

/// Accepted fade window shapes. All resolve to one [`FadeWindow`].
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(untagged)]
pub enum WindowDef {
    /// Four explicit points.
    Explicit(ExplicitWindowDef),
    /// `trigger ± visible/fade` shorthand.
    Trigger(TriggerWindowDef),
    /// Visible from the top, fades out.
    FadeOut(FadeOutWindowDef),
    /// Fades in, visible to the bottom.
    FadeIn(FadeInWindowDef),
}

/// Four explicit points.
#[derive(Clone, Copy, Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExplicitWindowDef {
    /// See [`FadeWindow::fade_in_start`].
    pub fade_in_start: f64,
    /// See [`FadeWindow::fade_in_end`].
    pub fade_in_end: f64,
    /// See [`FadeWindow::fade_out_start`].
    pub fade_out_start: f64,
    /// See [`FadeWindow::fade_out_end`].
    pub fade_out_end: f64,
}

/// Trigger shorthand.
#[derive(Clone, Copy, Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TriggerWindowDef {
    /// Point at which the section is fully visible.
    pub trigger: f64,
    /// Plateau length; defaults to `0.08`.
    #[serde(default = "default_visible")]
    pub visible: f64,
    /// Ramp length on each side; defaults to `0.04`.
    #[serde(default = "default_fade")]
    pub fade: f64,
}

fn default_visible() -> f64 {
    DEFAULT_TRIGGER_VISIBLE
}

fn default_fade() -> f64 {
    DEFAULT_TRIGGER_FADE
}

/// Fade-out-only window.
#[derive(Clone, Copy, Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FadeOutWindowDef {
    /// Start of the fade-out ramp.
    pub fade_out_start: f64,
    /// End of the fade-out ramp.
    pub fade_out_end: f64,
}

/// Fade-in-only window.
#[derive(Clone, Copy, Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FadeInWindowDef {
    /// Start of the fade-in ramp.
    pub fade_in_start: f64,
    /// End of the fade-in ramp.
    pub fade_in_end: f64,
}

impl WindowDef {
    /// Normalize into a canonical window.
    pub fn resolve(&self) -> TimelineResult<FadeWindow> {
        match *self {
            Self::Explicit(d) => {
                FadeWindow::new(d.fade_in_start, d.fade_in_end, d.fade_out_start, d.fade_out_end)
            }
            Self::Trigger(d) => FadeWindow::from_trigger(d.trigger, d.visible, d.fade),
            Self::FadeOut(d) => FadeWindow::fade_out_only(d.fade_out_start, d.fade_out_end),
            Self::FadeIn(d) => FadeWindow::fade_in_only(d.fade_in_start, d.fade_in_end),
        }
    }
}

/// A progress point: literal, or an edge of a named section's window.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(untagged)]
pub enum AnchorDef {
    /// Literal progress value.
    At(f64),
    /// Edge of a section declared in the same document.
    Edge {
        /// Section name.
        section: String,
        /// Which breakpoint.
        edge: WindowEdge,
    },
}

/// Breakpoints of a fade window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowEdge {
    /// `fade_in_start`
    FadeInStart,
    /// `fade_in_end`
    FadeInEnd,
    /// `fade_out_start`
    FadeOutStart,
    /// `fade_out_end`
    FadeOutEnd,
}

impl WindowEdge {
    fn of(self, w: &FadeWindow) -> f64 {
        match self {
            Self::FadeInStart => w.fade_in_start(),
            Self::FadeInEnd => w.fade_in_end(),
            Self::FadeOutStart => w.fade_out_start(),
            Self::FadeOutEnd => w.fade_out_end(),
        }
    }
}

impl AnchorDef {
    /// Resolve against a built schedule.
    pub fn resolve(&self, schedule: &Schedule) -> TimelineResult<f64> {
        match self {
            Self::At(v) => Ok(*v),
            Self::Edge { section, edge } => {
                let w = schedule.window(section).map_err(|_| {
                    TimelineError::config(format!("anchor references unknown section '{section}'"))
                })?;
                Ok(edge.of(w))
            }
        }
    }
}

/// Background zoom range.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ZoomDef {
    /// Where the zoom begins (typically the hero's `fade_out_end`).
    pub start: AnchorDef,
    /// Where it completes.
    pub end: AnchorDef,
    /// Near scale held before `start`.
    pub from_scale: f64,
    /// Far scale held after `end`.
    pub to_scale: f64,
}

/// Timeline scroll window and optional initial measurement.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimelineDef {
    /// Where the list starts moving.
    pub start: AnchorDef,
    /// Where it reaches the last item.
    pub end: AnchorDef,
    /// Initial extent; replaced at runtime by layout measurements.
    #[serde(default)]
    pub extent: Option<ContentExtent>,
}

/// Testimonial carousel.
#[derive(Clone, Copy, Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CarouselDef {
    /// Number of slides.
    pub slides: usize,
    /// Auto-advance interval in milliseconds.
    pub interval_ms: u64,
}

impl EngineConfigDef {
    /// Normalize every shorthand and reference into an [`EngineConfig`].
    pub fn resolve(self) -> TimelineResult<EngineConfig> {
        let mut builder = Schedule::builder();
        for s in &self.sections {
            let window = s.window.resolve().map_err(|e| {
                TimelineError::config(format!("section '{}': {e}", s.name))
            })?;
            builder = builder.section(SectionSpec::new(s.name.clone(), window).with_lift(s.lift_px));
        }
        let schedule = builder.build()?;

        let zoom = ZoomMapper::new(
            self.zoom.start.resolve(&schedule)?,
            self.zoom.end.resolve(&schedule)?,
            self.zoom.from_scale,
            self.zoom.to_scale,
        )?;
        let timeline = TimelineMapper::new(
            self.timeline.start.resolve(&schedule)?,
            self.timeline.end.resolve(&schedule)?,
        )?;
        let timeline_extent = match self.timeline.extent {
            Some(e) => ContentExtent::new(e.content_height, e.viewport_height)?,
            None => ContentExtent::default(),
        };

        let config = EngineConfig {
            smoothing: self.smoothing,
            snap_epsilon: self.snap_epsilon,
            page_height_viewports: self.page_height_viewports,
            schedule,
            zoom,
            timeline,
            timeline_extent,
            carousel: self.carousel.map(|c| CarouselConfig {
                slides: c.slides,
                interval: Duration::from_millis(c.interval_ms),
            }),
        };
        config.validate()?;
        tracing::debug!(sections = config.schedule.len(), "resolved engine config");
        Ok(config)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/config.rs"]
mod tests;
