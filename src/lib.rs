//! Scroll-timeline maps one scalar, the page's normalized scroll progress, onto every
//! animated value of a scroll-choreographed landing page.
//!
//! # Pipeline overview
//!
//! 1. **Sample**: host scroll metrics -> [`Progress`] in `[0, 1]`, at most once per frame
//!    ([`ScrollSampler`]).
//! 2. **Evaluate**: `Progress` -> per-section opacity through each section's
//!    [`FadeWindow`], plus zoom and timeline targets ([`ZoomMapper`], [`TimelineMapper`]).
//! 3. **Smooth**: targets -> displayed values, one lerp step per frame ([`Smoother`]).
//! 4. **Emit**: a [`VisualState`] per frame for whatever renders it.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Stateless sections**: section phase is recomputed from progress on every frame.
//! - **Validated up front**: configuration errors surface in [`Engine::new`], never as
//!   NaN at render time.
//! - **Explicit configuration**: an [`EngineConfig`] is built or loaded once and handed
//!   to the engine; nothing is read from global state.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod engine;
mod foundation;
mod mapping;
mod schedule;

pub use animation::carousel::{Carousel, CarouselState};
pub use animation::fade::{FadeWindow, SectionPhase, opacity};
pub use animation::smoother::{DEFAULT_SMOOTHING, DEFAULT_SNAP_EPSILON, Smoother, Smoothing};
pub use engine::runtime::Engine;
pub use engine::sampler::{ScrollSampler, progress_from};
pub use engine::session::{Host, ListenerId, ReplayOpts, ScriptedHost, Session, replay};
pub use engine::state::{SectionVisual, VisualState};
pub use foundation::core::{ContentExtent, FrameIndex, FrameTick, Progress, ScrollMetrics};
pub use foundation::error::{TimelineError, TimelineResult};
pub use foundation::math::{clamp01, lerp, unlerp};
pub use mapping::timeline::TimelineMapper;
pub use mapping::zoom::ZoomMapper;
pub use schedule::config::{
    AnchorDef, CarouselConfig, CarouselDef, EngineConfig, EngineConfigDef, ExplicitWindowDef,
    FadeInWindowDef, FadeOutWindowDef, SectionDef, TimelineDef, TriggerWindowDef, WindowDef,
    WindowEdge, ZoomDef,
};
pub use schedule::model::{Schedule, ScheduleBuilder, SectionSpec};
