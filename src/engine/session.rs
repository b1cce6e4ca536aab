use crate::engine::runtime::Engine;
use crate::engine::state::VisualState;
use crate::foundation::core::{FrameIndex, FrameTick, ScrollMetrics};
use crate::foundation::error::{TimelineError, TimelineResult};
use crate::schedule::config::EngineConfig;

/// Opaque handle for a host registration (scroll listener or frame loop).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(pub u64);

/// The windowing/UI layer that supplies scroll metrics and a frame clock.
pub trait Host {
    /// Current scroll metrics.
    fn metrics(&self) -> ScrollMetrics;
    /// Start delivering scroll events.
    fn listen_scroll(&mut self) -> ListenerId;
    /// Start the per-frame callback loop.
    fn request_frames(&mut self) -> ListenerId;
    /// Stop a registration created by this host.
    fn cancel(&mut self, id: ListenerId);
}

#[derive(Clone, Copy, Debug)]
struct Registrations {
    scroll: ListenerId,
    frames: ListenerId,
}

/// An [`Engine`] attached to a [`Host`].
///
/// Attaching registers both triggers. [`detach`](Self::detach), or dropping the
/// session, cancels both; after that every trigger call is rejected so a late frame
/// callback cannot drive a torn-down view.
pub struct Session<H: Host> {
    host: H,
    engine: Engine,
    registrations: Option<Registrations>,
}

impl<H: Host> Session<H> {
    /// Register with `host` and take the initial scroll sample.
    pub fn attach(mut host: H, mut engine: Engine) -> Self {
        let scroll = host.listen_scroll();
        let frames = host.request_frames();
        engine.on_scroll(host.metrics());
        tracing::debug!(?scroll, ?frames, "session attached");
        Self {
            host,
            engine,
            registrations: Some(Registrations { scroll, frames }),
        }
    }

    /// True until [`detach`](Self::detach).
    pub fn is_attached(&self) -> bool {
        self.registrations.is_some()
    }

    /// Host reference.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable host reference (for hosts driven by the caller, such as [`ScriptedHost`]).
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Engine reference.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Mutable engine reference (pinning, carousel input, extent updates).
    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    /// Scroll trigger: sample the host's metrics.
    pub fn on_scroll(&mut self) -> TimelineResult<bool> {
        self.ensure_attached()?;
        Ok(self.engine.on_scroll(self.host.metrics()))
    }

    /// Frame trigger.
    pub fn on_frame(&mut self, tick: FrameTick) -> TimelineResult<&VisualState> {
        self.ensure_attached()?;
        Ok(self.engine.frame(tick))
    }

    /// Cancel both registrations. Idempotent.
    pub fn detach(&mut self) {
        if let Some(r) = self.registrations.take() {
            self.host.cancel(r.scroll);
            self.host.cancel(r.frames);
            tracing::debug!(scroll = ?r.scroll, frames = ?r.frames, "session detached");
        }
    }

    fn ensure_attached(&self) -> TimelineResult<()> {
        if self.registrations.is_none() {
            return Err(TimelineError::validation("session is detached"));
        }
        Ok(())
    }
}

impl<H: Host> Drop for Session<H> {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Deterministic in-memory host replaying a list of scroll offsets, one per frame.
#[derive(Clone, Debug)]
pub struct ScriptedHost {
    offsets: Vec<f64>,
    cursor: usize,
    content_height: f64,
    viewport_height: f64,
    next_id: u64,
    active: Vec<ListenerId>,
}

impl ScriptedHost {
    /// Host over `offsets` for a page of the given heights. Starts at the first offset
    /// (or `0` when the script is empty).
    pub fn new(offsets: Vec<f64>, content_height: f64, viewport_height: f64) -> Self {
        Self {
            offsets,
            cursor: 0,
            content_height,
            viewport_height,
            next_id: 1,
            active: Vec::new(),
        }
    }

    /// Move to the next scripted offset. Returns `false` once the script is exhausted.
    pub fn advance(&mut self) -> bool {
        if self.cursor + 1 >= self.offsets.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Registrations that have not been cancelled.
    pub fn active_listeners(&self) -> &[ListenerId] {
        &self.active
    }

    fn register(&mut self) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.active.push(id);
        id
    }
}

impl Host for ScriptedHost {
    fn metrics(&self) -> ScrollMetrics {
        ScrollMetrics {
            offset: self.offsets.get(self.cursor).copied().unwrap_or(0.0),
            content_height: self.content_height,
            viewport_height: self.viewport_height,
        }
    }

    fn listen_scroll(&mut self) -> ListenerId {
        self.register()
    }

    fn request_frames(&mut self) -> ListenerId {
        self.register()
    }

    fn cancel(&mut self, id: ListenerId) {
        self.active.retain(|&a| a != id);
    }
}

/// Options for [`replay`].
#[derive(Clone, Copy, Debug)]
pub struct ReplayOpts {
    /// Viewport height in pixels; page height follows `page_height_viewports`.
    pub viewport_height: f64,
    /// Frame clock rate.
    pub fps: u32,
    /// Upper bound on frames run after the script ends while waiting for idle.
    pub max_settle_frames: u64,
}

impl Default for ReplayOpts {
    fn default() -> Self {
        Self {
            viewport_height: 800.0,
            fps: 60,
            max_settle_frames: 600,
        }
    }
}

/// Drive an engine through `offsets` (one per frame), then keep ticking until the
/// scroll-driven values settle or `max_settle_frames` elapse. A rotating carousel does
/// not hold the replay open. Returns the state of every frame.
#[tracing::instrument(skip(config, offsets), fields(offsets = offsets.len()))]
pub fn replay(
    config: EngineConfig,
    offsets: Vec<f64>,
    opts: ReplayOpts,
) -> TimelineResult<Vec<VisualState>> {
    let content_height = opts.viewport_height * config.page_height_viewports;
    let host = ScriptedHost::new(offsets, content_height, opts.viewport_height);
    let mut session = Session::attach(host, Engine::new(config)?);

    let mut out = Vec::new();
    let mut frame = FrameIndex(0);
    loop {
        frame = frame.next();
        out.push(session.on_frame(FrameTick::at_rate(frame.0, opts.fps)?)?.clone());
        if !session.host_mut().advance() {
            break;
        }
        session.on_scroll()?;
    }

    let mut settle = 0;
    while !session.engine().is_scroll_settled() && settle < opts.max_settle_frames {
        frame = frame.next();
        out.push(session.on_frame(FrameTick::at_rate(frame.0, opts.fps)?)?.clone());
        settle += 1;
    }
    session.detach();
    tracing::debug!(frames = out.len(), "replay finished");
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/engine/session.rs"]
mod tests;
