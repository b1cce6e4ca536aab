use super::*;
use crate::animation::fade::FadeWindow;
use crate::mapping::timeline::TimelineMapper;
use crate::mapping::zoom::ZoomMapper;
use crate::schedule::model::{Schedule, SectionSpec};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

fn config() -> EngineConfig {
    let schedule = Schedule::builder()
        .section(SectionSpec::new(
            "hero",
            FadeWindow::fade_out_only(0.0, 0.08).unwrap(),
        ))
        .window("logos", [0.14, 0.18, 0.26, 0.30])
        .unwrap()
        .build()
        .unwrap();
    EngineConfig::new(
        schedule,
        ZoomMapper::new(0.08, 0.14, 1.8, 1.0).unwrap(),
        TimelineMapper::new(0.4, 0.9).unwrap(),
    )
}

#[derive(Default)]
struct SharedHost {
    active: Rc<RefCell<Vec<ListenerId>>>,
    next: u64,
}

impl Host for SharedHost {
    fn metrics(&self) -> ScrollMetrics {
        ScrollMetrics::for_page(0.0, 800.0, 4.0)
    }

    fn listen_scroll(&mut self) -> ListenerId {
        self.next += 1;
        self.active.borrow_mut().push(ListenerId(self.next));
        ListenerId(self.next)
    }

    fn request_frames(&mut self) -> ListenerId {
        self.listen_scroll()
    }

    fn cancel(&mut self, id: ListenerId) {
        self.active.borrow_mut().retain(|&a| a != id);
    }
}

#[test]
fn attach_registers_both_triggers() {
    let host = ScriptedHost::new(vec![0.0, 1200.0], 3200.0, 800.0);
    let session = Session::attach(host, Engine::new(config()).unwrap());
    assert!(session.is_attached());
    assert_eq!(session.host().active_listeners().len(), 2);
}

#[test]
fn detach_cancels_and_blocks_late_frames() {
    let host = ScriptedHost::new(vec![0.0], 3200.0, 800.0);
    let mut session = Session::attach(host, Engine::new(config()).unwrap());
    session.detach();
    assert!(session.host().active_listeners().is_empty());
    assert!(session.on_frame(FrameTick::at_rate(1, 60).unwrap()).is_err());
    assert!(session.on_scroll().is_err());
    session.detach();
}

#[test]
fn dropping_an_attached_session_cancels_registrations() {
    let active = Rc::new(RefCell::new(Vec::new()));
    let host = SharedHost {
        active: Rc::clone(&active),
        next: 0,
    };
    {
        let _session = Session::attach(host, Engine::new(config()).unwrap());
        assert_eq!(active.borrow().len(), 2);
    }
    assert!(active.borrow().is_empty());
}

#[test]
fn scripted_scroll_reaches_the_engine() {
    let host = ScriptedHost::new(vec![0.0, 1200.0], 3200.0, 800.0);
    let mut session = Session::attach(host, Engine::new(config()).unwrap());
    session.on_frame(FrameTick::at_rate(1, 60).unwrap()).unwrap();
    assert!(session.host_mut().advance());
    assert!(session.on_scroll().unwrap());
    let s = session.on_frame(FrameTick::at_rate(2, 60).unwrap()).unwrap();
    assert_eq!(s.progress.get(), 0.5);
    assert!(!session.host_mut().advance());
}

#[test]
fn replay_emits_one_state_per_offset_then_settles() {
    let offsets = vec![0.0, 600.0, 1200.0, 2400.0];
    let states = replay(config(), offsets, ReplayOpts::default()).unwrap();
    assert!(states.len() > 4);
    assert_eq!(states[0].progress.get(), 0.0);
    assert_eq!(states[1].progress.get(), 0.25);
    assert_eq!(states[3].progress.get(), 1.0);

    let last = states.last().unwrap();
    assert_eq!(last.zoom_scale, 1.0);
    assert!(
        states
            .windows(2)
            .all(|w| w[1].frame.0 == w[0].frame.0 + 1)
    );
}

#[test]
fn replay_of_empty_script_stays_at_top() {
    let states = replay(config(), Vec::new(), ReplayOpts::default()).unwrap();
    assert_eq!(states.len(), 1);
    assert_eq!(states[0].opacity("hero"), 1.0);
}

#[test]
fn replay_stops_settling_while_the_carousel_keeps_rotating() {
    let cfg = config().with_carousel(3, Duration::from_secs(6));
    let offsets = vec![0.0, 1200.0, 2400.0];
    let opts = ReplayOpts::default();
    let states = replay(cfg, offsets, opts).unwrap();
    assert!(states.len() < 3 + opts.max_settle_frames as usize);
    assert_eq!(states.last().unwrap().zoom_scale, 1.0);
    assert!(states.last().unwrap().carousel.is_some());
}
