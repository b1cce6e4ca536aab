use super::*;

fn metrics(offset: f64, scrollable: f64) -> ScrollMetrics {
    ScrollMetrics {
        offset,
        content_height: scrollable + 500.0,
        viewport_height: 500.0,
    }
}

#[test]
fn halfway_is_half() {
    assert_eq!(progress_from(150.0, 300.0).get(), 0.5);
}

#[test]
fn degenerate_page_is_zero() {
    assert_eq!(progress_from(150.0, 0.0), Progress::START);
    assert_eq!(progress_from(150.0, -20.0), Progress::START);
    assert_eq!(progress_from(150.0, f64::NAN), Progress::START);
}

#[test]
fn overscroll_is_clamped() {
    assert_eq!(progress_from(-40.0, 300.0), Progress::START);
    assert_eq!(progress_from(340.0, 300.0), Progress::END);
}

#[test]
fn bursts_collapse_into_one_publication() {
    let mut s = ScrollSampler::new();
    assert!(s.on_scroll(metrics(30.0, 300.0)));
    assert!(!s.on_scroll(metrics(60.0, 300.0)));
    assert!(!s.on_scroll(metrics(150.0, 300.0)));
    assert!(s.is_pending());

    assert_eq!(s.on_frame().map(Progress::get), Some(0.5));
    assert_eq!(s.on_frame(), None);
    assert_eq!(s.published(), 1);
    assert_eq!(s.coalesced(), 2);
}

#[test]
fn scrolling_back_up_is_published() {
    let mut s = ScrollSampler::new();
    s.on_scroll(metrics(300.0, 300.0));
    s.on_frame();
    assert_eq!(s.current(), Progress::END);
    assert!(s.on_scroll(metrics(75.0, 300.0)));
    assert_eq!(s.on_frame().map(Progress::get), Some(0.25));
}

#[test]
fn direct_publish_drops_pending_sample() {
    let mut s = ScrollSampler::new();
    s.on_scroll(metrics(30.0, 300.0));
    s.publish(Progress::new(0.7));
    assert!(!s.is_pending());
    assert_eq!(s.on_frame(), None);
    assert_eq!(s.current().get(), 0.7);
}
