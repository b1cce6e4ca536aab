use super::*;
use crate::foundation::math::approx_eq;

fn extent() -> ContentExtent {
    ContentExtent::new(1400.0, 600.0).unwrap()
}

#[test]
fn rests_at_zero_before_start() {
    let m = TimelineMapper::new(0.4, 0.9).unwrap();
    assert_eq!(m.offset(Progress::new(0.1), extent()), 0.0);
    assert_eq!(m.offset(Progress::new(0.4), extent()), 0.0);
}

#[test]
fn reaches_full_overflow_at_end() {
    let m = TimelineMapper::new(0.4, 0.9).unwrap();
    assert_eq!(m.offset(Progress::new(0.9), extent()), -800.0);
    assert_eq!(m.offset(Progress::END, extent()), -800.0);
    assert!(approx_eq(m.offset(Progress::new(0.65), extent()), -400.0, 1e-6));
}

#[test]
fn short_content_never_moves() {
    let m = TimelineMapper::new(0.4, 0.9).unwrap();
    let short = ContentExtent::new(300.0, 600.0).unwrap();
    for p in [0.0, 0.5, 1.0] {
        assert_eq!(m.offset(Progress::new(p), short), 0.0);
    }
}

#[test]
fn rejects_reversed_window() {
    assert!(TimelineMapper::new(0.9, 0.4).is_err());
}
