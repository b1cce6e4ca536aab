use super::*;
use crate::foundation::math::approx_eq;

fn landing_zoom() -> ZoomMapper {
    ZoomMapper::new(0.08, 0.14, 1.8, 1.0).unwrap()
}

#[test]
fn holds_outside_the_range() {
    let z = landing_zoom();
    assert_eq!(z.scale(Progress::new(0.0)), 1.8);
    assert_eq!(z.scale(Progress::new(0.08)), 1.8);
    assert_eq!(z.scale(Progress::new(0.14)), 1.0);
    assert_eq!(z.scale(Progress::new(0.9)), 1.0);
}

#[test]
fn linear_between_points() {
    let z = landing_zoom();
    assert!(approx_eq(z.scale(Progress::new(0.11)), 1.4, 1e-9));
}

#[test]
fn monotonic_across_sweep() {
    let z = landing_zoom();
    let mut prev = f64::INFINITY;
    for i in 0..=200 {
        let s = z.scale(Progress::new(f64::from(i) / 200.0));
        assert!(s <= prev);
        assert!((1.0..=1.8).contains(&s));
        prev = s;
    }
}

#[test]
fn zero_length_range_is_a_cut() {
    let z = ZoomMapper::new(0.5, 0.5, 2.0, 1.0).unwrap();
    assert_eq!(z.scale(Progress::new(0.49)), 2.0);
    assert_eq!(z.scale(Progress::new(0.5)), 1.0);
}

#[test]
fn rejects_bad_ranges() {
    assert!(ZoomMapper::new(0.2, 0.1, 1.8, 1.0).is_err());
    assert!(ZoomMapper::new(0.0, 1.2, 1.8, 1.0).is_err());
    assert!(ZoomMapper::new(0.0, 0.1, 0.0, 1.0).is_err());
    assert!(ZoomMapper::new(0.0, 0.1, 1.8, f64::NAN).is_err());
}
