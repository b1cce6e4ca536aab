use super::*;

fn half() -> Smoothing {
    Smoothing::new(0.5).unwrap()
}

#[test]
fn half_smoothing_halves_the_gap() {
    let mut s = Smoother::new(0.0, half(), DEFAULT_SNAP_EPSILON).with_display(0.0);
    s.set_target(1.0);
    assert_eq!(s.tick(), 0.5);
    assert_eq!(s.tick(), 0.75);
}

#[test]
fn starts_settled_on_first_target() {
    let s = Smoother::new(1.8, Smoothing::default(), DEFAULT_SNAP_EPSILON);
    assert_eq!(s.display(), 1.8);
    assert!(s.is_settled());
}

#[test]
fn converges_in_finite_steps_and_stays() {
    let mut s = Smoother::new(1.8, Smoothing::default(), DEFAULT_SNAP_EPSILON);
    s.set_target(1.0);
    let mut steps = 0;
    while !s.is_settled() {
        s.tick();
        steps += 1;
        assert!(steps < 1_000, "did not converge");
    }
    assert_eq!(s.display(), 1.0);
    for _ in 0..10 {
        assert_eq!(s.tick(), 1.0);
    }
}

#[test]
fn non_positive_epsilon_still_settles() {
    for epsilon in [0.0, -1.0, f64::NAN] {
        let mut s = Smoother::new(0.0, Smoothing::default(), epsilon);
        s.set_target(-1880.0);
        let mut steps = 0;
        while !s.is_settled() {
            s.tick();
            steps += 1;
            assert!(steps < 1_000, "epsilon {epsilon} never settled");
        }
        assert_eq!(s.display(), -1880.0);
    }
}

#[test]
fn retarget_mid_approach() {
    let mut s = Smoother::new(0.0, half(), DEFAULT_SNAP_EPSILON);
    s.set_target(1.0);
    s.tick();
    s.set_target(0.0);
    assert_eq!(s.tick(), 0.25);
}

#[test]
fn snap_jumps_to_target() {
    let mut s = Smoother::new(0.0, half(), DEFAULT_SNAP_EPSILON);
    s.set_target(3.0);
    s.snap();
    assert_eq!(s.display(), 3.0);
    assert!(s.is_settled());
}

#[test]
fn smoothing_must_be_open_unit_interval() {
    assert!(Smoothing::new(0.0).is_err());
    assert!(Smoothing::new(1.0).is_err());
    assert!(Smoothing::new(f64::NAN).is_err());
    assert_eq!(Smoothing::new(0.12).unwrap().get(), 0.12);
    assert!(serde_json::from_str::<Smoothing>("1.5").is_err());
    assert_eq!(serde_json::from_str::<Smoothing>("0.2").unwrap().get(), 0.2);
}
