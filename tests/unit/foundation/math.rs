use super::*;

#[test]
fn unlerp_clamps_outside_span() {
    assert_eq!(unlerp(0.0, 0.4, 0.9), 0.0);
    assert_eq!(unlerp(1.0, 0.4, 0.9), 1.0);
    assert!(approx_eq(unlerp(0.65, 0.4, 0.9), 0.5, 1e-12));
}

#[test]
fn unlerp_zero_span_is_a_step() {
    assert_eq!(unlerp(0.29, 0.3, 0.3), 0.0);
    assert_eq!(unlerp(0.3, 0.3, 0.3), 1.0);
    assert_eq!(unlerp(0.31, 0.3, 0.3), 1.0);
}

#[test]
fn lerp_hits_endpoints() {
    assert_eq!(lerp(1.8, 1.0, 0.0), 1.8);
    assert_eq!(lerp(1.8, 1.0, 1.0), 1.0);
}

#[test]
fn clamp01_handles_nan() {
    assert_eq!(clamp01(f64::NAN), 0.0);
    assert_eq!(clamp01(-2.0), 0.0);
    assert_eq!(clamp01(2.0), 1.0);
}
