//! Scalar helpers shared by the evaluators and mappers.

/// Clamp `v` into `[0, 1]`. NaN maps to `0`.
#[inline]
pub fn clamp01(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// Linear interpolation from `a` to `b`. `t` is not clamped.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Position of `value` between `start` and `end`, clamped to `[0, 1]`.
///
/// A zero-length span acts as a step: `0` below the point, `1` at or above it.
#[inline]
pub fn unlerp(value: f64, start: f64, end: f64) -> f64 {
    let span = end - start;
    if span <= 0.0 {
        return if value >= end { 1.0 } else { 0.0 };
    }
    clamp01((value - start) / span)
}

#[cfg(test)]
pub(crate) fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
