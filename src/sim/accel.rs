//! Acceleration-curve burn model: the longer the object has been burning at
//! all, the shorter its effective total burn duration becomes.

use super::constants::ACCEL_FACTOR_CAP;
use std::time::Duration;

/// Linear factor in `[0, ACCEL_FACTOR_CAP]`, saturating once `total` reaches `ramp`.
#[inline]
pub fn acceleration_factor(total: Duration, ramp: Duration) -> f64 {
    if ramp.is_zero() {
        return ACCEL_FACTOR_CAP;
    }
    (total.as_secs_f64() / ramp.as_secs_f64() * ACCEL_FACTOR_CAP).min(ACCEL_FACTOR_CAP)
}

/// Convex easing of the factor: `(factor / cap)^2`.
#[inline]
pub fn acceleration_curve(total: Duration, ramp: Duration) -> f64 {
    let t = acceleration_factor(total, ramp) / ACCEL_FACTOR_CAP;
    t * t
}

/// Burn duration interpolated from `slow` down to `fastest` along the curve.
pub fn effective_duration(
    total: Duration,
    slow: Duration,
    fastest: Duration,
    ramp: Duration,
) -> Duration {
    let curve = acceleration_curve(total, ramp);
    let slow_s = slow.as_secs_f64();
    let fastest_s = fastest.as_secs_f64();
    Duration::from_secs_f64((slow_s - (slow_s - fastest_s) * curve).max(0.0))
}

/// Progress in `[0, 1]`. Non-decreasing in `total` because the duration it is
/// divided by never grows.
pub fn progress(total: Duration, slow: Duration, fastest: Duration, ramp: Duration) -> f64 {
    let duration = effective_duration(total, slow, fastest, ramp).as_secs_f64();
    if duration <= 0.0 {
        return 1.0;
    }
    (total.as_secs_f64() / duration).clamp(0.0, 1.0)
}
