// Host-side tests for the acceleration-curve burn model.

use burnsim_web::sim::accel::*;
use burnsim_web::sim::{BurnClock, BurnModel};
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

const SLOW: u64 = 600_000;
const FASTEST: u64 = 120_000;
const RAMP: u64 = 30_000;

#[test]
fn curve_saturates_at_the_ramp() {
    assert_eq!(acceleration_factor(ms(RAMP), ms(RAMP)), 10.0);
    assert_eq!(acceleration_curve(ms(RAMP), ms(RAMP)), 1.0);
    assert_eq!(acceleration_factor(ms(RAMP * 4), ms(RAMP)), 10.0);
    assert_eq!(
        effective_duration(ms(RAMP), ms(SLOW), ms(FASTEST), ms(RAMP)),
        ms(FASTEST)
    );
    assert_eq!(
        effective_duration(ms(90_000), ms(SLOW), ms(FASTEST), ms(RAMP)),
        ms(FASTEST)
    );
}

#[test]
fn curve_is_convex_before_the_ramp() {
    assert_eq!(acceleration_curve(Duration::ZERO, ms(RAMP)), 0.0);
    let half = acceleration_curve(ms(RAMP / 2), ms(RAMP));
    assert!((half - 0.25).abs() < 1e-9);
    assert_eq!(
        effective_duration(Duration::ZERO, ms(SLOW), ms(FASTEST), ms(RAMP)),
        ms(SLOW)
    );
}

#[test]
fn progress_is_monotonic_and_reaches_one() {
    let mut prev = 0.0;
    for s in 0..=130u64 {
        let p = progress(ms(s * 1_000), ms(SLOW), ms(FASTEST), ms(RAMP));
        assert!(p >= prev, "progress fell at {s}s");
        assert!((0.0..=1.0).contains(&p));
        prev = p;
    }
    assert_eq!(progress(ms(FASTEST), ms(SLOW), ms(FASTEST), ms(RAMP)), 1.0);
}

#[test]
fn hold_state_does_not_change_accelerating_rate() {
    let model = BurnModel::accelerating();
    let idle = BurnClock::new(model, ms(0));
    let mut held = BurnClock::new(model, ms(0));
    held.on_activation_edge(ms(5_000));
    held.on_deactivation_edge(ms(15_000));
    held.on_activation_edge(ms(20_000));
    assert_eq!(idle.effective_time(ms(40_000)), held.effective_time(ms(40_000)));
    assert_eq!(idle.progress(ms(40_000)), held.progress(ms(40_000)));
}
