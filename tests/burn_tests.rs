// Host-side tests for the burn clock and hold-edge folding.

use burnsim_web::sim::burn::{progress, visible_length};
use burnsim_web::sim::{BurnClock, BurnModel, BurnState, Edge};
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn reference_model() -> BurnModel {
    BurnModel::Multiplier {
        passive_burn: ms(600_000),
        active_multiplier: 8.0,
    }
}

fn length_at(clock: &BurnClock, now: Duration) -> f32 {
    visible_length(230.0, clock.progress(now))
}

#[test]
fn idle_for_full_duration_consumes_everything() {
    let clock = BurnClock::new(reference_model(), ms(0));
    assert_eq!(length_at(&clock, ms(600_000)), 0.0);
    assert!((length_at(&clock, ms(300_000)) - 115.0).abs() < 1e-3);
}

#[test]
fn holding_for_75_seconds_consumes_everything() {
    let mut clock = BurnClock::new(reference_model(), ms(0));
    assert!(clock.on_activation_edge(ms(0)));
    assert_eq!(clock.effective_time(ms(75_000)), ms(600_000));
    assert_eq!(length_at(&clock, ms(75_000)), 0.0);
}

#[test]
fn hold_ten_seconds_then_release() {
    let mut clock = BurnClock::new(reference_model(), ms(0));
    clock.on_activation_edge(ms(0));
    clock.on_deactivation_edge(ms(10_000));
    assert_eq!(clock.state().accumulated, ms(80_000));
    let len = length_at(&clock, ms(10_000));
    assert!((len - 199.333).abs() < 0.01, "got {len}");
}

#[test]
fn passive_segment_is_folded_at_weight_one_on_activation() {
    let mut clock = BurnClock::new(reference_model(), ms(1_000));
    clock.on_activation_edge(ms(6_000));
    assert_eq!(clock.state().accumulated, ms(5_000));
    assert_eq!(clock.state().last_transition, ms(6_000));
    assert!(clock.is_active());
}

#[test]
fn repeated_edges_do_not_double_count() {
    let mut clock = BurnClock::new(reference_model(), ms(0));
    assert!(clock.on_activation_edge(ms(1_000)));
    assert!(!clock.on_activation_edge(ms(2_000)));
    assert!(!clock.on_activation_edge(ms(3_000)));
    assert_eq!(clock.state().accumulated, ms(1_000));
    assert_eq!(clock.state().last_transition, ms(1_000));

    assert!(clock.on_deactivation_edge(ms(4_000)));
    assert!(!clock.on_deactivation_edge(ms(5_000)));
    // 1s passive + 3s held at x8
    assert_eq!(clock.state().accumulated, ms(25_000));
    assert_eq!(clock.effective_time(ms(5_000)), ms(26_000));
}

#[test]
fn effective_time_is_continuous_across_edges() {
    let mut clock = BurnClock::new(reference_model(), ms(0));
    clock.on_activation_edge(ms(2_000));
    let before = clock.effective_time(ms(7_500));
    clock.on_deactivation_edge(ms(7_500));
    let after = clock.effective_time(ms(7_500));
    assert_eq!(before, after);

    let before = clock.effective_time(ms(9_000));
    clock.on_activation_edge(ms(9_000));
    assert_eq!(before, clock.effective_time(ms(9_000)));
}

#[test]
fn accumulated_time_is_monotonic_over_edge_sequences() {
    let mut clock = BurnClock::new(reference_model(), ms(0));
    let edges = [
        Edge::Activate,
        Edge::Activate,
        Edge::Deactivate,
        Edge::Activate,
        Edge::Deactivate,
        Edge::Deactivate,
        Edge::Activate,
    ];
    let mut prev_acc = Duration::ZERO;
    let mut prev_eff = Duration::ZERO;
    for (i, edge) in edges.iter().enumerate() {
        let now = ms(1_000 + i as u64 * 750);
        clock.apply(*edge, now);
        assert!(clock.state().accumulated >= prev_acc);
        assert!(clock.effective_time(now) >= prev_eff);
        prev_acc = clock.state().accumulated;
        prev_eff = clock.effective_time(now);
    }
}

#[test]
fn length_never_increases_and_stays_zero() {
    let mut clock = BurnClock::new(reference_model(), ms(0));
    let mut prev = 230.0_f32;
    for step in 0..200u64 {
        let now = ms(step * 5_000);
        if step % 7 == 0 {
            clock.on_activation_edge(now);
        } else if step % 7 == 3 {
            clock.on_deactivation_edge(now);
        }
        let len = length_at(&clock, now);
        assert!(len >= 0.0);
        assert!(len <= prev, "length grew at step {step}: {prev} -> {len}");
        prev = len;
    }
    assert_eq!(prev, 0.0);
}

#[test]
fn timestamps_behind_last_edge_add_nothing() {
    let mut state = BurnState::new(ms(10_000));
    assert_eq!(state.live_segment(ms(9_000), 8.0), Duration::ZERO);
    state.transition(true, ms(8_000), 8.0);
    assert_eq!(state.accumulated, Duration::ZERO);
    assert_eq!(state.last_transition, ms(10_000));
}

#[test]
fn progress_and_length_clamp() {
    assert_eq!(progress(ms(1_200_000), ms(600_000)), 1.0);
    assert_eq!(progress(Duration::ZERO, ms(600_000)), 0.0);
    assert_eq!(visible_length(230.0, 1.0), 0.0);
    assert_eq!(visible_length(230.0, 0.0), 230.0);
}

#[test]
fn huge_multiplier_saturates_instead_of_overflowing() {
    let mut state = BurnState::new(ms(0));
    state.transition(true, ms(0), 1e20);
    assert_eq!(state.effective_time(ms(1_000), 1e20), Duration::MAX);
    state.transition(false, ms(2_000), 1e20);
    assert_eq!(state.accumulated, Duration::MAX);
    assert_eq!(state.effective_time(ms(60_000), 1e20), Duration::MAX);

    let mut clock = BurnClock::new(
        BurnModel::Multiplier {
            passive_burn: ms(600_000),
            active_multiplier: 1e20,
        },
        ms(0),
    );
    clock.on_activation_edge(ms(0));
    assert_eq!(clock.progress(ms(1_000)), 1.0);
    assert_eq!(length_at(&clock, ms(1_000)), 0.0);
}
