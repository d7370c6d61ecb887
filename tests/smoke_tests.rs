// Host-side tests for smoke puff emission.

use burnsim_web::sim::smoke::{SmokeField, SmokeParams};
use glam::Vec2;

fn params() -> SmokeParams {
    SmokeParams {
        max_puffs: 5,
        spawn_per_sec: 10.0,
        lifetime_sec: 1.0,
        rise_px_per_sec: 60.0,
        drift_px_per_sec: 10.0,
        base_radius_px: 8.0,
        growth_px_per_sec: 12.0,
    }
}

#[test]
fn no_puffs_while_idle() {
    let mut field = SmokeField::new(params(), 7);
    for _ in 0..20 {
        field.step(0.1, false, Vec2::new(100.0, 100.0));
    }
    assert!(field.puffs().is_empty());
}

#[test]
fn emitting_spawns_rising_puffs_up_to_the_cap() {
    let mut field = SmokeField::new(params(), 7);
    field.step(0.15, true, Vec2::new(100.0, 100.0));
    assert_eq!(field.puffs().len(), 1);
    for _ in 0..8 {
        field.step(0.1, true, Vec2::new(100.0, 100.0));
    }
    assert!(field.puffs().len() <= 5);
    for puff in field.puffs() {
        assert!(puff.vel.y < 0.0, "smoke should rise");
        assert!(puff.pos.y <= 100.0);
    }
}

#[test]
fn puffs_fade_and_expire() {
    let mut field = SmokeField::new(params(), 3);
    field.step(0.2, true, Vec2::ZERO);
    let first = field.puffs()[0];
    let (r0, a0) = field.appearance(&first);
    field.step(0.5, false, Vec2::ZERO);
    let later = field.puffs()[0];
    let (r1, a1) = field.appearance(&later);
    assert!(r1 > r0);
    assert!(a1 < a0);
    field.step(0.6, false, Vec2::ZERO);
    assert!(field.puffs().is_empty());
}
