// Host-side tests for render throttling and loop generations.

use burnsim_web::sim::{FrameThrottle, RenderLoop, Tick};
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn throttle_admits_first_tick_then_one_per_interval() {
    let mut t = FrameThrottle::new(ms(100));
    assert!(t.admit(ms(3)));
    assert!(!t.admit(ms(19)));
    assert!(!t.admit(ms(102)));
    assert!(t.admit(ms(103)));
    assert!(!t.admit(ms(150)));
    assert!(t.admit(ms(260)));
}

#[test]
fn throttle_survives_frame_jitter() {
    // 60 Hz delivery with uneven gaps: renders keep happening roughly every 100ms
    let mut t = FrameThrottle::new(ms(100));
    let mut now = 0u64;
    let mut admitted = Vec::new();
    for gap in [16, 17, 16, 33, 8, 16, 50, 16, 16, 17, 16, 16, 40, 16, 16].iter().cycle().take(120) {
        now += gap;
        if t.admit(ms(now)) {
            admitted.push(now);
        }
    }
    assert!(admitted.len() > 10);
    for pair in admitted.windows(2) {
        assert!(pair[1] - pair[0] >= 100);
        assert!(pair[1] - pair[0] < 150);
    }
}

#[test]
fn stopped_loop_rejects_old_tickets() {
    let mut lp = RenderLoop::new(ms(100));
    let first = lp.start();
    assert_eq!(lp.tick(first, ms(0)), Tick::Render);
    assert_eq!(lp.tick(first, ms(50)), Tick::Throttled);
    lp.stop();
    assert!(!lp.is_running());
    assert_eq!(lp.tick(first, ms(500)), Tick::Stale);

    let second = lp.start();
    assert_ne!(first, second);
    assert_eq!(lp.tick(first, ms(600)), Tick::Stale);
    assert_eq!(lp.tick(second, ms(600)), Tick::Render);
}

#[test]
fn restart_resets_throttle() {
    let mut lp = RenderLoop::new(ms(100));
    let a = lp.start();
    assert_eq!(lp.tick(a, ms(1_000)), Tick::Render);
    let b = lp.start();
    assert_eq!(lp.tick(b, ms(1_010)), Tick::Render);
}
