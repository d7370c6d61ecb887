// Default burn tuning. Every value here can be overridden per session through
// `BurnConfig`; these only seed `BurnConfig::default()`.

// Geometry
pub const INITIAL_LENGTH_PX: f32 = 230.0; // paper body height at ignition

// Multiplier model
pub const PASSIVE_BURN_MS: u64 = 600_000; // idle burn: ten minutes end to end
pub const ACTIVE_BURN_MULTIPLIER: f64 = 8.0; // held input burns this many times faster

// Acceleration model
pub const ACCEL_SLOW_BURN_MS: u64 = 600_000; // burn duration at ignition
pub const ACCEL_FASTEST_BURN_MS: u64 = 120_000; // burn duration once the curve saturates
pub const ACCEL_RAMP_MS: u64 = 30_000; // total burn time at which the curve saturates
pub const ACCEL_FACTOR_CAP: f64 = 10.0;

// Render cadence, decoupled from the host frame rate
pub const TICK_INTERVAL_MS: u64 = 100;

// Cue levels (0..1)
pub const LIGHT_VOLUME: f32 = 0.7;
pub const EXHALE_VOLUME: f32 = 0.6;
pub const SMOKE_IDLE_VOLUME: f32 = 0.1;
pub const SMOKE_ACTIVE_VOLUME: f32 = 0.8;
pub const SMOKE_LOOP_DELAY_MS: u64 = 1_000; // gap between the lighter and the smoke bed
