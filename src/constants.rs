// Visual and audio tuning for the web front-end. Burn timing lives in
// `sim::constants`.

// Cigarette layout (CSS px; the canvas transform applies devicePixelRatio)
pub const BODY_WIDTH_PX: f64 = 48.0;
pub const EMBER_WIDTH_PX: f64 = 32.0;
pub const EMBER_HEIGHT_PX: f64 = 32.0;
pub const FILTER_HEIGHT_PX: f64 = 64.0;
pub const BOTTOM_MARGIN_PX: f64 = 160.0; // room for the prompt under the filter
pub const CORNER_RADIUS_PX: f64 = 12.0;
pub const OUTLINE_WIDTH_PX: f64 = 2.0;

// Colours
pub const BACKGROUND: &str = "#000000";
pub const PAPER_TOP: &str = "#f5f5f5";
pub const PAPER_BOTTOM: &str = "#e0e0e0";
pub const PAPER_EDGE: &str = "#bbbbbb";
pub const FILTER_TOP: &str = "#e0a96d";
pub const FILTER_BOTTOM: &str = "#b97a3a";
pub const ASH_EDGE: &str = "#a0a0a0";
pub const EMBER_ACTIVE: &str = "#ff1a00";
pub const EMBER_IDLE: &str = "#cc3300";
pub const GLOW_ACTIVE: &str = "#ff3c00";
pub const GLOW_IDLE: &str = "#cc3300";
pub const GLOW_ACTIVE_BLUR_PX: f64 = 15.0;
pub const GLOW_IDLE_BLUR_PX: f64 = 8.0;
pub const SMOKE_RGB: (u8, u8, u8) = (200, 200, 205);

// Smoke puffs
pub const SMOKE_PUFFS_MAX: usize = 24;
pub const SMOKE_SPAWN_PER_SEC: f32 = 6.0;
pub const SMOKE_LIFETIME_SEC: f32 = 2.4;
pub const SMOKE_RISE_PX_PER_SEC: f32 = 60.0;
pub const SMOKE_DRIFT_PX_PER_SEC: f32 = 14.0;
pub const SMOKE_BASE_RADIUS_PX: f32 = 8.0;
pub const SMOKE_GROWTH_PX_PER_SEC: f32 = 12.0;

// Cue synthesis
pub const MASTER_GAIN: f32 = 0.8;
pub const NOISE_BUFFER_SEC: f32 = 2.0;
pub const SMOKE_LOWPASS_HZ: f32 = 900.0;
pub const LIGHT_HIGHPASS_HZ: f32 = 2_000.0;
pub const LIGHT_DURATION_SEC: f64 = 0.45;
pub const EXHALE_BANDPASS_HZ: f32 = 1_200.0;
pub const EXHALE_RISE_SEC: f64 = 0.35;
pub const EXHALE_DURATION_SEC: f64 = 1.6;
pub const VOLUME_GLIDE_TAU_SEC: f64 = 0.08; // time constant for loop volume changes
