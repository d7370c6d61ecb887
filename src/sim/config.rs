//! Per-session burn configuration.
//!
//! A `BurnConfig` is fixed for the lifetime of a session; restarting reuses
//! the same value. The web front-end builds one from the page's query string
//! so the timings can be tuned without a rebuild.

use super::constants::*;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// How wall-clock time turns into burn progress.
///
/// The two models are alternatives, not layers: a session runs exactly one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BurnModel {
    /// Idle time counts once, held time counts `active_multiplier` times.
    Multiplier {
        passive_burn: Duration,
        active_multiplier: f64,
    },
    /// Burn duration shrinks from `slow_burn` to `fastest_burn` along a
    /// convex curve over the first `ramp` of total burn time. Hold state does
    /// not change the rate.
    Accelerating {
        slow_burn: Duration,
        fastest_burn: Duration,
        ramp: Duration,
    },
}

impl BurnModel {
    pub fn multiplier() -> Self {
        BurnModel::Multiplier {
            passive_burn: Duration::from_millis(PASSIVE_BURN_MS),
            active_multiplier: ACTIVE_BURN_MULTIPLIER,
        }
    }

    pub fn accelerating() -> Self {
        BurnModel::Accelerating {
            slow_burn: Duration::from_millis(ACCEL_SLOW_BURN_MS),
            fastest_burn: Duration::from_millis(ACCEL_FASTEST_BURN_MS),
            ramp: Duration::from_millis(ACCEL_RAMP_MS),
        }
    }

    /// Weight applied to wall time while the hold gesture is active.
    pub fn active_weight(&self) -> f64 {
        match *self {
            BurnModel::Multiplier {
                active_multiplier, ..
            } => active_multiplier,
            BurnModel::Accelerating { .. } => 1.0,
        }
    }
}

impl Default for BurnModel {
    fn default() -> Self {
        Self::multiplier()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BurnConfig {
    pub initial_length: f32,
    pub model: BurnModel,
    pub tick_interval: Duration,
}

impl Default for BurnConfig {
    fn default() -> Self {
        Self {
            initial_length: INITIAL_LENGTH_PX,
            model: BurnModel::default(),
            tick_interval: Duration::from_millis(TICK_INTERVAL_MS),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("initial length must be a positive number, got {0}")]
    NonPositiveLength(f32),
    #[error("`{0}` must be longer than zero")]
    ZeroDuration(&'static str),
    #[error("active multiplier must be a finite number >= 1, got {0}")]
    MultiplierBelowOne(f64),
    #[error("fastest burn {fastest:?} is slower than the initial burn {slow:?}")]
    FastestSlowerThanSlow { slow: Duration, fastest: Duration },
    #[error("unknown burn model `{0}` (expected `multiplier` or `accelerating`)")]
    UnknownModel(String),
    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },
}

impl BurnConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.initial_length > 0.0 && self.initial_length.is_finite()) {
            return Err(ConfigError::NonPositiveLength(self.initial_length));
        }
        if self.tick_interval.is_zero() {
            return Err(ConfigError::ZeroDuration("tick"));
        }
        match self.model {
            BurnModel::Multiplier {
                passive_burn,
                active_multiplier,
            } => {
                if passive_burn.is_zero() {
                    return Err(ConfigError::ZeroDuration("duration"));
                }
                if !(active_multiplier.is_finite() && active_multiplier >= 1.0) {
                    return Err(ConfigError::MultiplierBelowOne(active_multiplier));
                }
            }
            BurnModel::Accelerating {
                slow_burn,
                fastest_burn,
                ramp,
            } => {
                if slow_burn.is_zero() {
                    return Err(ConfigError::ZeroDuration("duration"));
                }
                if fastest_burn.is_zero() {
                    return Err(ConfigError::ZeroDuration("fastest"));
                }
                if ramp.is_zero() {
                    return Err(ConfigError::ZeroDuration("ramp"));
                }
                if fastest_burn > slow_burn {
                    return Err(ConfigError::FastestSlowerThanSlow {
                        slow: slow_burn,
                        fastest: fastest_burn,
                    });
                }
            }
        }
        Ok(())
    }

    /// Build a config from a URL query string such as
    /// `?length=180&duration=300000&multiplier=6`.
    ///
    /// Durations are milliseconds. `model=accelerating` switches models, in
    /// which case `duration` is the initial (slow) burn and `fastest`/`ramp`
    /// apply. Unknown keys are ignored; anything malformed is an error.
    pub fn from_query(query: &str) -> Result<Self, ConfigError> {
        let mut cfg = Self::default();
        let mut accelerating = false;
        let mut duration = None;
        let mut multiplier = None;
        let mut fastest = None;
        let mut ramp = None;

        let pairs = query
            .trim_start_matches('?')
            .split('&')
            .filter(|p| !p.is_empty());
        for pair in pairs {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "length" => cfg.initial_length = parse_value(key, value)?,
                "tick" => cfg.tick_interval = parse_millis(key, value)?,
                "duration" => duration = Some(parse_millis(key, value)?),
                "multiplier" => multiplier = Some(parse_value::<f64>(key, value)?),
                "fastest" => fastest = Some(parse_millis(key, value)?),
                "ramp" => ramp = Some(parse_millis(key, value)?),
                "model" => {
                    accelerating = match value {
                        "multiplier" => false,
                        "accelerating" => true,
                        other => return Err(ConfigError::UnknownModel(other.to_string())),
                    }
                }
                _ => {}
            }
        }

        cfg.model = if accelerating {
            BurnModel::Accelerating {
                slow_burn: duration.unwrap_or(Duration::from_millis(ACCEL_SLOW_BURN_MS)),
                fastest_burn: fastest.unwrap_or(Duration::from_millis(ACCEL_FASTEST_BURN_MS)),
                ramp: ramp.unwrap_or(Duration::from_millis(ACCEL_RAMP_MS)),
            }
        } else {
            BurnModel::Multiplier {
                passive_burn: duration.unwrap_or(Duration::from_millis(PASSIVE_BURN_MS)),
                active_multiplier: multiplier.unwrap_or(ACTIVE_BURN_MULTIPLIER),
            }
        };
        cfg.validate()?;
        Ok(cfg)
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_millis(key: &str, value: &str) -> Result<Duration, ConfigError> {
    parse_value::<u64>(key, value).map(Duration::from_millis)
}
