//! Platform-independent burn model. Nothing in here touches the browser, so
//! it builds and tests on the host.

pub mod accel;
pub mod burn;
pub mod config;
pub mod constants;
pub mod frame;
pub mod input;
pub mod session;
pub mod smoke;

pub use burn::{BurnClock, BurnState};
pub use config::{BurnConfig, BurnModel, ConfigError};
pub use frame::{FrameScheduler, FrameThrottle, FrameTicket, RenderLoop, Tick};
pub use input::{edge_for, Edge, RawInput};
pub use session::{
    BurnSimulator, Cue, CueBuffer, CueCommand, FrameView, Phase, Prompt, RestartError,
};
