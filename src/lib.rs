//! Burning cigarette simulator for the browser.
//!
//! `sim` is the platform-independent burn model and builds everywhere. The
//! remaining modules drive it from the DOM, Canvas 2D and WebAudio and are
//! only compiled for `wasm32`.

pub mod sim;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod audio;
#[cfg(target_arch = "wasm32")]
mod constants;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod render;
