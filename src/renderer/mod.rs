//! Backdrop rendering
//!
//! Immediate-mode 2D drawing through the `DrawSurface` trait: a Canvas 2D
//! context in the browser, a command recorder everywhere else.

pub mod frame;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use frame::{FrameStats, draw_frame, draw_particle};
pub use surface::{DrawCommand, DrawSurface, RecordingSurface};
