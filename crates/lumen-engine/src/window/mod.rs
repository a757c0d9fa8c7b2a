//! Overlay window + runtime loop.
//!
//! Owns the `winit` EventLoop and the single overlay Window, keeps it glued to
//! the tracked target, and wires it to the GPU layer.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
