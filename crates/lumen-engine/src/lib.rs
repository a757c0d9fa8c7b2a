//! Lumen engine crate.
//!
//! Immediate-mode 2D drawing for transparent, click-through overlay windows:
//! geometry and colors, the per-frame draw list, the wgpu renderer, and the
//! platform runtime that keeps the overlay on top of a tracked window.

pub mod config;
pub mod coords;
pub mod core;
pub mod device;
pub mod draw;
pub mod logging;
pub mod paint;
pub mod render;
pub mod track;
pub mod window;
