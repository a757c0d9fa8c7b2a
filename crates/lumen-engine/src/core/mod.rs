//! Core engine-facing contracts.
//!
//! This module defines the interface between the overlay runtime (platform
//! loop) and the host that draws into it.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;
