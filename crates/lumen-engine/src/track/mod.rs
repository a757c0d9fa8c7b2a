//! Target-window tracking.
//!
//! The overlay follows another application's window. Discovering that window
//! is platform glue outside this crate; the runtime only needs its current
//! screen rectangle each frame, through [`TargetWindow`].

mod target;

pub use target::{FixedTarget, TargetWindow, TrackedRect};
