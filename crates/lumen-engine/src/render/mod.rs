//! GPU rendering subsystem.
//!
//! [`FrameRenderer`] consumes a [`DrawList`](crate::draw::DrawList) each frame
//! and issues one wgpu draw per recorded command.
//!
//! Convention:
//! - vertices arrive in NDC with straight-alpha colors
//! - the pass loads the target, so callers clear it first

mod ctx;
mod pipeline;
mod renderer;

pub use ctx::{RenderCtx, RenderTarget};
pub use renderer::{FrameRenderer, FrameStats};
