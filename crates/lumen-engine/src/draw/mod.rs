//! Immediate-mode draw list.
//!
//! Responsibilities:
//! - accumulate one frame of colored, NDC-space vertices
//! - record one [`DrawCmd`] per shape submission, in submission order
//! - keep shape tessellation isolated per shape file under `draw::shapes`
//!
//! The list is drained by [`FrameRenderer`](crate::render::FrameRenderer)
//! once per frame; nothing carries over between frames.

mod cmd;
mod list;
mod vertex;

pub mod shapes;

pub use cmd::{DrawCmd, Topology, draw_ranges};
pub use list::DrawList;
pub use vertex::Vertex;
