//! Coordinate and geometry types shared by the draw list and renderer.
//!
//! Canonical CPU space:
//! - Pixels of the overlay window
//! - Origin top-left
//! - +X right, +Y down
//!
//! Unlike an instanced renderer, the draw list converts to NDC on the CPU at
//! emission time through [`Viewport::to_ndc`], so shaders receive clip-space
//! positions directly.

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
