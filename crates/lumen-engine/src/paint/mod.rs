//! Paint model for overlay geometry.
//!
//! Scope:
//! - straight-alpha color representation
//! - two-stop rectangle gradients
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;

pub use color::Color;
pub use gradient::{GradientAxis, LinearGradient};
