//! Coordinate and geometry types shared by the renderer and the app.
//!
//! Canonical CPU space:
//! - Logical units of the fixed canvas
//! - Origin top-left
//! - +X right, +Y down
//!
//! Renderers convert to NDC in shaders using the canvas size as a uniform.

mod canvas;
mod vec2;

pub use canvas::Canvas;
pub use vec2::Vec2;
