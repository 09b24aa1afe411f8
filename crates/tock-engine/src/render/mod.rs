//! GPU rendering.
//!
//! Convention:
//! - CPU geometry is in logical canvas units (top-left origin, +Y down).
//! - Vertex shaders convert to NDC using a viewport uniform.

mod common;
mod ctx;
mod image;
mod texture;

pub use ctx::{RenderCtx, RenderTarget};
pub use image::ImageRenderer;
pub use texture::{render_text, TextTexture};
