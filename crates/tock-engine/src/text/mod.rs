//! CPU text rasterization.
//!
//! Loads a TrueType/OpenType font from disk and renders a single line of text
//! into an anti-aliased RGBA8 surface. Uploading the surface to the GPU is the
//! renderer's job (see `render::render_text`).

mod error;
mod font;
mod surface;

pub use error::TextError;
pub use font::{open_font, Font};
pub use surface::{render_blended, TextSurface};
