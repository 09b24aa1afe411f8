//! Color types shared between the rasterizer and renderers.

pub mod color;

pub use color::{Color, Rgba8};
