use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use tock_engine::clock;
use tock_engine::coords::Canvas;
use tock_engine::core::{App, AppControl, FrameCtx};
use tock_engine::paint::{Color, Rgba8};
use tock_engine::render::{render_text, ImageRenderer};

/// Font file inside the resource directory.
pub const FONT_FILE: &str = "sample.ttf";
pub const FONT_SIZE: f32 = 64.0;
pub const TEXT_COLOR: Rgba8 = Rgba8::WHITE;
const CLEAR_COLOR: Color = Color::BLACK;

/// Logical drawing area; the window opens at this size.
pub const CANVAS: Canvas = Canvas::new(640, 480);
pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Draws the local time, centered, once per frame.
///
/// The font is reopened and the text image rebuilt every frame; the image
/// never outlives the frame that made it.
pub struct ClockApp {
    font_path: PathBuf,
    renderer: ImageRenderer,
}

impl ClockApp {
    pub fn new(font_path: PathBuf) -> Self {
        Self {
            font_path,
            renderer: ImageRenderer::new(),
        }
    }
}

impl App for ClockApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Result<AppControl> {
        let text = clock::format_clock(&clock::now_local())
            .context("failed to format the current time")?;

        let image = render_text(ctx.gpu, &text, &self.font_path, FONT_SIZE, TEXT_COLOR)
            .context("failed to render the current time")?;

        let (w, h) = image.size();
        let origin = ctx.canvas.centered(w, h);
        log::debug!(
            "frame {}: {text:?} {w}x{h} at ({}, {})",
            ctx.time.frame_index,
            origin.x,
            origin.y
        );

        let renderer = &mut self.renderer;
        ctx.present(CLEAR_COLOR, |rctx, target| {
            renderer.draw(rctx, target, &image, origin);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tock_engine::text::{open_font, render_blended};

    const BUNDLED_FONT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../res/sample.ttf");

    #[test]
    fn clock_text_is_centered_on_the_canvas() {
        let font = open_font(BUNDLED_FONT, FONT_SIZE).unwrap();
        let surface = render_blended(&font, "03:15:30 PM", TEXT_COLOR).unwrap();
        let (w, h) = (surface.width(), surface.height());

        let (x, y) = CANVAS.centered_origin(w, h);
        assert_eq!(x, 320 - (w / 2) as i32);
        assert_eq!(y, 240 - (h / 2) as i32);
        assert!(x > 0 && y > 0, "64px clock text fits the canvas");
    }

    #[test]
    fn bundled_font_file_name_matches() {
        assert!(BUNDLED_FONT.ends_with(FONT_FILE));
    }
}
