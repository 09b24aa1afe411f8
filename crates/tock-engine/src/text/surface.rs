use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

use crate::paint::Rgba8;

use super::{Font, TextError};

const BYTES_PER_PIXEL: usize = 4;

/// CPU pixel surface holding one rendered line of text.
///
/// Pixels are straight-alpha RGBA8, row-major, tightly packed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSurface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl TextSurface {
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Bytes per row; rows are not padded.
    #[inline]
    pub fn stride(&self) -> u32 {
        self.width * BYTES_PER_PIXEL as u32
    }

    /// Returns the pixel at `(x, y)`, if in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        let p = &self.pixels[i..i + BYTES_PER_PIXEL];
        Some(Rgba8::new(p[0], p[1], p[2], p[3]))
    }
}

/// Renders `text` as a single anti-aliased line.
///
/// Every pixel carries `color`'s RGB; alpha is glyph coverage scaled by
/// `color.a`. The surface spans the pen advance and the font's line
/// (ascent − descent), grown to include any ink that reaches past them, such
/// as descenders, overhangs, or stacked accents. Text that lays out to zero
/// width fails.
pub fn render_blended(font: &Font, text: &str, color: Rgba8) -> Result<TextSurface, TextError> {
    let raw = font.raw();
    let size = font.size();

    let line = raw
        .horizontal_line_metrics(size)
        .ok_or_else(|| TextError::Render("font has no horizontal line metrics".to_string()))?;

    let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
    layout.reset(&LayoutSettings::default());
    layout.append(&[raw], &TextStyle::new(text, size, 0));
    let glyphs = layout.glyphs();

    // Pen position after each glyph, not the bitmap's right edge, so trailing
    // spaces and side bearings count toward the width.
    let extent = glyphs
        .iter()
        .map(|g| {
            let m = raw.metrics_indexed(g.key.glyph_index, size);
            (g.x - m.xmin as f32 + m.advance_width).max(0.0)
        })
        .fold(0.0f32, f32::max);

    let mut bounds = Bounds {
        left: 0,
        top: 0,
        right: extent.ceil() as i64,
        bottom: (line.ascent - line.descent).ceil() as i64,
    };
    if bounds.right == 0 || bounds.bottom == 0 {
        return Err(TextError::Render(format!("text {text:?} has zero width")));
    }

    let mut bitmaps = Vec::with_capacity(glyphs.len());
    for g in glyphs {
        if !g.char_data.rasterize() || g.width == 0 || g.height == 0 {
            continue;
        }
        let (metrics, coverage) = raw.rasterize_config(g.key);
        if metrics.width == 0 || metrics.height == 0 {
            continue;
        }
        let left = g.x.round() as i64;
        let top = g.y.round() as i64;
        bounds.include(left, top, metrics.width as i64, metrics.height as i64);
        bitmaps.push((left, top, metrics.width, coverage));
    }

    let width = (bounds.right - bounds.left) as usize;
    let height = (bounds.bottom - bounds.top) as usize;

    let mut pixels = color.to_array().repeat(width * height);
    for px in pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
        px[3] = 0;
    }

    for (left, top, glyph_width, coverage) in bitmaps {
        let x0 = (left - bounds.left) as usize;
        let y0 = (top - bounds.top) as usize;

        for (row, cov_row) in coverage.chunks_exact(glyph_width).enumerate() {
            for (col, &cov) in cov_row.iter().enumerate() {
                if cov == 0 {
                    continue;
                }
                let alpha = (cov as u16 * color.a as u16 / 255) as u8;
                let i = ((y0 + row) * width + x0 + col) * BYTES_PER_PIXEL + 3;
                // Overlapping glyphs (kerned pairs) keep the stronger coverage.
                pixels[i] = pixels[i].max(alpha);
            }
        }
    }

    Ok(TextSurface {
        width: width as u32,
        height: height as u32,
        pixels,
    })
}

/// Pixel box in layout space; `right`/`bottom` are exclusive.
#[derive(Debug, Copy, Clone)]
struct Bounds {
    left: i64,
    top: i64,
    right: i64,
    bottom: i64,
}

impl Bounds {
    fn include(&mut self, x: i64, y: i64, width: i64, height: i64) {
        self.left = self.left.min(x);
        self.top = self.top.min(y);
        self.right = self.right.max(x + width);
        self.bottom = self.bottom.max(y + height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::text::open_font;

    const SAMPLE_FONT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../res/sample.ttf");

    fn render(text: &str, size: f32, color: Rgba8) -> Result<TextSurface, TextError> {
        let font = open_font(SAMPLE_FONT, size)?;
        render_blended(&font, text, color)
    }

    fn max_alpha(s: &TextSurface) -> u8 {
        s.pixels().chunks_exact(4).map(|p| p[3]).max().unwrap_or(0)
    }

    #[test]
    fn clock_text_has_positive_size() {
        let s = render("03:15:30 PM", 64.0, Rgba8::WHITE).unwrap();
        assert!(s.width() > 0 && s.height() > 0);
        assert_eq!(s.pixels().len(), (s.stride() * s.height()) as usize);
        assert!(max_alpha(&s) >= 250);
    }

    #[test]
    fn valid_inputs_always_produce_pixels() {
        let texts = ["a", "Hello World!", "12:00:00 AM", "Zürich", "W W"];
        let sizes = [8.0, 16.0, 64.0, 120.0];

        for text in texts {
            for size in sizes {
                let s = render(text, size, Rgba8::WHITE).unwrap();
                assert!(s.width() > 0, "{text:?} at {size}");
                assert!(s.height() > 0, "{text:?} at {size}");
                assert!(max_alpha(&s) > 0, "{text:?} at {size}");
            }
        }
    }

    #[test]
    fn height_follows_line_metrics() {
        let font = open_font(SAMPLE_FONT, 64.0).unwrap();
        let line = font.raw().horizontal_line_metrics(64.0).unwrap();
        let s = render_blended(&font, "03:15:30 PM", Rgba8::WHITE).unwrap();
        assert_eq!(s.height(), (line.ascent - line.descent).ceil() as u32);
    }

    #[test]
    fn longer_text_is_wider() {
        let short = render("1:00", 64.0, Rgba8::WHITE).unwrap();
        let long = render("11:00:00 PM", 64.0, Rgba8::WHITE).unwrap();
        assert!(long.width() > short.width());
    }

    #[test]
    fn every_pixel_carries_the_text_color() {
        let color = Rgba8::new(10, 200, 30, 255);
        let s = render("Tock", 32.0, color).unwrap();
        for p in s.pixels().chunks_exact(4) {
            assert_eq!(&p[..3], &[10, 200, 30]);
        }
    }

    #[test]
    fn alpha_is_scaled_by_color_alpha() {
        let s = render("Tock", 32.0, Rgba8::new(255, 255, 255, 128)).unwrap();
        let a = max_alpha(&s);
        assert!(a > 0 && a <= 128, "{a}");
    }

    #[test]
    fn corners_are_transparent() {
        let s = render("o", 64.0, Rgba8::WHITE).unwrap();
        assert_eq!(s.pixel(0, 0).map(|p| p.a), Some(0));
        assert_eq!(s.pixel(s.width(), 0), None);
    }

    #[test]
    fn blank_text_is_transparent_but_sized() {
        let s = render("   ", 64.0, Rgba8::WHITE).unwrap();
        assert!(s.width() > 0);
        assert_eq!(max_alpha(&s), 0);
    }

    /// Nonzero coverage pixels fontdue produces for `c` on its own.
    fn ink_pixels(c: char, size: f32) -> usize {
        let font = open_font(SAMPLE_FONT, size).unwrap();
        let (_, coverage) = font.raw().rasterize(c, size);
        coverage.iter().filter(|&&a| a > 0).count()
    }

    #[test]
    fn overhanging_glyphs_keep_all_their_ink() {
        // Descender, right overhang, accent above the ascent.
        for c in ['j', 'f', '\u{1E4C}'] {
            let s = render(&c.to_string(), 64.0, Rgba8::WHITE).unwrap();
            let drawn = s.pixels().chunks_exact(4).filter(|p| p[3] > 0).count();
            assert_eq!(drawn, ink_pixels(c, 64.0), "{c:?}");
        }
    }

    #[test]
    fn surface_never_shrinks_below_the_line() {
        let font = open_font(SAMPLE_FONT, 64.0).unwrap();
        let line = font.raw().horizontal_line_metrics(64.0).unwrap();
        let s = render_blended(&font, "\u{1E4C}j", Rgba8::WHITE).unwrap();
        assert!(s.height() >= (line.ascent - line.descent).ceil() as u32);
    }

    #[test]
    fn empty_text_fails_to_render() {
        assert!(matches!(render("", 64.0, Rgba8::WHITE), Err(TextError::Render(_))));
    }
}
