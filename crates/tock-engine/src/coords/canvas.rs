use super::Vec2;

/// Fixed logical drawing area, in whole units.
///
/// Content is laid out against the canvas, not the window, so positions stay
/// stable regardless of the window's physical size or scale factor.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Top-left position that centers a `width` × `height` box.
    ///
    /// Integer halves are taken separately (`w/2 - box_w/2`), so odd sizes
    /// round toward the top-left. Boxes larger than the canvas get negative
    /// coordinates.
    #[inline]
    pub fn centered_origin(self, width: u32, height: u32) -> (i32, i32) {
        let x = (self.width / 2) as i32 - (width / 2) as i32;
        let y = (self.height / 2) as i32 - (height / 2) as i32;
        (x, y)
    }

    /// Same as [`centered_origin`](Self::centered_origin), as a `Vec2`.
    #[inline]
    pub fn centered(self, width: u32, height: u32) -> Vec2 {
        let (x, y) = self.centered_origin(width, height);
        Vec2::new(x as f32, y as f32)
    }

    /// A zero-sized canvas cannot be mapped to NDC.
    #[inline]
    pub fn is_drawable(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANVAS: Canvas = Canvas::new(640, 480);

    #[test]
    fn centers_even_box() {
        // A 64 px "03:15:30 PM" renders around 380 × 75.
        assert_eq!(CANVAS.centered_origin(380, 76), (320 - 190, 240 - 38));
    }

    #[test]
    fn odd_sizes_use_integer_halves() {
        assert_eq!(CANVAS.centered_origin(201, 75), (320 - 100, 240 - 37));
    }

    #[test]
    fn oversized_box_goes_negative() {
        assert_eq!(CANVAS.centered_origin(1000, 600), (-180, -60));
    }

    #[test]
    fn empty_box_sits_at_center() {
        assert_eq!(CANVAS.centered_origin(0, 0), (320, 240));
    }

    #[test]
    fn vec2_matches_integer_origin() {
        assert_eq!(CANVAS.centered(201, 75), Vec2::new(220.0, 203.0));
    }

    #[test]
    fn zero_sized_canvas_is_not_drawable() {
        assert!(CANVAS.is_drawable());
        assert!(!Canvas::new(0, 480).is_drawable());
    }
}
