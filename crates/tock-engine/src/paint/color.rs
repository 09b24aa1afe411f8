/// Linear premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are multiplied by `a` (premultiplied alpha).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self::from_premul(0.0, 0.0, 0.0, 1.0);

    /// Creates a premultiplied color from premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub(crate) fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }
}

/// Straight-alpha 8-bit RGBA, the pixel format produced by the text rasterizer.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_clears_to_opaque_black() {
        assert_eq!(Color::BLACK.to_wgpu(), wgpu::Color::BLACK);
    }

    #[test]
    fn rgba8_packs_in_channel_order() {
        assert_eq!(Rgba8::new(1, 2, 3, 4).to_array(), [1, 2, 3, 4]);
        assert_eq!(Rgba8::WHITE.to_array(), [255; 4]);
    }
}
