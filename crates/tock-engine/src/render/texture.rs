use std::path::Path;

use crate::device::Gpu;
use crate::paint::Rgba8;
use crate::text::{open_font, render_blended, TextError, TextSurface};

/// GPU image holding rendered text.
///
/// Dropping it releases the texture.
pub struct TextTexture {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
}

impl TextTexture {
    /// Uploads `surface` into a new sampled texture.
    pub fn upload(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        surface: &TextSurface,
    ) -> Result<Self, TextError> {
        let (width, height) = (surface.width(), surface.height());

        if width == 0 || height == 0 {
            return Err(TextError::Upload(format!("empty surface {width}x{height}")));
        }
        let max = device.limits().max_texture_dimension_2d;
        if width > max || height > max {
            return Err(TextError::Upload(format!(
                "surface {width}x{height} exceeds the {max} px texture limit"
            )));
        }

        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("tock text texture"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            surface.pixels(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(surface.stride()),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Ok(Self { texture, view })
    }

    /// Pixel size as `(width, height)`.
    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.texture.width(), self.texture.height())
    }

    #[inline]
    pub(crate) fn view(&self) -> &wgpu::TextureView {
        &self.view
    }
}

/// Opens `font_path` at `size` px, renders `text` in `color`, and uploads it.
///
/// Each stage is checked and logged on its own. The font and the CPU surface
/// are released before returning, whichever way it returns; the caller owns
/// the texture.
pub fn render_text(
    gpu: &Gpu<'_>,
    text: &str,
    font_path: &Path,
    size: f32,
    color: Rgba8,
) -> Result<TextTexture, TextError> {
    let font = open_font(font_path, size).inspect_err(|e| log::error!("{e}"))?;
    let surface = render_blended(&font, text, color).inspect_err(|e| log::error!("{e}"))?;
    drop(font);

    TextTexture::upload(gpu.device(), gpu.queue(), &surface).inspect_err(|e| log::error!("{e}"))
}
