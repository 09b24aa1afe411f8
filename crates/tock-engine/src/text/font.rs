use std::path::{Path, PathBuf};

use super::TextError;

/// A font opened at a fixed pixel size.
///
/// Owns the parsed font data; dropping it releases everything the open
/// acquired.
pub struct Font {
    inner: fontdue::Font,
    size: f32,
    path: PathBuf,
}

impl Font {
    /// Pixel size the font was opened at.
    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub(crate) fn raw(&self) -> &fontdue::Font {
        &self.inner
    }
}

/// Reads and parses the font file at `path` for rendering at `size` pixels.
pub fn open_font(path: impl AsRef<Path>, size: f32) -> Result<Font, TextError> {
    let path = path.as_ref();

    if !(size.is_finite() && size > 0.0) {
        return Err(TextError::open_font(path, format!("invalid point size {size}")));
    }

    let bytes = std::fs::read(path).map_err(|e| TextError::open_font(path, e))?;

    // `scale` is the size glyph outlines are optimized for; match the render size.
    let settings = fontdue::FontSettings {
        scale: size,
        ..fontdue::FontSettings::default()
    };
    let inner = fontdue::Font::from_bytes(bytes, settings).map_err(|e| TextError::open_font(path, e))?;

    log::trace!("opened font {} at {size}px", path.display());

    Ok(Font {
        inner,
        size,
        path: path.to_path_buf(),
    })
}
