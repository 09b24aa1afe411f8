use std::fmt;
use std::path::PathBuf;

/// Failure in one of the text pipeline stages.
///
/// Each stage fails independently; the variant names the stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextError {
    /// The font file could not be read or parsed.
    OpenFont { path: PathBuf, reason: String },
    /// The text could not be rasterized into a surface.
    Render(String),
    /// The surface could not be turned into a GPU texture.
    Upload(String),
}

impl TextError {
    pub(crate) fn open_font(path: impl Into<PathBuf>, reason: impl fmt::Display) -> Self {
        Self::OpenFont {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for TextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenFont { path, reason } => {
                write!(f, "open font error: {}: {reason}", path.display())
            }
            Self::Render(reason) => write!(f, "render text error: {reason}"),
            Self::Upload(reason) => write!(f, "create texture error: {reason}"),
        }
    }
}

impl std::error::Error for TextError {}
