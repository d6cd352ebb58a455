//! Font source selection.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default font file for the feature graphic, relative to the working directory.
pub const DEFAULT_FONT_PATH: &str = "assets/NotoSansJP.ttf";

/// Where text glyphs come from.
///
/// A `File` source that cannot be opened or parsed falls back to the
/// built-in bitmap font at load time; it is never a hard error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FontSource {
    /// A TrueType/OpenType font file on disk.
    File { path: PathBuf },
    /// The built-in bitmap font.
    #[default]
    SystemDefault,
}

impl FontSource {
    /// Creates a file font source.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        FontSource::File { path: path.into() }
    }

    /// The bundled Noto Sans JP location used by the shipped artwork.
    pub fn bundled() -> Self {
        Self::file(DEFAULT_FONT_PATH)
    }

    /// Returns the file path, if this is a file source.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            FontSource::File { path } => Some(path.as_path()),
            FontSource::SystemDefault => None,
        }
    }
}
