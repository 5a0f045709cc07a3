//! Asset error types
//!
//! Provides error handling for loading the image assets the demo needs.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error type for asset operations
#[derive(Debug)]
pub enum AssetError {
    /// IO error (file not found, permission denied, etc.)
    Io { path: PathBuf, source: io::Error },
    /// The file was read but could not be decoded as an image
    Decode { path: PathBuf, message: String },
    /// The image decoded to zero width or height
    Empty(PathBuf),
}

impl AssetError {
    /// True if the underlying cause is a missing file
    pub fn is_not_found(&self) -> bool {
        matches!(self, AssetError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Io { path, source } => {
                write!(f, "Asset IO error for '{}': {}", path.display(), source)
            }
            AssetError::Decode { path, message } => {
                write!(f, "Asset decode error for '{}': {}", path.display(), message)
            }
            AssetError::Empty(path) => write!(f, "Asset '{}' is an empty image", path.display()),
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::Io { source, .. } => Some(source),
            AssetError::Decode { .. } => None,
            AssetError::Empty(_) => None,
        }
    }
}
