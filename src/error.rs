// A small hand-written error type instead of anyhow/thiserror.
// Every variant states *where* things went wrong.
use std::fmt::{self, Display};
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Config(String),                                              // Bad flags (missing layer path, crop ratio out of range)
    LoadLayer { path: PathBuf, source: image::ImageError },      // Opening/decoding a layer PNG failed
    OutputDir(PathBuf),                                          // Output directory missing or not a directory
    SaveIcon { path: PathBuf, source: image::ImageError },       // Encoding/writing an icon failed
}

impl Display for Error {
    // This decides how the error is printed to your console.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(s) => write!(f, "Config error: {s}"),
            Error::LoadLayer { path, source } => {
                write!(f, "Failed to load layer {}: {source}", path.display())
            }
            Error::OutputDir(path) => {
                write!(f, "Output directory {} does not exist or is not a directory", path.display())
            }
            Error::SaveIcon { path, source } => {
                write!(f, "Failed to save icon {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::LoadLayer { source, .. } | Error::SaveIcon { source, .. } => Some(source),
            Error::Config(_) | Error::OutputDir(_) => None,
        }
    }
}
