//! Error types for the sound-to-color pipeline.

use thiserror::Error;

/// Errors that can occur while turning a recording into a color
#[derive(Debug, Error)]
pub enum Error {
    /// File missing or unreadable
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Not a recognised waveform container, or corrupt sample data
    #[error("Unsupported or corrupt waveform: {0}")]
    Format(String),

    /// Value outside the domain of a conversion (e.g. log of 0 Hz)
    #[error("Domain error: {0}")]
    Domain(String),

    /// Invalid parameters
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Swatch could not be encoded or written
    #[error("Render error: {0}")]
    Render(String),
}

impl From<hound::Error> for Error {
    fn from(err: hound::Error) -> Self {
        match err {
            hound::Error::IoError(e) => Error::Io(e),
            other => Error::Format(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
