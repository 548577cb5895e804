use thiserror::Error;

/// Raised by a save listener that could not reach a decision.
///
/// The pipeline never propagates this: a faulting listener counts as a veto.
#[derive(Debug, Error)]
pub enum ListenerError {
    #[error("listener failed: {0}")]
    Failed(String),

    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl ListenerError {
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed(reason.into())
    }
}

/// Errors that can occur while loading a background image
#[derive(Debug, Error)]
pub enum ImageLoadError {
    #[error("Failed to read image file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("File path access not supported on this platform: {0}")]
    Unsupported(String),
}
