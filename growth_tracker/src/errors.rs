use thiserror::Error;

use crate::providers::{ProviderError, ProviderInitError};
use crate::render::RenderError;
use crate::series::SeriesError;

/// The unified error type for the `growth_tracker` crate.
#[derive(Debug, Error)]
pub enum Error {
    /// An error originating from an archival source (e.g., API error,
    /// validation).
    #[error("Source error: {0}")]
    Provider(#[from] ProviderError),

    /// The archival source could not be constructed.
    #[error("Source initialization error: {0}")]
    ProviderInit(#[from] ProviderInitError),

    /// A numeric transform rejected its input.
    #[error("Series transform error: {0}")]
    Series(#[from] SeriesError),

    /// An error while drawing or encoding the animation.
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// An error related to configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A generic I/O error.
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}
