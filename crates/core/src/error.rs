//! Error type for report generation.

use semaforo_traits::{CanvasError, ImageError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Image processing failed: {0}")]
    Image(#[from] ImageError),
    #[error("Drawing failed: {0}")]
    Canvas(#[from] CanvasError),
    #[error("Invalid data URL: {0}")]
    DataUrl(String),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReportError {
    /// Message suitable for showing to the person who uploaded a file.
    pub fn user_message(&self) -> String {
        match self {
            ReportError::Image(ImageError::Decode(_))
            | ReportError::Canvas(CanvasError::Image(ImageError::Decode(_)))
            | ReportError::DataUrl(_) => {
                "could not process the image, try another one".to_string()
            }
            other => other.to_string(),
        }
    }
}
