//! Capability interfaces between the report layout logic and its host.
//!
//! The layout code in `semaforo-core` only talks to a [`DocumentCanvas`] and an
//! [`ImageDecoder`]. Host adapters (the `lopdf` canvas, the `image`-crate
//! rasterizer) implement these; [`RecordingCanvas`] captures drawing calls for
//! inspection.

pub mod canvas;
pub mod image;
pub mod recording;

pub use canvas::{CanvasError, DocumentCanvas};
pub use image::{ImageDecoder, ImageError};
pub use recording::{DrawCommand, RecordingCanvas};
