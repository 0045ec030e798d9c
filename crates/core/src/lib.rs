//! # semaforo-core
//!
//! Layout of branded PDF reports for the Semáforo news-monitoring dashboard.
//!
//! - **image_fit**: scale an uploaded logo into a bounding box and report its printed size
//! - **report**: [`ReportDocumentBuilder`], the header/footer frame every report shares
//! - **digest**: a paginated list of news items with red/yellow/green impact markers
//! - **config** / **data_url**: JSON configuration and `data:` URL image payloads
//!
//! Everything here draws through the [`DocumentCanvas`] and [`ImageDecoder`]
//! capability traits; the default host adapters are the `lopdf` canvas and
//! [`PngRasterizer`].

pub use semaforo_render_lopdf as render;
pub use semaforo_traits as traits;
pub use semaforo_types as types;

pub mod config;
pub mod data_url;
pub mod digest;
pub mod error;
pub mod image_fit;
pub mod preview;
pub mod report;

pub use config::{LogoSpec, ReportConfig};
pub use digest::{ImpactLevel, NewsItem};
pub use error::ReportError;
pub use image_fit::{fit_dimensions, fit_image, PngRasterizer};
pub use report::ReportDocumentBuilder;

pub use render::LopdfCanvas;
pub use traits::{CanvasError, DocumentCanvas, DrawCommand, ImageDecoder, ImageError, RecordingCanvas};
pub use types::{Orientation, RasterImage};
