//! The drawing primitive the report builder lays out onto.

use semaforo_types::{Color, FontWeight, RasterImage, Size, TextAlign};
use thiserror::Error;

use crate::image::ImageError;

#[derive(Error, Debug)]
pub enum CanvasError {
    #[error("Page {requested} does not exist (document has {available} pages)")]
    InvalidPage { requested: usize, available: usize },

    #[error("Image could not be placed: {0}")]
    Image(#[from] ImageError),

    #[error("PDF serialization error: {0}")]
    Pdf(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A paginated vector surface measured in millimetres.
///
/// The origin is the top-left corner of the page and `y` grows downwards.
/// For text, `y` is the baseline. Every drawing call applies to the current
/// page; a new canvas starts with one page, which is current.
///
/// # Font state
///
/// `set_font` and `set_fill_color` are sticky: they affect every following
/// `draw_text`/`fill_circle` until changed, on any page.
pub trait DocumentCanvas {
    /// Width and height of every page.
    fn page_size(&self) -> Size;

    fn page_count(&self) -> usize;

    /// 1-based index of the page that receives drawing calls.
    fn current_page(&self) -> usize;

    /// Appends a blank page and makes it current.
    fn add_page(&mut self);

    /// Makes an existing page current (1-based).
    fn set_page(&mut self, page: usize) -> Result<(), CanvasError>;

    fn set_font(&mut self, weight: FontWeight, size_pt: f32);

    fn set_fill_color(&mut self, color: Color);

    /// Width of `text` in the current font, in millimetres.
    fn text_width(&self, text: &str) -> f32;

    fn draw_text(&mut self, text: &str, x: f32, y: f32, align: TextAlign);

    /// Places an encoded image with its top-left corner at `(x, y)`.
    fn draw_image(
        &mut self,
        image: &RasterImage,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Result<(), CanvasError>;

    fn set_line_width(&mut self, width: f32);

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32);

    /// Serializes the document as it stands. Does not consume or lock the
    /// canvas; drawing may continue afterwards.
    fn to_bytes(&self) -> Result<Vec<u8>, CanvasError>;
}
