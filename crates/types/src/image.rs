use std::fmt;
use std::sync::Arc;

/// An encoded raster (PNG in practice) together with its printed size.
///
/// `width_mm`/`height_mm` are physical units chosen by whoever produced the
/// image; they are not derived from the pixel dimensions of `data`.
#[derive(Clone, PartialEq)]
pub struct RasterImage {
    pub data: Arc<Vec<u8>>,
    pub width_mm: f32,
    pub height_mm: f32,
}

impl RasterImage {
    pub fn new(data: Vec<u8>, width_mm: f32, height_mm: f32) -> Self {
        Self {
            data: Arc::new(data),
            width_mm,
            height_mm,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Debug for RasterImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RasterImage")
            .field("bytes", &self.data.len())
            .field("width_mm", &self.width_mm)
            .field("height_mm", &self.height_mm)
            .finish()
    }
}
