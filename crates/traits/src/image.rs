use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ImageError {
    #[error("Image could not be decoded: {0}")]
    Decode(String),

    #[error("Render surface unavailable: {0}")]
    SurfaceUnavailable(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ImageError {
    fn from(err: std::io::Error) -> Self {
        ImageError::Io(err.to_string())
    }
}

/// Decodes source images and re-renders them at a requested pixel size.
///
/// `decode` is the only step that inspects the caller's bytes; `render`
/// works on the already decoded value so sources are decoded once.
pub trait ImageDecoder {
    type Decoded;

    fn decode(&self, bytes: &[u8]) -> Result<Self::Decoded, ImageError>;

    /// Pixel width and height of a decoded image.
    fn dimensions(&self, image: &Self::Decoded) -> (u32, u32);

    /// Draws `image` scaled to `width`×`height` pixels onto a fresh surface
    /// and returns the surface encoded as PNG.
    fn render(&self, image: &Self::Decoded, width: u32, height: u32)
    -> Result<Vec<u8>, ImageError>;
}
