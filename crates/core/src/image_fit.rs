//! Fitting uploaded logos into a bounding box.
//!
//! The fit is a two-step sequential clamp (width first, then height on the
//! already-scaled size) rather than a single `min(max_w / w, max_h / h)`
//! ratio. For ordinary logos the two agree; the sequential form is kept so
//! sizes match those produced by the dashboard.

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat};
use semaforo_traits::{ImageDecoder, ImageError};
use semaforo_types::RasterImage;
use std::io::Cursor;
use std::path::Path;

/// Fixed pixel-to-millimetre divisor used for printed logo sizes.
pub const PX_PER_MM: f32 = 5.0;

/// Bounding box the upload form fits logos into, in pixels.
pub const LOGO_MAX_WIDTH: f32 = 500.0;
pub const LOGO_MAX_HEIGHT: f32 = 200.0;

pub fn fit_dimensions(width: f32, height: f32, max_width: f32, max_height: f32) -> (f32, f32) {
    let (mut width, mut height) = (width, height);
    if width > max_width {
        height = height * max_width / width;
        width = max_width;
    }
    if height > max_height {
        width = width * max_height / height;
        height = max_height;
    }
    (width, height)
}

/// Integer side of a render surface for a fractional size. Truncates like a
/// canvas element does, but never below one pixel.
fn surface_side(value: f32) -> Result<u32, ImageError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ImageError::SurfaceUnavailable(format!(
            "invalid surface dimension {}",
            value
        )));
    }
    Ok((value as u32).max(1))
}

/// Decodes `bytes`, fits the image inside `max_width`×`max_height` pixels,
/// re-renders it at that size and reports the printed size in millimetres.
pub fn fit_image<D: ImageDecoder>(
    decoder: &D,
    bytes: &[u8],
    max_width: f32,
    max_height: f32,
) -> Result<RasterImage, ImageError> {
    let decoded = decoder.decode(bytes)?;
    let (source_width, source_height) = decoder.dimensions(&decoded);
    let (width, height) = fit_dimensions(
        source_width as f32,
        source_height as f32,
        max_width,
        max_height,
    );

    let surface_width = surface_side(width)?;
    let surface_height = surface_side(height)?;
    let png = decoder.render(&decoded, surface_width, surface_height)?;

    log::debug!(
        "Fitted image {}x{} into {}x{} box -> {}x{} px",
        source_width,
        source_height,
        max_width,
        max_height,
        surface_width,
        surface_height
    );
    Ok(RasterImage::new(png, width / PX_PER_MM, height / PX_PER_MM))
}

/// [`fit_image`] on a file from disk using the default [`PngRasterizer`].
pub fn fit_image_file<P: AsRef<Path>>(
    path: P,
    max_width: f32,
    max_height: f32,
) -> Result<RasterImage, ImageError> {
    let bytes = std::fs::read(path.as_ref())?;
    log::info!("Fitting logo {}", path.as_ref().display());
    fit_image(&PngRasterizer::default(), &bytes, max_width, max_height)
}

/// The `image`-crate host adapter: decodes PNG, JPEG and GIF, renders RGBA
/// surfaces and encodes them as PNG.
#[derive(Debug, Clone, Copy)]
pub struct PngRasterizer {
    filter: FilterType,
}

impl PngRasterizer {
    pub fn new(filter: FilterType) -> Self {
        Self { filter }
    }
}

impl Default for PngRasterizer {
    fn default() -> Self {
        Self::new(FilterType::Triangle)
    }
}

impl ImageDecoder for PngRasterizer {
    type Decoded = DynamicImage;

    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage, ImageError> {
        image::load_from_memory(bytes).map_err(|e| ImageError::Decode(e.to_string()))
    }

    fn dimensions(&self, image: &DynamicImage) -> (u32, u32) {
        image.dimensions()
    }

    fn render(
        &self,
        image: &DynamicImage,
        width: u32,
        height: u32,
    ) -> Result<Vec<u8>, ImageError> {
        if width == 0 || height == 0 {
            return Err(ImageError::SurfaceUnavailable(format!(
                "cannot create a {}x{} surface",
                width, height
            )));
        }
        let surface = DynamicImage::ImageRgba8(
            image.resize_exact(width, height, self.filter).to_rgba8(),
        );
        let mut out = Cursor::new(Vec::new());
        surface
            .write_to(&mut out, ImageFormat::Png)
            .map_err(|e| ImageError::SurfaceUnavailable(e.to_string()))?;
        Ok(out.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([200, 30, 30, 255]));
        let mut out = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(img)
            .write_to(&mut out, ImageFormat::Png)
            .unwrap();
        out.into_inner()
    }

    #[test]
    fn test_width_clamp_then_height_unchanged() {
        assert_eq!(fit_dimensions(1000.0, 320.0, 500.0, 200.0), (500.0, 160.0));
        // Lands exactly on the height limit, so step two leaves it alone.
        assert_eq!(fit_dimensions(1000.0, 400.0, 500.0, 200.0), (500.0, 200.0));
    }

    #[test]
    fn test_height_clamp_only() {
        assert_eq!(fit_dimensions(300.0, 600.0, 500.0, 200.0), (100.0, 200.0));
    }

    #[test]
    fn test_both_clamps_apply_in_order() {
        let (w, h) = fit_dimensions(1000.0, 1000.0, 500.0, 200.0);
        assert_eq!((w, h), (200.0, 200.0));
    }

    #[test]
    fn test_small_image_untouched() {
        assert_eq!(fit_dimensions(120.0, 80.0, 500.0, 200.0), (120.0, 80.0));
    }

    #[test]
    fn test_fit_stays_in_bounds_and_keeps_aspect() {
        let sources = [(1.0, 1.0), (37.0, 911.0), (4000.0, 3.0), (640.0, 480.0), (501.0, 201.0)];
        let boxes = [(500.0, 200.0), (10.0, 10.0), (1.0, 300.0)];
        for (w, h) in sources {
            for (mw, mh) in boxes {
                let (fw, fh) = fit_dimensions(w, h, mw, mh);
                assert!(fw <= mw + 1e-3 && fh <= mh + 1e-3, "{w}x{h} in {mw}x{mh}");
                let ratio = (fw / fh) / (w / h);
                assert!((ratio - 1.0).abs() < 1e-3, "{w}x{h} in {mw}x{mh}");
            }
        }
    }

    #[test]
    fn test_fit_image_reports_millimetres() {
        let bytes = png(1000, 320);
        let fitted = fit_image(&PngRasterizer::default(), &bytes, 500.0, 200.0).unwrap();
        assert_eq!(fitted.width_mm, 100.0);
        assert_eq!(fitted.height_mm, 32.0);

        let rendered = image::load_from_memory(fitted.bytes()).unwrap();
        assert_eq!(rendered.dimensions(), (500, 160));
    }

    #[test]
    fn test_fractional_size_truncates_surface() {
        let bytes = png(300, 7);
        let fitted = fit_image(&PngRasterizer::default(), &bytes, 200.0, 200.0).unwrap();
        let rendered = image::load_from_memory(fitted.bytes()).unwrap();
        // 7 * 200 / 300 = 4.67
        assert_eq!(rendered.dimensions(), (200, 4));
        assert!((fitted.height_mm - 4.6667 / PX_PER_MM).abs() < 1e-3);
    }

    #[test]
    fn test_undecodable_bytes() {
        let err = fit_image(&PngRasterizer::default(), b"GIF89a?", 500.0, 200.0).unwrap_err();
        assert!(matches!(err, ImageError::Decode(_)));
    }

    #[test]
    fn test_invalid_box_is_surface_error() {
        let bytes = png(10, 10);
        // NaN never compares greater, so only the height clamp applies.
        let fitted = fit_image(&PngRasterizer::default(), &bytes, f32::NAN, 5.0).unwrap();
        assert_eq!((fitted.width_mm, fitted.height_mm), (1.0, 1.0));
        let err = fit_image(&PngRasterizer::default(), &bytes, -5.0, 5.0).unwrap_err();
        assert!(matches!(err, ImageError::SurfaceUnavailable(_)));
    }

    #[test]
    fn test_wide_source_in_large_box_is_untouched() {
        let bytes = png(20_000, 2);
        let fitted = fit_image(&PngRasterizer::default(), &bytes, 30_000.0, 30_000.0).unwrap();
        assert_eq!((fitted.width_mm, fitted.height_mm), (4_000.0, 0.4));
        let rendered = image::load_from_memory(fitted.bytes()).unwrap();
        assert_eq!(rendered.dimensions(), (20_000, 2));
    }

    #[test]
    fn test_zero_surface_rejected_by_rasterizer() {
        let decoded = PngRasterizer::default().decode(&png(2, 2)).unwrap();
        let err = PngRasterizer::default().render(&decoded, 0, 3).unwrap_err();
        assert!(matches!(err, ImageError::SurfaceUnavailable(_)));
    }
}
