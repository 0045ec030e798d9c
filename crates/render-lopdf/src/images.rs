//! Conversion of encoded rasters into PDF image XObjects.

use image::GenericImageView;
use lopdf::{dictionary, Document, Object, ObjectId, Stream};
use semaforo_traits::ImageError;

/// A decoded image ready to be written as an `/XObject /Image`.
#[derive(Debug, Clone)]
pub(crate) struct ImageXObject {
    pub name: String,
    pub width: u32,
    pub height: u32,
    rgb: Vec<u8>,
    alpha: Option<Vec<u8>>,
}

impl ImageXObject {
    pub fn decode(name: String, bytes: &[u8]) -> Result<Self, ImageError> {
        let decoded =
            image::load_from_memory(bytes).map_err(|e| ImageError::Decode(e.to_string()))?;
        let (width, height) = decoded.dimensions();
        let rgba = decoded.to_rgba8();

        let mut rgb = Vec::with_capacity((width * height * 3) as usize);
        let mut alpha = Vec::with_capacity((width * height) as usize);
        for pixel in rgba.pixels() {
            rgb.extend_from_slice(&pixel.0[..3]);
            alpha.push(pixel.0[3]);
        }
        let alpha = if alpha.iter().all(|&a| a == u8::MAX) {
            None
        } else {
            Some(alpha)
        };

        log::debug!(
            "Decoded image {} ({}x{}, alpha: {})",
            name,
            width,
            height,
            alpha.is_some()
        );
        Ok(Self {
            name,
            width,
            height,
            rgb,
            alpha,
        })
    }

    /// Adds the image (and its soft mask, if any) to `doc`.
    pub fn write_into(&self, doc: &mut Document) -> ObjectId {
        let mut dict = dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => self.width as i64,
            "Height" => self.height as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
        };
        if let Some(alpha) = &self.alpha {
            let smask = dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => self.width as i64,
                "Height" => self.height as i64,
                "ColorSpace" => "DeviceGray",
                "BitsPerComponent" => 8,
            };
            let smask_id = doc.add_object(Object::Stream(Stream::new(smask, alpha.clone())));
            dict.set("SMask", smask_id);
        }
        doc.add_object(Object::Stream(Stream::new(dict, self.rgb.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png(img: RgbaImage) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_opaque_image_has_no_mask() {
        let bytes = png(RgbaImage::from_pixel(4, 2, Rgba([10, 20, 30, 255])));
        let xobj = ImageXObject::decode("Im1".into(), &bytes).unwrap();
        assert_eq!((xobj.width, xobj.height), (4, 2));
        assert_eq!(xobj.rgb.len(), 24);
        assert!(xobj.alpha.is_none());
    }

    #[test]
    fn test_transparent_image_gets_smask() {
        let bytes = png(RgbaImage::from_pixel(3, 3, Rgba([0, 0, 0, 128])));
        let xobj = ImageXObject::decode("Im1".into(), &bytes).unwrap();
        let mut doc = Document::with_version("1.7");
        let id = xobj.write_into(&mut doc);
        let stream = doc.get_object(id).unwrap().as_stream().unwrap();
        assert!(stream.dict.has(b"SMask"));
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let err = ImageXObject::decode("Im1".into(), b"not an image").unwrap_err();
        assert!(matches!(err, ImageError::Decode(_)));
    }
}
