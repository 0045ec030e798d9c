//! Assembles the PDF object graph from accumulated page content.

use crate::images::ImageXObject;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream};
use semaforo_traits::CanvasError;

pub(crate) const REGULAR_FONT: &str = "F1";
pub(crate) const BOLD_FONT: &str = "F2";

fn pdf_err(e: impl std::fmt::Display) -> CanvasError {
    CanvasError::Pdf(e.to_string())
}

/// Builds a fresh document from page operations and writes it out.
///
/// Nothing here depends on wall-clock time or hash ordering, so equal input
/// produces byte-identical output.
pub(crate) fn write_document(
    pages: &[Vec<Operation>],
    images: &[ImageXObject],
    page_width_pt: f32,
    page_height_pt: f32,
) -> Result<Vec<u8>, CanvasError> {
    let mut document = Document::with_version("1.7");
    let pages_id = document.new_object_id();

    let regular_id = document.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let bold_id = document.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });

    let mut xobjects = Dictionary::new();
    for image in images {
        let image_id = image.write_into(&mut document);
        xobjects.set(image.name.as_bytes().to_vec(), image_id);
    }

    let mut resources = dictionary! {
        "Font" => dictionary! {
            REGULAR_FONT => regular_id,
            BOLD_FONT => bold_id,
        },
    };
    if !images.is_empty() {
        resources.set("XObject", xobjects);
    }
    let resources_id = document.add_object(resources);

    let mut page_ids = Vec::with_capacity(pages.len());
    for operations in pages {
        let content = Content {
            operations: operations.clone(),
        };
        let encoded = content.encode().map_err(pdf_err)?;
        let content_id = document.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = document.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), page_width_pt.into(), page_height_pt.into()],
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        page_ids.push(page_id);
    }

    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<Object>>(),
        "Count" => page_ids.len() as i64,
    };
    document
        .objects
        .insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = document.add_object(dictionary! { "Type" => "Catalog", "Pages" => pages_id });
    document.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    document.save_to(&mut buffer).map_err(pdf_err)?;
    log::debug!(
        "Serialized {} page(s), {} image(s), {} bytes",
        pages.len(),
        images.len(),
        buffer.len()
    );
    Ok(buffer)
}
