pub mod pdf_assertions;

use chrono::NaiveDateTime;
use lopdf::Document as LopdfDocument;
use semaforo::{LopdfCanvas, Orientation, ReportConfig, ReportDocumentBuilder, ReportError};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Text runs on `page` (1-based) with their start positions in mm.
    pub fn texts(&self, page: u32) -> Vec<pdf_assertions::PlacedText> {
        pdf_assertions::placed_texts(&self.doc, page)
    }

    pub fn find(&self, page: u32, text: &str) -> Option<pdf_assertions::PlacedText> {
        self.texts(page).into_iter().find(|t| t.text == text)
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A fixed generation time so header timestamps are predictable.
pub fn fixed_time() -> NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(2024, 3, 7)
        .and_then(|d| d.and_hms_opt(9, 5, 3))
        .expect("valid date")
}

pub fn acme_config() -> ReportConfig {
    ReportConfig::new("Acme", "Globex", "Monthly Report").with_footer_text("Confidential")
}

pub fn pdf_builder(
    config: ReportConfig,
    orientation: Orientation,
) -> Result<ReportDocumentBuilder, ReportError> {
    init_logger();
    ReportDocumentBuilder::with_canvas(
        config,
        orientation,
        LopdfCanvas::a4(orientation),
        fixed_time(),
    )
}

pub fn render(builder: &ReportDocumentBuilder) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    GeneratedPdf::from_bytes(builder.export_bytes()?)
}

/// Encodes a solid-color PNG of the given pixel size.
pub fn png(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([30, 90, 200, 255]));
    let mut out = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut out, image::ImageFormat::Png)
        .expect("encode png");
    out.into_inner()
}
