//! The header/footer frame shared by every generated report.
//!
//! A [`ReportDocumentBuilder`] lays out the header once, at construction,
//! and then hands its canvas to the caller for body content. Layout
//! constants are in millimetres on an A4 page.
//!
//! # Header layout
//!
//! ```text
//!  margin                    page center                    margin
//!  |[issuer logo]          ISSUER NAME (bold 12)      [client logo]|  y = 20
//!  |                        Client name (11)                       |  y = 26
//!  |                    REPORT TITLE (bold 14)                     |  y = 32
//!  |                      Fecha: dd/mm/yyyy    Hora: hh:mm:ss (9)  |  y = 45
//!  |---------------------------------------------------------------|  y = 50
//!  body starts at start_y() = 55
//! ```
//!
//! The three text lines are centered on the page regardless of the issuer
//! logo's width. A wide issuer logo can therefore overlap a long issuer
//! name; callers size logos with [`crate::image_fit`] to keep them clear.

use crate::config::ReportConfig;
use crate::error::ReportError;
use chrono::{Local, NaiveDateTime};
use semaforo_render_lopdf::LopdfCanvas;
use semaforo_traits::DocumentCanvas;
use semaforo_types::{Color, FontWeight, Orientation, PageSize, TextAlign};
use std::path::Path;

pub const MARGIN_MM: f32 = 20.0;
pub const HEADER_HEIGHT_MM: f32 = 40.0;

const LINE_STEP_MM: f32 = 6.0;
const LOGO_GAP_MM: f32 = 10.0;
const TIMESTAMP_OFFSET_MM: f32 = 5.0;
const SEPARATOR_OFFSET_MM: f32 = 10.0;
const BODY_OFFSET_MM: f32 = 15.0;
const FOOTER_OFFSET_MM: f32 = 10.0;
const SEPARATOR_WIDTH_MM: f32 = 0.5;

const TIMESTAMP_FORMAT: &str = "Fecha: %d/%m/%Y    Hora: %H:%M:%S";

/// Lays out a report header once and exposes the document for body content.
pub struct ReportDocumentBuilder<C: DocumentCanvas = LopdfCanvas> {
    canvas: C,
    config: ReportConfig,
    orientation: Orientation,
    page_width: f32,
    margin: f32,
    header_height: f32,
    generated_at: NaiveDateTime,
}

impl ReportDocumentBuilder<LopdfCanvas> {
    /// Creates an A4 PDF report stamped with the current local time.
    pub fn new(config: ReportConfig, orientation: Orientation) -> Result<Self, ReportError> {
        Self::with_canvas(
            config,
            orientation,
            LopdfCanvas::a4(orientation),
            Local::now().naive_local(),
        )
    }
}

impl<C: DocumentCanvas> ReportDocumentBuilder<C> {
    /// Creates a report on `canvas`, stamping the header with `generated_at`.
    ///
    /// The page width follows `orientation` (A4), whatever size the canvas
    /// reports; the page height is taken from the canvas.
    pub fn with_canvas(
        config: ReportConfig,
        orientation: Orientation,
        canvas: C,
        generated_at: NaiveDateTime,
    ) -> Result<Self, ReportError> {
        let mut builder = Self {
            canvas,
            config,
            orientation,
            page_width: PageSize::A4.oriented_mm(orientation).width,
            margin: MARGIN_MM,
            header_height: HEADER_HEIGHT_MM,
            generated_at,
        };
        builder.setup_header()?;
        Ok(builder)
    }

    fn setup_header(&mut self) -> Result<(), ReportError> {
        let margin = self.margin;
        self.canvas.set_fill_color(Color::BLACK);

        if let Some(logo) = &self.config.issuer_logo {
            self.canvas
                .draw_image(logo, margin, margin, logo.width_mm, logo.height_mm)?;
            let text_clear_x = margin + logo.width_mm + LOGO_GAP_MM;
            log::debug!(
                "Issuer logo {}x{}mm placed; header text stays centered (logo clears at x={}mm)",
                logo.width_mm,
                logo.height_mm,
                text_clear_x
            );
        }

        let center_x = self.page_width / 2.0;
        let mut y = margin;

        self.canvas.set_font(FontWeight::Bold, 12.0);
        self.canvas
            .draw_text(&self.config.issuer_name, center_x, y, TextAlign::Center);
        y += LINE_STEP_MM;

        self.canvas.set_font(FontWeight::Normal, 11.0);
        self.canvas
            .draw_text(&self.config.client_name, center_x, y, TextAlign::Center);
        y += LINE_STEP_MM;

        self.canvas.set_font(FontWeight::Bold, 14.0);
        self.canvas
            .draw_text(&self.config.report_title, center_x, y, TextAlign::Center);

        if let Some(logo) = &self.config.client_logo {
            let x = self.page_width - margin - logo.width_mm;
            self.canvas
                .draw_image(logo, x, margin, logo.width_mm, logo.height_mm)?;
        }

        let timestamp = self.generated_at.format(TIMESTAMP_FORMAT).to_string();
        self.canvas.set_font(FontWeight::Normal, 9.0);
        self.canvas.draw_text(
            &timestamp,
            self.page_width - margin,
            self.header_height + TIMESTAMP_OFFSET_MM,
            TextAlign::Right,
        );

        let separator_y = self.header_height + SEPARATOR_OFFSET_MM;
        self.canvas.set_line_width(SEPARATOR_WIDTH_MM);
        self.canvas
            .draw_line(margin, separator_y, self.page_width - margin, separator_y);

        log::debug!(
            "Header laid out for '{}' ({:?}, {}mm wide)",
            self.config.report_title,
            self.orientation,
            self.page_width
        );
        Ok(())
    }

    /// First baseline available to body content on page one.
    pub fn start_y(&self) -> f32 {
        self.header_height + BODY_OFFSET_MM
    }

    /// Stamps the footer on the current page.
    ///
    /// The page number is whatever the caller passes; pages are not counted.
    /// An absent or empty `footer_text` draws nothing on the left.
    pub fn add_footer(&mut self, page_number: usize) {
        let footer_y = self.page_height_mm() - FOOTER_OFFSET_MM;

        self.canvas.set_font(FontWeight::Normal, 9.0);
        self.canvas.set_fill_color(Color::BLACK);
        self.canvas.draw_text(
            &format!("Página {}", page_number),
            self.page_width - self.margin,
            footer_y,
            TextAlign::Right,
        );

        if let Some(footer_text) = self.config.footer_text() {
            self.canvas
                .draw_text(footer_text, self.margin, footer_y, TextAlign::Left);
        }
    }

    /// Draws one line of body text on the current page.
    pub fn add_text(&mut self, text: &str, x: f32, y: f32, weight: FontWeight, size_pt: f32) {
        self.canvas.set_font(weight, size_pt);
        self.canvas.draw_text(text, x, y, TextAlign::Left);
    }

    /// Appends a page and makes it current. The header is not repeated.
    pub fn add_page(&mut self) {
        self.canvas.add_page();
    }

    pub fn set_page(&mut self, page: usize) -> Result<(), ReportError> {
        Ok(self.canvas.set_page(page)?)
    }

    pub fn page_count(&self) -> usize {
        self.canvas.page_count()
    }

    pub fn page_width_mm(&self) -> f32 {
        self.page_width
    }

    pub fn page_height_mm(&self) -> f32 {
        self.canvas.page_size().height
    }

    pub fn margin_mm(&self) -> f32 {
        self.margin
    }

    /// The underlying document, for body content.
    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    /// Serializes the document as it currently stands.
    ///
    /// May be called any number of times, before or after further drawing.
    pub fn export_bytes(&self) -> Result<Vec<u8>, ReportError> {
        let bytes = self.canvas.to_bytes()?;
        log::debug!("Exported report '{}' ({} bytes)", self.config.report_title, bytes.len());
        Ok(bytes)
    }

    pub fn save_as<P: AsRef<Path>>(&self, path: P) -> Result<(), ReportError> {
        let bytes = self.export_bytes()?;
        std::fs::write(path.as_ref(), &bytes)?;
        log::info!("Saved report to {}", path.as_ref().display());
        Ok(())
    }
}
