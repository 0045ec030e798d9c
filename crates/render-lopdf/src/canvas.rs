use crate::encoding::to_win_ansi;
use crate::images::ImageXObject;
use crate::writer::{self, BOLD_FONT, REGULAR_FONT};
use lopdf::content::Operation;
use lopdf::{Object, StringFormat};
use semaforo_traits::{CanvasError, DocumentCanvas};
use semaforo_types::metrics::text_width_mm;
use semaforo_types::{mm_to_pt, Color, FontWeight, Orientation, PageSize, RasterImage, Size, TextAlign};
use std::sync::Arc;

/// Bézier control distance for a quarter circle.
const KAPPA: f32 = 0.552_284_8;

#[derive(Default, Clone, PartialEq)]
struct PageRenderState {
    font_name: String,
    font_size: f32,
    fill_color: Option<Color>,
    line_width: Option<f32>,
}

#[derive(Default, Clone)]
struct PageContent {
    operations: Vec<Operation>,
    state: PageRenderState,
}

/// A [`DocumentCanvas`] that renders to PDF through `lopdf`.
///
/// Text uses the standard Helvetica and Helvetica-Bold Type1 fonts, so no
/// font data is embedded. Images are decoded once per distinct encoded
/// payload and shared between pages.
pub struct LopdfCanvas {
    page_size: Size,
    pages: Vec<PageContent>,
    current: usize,
    weight: FontWeight,
    font_size: f32,
    fill_color: Color,
    line_width: f32,
    images: Vec<(Arc<Vec<u8>>, ImageXObject)>,
}

impl LopdfCanvas {
    pub fn new(page_size: Size) -> Self {
        Self {
            page_size,
            pages: vec![PageContent::default()],
            current: 0,
            weight: FontWeight::Normal,
            font_size: 16.0,
            fill_color: Color::BLACK,
            line_width: 0.2,
            images: Vec::new(),
        }
    }

    pub fn a4(orientation: Orientation) -> Self {
        Self::new(PageSize::A4.oriented_mm(orientation))
    }

    fn page_height_pt(&self) -> f32 {
        mm_to_pt(self.page_size.height)
    }

    fn page(&mut self) -> &mut PageContent {
        &mut self.pages[self.current]
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.page().operations.push(Operation::new(operator, operands));
    }

    fn apply_font(&mut self) {
        let font_name = match self.weight {
            FontWeight::Normal => REGULAR_FONT,
            FontWeight::Bold => BOLD_FONT,
        };
        let size = self.font_size;
        let page = self.page();
        if page.state.font_name != font_name || page.state.font_size != size {
            page.operations
                .push(Operation::new("Tf", vec![font_name.into(), size.into()]));
            page.state.font_name = font_name.to_string();
            page.state.font_size = size;
        }
    }

    fn apply_fill_color(&mut self) {
        let color = self.fill_color;
        let page = self.page();
        if page.state.fill_color != Some(color) {
            let (r, g, b) = color.to_unit();
            page.operations
                .push(Operation::new("rg", vec![r.into(), g.into(), b.into()]));
            page.state.fill_color = Some(color);
        }
    }

    fn apply_line_width(&mut self) {
        let width = self.line_width;
        let page = self.page();
        if page.state.line_width != Some(width) {
            page.operations
                .push(Operation::new("w", vec![mm_to_pt(width).into()]));
            page.state.line_width = Some(width);
        }
    }

    /// Returns the XObject name for `image`, decoding it on first use.
    /// Buffers with equal bytes share one XObject.
    fn register_image(&mut self, image: &RasterImage) -> Result<String, CanvasError> {
        if let Some((_, xobj)) = self.images.iter().find(|(data, _)| {
            Arc::ptr_eq(data, &image.data) || data.as_slice() == image.bytes()
        }) {
            return Ok(xobj.name.clone());
        }
        let name = format!("Im{}", self.images.len() + 1);
        let xobj = ImageXObject::decode(name.clone(), image.bytes())?;
        self.images.push((image.data.clone(), xobj));
        Ok(name)
    }
}

impl DocumentCanvas for LopdfCanvas {
    fn page_size(&self) -> Size {
        self.page_size
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn current_page(&self) -> usize {
        self.current + 1
    }

    fn add_page(&mut self) {
        self.pages.push(PageContent::default());
        self.current = self.pages.len() - 1;
    }

    fn set_page(&mut self, page: usize) -> Result<(), CanvasError> {
        if page == 0 || page > self.pages.len() {
            return Err(CanvasError::InvalidPage {
                requested: page,
                available: self.pages.len(),
            });
        }
        self.current = page - 1;
        Ok(())
    }

    fn set_font(&mut self, weight: FontWeight, size_pt: f32) {
        self.weight = weight;
        self.font_size = size_pt;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn text_width(&self, text: &str) -> f32 {
        text_width_mm(text, self.weight, self.font_size)
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, align: TextAlign) {
        let start_x = align.start_x(x, self.text_width(text));
        let pdf_x = mm_to_pt(start_x);
        let pdf_y = self.page_height_pt() - mm_to_pt(y);

        self.push("BT", vec![]);
        self.apply_font();
        self.apply_fill_color();
        self.push("Td", vec![pdf_x.into(), pdf_y.into()]);
        self.push(
            "Tj",
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
        );
        self.push("ET", vec![]);
    }

    fn draw_image(
        &mut self,
        image: &RasterImage,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Result<(), CanvasError> {
        let name = self.register_image(image)?;
        let w = mm_to_pt(width);
        let h = mm_to_pt(height);
        let pdf_x = mm_to_pt(x);
        let pdf_y = self.page_height_pt() - mm_to_pt(y + height);

        self.push("q", vec![]);
        self.push(
            "cm",
            vec![w.into(), 0.into(), 0.into(), h.into(), pdf_x.into(), pdf_y.into()],
        );
        self.push("Do", vec![Object::Name(name.into_bytes())]);
        self.push("Q", vec![]);
        Ok(())
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        let page_h = self.page_height_pt();
        self.apply_line_width();
        self.push(
            "m",
            vec![mm_to_pt(x1).into(), (page_h - mm_to_pt(y1)).into()],
        );
        self.push(
            "l",
            vec![mm_to_pt(x2).into(), (page_h - mm_to_pt(y2)).into()],
        );
        self.push("S", vec![]);
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32) {
        let cx = mm_to_pt(cx);
        let cy = self.page_height_pt() - mm_to_pt(cy);
        let r = mm_to_pt(radius);
        let k = r * KAPPA;

        self.apply_fill_color();
        self.push("m", vec![(cx + r).into(), cy.into()]);
        let quarters = [
            [cx + r, cy + k, cx + k, cy + r, cx, cy + r],
            [cx - k, cy + r, cx - r, cy + k, cx - r, cy],
            [cx - r, cy - k, cx - k, cy - r, cx, cy - r],
            [cx + k, cy - r, cx + r, cy - k, cx + r, cy],
        ];
        for q in quarters {
            self.push("c", q.iter().map(|v| (*v).into()).collect());
        }
        self.push("f", vec![]);
    }

    fn to_bytes(&self) -> Result<Vec<u8>, CanvasError> {
        let pages: Vec<Vec<Operation>> = self
            .pages
            .iter()
            .map(|p| p.operations.clone())
            .collect();
        let images: Vec<ImageXObject> = self.images.iter().map(|(_, x)| x.clone()).collect();
        writer::write_document(
            &pages,
            &images,
            mm_to_pt(self.page_size.width),
            self.page_height_pt(),
        )
    }
}
