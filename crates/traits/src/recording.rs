//! A canvas that records drawing calls instead of rendering them.

use semaforo_types::metrics::text_width_mm;
use semaforo_types::{Color, FontWeight, RasterImage, Size, TextAlign};

use crate::canvas::{CanvasError, DocumentCanvas};

/// One recorded drawing call, tagged with the page it landed on.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Text {
        page: usize,
        text: String,
        x: f32,
        y: f32,
        align: TextAlign,
        weight: FontWeight,
        size_pt: f32,
    },
    Image {
        page: usize,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    Line {
        page: usize,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width: f32,
    },
    Circle {
        page: usize,
        cx: f32,
        cy: f32,
        radius: f32,
        color: Color,
    },
}

impl DrawCommand {
    pub fn page(&self) -> usize {
        match self {
            DrawCommand::Text { page, .. }
            | DrawCommand::Image { page, .. }
            | DrawCommand::Line { page, .. }
            | DrawCommand::Circle { page, .. } => *page,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    page_size: Size,
    page_count: usize,
    current_page: usize,
    weight: FontWeight,
    size_pt: f32,
    fill_color: Color,
    line_width: f32,
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new(page_size: Size) -> Self {
        Self {
            page_size,
            page_count: 1,
            current_page: 1,
            weight: FontWeight::Normal,
            size_pt: 16.0,
            fill_color: Color::BLACK,
            line_width: 0.2,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Text commands as `(page, text, x, y, align)` for terse assertions.
    pub fn texts(&self) -> Vec<(usize, &str, f32, f32, TextAlign)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text {
                    page,
                    text,
                    x,
                    y,
                    align,
                    ..
                } => Some((*page, text.as_str(), *x, *y, *align)),
                _ => None,
            })
            .collect()
    }

    pub fn find_text(&self, needle: &str) -> Option<&DrawCommand> {
        self.commands
            .iter()
            .find(|c| matches!(c, DrawCommand::Text { text, .. } if text == needle))
    }
}

impl DocumentCanvas for RecordingCanvas {
    fn page_size(&self) -> Size {
        self.page_size
    }

    fn page_count(&self) -> usize {
        self.page_count
    }

    fn current_page(&self) -> usize {
        self.current_page
    }

    fn add_page(&mut self) {
        self.page_count += 1;
        self.current_page = self.page_count;
    }

    fn set_page(&mut self, page: usize) -> Result<(), CanvasError> {
        if page == 0 || page > self.page_count {
            return Err(CanvasError::InvalidPage {
                requested: page,
                available: self.page_count,
            });
        }
        self.current_page = page;
        Ok(())
    }

    fn set_font(&mut self, weight: FontWeight, size_pt: f32) {
        self.weight = weight;
        self.size_pt = size_pt;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn text_width(&self, text: &str) -> f32 {
        text_width_mm(text, self.weight, self.size_pt)
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, align: TextAlign) {
        self.commands.push(DrawCommand::Text {
            page: self.current_page,
            text: text.to_string(),
            x,
            y,
            align,
            weight: self.weight,
            size_pt: self.size_pt,
        });
    }

    fn draw_image(
        &mut self,
        _image: &RasterImage,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> Result<(), CanvasError> {
        self.commands.push(DrawCommand::Image {
            page: self.current_page,
            x,
            y,
            width,
            height,
        });
        Ok(())
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.commands.push(DrawCommand::Line {
            page: self.current_page,
            x1,
            y1,
            x2,
            y2,
            width: self.line_width,
        });
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32) {
        self.commands.push(DrawCommand::Circle {
            page: self.current_page,
            cx,
            cy,
            radius,
            color: self.fill_color,
        });
    }

    /// One `Debug` line per recorded command.
    fn to_bytes(&self) -> Result<Vec<u8>, CanvasError> {
        let mut out = String::new();
        for command in &self.commands {
            out.push_str(&format!("{:?}\n", command));
        }
        Ok(out.into_bytes())
    }
}
