//! A paginated news list with semaphore impact markers.
//!
//! Each item becomes a block: a colored dot, the wrapped bold title, a
//! `source · date · impact` line and the wrapped summary. Blocks that would
//! run into the footer zone move to a fresh page. The header is only drawn
//! on page one; every page gets a footer once layout is done.

use crate::error::ReportError;
use crate::report::ReportDocumentBuilder;
use chrono::{DateTime, Utc};
use semaforo_traits::DocumentCanvas;
use semaforo_types::{Color, FontWeight};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

const FOOTER_ZONE_MM: f32 = 20.0;
const SUMMARY_LINE_GAP_MM: f32 = 8.0;
const TITLE_LINE_MM: f32 = 5.5;
const BODY_LINE_MM: f32 = 4.5;
const BLOCK_GAP_MM: f32 = 4.0;
const DOT_RADIUS_MM: f32 = 1.6;
const TEXT_INDENT_MM: f32 = 6.0;

const TITLE_SIZE_PT: f32 = 11.0;
const META_SIZE_PT: f32 = 9.0;
const BODY_SIZE_PT: f32 = 10.0;

pub const EMPTY_DIGEST_MESSAGE: &str = "No hay noticias para el período seleccionado.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactLevel {
    High,
    Medium,
    Low,
}

impl ImpactLevel {
    pub fn color(self) -> Color {
        match self {
            ImpactLevel::High => Color::rgb(0xef, 0x44, 0x44),
            ImpactLevel::Medium => Color::rgb(0xea, 0xb3, 0x08),
            ImpactLevel::Low => Color::rgb(0x22, 0xc5, 0x5e),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ImpactLevel::High => "Alto",
            ImpactLevel::Medium => "Medio",
            ImpactLevel::Low => "Bajo",
        }
    }
}

/// One news entry. `source` may be given as a plain name or as a source
/// object with a `name` field; `impactLevel` and `description` are accepted
/// for `impact` and `summary`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub title: String,
    #[serde(deserialize_with = "deserialize_source")]
    pub source: String,
    pub published_at: DateTime<Utc>,
    #[serde(alias = "impactLevel")]
    pub impact: ImpactLevel,
    #[serde(default, alias = "description")]
    pub summary: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SourceField {
    Name(String),
    Object { name: String },
}

fn deserialize_source<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match SourceField::deserialize(deserializer)? {
        SourceField::Name(name) | SourceField::Object { name } => name,
    })
}

pub fn parse_news(json: &str) -> Result<Vec<NewsItem>, ReportError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_news<P: AsRef<Path>>(path: P) -> Result<Vec<NewsItem>, ReportError> {
    let json = std::fs::read_to_string(path.as_ref())?;
    let items = parse_news(&json)?;
    log::info!("Loaded {} news items from {}", items.len(), path.as_ref().display());
    Ok(items)
}

/// Greedy word wrap using the canvas's current font.
///
/// Explicit newlines are kept. A single word wider than `max_width` gets a
/// line of its own rather than being split.
pub fn wrap_text<C: DocumentCanvas>(canvas: &C, text: &str, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            if line.is_empty() {
                line.push_str(word);
                continue;
            }
            let candidate = format!("{} {}", line, word);
            if canvas.text_width(&candidate) > max_width {
                lines.push(std::mem::take(&mut line));
                line.push_str(word);
            } else {
                line = candidate;
            }
        }
        if !line.is_empty() {
            lines.push(line);
        }
    }
    lines
}

fn summary_line(items: &[NewsItem]) -> String {
    let count = |level| items.iter().filter(|i| i.impact == level).count();
    format!(
        "Noticias: {}    Alto: {}    Medio: {}    Bajo: {}",
        items.len(),
        count(ImpactLevel::High),
        count(ImpactLevel::Medium),
        count(ImpactLevel::Low)
    )
}

struct Block {
    title: Vec<String>,
    meta: String,
    summary: Vec<String>,
}

impl Block {
    fn height(&self) -> f32 {
        self.title.len() as f32 * TITLE_LINE_MM
            + BODY_LINE_MM
            + self.summary.len() as f32 * BODY_LINE_MM
            + BLOCK_GAP_MM
    }
}

fn measure<C: DocumentCanvas>(
    builder: &mut ReportDocumentBuilder<C>,
    item: &NewsItem,
    text_width: f32,
) -> Block {
    let canvas = builder.canvas_mut();
    canvas.set_font(FontWeight::Bold, TITLE_SIZE_PT);
    let title = wrap_text(&*canvas, &item.title, text_width);
    canvas.set_font(FontWeight::Normal, BODY_SIZE_PT);
    let summary = item
        .summary
        .as_deref()
        .map(|s| wrap_text(&*canvas, s, text_width))
        .unwrap_or_default();
    let meta = format!(
        "{} · {} · Impacto {}",
        item.source,
        item.published_at.format("%d/%m/%Y %H:%M"),
        item.impact.label()
    );
    Block { title, meta, summary }
}

/// Lays out `items` below the header and stamps footers on every page.
///
/// Returns the number of pages in the document afterwards.
pub fn write_digest<C: DocumentCanvas>(
    builder: &mut ReportDocumentBuilder<C>,
    items: &[NewsItem],
) -> Result<usize, ReportError> {
    let margin = builder.margin_mm();
    let limit = builder.page_height_mm() - FOOTER_ZONE_MM;
    let text_x = margin + TEXT_INDENT_MM;
    let text_width = builder.page_width_mm() - margin - text_x;
    let mut y = builder.start_y();

    builder.canvas_mut().set_fill_color(Color::BLACK);
    builder.add_text(&summary_line(items), margin, y, FontWeight::Bold, BODY_SIZE_PT);
    y += SUMMARY_LINE_GAP_MM;

    if items.is_empty() {
        builder.add_text(EMPTY_DIGEST_MESSAGE, margin, y, FontWeight::Normal, BODY_SIZE_PT);
    }

    for item in items {
        let block = measure(builder, item, text_width);
        // A block taller than a whole page still gets a single fresh page.
        if y + block.height() > limit {
            builder.add_page();
            y = margin;
            log::debug!("Digest continues on page {}", builder.page_count());
        }

        let canvas = builder.canvas_mut();
        canvas.set_fill_color(item.impact.color());
        canvas.fill_circle(margin + DOT_RADIUS_MM, y - DOT_RADIUS_MM, DOT_RADIUS_MM);
        canvas.set_fill_color(Color::BLACK);

        for line in &block.title {
            builder.add_text(line, text_x, y, FontWeight::Bold, TITLE_SIZE_PT);
            y += TITLE_LINE_MM;
        }
        builder.add_text(&block.meta, text_x, y, FontWeight::Normal, META_SIZE_PT);
        y += BODY_LINE_MM;
        for line in &block.summary {
            builder.add_text(line, text_x, y, FontWeight::Normal, BODY_SIZE_PT);
            y += BODY_LINE_MM;
        }
        y += BLOCK_GAP_MM;
    }

    let pages = builder.page_count();
    for page in 1..=pages {
        builder.set_page(page)?;
        builder.add_footer(page);
    }
    log::debug!("Digest of {} items laid out on {} pages", items.len(), pages);
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReportConfig;
    use chrono::{NaiveDate, TimeZone};
    use semaforo_traits::{DrawCommand, RecordingCanvas};
    use semaforo_types::{Orientation, PageSize};

    fn builder() -> ReportDocumentBuilder<RecordingCanvas> {
        let at = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        ReportDocumentBuilder::with_canvas(
            ReportConfig::new("Acme", "Globex", "Semáforo").with_footer_text("Confidencial"),
            Orientation::Portrait,
            RecordingCanvas::new(PageSize::A4.oriented_mm(Orientation::Portrait)),
            at,
        )
        .unwrap()
    }

    fn item(title: &str, impact: ImpactLevel, summary: Option<&str>) -> NewsItem {
        NewsItem {
            title: title.to_string(),
            source: "El Diario".to_string(),
            published_at: Utc.with_ymd_and_hms(2024, 4, 30, 14, 30, 0).unwrap(),
            impact,
            summary: summary.map(str::to_string),
        }
    }

    #[test]
    fn test_parse_news_accepts_dashboard_shape() {
        let json = r#"[
            {"title":"Alza de tasas","source":{"id":"1","name":"Reuters"},
             "publishedAt":"2024-04-30T14:30:00Z","impactLevel":"high",
             "description":"El banco central subió la tasa."},
            {"title":"Nueva sucursal","source":"El Diario",
             "publishedAt":"2024-04-29T09:00:00Z","impact":"low"}
        ]"#;
        let items = parse_news(json).unwrap();
        assert_eq!(items[0].source, "Reuters");
        assert_eq!(items[0].impact, ImpactLevel::High);
        assert_eq!(items[0].summary.as_deref(), Some("El banco central subió la tasa."));
        assert_eq!(items[1].impact, ImpactLevel::Low);
        assert!(items[1].summary.is_none());
    }

    #[test]
    fn test_unknown_impact_rejected() {
        let json = r#"[{"title":"t","source":"s","publishedAt":"2024-04-29T09:00:00Z","impact":"extreme"}]"#;
        assert!(matches!(parse_news(json), Err(ReportError::Json(_))));
    }

    #[test]
    fn test_wrap_text_respects_width() {
        let mut canvas = RecordingCanvas::new(PageSize::A4.portrait_mm());
        canvas.set_font(FontWeight::Normal, 10.0);
        let text = "uno dos tres cuatro cinco seis siete ocho nueve diez ".repeat(6);
        let lines = wrap_text(&canvas, &text, 60.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(canvas.text_width(line) <= 60.0, "{line}");
        }
        assert_eq!(lines.join(" "), text.trim_end());
    }

    #[test]
    fn test_wrap_text_keeps_long_word_and_newlines() {
        let canvas = RecordingCanvas::new(PageSize::A4.portrait_mm());
        let lines = wrap_text(&canvas, "corto\nsupercalifragilisticoespialidoso", 5.0);
        assert_eq!(lines, vec!["corto", "supercalifragilisticoespialidoso"]);
        assert!(wrap_text(&canvas, "", 50.0).is_empty());
    }

    #[test]
    fn test_dot_colors_follow_impact() {
        let mut builder = builder();
        let items = [
            item("a", ImpactLevel::High, None),
            item("b", ImpactLevel::Medium, None),
            item("c", ImpactLevel::Low, None),
        ];
        write_digest(&mut builder, &items).unwrap();
        let colors: Vec<Color> = builder
            .canvas()
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Circle { color, .. } => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(
            colors,
            vec![
                Color::rgb(0xef, 0x44, 0x44),
                Color::rgb(0xea, 0xb3, 0x08),
                Color::rgb(0x22, 0xc5, 0x5e),
            ]
        );
        assert!(builder
            .canvas()
            .find_text("Noticias: 3    Alto: 1    Medio: 1    Bajo: 1")
            .is_some());
        assert!(builder
            .canvas()
            .find_text("El Diario · 30/04/2024 14:30 · Impacto Alto")
            .is_some());
    }

    #[test]
    fn test_empty_digest_draws_message_and_footer() {
        let mut builder = builder();
        assert_eq!(write_digest(&mut builder, &[]).unwrap(), 1);
        assert!(builder.canvas().find_text(EMPTY_DIGEST_MESSAGE).is_some());
        assert!(builder.canvas().find_text("Página 1").is_some());
    }

    #[test]
    fn test_many_items_paginate_with_footers() {
        let mut builder = builder();
        let summary = "Resumen de la noticia con suficiente texto para ocupar dos líneas \
                       completas dentro del ancho disponible de la página del reporte.";
        let items: Vec<NewsItem> = (0..40)
            .map(|i| item(&format!("Noticia {}", i), ImpactLevel::Medium, Some(summary)))
            .collect();
        let pages = write_digest(&mut builder, &items).unwrap();
        assert!(pages > 1);

        let canvas = builder.canvas();
        for page in 1..=pages {
            let label = format!("Página {}", page);
            let footer = canvas.find_text(&label).map(DrawCommand::page);
            assert_eq!(footer, Some(page));
        }
        assert_eq!(
            canvas.texts().iter().filter(|t| t.1 == "Confidencial").count(),
            pages
        );

        // Body text never reaches the footer zone.
        for (_, text, _, y, _) in canvas.texts() {
            if !text.starts_with("Página") && text != "Confidencial" {
                assert!(y <= 277.0, "{text} at {y}");
            }
        }
        // Later pages start at the margin.
        let first_on_two = canvas.texts().into_iter().find(|t| t.0 == 2).unwrap();
        assert!(first_on_two.3 >= 20.0 && first_on_two.3 < 30.0);
    }
}
