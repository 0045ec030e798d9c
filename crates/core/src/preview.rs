//! The one-page sample shown by the header-configuration screen.

use crate::config::ReportConfig;
use crate::error::ReportError;
use crate::report::ReportDocumentBuilder;
use semaforo_traits::DocumentCanvas;
use semaforo_types::FontWeight;

pub const PREVIEW_TITLE: &str = "Vista Previa del Reporte";
pub const PREVIEW_SENTENCE: &str =
    "Este es un ejemplo de cómo se verá el encabezado en sus reportes.";

const PREVIEW_TEXT_X_MM: f32 = 20.0;
const PREVIEW_TEXT_SIZE_PT: f32 = 11.0;

/// Lays out the preview on `builder`: one sample sentence and footer 1.
///
/// The builder's own report title is left as configured; use
/// [`preview_config`] to get the preview title.
pub fn render_preview<C: DocumentCanvas>(builder: &mut ReportDocumentBuilder<C>) {
    let y = builder.start_y();
    builder.add_text(
        PREVIEW_SENTENCE,
        PREVIEW_TEXT_X_MM,
        y,
        FontWeight::Normal,
        PREVIEW_TEXT_SIZE_PT,
    );
    builder.add_footer(1);
}

/// `config` with its title replaced by the preview title.
pub fn preview_config(config: ReportConfig) -> ReportConfig {
    config.with_report_title(PREVIEW_TITLE)
}
