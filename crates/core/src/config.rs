//! Report configuration as supplied by the header-configuration form.

use crate::data_url;
use crate::error::ReportError;
use semaforo_types::RasterImage;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

/// A logo as it appears in JSON: an image `data:` URL plus its printed size.
///
/// Field names follow the upload form (`imageData`, `width`, `height`);
/// `dataUrl`, `widthMm` and `heightMm` are accepted as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoSpec {
    #[serde(alias = "dataUrl")]
    pub image_data: String,
    #[serde(alias = "widthMm")]
    pub width: f32,
    #[serde(alias = "heightMm")]
    pub height: f32,
}

impl LogoSpec {
    pub fn from_image(image: &RasterImage) -> Self {
        Self {
            image_data: data_url::encode_png(image.bytes()),
            width: image.width_mm,
            height: image.height_mm,
        }
    }

    pub fn into_image(self) -> Result<RasterImage, ReportError> {
        let (_, bytes) = data_url::decode(&self.image_data)?;
        Ok(RasterImage::new(bytes, self.width, self.height))
    }
}

fn deserialize_logo<'de, D>(deserializer: D) -> Result<Option<RasterImage>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<LogoSpec>::deserialize(deserializer)? {
        Some(spec) => spec
            .into_image()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Everything the report header and footer need.
///
/// Text fields are drawn as given; nothing is validated here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportConfig {
    #[serde(alias = "companyName")]
    pub issuer_name: String,
    pub client_name: String,
    #[serde(default)]
    pub report_title: String,
    #[serde(default)]
    pub footer_text: Option<String>,
    #[serde(default, alias = "systemOwnerLogo", deserialize_with = "deserialize_logo")]
    pub issuer_logo: Option<RasterImage>,
    #[serde(default, deserialize_with = "deserialize_logo")]
    pub client_logo: Option<RasterImage>,
}

impl ReportConfig {
    pub fn new(
        issuer_name: impl Into<String>,
        client_name: impl Into<String>,
        report_title: impl Into<String>,
    ) -> Self {
        Self {
            issuer_name: issuer_name.into(),
            client_name: client_name.into(),
            report_title: report_title.into(),
            ..Default::default()
        }
    }

    pub fn with_footer_text(mut self, footer_text: impl Into<String>) -> Self {
        self.footer_text = Some(footer_text.into());
        self
    }

    pub fn with_issuer_logo(mut self, logo: RasterImage) -> Self {
        self.issuer_logo = Some(logo);
        self
    }

    pub fn with_client_logo(mut self, logo: RasterImage) -> Self {
        self.client_logo = Some(logo);
        self
    }

    pub fn with_report_title(mut self, report_title: impl Into<String>) -> Self {
        self.report_title = report_title.into();
        self
    }

    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ReportError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        log::debug!("Loaded report config from {}", path.as_ref().display());
        Self::from_json(&json)
    }

    /// Footer text, treating an empty string the same as no text.
    pub fn footer_text(&self) -> Option<&str> {
        self.footer_text.as_deref().filter(|t| !t.is_empty())
    }
}
