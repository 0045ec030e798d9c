//! `data:` URLs, the form in which uploaded logos travel through JSON.

use crate::error::ReportError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

pub fn encode(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

pub fn encode_png(bytes: &[u8]) -> String {
    encode("image/png", bytes)
}

/// Splits a `data:` URL into its media type and decoded payload.
///
/// A missing media type defaults to `application/octet-stream`; payloads
/// without `;base64` are taken as literal text.
pub fn decode(url: &str) -> Result<(String, Vec<u8>), ReportError> {
    let url = url.trim();
    let rest = url
        .strip_prefix("data:")
        .ok_or_else(|| ReportError::DataUrl("missing 'data:' prefix".to_string()))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| ReportError::DataUrl("missing ',' separator".to_string()))?;

    let mime = header
        .split(';')
        .next()
        .filter(|v| !v.is_empty())
        .unwrap_or("application/octet-stream")
        .to_string();
    let data = if header.split(';').any(|p| p == "base64") {
        STANDARD
            .decode(payload)
            .map_err(|e| ReportError::DataUrl(e.to_string()))?
    } else {
        payload.as_bytes().to_vec()
    };
    Ok((mime, data))
}
