use qrcode::render::svg;
use qrcode::QrCode;
use thiserror::Error;

const MIN_DIMENSION: u32 = 300;

#[derive(Debug, Error)]
pub enum QrError {
    #[error("Failed to encode QR code: {0}")]
    Encode(String),
}

/// Chat URL printed on a room's placard
pub fn room_url(base_url: &str, room_id: &str) -> String {
    format!("{}/room/{}", base_url.trim_end_matches('/'), room_id.trim())
}

/// Renders `data` as a standalone SVG document
pub fn render_svg(data: &str) -> Result<String, QrError> {
    let code = QrCode::new(data.as_bytes()).map_err(|e| QrError::Encode(e.to_string()))?;
    Ok(code
        .render::<svg::Color>()
        .min_dimensions(MIN_DIMENSION, MIN_DIMENSION)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build())
}

/// SVG markup without the XML prolog, for embedding in HTML
pub fn render_inline_svg(data: &str) -> Result<String, QrError> {
    let document = render_svg(data)?;
    Ok(match document.find("<svg") {
        Some(start) => document[start..].to_string(),
        None => document,
    })
}
