use axum::{
    extract::{Path, State},
    http::header,
    response::{Html, IntoResponse, Response},
};
use tracing::{error, info, instrument};

use super::generator::{render_inline_svg, render_svg, room_url, QrError};
use crate::shared::{AppError, AppState};

const DOWNLOAD_NAME: &str = "hotel-chat-qr.svg";

/// Printable page with a QR code pointing at the chat front page
///
/// GET /qrcode
#[instrument(name = "qr_page", skip(state))]
pub async fn qr_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let svg = render_inline_svg(&state.public_base_url).map_err(internal)?;

    Ok(Html(format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <title>Hotel Chatbot QR Code</title>
    <style>
      body {{ font-family: sans-serif; text-align: center; margin-top: 40px; }}
      svg {{ width: 300px; height: 300px; }}
    </style>
  </head>
  <body>
    <h1>Scan to Chat with Us!</h1>
    {svg}
    <p>{url}</p>
    <p><a href="/qrcode/image" download="{DOWNLOAD_NAME}">Download QR Code</a></p>
    <p>Or print this page for display in hotel rooms.</p>
  </body>
</html>"#,
        url = state.public_base_url,
    )))
}

/// The front-page QR code as a standalone SVG file
///
/// GET /qrcode/image
#[instrument(name = "qr_image", skip(state))]
pub async fn qr_image(State(state): State<AppState>) -> Result<Response, AppError> {
    let svg = render_svg(&state.public_base_url).map_err(internal)?;

    Ok((
        [
            (header::CONTENT_TYPE, "image/svg+xml".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{DOWNLOAD_NAME}\""),
            ),
        ],
        svg,
    )
        .into_response())
}

/// QR code for a single room's chat page
///
/// GET /qrcode/room/:room_id
/// Returns image/svg+xml
#[instrument(name = "room_qr", skip(state))]
pub async fn room_qr(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> Result<Response, AppError> {
    if room_id.trim().is_empty() {
        return Err(AppError::BadRequest("Room number is required".to_string()));
    }

    let url = room_url(&state.public_base_url, &room_id);
    let svg = render_svg(&url).map_err(internal)?;
    info!(room_id = %room_id, url = %url, "Generated room QR code");

    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg).into_response())
}

fn internal(e: QrError) -> AppError {
    error!(error = %e, "QR code generation failed");
    AppError::Internal
}
