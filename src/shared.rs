use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Deserializer};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::hotel::HotelService;
use crate::orders::OrderService;
use crate::websockets::{ChatRelay, RoomRegistry};

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<dyn RoomRegistry>,
    pub relay: Arc<ChatRelay>,
    pub hotel_service: Arc<HotelService>,
    pub order_service: Arc<OrderService>,
    pub public_base_url: String,
}

impl AppState {
    pub fn new(
        registry: Arc<dyn RoomRegistry>,
        relay: Arc<ChatRelay>,
        hotel_service: Arc<HotelService>,
        order_service: Arc<OrderService>,
        public_base_url: String,
    ) -> Self {
        Self {
            registry,
            relay,
            hotel_service,
            order_service,
            public_base_url,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "success": false,
            "error": error_message
        }));

        (status, body).into_response()
    }
}

/// Room numbers arrive either as JSON strings or as bare numbers.
///
/// Blank strings are treated as absent.
pub fn deserialize_room_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawRoom {
        Text(String),
        Number(serde_json::Number),
    }

    let raw = Option::<RawRoom>::deserialize(deserializer)?;
    Ok(raw
        .map(|room| match room {
            RawRoom::Text(text) => text.trim().to_string(),
            RawRoom::Number(number) => number.to_string(),
        })
        .filter(|room| !room.is_empty()))
}
