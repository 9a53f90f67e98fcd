use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::shared::AppState;
use crate::{chat, hotel, orders, qr, websockets};

/// Builds the full application router
///
/// Anything not matched by an API route is served from `static_dir`, with
/// `index.html` as the fallback so client-side routes like `/room/201` load.
pub fn app(app_state: AppState, static_dir: &Path) -> Router {
    let static_files =
        ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .nest("/api/hotel", hotel_routes())
        .nest("/api/orders", order_routes())
        .nest("/api/chat", chat_routes())
        .route("/qrcode", get(qr::qr_page))
        .route("/qrcode/image", get(qr::qr_image))
        .route("/qrcode/room/:room_id", get(qr::room_qr))
        .route("/ws", get(websockets::websocket_handler))
        .route("/ws/:room_id", get(websockets::websocket_room_handler))
        .route("/health", get(|| async { "ok" }))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

fn hotel_routes() -> Router<AppState> {
    Router::new()
        .route("/info", get(hotel::get_info))
        .route("/facilities", get(hotel::get_facilities))
        .route("/attractions", get(hotel::get_attractions))
        .route("/housekeeping", post(hotel::submit_housekeeping))
        .route("/late-checkout", post(hotel::request_late_checkout))
}

fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/menu", get(orders::get_menu))
        .route("/place", post(orders::place_order))
        .route("/status/:order_id", get(orders::get_order_status))
        .route("/room/:room_number", get(orders::get_room_orders))
}

fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/history/:room_number", get(chat::get_history))
        .route("/send", post(chat::send_message))
}
