use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{info, instrument};

use super::{
    service::ORDER_PLACED,
    types::{
        MenuResponse, OrderStatusResponse, PlaceOrderRequest, PlaceOrderResponse,
        RoomOrdersResponse,
    },
};
use crate::shared::{AppError, AppState};

/// GET /api/orders/menu
#[instrument(name = "get_menu", skip(state))]
pub async fn get_menu(State(state): State<AppState>) -> Json<MenuResponse> {
    Json(MenuResponse {
        success: true,
        menu: state.order_service.menu().clone(),
    })
}

/// HTTP handler for placing a room-service order
///
/// POST /api/orders/place
/// Returns the priced order with its delivery estimate
#[instrument(name = "place_order", skip(state, request))]
pub async fn place_order(
    State(state): State<AppState>,
    Json(request): Json<PlaceOrderRequest>,
) -> Result<Json<PlaceOrderResponse>, AppError> {
    info!(item_count = request.items.len(), "Placing order");
    let order = state.order_service.place_order(request)?;

    Ok(Json(PlaceOrderResponse {
        success: true,
        order,
        message: ORDER_PLACED.to_string(),
    }))
}

/// GET /api/orders/status/:order_id
#[instrument(name = "order_status", skip(state))]
pub async fn get_order_status(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Json<OrderStatusResponse> {
    Json(OrderStatusResponse {
        success: true,
        order: state.order_service.order_status(&order_id),
    })
}

/// GET /api/orders/room/:room_number
#[instrument(name = "room_orders", skip(state))]
pub async fn get_room_orders(
    State(state): State<AppState>,
    Path(room_number): Path<String>,
) -> Json<RoomOrdersResponse> {
    Json(RoomOrdersResponse {
        success: true,
        orders: state.order_service.orders_for_room(&room_number),
    })
}
