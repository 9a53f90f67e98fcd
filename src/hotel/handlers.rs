use axum::{extract::State, Json};
use tracing::{info, instrument};

use super::{
    service::{HOUSEKEEPING_SUBMITTED, LATE_CHECKOUT_SUBMITTED},
    types::{
        AttractionsResponse, FacilitiesResponse, HotelInfoResponse, HousekeepingRequest,
        HousekeepingTicket, LateCheckoutRequest, LateCheckoutTicket, TicketResponse,
    },
};
use crate::shared::{AppError, AppState};

/// GET /api/hotel/info
#[instrument(name = "hotel_info", skip(state))]
pub async fn get_info(State(state): State<AppState>) -> Json<HotelInfoResponse> {
    Json(HotelInfoResponse {
        success: true,
        hotel: state.hotel_service.content().info.clone(),
    })
}

/// GET /api/hotel/facilities
#[instrument(name = "hotel_facilities", skip(state))]
pub async fn get_facilities(State(state): State<AppState>) -> Json<FacilitiesResponse> {
    Json(FacilitiesResponse {
        success: true,
        facilities: state.hotel_service.content().facilities.clone(),
    })
}

/// GET /api/hotel/attractions
#[instrument(name = "hotel_attractions", skip(state))]
pub async fn get_attractions(State(state): State<AppState>) -> Json<AttractionsResponse> {
    Json(AttractionsResponse {
        success: true,
        attractions: state.hotel_service.content().attractions.clone(),
    })
}

/// HTTP handler for housekeeping requests
///
/// POST /api/hotel/housekeeping
/// Returns the pending request; nothing is stored
#[instrument(name = "submit_housekeeping", skip(state, request))]
pub async fn submit_housekeeping(
    State(state): State<AppState>,
    Json(request): Json<HousekeepingRequest>,
) -> Result<Json<TicketResponse<HousekeepingTicket>>, AppError> {
    let ticket = state.hotel_service.submit_housekeeping(request)?;
    info!(ticket_id = %ticket.id, "Housekeeping request accepted");

    Ok(Json(TicketResponse {
        success: true,
        request: ticket,
        message: HOUSEKEEPING_SUBMITTED.to_string(),
    }))
}

/// POST /api/hotel/late-checkout
#[instrument(name = "request_late_checkout", skip(state, request))]
pub async fn request_late_checkout(
    State(state): State<AppState>,
    Json(request): Json<LateCheckoutRequest>,
) -> Result<Json<TicketResponse<LateCheckoutTicket>>, AppError> {
    let ticket = state.hotel_service.request_late_checkout(request)?;
    info!(ticket_id = %ticket.id, "Late checkout request accepted");

    Ok(Json(TicketResponse {
        success: true,
        request: ticket,
        message: LATE_CHECKOUT_SUBMITTED.to_string(),
    }))
}
