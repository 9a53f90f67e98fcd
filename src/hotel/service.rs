use chrono::Utc;
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use super::{
    models::HotelContent,
    types::{HousekeepingRequest, HousekeepingTicket, LateCheckoutRequest, LateCheckoutTicket},
};
use crate::shared::AppError;

pub const HOUSEKEEPING_SUBMITTED: &str = "Housekeeping request submitted successfully!";
pub const LATE_CHECKOUT_SUBMITTED: &str =
    "Late checkout request submitted! We will confirm availability within 30 minutes.";

const PENDING: &str = "pending";

/// Serves hotel content and accepts guest service requests
pub struct HotelService {
    content: Arc<HotelContent>,
}

impl HotelService {
    pub fn new(content: Arc<HotelContent>) -> Self {
        Self { content }
    }

    pub fn content(&self) -> &HotelContent {
        &self.content
    }

    /// Validates and acknowledges a housekeeping request
    #[instrument(skip(self, request))]
    pub fn submit_housekeeping(
        &self,
        request: HousekeepingRequest,
    ) -> Result<HousekeepingTicket, AppError> {
        let (Some(room_number), Some(request_type)) =
            (request.room_number, non_blank(request.request_type))
        else {
            return Err(AppError::BadRequest(
                "Room number and request type are required".to_string(),
            ));
        };

        let ticket = HousekeepingTicket {
            id: Uuid::new_v4().to_string(),
            room_number,
            request_type,
            items: request.items,
            special_instructions: request.special_instructions.unwrap_or_default(),
            status: PENDING.to_string(),
            created_at: Utc::now(),
        };

        info!(
            ticket_id = %ticket.id,
            room_number = %ticket.room_number,
            request_type = %ticket.request_type,
            item_count = ticket.items.len(),
            "Housekeeping request received"
        );

        Ok(ticket)
    }

    /// Validates and acknowledges a late checkout request
    #[instrument(skip(self, request))]
    pub fn request_late_checkout(
        &self,
        request: LateCheckoutRequest,
    ) -> Result<LateCheckoutTicket, AppError> {
        let (Some(room_number), Some(requested_time)) =
            (request.room_number, non_blank(request.requested_time))
        else {
            return Err(AppError::BadRequest(
                "Room number and requested time are required".to_string(),
            ));
        };

        let ticket = LateCheckoutTicket {
            id: Uuid::new_v4().to_string(),
            room_number,
            requested_time,
            reason: request.reason.unwrap_or_default(),
            status: PENDING.to_string(),
            created_at: Utc::now(),
        };

        info!(
            ticket_id = %ticket.id,
            room_number = %ticket.room_number,
            requested_time = %ticket.requested_time,
            "Late checkout request received"
        );

        Ok(ticket)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
