use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::models::{Facility, HotelInfo, LocalGuide};
use crate::shared::deserialize_room_number;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HousekeepingRequest {
    #[serde(default, deserialize_with = "deserialize_room_number")]
    pub room_number: Option<String>,
    #[serde(default)]
    pub request_type: Option<String>,
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub special_instructions: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LateCheckoutRequest {
    #[serde(default, deserialize_with = "deserialize_room_number")]
    pub room_number: Option<String>,
    #[serde(default)]
    pub requested_time: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

/// Accepted housekeeping request, not persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HousekeepingTicket {
    pub id: String,
    pub room_number: String,
    pub request_type: String,
    pub items: Vec<String>,
    pub special_instructions: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LateCheckoutTicket {
    pub id: String,
    pub room_number: String,
    pub requested_time: String,
    pub reason: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HotelInfoResponse {
    pub success: bool,
    pub hotel: HotelInfo,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FacilitiesResponse {
    pub success: bool,
    pub facilities: BTreeMap<String, Facility>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AttractionsResponse {
    pub success: bool,
    pub attractions: LocalGuide,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TicketResponse<T> {
    pub success: bool,
    pub request: T,
    pub message: String,
}
