use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const BUNDLED_HOTEL: &str = include_str!("../../content/hotel.json");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WifiDetails {
    pub network: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelInfo {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub check_in: String,
    pub check_out: String,
    pub wifi: WifiDetails,
    pub amenities: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Facility {
    pub name: String,
    pub location: String,
    pub hours: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attraction {
    pub name: String,
    pub distance: String,
    pub hours: String,
    pub description: String,
    pub category: String,
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub name: String,
    pub distance: String,
    pub cuisine: String,
    pub price_range: String,
    pub hours: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shop {
    pub name: String,
    pub distance: String,
    pub description: String,
    pub hours: String,
    pub category: String,
    pub image: String,
}

/// Local guide grouped the way the guest UI lists it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalGuide {
    pub attractions: Vec<Attraction>,
    pub restaurants: Vec<Restaurant>,
    pub shopping: Vec<Shop>,
}

/// Static hotel content served by the info endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelContent {
    pub info: HotelInfo,
    /// Keyed by a stable camelCase slug (`swimmingPool`, `spa`, ...)
    pub facilities: BTreeMap<String, Facility>,
    pub attractions: LocalGuide,
}

impl HotelContent {
    /// Content compiled into the binary
    pub fn bundled() -> Result<Self, serde_json::Error> {
        Self::from_json(BUNDLED_HOTEL)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
