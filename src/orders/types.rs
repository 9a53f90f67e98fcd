use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::models::Menu;
use crate::shared::deserialize_room_number;

fn default_quantity() -> u32 {
    1
}

/// One requested line: a menu item id and how many
#[derive(Debug, Clone, Deserialize)]
pub struct OrderItemRequest {
    pub id: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    #[serde(default)]
    pub items: Vec<OrderItemRequest>,
    #[serde(default, deserialize_with = "deserialize_room_number")]
    pub room_number: Option<String>,
    #[serde(default)]
    pub special_instructions: Option<String>,
    #[serde(default)]
    pub guest_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub id: String,
    pub name: String,
    pub price: u32,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub items: Vec<OrderLine>,
    pub total: u32,
    pub room_number: String,
    pub special_instructions: String,
    pub guest_name: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub estimated_delivery: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatus {
    pub id: String,
    pub status: String,
    pub estimated_delivery: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MenuResponse {
    pub success: bool,
    pub menu: Menu,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlaceOrderResponse {
    pub success: bool,
    pub order: Order,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OrderStatusResponse {
    pub success: bool,
    pub order: OrderStatus,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RoomOrdersResponse {
    pub success: bool,
    pub orders: Vec<Order>,
}
