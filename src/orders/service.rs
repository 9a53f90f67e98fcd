use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::{
    models::Menu,
    types::{Order, OrderLine, OrderStatus, PlaceOrderRequest},
};
use crate::shared::AppError;

pub const ORDER_PLACED: &str =
    "Order placed successfully! Your order will be delivered within 30 minutes.";

const DEFAULT_GUEST_NAME: &str = "Guest";
const DELIVERY_MINUTES: i64 = 30;
const STATUS_LOOKUP_MINUTES: i64 = 15;

/// Prices and acknowledges room-service orders; nothing is persisted
pub struct OrderService {
    menu: Arc<Menu>,
}

impl OrderService {
    pub fn new(menu: Arc<Menu>) -> Self {
        Self { menu }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Validates the order against the menu and computes its total
    #[instrument(skip(self, request))]
    pub fn place_order(&self, request: PlaceOrderRequest) -> Result<Order, AppError> {
        let Some(room_number) = request.room_number else {
            return Err(AppError::BadRequest(
                "Items and room number are required".to_string(),
            ));
        };
        if request.items.is_empty() {
            return Err(AppError::BadRequest(
                "Items and room number are required".to_string(),
            ));
        }

        let mut lines = Vec::with_capacity(request.items.len());
        for requested in &request.items {
            if requested.quantity == 0 {
                return Err(AppError::BadRequest(format!(
                    "Quantity for {} must be at least 1",
                    requested.id
                )));
            }
            let item = self.menu.find_item(&requested.id).ok_or_else(|| {
                AppError::BadRequest(format!("Unknown menu item: {}", requested.id))
            })?;
            lines.push(OrderLine {
                id: item.id.clone(),
                name: item.name.clone(),
                price: item.price,
                quantity: requested.quantity,
            });
        }

        let total = lines
            .iter()
            .try_fold(0u32, |total, line| {
                line.price
                    .checked_mul(line.quantity)
                    .and_then(|subtotal| total.checked_add(subtotal))
            })
            .ok_or_else(|| AppError::BadRequest("Order quantity is too large".to_string()))?;
        let now = Utc::now();
        let guest_name = request
            .guest_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_GUEST_NAME.to_string());

        let order = Order {
            id: Uuid::new_v4().to_string(),
            items: lines,
            total,
            room_number,
            special_instructions: request.special_instructions.unwrap_or_default(),
            guest_name,
            status: "pending".to_string(),
            created_at: now,
            estimated_delivery: now + Duration::minutes(DELIVERY_MINUTES),
        };

        info!(
            order_id = %order.id,
            room_number = %order.room_number,
            line_count = order.items.len(),
            total = order.total,
            "Order placed"
        );

        Ok(order)
    }

    /// Status lookup; without persistence every order reads as preparing
    pub fn order_status(&self, order_id: &str) -> OrderStatus {
        debug!(order_id = %order_id, "Order status requested");
        OrderStatus {
            id: order_id.to_string(),
            status: "preparing".to_string(),
            estimated_delivery: Utc::now() + Duration::minutes(STATUS_LOOKUP_MINUTES),
        }
    }

    pub fn orders_for_room(&self, room_number: &str) -> Vec<Order> {
        debug!(room_number = %room_number, "Room orders requested");
        Vec::new()
    }
}
