// Public API - what other modules can use
pub use handlers::{get_menu, get_order_status, get_room_orders, place_order};
pub use models::Menu;
pub use service::OrderService;

// Internal modules
mod handlers;
pub mod models;
mod service;
pub mod types;
