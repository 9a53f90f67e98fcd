// Public API - what other modules can use
pub use handlers::{
    get_attractions, get_facilities, get_info, request_late_checkout, submit_housekeeping,
};
pub use models::HotelContent;
pub use service::HotelService;

// Internal modules
mod handlers;
pub mod models;
mod service;
pub mod types;
