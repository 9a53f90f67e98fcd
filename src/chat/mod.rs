// Public API - what other modules can use
pub use handlers::{get_history, send_message};

// Internal modules
mod handlers;
pub mod types;
