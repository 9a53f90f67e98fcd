// Public API - what other modules can use
pub use generator::{render_svg, room_url, QrError};
pub use handlers::{qr_image, qr_page, room_qr};

// Internal modules
mod generator;
mod handlers;
