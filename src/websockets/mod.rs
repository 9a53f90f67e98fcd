// Public API
pub use handler::{websocket_handler, websocket_room_handler};
pub use messages::{
    ChatFrame, JoinRoomPayload, JoinedPayload, MessageRole, MessageType, SendMessagePayload,
    WebSocketMessage, APOLOGY,
};
pub use relay::{ChatRelay, RelayOutcome, RelayRejection};
pub use room_registry::{InMemoryRoomRegistry, JoinOutcome, RoomRegistry};
pub use socket::{Connection, MessageHandler, SocketError, SocketWrapper};

// Internal modules
mod handler;
mod messages;
mod relay;
mod room_registry;
mod socket;
