use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};
use tracing::debug;

/// Result of asking a connection to join a room
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinOutcome {
    /// Connection had no room and is now a member
    Joined,
    /// Connection was already a member of this room
    AlreadyMember,
    /// Connection left `previous` and joined the new room
    Moved { previous: String },
    /// Connection is not registered (already disconnected)
    UnknownConnection,
    /// Room id was blank; nothing changed
    InvalidRoom,
}

/// Tracks live connections and the single room each one belongs to
#[async_trait]
pub trait RoomRegistry: Send + Sync {
    async fn add_connection(&self, connection_id: String, sender: mpsc::UnboundedSender<String>);

    /// Drops the connection and its membership, returning the room it was in
    async fn remove_connection(&self, connection_id: &str) -> Option<String>;

    async fn join(&self, connection_id: &str, room_id: &str) -> JoinOutcome;

    /// Leaves the current room, returning it
    async fn leave(&self, connection_id: &str) -> Option<String>;

    async fn room_of(&self, connection_id: &str) -> Option<String>;

    async fn members(&self, room_id: &str) -> Vec<String>;

    async fn send_to_connection(&self, connection_id: &str, message: &str);

    /// Sends to every member of the room, returning how many were reached
    async fn broadcast_to_room(&self, room_id: &str, message: &str) -> usize;

    async fn room_count(&self) -> usize;
}

struct ConnectionEntry {
    sender: mpsc::UnboundedSender<String>,
    room: Option<String>,
}

#[derive(Default)]
struct RegistryState {
    // connection id -> outbound sender + membership
    connections: HashMap<String, ConnectionEntry>,
    // room id -> member connection ids
    rooms: HashMap<String, HashSet<String>>,
}

impl RegistryState {
    fn detach(&mut self, room_id: &str, connection_id: &str) {
        if let Some(members) = self.rooms.get_mut(room_id) {
            members.remove(connection_id);
            if members.is_empty() {
                self.rooms.remove(room_id);
                debug!(room_id = %room_id, "Room is empty, removed");
            }
        }
    }
}

pub struct InMemoryRoomRegistry {
    state: Arc<RwLock<RegistryState>>,
}

impl Default for InMemoryRoomRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRoomRegistry {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(RegistryState::default())),
        }
    }
}

#[async_trait]
impl RoomRegistry for InMemoryRoomRegistry {
    async fn add_connection(&self, connection_id: String, sender: mpsc::UnboundedSender<String>) {
        let mut state = self.state.write().await;
        if let Some(previous) = state
            .connections
            .insert(connection_id.clone(), ConnectionEntry { sender, room: None })
        {
            // Re-registering an id resets its membership
            if let Some(room_id) = previous.room {
                state.detach(&room_id, &connection_id);
            }
        }
    }

    async fn remove_connection(&self, connection_id: &str) -> Option<String> {
        let mut state = self.state.write().await;
        let room_id = state.connections.remove(connection_id)?.room?;
        state.detach(&room_id, connection_id);
        Some(room_id)
    }

    async fn join(&self, connection_id: &str, room_id: &str) -> JoinOutcome {
        let mut state = self.state.write().await;
        let state = &mut *state;

        let Some(entry) = state.connections.get_mut(connection_id) else {
            return JoinOutcome::UnknownConnection;
        };

        if entry.room.as_deref() == Some(room_id) {
            return JoinOutcome::AlreadyMember;
        }

        let previous = entry.room.replace(room_id.to_string());
        if let Some(previous_room) = &previous {
            state.detach(previous_room, connection_id);
        }

        state
            .rooms
            .entry(room_id.to_string())
            .or_default()
            .insert(connection_id.to_string());

        match previous {
            Some(previous) => JoinOutcome::Moved { previous },
            None => JoinOutcome::Joined,
        }
    }

    async fn leave(&self, connection_id: &str) -> Option<String> {
        let mut state = self.state.write().await;
        let room_id = state.connections.get_mut(connection_id)?.room.take()?;
        state.detach(&room_id, connection_id);
        Some(room_id)
    }

    async fn room_of(&self, connection_id: &str) -> Option<String> {
        let state = self.state.read().await;
        state
            .connections
            .get(connection_id)
            .and_then(|entry| entry.room.clone())
    }

    async fn members(&self, room_id: &str) -> Vec<String> {
        let state = self.state.read().await;
        state
            .rooms
            .get(room_id)
            .map(|members| members.iter().cloned().collect())
            .unwrap_or_default()
    }

    async fn send_to_connection(&self, connection_id: &str, message: &str) {
        let state = self.state.read().await;
        if let Some(entry) = state.connections.get(connection_id) {
            let _ = entry.sender.send(message.to_string());
        }
    }

    async fn broadcast_to_room(&self, room_id: &str, message: &str) -> usize {
        let state = self.state.read().await;
        let Some(members) = state.rooms.get(room_id) else {
            return 0;
        };

        members
            .iter()
            .filter_map(|connection_id| state.connections.get(connection_id))
            .filter(|entry| entry.sender.send(message.to_string()).is_ok())
            .count()
    }

    async fn room_count(&self) -> usize {
        self.state.read().await.rooms.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn connect(
        registry: &InMemoryRoomRegistry,
        connection_id: &str,
    ) -> mpsc::UnboundedReceiver<String> {
        let (sender, receiver) = mpsc::unbounded_channel();
        registry
            .add_connection(connection_id.to_string(), sender)
            .await;
        receiver
    }

    #[tokio::test]
    async fn test_join_is_idempotent() {
        let registry = InMemoryRoomRegistry::new();
        let _rx = connect(&registry, "a").await;

        assert_eq!(registry.join("a", "201").await, JoinOutcome::Joined);
        assert_eq!(registry.join("a", "201").await, JoinOutcome::AlreadyMember);
        assert_eq!(registry.members("201").await, vec!["a".to_string()]);
    }

    #[tokio::test]
    async fn test_join_moves_between_rooms() {
        let registry = InMemoryRoomRegistry::new();
        let _rx = connect(&registry, "a").await;

        registry.join("a", "201").await;
        let outcome = registry.join("a", "305").await;

        assert_eq!(
            outcome,
            JoinOutcome::Moved {
                previous: "201".to_string()
            }
        );
        assert!(registry.members("201").await.is_empty());
        assert_eq!(registry.room_of("a").await.as_deref(), Some("305"));
        assert_eq!(registry.room_count().await, 1);
    }

    #[tokio::test]
    async fn test_join_unknown_connection() {
        let registry = InMemoryRoomRegistry::new();
        assert_eq!(
            registry.join("ghost", "201").await,
            JoinOutcome::UnknownConnection
        );
        assert_eq!(registry.room_count().await, 0);
    }

    #[tokio::test]
    async fn test_broadcast_reaches_only_room_members() {
        let registry = InMemoryRoomRegistry::new();
        let mut a = connect(&registry, "a").await;
        let mut b = connect(&registry, "b").await;
        let mut c = connect(&registry, "c").await;

        registry.join("a", "201").await;
        registry.join("b", "201").await;
        registry.join("c", "305").await;

        let reached = registry.broadcast_to_room("201", "hello").await;

        assert_eq!(reached, 2);
        assert_eq!(a.try_recv().unwrap(), "hello");
        assert_eq!(b.try_recv().unwrap(), "hello");
        assert!(c.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_remove_connection_cleans_up_room() {
        let registry = InMemoryRoomRegistry::new();
        let _rx = connect(&registry, "a").await;
        registry.join("a", "201").await;

        assert_eq!(registry.remove_connection("a").await.as_deref(), Some("201"));
        assert_eq!(registry.room_count().await, 0);
        assert_eq!(registry.broadcast_to_room("201", "anyone?").await, 0);
        assert!(registry.remove_connection("a").await.is_none());
    }

    #[tokio::test]
    async fn test_leave_keeps_connection_registered() {
        let registry = InMemoryRoomRegistry::new();
        let mut rx = connect(&registry, "a").await;
        registry.join("a", "201").await;

        assert_eq!(registry.leave("a").await.as_deref(), Some("201"));
        assert!(registry.room_of("a").await.is_none());
        assert!(registry.leave("a").await.is_none());

        registry.send_to_connection("a", "direct").await;
        assert_eq!(rx.try_recv().unwrap(), "direct");
    }

    #[tokio::test]
    async fn test_broadcast_skips_closed_channels() {
        let registry = InMemoryRoomRegistry::new();
        let rx = connect(&registry, "a").await;
        let _b = connect(&registry, "b").await;
        registry.join("a", "201").await;
        registry.join("b", "201").await;
        drop(rx);

        assert_eq!(registry.broadcast_to_room("201", "hi").await, 1);
    }
}
