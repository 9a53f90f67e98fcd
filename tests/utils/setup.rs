#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

use hotel_assistant::{ChatRelay, InMemoryRoomRegistry, RoomRegistry};

use super::mocks::ScriptedResolver;

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

/// A relay wired to a real registry; each guest is a connection whose
/// outbound frames land in an inbox instead of a socket
pub struct TestSetup {
    pub registry: Arc<InMemoryRoomRegistry>,
    pub relay: Arc<ChatRelay>,
    pub resolver: Arc<ScriptedResolver>,
    pub guests: Vec<String>,
    pub(crate) inboxes: Mutex<HashMap<String, mpsc::UnboundedReceiver<String>>>,
}

pub struct TestSetupBuilder {
    // (guest, room they join at build time)
    guests: Vec<(String, Option<String>)>,
    resolver: ScriptedResolver,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            guests: vec![],
            resolver: ScriptedResolver::new(),
        }
    }

    /// Connects the guests and joins them to `room_id`
    pub fn with_guests_in_room(mut self, room_id: &str, guests: Vec<&str>) -> Self {
        self.guests.extend(
            guests
                .into_iter()
                .map(|guest| (guest.to_string(), Some(room_id.to_string()))),
        );
        self
    }

    /// Connects a guest that has not joined any room
    pub fn with_lobby_guest(mut self, guest: &str) -> Self {
        self.guests.push((guest.to_string(), None));
        self
    }

    /// Two guest devices in room 201
    pub fn with_two_guests(self) -> Self {
        self.with_guests_in_room("201", vec!["phone", "tablet"])
    }

    pub fn with_resolver(mut self, resolver: ScriptedResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub async fn build(self) -> TestSetup {
        let registry = Arc::new(InMemoryRoomRegistry::new());
        let resolver = Arc::new(self.resolver);
        let relay = Arc::new(ChatRelay::new(registry.clone(), resolver.clone()));

        let mut inboxes = HashMap::new();
        for (guest, room) in &self.guests {
            let (sender, receiver) = mpsc::unbounded_channel();
            registry.add_connection(guest.clone(), sender).await;
            if let Some(room_id) = room {
                relay.join(guest, room_id).await;
            }
            inboxes.insert(guest.clone(), receiver);
        }

        let setup = TestSetup {
            registry,
            relay,
            resolver,
            guests: self.guests.into_iter().map(|(guest, _)| guest).collect(),
            inboxes: Mutex::new(inboxes),
        };

        // Start every test with empty inboxes (drops JOINED acks)
        setup.clear_messages().await;
        setup
    }
}

impl TestSetup {
    /// Pops the oldest undelivered frame for a guest
    pub async fn consume_message_for(&self, guest: &str) -> Option<String> {
        let mut inboxes = self.inboxes.lock().await;
        inboxes.get_mut(guest)?.try_recv().ok()
    }

    /// Drains every frame waiting for a guest
    pub async fn drain_messages_for(&self, guest: &str) -> Vec<String> {
        let mut messages = Vec::new();
        while let Some(message) = self.consume_message_for(guest).await {
            messages.push(message);
        }
        messages
    }
}
