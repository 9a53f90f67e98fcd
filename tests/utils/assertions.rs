//! Test assertion helpers - fluent API for verifying test expectations
#![allow(dead_code)] // Test utilities may not all be used in every test

use serde_json;

use hotel_assistant::websockets::{MessageType, WebSocketMessage, APOLOGY};

use super::setup::TestSetup;

// ============================================================================
// Assertion Helpers
// ============================================================================

pub struct MessageAssertion<'a> {
    setup: &'a TestSetup,
    guests: Vec<&'a str>,
}

impl<'a> MessageAssertion<'a> {
    /// Create an assertion for every guest in the setup
    pub fn for_all_guests(setup: &'a TestSetup) -> Self {
        let guests = setup.guests.iter().map(|s| s.as_str()).collect();
        Self { setup, guests }
    }

    /// Create an assertion for specific guests
    pub fn for_guests(setup: &'a TestSetup, guests: Vec<&'a str>) -> Self {
        Self { setup, guests }
    }

    /// Assert that guests received a specific message type (consumes the message from queue)
    ///
    /// Every guest must have received an identical payload.
    pub async fn received_message_type(self, expected_type: MessageType) -> MessageContent {
        let mut messages = vec![];

        for guest in &self.guests {
            let message = self.setup.consume_message_for(guest).await;
            assert!(message.is_some(), "{} should have received a message", guest);

            let msg: WebSocketMessage = serde_json::from_str(&message.unwrap()).unwrap();
            assert_eq!(
                msg.message_type, expected_type,
                "{} received wrong message type",
                guest
            );
            messages.push(msg);
        }

        let first_payload = &messages[0].payload;
        for (i, msg) in messages.iter().enumerate().skip(1) {
            assert_eq!(
                &msg.payload, first_payload,
                "Guest {} payload differs from guest {}",
                self.guests[i], self.guests[0]
            );
        }

        MessageContent {
            payload: messages[0].payload.clone(),
        }
    }

    /// Assert that guests have nothing queued
    pub async fn received_no_messages(self) {
        for guest in &self.guests {
            let messages = self.setup.drain_messages_for(guest).await;
            assert!(
                messages.is_empty(),
                "{} should not have received any messages, got {:?}",
                guest,
                messages
            );
        }
    }
}

// ============================================================================
// Message Content Assertions
// ============================================================================

pub struct MessageContent {
    payload: serde_json::Value,
}

impl MessageContent {
    /// Assert the frame came from the given role
    pub fn with_role(self, expected_role: &str) -> Self {
        assert_eq!(self.payload["role"], expected_role);
        self
    }

    /// Assert the frame has exactly this text
    pub fn with_text(self, expected_text: &str) -> Self {
        assert_eq!(self.payload["text"], expected_text);
        self
    }

    /// Assert the frame text contains a fragment
    pub fn with_text_containing(self, fragment: &str) -> Self {
        let text = self.payload["text"].as_str().unwrap_or_default();
        assert!(
            text.contains(fragment),
            "expected {:?} to contain {:?}",
            text,
            fragment
        );
        self
    }

    /// Assert the frame is the assistant's apology
    pub fn is_apology(self) -> Self {
        self.with_role("assistant").with_text(APOLOGY)
    }

    /// Assert a JOINED acknowledgement for the room
    pub fn with_room(self, expected_room: &str) -> Self {
        assert_eq!(self.payload["room_id"], expected_room);
        self
    }

    /// Assert the frame carries a parseable timestamp
    pub fn with_timestamp(self) -> Self {
        let timestamp = self.payload["timestamp"].as_str().unwrap_or_default();
        assert!(
            chrono::DateTime::parse_from_rfc3339(timestamp).is_ok(),
            "timestamp {:?} is not RFC 3339",
            timestamp
        );
        self
    }
}
