use async_trait::async_trait;
use thiserror::Error;

use super::language::Language;

/// A single utterance to resolve
///
/// The session key is the room id; the collaborator uses it to keep
/// conversational context per room.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionRequest {
    pub text: String,
    pub session_key: String,
    pub language: Language,
}

impl ResolutionRequest {
    pub fn new(text: impl Into<String>, session_key: impl Into<String>, language: Language) -> Self {
        Self {
            text: text.into(),
            session_key: session_key.into(),
            language,
        }
    }
}

/// Errors that can occur while resolving an utterance
#[derive(Debug, Clone, Error)]
pub enum ResolverError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Upstream returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Upstream returned no fulfillment text")]
    EmptyFulfillment,

    #[error("Credentials error: {0}")]
    Credentials(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Turns guest text into the assistant's reply
#[async_trait]
pub trait IntentResolver: Send + Sync {
    async fn resolve(&self, request: &ResolutionRequest) -> Result<String, ResolverError>;

    /// Get a human-readable name for this resolver (for logging/debugging)
    fn resolver_name(&self) -> &'static str;
}
