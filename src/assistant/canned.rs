use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use super::{
    catalog::ResponseCatalog,
    intent::Intent,
    resolver::{IntentResolver, ResolutionRequest, ResolverError},
};

/// Local resolver that answers from the response catalog
///
/// Classification is keyword based; anything unrecognised gets the
/// catalog's default reply in the guest's language.
pub struct CannedResolver {
    catalog: Arc<ResponseCatalog>,
}

impl CannedResolver {
    pub fn new(catalog: Arc<ResponseCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl IntentResolver for CannedResolver {
    async fn resolve(&self, request: &ResolutionRequest) -> Result<String, ResolverError> {
        let intent = Intent::classify(&request.text);
        debug!(
            session_key = %request.session_key,
            language = %request.language,
            intent = %intent,
            "Classified guest message"
        );

        Ok(self
            .catalog
            .render(intent, request.language, &request.session_key))
    }

    fn resolver_name(&self) -> &'static str {
        "CannedResolver"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::Language;

    fn resolver() -> CannedResolver {
        CannedResolver::new(Arc::new(ResponseCatalog::bundled().unwrap()))
    }

    #[tokio::test]
    async fn test_housekeeping_reply_mentions_room() {
        let reply = resolver()
            .resolve(&ResolutionRequest::new("I need towels", "201", Language::En))
            .await
            .unwrap();
        assert!(reply.contains("housekeeping request for room 201"));
    }

    #[tokio::test]
    async fn test_reply_uses_requested_language() {
        let reply = resolver()
            .resolve(&ResolutionRequest::new("wifi", "12", Language::Es))
            .await
            .unwrap();
        assert!(reply.starts_with("Aquí está la información de tu WiFi"));
    }

    #[tokio::test]
    async fn test_unknown_text_gets_default_reply() {
        let reply = resolver()
            .resolve(&ResolutionRequest::new("tell me a joke", "7", Language::Fr))
            .await
            .unwrap();
        assert!(reply.starts_with("Je suis là pour vous aider"));
    }
}
