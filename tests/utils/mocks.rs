#![allow(dead_code)]

use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::RwLock;

use hotel_assistant::{IntentResolver, ResolutionRequest, ResolverError};

// ============================================================================
// Mock Infrastructure
// ============================================================================

enum Behaviour {
    Reply(String),
    Fail(ResolverError),
    Delay(Duration, String),
}

struct Rule {
    trigger: String,
    behaviour: Behaviour,
}

/// Resolver whose answers are scripted by message text
///
/// Unscripted messages get `"[<session>] <text>"` back, so tests can see
/// which session key was used.
pub struct ScriptedResolver {
    rules: Vec<Rule>,
    requests: RwLock<Vec<ResolutionRequest>>,
}

impl ScriptedResolver {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            requests: RwLock::new(Vec::new()),
        }
    }

    pub fn reply_to(mut self, trigger: &str, reply: &str) -> Self {
        self.rules.push(Rule {
            trigger: trigger.to_string(),
            behaviour: Behaviour::Reply(reply.to_string()),
        });
        self
    }

    pub fn fail_on(mut self, trigger: &str, error: ResolverError) -> Self {
        self.rules.push(Rule {
            trigger: trigger.to_string(),
            behaviour: Behaviour::Fail(error),
        });
        self
    }

    pub fn delay_on(mut self, trigger: &str, delay: Duration, reply: &str) -> Self {
        self.rules.push(Rule {
            trigger: trigger.to_string(),
            behaviour: Behaviour::Delay(delay, reply.to_string()),
        });
        self
    }

    pub async fn requests(&self) -> Vec<ResolutionRequest> {
        self.requests.read().await.clone()
    }
}

#[async_trait]
impl IntentResolver for ScriptedResolver {
    async fn resolve(&self, request: &ResolutionRequest) -> Result<String, ResolverError> {
        self.requests.write().await.push(request.clone());

        let rule = self
            .rules
            .iter()
            .find(|rule| request.text.contains(&rule.trigger));

        match rule.map(|rule| &rule.behaviour) {
            Some(Behaviour::Reply(reply)) => Ok(reply.clone()),
            Some(Behaviour::Fail(error)) => Err(error.clone()),
            Some(Behaviour::Delay(delay, reply)) => {
                tokio::time::sleep(*delay).await;
                Ok(reply.clone())
            }
            None => Ok(format!("[{}] {}", request.session_key, request.text)),
        }
    }

    fn resolver_name(&self) -> &'static str {
        "ScriptedResolver"
    }
}
