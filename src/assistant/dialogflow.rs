use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{debug, info, instrument, warn};
use yup_oauth2::{
    authenticator::DefaultAuthenticator, read_service_account_key, ServiceAccountAuthenticator,
};

use super::resolver::{IntentResolver, ResolutionRequest, ResolverError};

pub const DEFAULT_ENDPOINT: &str = "https://dialogflow.googleapis.com";
const DIALOGFLOW_SCOPE: &str = "https://www.googleapis.com/auth/dialogflow";
const MAX_SESSION_ID_LEN: usize = 36;

/// How requests to Dialogflow are authorised
#[derive(Debug, Clone)]
pub enum DialogflowCredentials {
    /// A pre-issued OAuth access token
    AccessToken(String),
    /// A Google service-account key file; tokens are minted, cached and refreshed
    ServiceAccountKey(PathBuf),
    /// No Authorization header (local emulators, tests)
    Anonymous,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DetectIntentRequest<'a> {
    query_input: QueryInput<'a>,
}

#[derive(Serialize)]
struct QueryInput<'a> {
    text: TextInput<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TextInput<'a> {
    text: &'a str,
    language_code: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DetectIntentResponse {
    query_result: Option<QueryResult>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct QueryResult {
    #[serde(default)]
    fulfillment_text: String,
}

/// Dialogflow ES `detectIntent` client
pub struct DialogflowResolver {
    client: reqwest::Client,
    endpoint: String,
    project_id: String,
    credentials: DialogflowCredentials,
    // Built on first use from the service-account key, then shared
    authenticator: OnceCell<DefaultAuthenticator>,
}

impl DialogflowResolver {
    pub fn new(
        project_id: impl Into<String>,
        endpoint: impl Into<String>,
        credentials: DialogflowCredentials,
        timeout: Duration,
    ) -> Result<Self, ResolverError> {
        let project_id = project_id.into();
        if project_id.trim().is_empty() {
            return Err(ResolverError::Configuration(
                "Dialogflow project id is required".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ResolverError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            project_id,
            credentials,
            authenticator: OnceCell::new(),
        })
    }

    fn detect_intent_url(&self, session_key: &str) -> String {
        format!(
            "{}/v2/projects/{}/agent/sessions/{}:detectIntent",
            self.endpoint,
            self.project_id,
            session_id(session_key)
        )
    }

    async fn access_token(&self) -> Result<Option<String>, ResolverError> {
        match &self.credentials {
            DialogflowCredentials::AccessToken(token) => Ok(Some(token.clone())),
            DialogflowCredentials::ServiceAccountKey(path) => {
                let auth = self
                    .authenticator
                    .get_or_try_init(|| service_account_authenticator(path))
                    .await?;
                service_account_token(auth).await.map(Some)
            }
            DialogflowCredentials::Anonymous => Ok(None),
        }
    }
}

/// Dialogflow session ids only allow `[A-Za-z0-9_-]`, at most 36 chars.
/// Room ids that already fit are used verbatim; anything else is mapped to a
/// name-based uuid so distinct rooms never share a session. Without a room a
/// throwaway session is used.
fn session_id(session_key: &str) -> String {
    let key = session_key.trim();
    if key.is_empty() {
        return uuid::Uuid::new_v4().to_string();
    }

    let fits = key.len() <= MAX_SESSION_ID_LEN
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if fits {
        key.to_string()
    } else {
        uuid::Uuid::new_v5(&uuid::Uuid::NAMESPACE_URL, format!("room:{key}").as_bytes()).to_string()
    }
}

async fn service_account_authenticator(
    key_path: &Path,
) -> Result<DefaultAuthenticator, ResolverError> {
    let key = read_service_account_key(key_path).await.map_err(|e| {
        ResolverError::Credentials(format!(
            "Failed to load service account key from {}: {}",
            key_path.display(),
            e
        ))
    })?;

    let auth = ServiceAccountAuthenticator::builder(key)
        .build()
        .await
        .map_err(|e| ResolverError::Credentials(e.to_string()))?;

    info!(key_path = %key_path.display(), "Service account authenticator ready");
    Ok(auth)
}

/// The authenticator keeps the token in memory and only goes back to the
/// token endpoint when it is about to expire
async fn service_account_token(auth: &DefaultAuthenticator) -> Result<String, ResolverError> {
    let token = auth
        .token(&[DIALOGFLOW_SCOPE])
        .await
        .map_err(|e| ResolverError::Credentials(e.to_string()))?;

    token
        .token()
        .map(|t| t.to_string())
        .ok_or_else(|| ResolverError::Credentials("OAuth token was None".to_string()))
}

#[async_trait]
impl IntentResolver for DialogflowResolver {
    #[instrument(skip(self, request), fields(session_key = %request.session_key))]
    async fn resolve(&self, request: &ResolutionRequest) -> Result<String, ResolverError> {
        let url = self.detect_intent_url(&request.session_key);
        let body = DetectIntentRequest {
            query_input: QueryInput {
                text: TextInput {
                    text: &request.text,
                    language_code: request.language.code(),
                },
            },
        };

        let mut http_request = self.client.post(&url).json(&body);
        if let Some(token) = self.access_token().await? {
            http_request = http_request.bearer_auth(token);
        }

        debug!(url = %url, language = %request.language, "Calling Dialogflow detectIntent");

        let response = http_request
            .send()
            .await
            .map_err(|e| ResolverError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Dialogflow returned an error status");
            return Err(ResolverError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: DetectIntentResponse = response
            .json()
            .await
            .map_err(|e| ResolverError::Malformed(e.to_string()))?;

        let fulfillment = parsed
            .query_result
            .map(|result| result.fulfillment_text)
            .unwrap_or_default();

        if fulfillment.trim().is_empty() {
            return Err(ResolverError::EmptyFulfillment);
        }

        Ok(fulfillment)
    }

    fn resolver_name(&self) -> &'static str {
        "DialogflowResolver"
    }
}
