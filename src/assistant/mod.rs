// Intent resolution: turns guest text into assistant replies.
//
// The relay only sees the `IntentResolver` trait. Two implementations ship:
// a Dialogflow client and a local keyword matcher over the response catalog.

// Public API - what other modules can use
pub use canned::CannedResolver;
pub use catalog::{CatalogError, ResponseCatalog};
pub use dialogflow::{DialogflowCredentials, DialogflowResolver, DEFAULT_ENDPOINT};
pub use intent::Intent;
pub use language::Language;
pub use resolver::{IntentResolver, ResolutionRequest, ResolverError};

use std::sync::Arc;
use tracing::info;

use crate::config::{Config, ResolverKind};

// Internal modules
mod canned;
mod catalog;
mod dialogflow;
mod intent;
mod language;
mod resolver;

/// Builds the resolver selected in configuration
pub fn build_resolver(
    config: &Config,
    catalog: Arc<ResponseCatalog>,
) -> Result<Arc<dyn IntentResolver>, ResolverError> {
    let resolver: Arc<dyn IntentResolver> = match config.resolver {
        ResolverKind::Canned => Arc::new(CannedResolver::new(catalog)),
        ResolverKind::Dialogflow => {
            let project_id = config.dialogflow_project_id.clone().ok_or_else(|| {
                ResolverError::Configuration(
                    "DIALOGFLOW_PROJECT_ID must be set for the dialogflow resolver".to_string(),
                )
            })?;

            let credentials = match (
                &config.dialogflow_access_token,
                &config.dialogflow_key_file,
            ) {
                (Some(token), _) => DialogflowCredentials::AccessToken(token.clone()),
                (None, Some(path)) => DialogflowCredentials::ServiceAccountKey(path.clone()),
                (None, None) => DialogflowCredentials::Anonymous,
            };

            Arc::new(DialogflowResolver::new(
                project_id,
                config.dialogflow_endpoint.clone(),
                credentials,
                config.resolver_timeout(),
            )?)
        }
    };

    info!(resolver = resolver.resolver_name(), "Intent resolver ready");
    Ok(resolver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn catalog() -> Arc<ResponseCatalog> {
        Arc::new(ResponseCatalog::bundled().unwrap())
    }

    #[test]
    fn test_build_canned_resolver() {
        let config = Config::parse_from(["hotel-assistant", "--resolver", "canned"]);
        let resolver = build_resolver(&config, catalog()).unwrap();
        assert_eq!(resolver.resolver_name(), "CannedResolver");
    }

    #[test]
    fn test_build_dialogflow_resolver_requires_project() {
        let mut config = Config::parse_from(["hotel-assistant", "--resolver", "dialogflow"]);
        config.dialogflow_project_id = None;
        let result = build_resolver(&config, catalog());
        assert!(matches!(result, Err(ResolverError::Configuration(_))));
    }

    #[test]
    fn test_build_dialogflow_resolver() {
        let config = Config::parse_from([
            "hotel-assistant",
            "--resolver",
            "dialogflow",
            "--dialogflow-project-id",
            "hotelassistant",
            "--dialogflow-access-token",
            "token",
        ]);
        let resolver = build_resolver(&config, catalog()).unwrap();
        assert_eq!(resolver.resolver_name(), "DialogflowResolver");
    }
}
