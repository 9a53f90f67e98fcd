use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

use super::{intent::Intent, language::Language};

const BUNDLED_RESPONSES: &str = include_str!("../../content/responses.json");

/// Placeholder substituted with the guest's room number
pub const ROOM_PLACEHOLDER: &str = "{room}";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read response catalog {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid response catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unknown intent in response catalog: {0}")]
    UnknownIntent(String),

    #[error("Unknown language '{language}' for intent {intent}")]
    UnknownLanguage { intent: String, language: String },

    #[error("Response catalog has no English default response")]
    MissingDefault,
}

/// Canned multilingual replies keyed by (intent, language)
#[derive(Debug, Clone)]
pub struct ResponseCatalog {
    templates: HashMap<(Intent, Language), String>,
}

impl ResponseCatalog {
    /// The catalog shipped with the binary
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_RESPONSES)
    }

    /// Loads a catalog from a JSON file on disk
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json(&raw)?;
        info!(
            path = %path.display(),
            templates = catalog.len(),
            "Loaded response catalog"
        );
        Ok(catalog)
    }

    /// Parses `{ "<intent>": { "<lang>": "<template>" } }`
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let document: HashMap<String, HashMap<String, String>> = serde_json::from_str(raw)?;

        let mut templates = HashMap::new();
        for (intent_name, translations) in document {
            let intent: Intent = intent_name
                .parse()
                .map_err(|_| CatalogError::UnknownIntent(intent_name.clone()))?;

            for (code, template) in translations {
                let language: Language =
                    code.parse().map_err(|_| CatalogError::UnknownLanguage {
                        intent: intent_name.clone(),
                        language: code.clone(),
                    })?;
                templates.insert((intent, language), template);
            }
        }

        if !templates.contains_key(&(Intent::Default, Language::En)) {
            return Err(CatalogError::MissingDefault);
        }

        debug!(templates = templates.len(), "Parsed response catalog");
        Ok(Self { templates })
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Looks up a template, falling back to English and then to the default reply
    pub fn template(&self, intent: Intent, language: Language) -> &str {
        [
            (intent, language),
            (intent, Language::En),
            (Intent::Default, language),
            (Intent::Default, Language::En),
        ]
        .iter()
        .find_map(|key| self.templates.get(key))
        .map(String::as_str)
        .unwrap_or_default()
    }

    /// Renders the template for a room
    pub fn render(&self, intent: Intent, language: Language, room_id: &str) -> String {
        self.template(intent, language)
            .replace(ROOM_PLACEHOLDER, room_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_bundled_catalog_covers_every_intent_and_language() {
        let catalog = ResponseCatalog::bundled().unwrap();
        for intent in Intent::iter() {
            for language in Language::iter() {
                assert!(
                    catalog.templates.contains_key(&(intent, language)),
                    "missing template for {intent}/{language}"
                );
            }
        }
    }

    #[test]
    fn test_render_substitutes_room_number() {
        let catalog = ResponseCatalog::bundled().unwrap();
        let reply = catalog.render(Intent::Housekeeping, Language::En, "201");
        assert!(reply.contains("room 201"));
        assert!(!reply.contains(ROOM_PLACEHOLDER));
    }

    #[test]
    fn test_missing_language_falls_back_to_english() {
        let catalog = ResponseCatalog::from_json(
            r#"{
                "default": {"en": "How can I help?"},
                "wifi": {"en": "Network: Guest", "fr": "Réseau : Guest"}
            }"#,
        )
        .unwrap();

        assert_eq!(catalog.template(Intent::Wifi, Language::Es), "Network: Guest");
        assert_eq!(catalog.template(Intent::Wifi, Language::Fr), "Réseau : Guest");
        assert_eq!(
            catalog.template(Intent::Facilities, Language::Ar),
            "How can I help?"
        );
    }

    #[test]
    fn test_rejects_catalog_without_default() {
        let err = ResponseCatalog::from_json(r#"{"wifi": {"en": "x"}}"#).unwrap_err();
        assert!(matches!(err, CatalogError::MissingDefault));
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let err = ResponseCatalog::from_json(r#"{"default": {"en": "x"}, "spa_booking": {"en": "y"}}"#)
            .unwrap_err();
        assert!(matches!(err, CatalogError::UnknownIntent(name) if name == "spa_booking"));

        let err = ResponseCatalog::from_json(r#"{"default": {"en": "x", "de": "y"}}"#).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownLanguage { .. }));
    }
}
