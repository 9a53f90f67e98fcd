use serde::{Deserialize, Deserializer, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Languages the assistant answers in
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
    Ar,
}

impl Language {
    /// Parses a language code such as `fr` or `es-MX`; anything unknown is English
    pub fn from_code(code: &str) -> Self {
        let primary = code.trim().split(['-', '_']).next().unwrap_or("");
        primary.parse().unwrap_or_default()
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::Ar => "ar",
        }
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Clients send all sorts here; anything that is not a known code is English
        let value = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(serde_json::Value::String(code)) => Language::from_code(&code),
            _ => Language::default(),
        })
    }
}
