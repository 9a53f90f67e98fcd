use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

use crate::assistant::DEFAULT_ENDPOINT;

/// Which intent resolver answers guest messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResolverKind {
    /// Local keyword matcher over the bundled response catalog
    Canned,
    /// Dialogflow ES detectIntent
    Dialogflow,
}

/// Server configuration, from flags or environment (a `.env` file is honoured)
#[derive(Debug, Clone, Parser)]
#[command(name = "hotel-assistant", version, about = "Hotel room virtual assistant server")]
pub struct Config {
    /// Interface to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Public URL guests reach the app on; QR codes point here
    #[arg(long, env = "PUBLIC_BASE_URL", default_value = "http://localhost:5000")]
    pub public_base_url: String,

    /// Directory holding the built chat front-end
    #[arg(long, env = "STATIC_DIR", default_value = "client/build")]
    pub static_dir: PathBuf,

    /// Optional response catalog overriding the bundled one
    #[arg(long, env = "RESPONSES_PATH")]
    pub responses_path: Option<PathBuf>,

    #[arg(long, env = "RESOLVER", value_enum, default_value_t = ResolverKind::Canned)]
    pub resolver: ResolverKind,

    #[arg(long, env = "DIALOGFLOW_PROJECT_ID")]
    pub dialogflow_project_id: Option<String>,

    #[arg(long, env = "DIALOGFLOW_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub dialogflow_endpoint: String,

    #[arg(long, env = "DIALOGFLOW_ACCESS_TOKEN", hide_env_values = true)]
    pub dialogflow_access_token: Option<String>,

    /// Service-account key used when no access token is given
    #[arg(long, env = "DIALOGFLOW_KEY_FILE")]
    pub dialogflow_key_file: Option<PathBuf>,

    /// Request timeout for the resolver's HTTP client
    #[arg(long, env = "RESOLVER_TIMEOUT_SECS", default_value_t = 10)]
    pub resolver_timeout_secs: u64,
}

impl Config {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn resolver_timeout(&self) -> Duration {
        Duration::from_secs(self.resolver_timeout_secs)
    }
}
