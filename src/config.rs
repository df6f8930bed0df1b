//! Application configuration.
//!
//! Configuration is layered: built-in defaults, then an optional YAML file
//! (`--config` / `CONFIG_FILE`, falling back to `./config.yaml`), then
//! `CHAT_`-prefixed environment variables, then explicit CLI flags.

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Base URL of the backend chat/appointment API
    #[arg(long, env = "API_BASE_URL")]
    pub api_base_url: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub api: ApiConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

/// Settings for the external chat/appointment backend.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    /// Name of the session cookie.
    pub cookie_name: String,
    /// Sessions inactive longer than this are eligible for cleanup.
    pub timeout_minutes: u64,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder()
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("api.base_url", "http://127.0.0.1:8000")?
            .set_default("api.timeout_secs", 30)?
            .set_default("session.cookie_name", "chat_session")?
            .set_default("session.timeout_minutes", 30)?;

        // Config file: explicit path wins, ./config.yaml is an optional fallback
        builder = match &cli.config {
            Some(path) => builder.add_source(File::with_name(path)),
            None => builder.add_source(File::with_name("config").required(false)),
        };

        // Environment variables prefixed with CHAT_, e.g. CHAT_SERVER__PORT=8000
        builder = builder.add_source(
            Environment::with_prefix("CHAT")
                .separator("__")
                .try_parsing(true),
        );

        // CLI flags (and their env fallbacks handled by clap) take precedence
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", port)?;
        }
        if let Some(base_url) = cli.api_base_url {
            builder = builder.set_override("api.base_url", base_url)?;
        }

        let cfg = builder.build()?;
        cfg.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_port_override() {
        let config =
            AppConfig::load_from_args(["carechat", "--port", "9999"]).expect("config loads");
        assert_eq!(config.server.port, 9999);
    }

    #[test]
    fn test_cli_api_base_url_override() {
        let config =
            AppConfig::load_from_args(["carechat", "--api-base-url", "http://backend:8080"])
                .expect("config loads");
        assert_eq!(config.api.base_url, "http://backend:8080");
    }
}
