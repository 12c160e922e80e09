use std::path::PathBuf;

use anyhow::{anyhow, Context};
use serde::Deserialize;

const DEFAULT_ENV: &str = "local";
const ENV_VAR_NAME: &str = "VOYAGE_ENV";
const CONFIG_DIR_ENV: &str = "VOYAGE_CONFIG_DIR";
const ENV_PREFIX: &str = "VOYAGE";
const ENV_SEPARATOR: &str = "__";

/// Deployment environment the application is running in.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Local,
    Staging,
    Production,
}

impl std::str::FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "local" => Ok(Environment::Local),
            "staging" => Ok(Environment::Staging),
            "production" => Ok(Environment::Production),
            other => Err(anyhow!(
                "unsupported environment '{}'; expected local/staging/production",
                other
            )),
        }
    }
}

/// Top-level configuration structure loaded from layered sources.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub environment: Environment,
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
    #[serde(default)]
    pub generator: GeneratorSettings,
}

impl Settings {
    /// Load configuration by layering `.env`, base file, environment overlay
    /// and `VOYAGE__`-prefixed environment variables.
    pub fn load() -> anyhow::Result<Self> {
        // Allow missing `.env` files without failing.
        let _ = dotenvy::dotenv();

        let environment = std::env::var(ENV_VAR_NAME).unwrap_or_else(|_| DEFAULT_ENV.to_string());
        let config_dir = match std::env::var(CONFIG_DIR_ENV) {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => std::env::current_dir()
                .context("unable to resolve current directory")?
                .join("config"),
        };

        Self::load_from(&config_dir, &environment)
    }

    /// Load configuration from an explicit directory and environment name.
    pub fn load_from(config_dir: &std::path::Path, environment: &str) -> anyhow::Result<Self> {
        let parsed_environment: Environment = environment.parse()?;

        let base_path = config_dir.join("base.toml");
        let environment_path = config_dir.join(format!("{}.toml", environment));

        let builder = config::Config::builder()
            .add_source(config::File::from(base_path).required(false))
            .add_source(config::File::from(environment_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .list_separator(",")
                    .with_list_parse_key("generator.destinations")
                    .with_list_parse_key("generator.themes")
                    .with_list_parse_key("generator.tags")
                    .try_parsing(true),
            );

        let cfg = builder
            .build()
            .with_context(|| "failed to build configuration")?;

        let mut settings: Settings = cfg
            .try_deserialize()
            .with_context(|| "failed to deserialize configuration")?;

        // The selected environment name wins over anything set in files.
        settings.environment = parsed_environment;

        Ok(settings)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "ServerSettings::default_host")]
    pub host: String,
    #[serde(default = "ServerSettings::default_port")]
    pub port: u16,
    #[serde(default = "ServerSettings::default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl ServerSettings {
    fn default_host() -> String {
        "0.0.0.0".to_string()
    }

    fn default_port() -> u16 {
        8080
    }

    fn default_request_timeout_ms() -> u64 {
        15000
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            request_timeout_ms: Self::default_request_timeout_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelemetrySettings {
    #[serde(default)]
    pub log_format: LogFormat,
    /// `EnvFilter` directives used when `RUST_LOG` is unset.
    #[serde(default = "TelemetrySettings::default_log_filter")]
    pub log_filter: String,
}

impl TelemetrySettings {
    fn default_log_filter() -> String {
        "info".to_string()
    }
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Pretty,
            log_filter: Self::default_log_filter(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Candidate lists and bounds for the mock post generator.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorSettings {
    #[serde(default = "GeneratorSettings::default_destinations")]
    pub destinations: Vec<String>,
    #[serde(default = "GeneratorSettings::default_themes")]
    pub themes: Vec<String>,
    #[serde(default = "GeneratorSettings::default_read_time_min")]
    pub read_time_min: u32,
    #[serde(default = "GeneratorSettings::default_read_time_max")]
    pub read_time_max: u32,
    /// Placeholder country; no geocoding is performed.
    #[serde(default = "GeneratorSettings::default_country")]
    pub country: String,
    #[serde(default = "GeneratorSettings::default_image_base_url")]
    pub image_base_url: String,
    /// Tags placed before the destination tag on every generated post.
    #[serde(default = "GeneratorSettings::default_tags")]
    pub tags: Vec<String>,
}

impl GeneratorSettings {
    fn default_destinations() -> Vec<String> {
        [
            "Kyoto",
            "Reykjavik",
            "Cape Town",
            "Istanbul",
            "Sydney",
            "Barcelona",
            "Mumbai",
            "Cairo",
            "Vancouver",
            "Prague",
            "Dubai",
            "Budapest",
        ]
        .into_iter()
        .map(String::from)
        .collect()
    }

    fn default_themes() -> Vec<String> {
        [
            "Hidden algorithmic patterns in ancient architecture",
            "AI-optimized routes through local neighborhoods",
            "Machine learning insights into local cuisine patterns",
            "Digital detox strategies using environmental psychology",
            "Predictive models for optimal photography timing",
            "Cultural preservation through technological innovation",
        ]
        .into_iter()
        .map(String::from)
        .collect()
    }

    fn default_read_time_min() -> u32 {
        5
    }

    fn default_read_time_max() -> u32 {
        12
    }

    fn default_country() -> String {
        "Various".to_string()
    }

    fn default_image_base_url() -> String {
        "https://images.unsplash.com".to_string()
    }

    fn default_tags() -> Vec<String> {
        vec!["AI Generated".to_string(), "Exploration".to_string()]
    }
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            destinations: Self::default_destinations(),
            themes: Self::default_themes(),
            read_time_min: Self::default_read_time_min(),
            read_time_max: Self::default_read_time_max(),
            country: Self::default_country(),
            image_base_url: Self::default_image_base_url(),
            tags: Self::default_tags(),
        }
    }
}
