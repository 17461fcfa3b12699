use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub assistant: AssistantConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:7331".to_string()
}

/// Settings for the remote completion variant (`asref ask`).
///
/// Disabled by default; set `provider = "openai"` and a `model` to enable.
/// The API key is never stored in the file — it comes from the
/// `OPENAI_API_KEY` environment variable.
#[derive(Debug, Deserialize, Clone)]
pub struct AssistantConfig {
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: None,
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_provider() -> String {
    "disabled".to_string()
}
fn default_temperature() -> f64 {
    0.3
}
fn default_max_tokens() -> u32 {
    500
}
fn default_timeout_secs() -> u64 {
    30
}

impl AssistantConfig {
    pub fn is_enabled(&self) -> bool {
        self.provider != "disabled"
    }
}

impl Config {
    /// Built-in defaults, used by commands that only need the static
    /// table when no config file is present.
    pub fn minimal() -> Self {
        Self {
            server: ServerConfig::default(),
            assistant: AssistantConfig::default(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    match config.assistant.provider.as_str() {
        "disabled" | "openai" => {}
        other => anyhow::bail!(
            "Unknown assistant provider: '{}'. Must be disabled or openai.",
            other
        ),
    }

    if config.assistant.is_enabled() && config.assistant.model.is_none() {
        anyhow::bail!(
            "assistant.model must be specified when provider is '{}'",
            config.assistant.provider
        );
    }

    if !(0.0..=2.0).contains(&config.assistant.temperature) {
        anyhow::bail!("assistant.temperature must be in [0.0, 2.0]");
    }

    if config.assistant.max_tokens == 0 {
        anyhow::bail!("assistant.max_tokens must be > 0");
    }

    Ok(config)
}
