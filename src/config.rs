//! Configuration management

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::Result;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Anthropic API key
    #[serde(default)]
    pub api_key: String,

    /// Model to use
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_model() -> String {
    "claude-3-5-sonnet-20241022".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
        }
    }
}

/// Get the config directory path
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".eva")
}

/// Get the config file path
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

/// Load configuration from file
pub fn load() -> Result<Config> {
    load_from(&config_path())
}

fn load_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Err(Error::Config(format!(
            "Config not found at {:?}. Run 'eva onboard' first.",
            path
        )));
    }

    let content = std::fs::read_to_string(path)?;
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}

/// Save configuration to file
pub fn save(config: &Config) -> Result<()> {
    save_to(config, &config_path())
}

fn save_to(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Initialize configuration interactively
pub fn onboard() -> Result<()> {
    use crate::ui;
    use inquire::{Select, Text};

    ui::print_header("Setup");
    println!("  Welcome! I'll get Eva configured in a couple of steps.\n");

    let mut config = Config::default();

    let key = Text::new("Enter your Anthropic API Key:")
        .prompt()
        .map_err(|e| Error::Config(format!("Prompt failed: {}", e)))?;

    if key.trim().is_empty() {
        return Err(Error::Config("API key cannot be empty".to_string()));
    }
    config.api_key = key.trim().to_string();

    let models = vec!["claude-3-5-sonnet-20241022", "claude-3-5-haiku-20241022"];
    let model = Select::new("Choose a model:", models)
        .prompt()
        .map_err(|e| Error::Config(format!("Prompt failed: {}", e)))?;
    config.model = model.to_string();

    ui::print_thinking("Saving configuration");
    save(&config)?;

    println!();
    ui::print_success("Setup complete!");
    ui::print_step("You're all set. Run 'eva chat' to start a conversation.");

    Ok(())
}
