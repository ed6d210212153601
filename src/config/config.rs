use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub share: ShareConfig,
    pub behavior: BehaviorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the backend REST API
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    /// Base URL of the web frontend, used when building shareable campaign links
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Maximum rows to print before truncating a listing
    pub max_display_rows: usize,

    /// Include campaigns the backend marks inactive in listings
    pub show_inactive_campaigns: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            share: ShareConfig::default(),
            behavior: BehaviorConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".to_string(),
        }
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
        }
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            max_display_rows: 100,
            show_inactive_campaigns: false,
        }
    }
}

impl Config {
    /// Load config from the default location
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            // Create default config if it doesn't exist
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        let contents = fs::read_to_string(&config_path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get the default config file path
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(config_dir.join("give-cli").join("config.toml"))
    }

    /// Apply process-environment overrides. Read once at startup, after
    /// `dotenv` has populated the environment.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("GIVE_API_URL") {
            if !url.is_empty() {
                self.api.base_url = url;
            }
        }
        if let Ok(url) = std::env::var("GIVE_WEB_URL") {
            if !url.is_empty() {
                self.share.base_url = url;
            }
        }
    }

    /// Create a default config file with comments
    pub fn create_default_with_comments() -> String {
        r#"# give-cli Configuration File
# Location: ~/.config/give-cli/config.toml (Linux/macOS)
#           %APPDATA%\give-cli\config.toml (Windows)

[api]
# Base URL of the backend REST API
# Overridden by GIVE_API_URL when set
base_url = "http://localhost:5000/api"

[share]
# Base URL of the web frontend, used for shareable campaign links
# Overridden by GIVE_WEB_URL when set
base_url = "http://localhost:3000"

[behavior]
# Maximum rows to print before truncating a listing
max_display_rows = 100

# Include campaigns the backend marks inactive in listings
show_inactive_campaigns = false
"#
        .to_string()
    }

    /// Initialize config with a setup wizard
    pub fn init_wizard() -> Result<Self> {
        println!("give-cli Configuration Setup");
        println!("============================");

        let mut config = Config::default();

        print!("Backend API base URL [{}]: ", config.api.base_url);
        std::io::Write::flush(&mut std::io::stdout())?;
        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;
        if !input.trim().is_empty() {
            config.api.base_url = input.trim().to_string();
        }

        print!("Web frontend base URL [{}]: ", config.share.base_url);
        std::io::Write::flush(&mut std::io::stdout())?;
        input.clear();
        std::io::stdin().read_line(&mut input)?;
        if !input.trim().is_empty() {
            config.share.base_url = input.trim().to_string();
        }

        config.save()?;

        println!("\nConfiguration saved to: {:?}", Config::get_config_path()?);
        println!("You can edit this file directly to customize further.");

        Ok(config)
    }
}
