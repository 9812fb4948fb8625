//! Config command implementation.
//!
//! View and manage configuration settings.
//! Config file is located at ~/.config/lootlog/config.toml.

use std::env;
use std::fs;
use std::path::PathBuf;

use directories::BaseDirs;
use lootlog_data::client::DEFAULT_BASE_URL;
use lootlog_engine::{FilterStore, RatesStore};
use serde::{Deserialize, Serialize};

use super::{CommandContext, CommandError, Result};

/// Current config file version. Increment when making breaking changes to schema.
const CONFIG_VERSION: u32 = 1;

/// Environment variable overriding the config file path.
pub const CONFIG_ENV: &str = "LOOTLOG_CONFIG";

/// League used when none is configured.
pub const DEFAULT_LEAGUE: &str = "Standard";

/// Filter profile used when none is configured.
pub const DEFAULT_PROFILE: &str = "default";

/// Keys accepted by `config set`.
const VALID_KEYS: [&str; 6] = [
    "rates.base_url",
    "rates.league",
    "filter.profile",
    "output.color",
    "storage.filters",
    "storage.rates",
];

/// Configuration file structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Config schema version for migrations.
    /// Defaults to current version when not present in file.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Snapshot service settings.
    #[serde(default)]
    pub rates: RatesConfig,

    /// Filter settings.
    #[serde(default)]
    pub filter: FilterConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Data file locations.
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Returns the current config version (used by serde default).
fn default_version() -> u32 {
    CONFIG_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            rates: RatesConfig::default(),
            filter: FilterConfig::default(),
            output: OutputConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl Config {
    /// Snapshot service base URL.
    pub fn base_url(&self) -> &str {
        self.rates.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// League snapshots are fetched for.
    pub fn league(&self) -> &str {
        self.rates.league.as_deref().unwrap_or(DEFAULT_LEAGUE)
    }

    /// Filter profile used when a command names none.
    pub fn profile(&self) -> &str {
        self.filter.profile.as_deref().unwrap_or(DEFAULT_PROFILE)
    }

    /// Opens the saved filter archive.
    pub fn filter_store(&self) -> Result<FilterStore> {
        match &self.storage.filters {
            Some(path) => Ok(FilterStore::with_path(path.clone())),
            None => Ok(FilterStore::new()?),
        }
    }

    /// Opens the price history.
    pub fn rates_store(&self) -> Result<RatesStore> {
        match &self.storage.rates {
            Some(path) => Ok(RatesStore::with_path(path.clone())),
            None => Ok(RatesStore::new()?),
        }
    }
}

/// Snapshot service configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RatesConfig {
    /// Base URL of the snapshot service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// League to fetch snapshots for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub league: Option<String>,
}

/// Filter configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Default profile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
}

/// Output configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Enable colors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

/// Data file locations. Unset entries use the XDG data and cache directories.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Saved filter archive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<PathBuf>,

    /// Price history.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rates: Option<PathBuf>,
}

/// Gets the config directory path.
/// Uses XDG-style paths: ~/.config/lootlog/ on all platforms.
fn get_config_dir() -> Result<PathBuf> {
    if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg_config).join("lootlog"));
    }

    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".config").join("lootlog"))
        .ok_or_else(|| CommandError::Config("Could not determine config directory".to_string()))
}

/// Gets the config file path.
pub fn get_config_path() -> Result<PathBuf> {
    if let Ok(path) = env::var(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }

    Ok(get_config_dir()?.join("config.toml"))
}

/// Loads the configuration from disk.
pub fn load_config() -> Result<Config> {
    let path = get_config_path()?;

    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| CommandError::Config(format!("Failed to read config: {}", e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| CommandError::Config(format!("Failed to parse config: {}", e)))?;

    migrate_config(config)
}

/// Migrates config to current version if needed.
fn migrate_config(mut config: Config) -> Result<Config> {
    if config.version > CONFIG_VERSION {
        return Err(CommandError::Config(format!(
            "Config version {} is newer than supported version {}",
            config.version, CONFIG_VERSION
        )));
    }

    // Version 1 is the initial schema; later migrations go here in order.
    config.version = CONFIG_VERSION;
    Ok(config)
}

/// Saves the configuration to disk.
fn save_config(config: &Config) -> Result<PathBuf> {
    let path = get_config_path()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            CommandError::Config(format!("Failed to create config directory: {}", e))
        })?;
    }

    let content = toml::to_string_pretty(config)
        .map_err(|e| CommandError::Config(format!("Failed to serialize config: {}", e)))?;

    fs::write(&path, content)
        .map_err(|e| CommandError::Config(format!("Failed to write config: {}", e)))?;

    Ok(path)
}

/// Executes the config show command.
pub fn execute_show(ctx: &CommandContext) -> Result<()> {
    let config = load_config()?;
    let path = get_config_path()?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
            "config": config,
            "effective": {
                "rates.base_url": config.base_url(),
                "rates.league": config.league(),
                "filter.profile": config.profile(),
            },
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        use owo_colors::OwoColorize;

        let header = "Configuration";
        if ctx.use_colors {
            println!("{}\n", header.green().bold());
        } else {
            println!("{}\n", header);
        }

        println!("File: {}", path.display());
        println!("Exists: {}\n", path.exists());

        println!("[rates]");
        println!("  base_url: {}", config.base_url());
        println!("  league: {}", config.league());

        println!("\n[filter]");
        println!("  profile: {}", config.profile());

        println!("\n[output]");
        if let Some(color) = config.output.color {
            println!("  color: {}", color);
        }

        println!("\n[storage]");
        if let Some(ref filters) = config.storage.filters {
            println!("  filters: {}", filters.display());
        }
        if let Some(ref rates) = config.storage.rates {
            println!("  rates: {}", rates.display());
        }
    }

    Ok(())
}

/// Options for the config set command.
pub struct ConfigSetOptions {
    /// Configuration key.
    pub key: String,
    /// Configuration value.
    pub value: String,
}

/// Executes the config set command.
pub fn execute_set(ctx: &CommandContext, opts: &ConfigSetOptions) -> Result<()> {
    let mut config = load_config()?;
    apply_setting(&mut config, &opts.key, &opts.value)?;
    let path = save_config(&config)?;

    if ctx.json_output {
        let output = serde_json::json!({
            "status": "success",
            "key": opts.key,
            "value": opts.value,
            "path": path.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        println!("Set {} = {}", opts.key, opts.value);
    }

    Ok(())
}

/// Applies one `section.field` setting.
fn apply_setting(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key.split_once('.') {
        Some(("rates", "base_url")) => {
            if !value.starts_with("http://") && !value.starts_with("https://") {
                return Err(CommandError::Config(format!(
                    "Invalid base_url '{}'. Expected an http(s) URL",
                    value
                )));
            }
            config.rates.base_url = Some(value.to_string());
        }
        Some(("rates", "league")) => config.rates.league = Some(non_empty(key, value)?),
        Some(("filter", "profile")) => config.filter.profile = Some(non_empty(key, value)?),
        Some(("output", "color")) => config.output.color = Some(parse_bool(value)?),
        Some(("storage", "filters")) => config.storage.filters = Some(non_empty(key, value)?.into()),
        Some(("storage", "rates")) => config.storage.rates = Some(non_empty(key, value)?.into()),
        _ => {
            return Err(CommandError::Config(format!(
                "Unknown config key '{}'. Valid keys: {}",
                key,
                VALID_KEYS.join(", ")
            )));
        }
    }
    Ok(())
}

fn non_empty(key: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CommandError::Config(format!("{} cannot be empty", key)));
    }
    Ok(value.to_string())
}

/// Executes the config path command.
pub fn execute_path(ctx: &CommandContext) -> Result<()> {
    let path = get_config_path()?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", path.display());
    }

    Ok(())
}

/// Parses a boolean value from string.
fn parse_bool(s: &str) -> Result<bool> {
    match s.to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(CommandError::Config(format!(
            "Invalid boolean value '{}'. Use true/false, yes/no, 1/0, or on/off",
            s
        ))),
    }
}
