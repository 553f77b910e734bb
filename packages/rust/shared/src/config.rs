//! Application configuration for linkdigest.
//!
//! User config lives at `~/.linkdigest/linkdigest.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LinkDigestError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "linkdigest.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".linkdigest";

/// Default URL substrings that disqualify a candidate link.
pub const DEFAULT_BLACKLIST: [&str; 4] = ["unsplash", "blef.fr", "mailto", "www.google.com"];

// ---------------------------------------------------------------------------
// Config structs (matching linkdigest.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Feed ingestion settings.
    #[serde(default)]
    pub feed: FeedConfig,

    /// Link admission settings.
    #[serde(default)]
    pub filter: FilterConfig,

    /// CSV output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Spreadsheet publishing settings (publishing is skipped when absent).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheets: Option<SheetsConfig>,
}

/// `[feed]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// URL of the newsletter feed to ingest.
    #[serde(default = "default_feed_url")]
    pub url: String,

    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Cron cadence of the external orchestrator. Documentation only:
    /// the binary performs exactly one run per invocation.
    #[serde(default = "default_schedule")]
    pub schedule: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: default_feed_url(),
            user_agent: default_user_agent(),
            schedule: default_schedule(),
        }
    }
}

fn default_feed_url() -> String {
    "https://www.blef.fr/datanews/xml/".into()
}
fn default_user_agent() -> String {
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_4) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/83.0.4103.97 Safari/537.36"
        .into()
}
fn default_schedule() -> String {
    "0 14 * * 5".into()
}

/// `[filter]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Literal substrings that cause a URL to be discarded before fetch.
    #[serde(default = "default_blacklist")]
    pub blacklist: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            blacklist: default_blacklist(),
        }
    }
}

fn default_blacklist() -> Vec<String> {
    DEFAULT_BLACKLIST.iter().map(|s| s.to_string()).collect()
}

/// `[output]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Path of the intermediate CSV artifact (no header row).
    #[serde(default = "default_csv_path")]
    pub csv_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: default_csv_path(),
        }
    }
}

fn default_csv_path() -> String {
    "./links.csv".into()
}

/// `[sheets]` section — target spreadsheet for the publish step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetsConfig {
    /// Spreadsheet identifier (the long id in the sheet URL).
    pub spreadsheet_id: String,

    /// Sheet (tab) name used as the values range.
    pub sheet_name: String,

    /// Numeric sheet id (gid) targeted by the range clear.
    pub sheet_id: u64,

    /// Name of the env var holding the API token (never store the token itself).
    #[serde(default = "default_token_env")]
    pub token_env: String,

    /// API endpoint override, used by tests against a mock server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

fn default_token_env() -> String {
    "SHEETS_API_TOKEN".into()
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.linkdigest/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| LinkDigestError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.linkdigest/linkdigest.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| LinkDigestError::io(path, e))?;

    toml::from_str(&content).map_err(|e| {
        LinkDigestError::config(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| LinkDigestError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| LinkDigestError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| LinkDigestError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

/// Read the spreadsheet API token from the env var named in the config.
pub fn resolve_sheets_token(sheets: &SheetsConfig) -> Result<String> {
    match std::env::var(&sheets.token_env) {
        Ok(val) if !val.is_empty() => Ok(val),
        _ => Err(LinkDigestError::config(format!(
            "spreadsheet token not found. Set the {} environment variable.",
            sheets.token_env
        ))),
    }
}
