//! Configuration loading and data folder resolution
//!
//! All configuration is resolved once at process start into an [`AppConfig`]
//! that handlers receive through shared state. Resolution priority for each
//! value:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)

use crate::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::warn;

/// Environment variable naming the data folder
pub const ENV_ROOT_FOLDER: &str = "SPICERACK_ROOT_FOLDER";
/// Environment variable for the listen port
pub const ENV_PORT: &str = "SPICERACK_PORT";
/// Environment variable for the near-expiry threshold (days)
pub const ENV_EXPIRY_THRESHOLD: &str = "SPICERACK_EXPIRY_THRESHOLD_DAYS";
/// Environment variable for the Google Custom Search API key
pub const ENV_GOOGLE_API_KEY: &str = "SPICERACK_GOOGLE_API_KEY";
/// Environment variable for the Google Custom Search engine id
pub const ENV_GOOGLE_CSE_ID: &str = "SPICERACK_GOOGLE_CSE_ID";

/// Default listen port
pub const DEFAULT_PORT: u16 = 5780;
/// Default near-expiry threshold in days
pub const DEFAULT_EXPIRY_THRESHOLD_DAYS: i64 = 7;
/// Default recipe search endpoint (Google Custom Search JSON API)
pub const DEFAULT_RECIPE_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

const DB_FILE_NAME: &str = "spicerack.db";
const UPLOAD_DIR_NAME: &str = "uploads";

/// Marketing-noise substrings stripped from condiment names before they are
/// used as recipe search terms. Overridable via the `noise_keywords` key in
/// the TOML config file.
pub const DEFAULT_NOISE_KEYWORDS: &[&str] = &[
    "additive-free",
    "premium",
    "low-sodium",
    "limited edition",
    "value pack",
    "large size",
    "sauce",
    "dressing",
    "seasoning",
];

/// Optional values read from the TOML config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub root_folder: Option<String>,
    pub port: Option<u16>,
    pub expiry_threshold_days: Option<i64>,
    pub google_api_key: Option<String>,
    pub google_cse_id: Option<String>,
    pub recipe_endpoint: Option<String>,
    pub noise_keywords: Option<Vec<String>>,
}

/// Resolved application configuration, constructed once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Data folder holding the database and uploaded images
    pub root_folder: PathBuf,
    /// HTTP listen port
    pub port: u16,
    /// Days before expiry at which a condiment counts as near-expiry
    pub expiry_threshold_days: i64,
    /// Google Custom Search API key (recipe search disabled when absent)
    pub google_api_key: Option<String>,
    /// Google Custom Search engine id
    pub google_cse_id: Option<String>,
    /// Recipe search endpoint URL
    pub recipe_endpoint: String,
    /// Substrings stripped from condiment names before querying
    pub noise_keywords: Vec<String>,
}

impl AppConfig {
    /// Resolve the full configuration from CLI arguments, environment,
    /// TOML config file and defaults (in that priority order).
    pub fn resolve(cli_root_folder: Option<&str>, cli_port: Option<u16>) -> Result<Self> {
        let toml_config = load_toml_config();

        let root_folder = resolve_root_folder(cli_root_folder, &toml_config);

        let port = cli_port
            .or_else(|| env_parsed(ENV_PORT))
            .or(toml_config.port)
            .unwrap_or(DEFAULT_PORT);

        let expiry_threshold_days = env_parsed(ENV_EXPIRY_THRESHOLD)
            .or(toml_config.expiry_threshold_days)
            .unwrap_or(DEFAULT_EXPIRY_THRESHOLD_DAYS);
        if expiry_threshold_days < 0 {
            return Err(Error::Config(format!(
                "Expiry threshold must be non-negative, got {}",
                expiry_threshold_days
            )));
        }

        let google_api_key = non_blank(std::env::var(ENV_GOOGLE_API_KEY).ok())
            .or_else(|| non_blank(toml_config.google_api_key.clone()));
        let google_cse_id = non_blank(std::env::var(ENV_GOOGLE_CSE_ID).ok())
            .or_else(|| non_blank(toml_config.google_cse_id.clone()));

        let recipe_endpoint = toml_config
            .recipe_endpoint
            .clone()
            .unwrap_or_else(|| DEFAULT_RECIPE_ENDPOINT.to_string());

        let noise_keywords = toml_config
            .noise_keywords
            .clone()
            .unwrap_or_else(default_noise_keywords);

        Ok(Self {
            root_folder,
            port,
            expiry_threshold_days,
            google_api_key,
            google_cse_id,
            recipe_endpoint,
            noise_keywords,
        })
    }

    /// Path of the SQLite database file inside the data folder
    pub fn database_path(&self) -> PathBuf {
        self.root_folder.join(DB_FILE_NAME)
    }

    /// Directory holding uploaded condiment images
    pub fn upload_dir(&self) -> PathBuf {
        self.root_folder.join(UPLOAD_DIR_NAME)
    }

    /// Create the data folder and upload directory if missing
    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.root_folder)?;
        std::fs::create_dir_all(self.upload_dir())?;
        Ok(())
    }
}

/// Default noise-keyword denylist as an owned list
pub fn default_noise_keywords() -> Vec<String> {
    DEFAULT_NOISE_KEYWORDS.iter().map(|s| s.to_string()).collect()
}

/// Resolve the data folder following the priority order documented above
fn resolve_root_folder(cli_arg: Option<&str>, toml_config: &TomlConfig) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return PathBuf::from(path);
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(ENV_ROOT_FOLDER) {
        if !path.trim().is_empty() {
            return PathBuf::from(path);
        }
    }

    // Priority 3: TOML config file
    if let Some(path) = &toml_config.root_folder {
        return PathBuf::from(path);
    }

    // Priority 4: OS-dependent compiled default
    default_root_folder()
}

/// Read the TOML config file if one exists; malformed files are ignored
/// with a warning rather than aborting startup.
fn load_toml_config() -> TomlConfig {
    let Some(path) = config_file_path() else {
        return TomlConfig::default();
    };
    let Ok(content) = std::fs::read_to_string(&path) else {
        return TomlConfig::default();
    };
    match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            warn!("Ignoring malformed config file {}: {}", path.display(), e);
            TomlConfig::default()
        }
    }
}

/// Locate the config file for the platform, if present
fn config_file_path() -> Option<PathBuf> {
    let user_config = dirs::config_dir().map(|d| d.join("spicerack").join("config.toml"));
    if let Some(path) = user_config {
        if path.exists() {
            return Some(path);
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/spicerack/config.toml");
        if system_config.exists() {
            return Some(system_config);
        }
    }

    None
}

/// OS-dependent default data folder path
fn default_root_folder() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("spicerack"))
        .unwrap_or_else(|| PathBuf::from("./spicerack_data"))
}

fn env_parsed<T: std::str::FromStr>(var: &str) -> Option<T> {
    let raw = std::env::var(var).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring unparseable value in {}: {:?}", var, raw);
            None
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
