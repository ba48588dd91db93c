use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_INVENTORY_PATH: &str = "data/inventory.json";
pub const DEFAULT_PLACEHOLDER: &str = "/images/placeholder-property.svg";
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; BuenFuturoBot/1.0; +https://buenfuturo.com.co)";

/// Runtime settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone)]
pub struct Config {
    /// Google Drive id of the inventory spreadsheet export.
    pub drive_file_id: Option<String>,
    pub inventory_path: PathBuf,
    pub placeholder_image: String,
    pub request_timeout: Duration,
    pub request_delay: Duration,
    pub max_images: usize,
    pub user_agent: String,
    pub bind_addr: SocketAddr,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            drive_file_id: None,
            inventory_path: PathBuf::from(DEFAULT_INVENTORY_PATH),
            placeholder_image: DEFAULT_PLACEHOLDER.to_string(),
            request_timeout: Duration::from_millis(15_000),
            request_delay: Duration::from_millis(800),
            max_images: 12,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset or blank keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let millis = |key: &str, default: Duration| -> Result<Duration> {
            match get(key) {
                Some(v) => Ok(Duration::from_millis(
                    v.parse()
                        .with_context(|| format!("{key} must be a whole number of milliseconds"))?,
                )),
                None => Ok(default),
            }
        };

        Ok(Self {
            drive_file_id: get("GOOGLE_DRIVE_CSV_ID"),
            inventory_path: get("INVENTORY_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.inventory_path),
            placeholder_image: get("PLACEHOLDER_IMAGE").unwrap_or(defaults.placeholder_image),
            request_timeout: millis("REQUEST_TIMEOUT_MS", defaults.request_timeout)?,
            request_delay: millis("REQUEST_DELAY_MS", defaults.request_delay)?,
            max_images: match get("MAX_IMAGES") {
                Some(v) => v
                    .parse::<usize>()
                    .ok()
                    .filter(|n| *n > 0)
                    .context("MAX_IMAGES must be a positive number")?,
                None => defaults.max_images,
            },
            user_agent: get("SCRAPER_USER_AGENT").unwrap_or(defaults.user_agent),
            bind_addr: match get("BIND_ADDR") {
                Some(v) => v.parse().context("BIND_ADDR must look like 127.0.0.1:3000")?,
                None => defaults.bind_addr,
            },
        })
    }

    pub fn drive_file_id(&self) -> Result<&str> {
        self.drive_file_id
            .as_deref()
            .context("GOOGLE_DRIVE_CSV_ID must be set (or pass --csv <file>)")
    }
}
