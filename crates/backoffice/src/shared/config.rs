use serde::Deserialize;
use std::path::Path;

use super::list::InsertPosition;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PaginationConfig {
    pub default_page_size: usize,
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct StoreConfig {
    #[serde(default)]
    pub insert_position: InsertPosition,
}

fn default_page_size_options() -> Vec<usize> {
    vec![10, 25, 50, 100]
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[pagination]
default_page_size = 10
page_size_options = [10, 25, 50, 100]

[store]
insert_position = "front"
"#;

impl Default for Config {
    fn default() -> Self {
        Self {
            pagination: PaginationConfig {
                default_page_size: 10,
                page_size_options: default_page_size_options(),
            },
            store: StoreConfig::default(),
        }
    }
}

impl Config {
    /// Размер страницы не меньше 1
    pub fn page_size(&self) -> usize {
        self.pagination.default_page_size.max(1)
    }
}

/// Load configuration from a dashboard.toml file
///
/// Search order:
/// 1. The given path, if it exists
/// 2. Falls back to embedded default config
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(config_path) = path {
        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(config_path)?;
            return parse_config(&contents);
        }
        tracing::warn!("dashboard config not found at: {}", config_path.display());
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.pagination.default_page_size == 0 {
        anyhow::bail!("pagination.default_page_size must be at least 1");
    }
    Ok(config)
}
