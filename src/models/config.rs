use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

use crate::domain::search::CategorySearchQuery;
use crate::domain::types::SortDirection;

/// Configuration options for the catalog admin binary.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    /// Default filter passed to `env_logger` when `RUST_LOG` is unset.
    pub log_level: String,
    pub listing: ListingConfig,
    /// Categories created at startup.
    pub seed: Vec<SeedCategory>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            listing: ListingConfig::default(),
            seed: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from an optional YAML file at `path`, overridden by
    /// `CATALOG__*` environment variables (e.g. `CATALOG__LISTING__PER_PAGE`).
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::new(path, FileFormat::Yaml).required(false))
            .add_source(
                Environment::with_prefix("CATALOG")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

/// Listing defaults used when no query options are given.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ListingConfig {
    pub per_page: usize,
    pub sort: String,
    pub direction: SortDirection,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            per_page: 10,
            sort: "name".to_string(),
            direction: SortDirection::Asc,
        }
    }
}

impl ListingConfig {
    /// First page of an unfiltered listing using these defaults.
    pub fn query(&self) -> CategorySearchQuery {
        CategorySearchQuery::new(0, self.per_page, "", self.sort.clone(), self.direction)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct SeedCategory {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "active")]
    pub is_active: bool,
}

fn active() -> bool {
    true
}
