use std::env;
use std::path::PathBuf;

use crate::app::SortOrder;

#[derive(Clone, Debug, Default)]
pub struct Config {
    /// JSON file with countries and persons to load at startup
    pub seed_file: Option<PathBuf>,
    /// Field key to filter the listing on
    pub search_by: Option<String>,
    pub search_string: Option<String>,
    /// Field key to sort the listing on
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any variable source; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let sort_order = var("DIRECTORY_SORT_ORDER").and_then(|raw| match raw.parse() {
            Ok(order) => Some(order),
            Err(e) => {
                tracing::warn!("Ignoring DIRECTORY_SORT_ORDER: {}", e);
                None
            }
        });

        Self {
            seed_file: var("DIRECTORY_SEED_FILE").map(PathBuf::from),
            search_by: var("DIRECTORY_SEARCH_BY"),
            search_string: var("DIRECTORY_SEARCH"),
            sort_by: var("DIRECTORY_SORT_BY"),
            sort_order,
        }
    }
}
