//! Runtime configuration read from the environment.

use std::path::PathBuf;

/// Directory holding `hs_lookup_expanded.json` and `form_dependencies.json`.
pub const DATA_DIR_ENV: &str = "TARIFF_ADVISOR_DATA_DIR";
/// `tracing` filter directive; `RUST_LOG` is used when this is unset.
pub const LOG_ENV: &str = "TARIFF_ADVISOR_LOG";
const FALLBACK_LOG_ENV: &str = "RUST_LOG";
pub const DEFAULT_LOG_FILTER: &str = "tariff_advisor=info";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// When unset the data files embedded in the binary are used.
    pub data_dir: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let data_dir = non_blank(DATA_DIR_ENV).map(PathBuf::from);
        let log_filter = non_blank(LOG_ENV)
            .or_else(|| non_blank(FALLBACK_LOG_ENV))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            data_dir,
            log_filter,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        assert_eq!(config_from(&[]), AppConfig::default());
    }

    #[test]
    fn reads_data_dir_and_log_filter() {
        let config = config_from(&[(DATA_DIR_ENV, "/srv/tariffs"), (LOG_ENV, "debug")]);
        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/tariffs")));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn falls_back_to_rust_log_and_ignores_blank_values() {
        let config = config_from(&[(DATA_DIR_ENV, "  "), ("RUST_LOG", "warn")]);
        assert_eq!(config.data_dir, None);
        assert_eq!(config.log_filter, "warn");
    }
}
