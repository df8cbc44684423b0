use serde::Deserialize;
use std::path::PathBuf;

// =============================================================================
// Environment variables
// =============================================================================

/// Log filter directives, same syntax as `RUST_LOG`
pub const LOG_FILTER_ENV: &str = "VERSION_INFO_LOG";

/// Log output format: "json" or "compact"
pub const LOG_FORMAT_ENV: &str = "VERSION_INFO_LOG_FORMAT";

/// Default log filter
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Logging configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Filter directives, e.g. "info" or "version_info=debug"
    pub filter: String,
    pub format: LogFormat,
    /// Write to this file instead of stderr
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            format: LogFormat::default(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl LoggingConfig {
    /// Configuration from `VERSION_INFO_LOG` and `VERSION_INFO_LOG_FORMAT`
    pub fn from_env() -> Self {
        from_env_values(
            std::env::var(LOG_FILTER_ENV).ok(),
            std::env::var(LOG_FORMAT_ENV).ok(),
        )
    }
}

fn from_env_values(filter: Option<String>, format: Option<String>) -> LoggingConfig {
    let format = match format.as_deref() {
        Some("json") => LogFormat::Json,
        _ => LogFormat::Compact,
    };

    LoggingConfig {
        filter: filter.unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        format,
        file: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn logging_config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<LoggingConfig>(json!({
            "format": "json"
        }))
        .unwrap();

        assert_eq!(
            result,
            LoggingConfig {
                filter: "info".to_string(),
                format: LogFormat::Json,
                file: None,
            }
        );
    }

    #[test]
    fn logging_config_from_full_object_parses_all_fields() {
        let result = serde_json::from_value::<LoggingConfig>(json!({
            "filter": "version_info=debug",
            "format": "compact",
            "file": "/var/log/build-info.log"
        }))
        .unwrap();

        assert_eq!(
            result,
            LoggingConfig {
                filter: "version_info=debug".to_string(),
                format: LogFormat::Compact,
                file: Some(PathBuf::from("/var/log/build-info.log")),
            }
        );
    }

    #[test]
    fn logging_config_rejects_unknown_format() {
        let result = serde_json::from_value::<LoggingConfig>(json!({ "format": "xml" }));

        assert!(result.is_err());
    }

    #[test]
    fn from_env_values_uses_given_values() {
        let config = from_env_values(Some("warn".to_string()), Some("json".to_string()));

        assert_eq!(config.filter, "warn");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn from_env_values_falls_back_to_defaults() {
        let config = from_env_values(None, Some("yaml".to_string()));

        assert_eq!(config, LoggingConfig::default());
    }
}
