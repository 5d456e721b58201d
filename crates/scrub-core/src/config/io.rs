use super::models::AppConfig;
use super::tables::ConfigTables;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load configuration from the given path, falling back to defaults on error.
pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => {
            info!(path = %path.display(), "Loaded base config");
            data
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                "Falling back to default config: {err}"
            );
            return AppConfig::default();
        }
    };

    match parse_config(&contents) {
        Ok(cfg) => {
            debug!("Parsed configuration from disk");
            cfg
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid config TOML: {err:#}");
            AppConfig::default()
        }
    }
}

/// Parse the sectioned TOML layout into a sanitized `AppConfig`.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let tables: ConfigTables =
        toml::from_str(contents).context("config is not valid scrub TOML")?;
    Ok(AppConfig::from(tables).sanitized())
}

pub fn serialize_config(config: &AppConfig) -> Result<String> {
    toml::to_string_pretty(&ConfigTables::from(config)).context("failed to serialize config")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;
    use std::path::PathBuf;

    #[test]
    fn empty_file_yields_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_tables_keep_remaining_defaults() {
        let config = parse_config(
            r#"
            [scrub]
            scroll_range = 4500.0

            [logging]
            log_level = "warn"
            "#,
        )
        .unwrap();
        assert_eq!(config.scroll_range, 4500.0);
        assert_eq!(config.fps, 24.0);
        assert_eq!(config.overlay_removal_delay_ms, 500);
        assert_eq!(config.overlay_id, "loading");
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn serialized_config_parses_back() {
        let original = AppConfig {
            fps: 30.0,
            max_frame: 450,
            overlay_id: "splash".to_string(),
            ..AppConfig::default()
        };
        let text = serialize_config(&original).unwrap();
        assert!(text.contains("[scrub]"));
        assert!(text.contains("[dom]"));
        assert_eq!(parse_config(&text).unwrap(), original);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(parse_config("[scrub]\nfps = \"fast\"").is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = PathBuf::from(format!(
            "/tmp/vinyl-scrub-missing-{}/config.toml",
            std::process::id()
        ));
        assert_eq!(load_config(&path), AppConfig::default());
    }
}
