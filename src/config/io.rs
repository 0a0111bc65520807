use super::models::AppConfig;
use super::tables::ConfigTables;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

const TABLE_KEYS: [&str; 3] = ["appearance", "window", "logging"];

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

/// Parse either the sectioned layout (`[appearance]`, `[window]`,
/// `[logging]`) or the flat legacy layout.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let value: toml::Table = toml::from_str(contents).context("config is not valid TOML")?;
    if TABLE_KEYS.iter().any(|key| value.contains_key(*key)) {
        let tables: ConfigTables =
            toml::from_str(contents).context("failed to parse sectioned config")?;
        Ok(tables.into())
    } else {
        toml::from_str(contents).context("failed to parse flat config")
    }
}

pub fn serialize_config(config: &AppConfig) -> Result<String> {
    toml::to_string_pretty(&ConfigTables::from(config)).context("failed to serialize config")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LogLevel, ThemeMode};

    #[test]
    fn parses_sectioned_config() {
        let cfg = parse_config(
            r#"
            [appearance]
            theme = "day"
            particles = false

            [window]
            width = 900.0
            height = 700.0

            [logging]
            log_level = "warn"
            "#,
        )
        .expect("sectioned config parses");
        assert_eq!(cfg.theme, ThemeMode::Day);
        assert!(!cfg.particles);
        assert!(cfg.reveal_animations);
        assert_eq!(cfg.window_width, 900.0);
        assert_eq!(cfg.window_height, 700.0);
        assert_eq!(cfg.window_pos_x, None);
        assert_eq!(cfg.log_level, LogLevel::Warn);
    }

    #[test]
    fn parses_flat_legacy_config() {
        let cfg = parse_config("theme = \"night\"\nlog_level = \"info\"\nwindow_width = 1024.0\n")
            .expect("flat config parses");
        assert_eq!(cfg.theme, ThemeMode::Night);
        assert_eq!(cfg.log_level, LogLevel::Info);
        assert_eq!(cfg.window_width, 1024.0);
        assert_eq!(cfg.window_height, 800.0);
    }

    #[test]
    fn empty_input_yields_defaults() {
        assert_eq!(parse_config("").expect("empty parses"), AppConfig::default());
    }

    #[test]
    fn invalid_values_are_errors() {
        assert!(parse_config("[logging]\nlog_level = \"loud\"\n").is_err());
        assert!(parse_config("not toml at all = = =").is_err());
    }

    #[test]
    fn serialized_config_parses_back() {
        let mut cfg = AppConfig::default();
        cfg.theme = ThemeMode::Day;
        cfg.window_pos_x = Some(10.0);
        cfg.window_pos_y = Some(20.0);
        let text = serialize_config(&cfg).expect("serializes");
        assert!(text.contains("[appearance]"));
        assert_eq!(parse_config(&text).expect("parses back"), cfg);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg = load_config(Path::new("/nonexistent/chipiq/config.toml"));
        assert_eq!(cfg, AppConfig::default());
    }
}
