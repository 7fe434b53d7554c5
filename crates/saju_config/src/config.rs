//! The `SajuConfig` file schema.

use std::path::{Path, PathBuf};

use saju_time::{SolarTermTable, TableLunarCalendar};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::data::{load_lunar_table, load_solar_terms};
use crate::error::ConfigError;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SajuConfig {
    pub logging: LoggingConfig,
    pub calendar: CalendarConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `info` or `saju_base=debug`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Optional calendar data files. Relative paths resolve against the config
/// file's directory when loaded with [`SajuConfig::load`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalendarConfig {
    pub solar_terms_path: Option<PathBuf>,
    pub lunar_table_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

impl SajuConfig {
    /// Parse and validate a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;
        let mut config = Self::from_toml_str(&text)?;
        if let Some(dir) = path.parent() {
            config.calendar.resolve_relative_to(dir);
        }
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Invalid("logging.level must not be empty"));
        }
        let empty = |p: &Option<PathBuf>| p.as_ref().is_some_and(|p| p.as_os_str().is_empty());
        if empty(&self.calendar.solar_terms_path) {
            return Err(ConfigError::Invalid("calendar.solar_terms_path must not be empty"));
        }
        if empty(&self.calendar.lunar_table_path) {
            return Err(ConfigError::Invalid("calendar.lunar_table_path must not be empty"));
        }
        Ok(())
    }

    /// Built-in solar-term table plus any configured overrides.
    pub fn solar_term_table(&self) -> Result<SolarTermTable, ConfigError> {
        match &self.calendar.solar_terms_path {
            Some(path) => load_solar_terms(path),
            None => Ok(SolarTermTable::new()),
        }
    }

    /// The configured lunar converter, if any.
    pub fn lunar_calendar(&self) -> Result<Option<TableLunarCalendar>, ConfigError> {
        match &self.calendar.lunar_table_path {
            Some(path) => load_lunar_table(path).map(Some),
            None => {
                debug!("no lunar table configured");
                Ok(None)
            }
        }
    }
}

impl CalendarConfig {
    fn resolve_relative_to(&mut self, dir: &Path) {
        for p in [&mut self.solar_terms_path, &mut self.lunar_table_path]
            .into_iter()
            .flatten()
        {
            if p.is_relative() {
                *p = dir.join(&*p);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let c = SajuConfig::from_toml_str("").unwrap();
        assert_eq!(c, SajuConfig::default());
        assert_eq!(c.logging.level, "warn");
        assert_eq!(c.output.format, OutputFormat::Text);
        assert!(c.lunar_calendar().unwrap().is_none());
    }

    #[test]
    fn full_file() {
        let c = SajuConfig::from_toml_str(
            r#"
            [logging]
            level = "saju_base=debug"

            [calendar]
            solar_terms_path = "terms.toml"
            lunar_table_path = "/data/lunar.toml"

            [output]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(c.logging.level, "saju_base=debug");
        assert_eq!(c.output.format, OutputFormat::Json);
        assert_eq!(
            c.calendar.solar_terms_path.as_deref(),
            Some(Path::new("terms.toml"))
        );
    }

    #[test]
    fn rejects_unknown_format() {
        let err = SajuConfig::from_toml_str("[output]\nformat = \"yaml\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_unknown_field() {
        let err = SajuConfig::from_toml_str("[logging]\nlevle = \"info\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_empty_values() {
        assert_eq!(
            SajuConfig::from_toml_str("[logging]\nlevel = \" \""),
            Err(ConfigError::Invalid("logging.level must not be empty"))
        );
        assert_eq!(
            SajuConfig::from_toml_str("[calendar]\nlunar_table_path = \"\""),
            Err(ConfigError::Invalid("calendar.lunar_table_path must not be empty"))
        );
    }

    #[test]
    fn relative_paths_follow_config_dir() {
        let mut cal = CalendarConfig {
            solar_terms_path: Some(PathBuf::from("terms.toml")),
            lunar_table_path: Some(PathBuf::from("/abs/lunar.toml")),
        };
        cal.resolve_relative_to(Path::new("/etc/saju"));
        assert_eq!(
            cal.solar_terms_path.as_deref(),
            Some(Path::new("/etc/saju/terms.toml"))
        );
        assert_eq!(
            cal.lunar_table_path.as_deref(),
            Some(Path::new("/abs/lunar.toml"))
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = SajuConfig::load("/nonexistent/saju.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
