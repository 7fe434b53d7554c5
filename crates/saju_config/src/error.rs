//! Error type for configuration loading.

use std::error::Error;
use std::fmt::{Display, Formatter};

use saju_time::CalendarError;

/// Errors from reading or validating configuration and data files.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// File could not be read.
    Io(String),
    /// TOML did not match the expected schema.
    Parse(String),
    /// Parsed, but a value is unusable.
    Invalid(&'static str),
    /// A data file was rejected by the calendar layer.
    Calendar(CalendarError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "config I/O error: {msg}"),
            Self::Parse(msg) => write!(f, "config parse error: {msg}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
            Self::Calendar(e) => write!(f, "calendar data error: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Calendar(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CalendarError> for ConfigError {
    fn from(e: CalendarError) -> Self {
        Self::Calendar(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e.to_string())
    }
}
