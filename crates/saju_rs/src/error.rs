//! Unified error type for the convenience layer.

use std::error::Error;
use std::fmt::{Display, Formatter};

use saju_base::SajuError;
use saju_config::ConfigError;
use saju_fortune::FortuneError;
use saju_time::CalendarError;

/// Any error surfaced by `saju_rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SajuRsError {
    Calendar(CalendarError),
    Saju(SajuError),
    Fortune(FortuneError),
    Config(ConfigError),
}

impl Display for SajuRsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Calendar(e) => write!(f, "{e}"),
            Self::Saju(e) => write!(f, "{e}"),
            Self::Fortune(e) => write!(f, "{e}"),
            Self::Config(e) => write!(f, "{e}"),
        }
    }
}

impl Error for SajuRsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Calendar(e) => Some(e),
            Self::Saju(e) => Some(e),
            Self::Fortune(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

impl From<CalendarError> for SajuRsError {
    fn from(e: CalendarError) -> Self {
        Self::Calendar(e)
    }
}

impl From<SajuError> for SajuRsError {
    fn from(e: SajuError) -> Self {
        Self::Saju(e)
    }
}

impl From<FortuneError> for SajuRsError {
    fn from(e: FortuneError) -> Self {
        Self::Fortune(e)
    }
}

impl From<ConfigError> for SajuRsError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
