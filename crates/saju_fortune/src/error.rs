//! Error types for derived fortune analyses.

use std::error::Error;
use std::fmt::{Display, Formatter};

use saju_base::SajuError;
use saju_time::CalendarError;

/// Errors from fortune, compatibility, family, and Tojeong computations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FortuneError {
    /// Error from chart computation.
    Saju(SajuError),
    /// Error from calendar input or lunar conversion.
    Calendar(CalendarError),
    /// Family analysis needs at least two members.
    NotEnoughMembers { found: usize },
    /// Lunar day outside 1..=30.
    InvalidLunarDay(u32),
    /// Text is not a known family role.
    UnknownRole(String),
    /// Target year too far from the birth year to give a Korean age.
    TargetYearOutOfRange(i32),
}

impl Display for FortuneError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Saju(e) => write!(f, "saju error: {e}"),
            Self::Calendar(e) => write!(f, "calendar error: {e}"),
            Self::NotEnoughMembers { found } => {
                write!(f, "family analysis needs at least 2 members, got {found}")
            }
            Self::InvalidLunarDay(d) => write!(f, "lunar day {d} out of range 1..=30"),
            Self::UnknownRole(s) => write!(f, "unknown family role: {s:?}"),
            Self::TargetYearOutOfRange(y) => write!(f, "target year {y} out of range"),
        }
    }
}

impl Error for FortuneError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Saju(e) => Some(e),
            Self::Calendar(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SajuError> for FortuneError {
    fn from(e: SajuError) -> Self {
        Self::Saju(e)
    }
}

impl From<CalendarError> for FortuneError {
    fn from(e: CalendarError) -> Self {
        Self::Calendar(e)
    }
}
