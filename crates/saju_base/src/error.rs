//! Error types for stem/branch parsing and chart computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use saju_time::CalendarError;

/// Errors from sexagenary symbol handling and pillar derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SajuError {
    /// Text is not one of the 10 heavenly stems (hanja or hangul).
    UnknownStem(String),
    /// Text is not one of the 12 earthly branches (hanja or hangul).
    UnknownBranch(String),
    /// Stem index outside 0..10.
    StemIndexOutOfRange(u8),
    /// Branch index outside 0..12.
    BranchIndexOutOfRange(u8),
    /// Stem and branch differ in polarity, so the pair is not in the 60-cycle.
    MismatchedGanji { stem: u8, branch: u8 },
    /// Calendar input or lookup failure.
    Calendar(CalendarError),
}

impl Display for SajuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownStem(s) => write!(f, "unknown heavenly stem: {s:?}"),
            Self::UnknownBranch(s) => write!(f, "unknown earthly branch: {s:?}"),
            Self::StemIndexOutOfRange(i) => write!(f, "stem index {i} out of range 0..10"),
            Self::BranchIndexOutOfRange(i) => write!(f, "branch index {i} out of range 0..12"),
            Self::MismatchedGanji { stem, branch } => write!(
                f,
                "stem {stem} and branch {branch} differ in polarity and never pair"
            ),
            Self::Calendar(e) => write!(f, "calendar error: {e}"),
        }
    }
}

impl Error for SajuError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Calendar(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CalendarError> for SajuError {
    fn from(e: CalendarError) -> Self {
        Self::Calendar(e)
    }
}
