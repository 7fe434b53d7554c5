//! Configuration for the saju tools.
//!
//! A single TOML file with optional `[logging]`, `[calendar]` and `[output]`
//! sections, plus the two calendar data files it may point at.

pub mod config;
pub mod data;
pub mod error;

pub use config::{CalendarConfig, LoggingConfig, OutputConfig, OutputFormat, SajuConfig};
pub use data::{
    SolarTermOverride, load_lunar_table, load_solar_terms, parse_lunar_table, parse_solar_terms,
};
pub use error::ConfigError;
