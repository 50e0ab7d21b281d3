//! # Cutbox Settings
//!
//! Measure parsing, layered settings resolution and TOML project files.

pub mod error;
pub mod measure;
pub mod project;
pub mod settings;

pub use error::{ConfigError, SettingsError, SettingsResult};
pub use measure::{parse_measure, Measure};
pub use project::{overrides_table, parse_override, Project, Section, DESIGN_KEY};
pub use settings::{Settings, SettingsBuilder, MAX_COUNT, RESOLUTION_KEY, UNIT_KEY};
