//! Project files
//!
//! A project is a TOML document. Top-level scalar keys apply to every design
//! in the project; each table is one design section, processed in file order.
//!
//! ```toml
//! unit = "mm"
//! thickness = 1.5
//!
//! [tray]
//! design = "matchbox"
//! length = 60
//! ```

use crate::error::{ConfigError, SettingsError, SettingsResult};
use crate::settings::{Settings, SettingsBuilder};
use std::path::Path;
use toml::{Table, Value};
use tracing::debug;

/// Key naming the design variant of a section.
pub const DESIGN_KEY: &str = "design";

/// One design section of a project.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub name: String,
    pub values: Table,
}

impl Section {
    /// Design tag of the section, falling back to the section name.
    pub fn design(&self) -> &str {
        self.values
            .get(DESIGN_KEY)
            .and_then(Value::as_str)
            .unwrap_or(&self.name)
    }
}

/// A parsed project file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Project {
    globals: Table,
    sections: Vec<Section>,
}

impl Project {
    /// Load a project from a `.toml` file.
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        if !path.extension().is_some_and(|ext| ext == "toml") {
            return Err(ConfigError::UnsupportedFormat(path.display().to_string()).into());
        }
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;
        let project = Self::from_toml_str(&content)?;
        debug!(
            path = %path.display(),
            sections = project.sections.len(),
            "loaded project"
        );
        Ok(project)
    }

    pub fn from_toml_str(content: &str) -> SettingsResult<Self> {
        let document: Table = toml::from_str(content)?;
        let mut project = Project::default();
        for (key, value) in document {
            match value {
                Value::Table(values) => project.sections.push(Section { name: key, values }),
                other => {
                    project.globals.insert(key, other);
                }
            }
        }
        Ok(project)
    }

    pub fn globals(&self) -> &Table {
        &self.globals
    }

    /// Sections in file order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, name: &str) -> SettingsResult<&Section> {
        self.sections
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| ConfigError::UnknownSection(name.to_string()).into())
    }

    /// Resolve the settings of one section: design defaults, project keys,
    /// section keys, then overrides.
    pub fn settings_for(
        &self,
        section: &Section,
        defaults: Table,
        overrides: Table,
    ) -> SettingsResult<Settings> {
        SettingsBuilder::new()
            .layer("defaults", defaults)
            .layer("project", self.globals.clone())
            .layer(format!("section:{}", section.name), section.values.clone())
            .layer("overrides", overrides)
            .build()
    }
}

/// Split a `KEY=VALUE` override. The value is read as a TOML value when it
/// parses as one and as a plain string otherwise, so `length=60`,
/// `separated=true` and `width=40mm` all work unquoted.
pub fn parse_override(raw: &str) -> Result<(String, Value), ConfigError> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| ConfigError::MalformedOverride(raw.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(ConfigError::MalformedOverride(raw.to_string()));
    }
    let value = value.trim();
    let parsed = format!("v = {}", value)
        .parse::<Table>()
        .ok()
        .and_then(|mut t| t.remove("v"))
        .filter(|v| !v.is_table())
        .unwrap_or_else(|| Value::String(value.to_string()));
    Ok((key.to_string(), parsed))
}

/// Collect overrides into one layer; later duplicates win.
pub fn overrides_table<S: AsRef<str>>(raw: &[S]) -> Result<Table, ConfigError> {
    let mut table = Table::new();
    for item in raw {
        let (key, value) = parse_override(item.as_ref())?;
        table.insert(key, value);
    }
    Ok(table)
}
