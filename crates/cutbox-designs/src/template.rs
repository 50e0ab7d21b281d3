//! Drawing templates
//!
//! A template is SVG text with `{{name}}` placeholders. Names without a value
//! are left in place so a broken template is visible in the output.

use crate::error::{DesignError, DesignResult};
use regex::{Captures, Regex};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::warn;

const PLACEHOLDER_PATTERN: &str = r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}";

/// Built-in template used when no `template` setting is given.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/default.svg");

#[derive(Debug, Clone)]
pub struct Template {
    source: String,
    pattern: Regex,
}

impl Template {
    pub fn new(source: impl Into<String>) -> DesignResult<Self> {
        let pattern =
            Regex::new(PLACEHOLDER_PATTERN).map_err(|e| DesignError::Template(e.to_string()))?;
        Ok(Self {
            source: source.into(),
            pattern,
        })
    }

    pub fn builtin() -> DesignResult<Self> {
        Self::new(DEFAULT_TEMPLATE)
    }

    pub fn load_from_file(path: &Path) -> DesignResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            DesignError::Template(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::new(source)
    }

    /// Placeholder names in order of first appearance.
    pub fn placeholders(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for caps in self.pattern.captures_iter(&self.source) {
            let name = &caps[1];
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
        names
    }

    /// Substitute every known placeholder.
    pub fn render(&self, values: &BTreeMap<String, String>) -> String {
        let mut missing: Vec<String> = Vec::new();
        let output = self
            .pattern
            .replace_all(&self.source, |caps: &Captures| match values.get(&caps[1]) {
                Some(value) => value.clone(),
                None => {
                    if !missing.iter().any(|m| m == &caps[1]) {
                        missing.push(caps[1].to_string());
                    }
                    caps[0].to_string()
                }
            })
            .into_owned();
        for name in missing {
            warn!(placeholder = %name, "template placeholder has no value");
        }
        output
    }
}
