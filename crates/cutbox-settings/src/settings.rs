//! Layered settings resolution
//!
//! A design instance is configured from several layers that are merged in
//! order, later layers winning: design defaults, project-wide keys, the
//! design's own section, and finally caller overrides. The merge happens once
//! in [`SettingsBuilder::build`]; the resulting [`Settings`] is read-only.

use crate::error::{SettingsError, SettingsResult};
use crate::measure::parse_measure;
use cutbox_core::{Unit, UnitConverter, DEFAULT_RESOLUTION};
use std::collections::BTreeMap;
use toml::{Table, Value};
use tracing::debug;

/// Key selecting the physical unit of plain numbers.
pub const UNIT_KEY: &str = "unit";
/// Key selecting the output resolution in dpi.
pub const RESOLUTION_KEY: &str = "resolution";

#[derive(Debug, Clone)]
struct Entry {
    value: Value,
    layer: String,
}

/// Largest accepted count; repeat counts size the lattice directly.
pub const MAX_COUNT: u32 = 1_000;

/// Collects layers before freezing them into [`Settings`].
#[derive(Debug, Default)]
pub struct SettingsBuilder {
    layers: Vec<(String, Table)>,
}

impl SettingsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a layer; its keys override every earlier layer.
    pub fn layer(mut self, name: impl Into<String>, table: Table) -> Self {
        self.layers.push((name.into(), table));
        self
    }

    pub fn build(self) -> SettingsResult<Settings> {
        let mut entries: BTreeMap<String, Entry> = BTreeMap::new();
        for (layer, table) in self.layers {
            for (key, value) in table {
                // nested tables never reach a design; they are sections of a project
                if value.is_table() {
                    continue;
                }
                entries.insert(
                    key,
                    Entry {
                        value,
                        layer: layer.clone(),
                    },
                );
            }
        }

        let unit = match entries.get(UNIT_KEY) {
            Some(entry) => value_as_text(UNIT_KEY, &entry.value)?.parse::<Unit>()?,
            None => Unit::default(),
        };
        let resolution = match entries.get(RESOLUTION_KEY) {
            Some(entry) => value_as_count(RESOLUTION_KEY, &entry.value)?,
            None => DEFAULT_RESOLUTION,
        };
        let converter = UnitConverter::new(unit, resolution)?;
        debug!(keys = entries.len(), %unit, resolution, "resolved settings");

        Ok(Settings { entries, converter })
    }
}

/// Immutable, fully merged settings of one design instance.
#[derive(Debug, Clone)]
pub struct Settings {
    entries: BTreeMap<String, Entry>,
    converter: UnitConverter,
}

impl Settings {
    /// Converter for the active unit and resolution.
    pub fn converter(&self) -> UnitConverter {
        self.converter
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Name of the layer that supplied `key`.
    pub fn origin(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|e| e.layer.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    fn value(&self, key: &str) -> Option<&Value> {
        self.entries.get(key).map(|e| &e.value)
    }

    /// Required measure converted to drawing units.
    pub fn measure(&self, key: &str) -> SettingsResult<i64> {
        self.optional_measure(key)?
            .ok_or_else(|| SettingsError::MissingKey(key.to_string()))
    }

    /// Measure converted to drawing units, `None` when no layer sets it.
    pub fn optional_measure(&self, key: &str) -> SettingsResult<Option<i64>> {
        let Some(value) = self.value(key) else {
            return Ok(None);
        };
        let (number, unit) = match value {
            Value::Integer(i) => (*i as f64, None),
            Value::Float(f) => (*f, None),
            Value::String(s) => {
                let m = parse_measure(s)?;
                (m.value, m.unit)
            }
            other => {
                return Err(SettingsError::InvalidSetting {
                    key: key.to_string(),
                    reason: format!("expected a measure, found {}", other.type_str()),
                })
            }
        };
        let converter = match unit {
            Some(u) if u != self.converter.unit() => {
                UnitConverter::new(u, self.converter.resolution())?
            }
            _ => self.converter,
        };
        converter
            .checked_drawing_units(number)
            .map(Some)
            .ok_or_else(|| SettingsError::InvalidSetting {
                key: key.to_string(),
                reason: format!("{} is not a usable measure", number),
            })
    }

    /// Measure with a fallback given in millimeters, whatever the active unit.
    pub fn measure_or_mm(&self, key: &str, millimeters: f64) -> SettingsResult<i64> {
        match self.optional_measure(key)? {
            Some(value) => Ok(value),
            None => Ok(UnitConverter::new(Unit::Millimeter, self.converter.resolution())?
                .to_drawing_units(millimeters)),
        }
    }

    /// Boolean switch; absent means `false`.
    pub fn flag(&self, key: &str) -> SettingsResult<bool> {
        let Some(value) = self.value(key) else {
            return Ok(false);
        };
        match value {
            Value::Boolean(b) => Ok(*b),
            Value::Integer(0) => Ok(false),
            Value::Integer(1) => Ok(true),
            Value::String(s) => match s.trim().to_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => Ok(true),
                "false" | "no" | "off" | "0" | "" => Ok(false),
                _ => Err(SettingsError::InvalidSetting {
                    key: key.to_string(),
                    reason: format!("'{}' is not a boolean", s),
                }),
            },
            other => Err(SettingsError::InvalidSetting {
                key: key.to_string(),
                reason: format!("expected a boolean, found {}", other.type_str()),
            }),
        }
    }

    /// Non-negative integer.
    pub fn count(&self, key: &str) -> SettingsResult<u32> {
        match self.value(key) {
            Some(value) => value_as_count(key, value),
            None => Err(SettingsError::MissingKey(key.to_string())),
        }
    }

    /// Free text, `None` when absent.
    pub fn text(&self, key: &str) -> SettingsResult<Option<String>> {
        self.value(key)
            .map(|v| value_as_text(key, v))
            .transpose()
    }
}

fn value_as_text(key: &str, value: &Value) -> SettingsResult<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Integer(_) | Value::Float(_) | Value::Boolean(_) => Ok(value.to_string()),
        other => Err(SettingsError::InvalidSetting {
            key: key.to_string(),
            reason: format!("expected text, found {}", other.type_str()),
        }),
    }
}

fn value_as_count(key: &str, value: &Value) -> SettingsResult<u32> {
    let invalid = |reason: String| SettingsError::InvalidSetting {
        key: key.to_string(),
        reason,
    };
    let count = match value {
        Value::Integer(i) => {
            u32::try_from(*i).map_err(|_| invalid(format!("{} is out of range", i)))?
        }
        Value::String(s) => s
            .trim()
            .parse::<u32>()
            .map_err(|e| invalid(format!("'{}': {}", s, e)))?,
        other => {
            return Err(invalid(format!(
                "expected a whole number, found {}",
                other.type_str()
            )))
        }
    };
    if count > MAX_COUNT {
        return Err(invalid(format!("{} exceeds the limit of {}", count, MAX_COUNT)));
    }
    Ok(count)
}
