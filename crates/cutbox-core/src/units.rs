//! Unit conversion utilities
//!
//! Converts physical measurements (millimeters or mil) into the fixed-point
//! drawing unit used by every lattice, and back again for labels.
//!
//! One drawing unit (tdpi) is a ten-thousandth of a drawing dot, where the
//! dot size is set by the configured resolution (72 dpi by default, so a
//! dot equals a typographic point). All geometry works on `i64` tdpi values;
//! floating point only appears at the two edges of the pipeline.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Drawing units per displayed drawing dot.
pub const TDPI_SCALE: i64 = 10_000;

/// Default output resolution in dots per inch.
pub const DEFAULT_RESOLUTION: u32 = 72;

/// Largest magnitude a single measure may have in drawing units. Lattices add
/// and scale a few dozen measures, which stays far inside `i64` below this.
pub const MAX_DRAWING_UNITS: i64 = i64::MAX >> 20;

const MM_PER_INCH: f64 = 25.4;

/// Physical unit of a measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Millimeters
    #[default]
    Millimeter,
    /// Inch-based legacy unit; one unit spans `resolution` drawing dots
    Mil,
}

impl Unit {
    /// Short label used in measure strings and footers
    pub fn label(&self) -> &'static str {
        match self {
            Self::Millimeter => "mm",
            Self::Mil => "mil",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Unit {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mm" | "millimeter" | "millimeters" => Ok(Self::Millimeter),
            "mil" | "mils" => Ok(Self::Mil),
            other => Err(CoreError::UnknownUnit(other.to_string())),
        }
    }
}

/// Converts between one physical unit and drawing units at a fixed resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitConverter {
    unit: Unit,
    resolution: u32,
}

impl Default for UnitConverter {
    fn default() -> Self {
        Self {
            unit: Unit::Millimeter,
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

impl UnitConverter {
    pub fn new(unit: Unit, resolution: u32) -> CoreResult<Self> {
        if resolution == 0 {
            return Err(CoreError::InvalidResolution(resolution));
        }
        Ok(Self { unit, resolution })
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Drawing units per one physical unit.
    pub fn factor(&self) -> f64 {
        let per_inch = self.resolution as f64 * TDPI_SCALE as f64;
        match self.unit {
            Unit::Millimeter => per_inch / MM_PER_INCH,
            Unit::Mil => per_inch,
        }
    }

    /// Convert a physical value to drawing units, truncating toward zero.
    pub fn to_drawing_units(&self, value: f64) -> i64 {
        (value * self.factor()).trunc() as i64
    }

    /// Like [`Self::to_drawing_units`], but `None` for values that are not
    /// finite or whose magnitude exceeds [`MAX_DRAWING_UNITS`].
    pub fn checked_drawing_units(&self, value: f64) -> Option<i64> {
        let scaled = (value * self.factor()).trunc();
        if scaled.is_finite() && scaled.abs() <= MAX_DRAWING_UNITS as f64 {
            Some(scaled as i64)
        } else {
            None
        }
    }

    /// Convert drawing units back to the physical unit, rounded to 2 decimals.
    pub fn display_to_physical(&self, value: i64) -> f64 {
        round2(value as f64 / self.factor())
    }

    /// Same as [`Self::display_to_physical`] but already formatted for labels.
    pub fn format_physical(&self, value: i64) -> String {
        format!("{:.2}", self.display_to_physical(value))
    }
}

/// Format drawing units as a fixed 4-decimal string (5 -> "0.0005").
pub fn drawing_units_to_display(value: i64) -> String {
    let sign = if value < 0 { "-" } else { "" };
    let magnitude = value.unsigned_abs();
    let scale = TDPI_SCALE as u64;
    format!("{}{}.{:04}", sign, magnitude / scale, magnitude % scale)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
