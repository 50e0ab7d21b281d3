//! Measure parsing
//!
//! Splits strings such as `"60mm"`, `"2.5 mil"` or `"40"` into a number and
//! an optional unit. A missing unit means "the active unit of the section".

use cutbox_core::{CoreError, Unit};

/// A physical quantity as written by the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measure {
    pub value: f64,
    pub unit: Option<Unit>,
}

impl Measure {
    pub fn new(value: f64, unit: Option<Unit>) -> Self {
        Self { value, unit }
    }
}

/// Parse a measure string
///
/// * `input` - number with an optional trailing unit (`mm`, `mil`)
pub fn parse_measure(input: &str) -> Result<Measure, CoreError> {
    let input = input.trim();
    let number = input.trim_end_matches(|c: char| c.is_ascii_alphabetic());
    let suffix = &input[number.len()..];
    let number = number.trim();

    let value = number
        .parse::<f64>()
        .map_err(|e| CoreError::InvalidNumber {
            input: input.to_string(),
            reason: e.to_string(),
        })?;
    if !value.is_finite() {
        return Err(CoreError::InvalidNumber {
            input: input.to_string(),
            reason: "value must be finite".to_string(),
        });
    }

    let unit = if suffix.is_empty() {
        None
    } else {
        Some(suffix.parse::<Unit>()?)
    };

    Ok(Measure::new(value, unit))
}
