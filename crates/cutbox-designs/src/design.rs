//! Common design interface
//!
//! Every variant builds its lattice and cut groups once, in its constructor,
//! and only hands out shared references afterwards.

use crate::cutline::CutGroup;
use crate::error::{DesignError, DesignResult};
use crate::registry::DesignKind;
use cutbox_core::Point;

pub trait BoxDesign {
    fn kind(&self) -> DesignKind;

    /// The point lattice, in drawing units.
    fn corners(&self) -> &[Point];

    /// Cut groups over [`Self::corners`], each drawn as one path.
    fn cut_groups(&self) -> &[CutGroup];

    /// Named dimensions for labels, in drawing units.
    fn dimensions(&self) -> Vec<(&'static str, i64)>;
}

/// Fail unless every measurement is strictly positive.
pub(crate) fn require_positive(values: &[(&str, i64)]) -> DesignResult<()> {
    for (name, value) in values {
        if *value <= 0 {
            return Err(DesignError::invalid(
                name,
                format!("must be positive, got {}", value),
            ));
        }
    }
    Ok(())
}

pub(crate) fn require_non_negative(values: &[(&str, i64)]) -> DesignResult<()> {
    for (name, value) in values {
        if *value < 0 {
            return Err(DesignError::invalid(
                name,
                format!("must not be negative, got {}", value),
            ));
        }
    }
    Ok(())
}

/// Fail with `reason` unless `ok` holds.
pub(crate) fn ensure(ok: bool, name: &str, reason: &str) -> DesignResult<()> {
    if ok {
        Ok(())
    } else {
        Err(DesignError::invalid(name, reason))
    }
}
