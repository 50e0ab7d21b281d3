//! # Cutbox Core
//!
//! Core types shared by every cutbox crate: the fixed-point drawing unit and
//! its conversions, lattice points, and the bounds calculator.

pub mod error;
pub mod geometry;
pub mod units;

pub use error::{CoreError, CoreResult};
pub use geometry::{bounds, Bounds, Point};
pub use units::{
    drawing_units_to_display, Unit, UnitConverter, DEFAULT_RESOLUTION, MAX_DRAWING_UNITS,
    TDPI_SCALE,
};
