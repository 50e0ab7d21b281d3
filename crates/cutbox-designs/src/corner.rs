//! Corner piece
//!
//! Folded corner protector: the top face in the middle, the front face below
//! it and the side face to its left. A tapered glue tab on the front's left
//! edge holds the fold together.
//!
//! The top face uses `length + thickness` by `width + thickness`. The card box
//! applies its allowance per panel instead; the two formulas are kept apart.

use crate::cutline::{CutGroup, Cutline, Rotation};
use crate::design::{ensure, require_non_negative, require_positive, BoxDesign};
use crate::error::DesignResult;
use crate::registry::DesignKind;
use cutbox_core::Point;
use cutbox_settings::Settings;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const LATTICE_LEN: usize = 13;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CornerParameters {
    pub length: i64,
    pub width: i64,
    pub height: i64,
    pub thickness: i64,
    pub corner_gap: i64,
    pub corner_radius: i64,
}

impl CornerParameters {
    pub fn from_settings(settings: &Settings) -> DesignResult<Self> {
        Ok(Self {
            length: settings.measure("length")?,
            width: settings.measure("width")?,
            height: settings.measure("height")?,
            thickness: settings.measure("thickness")?,
            corner_gap: settings.measure_or_mm("corner_gap", 2.0)?,
            corner_radius: settings.measure_or_mm("corner_radius", 2.0)?,
        })
    }

    pub fn face_length(&self) -> i64 {
        self.length + self.thickness
    }

    pub fn face_width(&self) -> i64 {
        self.width + self.thickness
    }

    fn validate(&self) -> DesignResult<()> {
        require_positive(&[
            ("length", self.length),
            ("width", self.width),
            ("height", self.height),
            ("thickness", self.thickness),
        ])?;
        require_non_negative(&[
            ("corner_gap", self.corner_gap),
            ("corner_radius", self.corner_radius),
        ])?;
        ensure(
            self.corner_gap < self.height,
            "corner_gap",
            "leaves no room for the glue tab",
        )?;
        ensure(
            2 * self.corner_radius <= self.height
                && 2 * self.corner_radius <= self.face_width()
                && 2 * self.corner_radius <= self.face_length(),
            "corner_radius",
            "does not fit the faces",
        )
    }
}

pub struct CornerMaker {
    params: CornerParameters,
    corners: Vec<Point>,
    groups: Vec<CutGroup>,
}

impl CornerMaker {
    pub fn new(params: CornerParameters) -> DesignResult<Self> {
        params.validate()?;
        let corners = build_lattice(&params);
        let groups = vec![CutGroup::new("corner", select_cutlines())];
        debug!(points = corners.len(), "built corner piece");
        Ok(Self {
            params,
            corners,
            groups,
        })
    }
}

impl BoxDesign for CornerMaker {
    fn kind(&self) -> DesignKind {
        DesignKind::Corner
    }

    fn corners(&self) -> &[Point] {
        &self.corners
    }

    fn cut_groups(&self) -> &[CutGroup] {
        &self.groups
    }

    fn dimensions(&self) -> Vec<(&'static str, i64)> {
        let p = &self.params;
        vec![
            ("inner_length", p.length),
            ("inner_width", p.width),
            ("inner_height", p.height),
            ("outer_length", p.face_length()),
            ("outer_width", p.face_width()),
            ("outer_height", p.height),
        ]
    }
}

pub fn build_lattice(p: &CornerParameters) -> Vec<Point> {
    let h = p.height;
    let rc = p.corner_radius;
    let g = p.corner_gap;
    let right = h + p.face_length();
    let fold = p.face_width();
    let bottom = fold + h;
    let inset = (h - g) / 4;

    vec![
        Point::new(0, rc),
        Point::new(rc, 0),
        Point::new(right - rc, 0),
        Point::new(right, rc),
        Point::new(right, bottom - rc),
        Point::new(right - rc, bottom),
        Point::new(h, bottom),
        Point::new(g, bottom - inset),
        Point::new(g, fold + g + inset),
        Point::new(h, fold + g),
        Point::new(h, fold),
        Point::new(rc, fold),
        Point::new(0, fold - rc),
    ]
}

pub fn select_cutlines() -> Vec<Cutline> {
    let cw = Rotation::Clockwise;
    vec![
        Cutline::line(&[0]),
        Cutline::continue_quarter(0, 1, cw),
        Cutline::continue_line(&[1, 2]),
        Cutline::continue_quarter(2, 3, cw),
        Cutline::continue_line(&[3, 4]),
        Cutline::continue_quarter(4, 5, cw),
        Cutline::continue_line(&[5, 6, 7, 8, 9, 10, 11]),
        Cutline::continue_quarter(11, 12, cw),
        Cutline::continue_line(&[12, 0]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render_path_data;

    const MM: i64 = 28346;

    fn params() -> CornerParameters {
        CornerParameters {
            length: 30 * MM,
            width: 30 * MM,
            height: 15 * MM,
            thickness: MM,
            corner_gap: 2 * MM,
            corner_radius: 2 * MM,
        }
    }

    #[test]
    fn test_lattice() {
        let p = params();
        let corners = build_lattice(&p);
        assert_eq!(corners.len(), LATTICE_LEN);
        // top face spans length + thickness right of the side face
        assert_eq!(corners[3].x - p.height, 31 * MM);
        // glue tab keeps the side gap to the sheet edge
        assert_eq!(corners[7].x, p.corner_gap);
    }

    #[test]
    fn test_zero_radius_yields_square_corners() {
        let mut p = params();
        p.corner_radius = 0;
        let maker = CornerMaker::new(p).unwrap();
        let data = render_path_data(&maker.cut_groups()[0], maker.corners()).unwrap();
        assert!(!data.contains('A'));
        assert!(data.starts_with('M'));
    }

    #[test]
    fn test_gap_must_leave_room_for_tab() {
        let mut p = params();
        p.corner_gap = p.height;
        assert!(CornerMaker::new(p).is_err());
    }
}
