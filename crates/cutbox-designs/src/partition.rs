//! Partition insert
//!
//! Divider strips for a box with `columns` compartments along its length and
//! `rows` across its width. Long strips run along the length and are slotted
//! from the top, cross strips run along the width and are slotted from the
//! bottom, so each pair interlocks at half height.

use crate::cutline::{CutGroup, Cutline};
use crate::design::{ensure, require_non_negative, require_positive, BoxDesign};
use crate::error::{DesignError, DesignResult};
use crate::registry::DesignKind;
use cutbox_core::Point;
use cutbox_settings::Settings;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartitionParameters {
    pub length: i64,
    pub width: i64,
    pub height: i64,
    pub thickness: i64,
    pub rows: u32,
    pub columns: u32,
    pub slot_width: i64,
    pub side_gap: i64,
    pub vertical_separation: i64,
}

impl PartitionParameters {
    pub fn from_settings(settings: &Settings) -> DesignResult<Self> {
        let thickness = settings.measure("thickness")?;
        Ok(Self {
            length: settings.measure("length")?,
            width: settings.measure("width")?,
            height: settings.measure("height")?,
            thickness,
            rows: settings.count("rows")?,
            columns: settings.count("columns")?,
            slot_width: settings.optional_measure("slot_width")?.unwrap_or(thickness),
            side_gap: settings.measure_or_mm("side_gap", 0.5)?,
            vertical_separation: settings.measure_or_mm("vertical_separation", 5.0)?,
        })
    }

    /// Inner size of one compartment along a side of `span` split `count` ways.
    fn compartment(&self, span: i64, count: u32) -> i64 {
        let n = i64::from(count);
        (span - (n - 1) * self.thickness) / n
    }

    pub fn compartment_length(&self) -> i64 {
        self.compartment(self.length, self.columns)
    }

    pub fn compartment_width(&self) -> i64 {
        self.compartment(self.width, self.rows)
    }

    /// Divider centre lines along a side, measured from the inner wall.
    fn divider_centres(&self, span: i64, count: u32) -> Vec<i64> {
        let c = self.compartment(span, count);
        let t = self.thickness;
        (1..i64::from(count))
            .map(|i| i * c + (i - 1) * t + t / 2)
            .collect()
    }

    fn validate(&self) -> DesignResult<()> {
        require_positive(&[
            ("length", self.length),
            ("width", self.width),
            ("height", self.height),
            ("thickness", self.thickness),
            ("slot_width", self.slot_width),
            ("rows", i64::from(self.rows)),
            ("columns", i64::from(self.columns)),
        ])?;
        require_non_negative(&[
            ("side_gap", self.side_gap),
            ("vertical_separation", self.vertical_separation),
        ])?;
        if u64::from(self.rows) * u64::from(self.columns) < 2 {
            return Err(DesignError::Inconsistent(
                "a partition needs at least two compartments".to_string(),
            ));
        }
        for (name, span, count) in [
            ("length", self.length, self.columns),
            ("width", self.width, self.rows),
        ] {
            let c = self.compartment(span, count);
            ensure(
                c > self.slot_width,
                name,
                "compartments are narrower than a slot",
            )?;
            let first_slot = self.thickness / 2 + c - self.slot_width / 2 - self.side_gap;
            ensure(
                first_slot > 0,
                "side_gap",
                "cuts into the first slot",
            )?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlotSide {
    Top,
    Bottom,
}

pub struct PartitionMaker {
    params: PartitionParameters,
    corners: Vec<Point>,
    groups: Vec<CutGroup>,
}

impl PartitionMaker {
    pub fn new(params: PartitionParameters) -> DesignResult<Self> {
        params.validate()?;
        let (corners, groups) = build(&params);
        debug!(
            strips = groups.len(),
            points = corners.len(),
            "built partition"
        );
        Ok(Self {
            params,
            corners,
            groups,
        })
    }
}

impl BoxDesign for PartitionMaker {
    fn kind(&self) -> DesignKind {
        DesignKind::Partition
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
            ("compartment_length", p.compartment_length()),
            ("compartment_width", p.compartment_width()),
        ]
    }
}

/// Lattice and one cut group per strip, long strips first.
pub fn build(p: &PartitionParameters) -> (Vec<Point>, Vec<CutGroup>) {
    let mut corners = Vec::new();
    let mut groups = Vec::new();
    let pitch = p.height + p.vertical_separation;

    let long_slots = p.divider_centres(p.length, p.columns);
    let cross_slots = p.divider_centres(p.width, p.rows);
    let long_strips = (1..p.rows).map(|i| (format!("long-{}", i), p.length, &long_slots, SlotSide::Top));
    let cross_strips =
        (1..p.columns).map(|i| (format!("cross-{}", i), p.width, &cross_slots, SlotSide::Bottom));

    for (k, (name, span, slots, side)) in long_strips.chain(cross_strips).enumerate() {
        let top = k as i64 * pitch;
        let points = strip_outline(p, span, slots, side, top);
        let start = corners.len();
        corners.extend(points);
        let mut indices: Vec<usize> = (start..corners.len()).collect();
        indices.push(start);
        groups.push(CutGroup::new(name, vec![Cutline::line(&indices)]));
    }
    (corners, groups)
}

/// Clockwise outline of one strip whose top edge sits at `top`.
fn strip_outline(
    p: &PartitionParameters,
    span: i64,
    centres: &[i64],
    side: SlotSide,
    top: i64,
) -> Vec<Point> {
    let len = span - 2 * p.side_gap;
    let bottom = top + p.height;
    let depth = p.height / 2;
    let slot_edges = |centre: i64| {
        let a = centre - p.side_gap - p.slot_width / 2;
        (a, a + p.slot_width)
    };

    let mut outline = vec![Point::new(0, top)];
    match side {
        SlotSide::Top => {
            for &centre in centres {
                let (a, b) = slot_edges(centre);
                outline.extend([
                    Point::new(a, top),
                    Point::new(a, top + depth),
                    Point::new(b, top + depth),
                    Point::new(b, top),
                ]);
            }
            outline.extend([
                Point::new(len, top),
                Point::new(len, bottom),
                Point::new(0, bottom),
            ]);
        }
        SlotSide::Bottom => {
            outline.extend([Point::new(len, top), Point::new(len, bottom)]);
            for &centre in centres.iter().rev() {
                let (a, b) = slot_edges(centre);
                outline.extend([
                    Point::new(b, bottom),
                    Point::new(b, bottom - depth),
                    Point::new(a, bottom - depth),
                    Point::new(a, bottom),
                ]);
            }
            outline.push(Point::new(0, bottom));
        }
    }
    outline
}

#[cfg(test)]
mod tests {
    use super::*;

    const MM: i64 = 28346;

    fn params(rows: u32, columns: u32) -> PartitionParameters {
        PartitionParameters {
            length: 100 * MM,
            width: 60 * MM,
            height: 30 * MM,
            thickness: 2 * MM,
            rows,
            columns,
            slot_width: 2 * MM,
            side_gap: MM / 2,
            vertical_separation: 5 * MM,
        }
    }

    #[test]
    fn test_strip_counts() {
        let maker = PartitionMaker::new(params(3, 4)).unwrap();
        let names: Vec<&str> = maker.cut_groups().iter().map(|g| g.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["long-1", "long-2", "cross-1", "cross-2", "cross-3"]
        );
    }

    #[test]
    fn test_divider_centres() {
        let p = params(2, 2);
        let c = p.compartment_length();
        assert_eq!(c, 49 * MM);
        assert_eq!(p.divider_centres(p.length, 2), vec![c + MM]);
        assert!(p.divider_centres(p.length, 1).is_empty());
    }

    #[test]
    fn test_slots_meet_at_half_height() {
        let (corners, groups) = build(&params(2, 2));
        let long = &groups[0].cutlines[0].indices();
        let cross = &groups[1].cutlines[0].indices();
        let long_slot_bottom = corners[long[2]].y;
        let cross_top = corners[cross[0]].y;
        let cross_slot_top = corners[cross[4]].y;
        assert_eq!(long_slot_bottom, 15 * MM);
        assert_eq!(cross_slot_top - cross_top, 15 * MM);
    }

    #[test]
    fn test_strips_are_shortened_and_stacked() {
        let p = params(2, 2);
        let (corners, groups) = build(&p);
        let long = groups[0].cutlines[0].indices();
        let right = corners[long[long.len() - 4]];
        assert_eq!(right.x, p.length - 2 * p.side_gap);

        let cross = groups[1].cutlines[0].indices();
        assert_eq!(corners[cross[0]].y, p.height + p.vertical_separation);
    }

    #[test]
    fn test_outlines_close() {
        let (corners, groups) = build(&params(3, 3));
        for group in &groups {
            let idx = group.cutlines[0].indices();
            assert_eq!(corners[idx[0]], corners[idx[idx.len() - 1]]);
        }
    }

    #[test]
    fn test_validation() {
        assert!(matches!(
            PartitionMaker::new(params(1, 1)),
            Err(DesignError::Inconsistent(_))
        ));
        let mut p = params(2, 2);
        p.slot_width = 60 * MM;
        assert!(PartitionMaker::new(p).is_err());
        let mut p = params(2, 2);
        p.height = 0;
        assert!(PartitionMaker::new(p).is_err());
    }
}
