//! Card sheet
//!
//! A grid of rounded-rectangle cards. Each card owns eight lattice points,
//! two per side, laid out row-major.

use crate::cutline::{CutGroup, Cutline, Rotation};
use crate::design::{ensure, require_non_negative, require_positive, BoxDesign};
use crate::error::DesignResult;
use crate::registry::DesignKind;
use cutbox_core::Point;
use cutbox_settings::Settings;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Lattice points per card.
pub const POINTS_PER_CARD: usize = 8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSheetParameters {
    pub length: i64,
    pub width: i64,
    pub rows: u32,
    pub columns: u32,
    pub gap: i64,
    pub corner_radius: i64,
}

impl CardSheetParameters {
    pub fn from_settings(settings: &Settings) -> DesignResult<Self> {
        Ok(Self {
            length: settings.measure("length")?,
            width: settings.measure("width")?,
            rows: settings.count("rows")?,
            columns: settings.count("columns")?,
            gap: settings.measure_or_mm("gap", 2.0)?,
            corner_radius: settings.measure_or_mm("corner_radius", 3.0)?,
        })
    }

    fn validate(&self) -> DesignResult<()> {
        require_positive(&[
            ("length", self.length),
            ("width", self.width),
            ("rows", i64::from(self.rows)),
            ("columns", i64::from(self.columns)),
        ])?;
        require_non_negative(&[("gap", self.gap), ("corner_radius", self.corner_radius)])?;
        ensure(
            2 * self.corner_radius <= self.length.min(self.width),
            "corner_radius",
            "is larger than half a card",
        )
    }
}

pub struct CardSheetMaker {
    params: CardSheetParameters,
    corners: Vec<Point>,
    groups: Vec<CutGroup>,
}

impl CardSheetMaker {
    pub fn new(params: CardSheetParameters) -> DesignResult<Self> {
        params.validate()?;
        let corners = build_lattice(&params);
        let cards = corners.len() / POINTS_PER_CARD;
        let groups = vec![CutGroup::new("cards", select_cutlines(cards))];
        debug!(cards, points = corners.len(), "built card sheet");
        Ok(Self {
            params,
            corners,
            groups,
        })
    }
}

impl BoxDesign for CardSheetMaker {
    fn kind(&self) -> DesignKind {
        DesignKind::CardSheet
    }

    fn corners(&self) -> &[Point] {
        &self.corners
    }

    fn cut_groups(&self) -> &[CutGroup] {
        &self.groups
    }

    fn dimensions(&self) -> Vec<(&'static str, i64)> {
        vec![
            ("card_length", self.params.length),
            ("card_width", self.params.width),
            ("card_gap", self.params.gap),
        ]
    }
}

pub fn build_lattice(p: &CardSheetParameters) -> Vec<Point> {
    let rc = p.corner_radius;
    let mut corners = Vec::with_capacity(p.rows as usize * p.columns as usize * POINTS_PER_CARD);
    for row in 0..i64::from(p.rows) {
        for column in 0..i64::from(p.columns) {
            let x1 = column * (p.length + p.gap);
            let x2 = x1 + p.length;
            let y1 = row * (p.width + p.gap);
            let y2 = y1 + p.width;
            corners.extend([
                Point::new(x1 + rc, y1),
                Point::new(x2 - rc, y1),
                Point::new(x2, y1 + rc),
                Point::new(x2, y2 - rc),
                Point::new(x2 - rc, y2),
                Point::new(x1 + rc, y2),
                Point::new(x1, y2 - rc),
                Point::new(x1, y1 + rc),
            ]);
        }
    }
    corners
}

/// Straight sides as paired segments, then the four corner arcs.
pub fn select_cutlines(cards: usize) -> Vec<Cutline> {
    let cw = Rotation::Clockwise;
    let mut cutlines = Vec::with_capacity(cards * 5);
    for card in 0..cards {
        let b = card * POINTS_PER_CARD;
        cutlines.push(Cutline::pairs(&[b, b + 1, b + 2, b + 3, b + 4, b + 5, b + 6, b + 7]));
        cutlines.push(Cutline::quarter(b + 1, b + 2, cw));
        cutlines.push(Cutline::quarter(b + 3, b + 4, cw));
        cutlines.push(Cutline::quarter(b + 5, b + 6, cw));
        cutlines.push(Cutline::quarter(b + 7, b, cw));
    }
    cutlines
}
