//! Tuck box for a card deck
//!
//! One strip of panels, left to right: glue flap, back, side, front, side.
//! The back panel carries the lid and the tuck flap at both ends, the side
//! panels carry dust flaps, and the front has an optional thumb notch.
//! Every panel gets one material thickness of play: front and back are
//! `width + thickness` wide, sides `height + thickness`.

use crate::cutline::{CutGroup, Compass, Cutline, Rotation};
use crate::design::{ensure, require_non_negative, require_positive, BoxDesign};
use crate::error::DesignResult;
use crate::registry::DesignKind;
use cutbox_core::Point;
use cutbox_settings::Settings;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const LATTICE_LEN: usize = 34;

const NOTCH_START: usize = 12;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardBoxParameters {
    pub length: i64,
    pub width: i64,
    pub height: i64,
    pub thickness: i64,
    pub glue_flap: i64,
    pub tuck_depth: i64,
    pub corner_radius: i64,
    pub thumbhole: bool,
    pub thumbhole_radius: i64,
    pub thumbhole_fillet: i64,
}

impl CardBoxParameters {
    pub fn from_settings(settings: &Settings) -> DesignResult<Self> {
        let height = settings.measure("height")?;
        Ok(Self {
            length: settings.measure("length")?,
            width: settings.measure("width")?,
            height,
            thickness: settings.measure("thickness")?,
            glue_flap: settings.measure_or_mm("glue_flap", 8.0)?,
            tuck_depth: settings.optional_measure("tuck_depth")?.unwrap_or(height),
            corner_radius: settings.measure_or_mm("corner_radius", 3.0)?,
            thumbhole: !settings.contains("thumbhole") || settings.flag("thumbhole")?,
            thumbhole_radius: settings.measure_or_mm("thumbhole_radius", 8.0)?,
            thumbhole_fillet: settings.measure_or_mm("thumbhole_fillet", 2.0)?,
        })
    }

    /// Front and back panel width.
    pub fn panel_width(&self) -> i64 {
        self.width + self.thickness
    }

    pub fn side_width(&self) -> i64 {
        self.height + self.thickness
    }

    pub fn panel_height(&self) -> i64 {
        self.length + self.thickness
    }

    fn dust_flap_height(&self) -> i64 {
        self.side_width() - self.thickness
    }

    fn notch_width(&self) -> i64 {
        2 * (self.thumbhole_radius + self.thumbhole_fillet)
    }

    fn validate(&self) -> DesignResult<()> {
        require_positive(&[
            ("length", self.length),
            ("width", self.width),
            ("height", self.height),
            ("thickness", self.thickness),
            ("glue_flap", self.glue_flap),
            ("tuck_depth", self.tuck_depth),
        ])?;
        require_non_negative(&[
            ("corner_radius", self.corner_radius),
            ("thumbhole_radius", self.thumbhole_radius),
            ("thumbhole_fillet", self.thumbhole_fillet),
        ])?;
        let rc = self.corner_radius;
        ensure(
            2 * rc <= self.panel_width() && rc <= self.tuck_depth,
            "corner_radius",
            "does not fit the tuck flap",
        )?;
        ensure(
            rc <= self.dust_flap_height() && rc <= self.side_width(),
            "corner_radius",
            "does not fit the dust flaps",
        )?;
        ensure(
            self.glue_flap < self.panel_height(),
            "glue_flap",
            "must be shorter than the panel height",
        )?;
        if self.thumbhole {
            ensure(
                self.notch_width() < self.panel_width(),
                "thumbhole_radius",
                "notch is wider than the front panel",
            )?;
            ensure(
                self.thumbhole_radius + self.thumbhole_fillet < self.panel_height(),
                "thumbhole_radius",
                "notch is deeper than the front panel",
            )?;
        }
        Ok(())
    }
}

pub struct CardBoxMaker {
    params: CardBoxParameters,
    corners: Vec<Point>,
    groups: Vec<CutGroup>,
}

impl CardBoxMaker {
    pub fn new(params: CardBoxParameters) -> DesignResult<Self> {
        params.validate()?;
        let corners = build_lattice(&params);
        let groups = vec![CutGroup::new("box", select_cutlines(&params))];
        debug!(points = corners.len(), thumbhole = params.thumbhole, "built card box");
        Ok(Self {
            params,
            corners,
            groups,
        })
    }
}

impl BoxDesign for CardBoxMaker {
    fn kind(&self) -> DesignKind {
        DesignKind::CardBox
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
            ("outer_length", p.panel_height()),
            ("outer_width", p.panel_width()),
            ("outer_height", p.side_width()),
        ]
    }
}

pub fn build_lattice(p: &CardBoxParameters) -> Vec<Point> {
    let t = p.thickness;
    let rc = p.corner_radius;
    let g = p.glue_flap;
    let (wp, hp, lp) = (p.panel_width(), p.side_width(), p.panel_height());

    let x0 = 0;
    let x1 = g;
    let x2 = x1 + wp;
    let x3 = x2 + hp;
    let x4 = x3 + wp;
    let x5 = x4 + hp;

    let y0 = 0;
    let y1 = p.tuck_depth;
    let y2 = y1 + hp;
    let y3 = y2 + lp;
    let y4 = y3 + hp;
    let y5 = y4 + p.tuck_depth;

    let dust_t = y1 + t;
    let dust_b = y4 - t;
    let notch_x = x3 + (wp - p.notch_width()) / 2;

    vec![
        Point::new(x0, y2 + g / 2),
        Point::new(x1, y2),
        Point::new(x1, y1),
        Point::new(x1, y0 + rc),
        Point::new(x1 + rc, y0),
        Point::new(x2 - rc, y0),
        Point::new(x2, y0 + rc),
        Point::new(x2, y1),
        Point::new(x2, dust_t),
        Point::new(x3 - rc, dust_t),
        Point::new(x3, dust_t + rc),
        Point::new(x3, y2),
        Point::new(notch_x, y2),
        Point::new(notch_x + p.notch_width(), y2),
        Point::new(x4, y2),
        Point::new(x4, dust_t),
        Point::new(x5 - rc, dust_t),
        Point::new(x5, dust_t + rc),
        Point::new(x5, dust_b - rc),
        Point::new(x5 - rc, dust_b),
        Point::new(x4, dust_b),
        Point::new(x4, y3),
        Point::new(x3, y3),
        Point::new(x3, dust_b - rc),
        Point::new(x3 - rc, dust_b),
        Point::new(x2, dust_b),
        Point::new(x2, y5 - rc),
        Point::new(x2 - rc, y5),
        Point::new(x1 + rc, y5),
        Point::new(x1, y5 - rc),
        Point::new(x1, y3),
        Point::new(x0, y3 - g / 2),
        Point::new(x2, y2),
        Point::new(x2, y3),
    ]
}

/// Clockwise outline with rounded tuck and dust flap corners, plus the slits
/// between the lid panels and the dust flaps.
pub fn select_cutlines(p: &CardBoxParameters) -> Vec<Cutline> {
    let cw = Rotation::Clockwise;
    let mut cutlines = vec![
        Cutline::line(&[0, 1, 2, 3]),
        Cutline::continue_quarter(3, 4, cw),
        Cutline::continue_line(&[4, 5]),
        Cutline::continue_quarter(5, 6, cw),
        Cutline::continue_line(&[6, 7, 8, 9]),
        Cutline::continue_quarter(9, 10, cw),
    ];
    if p.thumbhole {
        cutlines.push(Cutline::continue_line(&[10, 11, NOTCH_START]));
        cutlines.push(Cutline::Thumbhole {
            anchor: NOTCH_START,
            along: Compass::East,
            toward: Compass::South,
            small_radius: p.thumbhole_fillet,
            large_radius: p.thumbhole_radius,
            move_to: false,
        });
        cutlines.push(Cutline::continue_line(&[13, 14, 15, 16]));
    } else {
        cutlines.push(Cutline::continue_line(&[10, 11, 14, 15, 16]));
    }
    cutlines.extend([
        Cutline::continue_quarter(16, 17, cw),
        Cutline::continue_line(&[17, 18]),
        Cutline::continue_quarter(18, 19, cw),
        Cutline::continue_line(&[19, 20, 21, 22, 23]),
        Cutline::continue_quarter(23, 24, cw),
        Cutline::continue_line(&[24, 25, 26]),
        Cutline::continue_quarter(26, 27, cw),
        Cutline::continue_line(&[27, 28]),
        Cutline::continue_quarter(28, 29, cw),
        Cutline::continue_line(&[29, 30, 31, 0]),
        Cutline::pairs(&[8, 32, 33, 25]),
    ]);
    cutlines
}
