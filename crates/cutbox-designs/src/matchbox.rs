//! Matchbox funnel tray
//!
//! Cross-shaped tray: the floor sits in the middle, the long walls above and
//! below it carry glue flaps, the end walls to the left and right have funnel
//! openings cut from the rim. Tall boxes get a folded band on the long walls.
//!
//! The lattice is a fixed table of indices. Cut groups refer to those indices
//! positionally, so reordering the table changes the drawing.

use crate::cutline::{CutGroup, Cutline, Rotation};
use crate::design::{ensure, require_non_negative, require_positive, BoxDesign};
use crate::error::{DesignError, DesignResult};
use crate::registry::DesignKind;
use cutbox_core::Point;
use cutbox_settings::Settings;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, warn};

/// Boxes up to this height use the small regime unless told otherwise.
pub const DEFAULT_SMALL_HEIGHT_MM: f64 = 20.0;

/// Number of points shared by both size regimes.
pub const SMALL_LATTICE_LEN: usize = 34;
/// Number of points in the large regime.
pub const LARGE_LATTICE_LEN: usize = 50;

// end wall rims and floor corners
const LW_TOP_RIM: usize = 0;
const FLAP_TL_BASE: usize = 1;
const FLAP_TR_BASE: usize = 6;
const RW_TOP_RIM: usize = 7;
const RW_NOSE_T: usize = 10;
const RW_NOSE_B: usize = 11;
const RW_THUMB_T: usize = 14;
const RW_THUMB_B: usize = 15;
const RW_BOTTOM_RIM: usize = 16;
const FLAP_BR_BASE: usize = 17;
const FLAP_BL_BASE: usize = 22;
const LW_BOTTOM_RIM: usize = 23;
const LW_NOSE_B: usize = 26;
const LW_NOSE_T: usize = 27;
const FLOOR_TL: usize = 30;
const FLOOR_TR: usize = 31;
const FLOOR_BR: usize = 32;
const FLOOR_BL: usize = 33;

const TOP_FLAP_LEFT: [usize; 3] = [1, 2, 3];
const TOP_FLAP_RIGHT: [usize; 3] = [4, 5, 6];
const TOP_BAND: [usize; 8] = [34, 35, 36, 37, 38, 39, 40, 41];
const BOTTOM_FLAP_RIGHT: [usize; 3] = [17, 18, 19];
const BOTTOM_FLAP_LEFT: [usize; 3] = [20, 21, 22];
const BOTTOM_BAND: [usize; 8] = [42, 43, 44, 45, 46, 47, 48, 49];

/// Which walls get a finger notch instead of a straight closure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThumbholeMode {
    #[default]
    None,
    Single,
    Double,
}

impl FromStr for ThumbholeMode {
    type Err = DesignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "" => Ok(Self::None),
            "single" => Ok(Self::Single),
            "double" => Ok(Self::Double),
            other => Err(DesignError::Inconsistent(format!(
                "thumbhole must be none, single or double, got '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeRegime {
    Small,
    Large,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchboxParameters {
    pub length: i64,
    pub width: i64,
    pub height: i64,
    pub thickness: i64,
    pub funnel_top_width: i64,
    pub funnel_bottom_width: i64,
    pub neck_height: i64,
    pub nose_width: i64,
    pub thumbhole_radius: i64,
    pub thumbhole: ThumbholeMode,
    pub single_funnel: bool,
    pub enforce_small: bool,
    pub enforce_large: bool,
    pub small_height_threshold: i64,
    pub separated: bool,
    pub separation: i64,
}

impl MatchboxParameters {
    /// Plain tray with the default funnel proportions. The small height
    /// threshold starts at zero, so only `enforce_small` picks the small regime.
    pub fn new(length: i64, width: i64, height: i64, thickness: i64) -> Self {
        Self {
            length,
            width,
            height,
            thickness,
            funnel_top_width: width * 60 / 100,
            funnel_bottom_width: width * 40 / 100,
            neck_height: height * 40 / 100,
            nose_width: width * 25 / 100,
            thumbhole_radius: width * 25 / 100,
            thumbhole: ThumbholeMode::None,
            single_funnel: false,
            enforce_small: false,
            enforce_large: false,
            small_height_threshold: 0,
            separated: false,
            separation: 0,
        }
    }

    pub fn from_settings(settings: &Settings) -> DesignResult<Self> {
        let length = settings.measure("length")?;
        let width = settings.measure("width")?;
        let height = settings.measure("height")?;
        let thickness = settings.measure("thickness")?;
        let mut params = Self::new(length, width, height, thickness);

        let or = |key: &str, fallback: i64| -> DesignResult<i64> {
            Ok(settings.optional_measure(key)?.unwrap_or(fallback))
        };
        params.funnel_top_width = or("funnel_top_width", params.funnel_top_width)?;
        params.funnel_bottom_width = or("funnel_bottom_width", params.funnel_bottom_width)?;
        params.neck_height = or("neck_height", params.neck_height)?;
        params.nose_width = or("nose_width", params.nose_width)?;
        params.thumbhole_radius = or("thumbhole_radius", params.thumbhole_radius)?;
        params.small_height_threshold =
            settings.measure_or_mm("small_height_threshold", DEFAULT_SMALL_HEIGHT_MM)?;
        params.separation = or("separation", 0)?;

        params.thumbhole = match settings.text("thumbhole")? {
            Some(mode) => mode.parse()?,
            None => ThumbholeMode::None,
        };
        let single = settings.flag("single_thumbhole")?;
        let double = settings.flag("double_thumbhole")?;
        if single && double {
            warn!("both single_thumbhole and double_thumbhole set, using single");
        }
        if single {
            params.thumbhole = ThumbholeMode::Single;
        } else if double {
            params.thumbhole = ThumbholeMode::Double;
        }

        params.single_funnel = settings.flag("single_funnel")?;
        params.enforce_small = settings.flag("enforce_small")?;
        params.enforce_large = settings.flag("enforce_large")?;
        params.separated = settings.flag("separated")?;
        Ok(params)
    }

    pub fn regime(&self) -> SizeRegime {
        if self.enforce_large {
            SizeRegime::Large
        } else if self.enforce_small || self.height <= self.small_height_threshold {
            SizeRegime::Small
        } else {
            SizeRegime::Large
        }
    }

    /// Thumbhole mode after the single funnel restriction.
    pub fn effective_thumbhole(&self) -> ThumbholeMode {
        if self.single_funnel && self.thumbhole == ThumbholeMode::Double {
            ThumbholeMode::Single
        } else {
            self.thumbhole
        }
    }

    fn validate(&self) -> DesignResult<()> {
        require_positive(&[
            ("length", self.length),
            ("width", self.width),
            ("height", self.height),
            ("thickness", self.thickness),
            ("funnel_top_width", self.funnel_top_width),
            ("funnel_bottom_width", self.funnel_bottom_width),
            ("neck_height", self.neck_height),
            ("nose_width", self.nose_width),
            ("thumbhole_radius", self.thumbhole_radius),
        ])?;
        require_non_negative(&[("separation", self.separation)])?;
        ensure(
            self.height > 3 * self.thickness,
            "height",
            "must exceed three material thicknesses",
        )?;
        ensure(
            self.funnel_top_width <= self.width,
            "funnel_top_width",
            "must not exceed the width",
        )?;
        ensure(
            self.funnel_bottom_width <= self.funnel_top_width,
            "funnel_bottom_width",
            "must not exceed the funnel top width",
        )?;
        ensure(
            self.nose_width <= self.funnel_bottom_width,
            "nose_width",
            "must not exceed the funnel bottom width",
        )?;
        ensure(
            self.neck_height + self.nose_width / 2 < self.height - self.thickness,
            "neck_height",
            "funnel reaches through the fold",
        )?;
        ensure(
            2 * self.thumbhole_radius < self.width,
            "thumbhole_radius",
            "thumbhole is wider than the end wall",
        )?;
        // a single funnel notch is cut from the rim toward the fold
        if self.single_funnel && self.effective_thumbhole() != ThumbholeMode::None {
            ensure(
                self.thumbhole_radius < self.height - self.thickness,
                "thumbhole_radius",
                "thumbhole reaches through the fold",
            )?;
        }
        Ok(())
    }
}

pub struct MatchboxMaker {
    params: MatchboxParameters,
    regime: SizeRegime,
    thumbhole: ThumbholeMode,
    corners: Vec<Point>,
    groups: Vec<CutGroup>,
}

impl MatchboxMaker {
    pub fn new(params: MatchboxParameters) -> DesignResult<Self> {
        params.validate()?;
        let regime = params.regime();
        let thumbhole = params.effective_thumbhole();
        if thumbhole != params.thumbhole {
            debug!("single funnel limits the thumbhole to one wall");
        }

        let corners = build_lattice(&params, regime);
        let selection = Selection {
            regime,
            thumbhole,
            single_funnel: params.single_funnel,
        };
        let groups = if params.separated {
            let step = (corners[FLAP_TL_BASE].x - corners[LW_TOP_RIM].x).abs() + params.separation;
            selection.separated(step)
        } else {
            selection.folded()
        };
        debug!(
            ?regime,
            ?thumbhole,
            points = corners.len(),
            groups = groups.len(),
            "built matchbox"
        );

        Ok(Self {
            params,
            regime,
            thumbhole,
            corners,
            groups,
        })
    }

    pub fn params(&self) -> &MatchboxParameters {
        &self.params
    }

    pub fn regime(&self) -> SizeRegime {
        self.regime
    }

    pub fn thumbhole(&self) -> ThumbholeMode {
        self.thumbhole
    }
}

impl BoxDesign for MatchboxMaker {
    fn kind(&self) -> DesignKind {
        DesignKind::Matchbox
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
            ("outer_length", p.length + 2 * p.thickness),
            ("outer_width", p.width + 2 * p.thickness),
            ("outer_height", p.height + p.thickness),
        ]
    }
}

/// Build the point table. Indices 0..34 exist in both regimes, 34..50 only
/// in the large one.
pub fn build_lattice(p: &MatchboxParameters, regime: SizeRegime) -> Vec<Point> {
    let (l, w, h, t) = (p.length, p.width, p.height, p.thickness);
    let (ft, fb, nh, nw, r) = (
        p.funnel_top_width,
        p.funnel_bottom_width,
        p.neck_height,
        p.nose_width,
        p.thumbhole_radius,
    );

    let rim_l = 0;
    let neck_l = nh;
    let nose_l = h - t - nw / 2;
    let flap_l = t;
    let fold_l = h;
    let fold_r = h + l;
    let nose_r = fold_r + t + nw / 2;
    let neck_r = fold_r + h - nh;
    let flap_r = fold_r + h - t;
    let rim_r = fold_r + h;

    let (wall_t, floor_t) = match regime {
        SizeRegime::Small => (0, h),
        SizeRegime::Large => (h, 2 * h),
    };
    let floor_b = floor_t + w;
    let wall_b = floor_b + h;

    let ft1 = floor_t + (w - ft) / 2;
    let ft2 = ft1 + ft;
    let fb1 = floor_t + (w - fb) / 2;
    let fb2 = fb1 + fb;
    let n1 = floor_t + (w - nw) / 2;
    let n2 = n1 + nw;
    let th1 = floor_t + w / 2 - r;
    let th2 = th1 + 2 * r;

    let mut corners = vec![
        Point::new(rim_l, floor_t),
        Point::new(flap_l, floor_t),
        Point::new(flap_l, wall_t + t),
        Point::new(flap_l + t, wall_t),
        Point::new(flap_r - t, wall_t),
        Point::new(flap_r, wall_t + t),
        Point::new(flap_r, floor_t),
        Point::new(rim_r, floor_t),
        Point::new(rim_r, ft1),
        Point::new(neck_r, fb1),
        Point::new(nose_r, n1),
        Point::new(nose_r, n2),
        Point::new(neck_r, fb2),
        Point::new(rim_r, ft2),
        Point::new(rim_r, th1),
        Point::new(rim_r, th2),
        Point::new(rim_r, floor_b),
        Point::new(flap_r, floor_b),
        Point::new(flap_r, wall_b - t),
        Point::new(flap_r - t, wall_b),
        Point::new(flap_l + t, wall_b),
        Point::new(flap_l, wall_b - t),
        Point::new(flap_l, floor_b),
        Point::new(rim_l, floor_b),
        Point::new(rim_l, ft2),
        Point::new(neck_l, fb2),
        Point::new(nose_l, n2),
        Point::new(nose_l, n1),
        Point::new(neck_l, fb1),
        Point::new(rim_l, ft1),
        Point::new(fold_l, floor_t),
        Point::new(fold_r, floor_t),
        Point::new(fold_r, floor_b),
        Point::new(fold_l, floor_b),
    ];

    if regime == SizeRegime::Large {
        let band_t = h - t;
        let band_b = wall_b + t;
        let bottom = band_b + h - t;
        corners.extend([
            Point::new(fold_l, wall_t),
            Point::new(fold_l, band_t),
            Point::new(fold_l + t, band_t),
            Point::new(fold_l + t, 0),
            Point::new(fold_r - t, 0),
            Point::new(fold_r - t, band_t),
            Point::new(fold_r, band_t),
            Point::new(fold_r, wall_t),
            Point::new(fold_r, wall_b),
            Point::new(fold_r, band_b),
            Point::new(fold_r - t, band_b),
            Point::new(fold_r - t, bottom),
            Point::new(fold_l + t, bottom),
            Point::new(fold_l + t, band_b),
            Point::new(fold_l, band_b),
            Point::new(fold_l, wall_b),
        ]);
    }
    corners
}

/// Cutline decision table. Depends on the flags only, never on coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Selection {
    pub regime: SizeRegime,
    pub thumbhole: ThumbholeMode,
    pub single_funnel: bool,
}

impl Selection {
    fn right_notch(&self) -> bool {
        self.thumbhole != ThumbholeMode::None
    }

    fn left_notch(&self) -> bool {
        self.thumbhole == ThumbholeMode::Double
    }

    fn closure(notch: bool, from: usize, to: usize) -> Cutline {
        if notch {
            Cutline::continue_half(from, to, Rotation::CounterClockwise)
        } else {
            Cutline::continue_line(&[from, to])
        }
    }

    /// Long wall above the floor, from `start` to `end` through the flaps.
    fn top_run(&self, start: usize, end: usize) -> Vec<usize> {
        let mut run = vec![start];
        run.extend(TOP_FLAP_LEFT);
        if self.regime == SizeRegime::Large {
            run.extend(TOP_BAND);
        }
        run.extend(TOP_FLAP_RIGHT);
        run.push(end);
        run
    }

    fn bottom_run(&self, start: usize, end: usize) -> Vec<usize> {
        let mut run = vec![start];
        run.extend(BOTTOM_FLAP_RIGHT);
        if self.regime == SizeRegime::Large {
            run.extend(BOTTOM_BAND);
        }
        run.extend(BOTTOM_FLAP_LEFT);
        run.push(end);
        run
    }

    /// Right end wall, entered at `entry` and left at `exit`.
    fn right_wall(&self, entry: &[usize], exit: &[usize]) -> Vec<Cutline> {
        let notch = self.right_notch();
        if self.single_funnel {
            let mut top = entry.to_vec();
            top.push(RW_TOP_RIM);
            let mut lower = vec![RW_THUMB_B, RW_BOTTOM_RIM];
            lower.extend_from_slice(exit);
            vec![
                Cutline::continue_line(&top),
                Cutline::continue_line(&[RW_TOP_RIM, RW_THUMB_T]),
                Self::closure(notch, RW_THUMB_T, RW_THUMB_B),
                Cutline::continue_line(&lower),
            ]
        } else {
            let mut upper = entry.to_vec();
            upper.extend([RW_TOP_RIM, 8, 9, RW_NOSE_T]);
            let mut lower = vec![RW_NOSE_B, 12, 13, RW_BOTTOM_RIM];
            lower.extend_from_slice(exit);
            vec![
                Cutline::continue_line(&upper),
                Self::closure(notch, RW_NOSE_T, RW_NOSE_B),
                Cutline::continue_line(&lower),
            ]
        }
    }

    fn left_wall(&self, entry: &[usize], exit: &[usize]) -> Vec<Cutline> {
        let mut lower = entry.to_vec();
        lower.extend([LW_BOTTOM_RIM, 24, 25, LW_NOSE_B]);
        let mut upper = vec![LW_NOSE_T, 28, 29, LW_TOP_RIM];
        upper.extend_from_slice(exit);
        vec![
            Cutline::continue_line(&lower),
            Self::closure(self.left_notch(), LW_NOSE_B, LW_NOSE_T),
            Cutline::continue_line(&upper),
        ]
    }

    /// One continuous outline plus the flap slits.
    pub fn folded(&self) -> Vec<CutGroup> {
        let top = self.top_run(LW_TOP_RIM, FLAP_TR_BASE);
        let mut cutlines = vec![Cutline::Line {
            points: top[..top.len() - 1].to_vec(),
            move_to: true,
        }];
        cutlines.extend(self.right_wall(&[FLAP_TR_BASE], &[FLAP_BR_BASE]));
        let bottom = self.bottom_run(FLAP_BR_BASE, FLAP_BL_BASE);
        cutlines.push(Cutline::continue_line(&bottom[1..bottom.len() - 1]));
        cutlines.extend(self.left_wall(&[FLAP_BL_BASE], &[]));
        cutlines.push(Cutline::pairs(&[
            FLAP_TL_BASE,
            FLOOR_TL,
            FLAP_TR_BASE,
            FLOOR_TR,
            FLAP_BR_BASE,
            FLOOR_BR,
            FLAP_BL_BASE,
            FLOOR_BL,
        ]));
        vec![CutGroup::new("tray", cutlines)]
    }

    /// Five closed panels, each translated by a multiple of `step`.
    pub fn separated(&self, step: i64) -> Vec<CutGroup> {
        let top = self.top_run(FLOOR_TL, FLOOR_TR);
        let mut top_outline = top.clone();
        top_outline.push(FLOOR_TL);

        let bottom = self.bottom_run(FLOOR_BR, FLOOR_BL);
        let mut bottom_outline = bottom.clone();
        bottom_outline.push(FLOOR_BR);

        let mut right = vec![Cutline::Line {
            points: vec![FLOOR_TR],
            move_to: true,
        }];
        right.extend(self.right_wall(&[FLOOR_TR], &[FLOOR_BR, FLOOR_TR]));

        let mut left = vec![Cutline::Line {
            points: vec![FLOOR_BL],
            move_to: true,
        }];
        left.extend(self.left_wall(&[FLOOR_BL], &[FLOOR_TL, FLOOR_BL]));

        vec![
            CutGroup::new("top", vec![Cutline::line(&top_outline)]).with_offset(step, 0),
            CutGroup::new(
                "center",
                vec![Cutline::line(&[FLOOR_TL, FLOOR_TR, FLOOR_BR, FLOOR_BL, FLOOR_TL])],
            )
            .with_offset(step, step),
            CutGroup::new("bottom", vec![Cutline::line(&bottom_outline)]).with_offset(step, 2 * step),
            CutGroup::new("left", left).with_offset(0, step),
            CutGroup::new("right", right).with_offset(2 * step, step),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MM: i64 = 28346;

    fn params(height_mm: i64) -> MatchboxParameters {
        let mut p = MatchboxParameters::new(60 * MM, 40 * MM, height_mm * MM, 3 * MM / 2);
        p.small_height_threshold = 20 * MM;
        p.separation = 5 * MM;
        p
    }

    #[test]
    fn test_regime_selection() {
        assert_eq!(params(15).regime(), SizeRegime::Small);
        assert_eq!(params(20).regime(), SizeRegime::Small);
        assert_eq!(params(30).regime(), SizeRegime::Large);

        let mut p = params(30);
        p.enforce_small = true;
        assert_eq!(p.regime(), SizeRegime::Small);
        p.enforce_large = true;
        assert_eq!(p.regime(), SizeRegime::Large);
    }

    #[test]
    fn test_lattice_sizes() {
        let small = MatchboxMaker::new(params(15)).unwrap();
        assert_eq!(small.corners().len(), SMALL_LATTICE_LEN);
        let large = MatchboxMaker::new(params(30)).unwrap();
        assert_eq!(large.corners().len(), LARGE_LATTICE_LEN);
    }

    #[test]
    fn test_small_folded_outline() {
        let maker = MatchboxMaker::new(params(15)).unwrap();
        let groups = maker.cut_groups();
        assert_eq!(groups.len(), 1);
        assert_eq!(
            groups[0].cutlines[0],
            Cutline::Line {
                points: vec![0, 1, 2, 3, 4, 5, 6],
                move_to: true
            }
        );
        assert_eq!(
            groups[0].cutlines[1],
            Cutline::continue_line(&[6, 7, 8, 9, 10])
        );
        assert_eq!(groups[0].cutlines[2], Cutline::continue_line(&[10, 11]));
    }

    #[test]
    fn test_large_runs_include_band() {
        let maker = MatchboxMaker::new(params(30)).unwrap();
        let cutlines = &maker.cut_groups()[0].cutlines;
        assert_eq!(
            cutlines[0].indices(),
            vec![0, 1, 2, 3, 34, 35, 36, 37, 38, 39, 40, 41, 4, 5, 6]
        );
        assert_eq!(
            cutlines[4].indices(),
            vec![17, 18, 19, 42, 43, 44, 45, 46, 47, 48, 49, 20, 21, 22]
        );
    }

    #[test]
    fn test_single_funnel_forces_single_thumbhole() {
        let mut p = params(15);
        p.single_funnel = true;
        p.thumbhole = ThumbholeMode::Double;
        let maker = MatchboxMaker::new(p).unwrap();
        assert_eq!(maker.thumbhole(), ThumbholeMode::Single);
        let cutlines = &maker.cut_groups()[0].cutlines;
        assert_eq!(
            cutlines[3],
            Cutline::continue_half(14, 15, Rotation::CounterClockwise)
        );
        // left wall closure stays straight
        assert!(cutlines.contains(&Cutline::continue_line(&[26, 27])));
    }

    #[test]
    fn test_every_index_resolves() {
        for height in [15, 30] {
            for single_funnel in [false, true] {
                for separated in [false, true] {
                    let mut p = params(height);
                    p.single_funnel = single_funnel;
                    p.separated = separated;
                    p.thumbhole = ThumbholeMode::Double;
                    let maker = MatchboxMaker::new(p).unwrap();
                    for group in maker.cut_groups() {
                        assert!(group.placed_points(maker.corners()).is_ok());
                    }
                }
            }
        }
    }

    #[test]
    fn test_validation() {
        let mut p = params(15);
        p.height = 4 * MM;
        p.thickness = 2 * MM;
        assert!(matches!(
            MatchboxMaker::new(p),
            Err(DesignError::InvalidMeasurement { .. })
        ));

        let mut p = params(15);
        p.funnel_bottom_width = p.funnel_top_width + 1;
        assert!(MatchboxMaker::new(p).is_err());

        let mut p = params(15);
        p.width = 0;
        assert!(MatchboxMaker::new(p).is_err());

        let mut p = params(15);
        p.thumbhole_radius = p.width / 2;
        assert!(MatchboxMaker::new(p).is_err());
    }

    #[test]
    fn test_single_funnel_thumbhole_must_stay_in_the_end_wall() {
        let mut p = params(15);
        p.single_funnel = true;
        p.thumbhole = ThumbholeMode::Single;
        p.thumbhole_radius = 18 * MM;
        p.width = 40 * MM;
        assert!(matches!(
            MatchboxMaker::new(p.clone()),
            Err(DesignError::InvalidMeasurement { ref name, .. }) if name == "thumbhole_radius"
        ));

        // exactly at the fold is still too deep
        p.thumbhole_radius = p.height - p.thickness;
        assert!(MatchboxMaker::new(p.clone()).is_err());

        p.thumbhole_radius = p.height - p.thickness - 1;
        let maker = MatchboxMaker::new(p.clone()).unwrap();
        let c = maker.corners();
        let deepest = c[RW_THUMB_T].x - maker.params().thumbhole_radius;
        assert!(deepest > c[FLOOR_TR].x + p.thickness);

        // without a thumbhole the radius is never cut
        p.thumbhole = ThumbholeMode::None;
        p.thumbhole_radius = 18 * MM;
        assert!(MatchboxMaker::new(p).is_ok());
    }

    #[test]
    fn test_thumbhole_mode_parsing() {
        assert_eq!("Double".parse::<ThumbholeMode>().unwrap(), ThumbholeMode::Double);
        assert_eq!("none".parse::<ThumbholeMode>().unwrap(), ThumbholeMode::None);
        assert!("triple".parse::<ThumbholeMode>().is_err());
    }
}
