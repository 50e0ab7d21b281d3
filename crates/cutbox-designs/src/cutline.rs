//! Cutline model
//!
//! A cutline is a path style plus the lattice indices it connects. Designs
//! only pick indices; where the points are is decided by the lattice.

use crate::error::{DesignError, DesignResult};
use cutbox_core::Point;
use serde::{Deserialize, Serialize};

/// Arc direction as seen on screen (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

impl Rotation {
    /// SVG sweep flag for this direction.
    pub fn sweep(&self) -> u8 {
        match self {
            Self::Clockwise => 1,
            Self::CounterClockwise => 0,
        }
    }
}

/// Screen compass direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Compass {
    North,
    East,
    South,
    West,
}

impl Compass {
    /// Unit step in screen coordinates.
    pub fn delta(&self) -> (i64, i64) {
        match self {
            Self::North => (0, -1),
            Self::East => (1, 0),
            Self::South => (0, 1),
            Self::West => (-1, 0),
        }
    }

    /// The direction a quarter turn clockwise on screen.
    pub fn clockwise(&self) -> Compass {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    pub fn counter_clockwise(&self) -> Compass {
        match self {
            Self::North => Self::West,
            Self::East => Self::North,
            Self::South => Self::East,
            Self::West => Self::South,
        }
    }

    fn offset(&self, p: Point, distance: i64) -> Point {
        let (dx, dy) = self.delta();
        p.translate(dx * distance, dy * distance)
    }
}

/// One path segment over the lattice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cutline {
    /// Connected polyline. Without `move_to` the pen continues from the
    /// previous fragment, which must end on the first point.
    Line { points: Vec<usize>, move_to: bool },
    QuarterCircle {
        from: usize,
        to: usize,
        rotation: Rotation,
        move_to: bool,
    },
    HalfCircle {
        from: usize,
        to: usize,
        rotation: Rotation,
        move_to: bool,
    },
    /// Disjoint segments, two indices each.
    Pairs(Vec<usize>),
    /// Finger notch cut into an edge running `along`, indenting `toward`.
    Thumbhole {
        anchor: usize,
        along: Compass,
        toward: Compass,
        small_radius: i64,
        large_radius: i64,
        move_to: bool,
    },
}

impl Cutline {
    pub fn line(points: &[usize]) -> Self {
        Self::Line {
            points: points.to_vec(),
            move_to: true,
        }
    }

    /// Polyline continuing from the current pen position.
    pub fn continue_line(points: &[usize]) -> Self {
        Self::Line {
            points: points.to_vec(),
            move_to: false,
        }
    }

    pub fn quarter(from: usize, to: usize, rotation: Rotation) -> Self {
        Self::QuarterCircle {
            from,
            to,
            rotation,
            move_to: true,
        }
    }

    /// Quarter circle continuing from the current pen position.
    pub fn continue_quarter(from: usize, to: usize, rotation: Rotation) -> Self {
        Self::QuarterCircle {
            from,
            to,
            rotation,
            move_to: false,
        }
    }

    pub fn continue_half(from: usize, to: usize, rotation: Rotation) -> Self {
        Self::HalfCircle {
            from,
            to,
            rotation,
            move_to: false,
        }
    }

    pub fn pairs(points: &[usize]) -> Self {
        Self::Pairs(points.to_vec())
    }

    /// Lattice indices this cutline refers to.
    pub fn indices(&self) -> Vec<usize> {
        match self {
            Self::Line { points, .. } | Self::Pairs(points) => points.clone(),
            Self::QuarterCircle { from, to, .. } | Self::HalfCircle { from, to, .. } => {
                vec![*from, *to]
            }
            Self::Thumbhole { anchor, .. } => vec![*anchor],
        }
    }

    /// Every point the cutline passes through, including the computed
    /// points of a thumbhole notch.
    pub fn resolve(&self, corners: &[Point]) -> DesignResult<Vec<Point>> {
        match self {
            Self::Thumbhole {
                anchor,
                along,
                toward,
                small_radius,
                large_radius,
                ..
            } => {
                let notch = thumbhole_points(
                    point_at(corners, *anchor)?,
                    *along,
                    *toward,
                    *small_radius,
                    *large_radius,
                )?;
                Ok(notch.to_vec())
            }
            other => other
                .indices()
                .into_iter()
                .map(|i| point_at(corners, i))
                .collect(),
        }
    }
}

/// Look up a lattice point.
pub fn point_at(corners: &[Point], index: usize) -> DesignResult<Point> {
    corners
        .get(index)
        .copied()
        .ok_or(DesignError::UnresolvedPoint {
            index,
            len: corners.len(),
        })
}

/// Anchor, inner start, inner end and exit point of a notch.
pub(crate) fn thumbhole_points(
    anchor: Point,
    along: Compass,
    toward: Compass,
    r: i64,
    big_r: i64,
) -> DesignResult<[Point; 4]> {
    if toward != along.clockwise() && toward != along.counter_clockwise() {
        return Err(DesignError::InvalidCutline(format!(
            "thumbhole must indent across its edge, got {:?} along {:?}",
            toward, along
        )));
    }
    let inner_start = toward.offset(along.offset(anchor, r), r);
    let inner_end = along.offset(inner_start, 2 * big_r);
    let exit = along.offset(anchor, 2 * r + 2 * big_r);
    Ok([anchor, inner_start, inner_end, exit])
}

/// A set of cutlines drawn as one path, optionally translated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutGroup {
    pub name: String,
    pub offset: (i64, i64),
    pub cutlines: Vec<Cutline>,
}

impl CutGroup {
    pub fn new(name: impl Into<String>, cutlines: Vec<Cutline>) -> Self {
        Self {
            name: name.into(),
            offset: (0, 0),
            cutlines,
        }
    }

    pub fn with_offset(mut self, dx: i64, dy: i64) -> Self {
        self.offset = (dx, dy);
        self
    }

    /// Points touched by the group, already translated by its offset.
    pub fn placed_points(&self, corners: &[Point]) -> DesignResult<Vec<Point>> {
        let (dx, dy) = self.offset;
        let mut points = Vec::new();
        for cutline in &self.cutlines {
            points.extend(
                cutline
                    .resolve(corners)?
                    .into_iter()
                    .map(|p| p.translate(dx, dy)),
            );
        }
        Ok(points)
    }
}
