//! Path rendering
//!
//! Turns cutlines into SVG path data. Coordinates are written with
//! [`drawing_units_to_display`], so one unit in the output is one drawing dot.

use crate::cutline::{point_at, thumbhole_points, CutGroup, Cutline, Rotation};
use crate::error::{DesignError, DesignResult};
use cutbox_core::{drawing_units_to_display, Point};
use std::fmt::Write;

fn coords(p: Point) -> String {
    format!(
        "{} {}",
        drawing_units_to_display(p.x),
        drawing_units_to_display(p.y)
    )
}

fn move_to(out: &mut String, p: Point) {
    let _ = write!(out, "M {} ", coords(p));
}

fn arc_to(out: &mut String, radius: i64, sweep: u8, to: Point) {
    let r = drawing_units_to_display(radius);
    let _ = write!(out, "A {} {} 0 0 {} {} ", r, r, sweep, coords(to));
}

/// Radius of a quarter circle between two points: the delta along the axis
/// on which they differ.
pub fn arc_delta(from: Point, to: Point) -> i64 {
    if from.y == to.y {
        (to.x - from.x).abs()
    } else {
        (to.y - from.y).abs()
    }
}

/// Render one cutline to a path fragment. Degenerate arcs render empty.
pub fn render_cutline(cutline: &Cutline, corners: &[Point]) -> DesignResult<String> {
    let mut out = String::new();
    match cutline {
        Cutline::Line { points, move_to: mv } => {
            let mut iter = points.iter();
            let Some(&first) = iter.next() else {
                return Ok(out);
            };
            let start = point_at(corners, first)?;
            if *mv {
                move_to(&mut out, start);
            }
            for &index in iter {
                let _ = write!(out, "L {} ", coords(point_at(corners, index)?));
            }
        }
        Cutline::QuarterCircle {
            from,
            to,
            rotation,
            move_to: mv,
        } => {
            let (a, b) = (point_at(corners, *from)?, point_at(corners, *to)?);
            render_arc(&mut out, a, b, arc_delta(a, b), *rotation, *mv);
        }
        Cutline::HalfCircle {
            from,
            to,
            rotation,
            move_to: mv,
        } => {
            let (a, b) = (point_at(corners, *from)?, point_at(corners, *to)?);
            render_arc(&mut out, a, b, arc_delta(a, b) / 2, *rotation, *mv);
        }
        Cutline::Pairs(points) => {
            if points.len() % 2 != 0 {
                return Err(DesignError::InvalidCutline(format!(
                    "paired segments need an even number of points, got {}",
                    points.len()
                )));
            }
            for pair in points.chunks_exact(2) {
                let (a, b) = (point_at(corners, pair[0])?, point_at(corners, pair[1])?);
                move_to(&mut out, a);
                let _ = write!(out, "L {} ", coords(b));
            }
        }
        Cutline::Thumbhole {
            anchor,
            along,
            toward,
            small_radius,
            large_radius,
            move_to: mv,
        } => {
            let [start, inner_start, inner_end, exit] = thumbhole_points(
                point_at(corners, *anchor)?,
                *along,
                *toward,
                *small_radius,
                *large_radius,
            )?;
            let (turn, sweep) = if *toward == along.clockwise() {
                (1, 0)
            } else {
                (0, 1)
            };
            if *mv {
                move_to(&mut out, start);
            }
            if *small_radius > 0 {
                arc_to(&mut out, *small_radius, turn, inner_start);
            } else {
                let _ = write!(out, "L {} ", coords(inner_start));
            }
            if *large_radius > 0 {
                arc_to(&mut out, *large_radius, sweep, inner_end);
            }
            if *small_radius > 0 {
                arc_to(&mut out, *small_radius, turn, exit);
            } else {
                let _ = write!(out, "L {} ", coords(exit));
            }
        }
    }
    Ok(out)
}

fn render_arc(out: &mut String, from: Point, to: Point, radius: i64, rotation: Rotation, mv: bool) {
    if radius == 0 {
        return;
    }
    if mv {
        move_to(out, from);
    }
    arc_to(out, radius, rotation.sweep(), to);
}

/// Path data of a whole group.
pub fn render_path_data(group: &CutGroup, corners: &[Point]) -> DesignResult<String> {
    let mut data = String::new();
    for cutline in &group.cutlines {
        data.push_str(&render_cutline(cutline, corners)?);
    }
    Ok(data.trim_end().to_string())
}

/// A `<path>` element for a group.
pub fn render_group(group: &CutGroup, corners: &[Point]) -> DesignResult<String> {
    let data = render_path_data(group, corners)?;
    let (dx, dy) = group.offset;
    let transform = if (dx, dy) == (0, 0) {
        String::new()
    } else {
        format!(
            " transform=\"translate({} {})\"",
            drawing_units_to_display(dx),
            drawing_units_to_display(dy)
        )
    };
    Ok(format!(
        "<path id=\"{}\" class=\"cut\" d=\"{}\"{}/>",
        group.name, data, transform
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cutline::Compass;

    fn corners() -> Vec<Point> {
        vec![
            Point::new(0, 0),
            Point::new(100_000, 0),
            Point::new(100_000, 50_000),
            Point::new(0, 50_000),
        ]
    }

    #[test]
    fn test_line_with_and_without_move() {
        let c = corners();
        assert_eq!(
            render_cutline(&Cutline::line(&[0, 1, 2]), &c).unwrap(),
            "M 0.0000 0.0000 L 10.0000 0.0000 L 10.0000 5.0000 "
        );
        assert_eq!(
            render_cutline(&Cutline::continue_line(&[2, 3]), &c).unwrap(),
            "L 0.0000 5.0000 "
        );
    }

    #[test]
    fn test_quarter_circle_radius_from_differing_axis() {
        let c = vec![Point::new(0, 0), Point::new(30_000, 30_000)];
        let out = render_cutline(&Cutline::quarter(0, 1, Rotation::Clockwise), &c).unwrap();
        assert_eq!(out, "M 0.0000 0.0000 A 3.0000 3.0000 0 0 1 3.0000 3.0000 ");
    }

    #[test]
    fn test_half_circle_uses_half_the_chord() {
        let c = corners();
        let out = render_cutline(
            &Cutline::continue_half(1, 2, Rotation::CounterClockwise),
            &c,
        )
        .unwrap();
        assert_eq!(out, "A 2.5000 2.5000 0 0 0 10.0000 5.0000 ");
    }

    #[test]
    fn test_degenerate_arc_is_empty() {
        let c = vec![Point::new(7, 7), Point::new(7, 7)];
        assert_eq!(
            render_cutline(&Cutline::quarter(0, 1, Rotation::Clockwise), &c).unwrap(),
            ""
        );
        assert_eq!(
            render_cutline(&Cutline::continue_half(0, 1, Rotation::Clockwise), &c).unwrap(),
            ""
        );
    }

    #[test]
    fn test_pairs() {
        let c = corners();
        assert_eq!(
            render_cutline(&Cutline::pairs(&[0, 1, 2, 3]), &c).unwrap(),
            "M 0.0000 0.0000 L 10.0000 0.0000 M 10.0000 5.0000 L 0.0000 5.0000 "
        );
        assert!(matches!(
            render_cutline(&Cutline::pairs(&[0, 1, 2]), &c),
            Err(DesignError::InvalidCutline(_))
        ));
    }

    #[test]
    fn test_thumbhole_sweeps_mirror() {
        let c = vec![Point::new(0, 0)];
        let notch = |along, toward| Cutline::Thumbhole {
            anchor: 0,
            along,
            toward,
            small_radius: 20_000,
            large_radius: 80_000,
            move_to: false,
        };
        let down = render_cutline(&notch(Compass::East, Compass::South), &c).unwrap();
        assert_eq!(
            down,
            "A 2.0000 2.0000 0 0 1 2.0000 2.0000 \
             A 8.0000 8.0000 0 0 0 18.0000 2.0000 \
             A 2.0000 2.0000 0 0 1 20.0000 0.0000 "
        );
        let up = render_cutline(&notch(Compass::East, Compass::North), &c).unwrap();
        assert_eq!(
            up,
            "A 2.0000 2.0000 0 0 0 2.0000 -2.0000 \
             A 8.0000 8.0000 0 0 1 18.0000 -2.0000 \
             A 2.0000 2.0000 0 0 0 20.0000 0.0000 "
        );
    }

    #[test]
    fn test_group_transform() {
        let c = corners();
        let group = CutGroup::new("lid", vec![Cutline::line(&[0, 1])]).with_offset(10_000, 0);
        let svg = render_group(&group, &c).unwrap();
        assert!(svg.starts_with("<path id=\"lid\""));
        assert!(svg.contains("d=\"M 0.0000 0.0000 L 10.0000 0.0000\""));
        assert!(svg.contains("transform=\"translate(1.0000 0.0000)\""));

        let plain = render_group(&CutGroup::new("lid", vec![Cutline::line(&[0, 1])]), &c).unwrap();
        assert!(!plain.contains("transform"));
    }

    #[test]
    fn test_bad_index_is_fatal() {
        let c = corners();
        assert!(matches!(
            render_cutline(&Cutline::line(&[0, 9]), &c),
            Err(DesignError::UnresolvedPoint { index: 9, len: 4 })
        ));
    }
}
