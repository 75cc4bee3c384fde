//! Grid cut-line generation.
//!
//! Produces the unordered set of bounded line segments that split a surface
//! region into a rectangular grid: one axis line per basis direction plus
//! mirrored parallel copies at every step offset, all spanning ±radius.
//! Segments are not trimmed against each other; intersection handling
//! belongs to the face construction downstream.

use tracing::debug;

use crate::error::PartError;
use crate::geometry::{BasisFrame, Segment};

/// Texture orientation, restricted to quarter turns.
///
/// Only these four values are ever legal, so the rotation is a closed enum
/// rather than a numeric angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationAngle {
    R0,
    R90,
    R180,
    R270,
}

impl RotationAngle {
    /// True for the two rotations that exchange the grid's row and column
    /// spacing.
    #[inline]
    pub fn quarter_turn(&self) -> bool {
        matches!(self, RotationAngle::R90 | RotationAngle::R270)
    }
}

/// A complete grid generation request.
#[derive(Debug, Clone, Copy)]
pub struct GridRequest {
    /// Frame whose axes the grid aligns to.
    pub frame: BasisFrame,
    /// Spacing between cut lines along `base_x`.
    pub step_x: f64,
    /// Spacing between cut lines along `base_y`.
    pub step_y: f64,
    /// Texture orientation; a quarter turn swaps the two steps.
    pub angle: RotationAngle,
    /// Half-extent of every emitted line, measured from the origin.
    pub radius: f64,
}

/// Generate the grid cut lines for a request.
///
/// Returns exactly `2 + 2·⌈radius/step_x⌉ + 2·⌈radius/step_y⌉` segments
/// (steps taken after any quarter-turn swap): the two axis lines through
/// the origin and, per axis, a mirrored pair of parallel copies for each
/// step offset up to the radius.
///
/// Steps must be strictly positive and the radius non-negative; violations
/// fail before any segment is produced.
pub fn generate_grid_lines(request: &GridRequest) -> Result<Vec<Segment>, PartError> {
    if request.step_x <= 0.0 {
        return Err(PartError::NonPositiveStep {
            axis: "x",
            value: request.step_x,
        });
    }
    if request.step_y <= 0.0 {
        return Err(PartError::NonPositiveStep {
            axis: "y",
            value: request.step_y,
        });
    }
    if request.radius < 0.0 {
        return Err(PartError::NegativeRadius(request.radius));
    }

    // A quarter turn exchanges row and column spacing.
    let (step_x, step_y) = if request.angle.quarter_turn() {
        (request.step_y, request.step_x)
    } else {
        (request.step_x, request.step_y)
    };

    let origin = request.frame.origin();
    let base_x = request.frame.base_x();
    let base_y = request.frame.base_y();
    let radius = request.radius;

    let x_axis = Segment::line(origin - radius * base_x, origin + radius * base_x);
    let y_axis = Segment::line(origin - radius * base_y, origin + radius * base_y);

    let x_num = (radius / step_x).ceil() as usize;
    let y_num = (radius / step_y).ceil() as usize;

    let mut lines = Vec::with_capacity(2 + 2 * x_num + 2 * y_num);
    lines.push(x_axis);
    lines.push(y_axis);

    // Copies of the Y axis shifted along base X: right, then left.
    for i in 1..=x_num {
        let offset = i as f64 * step_x * base_x;
        lines.push(Segment::line(y_axis.p0 + offset, y_axis.p1 + offset));
        lines.push(Segment::line(y_axis.p0 - offset, y_axis.p1 - offset));
    }

    // Copies of the X axis shifted along base Y: above, then below.
    for i in 1..=y_num {
        let offset = i as f64 * step_y * base_y;
        lines.push(Segment::line(x_axis.p0 + offset, x_axis.p1 + offset));
        lines.push(Segment::line(x_axis.p0 - offset, x_axis.p1 - offset));
    }

    debug!(x_num, y_num, total = lines.len(), "generated grid cut lines");

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Point3, Vector3};
    use proptest::prelude::*;

    fn frame() -> BasisFrame {
        BasisFrame::new(Point3::origin(), Vector3::x(), Vector3::y()).unwrap()
    }

    fn request(step_x: f64, step_y: f64, angle: RotationAngle, radius: f64) -> GridRequest {
        GridRequest {
            frame: frame(),
            step_x,
            step_y,
            angle,
            radius,
        }
    }

    #[test]
    fn emits_expected_cardinality() {
        // radius 5, steps 2 and 3: x_num = 3, y_num = 2.
        let lines = generate_grid_lines(&request(2.0, 3.0, RotationAngle::R0, 5.0)).unwrap();
        assert_eq!(lines.len(), 2 + 2 * 3 + 2 * 2);
    }

    #[test]
    fn zero_radius_emits_only_axes() {
        let lines = generate_grid_lines(&request(1.0, 1.0, RotationAngle::R0, 0.0)).unwrap();
        assert_eq!(lines.len(), 2, "no offsets fit in a zero radius");
    }

    #[test]
    fn endpoints_span_radius_along_own_axis() {
        let radius = 5.0;
        let origin = Point3::origin();
        let lines = generate_grid_lines(&request(2.0, 3.0, RotationAngle::R0, radius)).unwrap();

        for line in &lines {
            let dir = line.direction().unwrap();
            let d0 = (line.p0 - origin).dot(&dir).abs();
            let d1 = (line.p1 - origin).dot(&dir).abs();
            assert!(
                d0 <= radius + 1e-9 && d1 <= radius + 1e-9,
                "endpoints must stay within the radius along the line axis, got {} / {}",
                d0,
                d1
            );
            assert!((line.length() - 2.0 * radius).abs() < 1e-9);
        }
    }

    #[test]
    fn rejects_non_positive_steps() {
        assert!(matches!(
            generate_grid_lines(&request(0.0, 1.0, RotationAngle::R0, 5.0)),
            Err(PartError::NonPositiveStep { axis: "x", .. })
        ));
        assert!(matches!(
            generate_grid_lines(&request(1.0, -2.0, RotationAngle::R0, 5.0)),
            Err(PartError::NonPositiveStep { axis: "y", .. })
        ));
    }

    #[test]
    fn rejects_negative_radius() {
        assert!(matches!(
            generate_grid_lines(&request(1.0, 1.0, RotationAngle::R0, -1.0)),
            Err(PartError::NegativeRadius(_))
        ));
    }

    #[test]
    fn half_turn_matches_identity() {
        let lines_0 = generate_grid_lines(&request(2.0, 3.0, RotationAngle::R0, 5.0)).unwrap();
        let lines_180 = generate_grid_lines(&request(2.0, 3.0, RotationAngle::R180, 5.0)).unwrap();
        assert_eq!(lines_0, lines_180);
    }

    proptest! {
        #[test]
        fn cardinality_matches_formula(
            step_x in 0.05f64..10.0,
            step_y in 0.05f64..10.0,
            radius in 0.0f64..50.0,
        ) {
            let lines = generate_grid_lines(&request(step_x, step_y, RotationAngle::R0, radius)).unwrap();
            let expected = 2
                + 2 * (radius / step_x).ceil() as usize
                + 2 * (radius / step_y).ceil() as usize;
            prop_assert_eq!(lines.len(), expected);
        }

        #[test]
        fn quarter_turn_equals_swapped_steps(
            step_x in 0.05f64..10.0,
            step_y in 0.05f64..10.0,
            radius in 0.0f64..50.0,
        ) {
            let rotated =
                generate_grid_lines(&request(step_x, step_y, RotationAngle::R90, radius)).unwrap();
            let swapped =
                generate_grid_lines(&request(step_y, step_x, RotationAngle::R0, radius)).unwrap();
            prop_assert_eq!(rotated, swapped);

            let rotated_270 =
                generate_grid_lines(&request(step_x, step_y, RotationAngle::R270, radius)).unwrap();
            let swapped_180 =
                generate_grid_lines(&request(step_y, step_x, RotationAngle::R180, radius)).unwrap();
            prop_assert_eq!(rotated_270, swapped_180);
        }
    }
}
