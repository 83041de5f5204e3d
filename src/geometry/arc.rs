//! Circular arc construction and bulge conversion

use crate::types::Vector2;
use std::f64::consts::{FRAC_PI_2, TAU};

/// Angle differences below this value are treated as zero.
const ANGLE_EPSILON: f64 = 1e-12;

/// A circular arc that always runs counter-clockwise from `start_angle`
/// to `end_angle` (radians).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstructionArc {
    pub center: Vector2,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl ConstructionArc {
    /// Create an arc from `start_angle` to `end_angle`.
    ///
    /// A clockwise arc (`ccw == false`) is stored with swapped angles, so
    /// its [`start_point`](Self::start_point) is the point at `end_angle`.
    pub fn new(center: Vector2, radius: f64, start_angle: f64, end_angle: f64, ccw: bool) -> Self {
        let (start_angle, end_angle) = if ccw {
            (start_angle, end_angle)
        } else {
            (end_angle, start_angle)
        };
        ConstructionArc {
            center,
            radius,
            start_angle,
            end_angle,
        }
    }

    /// Counter-clockwise sweep in radians, in the range `[0, 2π]`.
    ///
    /// A zero angle difference is an empty arc, a non-zero multiple of 2π
    /// is a full circle.
    pub fn sweep_angle(&self) -> f64 {
        let diff = self.end_angle - self.start_angle;
        if diff.abs() < ANGLE_EPSILON {
            return 0.0;
        }
        let sweep = diff.rem_euclid(TAU);
        if sweep < ANGLE_EPSILON {
            TAU
        } else {
            sweep
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sweep_angle() == 0.0 || self.radius <= 0.0
    }

    /// Point on the circle at `angle`
    pub fn point_at(&self, angle: f64) -> Vector2 {
        self.center + Vector2::from_angle(angle, self.radius)
    }

    pub fn start_point(&self) -> Vector2 {
        self.point_at(self.start_angle)
    }

    pub fn end_point(&self) -> Vector2 {
        self.point_at(self.end_angle)
    }

    /// Move the arc by `offset`
    pub fn translate(&mut self, offset: Vector2) {
        self.center += offset;
    }
}

/// Radius of the arc defined by a chord and a bulge value, negative for
/// negative bulge values.
pub fn signed_bulge_radius(start_point: Vector2, end_point: Vector2, bulge: f64) -> f64 {
    start_point.distance(&end_point) * (1.0 + bulge * bulge) / 4.0 / bulge
}

/// Convert a chord and bulge value into `(center, start_angle, end_angle, radius)`.
///
/// The returned angles describe a counter-clockwise arc.
pub fn bulge_to_arc(start_point: Vector2, end_point: Vector2, bulge: f64) -> (Vector2, f64, f64, f64) {
    let r = signed_bulge_radius(start_point, end_point, bulge);
    let a = start_point.angle_to(&end_point) + (FRAC_PI_2 - bulge.atan() * 2.0);
    let c = start_point + Vector2::from_angle(a, r);
    if bulge < 0.0 {
        (c, c.angle_to(&end_point), c.angle_to(&start_point), r.abs())
    } else {
        (c, c.angle_to(&start_point), c.angle_to(&end_point), r.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::is_close;
    use std::f64::consts::PI;

    #[test]
    fn test_ccw_arc_endpoints() {
        let arc = ConstructionArc::new(Vector2::ZERO, 5.0, 0.0, FRAC_PI_2, true);
        assert!(arc.start_point().is_close(&Vector2::new(5.0, 0.0)));
        assert!(arc.end_point().is_close(&Vector2::new(0.0, 5.0)));
        assert!(is_close(arc.sweep_angle(), FRAC_PI_2));
    }

    #[test]
    fn test_cw_arc_swaps_angles() {
        let arc = ConstructionArc::new(Vector2::ZERO, 1.0, 0.0, -FRAC_PI_2, false);
        assert!(arc.start_point().is_close(&Vector2::new(0.0, -1.0)));
        assert!(arc.end_point().is_close(&Vector2::new(1.0, 0.0)));
        assert!(is_close(arc.sweep_angle(), FRAC_PI_2));
    }

    #[test]
    fn test_full_circle() {
        let arc = ConstructionArc::new(Vector2::ZERO, 1.0, PI, PI + TAU, true);
        assert!(is_close(arc.sweep_angle(), TAU));
        let arc = ConstructionArc::new(Vector2::ZERO, 1.0, PI, PI - TAU, false);
        assert!(is_close(arc.sweep_angle(), TAU));
    }

    #[test]
    fn test_empty_arc() {
        let arc = ConstructionArc::new(Vector2::ZERO, 1.0, 1.0, 1.0, true);
        assert!(arc.is_empty());
        let arc = ConstructionArc::new(Vector2::ZERO, 0.0, 0.0, 1.0, true);
        assert!(arc.is_empty());
    }

    #[test]
    fn test_translate() {
        let mut arc = ConstructionArc::new(Vector2::ZERO, 1.0, 0.0, PI, true);
        arc.translate(Vector2::new(2.0, 3.0));
        assert!(arc.start_point().is_close(&Vector2::new(3.0, 3.0)));
    }

    #[test]
    fn test_bulge_to_arc_semicircle() {
        let (center, start, end, radius) =
            bulge_to_arc(Vector2::ZERO, Vector2::new(2.0, 0.0), 1.0);
        assert!(center.is_close(&Vector2::new(1.0, 0.0)));
        assert!(is_close(radius, 1.0));
        assert!(is_close(start, PI));
        assert!(is_close(end, 0.0));
    }

    #[test]
    fn test_bulge_to_arc_negative_bulge_swaps_angles() {
        let (center, start, end, radius) =
            bulge_to_arc(Vector2::ZERO, Vector2::new(2.0, 0.0), -1.0);
        assert!(center.is_close(&Vector2::new(1.0, 0.0)));
        assert!(is_close(radius, 1.0));
        assert!(is_close(start, 0.0));
        assert!(is_close(end, PI));
    }

    #[test]
    fn test_signed_bulge_radius() {
        let r = signed_bulge_radius(Vector2::ZERO, Vector2::new(2.0, 0.0), -1.0);
        assert!(is_close(r, -1.0));
    }
}
