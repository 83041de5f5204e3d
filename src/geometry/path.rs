//! Append-only 2D path of line and circular arc segments

use super::arc::ConstructionArc;
use crate::types::{BoundingBox2D, Vector2};
use std::f64::consts::{FRAC_PI_2, TAU};

/// Smallest angle step used when flattening arcs.
const MIN_FLATTENING_STEP: f64 = 0.5_f64 * (std::f64::consts::PI / 180.0);

/// A single path command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    /// Start a new sub-path at the given location
    MoveTo(Vector2),
    /// Straight line from the current end point
    LineTo(Vector2),
    /// Circular arc from the current end point to `end`.
    ///
    /// `sweep_angle` is signed: positive values run counter-clockwise.
    ArcTo {
        end: Vector2,
        center: Vector2,
        radius: f64,
        start_angle: f64,
        sweep_angle: f64,
    },
}

impl PathSegment {
    /// End point of the segment
    pub fn end(&self) -> Vector2 {
        match self {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => *p,
            PathSegment::ArcTo { end, .. } => *end,
        }
    }
}

/// Ordered sequence of path commands with a single current end point.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    start: Vector2,
    segments: Vec<PathSegment>,
}

impl Path {
    /// Create an empty path starting at `start`
    pub fn new(start: Vector2) -> Self {
        Path {
            start,
            segments: Vec::new(),
        }
    }

    pub fn start(&self) -> Vector2 {
        self.start
    }

    /// Current end point, the start point for an empty path
    pub fn end(&self) -> Vector2 {
        self.segments.last().map_or(self.start, PathSegment::end)
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of sub-paths that contain drawing commands
    pub fn sub_path_count(&self) -> usize {
        self.flattening(f64::INFINITY).len()
    }

    /// Start a new sub-path at `location`.
    ///
    /// As first command this resets the start point; consecutive move-to
    /// commands collapse into the last one.
    pub fn move_to(&mut self, location: Vector2) {
        match self.segments.last_mut() {
            None => self.start = location,
            Some(PathSegment::MoveTo(p)) => *p = location,
            Some(_) => self.segments.push(PathSegment::MoveTo(location)),
        }
    }

    /// Draw a straight line from the current end point to `location`
    pub fn line_to(&mut self, location: Vector2) {
        self.segments.push(PathSegment::LineTo(location));
    }

    /// Append `arc` to the path.
    ///
    /// When the current end point coincides with the counter-clockwise end
    /// point of the arc, the arc is appended in reverse (clockwise). Otherwise
    /// a connecting line to the arc start point is drawn if required.
    pub fn append_arc(&mut self, arc: &ConstructionArc) {
        if arc.is_empty() {
            return;
        }
        let sweep = arc.sweep_angle();
        let start = arc.start_point();
        let end = arc.end_point();
        let current = self.end();
        if current.is_close(&end) {
            self.segments.push(PathSegment::ArcTo {
                end: start,
                center: arc.center,
                radius: arc.radius,
                start_angle: arc.end_angle,
                sweep_angle: -sweep,
            });
            return;
        }
        if !current.is_close(&start) {
            self.line_to(start);
        }
        self.segments.push(PathSegment::ArcTo {
            end,
            center: arc.center,
            radius: arc.radius,
            start_angle: arc.start_angle,
            sweep_angle: sweep,
        });
    }

    /// Approximate the path by polylines, one per sub-path.
    ///
    /// Arc segments are split so that no chord deviates more than
    /// `max_sagitta` from the arc.
    pub fn flattening(&self, max_sagitta: f64) -> Vec<Vec<Vector2>> {
        let mut polylines = Vec::new();
        let mut current = vec![self.start];
        for segment in &self.segments {
            match *segment {
                PathSegment::MoveTo(p) => {
                    if current.len() > 1 {
                        polylines.push(std::mem::take(&mut current));
                    }
                    current = vec![p];
                }
                PathSegment::LineTo(p) => current.push(p),
                PathSegment::ArcTo {
                    end,
                    center,
                    radius,
                    start_angle,
                    sweep_angle,
                } => {
                    let count = arc_segment_count(radius, sweep_angle, max_sagitta);
                    let step = sweep_angle / count as f64;
                    for i in 1..count {
                        let angle = start_angle + step * i as f64;
                        current.push(center + Vector2::from_angle(angle, radius));
                    }
                    current.push(end);
                }
            }
        }
        if current.len() > 1 {
            polylines.push(current);
        }
        polylines
    }

    /// Exact bounding box of all drawn and moved-to geometry
    pub fn bounding_box(&self) -> BoundingBox2D {
        let mut bbox = BoundingBox2D::from_point(self.start);
        for segment in &self.segments {
            bbox.expand_to_include(segment.end());
            if let PathSegment::ArcTo {
                center,
                radius,
                start_angle,
                sweep_angle,
                ..
            } = *segment
            {
                for k in 0..4 {
                    let angle = k as f64 * FRAC_PI_2;
                    if arc_contains_angle(start_angle, sweep_angle, angle) {
                        bbox.expand_to_include(center + Vector2::from_angle(angle, radius));
                    }
                }
            }
        }
        bbox
    }
}

fn arc_segment_count(radius: f64, sweep_angle: f64, max_sagitta: f64) -> usize {
    let ratio = if radius > 0.0 {
        (max_sagitta / radius).clamp(0.0, 1.0)
    } else {
        1.0
    };
    let step = (2.0 * (1.0 - ratio).acos()).max(MIN_FLATTENING_STEP);
    ((sweep_angle.abs() / step).ceil() as usize).max(1)
}

fn arc_contains_angle(start_angle: f64, sweep_angle: f64, angle: f64) -> bool {
    let delta = if sweep_angle >= 0.0 {
        (angle - start_angle).rem_euclid(TAU)
    } else {
        (start_angle - angle).rem_euclid(TAU)
    };
    delta <= sweep_angle.abs()
}
