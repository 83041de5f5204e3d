//! Interpreter of the shape bytecode
//!
//! One [`ShapeRenderer`] owns the render state of a render call: the pen
//! state, the vector length, the location stack and the output path. A
//! sub-shape (code 7) is rendered by the same instance, so position, pen
//! state and scale set by the sub-shape carry over to the calling shape.

use super::RenderConfiguration;
use crate::error::{Result, ShapeFileError};
use crate::font::codes::*;
use crate::font::CodeSource;
use crate::geometry::{bulge_to_arc, ConstructionArc, Path};
use crate::notification::NotificationCollection;
use crate::types::{is_close, Vector2};

/// Unit vectors of the 16 directions of packed vector codes.
///
/// Diagonal directions are not normalized: direction 1 is `(1, 0.5)`.
//                        0,   1,   2,   3,   4,    5,    6,    7,    8,    9,    A,    B,   C,   D,   E,    F
const VEC_X: [f64; 16] = [1.0, 1.0, 1.0, 0.5, 0.0, -0.5, -1.0, -1.0, -1.0, -1.0, -1.0, -0.5, 0.0, 0.5, 1.0, 1.0];
const VEC_Y: [f64; 16] = [0.0, 0.5, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 0.0, -0.5, -1.0, -1.0, -1.0, -1.0, -1.0, -0.5];

/// Angle unit of the start and end offsets of code 11: 1/256 of an octant
const FRACTIONAL_ARC_UNIT: f64 = 45.0 / 256.0;

/// Bulge values are stored as multiples of 1/127
const BULGE_SCALE: f64 = 127.0;

pub struct ShapeRenderer<'a, S: CodeSource + ?Sized> {
    path: Path,
    source: &'a S,
    vector_length: f64,
    pen_down: bool,
    /// Vertical (stacked) text, code 14 has no effect
    stacked: bool,
    location_stack: Vec<Vector2>,
    baseline_y: f64,
    depth: usize,
    max_depth: usize,
    notifications: NotificationCollection,
}

impl<'a, S: CodeSource + ?Sized> ShapeRenderer<'a, S> {
    /// Create a renderer appending to `path`
    pub fn new(path: Path, source: &'a S, config: &RenderConfiguration) -> Self {
        let baseline_y = path.start().y;
        ShapeRenderer {
            path,
            source,
            vector_length: config.vector_length,
            pen_down: true,
            stacked: config.stacked,
            location_stack: Vec::new(),
            baseline_y,
            depth: 0,
            max_depth: config.max_subshape_depth,
            notifications: NotificationCollection::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_path(self) -> Path {
        self.path
    }

    pub fn current_location(&self) -> Vector2 {
        self.path.end()
    }

    pub fn vector_length(&self) -> f64 {
        self.vector_length
    }

    pub fn is_pen_down(&self) -> bool {
        self.pen_down
    }

    /// Number of locations on the location stack
    pub fn stack_depth(&self) -> usize {
        self.location_stack.len()
    }

    pub fn notifications(&self) -> &NotificationCollection {
        &self.notifications
    }

    /// Render shape `shape_number`; unknown shapes render nothing.
    ///
    /// The pen is put down on entry. With `reset_to_baseline` the pen is moved
    /// back to the vertical start position afterwards, this compensates the
    /// inaccuracy of fractional arcs (code 11) in text rendering.
    pub fn render(&mut self, shape_number: i32, reset_to_baseline: bool) -> Result<()> {
        self.pen_down = true;
        let source = self.source;
        self.execute(shape_number, source.get_codes(shape_number))?;

        if reset_to_baseline {
            let end = self.path.end();
            if !is_close(end.y, self.baseline_y) {
                self.path.move_to(Vector2::new(end.x, self.baseline_y));
            }
        }
        Ok(())
    }

    fn execute(&mut self, shape_number: i32, codes: &[i32]) -> Result<()> {
        let mut index = 0;
        let mut skip_next = false;
        while index < codes.len() {
            let code = codes[index];
            index += 1;
            let operand = |i: usize| {
                codes
                    .get(i)
                    .copied()
                    .ok_or(ShapeFileError::TruncatedProgram { shape_number, code })
            };
            match code {
                vector if vector > LAST_COMMAND => {
                    if !skip_next {
                        self.draw_vector(vector);
                    }
                }
                END_OF_SHAPE => break,
                PEN_DOWN => {
                    if !skip_next {
                        self.pen_down = true;
                    }
                }
                PEN_UP => {
                    if !skip_next {
                        self.pen_down = false;
                    }
                }
                DIVIDE_VECTOR | MULTIPLY_VECTOR => {
                    let factor = operand(index)?;
                    index += 1;
                    if !skip_next {
                        if code == MULTIPLY_VECTOR {
                            self.vector_length *= factor as f64;
                        } else if factor == 0 {
                            return Err(ShapeFileError::InvalidScaleFactor { shape_number });
                        } else {
                            self.vector_length /= factor as f64;
                        }
                    }
                }
                PUSH_LOCATION => {
                    if !skip_next {
                        self.location_stack.push(self.path.end());
                    }
                }
                POP_LOCATION => {
                    if !skip_next {
                        let location = self
                            .location_stack
                            .pop()
                            .ok_or(ShapeFileError::StackUnderflow { shape_number })?;
                        self.path.move_to(location);
                    }
                }
                SUB_SHAPE => {
                    let sub_shape_number = operand(index)?;
                    index += 1;
                    if !skip_next {
                        self.render_sub_shape(shape_number, sub_shape_number)?;
                    }
                }
                DISPLACEMENT => {
                    let x = operand(index)?;
                    let y = operand(index + 1)?;
                    index += 2;
                    if !skip_next {
                        self.draw_displacement(x as f64, y as f64);
                    }
                }
                MULTIPLE_DISPLACEMENTS => loop {
                    let x = operand(index)?;
                    let y = operand(index + 1)?;
                    index += 2;
                    if x == 0 && y == 0 {
                        break;
                    }
                    if !skip_next {
                        self.draw_displacement(x as f64, y as f64);
                    }
                },
                OCTANT_ARC => {
                    let radius = operand(index)?;
                    let (start_octant, octant_span, ccw) = decode_octant_specs(operand(index + 1)?);
                    index += 2;
                    // span 0 is a full circle
                    let octant_span = if octant_span == 0 { 8 } else { octant_span };
                    if !skip_next {
                        self.draw_arc_span(
                            radius as f64 * self.vector_length,
                            ((start_octant * 45) as f64).to_radians(),
                            ((octant_span * 45) as f64).to_radians(),
                            ccw,
                        );
                    }
                }
                FRACTIONAL_ARC => {
                    let start_offset = operand(index)?;
                    let end_offset = operand(index + 1)?;
                    // text programs may hold radius bytes above 255
                    let radius = operand(index + 2)? as i64 * 256 + operand(index + 3)? as i64;
                    let (start_octant, octant_span, ccw) = decode_octant_specs(operand(index + 4)?);
                    index += 5;
                    let end_offset = if end_offset == 0 { 256 } else { end_offset };
                    let start_offset_angle = start_offset as f64 * FRACTIONAL_ARC_UNIT;
                    let end_offset_angle = end_offset as f64 * FRACTIONAL_ARC_UNIT;
                    let (start_angle, end_angle) = if ccw {
                        let end_octant = start_octant + octant_span - 1;
                        (
                            start_octant as f64 * 45.0 + start_offset_angle,
                            end_octant as f64 * 45.0 + end_offset_angle,
                        )
                    } else {
                        let end_octant = start_octant - octant_span + 1;
                        (
                            start_octant as f64 * 45.0 - start_offset_angle,
                            end_octant as f64 * 45.0 - end_offset_angle,
                        )
                    };
                    if !skip_next {
                        self.draw_arc_start_to_end(
                            radius as f64 * self.vector_length,
                            start_angle.to_radians(),
                            end_angle.to_radians(),
                            ccw,
                        );
                    }
                }
                BULGE_ARC => {
                    let x = operand(index)?;
                    let y = operand(index + 1)?;
                    let bulge = operand(index + 2)?;
                    index += 3;
                    if !skip_next {
                        self.draw_bulge(x as f64, y as f64, bulge as f64);
                    }
                }
                MULTIPLE_BULGE_ARCS => loop {
                    let x = operand(index)?;
                    let y = operand(index + 1)?;
                    if x == 0 && y == 0 {
                        index += 2;
                        break;
                    }
                    let bulge = operand(index + 2)?;
                    index += 3;
                    if !skip_next {
                        self.draw_bulge(x as f64, y as f64, bulge as f64);
                    }
                },
                VERTICAL_ONLY => {
                    if !self.stacked {
                        // skip the next command, its operands are still consumed
                        skip_next = true;
                        continue;
                    }
                }
                _ => {}
            }
            skip_next = false;
        }
        Ok(())
    }

    fn render_sub_shape(&mut self, shape_number: i32, sub_shape_number: i32) -> Result<()> {
        if self.depth >= self.max_depth {
            return Err(ShapeFileError::RecursionLimit {
                shape_number: sub_shape_number,
                depth: self.max_depth,
            });
        }
        if self.source.get_codes(sub_shape_number).is_empty() {
            self.notifications.warn(format!(
                "shape {} references unknown sub-shape {}",
                shape_number, sub_shape_number
            ));
        }
        self.depth += 1;
        let result = self.render(sub_shape_number, false);
        self.depth -= 1;
        result
    }

    fn draw_vector(&mut self, code: i32) {
        let angle = (code & 0xF) as usize;
        let length = ((code >> 4) & 0xF) as f64;
        self.draw_displacement(VEC_X[angle] * length, VEC_Y[angle] * length);
    }

    fn draw_displacement(&mut self, x: f64, y: f64) {
        let scale = self.vector_length;
        let target = self.path.end() + Vector2::new(x * scale, y * scale);
        if self.pen_down {
            self.path.line_to(target);
        } else {
            self.path.move_to(target);
        }
    }

    /// `radius` has to be scaled by the vector length
    fn draw_arc_span(&mut self, radius: f64, start_angle: f64, span_angle: f64, ccw: bool) {
        let end_angle = start_angle + if ccw { span_angle } else { -span_angle };
        self.draw_arc_start_to_end(radius, start_angle, end_angle, ccw);
    }

    /// Draw an arc whose directional start point is the current location.
    fn draw_arc_start_to_end(&mut self, radius: f64, start_angle: f64, end_angle: f64, ccw: bool) {
        if radius <= 0.0 {
            return;
        }
        let mut arc = ConstructionArc::new(Vector2::ZERO, radius, start_angle, end_angle, ccw);
        // a clockwise arc is stored reversed, its directional start is the end point
        let anchor = if ccw { arc.start_point() } else { arc.end_point() };
        arc.translate(self.path.end() - anchor);
        if self.pen_down {
            self.path.append_arc(&arc);
        } else {
            self.path
                .move_to(if ccw { arc.end_point() } else { arc.start_point() });
        }
    }

    /// Bulge arcs are constructed counter-clockwise in any case, a clockwise
    /// arc swaps its chord end points instead.
    fn draw_bulge(&mut self, x: f64, y: f64, bulge: f64) {
        if !self.pen_down || bulge == 0.0 {
            self.draw_displacement(x, y);
            return;
        }
        let start_point = self.path.end();
        let scale = self.vector_length;
        let end_point = start_point + Vector2::new(x * scale, y * scale);
        let fraction = bulge.abs() / BULGE_SCALE;
        let (center, start_angle, end_angle, radius) = if bulge > 0.0 {
            bulge_to_arc(start_point, end_point, fraction)
        } else {
            bulge_to_arc(end_point, start_point, fraction)
        };
        self.path
            .append_arc(&ConstructionArc::new(center, radius, start_angle, end_angle, true));
    }
}
