//! Decoding of binary shape programs into opcode/operand sequences

use super::byte_cursor::ByteCursor;
use crate::error::Result;
use crate::font::codes::*;

/// Width of the sub-shape number operand of code 7
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubShapeWidth {
    /// 8-bit shape numbers of the `shapes 1.x` formats
    Byte,
    /// 16-bit shape numbers of the `unifont` format
    Word,
}

/// Read one program up to and including the terminating `0`.
///
/// Signed displacements and bulges use the [`ByteCursor::i8`] rule, octant
/// specifications the [`ByteCursor::octant`] rule.
pub fn parse_shape_codes(cursor: &mut ByteCursor<'_>, width: SubShapeWidth) -> Result<Vec<i32>> {
    let mut codes = Vec::new();
    loop {
        let code = cursor.u8()? as i32;
        codes.push(code);
        match code {
            END_OF_SHAPE => return Ok(codes),
            DIVIDE_VECTOR | MULTIPLY_VECTOR => codes.push(cursor.u8()? as i32),
            SUB_SHAPE => match width {
                SubShapeWidth::Byte => codes.push(cursor.u8()? as i32),
                SubShapeWidth::Word => codes.push(cursor.u16()? as i32),
            },
            DISPLACEMENT => {
                codes.push(cursor.i8()?);
                codes.push(cursor.i8()?);
            }
            MULTIPLE_DISPLACEMENTS => loop {
                let x = cursor.i8()?;
                let y = cursor.i8()?;
                codes.push(x);
                codes.push(y);
                if x == 0 && y == 0 {
                    break;
                }
            },
            OCTANT_ARC => {
                codes.push(cursor.u8()? as i32); // radius
                codes.push(cursor.octant()?);
            }
            FRACTIONAL_ARC => {
                codes.push(cursor.u8()? as i32); // start offset
                codes.push(cursor.u8()? as i32); // end offset
                codes.push(cursor.u8()? as i32); // radius hi
                codes.push(cursor.u8()? as i32); // radius lo
                codes.push(cursor.octant()?);
            }
            BULGE_ARC => {
                codes.push(cursor.i8()?); // x
                codes.push(cursor.i8()?); // y
                codes.push(cursor.i8()?); // bulge
            }
            MULTIPLE_BULGE_ARCS => loop {
                let x = cursor.i8()?;
                let y = cursor.i8()?;
                codes.push(x);
                codes.push(y);
                if x == 0 && y == 0 {
                    break;
                }
                codes.push(cursor.i8()?);
            },
            // pen up/down, push/pop, vertical flag and packed vectors
            _ => {}
        }
    }
}
