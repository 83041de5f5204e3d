//! Opcodes of the shape bytecode
//!
//! Values above 15 are packed vectors: the high nibble is the length, the
//! low nibble the direction index.

pub const END_OF_SHAPE: i32 = 0;
pub const PEN_DOWN: i32 = 1;
pub const PEN_UP: i32 = 2;
pub const DIVIDE_VECTOR: i32 = 3;
pub const MULTIPLY_VECTOR: i32 = 4;
pub const PUSH_LOCATION: i32 = 5;
pub const POP_LOCATION: i32 = 6;
pub const SUB_SHAPE: i32 = 7;
pub const DISPLACEMENT: i32 = 8;
pub const MULTIPLE_DISPLACEMENTS: i32 = 9;
pub const OCTANT_ARC: i32 = 10;
pub const FRACTIONAL_ARC: i32 = 11;
pub const BULGE_ARC: i32 = 12;
pub const MULTIPLE_BULGE_ARCS: i32 = 13;
pub const VERTICAL_ONLY: i32 = 14;

/// Codes above this value are packed vectors
pub const LAST_COMMAND: i32 = 15;

/// Decode the octant specification of codes 10 and 11 into
/// `(start_octant, octant_span, ccw)`; a negative value means clockwise.
pub fn decode_octant_specs(specs: i32) -> (i32, i32, bool) {
    let ccw = specs >= 0;
    let specs = specs.unsigned_abs();
    (((specs >> 4) & 0xF) as i32, (specs & 0xF) as i32, ccw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_octant_specs() {
        assert_eq!(decode_octant_specs(5), (0, 5, true));
        assert_eq!(decode_octant_specs(-5), (0, 5, false));
        assert_eq!(decode_octant_specs(0x34), (3, 4, true));
        assert_eq!(decode_octant_specs(-0x34), (3, 4, false));
        assert_eq!(decode_octant_specs(0x20), (2, 0, true));
    }

    #[test]
    fn test_decode_octant_specs_extreme_values() {
        assert_eq!(decode_octant_specs(i32::MIN), (0, 0, false));
        assert_eq!(decode_octant_specs(i32::MAX), (0xF, 0xF, true));
    }
}
