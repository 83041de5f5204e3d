//! Builders for binary SHX test files.
//!
//! The builders write well-formed files; tests corrupt the returned bytes
//! to exercise error paths.

#![allow(dead_code)]

use byteorder::{LittleEndian, WriteBytesExt};
use shx_fonts::io::shx::{SHAPES_1_0_SIGNATURE, SHAPES_1_1_SIGNATURE, UNIFONT_1_0_SIGNATURE};

const SIGNATURE_BYTE: u8 = 0x1A;
const SHAPES_START_INDEX: usize = 0x17;
const UNIFONT_START_INDEX: usize = 0x18;

/// A compiled shape record: number, name and program bytes
#[derive(Debug, Clone)]
pub struct ShapeRecord {
    pub number: u16,
    pub name: String,
    pub program: Vec<u8>,
}

impl ShapeRecord {
    pub fn new(number: u16, name: &str, program: &[u8]) -> Self {
        Self {
            number,
            name: name.to_string(),
            program: program.to_vec(),
        }
    }

    /// Record size as stored in the file: name, NUL byte and program
    pub fn size(&self) -> u16 {
        (self.name.len() + 1 + self.program.len()) as u16
    }

    fn write_body(&self, data: &mut Vec<u8>) {
        data.extend_from_slice(self.name.as_bytes());
        data.push(0);
        data.extend_from_slice(&self.program);
    }
}

/// Minimal glyph set shared by all format tests: font definition shape 0
/// (above 10, below 2, horizontal) and shape `A` drawing a 5 unit line.
pub fn minimal_records() -> Vec<ShapeRecord> {
    vec![
        ShapeRecord::new(0, "MINIMAL", &[10, 2, 0, 0]),
        ShapeRecord::new(0x41, "kA", &[8, 5, 0, 0]),
    ]
}

/// Build an `AutoCAD-86 shapes 1.0` or `1.1` file
pub fn shapes_file(signature: &[u8], records: &[ShapeRecord]) -> Vec<u8> {
    let mut data = signature.to_vec();
    data.extend_from_slice(b"\r\n");
    data.resize(SHAPES_START_INDEX, 0);
    data.push(SIGNATURE_BYTE);

    let first = records.first().map_or(0, |r| r.number);
    let last = records.last().map_or(0, |r| r.number);
    data.write_u16::<LittleEndian>(first).unwrap();
    data.write_u16::<LittleEndian>(last).unwrap();
    data.write_u16::<LittleEndian>(records.len() as u16).unwrap();
    for record in records {
        data.write_u16::<LittleEndian>(record.number).unwrap();
        data.write_u16::<LittleEndian>(record.size()).unwrap();
    }
    for record in records {
        record.write_body(&mut data);
    }
    data.extend_from_slice(b"EOF");
    data
}

pub fn shapes_1_0_file(records: &[ShapeRecord]) -> Vec<u8> {
    shapes_file(SHAPES_1_0_SIGNATURE, records)
}

pub fn shapes_1_1_file(records: &[ShapeRecord]) -> Vec<u8> {
    shapes_file(SHAPES_1_1_SIGNATURE, records)
}

/// Build an `AutoCAD-86 unifont 1.0` file.
///
/// `params` are above, below, mode, encoding and embedding. A shape 0 in
/// `records` is skipped, the font definition record replaces it.
pub fn unifont_file(name: &str, params: [u8; 5], records: &[ShapeRecord]) -> Vec<u8> {
    let records: Vec<&ShapeRecord> = records.iter().filter(|r| r.number != 0).collect();
    let mut data = UNIFONT_1_0_SIGNATURE.to_vec();
    data.extend_from_slice(b"\r\n");
    data.resize(UNIFONT_START_INDEX, 0);
    data.push(SIGNATURE_BYTE);

    data.write_u16::<LittleEndian>(records.len() as u16 + 1).unwrap();
    data.write_u16::<LittleEndian>(0).unwrap();
    data.write_u16::<LittleEndian>((name.len() + 7) as u16).unwrap();
    data.extend_from_slice(name.as_bytes());
    data.push(0);
    data.extend_from_slice(&params);
    data.push(0);

    for record in records {
        data.write_u16::<LittleEndian>(record.number).unwrap();
        data.write_u16::<LittleEndian>(record.size()).unwrap();
        record.write_body(&mut data);
    }
    data
}

/// The minimal glyph set in all three binary formats
pub fn minimal_files() -> Vec<(&'static str, Vec<u8>)> {
    let records = minimal_records();
    vec![
        ("shapes 1.0", shapes_1_0_file(&records)),
        ("shapes 1.1", shapes_1_1_file(&records)),
        ("unifont 1.0", unifont_file("MINIMAL", [10, 2, 0, 0, 0], &records)),
    ]
}
