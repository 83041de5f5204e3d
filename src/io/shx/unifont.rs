//! Reader for the `AutoCAD-86 unifont 1.0` format
//!
//! Unlike the `shapes 1.x` formats there is no index table: a font
//! definition record follows the signature and every shape record carries
//! its own number and length.

use super::byte_cursor::ByteCursor;
use super::shape_codes::{parse_shape_codes, SubShapeWidth};
use super::{structure_error, SIGNATURE_BYTE};
use crate::error::{Result, ShapeFileError};
use crate::font::{FontEmbedding, FontEncoding, FontMode, ShapeFile, Symbol};
use crate::io::ShapeReaderConfiguration;

/// Offset of the signature byte behind the file header text
pub const UNIFONT_START_INDEX: usize = 0x18;

/// Load a `unifont 1.0` file
pub fn load_unifont_file(data: &[u8], config: &ShapeReaderConfiguration) -> Result<ShapeFile> {
    let mut reader = ByteCursor::new(data, UNIFONT_START_INDEX).with_encoding(config.encoding);
    let mut shape_file = parse_unifont_definition(&mut reader)?;
    parse_unifont_shapes(&mut reader, &mut shape_file)
        .map_err(structure_error("pre-mature end of file"))?;
    Ok(shape_file)
}

fn parse_unifont_definition(reader: &mut ByteCursor<'_>) -> Result<ShapeFile> {
    let header = structure_error("incomplete font definition");
    if reader.u8().map_err(&header)? != SIGNATURE_BYTE {
        return Err(ShapeFileError::FileStructure(
            "signature byte 0x1A not found".to_string(),
        ));
    }
    // u16 record count, u16 reserved, u16 size of the definition record
    reader.skip(6).map_err(&header)?;

    let name = reader.read_str().map_err(&header)?;
    let above = reader.u8().map_err(&header)? as i32;
    let below = reader.u8().map_err(&header)? as i32;
    let mode = reader.u8().map_err(&header)? as i32;
    let encoding = reader.u8().map_err(&header)? as i32;
    let embedding = reader.u8().map_err(&header)? as i32;
    // end of font definition
    reader.skip(1).map_err(&header)?;

    Ok(ShapeFile::new(
        name,
        above,
        below,
        FontMode::try_from(mode)?,
        FontEncoding::try_from(encoding)?,
        FontEmbedding::try_from(embedding)?,
    ))
}

fn parse_unifont_shapes(reader: &mut ByteCursor<'_>, shape_file: &mut ShapeFile) -> Result<()> {
    while reader.has_data() {
        let shape_number = reader.u16()?;
        let declared_count = reader.u16()? as usize;
        let start = reader.position();
        let name = reader.read_str()?;
        let name_length = reader.position() - start - 1;
        let byte_count = declared_count
            .checked_sub(name_length + 1)
            .ok_or_else(|| {
                ShapeFileError::FileStructure(format!(
                    "record size of shape *{:05X} is smaller than its name",
                    shape_number
                ))
            })?;
        let record = reader.read_bytes(byte_count)?;
        let codes = parse_shape_codes(&mut ByteCursor::new(record, 0), SubShapeWidth::Word)?;

        let number = shape_number as i32;
        let symbol = Symbol::new(number, byte_count as i32, name, codes);
        if shape_file.insert(symbol).is_some() {
            shape_file
                .notifications
                .warn(format!("shape *{:05X} redefined", shape_number));
        }
    }
    Ok(())
}
