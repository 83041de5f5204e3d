//! Reader for the `AutoCAD-86 shapes 1.0` and `1.1` formats
//!
//! Layout after the signature: `0x1A`, first number, last number and shape
//! count (u16 each), an index table of `(shape_number, data_size)` pairs,
//! the shape records (NUL terminated name + program) and a literal `EOF`.

use super::byte_cursor::ByteCursor;
use super::shape_codes::{parse_shape_codes, SubShapeWidth};
use super::{structure_error, SIGNATURE_BYTE};
use crate::error::{Result, ShapeFileError};
use crate::font::{FontEmbedding, FontEncoding, FontMode, ShapeFile, Symbol};
use crate::io::ShapeReaderConfiguration;
use crate::notification::NotificationCollection;
use indexmap::IndexMap;

/// Offset of the signature byte behind the file header text
pub const SHAPES_START_INDEX: usize = 0x17;

/// Shape number of the font definition record
const FONT_DEFINITION_NUMBER: i32 = 0;

/// Load a `shapes 1.0` file; `1.1` files share the same layout.
pub fn load_shape_file(data: &[u8], config: &ShapeReaderConfiguration) -> Result<ShapeFile> {
    let mut notifications = NotificationCollection::new();
    let mut shapes = parse_shx_shapes(data, config, &mut notifications)?;

    let (above, below, mode) = match shapes.shift_remove(&FONT_DEFINITION_NUMBER) {
        Some(definition) => font_metrics(&definition)?,
        None => {
            notifications.warn("no font definition shape 0, font metrics default to 0");
            (0, 0, FontMode::Horizontal)
        }
    };

    let mut shape_file = ShapeFile::new(
        "",
        above,
        below,
        mode,
        FontEncoding::Unicode,
        FontEmbedding::Allowed,
    );
    for symbol in shapes.into_values() {
        shape_file.insert(symbol);
    }
    shape_file.notifications = notifications;
    Ok(shape_file)
}

/// First three values of shape 0 are above, below and text mode
fn font_metrics(definition: &Symbol) -> Result<(i32, i32, FontMode)> {
    match definition.data.as_slice() {
        [above, below, mode, ..] => {
            Ok((*above, *below, FontMode::try_from(*mode)?))
        }
        _ => Err(ShapeFileError::FileStructure(
            "font definition shape 0 is too short".to_string(),
        )),
    }
}

fn parse_shx_shapes(
    data: &[u8],
    config: &ShapeReaderConfiguration,
    notifications: &mut NotificationCollection,
) -> Result<IndexMap<i32, Symbol>> {
    let mut reader = ByteCursor::new(data, SHAPES_START_INDEX).with_encoding(config.encoding);
    let header = structure_error("incomplete file header");
    if reader.u8().map_err(&header)? != SIGNATURE_BYTE {
        return Err(ShapeFileError::FileStructure(
            "signature byte 0x1A not found".to_string(),
        ));
    }
    let first_number = reader.u16().map_err(&header)?;
    let last_number = reader.u16().map_err(&header)?;
    let shape_count = reader.u16().map_err(&header)?;

    let mut index_table = Vec::with_capacity(shape_count as usize);
    for _ in 0..shape_count {
        let shape_number = reader.u16().map_err(structure_error("incomplete index table"))?;
        let data_size = reader.u16().map_err(structure_error("incomplete index table"))?;
        index_table.push((shape_number, data_size));
    }
    match (index_table.first(), index_table.last()) {
        (Some(first), Some(last)) => {
            if first.0 != first_number {
                return Err(ShapeFileError::FileStructure(
                    "invalid first entry in index table".to_string(),
                ));
            }
            if last.0 != last_number {
                return Err(ShapeFileError::FileStructure(
                    "invalid last entry in index table".to_string(),
                ));
            }
        }
        _ => {
            return Err(ShapeFileError::FileStructure(
                "empty index table".to_string(),
            ))
        }
    }

    let mut shapes = IndexMap::new();
    for (shape_number, length) in index_table {
        let context = || format!("SHX parsing error shape *{:05X}", shape_number);
        let record = reader
            .read_bytes(length as usize)
            .map_err(structure_error(context()))?;
        let mut record_reader = ByteCursor::new(record, 0).with_encoding(config.encoding);
        let name = record_reader.read_str().map_err(structure_error(context()))?;
        let name_length = record_reader.position() - 1;
        let codes = parse_shape_codes(&mut record_reader, SubShapeWidth::Byte)
            .map_err(structure_error(context()))?;

        let number = shape_number as i32;
        let byte_count = length as i32 - name_length as i32 - 1;
        if shapes
            .insert(number, Symbol::new(number, byte_count, name, codes))
            .is_some()
        {
            notifications.warn(format!("shape *{:05X} redefined", shape_number));
        }
    }

    match reader.read_bytes(3) {
        Ok(b"EOF") => {}
        _ => {
            return Err(ShapeFileError::FileStructure(
                "EOF marker not found".to_string(),
            ))
        }
    }
    if reader.has_data() {
        notifications.warn(format!(
            "{} bytes after EOF marker ignored",
            reader.remaining()
        ));
    }
    Ok(shapes)
}
