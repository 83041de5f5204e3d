//! SHP shape definition text files
//!
//! ```text
//! ; font definition
//! *UNIFONT,6,ISO3098
//! 21,7,0,0,0,0
//! *00041,8,kA
//! 1,024,043,04D,02C,2,047,1,040,2,0E8,0
//! ```
//!
//! Shape numbers are hexadecimal when the digit after `*` is `0`; data
//! values are hexadecimal when they start with `0` (or `-0`).

mod lines;
mod tokens;

pub use lines::{filter_noise, merge_lines, parse_string_records};
pub use tokens::{parse_code, parse_int, parse_shape_number};

use crate::error::{Result, ShapeFileError};
use crate::font::{FontEmbedding, FontEncoding, FontMode, ShapeFile, Symbol};
use crate::notification::NotificationCollection;

const UNIFONT_RECORD: &str = "*UNIFONT";
const FONT_RECORD: &str = "*0";

/// Load a SHP file from text
pub fn shp_loads(text: &str) -> Result<ShapeFile> {
    let mut notifications = NotificationCollection::new();
    let lines = merge_lines(filter_noise(text));
    let mut records = parse_string_records(&lines, &mut notifications)?;

    let definition = records
        .shift_remove(UNIFONT_RECORD)
        .or_else(|| records.shift_remove(FONT_RECORD))
        .unwrap_or_else(|| {
            // a plain shape file without name, numbers are decimal
            notifications.warn("no font definition record, loaded as shape file");
            vec!["_,_,_".to_string(), String::new()]
        });

    let mut shape_file = parse_font_definition(&definition)?;
    shape_file.notifications = notifications;
    parse_shape_records(records.into_values(), &mut shape_file)?;
    Ok(shape_file)
}

/// Create the [`ShapeFile`] from a `*UNIFONT` or `*0` record.
///
/// Any other record header yields a plain shape file.
fn parse_font_definition(record: &[String]) -> Result<ShapeFile> {
    let (header, params) = match record {
        [header, params] => (header, params),
        _ => {
            return Err(ShapeFileError::InvalidFontDefinition(record.join(" | ")));
        }
    };
    // second header value is the byte count, unused
    let (spec, name) = match header.splitn(3, ',').collect::<Vec<_>>().as_slice() {
        [spec, _, name] => (spec.trim(), name.trim()),
        _ => return Err(ShapeFileError::InvalidFontDefinition(header.clone())),
    };

    let invalid = || ShapeFileError::InvalidFontParameters(params.clone());
    let values: Vec<&str> = params.split(',').collect();
    let (above, below, mode, encoding, embedding, end) = match spec {
        UNIFONT_RECORD => match values.as_slice() {
            [above, below, mode, encoding, embedding, end] => (
                font_parameter(above, params)?,
                font_parameter(below, params)?,
                font_parameter(mode, params)?,
                font_parameter(encoding, params)?,
                font_parameter(embedding, params)?,
                font_parameter(end, params)?,
            ),
            _ => return Err(invalid()),
        },
        FONT_RECORD => match values.as_slice() {
            [above, below, mode, .., end] => (
                font_parameter(above, params)?,
                font_parameter(below, params)?,
                font_parameter(mode, params)?,
                FontEncoding::Unicode.to_code(),
                FontEmbedding::Allowed.to_code(),
                font_parameter(end, params)?,
            ),
            _ => return Err(invalid()),
        },
        _ => (
            0,
            0,
            FontMode::Horizontal.to_code(),
            FontEncoding::ShapeFileOnly.to_code(),
            FontEmbedding::Allowed.to_code(),
            0,
        ),
    };
    if end != 0 {
        return Err(invalid());
    }

    Ok(ShapeFile::new(
        name,
        above,
        below,
        FontMode::from_code(mode).ok_or_else(invalid)?,
        FontEncoding::from_code(encoding).ok_or_else(invalid)?,
        FontEmbedding::from_code(embedding).ok_or_else(invalid)?,
    ))
}

fn font_parameter(value: &str, params: &str) -> Result<i32> {
    value
        .trim()
        .parse()
        .map_err(|_| ShapeFileError::InvalidFontParameters(params.to_string()))
}

fn parse_shape_records(
    records: impl IntoIterator<Item = Vec<String>>,
    shape_file: &mut ShapeFile,
) -> Result<()> {
    for record in records {
        let symbol = parse_shape_record(&record)?;
        let number = symbol.number;
        if shape_file.insert(symbol).is_some() {
            shape_file
                .notifications
                .warn(format!("shape number {} redefined", number));
        }
    }
    Ok(())
}

fn parse_shape_record(record: &[String]) -> Result<Symbol> {
    if record.len() < 2 {
        return Err(ShapeFileError::InvalidShapeRecord(record.join(" | ")));
    }
    let header = &record[0];
    let (number, byte_count, name) = match header
        .splitn(3, ',')
        .map(str::trim)
        .collect::<Vec<_>>()
        .as_slice()
    {
        [number, byte_count, name] if number.len() > 1 => {
            (parse_shape_number(number)?, parse_int(byte_count, 10)?, name.to_string())
        }
        _ => return Err(ShapeFileError::FileStructure(header.clone())),
    };

    let data = record[1..].concat();
    let mut codes = Vec::new();
    for token in data.split(',') {
        if let Some(code) = parse_code(token)? {
            codes.push(code);
        }
    }
    if codes.last() != Some(&0) {
        return Err(ShapeFileError::FileStructure(format!(
            "file structure error at symbol <{}>",
            header
        )));
    }
    Ok(Symbol::new(number, byte_count, name, codes))
}

/// Write a shape file as SHP text.
///
/// Fonts get a `*UNIFONT` definition record, plain shape files are written
/// without definition record.
pub fn shp_dumps(shape_file: &ShapeFile) -> String {
    let mut lines = Vec::new();
    if shape_file.is_font() {
        lines.push(format!("{},6,{}", UNIFONT_RECORD, shape_file.name));
        lines.push(format!(
            "{},{},{},{},{},0",
            shape_file.above,
            shape_file.below,
            shape_file.mode.to_code(),
            shape_file.encoding.to_code(),
            shape_file.embedding.to_code()
        ));
    }
    for symbol in shape_file.symbols() {
        lines.extend(symbol.export_str(None));
    }
    let mut text = lines.join("\n");
    text.push('\n');
    text
}
