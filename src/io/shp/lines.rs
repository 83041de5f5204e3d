//! Line level processing of SHP text: comments, continuation lines and
//! grouping into records.

use crate::error::{Result, ShapeFileError};
use crate::notification::NotificationCollection;
use indexmap::IndexMap;

/// Strip whitespace, blank lines and `;` comments.
pub fn filter_noise(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').filter_map(|line| {
        let line = line.trim();
        let line = line.split(';').next().unwrap_or_default().trim();
        if line.is_empty() {
            None
        } else {
            Some(line)
        }
    })
}

/// Merge wrapped lines into the line they continue.
///
/// A header line (`*...`) absorbs following lines starting with `,`; a data
/// line absorbs the next line if it ends with `,` or the next line starts
/// with `,`.
pub fn merge_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut merged = Vec::new();
    let mut current = String::new();
    for next_line in lines {
        let merge = if current.is_empty() {
            true
        } else if current.starts_with('*') {
            next_line.starts_with(',')
        } else {
            current.ends_with(',') || next_line.starts_with(',')
        };
        if !merge {
            merged.push(std::mem::take(&mut current));
        }
        current.push_str(next_line);
    }
    if !current.is_empty() {
        merged.push(current);
    }
    merged
}

/// Group lines into records keyed by the header token before the first comma.
///
/// A later record with the same key replaces the earlier one but keeps its
/// position.
pub fn parse_string_records(
    lines: &[String],
    notifications: &mut NotificationCollection,
) -> Result<IndexMap<String, Vec<String>>> {
    let mut records: IndexMap<String, Vec<String>> = IndexMap::new();
    let mut name: Option<String> = None;
    let mut record: Vec<String> = Vec::new();
    let mut orphans = 0;

    for line in lines {
        if line.starts_with("*BIGFONT") {
            return Err(ShapeFileError::UnsupportedShapeFile(
                "BIGFONT shape files are not supported yet".to_string(),
            ));
        }
        if line.starts_with('*') {
            if let Some(name) = name.take() {
                store_record(&mut records, name, std::mem::take(&mut record), notifications);
            }
            name = Some(line.split(',').next().unwrap_or_default().trim().to_string());
            record = vec![line.clone()];
        } else if name.is_some() {
            record.push(line.clone());
        } else {
            orphans += 1;
        }
    }
    if let Some(name) = name {
        store_record(&mut records, name, record, notifications);
    }
    if orphans > 0 {
        notifications.warn(format!("{} lines before the first shape header ignored", orphans));
    }
    Ok(records)
}

fn store_record(
    records: &mut IndexMap<String, Vec<String>>,
    name: String,
    record: Vec<String>,
    notifications: &mut NotificationCollection,
) {
    if records.contains_key(&name) {
        notifications.warn(format!("record {} redefined", name));
    }
    records.insert(name, record);
}
