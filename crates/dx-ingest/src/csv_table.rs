use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder};
use tracing::debug;

use dx_model::SurveyRow;

use crate::error::{IngestError, Result};

/// Parsed survey export: the header row plus one row per respondent.
#[derive(Debug, Clone, Default)]
pub struct SurveyTable {
    pub headers: Vec<String>,
    pub rows: Vec<SurveyRow>,
}

impl SurveyTable {
    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|header| header == column)
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

/// Cells are decoded lossily: exports saved in a legacy code page keep
/// their text, with U+FFFD standing in for undecodable bytes.
fn decode_cell(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

fn csv_error(path: &Path, error: &csv::Error) -> IngestError {
    IngestError::CsvParse {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}

fn is_blank(record: &ByteRecord) -> bool {
    record
        .iter()
        .all(|field| field.iter().all(u8::is_ascii_whitespace))
}

pub fn read_survey_csv(path: &Path) -> Result<SurveyTable> {
    let file = File::open(path).map_err(|e| IngestError::from_io(path, e))?;
    read_survey_csv_from_reader(file, path)
}

/// Reads a survey table from any reader; `origin` is used in errors.
///
/// Cell values are kept raw. Columns a short record does not reach are
/// absent from that row rather than empty.
pub fn read_survey_csv_from_reader<R: Read>(reader: R, origin: &Path) -> Result<SurveyTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers: Vec<String> = reader
        .byte_headers()
        .map_err(|e| csv_error(origin, &e))?
        .iter()
        .map(|raw| normalize_header(&decode_cell(raw)))
        .collect();
    let mut rows = Vec::new();
    let mut blank = 0usize;
    for record in reader.byte_records() {
        let record = record.map_err(|e| csv_error(origin, &e))?;
        if is_blank(&record) {
            blank += 1;
            continue;
        }
        let row: SurveyRow = headers
            .iter()
            .zip(record.iter())
            .filter(|(header, _)| !header.is_empty())
            .map(|(header, value)| (header.clone(), decode_cell(value)))
            .collect();
        rows.push(row);
    }
    debug!(
        path = %origin.display(),
        columns = headers.len(),
        rows = rows.len(),
        blank,
        "survey csv read"
    );
    Ok(SurveyTable { headers, rows })
}
