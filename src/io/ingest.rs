//! CSV ingest.
//!
//! Turns the input file into raw positional records. No schema is applied
//! here: every chart builder interprets the fields itself and decides which
//! rows to drop. The only failures surfaced to the caller are I/O failures.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::AppError;

/// One input line split into trimmed fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// 1-based line number in the source file.
    pub line: usize,
    pub fields: Vec<String>,
}

impl RawRecord {
    /// Field at `idx`, or `""` when the row is short.
    pub fn field(&self, idx: usize) -> &str {
        self.fields.get(idx).map(String::as_str).unwrap_or("")
    }
}

/// Ingest output: the records in file order plus how many lines were dropped.
#[derive(Debug, Clone, Default)]
pub struct RawInput {
    pub records: Vec<RawRecord>,
    pub unreadable: usize,
}

/// Open `path` and read every record. Failure to open is fatal.
pub fn read_records(path: &Path) -> Result<RawInput, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::io(format!("Failed to open input '{}': {e}", path.display())))?;
    read_records_from(file)
}

/// Read records from any reader (comma-delimited, no header row).
pub fn read_records_from<R: Read>(reader: R) -> Result<RawInput, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut out = RawInput::default();

    // Byte records so a row in a legacy encoding (e.g. Latin-1) is kept with
    // replacement characters instead of being dropped.
    for result in reader.byte_records() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                // An I/O error means the file itself is unreadable; anything
                // else is a single bad row.
                if let csv::ErrorKind::Io(io) = e.kind() {
                    return Err(AppError::io(format!("Failed to read input: {io}")));
                }
                debug!("dropping unreadable row: {e}");
                out.unreadable += 1;
                continue;
            }
        };

        let line = record.position().map(|p| p.line() as usize).unwrap_or(0);
        let mut fields: Vec<String> = record
            .iter()
            .map(|f| String::from_utf8_lossy(f).into_owned())
            .collect();
        if out.records.is_empty() {
            if let Some(first) = fields.first_mut() {
                *first = strip_bom(first).to_string();
            }
        }

        if fields.iter().all(|f| f.is_empty()) {
            continue;
        }

        out.records.push(RawRecord { line, fields });
    }

    Ok(out)
}

fn strip_bom(s: &str) -> &str {
    // Spreadsheet exports often start with a BOM that would otherwise end up
    // inside the first label or date.
    s.trim_start_matches('\u{feff}').trim_start()
}

/// Whether a field that should carry a date or number looks like a column title.
pub fn is_header_like(field: &str) -> bool {
    !field.chars().any(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(text: &str) -> RawInput {
        read_records_from(text.as_bytes()).unwrap()
    }

    #[test]
    fn keeps_file_order_and_line_numbers() {
        let input = read("01/03/2020,42\n\n02/03/2020,0\n03/03/2020,17\n");
        let lines: Vec<usize> = input.records.iter().map(|r| r.line).collect();
        assert_eq!(lines, vec![1, 3, 4]);
        assert_eq!(input.records[2].fields, vec!["03/03/2020", "17"]);
    }

    #[test]
    fn trims_fields_and_tolerates_ragged_rows() {
        let input = read("a , b\nc\n d ,e, f \n");
        assert_eq!(input.records.len(), 3);
        assert_eq!(input.records[0].fields, vec!["a", "b"]);
        assert_eq!(input.records[1].field(1), "");
        assert_eq!(input.records[2].fields, vec!["d", "e", "f"]);
    }

    #[test]
    fn strips_leading_bom() {
        let input = read("\u{feff}date,value\n");
        assert_eq!(input.records[0].field(0), "date");
    }

    #[test]
    fn quoted_fields_keep_embedded_commas() {
        let input = read("\"Sales, EMEA\",Sales,10,1\n");
        assert_eq!(input.records[0].field(0), "Sales, EMEA");
    }

    #[test]
    fn non_utf8_rows_are_kept_lossily() {
        let input = read_records_from(&b"Categor\xeda,x,0,0\nRent,,1200,0\n"[..]).unwrap();
        assert_eq!(input.unreadable, 0);
        assert_eq!(input.records.len(), 2);
        assert_eq!(input.records[0].field(0), "Categor\u{fffd}a");
        assert_eq!(input.records[0].line, 1);
    }

    #[test]
    fn missing_file_is_fatal() {
        let err = read_records(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_IO);
        assert!(err.message().contains("Failed to open input"));
    }

    #[test]
    fn header_detection() {
        assert!(is_header_like("date"));
        assert!(is_header_like(""));
        assert!(!is_header_like("2020-01-01"));
    }
}
