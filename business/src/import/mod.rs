//! Bulk import of `.csv` / `.xlsx` files into staged records.
//!
//! Parsing is pure: bytes in, records out. Nothing here touches the network.

mod csv;
mod header;
mod xlsx;

pub use csv::{parse_csv, split_line};
pub use header::{DATA_HEADER_KEYWORDS, HeaderRule, TYPE_HEADER_KEYWORDS};
pub use xlsx::read_first_sheet;

use thiserror::Error;

use crate::model::{DataRow, TypeRecord};
use crate::numeric::to_number;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("Only .xlsx / .csv files are supported: {name}")]
    UnsupportedFile { name: String },
    #[error("CSV file is not valid UTF-8")]
    InvalidText,
    #[error("Failed to read workbook: {0}")]
    Workbook(String),
    #[error("Workbook has no worksheet")]
    NoWorksheet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Csv,
    Xlsx,
}

impl FileKind {
    /// Classify by extension only, ignoring case.
    pub fn from_name(name: &str) -> Result<Self, ImportError> {
        let extension = name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "csv" => Ok(Self::Csv),
            "xlsx" => Ok(Self::Xlsx),
            _ => Err(ImportError::UnsupportedFile {
                name: name.to_owned(),
            }),
        }
    }
}

/// Raw rows of a file, header row included.
pub fn read_rows(name: &str, bytes: &[u8]) -> Result<Vec<Vec<String>>, ImportError> {
    match FileKind::from_name(name)? {
        FileKind::Csv => {
            let text = std::str::from_utf8(bytes).map_err(|_utf8| ImportError::InvalidText)?;
            Ok(parse_csv(text))
        }
        FileKind::Xlsx => read_first_sheet(bytes),
    }
}

fn body_rows(rule: HeaderRule, rows: Vec<Vec<String>>) -> impl Iterator<Item = Vec<String>> {
    rule.strip(rows)
        .into_iter()
        .filter(|row| row.first().is_some_and(|first| !first.trim().is_empty()))
}

/// Type records from a `model, load, damp, kx, ky, kz` sheet.
pub fn parse_type_file(name: &str, bytes: &[u8]) -> Result<Vec<TypeRecord>, ImportError> {
    let rows = read_rows(name, bytes)?;
    let records: Vec<TypeRecord> = body_rows(HeaderRule::TYPES, rows)
        .map(|row| TypeRecord::from_cells(&row[..row.len().min(6)]))
        .collect();
    log::info!("Parsed {} type rows from {name}", records.len());
    Ok(records)
}

/// Data rows from a `freq_range, max_excit` sheet, bound to one model pair.
pub fn parse_data_file(
    name: &str,
    bytes: &[u8],
    upper_model: &str,
    lower_model: &str,
) -> Result<Vec<DataRow>, ImportError> {
    let rows = read_rows(name, bytes)?;
    let records: Vec<DataRow> = body_rows(HeaderRule::DATA, rows)
        .map(|row| DataRow {
            id: None,
            upper_model: upper_model.to_owned(),
            lower_model: lower_model.to_owned(),
            freq_range: row[0].trim().to_owned(),
            max_excit: row.get(1).and_then(|cell| to_number(cell)),
        })
        .collect();
    log::info!(
        "Parsed {} data rows from {name} for {upper_model}/{lower_model}",
        records.len()
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_check_ignores_case() {
        assert_eq!(FileKind::from_name("types.CSV"), Ok(FileKind::Csv));
        assert_eq!(FileKind::from_name("a.b.Xlsx"), Ok(FileKind::Xlsx));
        assert!(matches!(
            FileKind::from_name("types.xls"),
            Err(ImportError::UnsupportedFile { .. })
        ));
        assert!(FileKind::from_name("README").is_err());
    }

    #[test]
    fn chinese_header_row_is_dropped() {
        let csv = "型号,载荷,阻尼,动刚度X,动刚度Y,动刚度Z\nGZ-10,120,0.3,1e7,2e7,3e7\nGZ-11,130,0.4,,,\n";
        let records = parse_type_file("types.csv", csv.as_bytes()).expect("valid csv");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].model, "GZ-10");
        assert_eq!(records[0].kz, Some(3e7));
        assert_eq!(records[1].kx, None);
    }

    #[test]
    fn numeric_first_row_is_kept() {
        let csv = "GZ-10,120,0.3,1,2,3\nGZ-11,130,0.4,4,5,6\n";
        let records = parse_type_file("types.csv", csv.as_bytes()).expect("valid csv");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].model, "GZ-10");
    }

    #[test]
    fn first_row_with_units_is_kept() {
        let csv = "GZ-10,120kg,0.3Ns,1e7\nGZ-11,130kg,0.4Ns,2e7\n";
        let records = parse_type_file("t.csv", csv.as_bytes()).expect("valid csv");
        let models: Vec<&str> = records.iter().map(|r| r.model.as_str()).collect();
        assert_eq!(models, vec!["GZ-10", "GZ-11"]);
        assert_eq!(records[0].load, Some(120.0));
    }

    #[test]
    fn rows_without_model_are_discarded() {
        let csv = "GZ-10,1\n,2\n  ,3\nGZ-12,4\n";
        let records = parse_type_file("types.csv", csv.as_bytes()).expect("valid csv");
        let models: Vec<&str> = records.iter().map(|r| r.model.as_str()).collect();
        assert_eq!(models, vec!["GZ-10", "GZ-12"]);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let csv = "GZ-10,1,2,3,4,5,999\n";
        let records = parse_type_file("t.csv", csv.as_bytes()).expect("valid csv");
        assert_eq!(records[0].kz, Some(5.0));
    }

    #[test]
    fn data_rows_bind_to_model_pair() {
        let csv = "频率范围,最大激励\n10-315,62.5\n20-100,\n";
        let rows = parse_data_file("data.csv", csv.as_bytes(), "GZ-10", "GZ-20").expect("valid");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].upper_model, "GZ-10");
        assert_eq!(rows[0].lower_model, "GZ-20");
        assert_eq!(rows[0].freq_range, "10-315");
        assert_eq!(rows[0].max_excit, Some(62.5));
        assert_eq!(rows[1].max_excit, None);
    }

    #[test]
    fn invalid_utf8_is_reported() {
        let err = parse_type_file("t.csv", &[0xff, 0xfe, 0x00]).expect_err("not utf-8");
        assert_eq!(err, ImportError::InvalidText);
    }

    #[test]
    fn unsupported_file_never_parses() {
        let err = parse_type_file("t.txt", b"GZ-10,1").expect_err("unsupported");
        assert_eq!(
            err.to_string(),
            "Only .xlsx / .csv files are supported: t.txt"
        );
    }
}
