//! Numeric CSV ingest and output for the command-line front end.

use std::fmt::Display;
use std::io;
use std::path::Path;

use csv::{Reader, ReaderBuilder, Writer};
use ndarray::{Array2, ArrayView2, Axis};
use thiserror::Error;

use crate::detector::row_labels;

#[derive(Error, Debug)]
pub enum CsvInputError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Record {record}, column {column}: cannot parse {value:?} as a number")]
    Parse {
        record: usize,
        column: usize,
        value: String,
    },

    #[error("Matrix shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

/// A numeric matrix with its optional column names
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub headers: Option<Vec<String>>,
    pub data: Array2<f64>,
}

pub fn read_csv(file: &Path, has_headers: bool) -> Result<Table, CsvInputError> {
    let reader = ReaderBuilder::new().has_headers(has_headers).from_path(file)?;
    read_table(reader)
}

/// Parse every record into one matrix row. Empty cells are rejected; the
/// reader itself rejects records whose length differs from the first one.
pub fn read_table<R: io::Read>(mut reader: Reader<R>) -> Result<Table, CsvInputError> {
    let headers = if reader.has_headers() {
        Some(reader.headers()?.iter().map(|h| h.trim().to_string()).collect::<Vec<_>>())
    } else {
        None
    };

    let mut values = Vec::new();
    let mut rows = 0;
    let mut cols = headers.as_ref().map_or(0, Vec::len);

    for (record_idx, record) in reader.records().enumerate() {
        let record = record?;
        cols = record.len();
        for (column, field) in record.iter().enumerate() {
            let value = field.trim().parse::<f64>().map_err(|_| CsvInputError::Parse {
                record: record_idx + 1,
                column,
                value: field.to_string(),
            })?;
            values.push(value);
        }
        rows += 1;
    }

    let data = Array2::from_shape_vec((rows, cols), values)?;
    Ok(Table { headers, data })
}

/// Write `data` as CSV, one matrix row per record.
pub fn write_table<W: io::Write, T: Display>(
    writer: &mut Writer<W>,
    headers: Option<&[String]>,
    data: ArrayView2<T>,
) -> Result<(), csv::Error> {
    if let Some(headers) = headers {
        writer.write_record(headers)?;
    }
    for row in data.rows() {
        writer.write_record(row.iter().map(|v| v.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}

/// Collapse per-cell labels to one `label` column, one record per sample.
pub fn write_row_labels<W: io::Write>(
    writer: &mut Writer<W>,
    cell_labels: &Array2<i8>,
) -> Result<(), csv::Error> {
    let rows = row_labels(cell_labels).insert_axis(Axis(1));
    let header = ["label".to_string()];
    write_table(writer, Some(&header[..]), rows.view())
}

pub fn stdout_writer() -> Writer<io::Stdout> {
    Writer::from_writer(io::stdout())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn reader(text: &str, has_headers: bool) -> Reader<&[u8]> {
        ReaderBuilder::new()
            .has_headers(has_headers)
            .from_reader(text.as_bytes())
    }

    #[test]
    fn test_read_with_headers() {
        let table = read_table(reader("co2, temperature\n400,21.5\n1200, 23\n", true)).unwrap();

        assert_eq!(
            table.headers,
            Some(vec!["co2".to_string(), "temperature".to_string()])
        );
        assert_eq!(table.data, array![[400.0, 21.5], [1200.0, 23.0]]);
    }

    #[test]
    fn test_read_without_headers() {
        let table = read_table(reader("1\n2\n100\n", false)).unwrap();
        assert!(table.headers.is_none());
        assert_eq!(table.data, array![[1.0], [2.0], [100.0]]);
    }

    #[test]
    fn test_header_only_gives_empty_matrix() {
        let table = read_table(reader("a,b\n", true)).unwrap();
        assert_eq!(table.data.dim(), (0, 2));
    }

    #[test]
    fn test_non_numeric_cell() {
        let err = read_table(reader("a\n1\nfoo\n", true)).unwrap_err();
        match err {
            CsvInputError::Parse { record, column, value } => {
                assert_eq!((record, column, value.as_str()), (2, 0, "foo"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_ragged_rows() {
        let err = read_table(reader("1,2\n3\n", false)).unwrap_err();
        assert!(matches!(err, CsvInputError::Csv(_)));
    }

    #[test]
    fn test_write_table() {
        let mut writer = Writer::from_writer(vec![]);
        let headers = vec!["a".to_string(), "b".to_string()];
        write_table(&mut writer, Some(headers.as_slice()), array![[0i8, -1], [0, 0]].view()).unwrap();

        let out = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(out, "a,b\n0,-1\n0,0\n");
    }

    #[test]
    fn test_write_row_labels() {
        let mut writer = Writer::from_writer(vec![]);
        let cells = array![[0i8, 0], [0, -1], [-1, -1]];
        write_row_labels(&mut writer, &cells).unwrap();

        let out = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(out, "label\n0\n-1\n-1\n");
    }

    #[test]
    fn test_write_scores_keeps_headers() {
        let mut writer = Writer::from_writer(vec![]);
        let headers = vec!["co2".to_string()];
        write_table(&mut writer, Some(headers.as_slice()), array![[-0.5], [1.5]].view()).unwrap();

        let out = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(out, "co2\n-0.5\n1.5\n");
    }
}
