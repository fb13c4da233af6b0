//! CSV reporter
//!
//! One row per case with columns:
//! `ID, Case, Inputs, Expected Output, Actual Output, Result`.
//! `Inputs` is the compact JSON of the reading.

use crate::harness::SuiteReport;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tracing::info;

pub const HEADER: [&str; 6] = [
    "ID",
    "Case",
    "Inputs",
    "Expected Output",
    "Actual Output",
    "Result",
];

/// Write a suite as CSV to any writer
pub fn write<W: Write>(writer: W, suite: &SuiteReport) -> Result<()> {
    let mut wtr = ::csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;

    for outcome in &suite.outcomes {
        wtr.write_record([
            outcome.id.to_string(),
            outcome.label.to_string(),
            outcome.reading.to_json(),
            outcome.expected.to_string(),
            outcome.actual.to_string(),
            if outcome.passed { "Pass" } else { "Fail" }.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Render a suite as a CSV string
pub fn render(suite: &SuiteReport) -> Result<String> {
    let mut buf = Vec::new();
    write(&mut buf, suite)?;
    Ok(String::from_utf8(buf)?)
}

/// Write a suite to a CSV file, creating parent directories as needed
pub fn write_file(path: &Path, suite: &SuiteReport) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write(std::io::BufWriter::new(file), suite)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote {} rows to {}", suite.total(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::{run_suite, DECISION_TABLE, VALIDATION_CASES};

    #[test]
    fn test_csv_header_and_rows() {
        let suite = run_suite("decision_table", DECISION_TABLE);
        let out = render(&suite).expect("render CSV");

        let mut reader = ::csv::Reader::from_reader(out.as_bytes());
        let headers = reader.headers().expect("headers").clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), HEADER.to_vec());

        let rows: Vec<::csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 12);
        assert_eq!(&rows[0][0], "1");
        assert_eq!(&rows[0][1], "ALL_SAFE");
        assert_eq!(
            &rows[0][2],
            r#"{"temp_c":26.0,"sal_psu":32.0,"do_mgL":7.0,"nh3_mgL":0.005}"#
        );
        assert_eq!(&rows[0][3], "low");
        assert_eq!(&rows[0][4], "low");
        assert_eq!(&rows[0][5], "Pass");
        assert_eq!(&rows[11][1], "MULTI_MODERATES");
        assert_eq!(&rows[11][4], "medium");
    }

    #[test]
    fn test_inputs_column_is_quoted() {
        let suite = run_suite("decision_table", &DECISION_TABLE[..1]);
        let out = render(&suite).unwrap();
        assert!(out.contains(r#""{""temp_c"":26.0,"#));
    }

    #[test]
    fn test_validation_rows() {
        let suite = run_suite("validation", VALIDATION_CASES);
        let out = render(&suite).unwrap();
        let mut reader = ::csv::Reader::from_reader(out.as_bytes());
        for record in reader.records() {
            let record = record.unwrap();
            assert_eq!(&record[3], "invalid_reading");
            assert_eq!(&record[4], "invalid_reading");
            assert_eq!(&record[5], "Pass");
        }
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("table.csv");
        let suite = run_suite("decision_table", DECISION_TABLE);
        write_file(&path, &suite).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("ID,Case,Inputs,Expected Output,Actual Output,Result"));
        assert_eq!(content.lines().count(), 13);
    }
}
