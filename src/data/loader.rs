use std::path::Path;

use crate::data::model::{ProviderRow, ProviderTable};
use crate::error::Result;

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load a provider export into memory.
///
/// CSV layout: a header row naming the columns, then one record per
/// provider. Every cell is kept verbatim as text — identifiers like NPIs
/// must not lose leading zeros to numeric parsing, and the export mixes
/// column types freely.
pub fn load_csv(path: &Path) -> Result<ProviderTable> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        // The reader rejects records whose field count differs from the
        // header, which is what keeps ProviderTable's invariant.
        let record = result?;

        let row: ProviderRow = headers
            .iter()
            .zip(record.iter())
            .map(|(header, field)| (header.clone(), field.to_string()))
            .collect();
        rows.push(row);
    }

    log::debug!(
        "Loaded {} records × {} columns from {}",
        rows.len(),
        headers.len(),
        path.display()
    );

    Ok(ProviderTable::new(headers, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Write;

    fn write_csv(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("UCSF_ECHO_20240101.CSV");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (tmp, path)
    }

    #[test]
    fn headers_and_rows_preserve_file_order() {
        let (_tmp, path) = write_csv("NPI,Name,Specialty\n123,Alice Smith,Cardiology\n456,Bob Jones,Oncology\n");
        let table = load_csv(&path).unwrap();

        assert_eq!(table.headers, vec!["NPI", "Name", "Specialty"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0]["Name"], "Alice Smith");
        assert_eq!(table.rows[1]["NPI"], "456");
    }

    #[test]
    fn all_fields_stay_text() {
        // Leading zeros and date-like strings must survive untouched.
        let (_tmp, path) = write_csv("NPI,Start\n0012345,2024-01-01\n");
        let table = load_csv(&path).unwrap();

        assert_eq!(table.rows[0]["NPI"], "0012345");
        assert_eq!(table.rows[0]["Start"], "2024-01-01");
    }

    #[test]
    fn quoted_fields_keep_embedded_commas() {
        let (_tmp, path) = write_csv("NPI,Name\n123,\"Smith, Alice\"\n");
        let table = load_csv(&path).unwrap();

        assert_eq!(table.rows[0]["Name"], "Smith, Alice");
    }

    #[test]
    fn ragged_record_is_a_load_error() {
        let (_tmp, path) = write_csv("NPI,Name\n123,Alice,extra\n");
        let err = load_csv(&path).unwrap_err();
        assert!(matches!(err, Error::Csv(_)));
    }

    #[test]
    fn every_row_has_the_full_header_key_set() {
        let (_tmp, path) = write_csv("NPI,Name,Specialty\n123,Alice,\n");
        let table = load_csv(&path).unwrap();

        let keys: Vec<&String> = table.rows[0].keys().collect();
        let mut expected = table.headers.clone();
        expected.sort();
        assert_eq!(keys, expected.iter().collect::<Vec<_>>());
        assert_eq!(table.rows[0]["Specialty"], "");
    }
}
