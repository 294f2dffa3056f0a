use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// ProviderRow – one record of the export
// ---------------------------------------------------------------------------

/// A single export record: column name → cell text.
///
/// Every field is kept as opaque text; the source data mixes identifiers,
/// names, and free-form columns, and typing them would turn format drift
/// into load failures.
pub type ProviderRow = BTreeMap<String, String>;

// ---------------------------------------------------------------------------
// ProviderTable – the complete loaded export
// ---------------------------------------------------------------------------

/// The full loaded export.
///
/// Invariant: every row carries exactly the columns listed in `headers`
/// (the loader rejects ragged records, so this holds by construction).
#[derive(Debug, Clone)]
pub struct ProviderTable {
    /// Column names in file order.
    pub headers: Vec<String>,
    /// All records, in file order.
    pub rows: Vec<ProviderRow>,
}

impl ProviderTable {
    pub fn new(headers: Vec<String>, rows: Vec<ProviderRow>) -> Self {
        ProviderTable { headers, rows }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no records.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether a column with this exact name exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }
}
