use crate::data::model::{ProviderRow, ProviderTable};
use crate::error::{Error, Result};

/// Header name the NPI search mode requires, matched exactly.
pub const NPI_COLUMN: &str = "NPI";

// ---------------------------------------------------------------------------
// Search mode
// ---------------------------------------------------------------------------

/// Which columns a query is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Match the query against every field of a row ("Name" in the UI).
    AnyColumn,
    /// Match the query against the `NPI` column only.
    NpiColumn,
}

impl SearchMode {
    /// The label shown on the mode selector.
    pub fn label(self) -> &'static str {
        match self {
            SearchMode::AnyColumn => "Name",
            SearchMode::NpiColumn => "NPI",
        }
    }
}

// ---------------------------------------------------------------------------
// Row filtering
// ---------------------------------------------------------------------------

/// Return indices of rows matching `query`, preserving table order.
///
/// Matching is case-insensitive substring containment; the query is always
/// a literal, never a pattern. Callers must not pass an empty query — an
/// empty search box means "no search requested" and the surrounding control
/// flow skips filtering entirely.
///
/// `NpiColumn` mode requires a column literally named `NPI`; its absence is
/// [`Error::MissingColumn`], not an empty result, so the UI can tell a bad
/// export apart from a search with no hits.
pub fn filter_rows(table: &ProviderTable, query: &str, mode: SearchMode) -> Result<Vec<usize>> {
    let needle = query.to_lowercase();

    let matches: Vec<usize> = match mode {
        SearchMode::AnyColumn => table
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| any_field_contains(row, &needle))
            .map(|(i, _)| i)
            .collect(),
        SearchMode::NpiColumn => {
            if !table.has_column(NPI_COLUMN) {
                return Err(Error::MissingColumn(NPI_COLUMN.to_string()));
            }
            table
                .rows
                .iter()
                .enumerate()
                .filter(|(_, row)| {
                    row.get(NPI_COLUMN)
                        .is_some_and(|v| v.to_lowercase().contains(&needle))
                })
                .map(|(i, _)| i)
                .collect()
        }
    };

    Ok(matches)
}

/// Whether any field of the row contains the (already lowercased) needle.
/// Independent of column count and order.
fn any_field_contains(row: &ProviderRow, needle: &str) -> bool {
    row.values().any(|v| v.to_lowercase().contains(needle))
}
