//! Ordered header + row container handed to the Markdown renderer

use serde::{Deserialize, Serialize};

/// A table of already-normalized display cells.
///
/// Headers and rows keep their insertion order; column order and the
/// Turkish header labels are part of the published contract with
/// downstream renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Header labels in column order
    pub headers: Vec<String>,
    /// Rows in input order; every row has exactly `headers.len()` cells
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create an empty table with the given header labels
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row.
    ///
    /// Panics if the row width does not match the header count; builders
    /// check widths before pushing, so a mismatch here is a column-mapping
    /// bug, not a recoverable condition.
    pub fn push_row(&mut self, cells: Vec<String>) {
        assert_eq!(
            cells.len(),
            self.headers.len(),
            "row width does not match header count"
        );
        self.rows.push(cells);
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_row_keeps_order() {
        let mut table = Table::new(["A", "B"]);
        table.push_row(vec!["1".into(), "2".into()]);
        table.push_row(vec!["3".into(), "4".into()]);

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.rows[0], vec!["1", "2"]);
        assert_eq!(table.rows[1], vec!["3", "4"]);
    }

    #[test]
    #[should_panic(expected = "row width")]
    fn test_push_row_rejects_width_mismatch() {
        let mut table = Table::new(["A", "B"]);
        table.push_row(vec!["1".into()]);
    }
}
