/// Unprocessed row/column table as reported by the layout engine, before any
/// normalization. Rows may be ragged and cells may be blank; `headers[0]` /
/// `rows[i][0]` is the key column whose role (month label vs day number) is
/// decided by orientation detection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawGrid {
    /// Column labels from the table's header row.
    pub headers: Vec<String>,
    /// Each data row, one `String` per cell in header order.
    pub rows: Vec<Vec<String>>,
}

impl RawGrid {
    /// Cell text at (row, col); absent cells in ragged rows read as "".
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// The key cell (column 0) of a data row.
    pub fn key(&self, row: usize) -> &str {
        self.cell(row, 0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
