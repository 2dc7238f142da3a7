use crate::transform::month::MonthToken;

/// Day columns per month row.
pub const DAYS: usize = 31;

/// The fixed Bulan × Tanggal output shape: 12 month rows in calendar order by
/// 31 day columns ascending, regardless of how sparse or garbled the input
/// was. Cells that were never populated (or failed to parse) stay `None`.
///
/// One matrix is built fresh per input grid and never merged with another.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalMatrix {
    cells: [[Option<f64>; DAYS]; 12],
}

impl Default for CanonicalMatrix {
    fn default() -> Self {
        CanonicalMatrix {
            cells: [[None; DAYS]; 12],
        }
    }
}

impl CanonicalMatrix {
    /// All-missing matrix, the degenerate-input result.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Value at (month, day); `day` is 1-based. Out-of-range days read as
    /// missing rather than panicking.
    pub fn get(&self, month: MonthToken, day: u8) -> Option<f64> {
        if !(1..=DAYS as u8).contains(&day) {
            return None;
        }
        self.cells[month.index()][day as usize - 1]
    }

    /// Set the value at (month, day); days outside 1..=31 are ignored, which
    /// is what confines stray day numbers to the canonical shape.
    pub(crate) fn set(&mut self, month: MonthToken, day: u8, value: Option<f64>) {
        if (1..=DAYS as u8).contains(&day) {
            self.cells[month.index()][day as usize - 1] = value;
        }
    }

    /// Replace a whole month row at once.
    pub(crate) fn set_row(&mut self, month: MonthToken, row: [Option<f64>; DAYS]) {
        self.cells[month.index()] = row;
    }

    /// The 31 day cells for one month, ascending.
    pub fn row(&self, month: MonthToken) -> &[Option<f64>; DAYS] {
        &self.cells[month.index()]
    }

    /// Number of populated cells, used for log summaries.
    pub fn filled(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| c.is_some())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_matrix_is_all_missing() {
        let m = CanonicalMatrix::empty();
        assert_eq!(m.filled(), 0);
        for month in MonthToken::ALL {
            assert_eq!(m.row(month).len(), DAYS);
            assert!(m.row(month).iter().all(Option::is_none));
        }
    }

    #[test]
    fn out_of_range_days_are_ignored() {
        let mut m = CanonicalMatrix::empty();
        m.set(MonthToken::Jan, 0, Some(1.0));
        m.set(MonthToken::Jan, 32, Some(1.0));
        assert_eq!(m.filled(), 0);
        assert_eq!(m.get(MonthToken::Jan, 0), None);
        assert_eq!(m.get(MonthToken::Jan, 32), None);

        m.set(MonthToken::Jan, 31, Some(4.5));
        assert_eq!(m.get(MonthToken::Jan, 31), Some(4.5));
        assert_eq!(m.filled(), 1);
    }
}
