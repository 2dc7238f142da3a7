// src/transform/mod.rs
//
// The core reshape: one raw OCR grid in, one canonical Bulan × Tanggal
// matrix out. Every operation here is total; malformed input degrades
// cell-by-cell to "missing", never to an error.

pub mod grid;
pub mod header;
pub mod matrix;
pub mod month;
pub mod numeric;
pub mod reshape;

pub use grid::RawGrid;
pub use header::ColumnKind;
pub use matrix::{CanonicalMatrix, DAYS};
pub use month::MonthToken;

use crate::transform::numeric::parse_number;
use tracing::debug;

/// Share of key-column cells that must parse to a day number in 1..=31 for
/// the grid to classify as day-keyed. Tolerates a minority of garbled day
/// values without misclassifying a month-keyed table that contains a few
/// numeric-looking labels.
const DAY_KEY_RATIO: f64 = 0.7;

/// Detected input layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Key column holds month labels; other columns are days (pattern A).
    MonthRows,
    /// Key column holds day numbers; other columns are months (pattern B).
    DayRows,
    /// Nothing usable in the grid.
    Empty,
}

/// Remove summary rows injected by the source table ("Rata-rata" /
/// "Average"), matched case-insensitively on the key cell. Applied before
/// orientation detection so summary rows never skew the day-key ratio.
pub fn drop_summary_rows(grid: &RawGrid) -> RawGrid {
    let rows = grid
        .rows
        .iter()
        .filter(|row| {
            let key = row.first().map(String::as_str).unwrap_or("").to_lowercase();
            !key.contains("rata") && !key.contains("average")
        })
        .cloned()
        .collect();
    RawGrid {
        headers: grid.headers.clone(),
        rows,
    }
}

/// Classify the grid by its key column: if at least [`DAY_KEY_RATIO`] of the
/// key cells parse strictly to a number in [1, 31] the grid is day-keyed,
/// otherwise month-keyed. Grids with no rows, or only blank cells, are
/// `Empty` and skip both reshape paths.
pub fn detect(grid: &RawGrid) -> Orientation {
    if grid.is_empty() {
        return Orientation::Empty;
    }
    let all_blank = grid
        .rows
        .iter()
        .all(|row| row.iter().all(|c| c.trim().is_empty()));
    if all_blank {
        return Orientation::Empty;
    }

    let day_keys = (0..grid.rows.len())
        .filter(|&r| matches!(parse_number(grid.key(r)), Some(n) if (1.0..=31.0).contains(&n)))
        .count();
    let ratio = day_keys as f64 / grid.rows.len() as f64;
    if ratio >= DAY_KEY_RATIO {
        Orientation::DayRows
    } else {
        Orientation::MonthRows
    }
}

/// One raw grid → one canonical 12 × 31 matrix. Total: any grid, however
/// garbled, produces a full-shaped (possibly all-missing) matrix.
pub fn canonicalize(raw: &RawGrid) -> CanonicalMatrix {
    let grid = drop_summary_rows(raw);
    let orientation = detect(&grid);
    debug!(?orientation, rows = grid.rows.len(), "classified grid");
    match orientation {
        Orientation::Empty => CanonicalMatrix::empty(),
        Orientation::MonthRows => reshape::reshape_month_rows(&grid),
        Orientation::DayRows => reshape::reshape_day_rows(&grid),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(headers: &[&str], rows: &[&[&str]]) -> RawGrid {
        RawGrid {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn summary_rows_are_dropped_in_both_orientations() {
        let a = grid(
            &["Bulan", "1"],
            &[&["Jan", "10"], &["Rata-rata", "99"], &["AVERAGE", "98"]],
        );
        let m = canonicalize(&a);
        assert_eq!(m.filled(), 1);
        assert_eq!(m.get(MonthToken::Jan, 1), Some(10.0));

        let b = grid(
            &["Tanggal", "Jan"],
            &[&["1", "10"], &["2", "20"], &["3", "30"], &["Rata", "99"]],
        );
        let m = canonicalize(&b);
        assert_eq!(m.filled(), 3);
        assert_eq!(m.get(MonthToken::Jan, 3), Some(30.0));
    }

    #[test]
    fn month_labelled_keys_classify_as_month_rows() {
        let g = grid(
            &["Bulan", "1", "2"],
            &[&["Jan", "1", "2"], &["Peb", "3", "4"], &["Mar", "5", "6"]],
        );
        assert_eq!(detect(&g), Orientation::MonthRows);
    }

    #[test]
    fn day_numbered_keys_classify_as_day_rows() {
        let rows: Vec<Vec<String>> = (1..=31)
            .map(|d| vec![d.to_string(), "1".to_string()])
            .collect();
        let g = RawGrid {
            headers: vec!["Tanggal".into(), "Jan".into()],
            rows,
        };
        assert_eq!(detect(&g), Orientation::DayRows);
    }

    #[test]
    fn exact_ratio_boundary_classifies_as_day_rows() {
        // 7 of 10 keys in range: ratio exactly 0.7, which meets the threshold
        let mut rows: Vec<Vec<String>> = (1..=7).map(|d| vec![d.to_string()]).collect();
        rows.push(vec!["x".into()]);
        rows.push(vec!["y".into()]);
        rows.push(vec!["99".into()]);
        let g = RawGrid {
            headers: vec!["Tanggal".into()],
            rows,
        };
        assert_eq!(detect(&g), Orientation::DayRows);
    }

    #[test]
    fn below_boundary_classifies_as_month_rows() {
        // 6 of 10 in range
        let mut rows: Vec<Vec<String>> = (1..=6).map(|d| vec![d.to_string()]).collect();
        for _ in 0..4 {
            rows.push(vec!["Jan".into()]);
        }
        let g = RawGrid {
            headers: vec!["Bulan".into()],
            rows,
        };
        assert_eq!(detect(&g), Orientation::MonthRows);
    }

    #[test]
    fn empty_and_blank_grids_are_empty() {
        assert_eq!(detect(&RawGrid::default()), Orientation::Empty);
        let blank = grid(&["a", "b"], &[&["", " "], &["", ""]]);
        assert_eq!(detect(&blank), Orientation::Empty);
        assert_eq!(canonicalize(&blank), CanonicalMatrix::empty());
    }

    #[test]
    fn output_shape_is_fixed_for_arbitrary_grids() {
        let garbage = [
            RawGrid::default(),
            grid(&[], &[&["x"], &["y", "z", "w"]]),
            grid(&["??", "!!"], &[&["31", "abc"]]),
            grid(
                &["Bulan", "1", "2", "3"],
                &[&["Jan", "1"], &["Des", "1", "2", "3", "4", "5"]],
            ),
        ];
        for g in &garbage {
            let m = canonicalize(g);
            for month in MonthToken::ALL {
                assert_eq!(m.row(month).len(), DAYS);
            }
        }
    }

    #[test]
    fn ragged_rows_are_tolerated() {
        let g = grid(
            &["Bulan", "1", "2", "3"],
            &[&["Jan", "10"], &["Peb", "20", "21", "22", "23"]],
        );
        let m = canonicalize(&g);
        assert_eq!(m.get(MonthToken::Jan, 1), Some(10.0));
        assert_eq!(m.get(MonthToken::Jan, 2), None);
        assert_eq!(m.get(MonthToken::Peb, 3), Some(22.0));
        // the overhanging cell has no header and is ignored
        assert_eq!(m.filled(), 4);
    }
}
