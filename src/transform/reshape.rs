use crate::transform::grid::RawGrid;
use crate::transform::header::ColumnKind;
use crate::transform::matrix::{CanonicalMatrix, DAYS};
use crate::transform::month::MonthToken;
use crate::transform::numeric::{parse_cell, parse_number};
use tracing::debug;

/// Orientation A: key column holds month labels, the remaining headers are
/// day numbers. Rows with an unrecognized month and columns with a garbled
/// day header are dropped; everything else lands at (month, day).
pub fn reshape_month_rows(grid: &RawGrid) -> CanonicalMatrix {
    // resolve day columns once; unresolved headers discard the whole column
    let columns: Vec<(usize, u8)> = grid
        .headers
        .iter()
        .enumerate()
        .skip(1)
        .filter_map(|(idx, h)| match ColumnKind::expect_day(h) {
            ColumnKind::Day(d) => Some((idx, d)),
            _ => None,
        })
        .collect();
    debug!(
        day_columns = columns.len(),
        dropped = grid.headers.len().saturating_sub(1) - columns.len(),
        "resolved day headers"
    );

    let mut matrix = CanonicalMatrix::empty();
    for r in 0..grid.rows.len() {
        let month = match MonthToken::parse(grid.key(r)) {
            Some(m) => m,
            None => continue,
        };
        // whole-row assignment: a repeated month label replaces the earlier
        // row entirely (last one wins)
        let mut row = [None; DAYS];
        for &(idx, day) in &columns {
            row[day as usize - 1] = parse_cell(grid.cell(r, idx));
        }
        matrix.set_row(month, row);
    }
    matrix
}

/// Orientation B: key column holds day numbers, the remaining headers are
/// month labels. The grid is transposed into the canonical month-row shape;
/// for duplicate (day, month) pairs the first non-missing value wins,
/// visiting month columns in header order and day rows top to bottom.
pub fn reshape_day_rows(grid: &RawGrid) -> CanonicalMatrix {
    let columns: Vec<(usize, MonthToken)> = grid
        .headers
        .iter()
        .enumerate()
        .skip(1)
        .filter_map(|(idx, h)| match ColumnKind::expect_month(h) {
            ColumnKind::Month(m) => Some((idx, m)),
            _ => None,
        })
        .collect();
    debug!(
        month_columns = columns.len(),
        dropped = grid.headers.len().saturating_sub(1) - columns.len(),
        "resolved month headers"
    );

    // rows whose key strictly parses as a number are day rows; out-of-range
    // days survive to here and are confined when placed
    let days: Vec<(usize, i64)> = (0..grid.rows.len())
        .filter_map(|r| parse_number(grid.key(r)).map(|n| (r, n.trunc() as i64)))
        .collect();

    let mut matrix = CanonicalMatrix::empty();
    for &(idx, month) in &columns {
        for &(r, day) in &days {
            if !(1..=DAYS as i64).contains(&day) {
                continue;
            }
            let day = day as u8;
            if matrix.get(month, day).is_some() {
                continue;
            }
            if let Some(v) = parse_cell(grid.cell(r, idx)) {
                matrix.set(month, day, Some(v));
            }
        }
    }
    matrix
}
