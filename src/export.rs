use anyhow::{Context, Result};
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};
use std::path::Path;

use crate::transform::{CanonicalMatrix, MonthToken, DAYS};

/// Write one worksheet per source table ("Tabel 1", "Tabel 2", …) into a
/// single workbook at `path`. Each sheet carries the header row
/// `Bulan, 1, 2, …, 31`, one data row per canonical month in calendar order,
/// and blank cells where the matrix is missing.
pub fn write_workbook(matrices: &[CanonicalMatrix], path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    for (i, matrix) in matrices.iter().enumerate() {
        let sheet = workbook.add_worksheet();
        sheet.set_name(format!("Tabel {}", i + 1))?;
        write_sheet(sheet, matrix)?;
    }
    workbook
        .save(path)
        .with_context(|| format!("writing workbook {}", path.display()))?;
    Ok(())
}

/// Single-table convenience wrapper around [`write_workbook`].
pub fn write_matrix(matrix: &CanonicalMatrix, path: &Path) -> Result<()> {
    write_workbook(std::slice::from_ref(matrix), path)
}

fn write_sheet(sheet: &mut Worksheet, matrix: &CanonicalMatrix) -> Result<(), XlsxError> {
    sheet.write_string(0, 0, "Bulan")?;
    for day in 1..=DAYS {
        sheet.write_number(0, day as u16, day as f64)?;
    }
    for (r, month) in MonthToken::ALL.iter().enumerate() {
        let row = (r + 1) as u32;
        sheet.write_string(row, 0, month.label())?;
        for (c, cell) in matrix.row(*month).iter().enumerate() {
            if let Some(v) = cell {
                sheet.write_number(row, (c + 1) as u16, *v)?;
            }
        }
    }
    Ok(())
}
