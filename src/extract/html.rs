use crate::transform::RawGrid;
use scraper::{ElementRef, Html, Selector};

/// Parse the engine's per-table HTML fragment into a [`RawGrid`].
///
/// The first `<tr>` supplies the column headers (whether the engine emitted
/// `<th>` or plain `<td>` cells); every following `<tr>` is a data row. Cell
/// text is whitespace-collapsed. Fragments with no rows at all yield `None`
/// and the region is skipped.
pub fn grid_from_html(html: &str) -> Option<RawGrid> {
    let doc = Html::parse_fragment(html);
    let row_sel = Selector::parse("tr").expect("selector should parse");
    let cell_sel = Selector::parse("th, td").expect("selector should parse");

    let mut rows = doc.select(&row_sel);
    let headers = rows.next().map(|tr| cells_of(tr, &cell_sel))?;
    let rows: Vec<Vec<String>> = rows.map(|tr| cells_of(tr, &cell_sel)).collect();
    Some(RawGrid { headers, rows })
}

fn cells_of(tr: ElementRef, cell_sel: &Selector) -> Vec<String> {
    tr.select(cell_sel)
        .map(|cell| {
            cell.text()
                .collect::<String>()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}
