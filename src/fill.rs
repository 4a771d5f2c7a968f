use crate::geometry::{COL_WIDTHS_IN, ROW_H_BODY_IN, ROW_H_HEADER_IN, TABLE_FONT_PT, in_to_emu};
use crate::model::{Alignment, Table};
use crate::records::RowRecord;

/// Grow the table body by duplicating the last row's definition until it
/// holds at least `needed` body rows. Never shrinks: calling again with a
/// shorter row list leaves stale trailing rows, so callers must not re-fill
/// a table with fewer rows than a previous fill.
pub fn ensure_body_rows(table: &mut Table, needed: usize) {
    let have = table.body_row_count();
    if needed <= have {
        return;
    }
    let Some(template) = table.rows.last().cloned() else {
        return;
    };
    for _ in have..needed {
        table.rows.push(template.clone());
    }
}

/// Write `rows` into the table body, growing it as needed, then re-apply the
/// fixed styling. Fields beyond the table's column count are dropped.
pub fn fill_table(table: &mut Table, rows: &[RowRecord], unit_label: &str) {
    ensure_body_rows(table, rows.len());
    let ncols = table.column_count();
    for (i, record) in rows.iter().enumerate() {
        let fields = record.fields(unit_label);
        for (c, val) in fields.iter().take(ncols).enumerate() {
            if let Some(cell) = table.cell_mut(i + 1, c) {
                cell.text = (*val).to_string();
            }
        }
    }
    apply_table_style(table);
}

/// Fixed styling pass: column widths, header/body row heights, left
/// alignment for the first two columns and right for the rest, uniform
/// font size. Idempotent.
pub fn apply_table_style(table: &mut Table) {
    let ncols = table.column_count().min(COL_WIDTHS_IN.len());
    for i in 0..ncols {
        table.col_widths[i] = in_to_emu(COL_WIDTHS_IN[i]);
    }
    for (r, row) in table.rows.iter_mut().enumerate() {
        row.height = in_to_emu(if r == 0 { ROW_H_HEADER_IN } else { ROW_H_BODY_IN });
        for (c, cell) in row.cells.iter_mut().enumerate() {
            cell.alignment = if c <= 1 { Alignment::Left } else { Alignment::Right };
            cell.font_size = TABLE_FONT_PT;
        }
    }
}
