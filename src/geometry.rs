use crate::model::Emu;

pub const EMU_PER_INCH: Emu = 914_400;

/// Fixed band layout metrics, in inches.
pub const ROW_H_HEADER_IN: f64 = 0.26;
pub const ROW_H_BODY_IN: f64 = 0.22;
pub const MARGIN_IN: f64 = 0.20;
/// Where a continued band's label and table land on a fresh slide.
pub const CONT_LABEL_TOP_IN: f64 = 0.70;
pub const CONT_TABLE_TOP_IN: f64 = 1.10;
/// Vertical gap between a band label and its table when laid out in sequence.
pub const LABEL_GAP_IN: f64 = 0.35;

pub const TABLE_FONT_PT: f32 = 9.0;
/// Name and unit columns are wider; value columns share a fixed width.
pub const COL_WIDTHS_IN: [f64; 5] = [2.4, 1.15, 1.25, 1.25, 1.25];

pub fn emu_to_in(emu: Emu) -> f64 {
    emu as f64 / EMU_PER_INCH as f64
}

pub fn in_to_emu(inches: f64) -> Emu {
    (inches * EMU_PER_INCH as f64) as Emu
}

/// How many body rows fit between a table's top and a vertical limit,
/// after reserving space for the header row. Zero when the limit sits at
/// or above the top.
pub fn body_rows_that_fit(top_in: f64, limit_in: f64) -> usize {
    let avail = (limit_in - top_in - ROW_H_HEADER_IN).max(0.0);
    (avail / ROW_H_BODY_IN).floor() as usize
}

/// Bottom edge of a table with the given body row count, assuming the
/// fixed header/body row heights.
pub fn table_bottom_in(top_in: f64, body_rows: usize) -> f64 {
    top_in + ROW_H_HEADER_IN + ROW_H_BODY_IN * body_rows as f64
}
