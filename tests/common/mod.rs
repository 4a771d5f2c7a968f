#![allow(dead_code)]

use deckband::{
    BandSpec, Cell, Deck, Emu, Layout, MARGIN_IN, RowRecord, Shape, ShapeKind, Slide, Table,
    TableRow, TextFrame, emu_to_in, in_to_emu, table_bottom_in,
};

/// 16:9 deck dimensions (13.33 x 7.5 in).
pub const SLIDE_W: Emu = 12_192_000;
pub const SLIDE_H: Emu = 6_858_000;

/// Route engine logs through the test harness; safe to call from every test.
pub fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn deck_with(shapes: Vec<Shape>) -> Deck {
    init_logs();
    Deck {
        slide_width: SLIDE_W,
        slide_height: SLIDE_H,
        layouts: vec![
            Layout {
                name: "Title and Content".into(),
            },
            Layout {
                name: "Blank".into(),
            },
        ],
        slides: vec![Slide { layout: 0, shapes }],
    }
}

pub fn label_shape(top_in: f64, text: &str) -> Shape {
    Shape {
        top: in_to_emu(top_in),
        left: in_to_emu(0.5),
        width: in_to_emu(4.0),
        height: in_to_emu(0.3),
        kind: ShapeKind::Label(TextFrame { text: text.into() }),
    }
}

/// A five-column band table with `header` in the first header cell and
/// `body_rows` empty body rows, matching the template shape the engine
/// expects to grow.
pub fn table_shape(top_in: f64, header: &str, body_rows: usize) -> Shape {
    let header_texts = [header, "Units", "2024", "2033", "CAGR 2025-2033"];
    let mut rows = vec![TableRow {
        height: in_to_emu(0.26),
        cells: header_texts.iter().map(|t| Cell::new(*t)).collect(),
    }];
    for _ in 0..body_rows {
        rows.push(TableRow {
            height: in_to_emu(0.22),
            cells: (0..5).map(|_| Cell::new("")).collect(),
        });
    }
    Shape {
        top: in_to_emu(top_in),
        left: in_to_emu(0.5),
        width: in_to_emu(7.3),
        height: in_to_emu(table_bottom_in(0.0, body_rows)),
        kind: ShapeKind::Table(Table {
            col_widths: vec![in_to_emu(1.5); 5],
            rows,
        }),
    }
}

pub fn records(prefix: &str, n: usize) -> Vec<RowRecord> {
    (1..=n)
        .map(|i| RowRecord {
            name: format!("{prefix} {i}"),
            unit: None,
            value_t0: format!("{i}.0"),
            value_t1: format!("{}.0", i * 2),
            growth: "8.0%".into(),
        })
        .collect()
}

pub fn band(id: &str, keywords: &[&str], rows: Vec<RowRecord>) -> BandSpec {
    BandSpec {
        id: id.into(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        relabel: None,
        rows,
    }
}

/// First-column texts of the non-empty body rows, in order.
pub fn body_names(table: &Table) -> Vec<String> {
    table.rows[1..]
        .iter()
        .map(|r| r.cells[0].text.clone())
        .filter(|t| !t.is_empty())
        .collect()
}

pub fn visible_tables(deck: &Deck, slide: usize) -> Vec<&Table> {
    deck.slides[slide]
        .shapes
        .iter()
        .filter(|s| s.top < deck.slide_height)
        .filter_map(|s| s.table())
        .collect()
}

/// After a run, no visible table may cross the next table's top or the
/// slide bottom, minus the fixed margin.
pub fn assert_no_overlap(deck: &Deck) {
    for (si, slide) in deck.slides.iter().enumerate() {
        let mut tables: Vec<(f64, usize)> = slide
            .shapes
            .iter()
            .filter(|s| s.top < deck.slide_height)
            .filter_map(|s| s.table().map(|t| (emu_to_in(s.top), t.body_row_count())))
            .collect();
        tables.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());

        let page_limit = emu_to_in(deck.slide_height) - MARGIN_IN;
        for (i, &(top, body_rows)) in tables.iter().enumerate() {
            let bottom = table_bottom_in(top, body_rows);
            let limit = tables
                .get(i + 1)
                .map(|&(next_top, _)| next_top - MARGIN_IN)
                .unwrap_or(page_limit)
                .min(page_limit);
            assert!(
                bottom <= limit + 1e-6,
                "slide {si}: table at {top:.2}in reaches {bottom:.2}in past limit {limit:.2}in"
            );
        }
    }
}
