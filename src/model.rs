use serde::{Deserialize, Serialize};

/// English Metric Units, the deck's native length unit (914,400 per inch).
pub type Emu = i64;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Cell {
    pub text: String,
    pub alignment: Alignment,
    pub font_size: f32, // points
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            alignment: Alignment::Left,
            font_size: 12.0,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TableRow {
    pub height: Emu,
    pub cells: Vec<Cell>,
}

/// Row 0 is the header; everything after it is the body.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Table {
    pub col_widths: Vec<Emu>,
    pub rows: Vec<TableRow>,
}

impl Table {
    pub fn column_count(&self) -> usize {
        self.col_widths.len()
    }

    pub fn body_row_count(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    /// Header-row cell texts joined with spaces, used for keyword binding.
    pub fn header_text(&self) -> String {
        let Some(header) = self.rows.first() else {
            return String::new();
        };
        let parts: Vec<&str> = header
            .cells
            .iter()
            .map(|c| c.text.trim())
            .filter(|t| !t.is_empty())
            .collect();
        parts.join(" ")
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        self.rows.get_mut(row).and_then(|r| r.cells.get_mut(col))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TextFrame {
    pub text: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum ShapeKind {
    Label(TextFrame),
    Table(Table),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Shape {
    pub top: Emu,
    pub left: Emu,
    pub width: Emu,
    pub height: Emu,
    pub kind: ShapeKind,
}

impl Shape {
    pub fn label_text(&self) -> Option<&str> {
        match &self.kind {
            ShapeKind::Label(tf) => Some(&tf.text),
            ShapeKind::Table(_) => None,
        }
    }

    pub fn table(&self) -> Option<&Table> {
        match &self.kind {
            ShapeKind::Table(t) => Some(t),
            ShapeKind::Label(_) => None,
        }
    }

    pub fn table_mut(&mut self) -> Option<&mut Table> {
        match &mut self.kind {
            ShapeKind::Table(t) => Some(t),
            ShapeKind::Label(_) => None,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Layout {
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Slide {
    /// Index into `Deck::layouts`.
    pub layout: usize,
    pub shapes: Vec<Shape>,
}

/// An in-memory deck. Continuation slides are appended during a run; slides
/// are never removed. Clone the template deck per run so the original
/// description stays immutable across invocations.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Deck {
    pub slide_width: Emu,
    pub slide_height: Emu,
    pub layouts: Vec<Layout>,
    pub slides: Vec<Slide>,
}

/// Handle to one shape on one slide. Cloning only ever appends shapes, so a
/// ref taken at binding time stays valid for the whole run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShapeRef {
    pub slide: usize,
    pub shape: usize,
}

impl Deck {
    pub fn shape(&self, r: ShapeRef) -> &Shape {
        &self.slides[r.slide].shapes[r.shape]
    }

    pub fn shape_mut(&mut self, r: ShapeRef) -> &mut Shape {
        &mut self.slides[r.slide].shapes[r.shape]
    }

    pub fn table(&self, r: ShapeRef) -> Option<&Table> {
        self.shape(r).table()
    }

    pub fn table_mut(&mut self, r: ShapeRef) -> Option<&mut Table> {
        self.shape_mut(r).table_mut()
    }
}
