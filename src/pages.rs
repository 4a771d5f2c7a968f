use crate::geometry::{in_to_emu, table_bottom_in};
use crate::model::{Deck, Emu, ShapeRef, Slide};

/// The layout a continuation slide uses: the first whose name contains
/// "blank" (case-insensitive), else the last layout available.
pub fn blank_layout_index(deck: &Deck) -> usize {
    deck.layouts
        .iter()
        .position(|l| l.name.to_lowercase().contains("blank"))
        .unwrap_or_else(|| deck.layouts.len().saturating_sub(1))
}

/// Append a fresh blank slide and return its index.
pub fn add_blank_slide(deck: &mut Deck) -> usize {
    let layout = blank_layout_index(deck);
    deck.slides.push(Slide {
        layout,
        shapes: Vec::new(),
    });
    let idx = deck.slides.len() - 1;
    log::debug!(
        "continuation slide {} created from layout {:?}",
        idx,
        deck.layouts.get(layout).map(|l| l.name.as_str()).unwrap_or("")
    );
    idx
}

/// Deep-copy a shape onto the destination slide. The copy is independent:
/// mutating it never affects the source.
pub fn clone_shape(deck: &mut Deck, src: ShapeRef, dst_slide: usize) -> ShapeRef {
    let copy = deck.shape(src).clone();
    deck.slides[dst_slide].shapes.push(copy);
    ShapeRef {
        slide: dst_slide,
        shape: deck.slides[dst_slide].shapes.len() - 1,
    }
}

/// Recompute a table shape's height from its row count, so a serialized
/// deck agrees with what the rows say after the body grew or was trimmed.
pub fn sync_table_height(deck: &mut Deck, shape: ShapeRef) {
    if let Some(body_rows) = deck.table(shape).map(|t| t.body_row_count()) {
        deck.shape_mut(shape).height = in_to_emu(table_bottom_in(0.0, body_rows));
    }
}

pub fn set_top(deck: &mut Deck, shape: ShapeRef, top: Emu) {
    deck.shape_mut(shape).top = top;
}

/// Move a shape one inch below the visible canvas. Used to neutralize a band
/// left behind on the origin slide once its content lives on a continuation
/// slide; the shape is never deleted.
pub fn suppress(deck: &mut Deck, shape: ShapeRef) {
    let off_canvas = deck.slide_height + in_to_emu(1.0);
    deck.shape_mut(shape).top = off_canvas;
}
