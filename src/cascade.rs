use serde::{Deserialize, Serialize};

use crate::bands::{self, BandBinding, BandSpec};
use crate::fill::fill_table;
use crate::geometry::{
    CONT_LABEL_TOP_IN, CONT_TABLE_TOP_IN, LABEL_GAP_IN, MARGIN_IN, body_rows_that_fit, emu_to_in,
    in_to_emu, table_bottom_in,
};
use crate::model::{Deck, ShapeRef};
use crate::pages::{add_blank_slide, clone_shape, set_top, suppress, sync_table_height};
use crate::records::RowRecord;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum SkipReason {
    /// No table matching the band's keywords exists on the origin slide.
    NotInTemplate,
    /// The band had no rows; the template's default content is left alone.
    NoData,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum BandOutcome {
    Rendered {
        rows_on_origin: usize,
        rows_on_continuation: usize,
    },
    Skipped(SkipReason),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BandReport {
    pub id: String,
    pub outcome: BandOutcome,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunReport {
    pub bands: Vec<BandReport>,
    pub continuation_slide: Option<usize>,
    pub headline_rendered: bool,
    pub narrative_rendered: bool,
}

struct Continuation {
    slide: usize,
    /// Where the next band's label (or table, if it has no label) lands.
    next_top_in: f64,
}

/// Run the pagination pass over the bands on `origin`, in order. The first
/// band whose rows do not fit opens a continuation slide; every band after
/// it is rendered there in full. Returns a per-band report; structural
/// mismatches are skipped (and warned about at binding time), never fatal.
pub fn run_cascade(
    deck: &mut Deck,
    origin: usize,
    specs: &[BandSpec],
    unit_label: &str,
) -> RunReport {
    let bindings = bands::bind_bands(deck, origin, specs);

    // Label rewrites happen before any cloning so both copies agree.
    for (spec, binding) in specs.iter().zip(&bindings) {
        if let (Some(relabel), Some(label)) = (&spec.relabel, binding.label) {
            bands::apply_relabel(deck, label, relabel);
        }
    }

    // Every band's fitting limit depends only on template positions, so the
    // whole ordered (band, limit) list is fixed before anything moves.
    let bottom_in = emu_to_in(deck.slide_height);
    let limits: Vec<f64> = (0..bindings.len())
        .map(|i| {
            let next_top = bindings[i + 1..]
                .iter()
                .find_map(|b| b.table)
                .map(|t| emu_to_in(deck.shape(t).top))
                .unwrap_or(bottom_in);
            next_top.min(bottom_in) - MARGIN_IN
        })
        .collect();

    let mut cont: Option<Continuation> = None;
    let mut reports = Vec::with_capacity(specs.len());

    for ((spec, binding), limit_in) in specs.iter().zip(&bindings).zip(&limits) {
        let outcome = process_band(deck, spec, binding, *limit_in, unit_label, &mut cont);
        reports.push(BandReport {
            id: spec.id.clone(),
            outcome,
        });
    }

    RunReport {
        bands: reports,
        continuation_slide: cont.map(|c| c.slide),
        headline_rendered: false,
        narrative_rendered: false,
    }
}

fn process_band(
    deck: &mut Deck,
    spec: &BandSpec,
    binding: &BandBinding,
    limit_in: f64,
    unit_label: &str,
    cont: &mut Option<Continuation>,
) -> BandOutcome {
    let Some(table_ref) = binding.table else {
        // Skipping must not stop the cascade: later bands still render.
        return BandOutcome::Skipped(SkipReason::NotInTemplate);
    };
    if spec.rows.is_empty() {
        log::debug!("band '{}' has no rows; template default left in place", spec.id);
        return BandOutcome::Skipped(SkipReason::NoData);
    }

    match cont {
        Some(state) => {
            let shown = continue_band(
                deck,
                binding.label,
                table_ref,
                &spec.rows,
                unit_label,
                state,
                false,
            );
            // Its content now lives solely on the continuation slide.
            suppress(deck, table_ref);
            if let Some(label) = binding.label {
                suppress(deck, label);
            }
            BandOutcome::Rendered {
                rows_on_origin: 0,
                rows_on_continuation: shown,
            }
        }
        None => {
            let top_in = emu_to_in(deck.shape(table_ref).top);
            let capacity = body_rows_that_fit(top_in, limit_in);
            let shown = capacity.min(spec.rows.len());
            log::debug!(
                "band '{}' top={:.2}in limit={:.2}in capacity={} rows={}",
                spec.id,
                top_in,
                limit_in,
                capacity,
                spec.rows.len()
            );
            if let Some(table) = deck.table_mut(table_ref) {
                fill_table(table, &spec.rows[..shown], unit_label);
            }
            sync_table_height(deck, table_ref);
            if shown == spec.rows.len() {
                return BandOutcome::Rendered {
                    rows_on_origin: shown,
                    rows_on_continuation: 0,
                };
            }

            // Overflow: open the continuation slide and finish the band
            // there. The origin copy keeps the rows that fit, so it is not
            // suppressed.
            let slide = add_blank_slide(deck);
            let mut state = Continuation {
                slide,
                next_top_in: CONT_LABEL_TOP_IN,
            };
            let rendered = continue_band(
                deck,
                binding.label,
                table_ref,
                &spec.rows[shown..],
                unit_label,
                &mut state,
                true,
            );
            *cont = Some(state);
            BandOutcome::Rendered {
                rows_on_origin: shown,
                rows_on_continuation: rendered,
            }
        }
    }
}

/// Clone a band onto the continuation slide and fill it with `rows` in full;
/// no capacity limit applies there. `continued` marks the overflowing band
/// itself, which lands at the fixed continuation offsets and gets the
/// "(cont.)" marker; later bands stack below the running cursor.
fn continue_band(
    deck: &mut Deck,
    label: Option<ShapeRef>,
    table_src: ShapeRef,
    rows: &[RowRecord],
    unit_label: &str,
    state: &mut Continuation,
    continued: bool,
) -> usize {
    let mut table_top = if continued {
        CONT_TABLE_TOP_IN
    } else {
        state.next_top_in
    };

    if let Some(label_src) = label {
        let new_label = clone_shape(deck, label_src, state.slide);
        if continued {
            bands::mark_continued(deck, new_label);
            set_top(deck, new_label, in_to_emu(CONT_LABEL_TOP_IN));
        } else {
            set_top(deck, new_label, in_to_emu(state.next_top_in));
            table_top = state.next_top_in + LABEL_GAP_IN;
        }
    }

    let new_table = clone_shape(deck, table_src, state.slide);
    set_top(deck, new_table, in_to_emu(table_top));
    if let Some(table) = deck.table_mut(new_table) {
        // The clone inherits whatever body rows the origin copy holds; trim
        // so the continuation shows exactly this slice and nothing stale.
        table.rows.truncate(1 + rows.len());
        fill_table(table, rows, unit_label);
    }
    sync_table_height(deck, new_table);

    let body_rows = deck
        .table(new_table)
        .map(|t| t.body_row_count())
        .unwrap_or(0);
    state.next_top_in = table_bottom_in(table_top, body_rows) + MARGIN_IN;
    rows.len()
}
