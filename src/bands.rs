use serde::{Deserialize, Serialize};

use crate::fill::apply_table_style;
use crate::model::{Deck, ShapeKind, ShapeRef};
use crate::pages;
use crate::records::RowRecord;

/// A substring rewrite applied to a band's label, on both the origin copy
/// and any continuation copy (e.g. a breakdown labeled "Breakup by Form" in
/// the template while the data calls it "Breakup by Source").
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Relabel {
    pub from: String,
    pub to: String,
}

/// One data category to render: a stable id, the keywords that locate its
/// label and table on the template slide, an optional label rewrite, and the
/// ordered rows to show.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BandSpec {
    pub id: String,
    pub keywords: Vec<String>,
    #[serde(default)]
    pub relabel: Option<Relabel>,
    pub rows: Vec<RowRecord>,
}

/// Where a band's shapes were found on the template slide. Binding happens
/// once per run; the cascade works off these refs instead of re-matching
/// keywords per operation.
#[derive(Clone, Copy, Debug)]
pub struct BandBinding {
    pub label: Option<ShapeRef>,
    pub table: Option<ShapeRef>,
}

fn matches_all(haystack: &str, keywords: &[String]) -> bool {
    let h = haystack.to_lowercase();
    keywords.iter().all(|k| h.contains(&k.to_lowercase()))
}

fn find_label(deck: &Deck, slide: usize, keywords: &[String]) -> Option<ShapeRef> {
    deck.slides
        .get(slide)?
        .shapes
        .iter()
        .position(|s| s.label_text().is_some_and(|t| matches_all(t, keywords)))
        .map(|shape| ShapeRef { slide, shape })
}

fn find_table(deck: &Deck, slide: usize, keywords: &[String]) -> Option<ShapeRef> {
    deck.slides
        .get(slide)?
        .shapes
        .iter()
        .position(|s| {
            s.table()
                .is_some_and(|t| matches_all(&t.header_text(), keywords))
        })
        .map(|shape| ShapeRef { slide, shape })
}

/// Bind every band spec to its shapes on the template slide. A band whose
/// table is missing is reported by the cascade as skipped; the warning here
/// is the only place the mismatch is logged.
pub fn bind_bands(deck: &Deck, slide: usize, specs: &[BandSpec]) -> Vec<BandBinding> {
    specs
        .iter()
        .map(|spec| {
            let label = find_label(deck, slide, &spec.keywords);
            let table = find_table(deck, slide, &spec.keywords);
            if table.is_none() {
                log::warn!(
                    "band '{}' has no matching table on slide {} (keywords {:?})",
                    spec.id,
                    slide,
                    spec.keywords
                );
            }
            BandBinding { label, table }
        })
        .collect()
}

/// Apply a band's label rewrite to one label shape, in place.
pub fn apply_relabel(deck: &mut Deck, label: ShapeRef, relabel: &Relabel) {
    if let ShapeKind::Label(tf) = &mut deck.shape_mut(label).kind
        && tf.text.contains(&relabel.from)
    {
        tf.text = tf.text.replace(&relabel.from, &relabel.to);
    }
}

/// Append the continuation marker to a label unless it already carries one.
pub fn mark_continued(deck: &mut Deck, label: ShapeRef) {
    if let ShapeKind::Label(tf) = &mut deck.shape_mut(label).kind
        && !tf.text.to_lowercase().contains("(cont")
    {
        tf.text = format!("{} (cont.)", tf.text);
    }
}

/// Rewrite every label on a slide containing `needle`, returning how many
/// were touched. Used to stamp the real market name over the template's
/// placeholder name.
pub fn replace_text(deck: &mut Deck, slide: usize, needle: &str, replacement: &str) -> usize {
    let Some(shapes) = deck.slides.get_mut(slide).map(|s| &mut s.shapes) else {
        return 0;
    };
    let mut touched = 0;
    for shape in shapes {
        if let ShapeKind::Label(tf) = &mut shape.kind
            && tf.text.contains(needle)
        {
            tf.text = tf.text.replace(needle, replacement);
            touched += 1;
        }
    }
    if touched > 0 {
        log::debug!("replaced {needle:?} in {touched} label(s) on slide {slide}");
    }
    touched
}

/// Headline scalars shown in the summary table and fed to the narrative
/// paragraph. All values are pre-formatted display strings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HeadlineFacts {
    pub market_name: String,
    pub unit_label: String,
    pub value_t0: String,
    pub value_t1: String,
    /// Growth rate over the forecast span, shown in the summary table.
    pub forecast_growth: String,
    /// Growth rate over the trailing historical span, used by the narrative.
    pub historical_growth: String,
}

const HEADLINE_KEYWORD: &str = "particulars";

/// Fill the single-body-row summary table located by its header keyword.
/// Returns false (with a warning) when the slide has no such table.
pub fn fill_headline(deck: &mut Deck, slide: usize, facts: &HeadlineFacts) -> bool {
    let keywords = [HEADLINE_KEYWORD.to_string()];
    let Some(table_ref) = find_table(deck, slide, &keywords) else {
        log::warn!("no headline table on slide {slide} (header keyword {HEADLINE_KEYWORD:?})");
        return false;
    };
    let Some(table) = deck.table_mut(table_ref) else {
        return false;
    };
    let values = [
        facts.market_name.as_str(),
        facts.unit_label.as_str(),
        facts.value_t0.as_str(),
        facts.value_t1.as_str(),
        facts.forecast_growth.as_str(),
    ];
    for (c, val) in values.iter().take(table.column_count()).enumerate() {
        if let Some(cell) = table.cell_mut(1, c) {
            cell.text = (*val).to_string();
        }
    }
    apply_table_style(table);
    pages::sync_table_height(deck, table_ref);
    true
}
