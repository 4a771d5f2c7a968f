mod bands;
mod cascade;
mod error;
mod fill;
mod geometry;
mod model;
mod narrative;
mod pages;
mod records;

pub use bands::{BandSpec, HeadlineFacts, Relabel, fill_headline, replace_text};
pub use cascade::{BandOutcome, BandReport, RunReport, SkipReason, run_cascade};
pub use error::Error;
pub use fill::{apply_table_style, ensure_body_rows, fill_table};
pub use geometry::{
    CONT_LABEL_TOP_IN, CONT_TABLE_TOP_IN, EMU_PER_INCH, LABEL_GAP_IN, MARGIN_IN, ROW_H_BODY_IN,
    ROW_H_HEADER_IN, body_rows_that_fit, emu_to_in, in_to_emu, table_bottom_in,
};
pub use model::{
    Alignment, Cell, Deck, Emu, Layout, Shape, ShapeKind, ShapeRef, Slide, Table, TableRow,
    TextFrame,
};
pub use narrative::{NarrativeError, NarrativeSource, apply_narrative, fallback_paragraph};
pub use records::{
    RowRecord, TABLE_DECIMALS, cagr, format_pct, format_value, unit_label_from_summary,
};

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;

/// Everything one population run needs besides the deck itself: which slide
/// carries the bands, the shared unit label, the headline scalars, and the
/// per-band row data.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Job {
    pub origin_slide: usize,
    /// Slide carrying the narrative placeholder, when the template has one.
    #[serde(default)]
    pub narrative_slide: Option<usize>,
    pub unit_label: String,
    /// Template placeholder text to replace with the headline market name.
    #[serde(default)]
    pub placeholder_name: Option<String>,
    #[serde(default)]
    pub headline: Option<HeadlineFacts>,
    /// Keywords locating the narrative placeholder label.
    #[serde(default)]
    pub narrative_keywords: Vec<String>,
    pub bands: Vec<BandSpec>,
}

/// Populate a loaded deck in place: stamp the market name, fill the headline
/// table, run the band cascade, and write the narrative paragraph. Pure in
/// the sense that the same (deck, job) always yields the same mutated deck;
/// the returned report says what happened to each band. Fails only when the
/// job names a slide the deck does not have.
pub fn populate(
    deck: &mut Deck,
    job: &Job,
    narrative_source: Option<&dyn NarrativeSource>,
) -> Result<RunReport, Error> {
    let t0 = Instant::now();

    let slide_count = deck.slides.len();
    if job.origin_slide >= slide_count {
        return Err(Error::InvalidJob(format!(
            "origin_slide {} out of range (deck has {slide_count} slide(s))",
            job.origin_slide
        )));
    }
    if let Some(slide) = job.narrative_slide
        && slide >= slide_count
    {
        return Err(Error::InvalidJob(format!(
            "narrative_slide {slide} out of range (deck has {slide_count} slide(s))"
        )));
    }

    if let (Some(placeholder), Some(facts)) = (&job.placeholder_name, &job.headline) {
        replace_text(deck, job.origin_slide, placeholder, &facts.market_name);
        if let Some(slide) = job.narrative_slide
            && slide != job.origin_slide
        {
            replace_text(deck, slide, placeholder, &facts.market_name);
        }
    }

    let mut report = run_cascade(deck, job.origin_slide, &job.bands, &job.unit_label);

    if let Some(facts) = &job.headline {
        report.headline_rendered = bands::fill_headline(deck, job.origin_slide, facts);
        if let Some(slide) = job.narrative_slide {
            report.narrative_rendered =
                apply_narrative(deck, slide, &job.narrative_keywords, narrative_source, facts);
        }
    }

    log::info!(
        "Populated {} band(s) in {:.1}ms: {} rendered, {} skipped, continuation={}",
        report.bands.len(),
        t0.elapsed().as_secs_f64() * 1000.0,
        report
            .bands
            .iter()
            .filter(|b| matches!(b.outcome, BandOutcome::Rendered { .. }))
            .count(),
        report
            .bands
            .iter()
            .filter(|b| matches!(b.outcome, BandOutcome::Skipped(_)))
            .count(),
        report.continuation_slide.is_some(),
    );

    Ok(report)
}

pub fn load_deck(path: &Path) -> Result<Deck, Error> {
    let bytes = std::fs::read(path).map_err(Error::Io)?;
    serde_json::from_slice(&bytes)
        .map_err(|e| Error::InvalidDeck(format!("{}: {e}", path.display())))
}

pub fn save_deck(deck: &Deck, path: &Path) -> Result<(), Error> {
    let bytes = serde_json::to_vec_pretty(deck)
        .map_err(|e| Error::InvalidDeck(e.to_string()))?;
    std::fs::write(path, bytes).map_err(Error::Io)
}

pub fn load_job(path: &Path) -> Result<Job, Error> {
    let bytes = std::fs::read(path).map_err(Error::Io)?;
    serde_json::from_slice(&bytes)
        .map_err(|e| Error::InvalidJob(format!("{}: {e}", path.display())))
}
