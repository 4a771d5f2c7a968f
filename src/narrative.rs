use std::fmt;

use crate::bands::HeadlineFacts;
use crate::model::{Deck, ShapeKind};

#[derive(Debug)]
pub struct NarrativeError(pub String);

impl fmt::Display for NarrativeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "narrative source failed: {}", self.0)
    }
}

impl std::error::Error for NarrativeError {}

/// Optional collaborator supplying a short prose paragraph for the summary
/// placeholder. Implementations must bound their own time; any error is
/// absorbed by the fallback and never aborts the run.
pub trait NarrativeSource {
    fn generate(&self, facts: &HeadlineFacts) -> Result<String, NarrativeError>;
}

/// Deterministic templated paragraph built only from already-known scalars.
pub fn fallback_paragraph(facts: &HeadlineFacts) -> String {
    format!(
        "The {} market reached US$ {} {} in the base year after expanding at \
         {} CAGR over the preceding period. Demand is supported by shifting \
         consumer preferences, innovations in production, and broader end-use \
         adoption. Continued product innovation and expansion in emerging \
         regions should sustain growth through the forecast period.",
        facts.market_name.to_lowercase(),
        facts.value_t0,
        facts.unit_label,
        facts.historical_growth,
    )
}

/// Write the narrative paragraph into the label matching `keywords` on
/// `slide`. The source (if any) is tried first; a failure or blank result
/// falls back to the templated paragraph. Returns false when the slide has
/// no matching placeholder.
pub fn apply_narrative(
    deck: &mut Deck,
    slide: usize,
    keywords: &[String],
    source: Option<&dyn NarrativeSource>,
    facts: &HeadlineFacts,
) -> bool {
    let text = match source {
        Some(s) => match s.generate(facts) {
            Ok(t) if !t.trim().is_empty() => t.trim().to_string(),
            Ok(_) => fallback_paragraph(facts),
            Err(e) => {
                log::warn!("{e}; using fallback paragraph");
                fallback_paragraph(facts)
            }
        },
        None => fallback_paragraph(facts),
    };

    let lowered: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
    let Some(shapes) = deck.slides.get_mut(slide).map(|s| &mut s.shapes) else {
        log::warn!("no slide {slide} for the narrative placeholder");
        return false;
    };
    for shape in shapes {
        if let ShapeKind::Label(tf) = &mut shape.kind {
            let t = tf.text.to_lowercase();
            if !lowered.is_empty() && lowered.iter().all(|k| t.contains(k)) {
                tf.text = text;
                return true;
            }
        }
    }
    log::warn!("no narrative placeholder on slide {slide} (keywords {keywords:?})");
    false
}
