//! Freshness estimate.
//!
//! There is no freshness model yet. The score is derived from the disease
//! outcome, or from the species confidence for healthy fish, plus a small
//! jitter.

use crate::analysis::disease::DiseaseOutcome;
use crate::analysis::random::interface::RandomSource;
use crate::analysis::result::{FreshnessLabel, FreshnessResult};

const FRESH_MIN_SCORE: f32 = 0.75;
const JITTER_SPAN: f32 = 0.04;

/// `species_display` is the humbled species score as a fraction.
pub fn derive_freshness(
    disease: &DiseaseOutcome,
    species_display: f32,
    random: &dyn RandomSource,
) -> FreshnessResult {
    if disease.has_disease {
        let confidence = disease.confidence.clamp(0.55, 1.0);
        return FreshnessResult {
            score: 0.45 - (confidence - 0.55) * 0.6,
            label: FreshnessLabel::Stale,
        };
    }

    let base = species_display.clamp(0.8, 0.97);
    let score = base - 0.03 + random.uniform(0.0, JITTER_SPAN);
    let label = if score >= FRESH_MIN_SCORE {
        FreshnessLabel::Fresh
    } else {
        FreshnessLabel::Stale
    };

    FreshnessResult { score, label }
}
