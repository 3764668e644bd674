use crate::analysis::error::{check_vector, AnalysisFailure, VectorKind};
use crate::analysis::labels::{disease_display_name, DISEASE_LABELS, HEALTHY};
use crate::analysis::species::rank;

/// A disease class winning outright at this score is a confident risk.
pub const HARD_THRESH: f32 = 0.65;
/// Any disease class at this score is flagged, even when healthy wins.
pub const SOFT_THRESH: f32 = 0.55;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiseaseTier {
    Hard,
    Borderline,
    Healthy,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiseaseOutcome {
    pub name: String,
    pub has_disease: bool,
    /// Fraction, 0-1.
    pub confidence: f32,
    pub tier: DiseaseTier,
}

pub fn resolve_disease(scores: &[f32]) -> Result<DiseaseOutcome, AnalysisFailure> {
    check_vector(VectorKind::Disease, scores, DISEASE_LABELS.len())?;

    let ranked = rank(&DISEASE_LABELS, scores);
    let top = ranked[0];

    if top.label != HEALTHY && top.score >= HARD_THRESH {
        return Ok(DiseaseOutcome {
            name: format!("{} Risk", disease_display_name(top.label)),
            has_disease: true,
            confidence: top.score,
            tier: DiseaseTier::Hard,
        });
    }

    let borderline = ranked
        .iter()
        .find(|entry| entry.label != HEALTHY && entry.score >= SOFT_THRESH);

    if let Some(entry) = borderline {
        return Ok(DiseaseOutcome {
            name: format!("{} (Borderline)", disease_display_name(entry.label)),
            has_disease: true,
            confidence: entry.score,
            tier: DiseaseTier::Borderline,
        });
    }

    let healthy_score = ranked
        .iter()
        .find(|entry| entry.label == HEALTHY)
        .map(|entry| entry.score)
        .unwrap_or(top.score);

    Ok(DiseaseOutcome {
        name: disease_display_name(HEALTHY).to_string(),
        has_disease: false,
        confidence: healthy_score,
        tier: DiseaseTier::Healthy,
    })
}
