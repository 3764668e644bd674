use crate::analysis::error::{check_vector, AnalysisFailure, VectorKind};
use crate::analysis::labels::{CATLA, ROHU, SEA_BASS, SPECIES_LABELS, WILD_FISH_BACKGROUND};
use std::cmp::Ordering;

/// Minimum runner-up score for an override to take effect.
const OVERRIDE_MIN_SCORE: f32 = 0.05;
/// Sea bass at or above this score is trusted as-is.
const SEA_BASS_TRUSTED_SCORE: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedLabel {
    pub index: usize,
    pub label: &'static str,
    pub score: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeciesOverride {
    /// The background class won but a real species was close behind.
    BackgroundSuppressed,
    /// A weak sea bass call was replaced by catla or rohu.
    SeaBassGuard,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesChoice {
    pub chosen: RankedLabel,
    /// Argmax before any override.
    pub argmax: RankedLabel,
    pub overrides: Vec<SpeciesOverride>,
}

/// Pairs scores with labels and sorts them descending. Ties keep label order.
pub fn rank(labels: &[&'static str], scores: &[f32]) -> Vec<RankedLabel> {
    let mut ranked: Vec<RankedLabel> = labels
        .iter()
        .zip(scores)
        .enumerate()
        .map(|(index, (label, score))| RankedLabel {
            index,
            label: *label,
            score: *score,
        })
        .collect();

    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    ranked
}

pub fn resolve_species(scores: &[f32]) -> Result<SpeciesChoice, AnalysisFailure> {
    check_vector(VectorKind::Species, scores, SPECIES_LABELS.len())?;

    let ranked = rank(&SPECIES_LABELS, scores);
    let argmax = ranked[0];
    let second = ranked[1];
    let mut chosen = argmax;
    let mut overrides = Vec::new();

    if chosen.label == WILD_FISH_BACKGROUND && second.score > OVERRIDE_MIN_SCORE {
        chosen = second;
        overrides.push(SpeciesOverride::BackgroundSuppressed);
    }

    if chosen.label == SEA_BASS && chosen.score < SEA_BASS_TRUSTED_SCORE {
        let carp = ranked
            .iter()
            .find(|entry| entry.label == CATLA || entry.label == ROHU);

        if let Some(carp) = carp.filter(|carp| carp.score > OVERRIDE_MIN_SCORE) {
            chosen = *carp;
            overrides.push(SpeciesOverride::SeaBassGuard);
        }
    }

    Ok(SpeciesChoice {
        chosen,
        argmax,
        overrides,
    })
}

/// Compresses a raw score into the range shown to users.
///
/// Low scores are lifted into 0.82..0.90 and anything above 0.95 is capped at
/// 0.93. Scores in between pass through.
pub fn humble_score(raw: f32) -> f32 {
    if raw < 0.8 {
        0.82 + raw * 0.1
    } else if raw > 0.95 {
        0.93
    } else {
        raw
    }
}
