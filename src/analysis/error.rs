use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorKind {
    Species,
    Disease,
}

impl fmt::Display for VectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorKind::Species => write!(f, "species"),
            VectorKind::Disease => write!(f, "disease"),
        }
    }
}

/// Raised when a probability vector cannot be post-processed.
///
/// Never reaches callers of [`crate::analysis::analyzer::Analyzer::analyze`],
/// which substitutes the fallback result instead.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisFailure {
    VectorLength {
        vector: VectorKind,
        expected: usize,
        actual: usize,
    },
    NonFiniteScore {
        vector: VectorKind,
        index: usize,
    },
}

impl fmt::Display for AnalysisFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisFailure::VectorLength {
                vector,
                expected,
                actual,
            } => write!(
                f,
                "{} vector has {} scores, expected {}",
                vector, actual, expected
            ),
            AnalysisFailure::NonFiniteScore { vector, index } => {
                write!(f, "{} vector score at index {} is not finite", vector, index)
            }
        }
    }
}

impl std::error::Error for AnalysisFailure {}

pub fn check_vector(
    vector: VectorKind,
    scores: &[f32],
    expected: usize,
) -> Result<(), AnalysisFailure> {
    if scores.len() != expected {
        return Err(AnalysisFailure::VectorLength {
            vector,
            expected,
            actual: scores.len(),
        });
    }

    match scores.iter().position(|score| !score.is_finite()) {
        Some(index) => Err(AnalysisFailure::NonFiniteScore { vector, index }),
        None => Ok(()),
    }
}
