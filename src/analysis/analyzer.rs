use crate::analysis::disease::resolve_disease;
use crate::analysis::error::AnalysisFailure;
use crate::analysis::freshness::derive_freshness;
use crate::analysis::labels::species_display_name;
use crate::analysis::random::interface::RandomSource;
use crate::analysis::result::{AnalysisResult, BoundingBox, DiseaseResult, SpeciesResult};
use crate::analysis::species::{humble_score, resolve_species};
use crate::config::Config;
use crate::library::logger::interface::Logger;
use std::sync::Arc;

/// Turns the raw species and disease vectors for one image into an
/// [`AnalysisResult`].
pub struct Analyzer {
    logger: Arc<dyn Logger + Send + Sync>,
    random: Arc<dyn RandomSource + Send + Sync>,
    debug: bool,
}

impl Analyzer {
    pub fn new(
        config: &Config,
        logger: Arc<dyn Logger + Send + Sync>,
        random: Arc<dyn RandomSource + Send + Sync>,
    ) -> Self {
        Self {
            logger: logger.with_namespace("analyzer"),
            random,
            debug: config.debug,
        }
    }

    /// Never fails. Malformed vectors yield [`AnalysisResult::fallback`].
    pub fn analyze(&self, species: &[f32], disease: &[f32]) -> AnalysisResult {
        match self.try_analyze(species, disease) {
            Ok(result) => result,
            Err(failure) => {
                let _ = self
                    .logger
                    .info(&format!("Analysis failed, using fallback: {}", failure));
                AnalysisResult::fallback()
            }
        }
    }

    pub fn try_analyze(
        &self,
        species: &[f32],
        disease: &[f32],
    ) -> Result<AnalysisResult, AnalysisFailure> {
        let species_choice = resolve_species(species)?;
        let disease_outcome = resolve_disease(disease)?;

        let display_score = humble_score(species_choice.chosen.score);
        let freshness = derive_freshness(&disease_outcome, display_score, self.random.as_ref());

        self.diagnose(|| {
            format!(
                "argmax={} ({:.4}) chosen={}#{} ({:.4}) overrides={:?} display={:.4}",
                species_choice.argmax.label,
                species_choice.argmax.score,
                species_choice.chosen.label,
                species_choice.chosen.index,
                species_choice.chosen.score,
                species_choice.overrides,
                display_score,
            )
        });
        self.diagnose(|| {
            format!(
                "disease={} tier={:?} confidence={:.4} freshness={:.4} {:?}",
                disease_outcome.name,
                disease_outcome.tier,
                disease_outcome.confidence,
                freshness.score,
                freshness.label,
            )
        });

        Ok(AnalysisResult {
            species: SpeciesResult {
                name: species_display_name(species_choice.chosen.label).to_string(),
                confidence: display_score * 100.0,
            },
            freshness,
            disease: DiseaseResult {
                name: disease_outcome.name,
                has_disease: disease_outcome.has_disease,
                confidence: disease_outcome.confidence * 100.0,
            },
            bounding_box: BoundingBox::full_frame(),
        })
    }

    fn diagnose<F: FnOnce() -> String>(&self, message: F) {
        if self.debug {
            let _ = self.logger.debug(&message());
        }
    }
}
