#[cfg(test)]
mod freshness_test {
    use crate::analysis::disease::{resolve_disease, DiseaseOutcome, DiseaseTier};
    use crate::analysis::freshness::derive_freshness;
    use crate::analysis::random::impl_fake::RandomSourceFake;
    use crate::analysis::random::impl_rand::RandomSourceRand;
    use crate::analysis::random::interface::RandomSource;
    use crate::analysis::result::FreshnessLabel;
    use crate::analysis::tests::fixture::assert_close;

    fn diseased(confidence: f32) -> DiseaseOutcome {
        DiseaseOutcome {
            name: "White Spot Risk".to_string(),
            has_disease: true,
            confidence,
            tier: DiseaseTier::Hard,
        }
    }

    #[test]
    fn test_diseased_freshness_range() {
        let random = RandomSourceFake::new(0.5);

        let freshness = derive_freshness(&diseased(0.55), 0.9, &random);
        assert_close(freshness.score, 0.45);
        assert_eq!(freshness.label, FreshnessLabel::Stale);

        let freshness = derive_freshness(&diseased(1.0), 0.9, &random);
        assert_close(freshness.score, 0.18);
        assert_eq!(freshness.label, FreshnessLabel::Stale);
    }

    #[test]
    fn test_diseased_confidence_is_clamped() {
        let random = RandomSourceFake::new(0.5);

        assert_close(derive_freshness(&diseased(0.3), 0.9, &random).score, 0.45);
        assert_close(derive_freshness(&diseased(1.4), 0.9, &random).score, 0.18);
    }

    #[test]
    fn test_healthy_freshness_uses_species_score() {
        let healthy = resolve_disease(&[0.05, 0.9, 0.05]).unwrap();

        let freshness = derive_freshness(&healthy, 0.87, &RandomSourceFake::new(0.5));
        assert_close(freshness.score, 0.86);
        assert_eq!(freshness.label, FreshnessLabel::Fresh);

        let freshness = derive_freshness(&healthy, 0.99, &RandomSourceFake::new(0.0));
        assert_close(freshness.score, 0.94);

        let freshness = derive_freshness(&healthy, 0.5, &RandomSourceFake::new(1.0));
        assert_close(freshness.score, 0.81);
    }

    #[test]
    fn test_healthy_jitter_stays_in_band() {
        let healthy = resolve_disease(&[0.05, 0.9, 0.05]).unwrap();
        let random = RandomSourceRand::new();

        for _ in 0..1000 {
            let freshness = derive_freshness(&healthy, 0.9, &random);
            assert!(freshness.score >= 0.87 - 1e-6);
            assert!(freshness.score < 0.91 + 1e-6);
            assert_eq!(freshness.label, FreshnessLabel::Fresh);
        }
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let a = RandomSourceRand::seeded(42);
        let b = RandomSourceRand::seeded(42);

        for _ in 0..10 {
            assert_eq!(a.uniform(0.0, 0.04), b.uniform(0.0, 0.04));
        }
    }

    #[test]
    fn test_empty_range_returns_low() {
        assert_eq!(RandomSourceRand::seeded(1).uniform(0.3, 0.3), 0.3);
        assert_eq!(RandomSourceFake::new(0.7).uniform(0.3, 0.3), 0.3);
    }
}
