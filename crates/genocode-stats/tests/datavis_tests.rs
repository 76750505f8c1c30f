//! End-to-end checks of the statistics pipeline
//!
//! Uses the three-genotype BMI example (TT/AT/AA) throughout.

use genocode_stats::{
    build_histograms, build_pdfs, coerce_to_float, confidence_interval_to_standard_deviation,
    estimate_overlap, seeded_rng, standard_error_to_standard_deviation, supported_confidence_levels,
    synthesize, synthesize_all, BinEdges, CompoundInput, DistributionSpec, NumericInput,
    StatsError, ViolinProfile, DEFAULT_VIOLIN_POINTS,
};
use proptest::prelude::*;

const MEANS: [f64; 3] = [24.12, 24.43, 24.82];
const SDEVS: [f64; 3] = [3.87, 3.94, 3.95];

// === Pipeline ===

#[test]
fn test_compound_samples_shape() {
    let input = CompoundInput::from_means_and_deviations(&MEANS, &SDEVS).with_sample_size(1000);
    let samples = synthesize_all(&input, &mut seeded_rng(2024)).unwrap();

    assert_eq!(samples.len(), 3);
    for sample in &samples {
        assert_eq!(sample.len(), 1000);
    }
}

#[test]
fn test_histograms_account_for_every_in_range_draw() {
    let input = CompoundInput::from_means_and_deviations(&MEANS, &SDEVS);
    let samples = synthesize_all(&input, &mut seeded_rng(11)).unwrap();
    let edges = BinEdges::linspace(10.0, 40.0, 30).unwrap();
    let histograms = build_histograms(&samples, &edges);

    assert_eq!(histograms.len(), 3);
    for (sample, hist) in samples.iter().zip(&histograms) {
        assert_eq!(hist.counts.len(), 29);
        let out_of_range = sample
            .values()
            .iter()
            .filter(|&&x| x < 10.0 || x > 40.0)
            .count() as u64;
        assert_eq!(hist.total(), 1000 - out_of_range);
    }
}

#[test]
fn test_pdfs_one_value_per_edge() {
    let edges = BinEdges::linspace(10.0, 40.0, 30).unwrap();
    let pdfs = build_pdfs(&MEANS, &SDEVS, &edges).unwrap();

    assert_eq!(pdfs.len(), 3);
    for curve in &pdfs {
        assert_eq!(curve.len(), edges.len());
        assert!(curve.iter().all(|&v| v >= 0.0));
    }
}

#[test]
fn test_overlap_report_pattern() {
    let report = estimate_overlap(&MEANS, &SDEVS).unwrap();
    assert_eq!(report.len(), MEANS.len() - 1);

    for (i, line) in report.iter().enumerate() {
        let prefix = format!("The overlap between dataset 1 and dataset {} is ", i + 1);
        let pct = line.strip_prefix(&prefix).unwrap().strip_suffix('%').unwrap();
        let (whole, frac) = pct.split_once('.').unwrap();
        assert!(whole.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(frac.len(), 2);
    }
}

#[test]
fn test_violins_from_synthesized_samples() {
    let input = CompoundInput::from_means_and_deviations(&MEANS, &SDEVS);
    let samples = synthesize_all(&input, &mut seeded_rng(5)).unwrap();

    for sample in &samples {
        let violin = ViolinProfile::from_sample(sample.values(), DEFAULT_VIOLIN_POINTS).unwrap();
        assert!((violin.summary.mean - 24.5).abs() < 1.0);
    }
}

#[test]
fn test_interval_input_pipeline() {
    let input = CompoundInput::from_confidence_intervals(&[23.5, 23.9, 24.2], &[24.7, 25.0, 25.4])
        .with_confidence_level(90.0)
        .with_sample_size(200);
    let samples = synthesize_all(&input, &mut seeded_rng(8)).unwrap();
    assert!(samples.iter().all(|s| s.len() == 200));
}

#[test]
fn test_invalid_level_surfaces_from_aggregator() {
    let input = CompoundInput::from_confidence_intervals(&[1.0], &[2.0]).with_confidence_level(42.0);
    let err = synthesize_all(&input, &mut seeded_rng(0)).unwrap_err();
    assert_eq!(err, StatsError::InvalidConfidenceLevel(42.0));
}

#[test]
fn test_compound_input_from_json() {
    let input: CompoundInput = serde_json::from_str(
        r#"{"means": ["24.12", 24, null], "standard_deviations": [3.87, 4, 3.95], "sample_size": 10}"#,
    )
    .unwrap();
    assert_eq!(input.confidence_level, 95.0);

    // Third mean is missing
    let err = synthesize_all(&input, &mut seeded_rng(0)).unwrap_err();
    assert!(matches!(err, StatsError::MissingParameters(_)));
}

// === Property-Based Tests ===

proptest! {
    #[test]
    fn prop_se_to_sd(se in 0.0001f64..1000.0, size in 1usize..100_000) {
        let sd = standard_error_to_standard_deviation(se, size);
        prop_assert_eq!(sd, se * (size as f64).sqrt());
    }

    #[test]
    fn prop_ci_levels_resolve(
        lower in -100.0f64..100.0,
        width in 0.001f64..50.0,
        level_idx in 0usize..7,
    ) {
        let level = supported_confidence_levels().nth(level_idx).unwrap();
        let sd = confidence_interval_to_standard_deviation(lower, lower + width, level, 100).unwrap();
        prop_assert!(sd.is_finite() && sd > 0.0);
    }

    #[test]
    fn prop_unknown_levels_rejected(level in 0.0f64..100.0) {
        prop_assume!(supported_confidence_levels().all(|l| l != level));
        let result = confidence_interval_to_standard_deviation(0.0, 1.0, level, 100);
        prop_assert_eq!(result, Err(StatsError::InvalidConfidenceLevel(level)));
    }

    #[test]
    fn prop_synthesize_length(size in 0usize..2000, seed in any::<u64>()) {
        let spec = DistributionSpec::from_mean_sd(24.0, 4.0).with_sample_size(size);
        let sample = synthesize(&spec, &mut seeded_rng(seed)).unwrap();
        prop_assert_eq!(sample.len(), size);
    }

    #[test]
    fn prop_coerce_idempotent(x in -1e9f64..1e9) {
        let once = coerce_to_float(Some(&NumericInput::Float(x))).unwrap();
        let twice = coerce_to_float(once.map(NumericInput::Float).as_ref()).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_coerce_text_matches_float(x in -1e6f64..1e6) {
        let text = NumericInput::Text(x.to_string());
        prop_assert_eq!(coerce_to_float(Some(&text)).unwrap(), Some(x));
    }
}
