mod common;

use common::synthetic_image::{empty_tray_rgb, grain_tray_rgb};
use grain_grader::{AnalyzerParams, Measurements, QualityAnalyzer, QualityLabel};

#[test]
fn synthetic_tray_produces_a_complete_report() {
    let frame = grain_tray_rgb(256, 6, 9.0);
    let measurements = Measurements::parse([
        ("weight_g", "500"),
        ("container_volume_ml", "1000"),
        ("displaced_volume_ml", "200"),
        ("jar_settled_mm", "8"),
        ("jar_total_mm", "120"),
        ("moisture_adc", "4200"),
        ("scale_marker_px", "100"),
        ("scale_marker_mm", "10"),
    ])
    .expect("measurement pairs should parse");

    let analyzer = QualityAnalyzer::new(AnalyzerParams::default());
    let report = analyzer.process_with_diagnostics(&frame, &measurements);
    let result = &report.result;

    assert!((0.0..=1.0).contains(&result.score), "score={}", result.score);
    assert!((0.0..=1.0).contains(&result.vision_conf));
    assert!(matches!(
        result.label,
        QualityLabel::Superior | QualityLabel::Moderate | QualityLabel::Inferior
    ));
    assert!(result.latency_ms >= 0.0);

    // 36 well-separated grains must survive thresholding and sizing.
    let psd = &result.psd;
    assert!(psd.fineness_modulus.is_some());
    assert_eq!(psd.percent_passing.len(), 6);
    assert_eq!(psd.percent_retained.len(), 6);

    // Bench measurements feed the property calculators.
    let bulk = result.bulk_density.expect("volume was provided");
    assert!((bulk.g_cm3 - 0.5).abs() < 1e-12);
    assert!((bulk.kg_m3 - 500.0).abs() < 1e-9);
    assert_eq!(result.specific_gravity, Some(2.5));
    let silt = result.silt_percent.expect("jar heights were provided");
    assert!((silt - 8.0 / 120.0 * 100.0).abs() < 1e-9);
    // adc 4200 -> -0.02 * 4200 + 100 = 16 percent.
    let moisture = result.moisture_percent.expect("adc was provided");
    assert!((moisture - 16.0).abs() < 1e-9);

    // The trace covers both image stages and the preview is at working size.
    let trace = &report.trace;
    assert_eq!(trace.input.width, 256);
    assert_eq!(trace.input.working_width, 512);
    let vision = trace.vision.as_ref().expect("vision stage always runs");
    assert!(vision.blob_count > 0);
    let sizing = trace.sizing.as_ref().expect("sizing stage always runs");
    assert!(sizing.accepted > 0);
    assert!((sizing.scale_mm_per_px - 0.1).abs() < 1e-12);
    assert_eq!(report.vision.segmented.w, 512);
    assert_eq!(report.vision.segmented.h, 512);
}

#[test]
fn empty_tray_grades_without_particles() {
    let frame = empty_tray_rgb(128);
    let analyzer = QualityAnalyzer::new(AnalyzerParams::default());
    let result = analyzer.process(&frame, &Measurements::default());

    assert_eq!(result.psd.fineness_modulus, None);
    assert!(result.psd.percent_passing.is_empty());
    assert_eq!(result.bulk_density, None);
    assert_eq!(result.specific_gravity, None);
    assert_eq!(result.silt_percent, None);
    assert_eq!(result.moisture_percent, None);
    // Without moisture the score cannot exceed the vision weight.
    assert!(result.score <= 0.7 + 1e-12);
}

#[test]
fn moisture_adc_wins_over_direct_percentage() {
    let frame = grain_tray_rgb(128, 4, 7.0);
    let analyzer = QualityAnalyzer::new(AnalyzerParams::default());

    let both = Measurements {
        moisture_adc: Some(5000.0),
        moisture_percent: Some(40.0),
        ..Default::default()
    };
    let result = analyzer.process(&frame, &both);
    // adc 5000 maps to 0 percent, overriding the stale direct reading.
    assert_eq!(result.moisture_percent, Some(0.0));

    let direct_only = Measurements {
        moisture_percent: Some(40.0),
        ..Default::default()
    };
    let result = analyzer.process(&frame, &direct_only);
    assert_eq!(result.moisture_percent, Some(40.0));
}
