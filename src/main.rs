use grain_grader::image::RgbImageU8;
use grain_grader::{AnalyzerParams, Measurements, QualityAnalyzer};

fn main() {
    // Demo stub: builds a synthetic sample frame and grades it.
    let size = 256usize;
    let mut frame = RgbImageU8::new(size, size);
    for y in 0..size {
        for x in 0..size {
            frame.set(x, y, [35, 32, 28]);
        }
    }
    // Scatter a grid of bright square grains over the dark tray.
    for by in 0..6 {
        for bx in 0..6 {
            let ox = 16 + bx * 38;
            let oy = 16 + by * 38;
            for y in oy..oy + 14 {
                for x in ox..ox + 14 {
                    frame.set(x, y, [205, 195, 175]);
                }
            }
        }
    }

    let measurements = Measurements {
        weight_g: Some(500.0),
        container_volume_ml: Some(1000.0),
        moisture_adc: Some(4200.0),
        scale_marker_px: Some(100.0),
        scale_marker_mm: Some(10.0),
        ..Default::default()
    };

    let analyzer = QualityAnalyzer::new(AnalyzerParams::default());
    let result = analyzer.process(&frame, &measurements);
    println!(
        "label={} score={:.3} fm={:?} latency_ms={:.3}",
        result.label, result.score, result.psd.fineness_modulus, result.latency_ms
    );
}
