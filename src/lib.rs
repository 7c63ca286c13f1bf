#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod analyzer;
pub mod diagnostics;
pub mod image;
pub mod measurements;
pub mod types;

// Pipeline stages – public so tools can run them independently.
pub mod contour;
pub mod fusion;
pub mod imgproc;
pub mod properties;
pub mod psd;
pub mod sizing;
pub mod vision;

// --- High-level re-exports -------------------------------------------------

// Main entry points: analyzer + results.
pub use crate::analyzer::{AnalyzerParams, QualityAnalyzer};
pub use crate::types::{QualityLabel, QualityResult};

// High-level diagnostics returned by the analyzer.
pub use crate::diagnostics::{AnalysisReport, PipelineTrace};

// Typed measurement boundary shared with the surrounding service.
pub use crate::measurements::{MeasurementError, Measurements};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use grain_grader::prelude::*;
///
/// # fn main() {
/// let frame = RgbImageU8::new(640, 480);
/// let analyzer = QualityAnalyzer::new(AnalyzerParams::default());
/// let result = analyzer.process(&frame, &Measurements::default());
/// println!("label={:?} latency_ms={:.3}", result.label, result.latency_ms);
/// # }
/// ```
pub mod prelude {
    pub use crate::image::RgbImageU8;
    pub use crate::{AnalyzerParams, Measurements, QualityAnalyzer, QualityLabel, QualityResult};
}
