//! Result types shared across the pipeline.

use crate::properties::BulkDensity;
use crate::psd::PsdSummary;
use serde::Serialize;
use std::fmt;

/// Three-tier quality grade for a graded sample.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum QualityLabel {
    Superior,
    Moderate,
    Inferior,
}

impl fmt::Display for QualityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QualityLabel::Superior => "superior",
            QualityLabel::Moderate => "moderate",
            QualityLabel::Inferior => "inferior",
        };
        f.write_str(s)
    }
}

/// Final graded result for one frame plus its bench measurements.
///
/// Serializable as-is; the segmented preview image travels separately in
/// [`crate::diagnostics::AnalysisReport`] so this stays small on the wire.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityResult {
    pub label: QualityLabel,
    /// Fused quality score in [0, 1].
    pub score: f64,
    /// Vision-only confidence in [0, 1].
    pub vision_conf: f64,
    pub psd: PsdSummary,
    pub bulk_density: Option<BulkDensity>,
    pub specific_gravity: Option<f64>,
    pub silt_percent: Option<f64>,
    pub moisture_percent: Option<f64>,
    /// Wall-clock time for the whole pipeline, in milliseconds.
    pub latency_ms: f64,
}
