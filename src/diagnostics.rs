//! Diagnostics data model exposed by the analyzer.
//!
//! `AnalysisReport` is the main entry point returned by
//! [`QualityAnalyzer::process_with_diagnostics`](crate::QualityAnalyzer),
//! bundling the coarse result (`QualityResult`) with a `PipelineTrace`
//! describing every stage the pipeline executed.

use crate::types::QualityResult;
use crate::vision::VisionResult;
use serde::{Deserialize, Serialize};

/// Timing entry describing a single stage of the pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Aggregated timing trace for the analyzer run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn with_total(total_ms: f64) -> Self {
        Self {
            total_ms,
            stages: Vec::new(),
        }
    }

    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }
}

/// Shape of the frame as received and as analyzed.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub working_width: usize,
    pub working_height: usize,
}

/// Intermediate signals of the vision-confidence stage.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisionStage {
    pub elapsed_ms: f64,
    pub cluster_sizes: Vec<usize>,
    pub dominant_cluster: usize,
    pub brightness: f64,
    pub area_score: f64,
    pub blob_count: usize,
    pub avg_blob_area: f64,
}

/// Intermediate counts of the particle-sizing stage.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SizingStage {
    pub elapsed_ms: f64,
    pub otsu_level: u8,
    pub mask_coverage: f64,
    pub seed_regions: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub scale_mm_per_px: f64,
}

/// End-to-end trace describing the internal execution of the analyzer.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vision: Option<VisionStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizing: Option<SizingStage>,
}

/// Result produced by [`QualityAnalyzer::process_with_diagnostics`](crate::QualityAnalyzer).
#[derive(Clone, Debug)]
pub struct AnalysisReport {
    pub result: QualityResult,
    /// Full vision output, including the segmented preview image.
    pub vision: VisionResult,
    pub trace: PipelineTrace,
}
