//! Analyzer pipeline driving the grading end-to-end.
//!
//! The [`QualityAnalyzer`] exposes a simple API: feed a decoded frame plus
//! the bench measurements and get a graded result with detailed diagnostics.
//! Internally it coordinates color quantization, particle sizing, the sieve
//! summary, the property calculators, and score fusion.
//!
//! Typical usage:
//! ```no_run
//! use grain_grader::{AnalyzerParams, Measurements, QualityAnalyzer};
//! use grain_grader::image::RgbImageU8;
//!
//! # fn example(frame: RgbImageU8, measurements: Measurements) {
//! let analyzer = QualityAnalyzer::new(AnalyzerParams::default());
//! let report = analyzer.process_with_diagnostics(&frame, &measurements);
//! println!(
//!     "label={} score={:.3}",
//!     report.result.label, report.result.score
//! );
//! # }
//! ```

use super::params::AnalyzerParams;
use crate::diagnostics::{
    AnalysisReport, InputDescriptor, PipelineTrace, SizingStage, TimingBreakdown, VisionStage,
};
use crate::fusion::{classify, fuse_score, moisture_percent_from_adc, FusionParams};
use crate::image::RgbImageU8;
use crate::measurements::Measurements;
use crate::properties::{
    compute_bulk_density, compute_specific_gravity_particle, silt_fraction_from_settled_height,
};
use crate::psd::{compute_psd_and_fm, PsdConfig};
use crate::sizing::{estimate_detailed, pixel_to_mm_scale, ScaleFactor, SizingParams};
use crate::types::QualityResult;
use crate::vision::{self, VisionParams};
use log::debug;
use std::time::Instant;

/// Quality analyzer orchestrating segmentation, sizing, property
/// calculation and score fusion.
pub struct QualityAnalyzer {
    params: AnalyzerParams,
}

impl QualityAnalyzer {
    /// Create an analyzer with the supplied parameters.
    pub fn new(params: AnalyzerParams) -> Self {
        Self { params }
    }

    /// Run the analyzer on a decoded frame, returning a compact result.
    pub fn process(&self, frame: &RgbImageU8, measurements: &Measurements) -> QualityResult {
        self.process_with_diagnostics(frame, measurements).result
    }

    /// Run the analyzer and return both the result and a detailed report.
    pub fn process_with_diagnostics(
        &self,
        frame: &RgbImageU8,
        measurements: &Measurements,
    ) -> AnalysisReport {
        let (width, height) = (frame.w, frame.h);
        debug!(
            "QualityAnalyzer::process start w={} h={} working={}",
            width, height, self.params.vision.working_size
        );
        let total_start = Instant::now();

        let vision_start = Instant::now();
        let (vision_result, vision_detail) = vision::analyze_detailed(frame, &self.params.vision);
        let vision_ms = vision_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "QualityAnalyzer::process vision confidence={:.3} blobs={} dominant={}",
            vision_result.confidence, vision_result.features.count, vision_detail.dominant_cluster
        );

        let scale = self.calibrate_scale(measurements);

        let sizing_start = Instant::now();
        let (diameters, sizing_detail) =
            estimate_detailed(frame, scale, &self.params.sizing);
        let sizing_ms = sizing_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "QualityAnalyzer::process sizing accepted={} rejected={} seeds={} mm_per_px={:.4}",
            sizing_detail.accepted,
            sizing_detail.rejected,
            sizing_detail.seed_regions,
            scale.effective()
        );

        let psd_start = Instant::now();
        let psd = compute_psd_and_fm(&diameters, &self.params.psd);
        let psd_ms = psd_start.elapsed().as_secs_f64() * 1000.0;

        let bulk_density = match measurements.weight_g {
            Some(w) if w > 0.0 => {
                compute_bulk_density(w, measurements.container_volume_ml.unwrap_or(0.0))
            }
            _ => None,
        };
        let specific_gravity = measurements.displaced_volume_ml.and_then(|v| {
            compute_specific_gravity_particle(measurements.weight_g.unwrap_or(0.0), v)
        });
        let silt_percent = measurements.jar_total_mm.and_then(|total| {
            silt_fraction_from_settled_height(
                measurements.jar_settled_mm.unwrap_or(0.0),
                total,
                1.0,
            )
        });

        // The ADC reading wins over a pre-converted percentage when both
        // arrive, so one probe cannot disagree with itself.
        let moisture_percent = measurements
            .moisture_adc
            .map(moisture_percent_from_adc)
            .or(measurements.moisture_percent);

        let score = fuse_score(vision_result.confidence, moisture_percent, &self.params.fusion);
        let label = classify(score, &self.params.fusion);

        let latency = total_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "QualityAnalyzer::process done label={} score={:.3} latency_ms={:.3}",
            label, score, latency
        );

        let result = QualityResult {
            label,
            score,
            vision_conf: vision_result.confidence,
            psd,
            bulk_density,
            specific_gravity,
            silt_percent,
            moisture_percent,
            latency_ms: latency,
        };

        let mut timings = TimingBreakdown::with_total(latency);
        if vision_ms > 0.0 {
            timings.push("vision", vision_ms);
        }
        if sizing_ms > 0.0 {
            timings.push("sizing", sizing_ms);
        }
        if psd_ms > 0.0 {
            timings.push("psd", psd_ms);
        }

        let trace = PipelineTrace {
            input: InputDescriptor {
                width,
                height,
                working_width: vision_result.segmented.w,
                working_height: vision_result.segmented.h,
            },
            timings,
            vision: Some(VisionStage {
                elapsed_ms: vision_ms,
                cluster_sizes: vision_detail.cluster_sizes,
                dominant_cluster: vision_detail.dominant_cluster,
                brightness: vision_detail.brightness,
                area_score: vision_detail.area_score,
                blob_count: vision_result.features.count,
                avg_blob_area: vision_result.features.avg_area,
            }),
            sizing: Some(SizingStage {
                elapsed_ms: sizing_ms,
                otsu_level: sizing_detail.otsu_level,
                mask_coverage: sizing_detail.mask_coverage,
                seed_regions: sizing_detail.seed_regions,
                accepted: sizing_detail.accepted,
                rejected: sizing_detail.rejected,
                scale_mm_per_px: scale.effective(),
            }),
        };

        AnalysisReport {
            result,
            vision: vision_result,
            trace,
        }
    }

    /// Scale from the reference marker, when both of its lengths arrived.
    fn calibrate_scale(&self, measurements: &Measurements) -> ScaleFactor {
        match (measurements.scale_marker_px, measurements.scale_marker_mm) {
            (Some(px), Some(mm)) => pixel_to_mm_scale(px, mm),
            _ => ScaleFactor::default(),
        }
    }

    pub fn params(&self) -> &AnalyzerParams {
        &self.params
    }

    pub fn set_vision_params(&mut self, params: VisionParams) {
        self.params.vision = params;
    }

    pub fn set_sizing_params(&mut self, params: SizingParams) {
        self.params.sizing = params;
    }

    pub fn set_psd_config(&mut self, config: PsdConfig) {
        self.params.psd = config;
    }

    pub fn set_fusion_params(&mut self, params: FusionParams) {
        self.params.fusion = params;
    }
}
