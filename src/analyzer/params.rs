//! Parameter types configuring the analyzer stages.
//!
//! This module bundles the knobs of the vision-confidence estimator, the
//! particle-size estimator, the sieve set, and the score fusion into one
//! struct so a whole configuration can be passed around and serialized in
//! one piece.

use crate::fusion::FusionParams;
use crate::psd::PsdConfig;
use crate::sizing::SizingParams;
use crate::vision::VisionParams;

/// Analyzer-wide parameters controlling the multi-stage pipeline.
///
/// Defaults reproduce the bench calibration; for tuning, start with the
/// fusion weights and the sieve set.
#[derive(Clone, Debug, Default)]
pub struct AnalyzerParams {
    /// Segmentation and vision-confidence knobs.
    pub vision: VisionParams,
    /// Particle-size estimation knobs.
    pub sizing: SizingParams,
    /// Sieve set for the size-distribution summary.
    pub psd: PsdConfig,
    /// Fusion weights and classification thresholds.
    pub fusion: FusionParams,
}
