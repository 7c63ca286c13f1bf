//! Fusion of the vision confidence with the moisture measurement, and the
//! final three-tier classification.

use crate::types::QualityLabel;
use serde::{Deserialize, Serialize};

/// Weights and thresholds for score fusion and labeling.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FusionParams {
    pub vision_weight: f64,
    pub moisture_weight: f64,
    /// Moisture beyond this percentage contributes no further penalty.
    pub moisture_cap_percent: f64,
    /// Scores strictly above this are `Superior`.
    pub superior_thresh: f64,
    /// Scores strictly above this (but not above `superior_thresh`) are
    /// `Moderate`; everything else is `Inferior`.
    pub moderate_thresh: f64,
}

impl Default for FusionParams {
    fn default() -> Self {
        Self {
            vision_weight: 0.7,
            moisture_weight: 0.3,
            moisture_cap_percent: 60.0,
            superior_thresh: 0.75,
            moderate_thresh: 0.5,
        }
    }
}

/// Weighted blend of vision confidence and the capped moisture penalty.
///
/// Without a moisture reading the moisture term is omitted entirely, so the
/// score tops out at `vision_weight`.
pub fn fuse_score(vision_conf: f64, moisture_percent: Option<f64>, params: &FusionParams) -> f64 {
    match moisture_percent {
        None => params.vision_weight * vision_conf,
        Some(moisture) => {
            let penalty = (moisture / params.moisture_cap_percent).min(1.0);
            params.vision_weight * vision_conf + params.moisture_weight * (1.0 - penalty)
        }
    }
}

/// Map a fused score to its tier. Boundary scores fall to the lower tier:
/// a score exactly at a threshold is not above it.
pub fn classify(score: f64, params: &FusionParams) -> QualityLabel {
    if score > params.superior_thresh {
        QualityLabel::Superior
    } else if score > params.moderate_thresh {
        QualityLabel::Moderate
    } else {
        QualityLabel::Inferior
    }
}

/// Linear map from a raw moisture ADC reading to percent, clipped to
/// [0, 100]. Matches the probe's factory calibration line.
pub fn moisture_percent_from_adc(adc: f64) -> f64 {
    (-0.02 * adc + 100.0).clamp(0.0, 100.0)
}
