//! Segmentation and vision-confidence estimation.
//!
//! Produces a single [0, 1] scalar summarizing how clean/well-formed the
//! material looks, plus a segmented preview for human inspection. Two
//! signals are combined:
//!
//! - *brightness* of the dominant color cluster (k-means quantization of
//!   the resized frame): lighter, purer dominant color reads as less
//!   contaminated material;
//! - a tanh-compressed *area score* over Otsu-thresholded particle blobs:
//!   visibly larger grains score higher without unbounded sensitivity to
//!   one huge blob.

use crate::contour::{external_contours, particle_features, ParticleFeatures};
use crate::image::RgbImageU8;
use crate::imgproc::{gaussian_blur_5tap, otsu_level, quantize_colors, threshold_binary};

/// Knobs for the vision-confidence estimator.
#[derive(Clone, Debug)]
pub struct VisionParams {
    /// Working resolution; the frame is resized to a square of this side.
    pub working_size: usize,
    /// Number of color clusters for quantization.
    pub clusters: usize,
    /// Iteration cap for the k-means refinement.
    pub kmeans_max_iters: usize,
    /// Blobs with pixel area at or below this are treated as noise.
    pub min_blob_area: f64,
    /// Soft scale for the blob-area signal: `tanh(avg_area / area_scale)`.
    pub area_scale: f64,
    /// Weight of the dominant-cluster brightness signal.
    pub brightness_weight: f64,
    /// Weight of the blob-area signal.
    pub area_weight: f64,
}

impl Default for VisionParams {
    fn default() -> Self {
        Self {
            working_size: 512,
            clusters: 3,
            kmeans_max_iters: 16,
            min_blob_area: 5.0,
            area_scale: 100.0,
            brightness_weight: 0.6,
            area_weight: 0.4,
        }
    }
}

/// Output of the vision stage.
#[derive(Clone, Debug)]
pub struct VisionResult {
    /// Combined confidence in [0, 1].
    pub confidence: f64,
    /// Blob statistics on the thresholded working frame.
    pub features: ParticleFeatures,
    /// Cluster centers painted back per pixel, at working resolution.
    pub segmented: RgbImageU8,
}

/// Intermediate signals, kept for diagnostics.
#[derive(Clone, Debug)]
pub struct VisionDetail {
    pub cluster_sizes: Vec<usize>,
    pub dominant_cluster: usize,
    pub brightness: f64,
    pub area_score: f64,
}

/// Run the estimator on a decoded frame.
pub fn analyze(image: &RgbImageU8, params: &VisionParams) -> VisionResult {
    analyze_detailed(image, params).0
}

/// Like [`analyze`], additionally returning the intermediate signals.
pub fn analyze_detailed(image: &RgbImageU8, params: &VisionParams) -> (VisionResult, VisionDetail) {
    let working = image.resize_bilinear(params.working_size, params.working_size);

    let quant = quantize_colors(&working, params.clusters, params.kmeans_max_iters);
    let dominant = quant.dominant_cluster();
    let brightness = if quant.centers.is_empty() {
        0.0
    } else {
        quant.center_brightness(dominant)
    };

    let gray = working.to_gray();
    let blurred = gaussian_blur_5tap(&gray);
    let mask = threshold_binary(&blurred, otsu_level(&blurred));
    let contours = external_contours(&mask);
    let features = particle_features(&contours, params.min_blob_area);

    let area_score = (features.avg_area / params.area_scale).tanh();
    let confidence = (params.brightness_weight * brightness + params.area_weight * area_score)
        .clamp(0.0, 1.0);

    let segmented = quant.paint(working.w, working.h);
    (
        VisionResult {
            confidence,
            features,
            segmented,
        },
        VisionDetail {
            cluster_sizes: quant.counts,
            dominant_cluster: dominant,
            brightness,
            area_score,
        },
    )
}
