//! Particle-size estimation from image geometry.
//!
//! Pipeline: grayscale → histogram equalization → Gaussian blur → Otsu
//! binarization → morphological opening → external regions → equivalent
//! circular diameters, converted to millimetres via the scale factor.
//!
//! A chamfer distance transform of the opened mask, thresholded at a
//! fraction of its maximum, gives local-maxima seed regions. The seed count
//! is reported as a grain-separation signal only; the diameters come from
//! the unseparated external regions, so touching grains bias toward larger
//! equivalent diameters. That is a known, accepted limitation of this
//! estimator, not something to fix silently here.

pub mod scale;

pub use self::scale::{pixel_to_mm_scale, ScaleFactor, FALLBACK_MM_PER_PX};

use crate::contour::external_contours;
use crate::image::RgbImageU8;
use crate::imgproc::{
    distance_transform, equalize_histogram, gaussian_blur_5tap, label_components, open3x3,
    otsu_level, threshold_binary,
};
use std::f64::consts::PI;

/// Knobs for the particle-size estimator.
#[derive(Clone, Debug)]
pub struct SizingParams {
    /// Regions with area <= `min_particle_px`^2 are discarded as noise.
    pub min_particle_px: f64,
    /// Distance-transform fraction defining seed regions.
    pub seed_fraction: f32,
}

impl Default for SizingParams {
    fn default() -> Self {
        Self {
            min_particle_px: 3.0,
            seed_fraction: 0.4,
        }
    }
}

/// Intermediate counts kept for diagnostics.
#[derive(Clone, Copy, Debug, Default)]
pub struct SizingDetail {
    pub otsu_level: u8,
    /// Foreground fraction of the opened mask.
    pub mask_coverage: f64,
    /// Connected seed regions above the distance threshold.
    pub seed_regions: usize,
    /// Regions accepted into the diameter list.
    pub accepted: usize,
    /// Regions rejected by the minimum-area filter.
    pub rejected: usize,
}

/// Equivalent circular diameters (mm) of the particles in `image`.
///
/// The list is in region-discovery order and may be empty when no grain
/// survives thresholding; that is a valid outcome, not an error.
pub fn estimate_particle_sizes(
    image: &RgbImageU8,
    scale: ScaleFactor,
    params: &SizingParams,
) -> Vec<f64> {
    estimate_detailed(image, scale, params).0
}

/// Like [`estimate_particle_sizes`], additionally returning stage counts.
pub fn estimate_detailed(
    image: &RgbImageU8,
    scale: ScaleFactor,
    params: &SizingParams,
) -> (Vec<f64>, SizingDetail) {
    let gray = image.to_gray();
    let equalized = equalize_histogram(&gray);
    let blurred = gaussian_blur_5tap(&equalized);
    let level = otsu_level(&blurred);
    let mask = threshold_binary(&blurred, level);
    let opened = open3x3(&mask);

    // Separation signal only; regions are not split before measuring.
    let dist = distance_transform(&opened);
    let seed_regions = if dist.max > 0.0 {
        let seeds = dist.threshold(params.seed_fraction * dist.max);
        label_components(&seeds).regions
    } else {
        0
    };

    let mm_per_px = scale.effective();
    let min_area = params.min_particle_px * params.min_particle_px;
    let contours = external_contours(&opened);
    let mut diameters = Vec::with_capacity(contours.len());
    let mut rejected = 0usize;
    for contour in &contours {
        if contour.area <= min_area {
            rejected += 1;
            continue;
        }
        let d_px = (4.0 * contour.area / PI).sqrt();
        diameters.push(d_px * mm_per_px);
    }

    let detail = SizingDetail {
        otsu_level: level,
        mask_coverage: opened.coverage(),
        seed_regions,
        accepted: diameters.len(),
        rejected,
    };
    (diameters, detail)
}
