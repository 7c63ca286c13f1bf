//! External particle regions of a binary mask.
//!
//! A "contour" here is an 8-connected foreground component with its pixel
//! area; nested holes are ignored, matching an external-boundary retrieval.
//! Touching grains form a single region by design (see the sizing stage).

use crate::image::GrayImageU8;
use crate::imgproc::label_components;
use serde::Serialize;

/// One external particle region.
#[derive(Clone, Debug)]
pub struct ParticleContour {
    /// Component label (1-based, scan order).
    pub label: u32,
    /// Pixel area of the region.
    pub area: f64,
    /// Bounding box as (x0, y0, x1, y1), inclusive.
    pub bbox: (usize, usize, usize, usize),
}

/// Count and area statistics over accepted regions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticleFeatures {
    pub count: usize,
    pub avg_area: f64,
    pub median_area: f64,
}

/// Extract all external regions of the mask, in discovery (scan) order.
pub fn external_contours(mask: &GrayImageU8) -> Vec<ParticleContour> {
    let map = label_components(mask);
    if map.regions == 0 {
        return Vec::new();
    }

    let mut areas = vec![0usize; map.regions];
    let mut boxes = vec![(usize::MAX, usize::MAX, 0usize, 0usize); map.regions];
    for (idx, &label) in map.labels.iter().enumerate() {
        if label == 0 {
            continue;
        }
        let i = (label - 1) as usize;
        let x = idx % map.w;
        let y = idx / map.w;
        areas[i] += 1;
        let b = &mut boxes[i];
        b.0 = b.0.min(x);
        b.1 = b.1.min(y);
        b.2 = b.2.max(x);
        b.3 = b.3.max(y);
    }

    areas
        .into_iter()
        .zip(boxes)
        .enumerate()
        .map(|(i, (area, bbox))| ParticleContour {
            label: (i + 1) as u32,
            area: area as f64,
            bbox,
        })
        .collect()
}

/// Statistics over regions whose area strictly exceeds `min_area`.
///
/// All-zero when nothing survives the filter. The median averages the two
/// middle values for even counts.
pub fn particle_features(contours: &[ParticleContour], min_area: f64) -> ParticleFeatures {
    let mut areas: Vec<f64> = contours
        .iter()
        .filter(|c| c.area > min_area)
        .map(|c| c.area)
        .collect();
    if areas.is_empty() {
        return ParticleFeatures::default();
    }
    areas.sort_by(f64::total_cmp);
    let count = areas.len();
    let avg_area = areas.iter().sum::<f64>() / count as f64;
    let median_area = if count % 2 == 1 {
        areas[count / 2]
    } else {
        (areas[count / 2 - 1] + areas[count / 2]) / 2.0
    };
    ParticleFeatures {
        count,
        avg_area,
        median_area,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask_with_three_blobs() -> GrayImageU8 {
        let mut m = GrayImageU8::new(24, 12);
        // 4x4 = 16 px
        for y in 1..5 {
            for x in 1..5 {
                m.set(x, y, 255);
            }
        }
        // 2x2 = 4 px
        for y in 2..4 {
            for x in 10..12 {
                m.set(x, y, 255);
            }
        }
        // 3x2 = 6 px
        for y in 7..9 {
            for x in 16..19 {
                m.set(x, y, 255);
            }
        }
        m
    }

    #[test]
    fn finds_all_regions_with_areas_and_boxes() {
        let contours = external_contours(&mask_with_three_blobs());
        assert_eq!(contours.len(), 3);
        assert_eq!(contours[0].area, 16.0);
        assert_eq!(contours[0].bbox, (1, 1, 4, 4));
        assert_eq!(contours[1].area, 4.0);
        assert_eq!(contours[2].area, 6.0);
    }

    #[test]
    fn features_filter_small_regions_strictly() {
        let contours = external_contours(&mask_with_three_blobs());
        let features = particle_features(&contours, 5.0);
        assert_eq!(features.count, 2);
        assert!((features.avg_area - 11.0).abs() < 1e-9);
        assert!((features.median_area - 11.0).abs() < 1e-9);

        // min_area equal to an area excludes it (strict >).
        let features = particle_features(&contours, 4.0);
        assert_eq!(features.count, 2);
    }

    #[test]
    fn empty_mask_yields_zeroed_features() {
        let contours = external_contours(&GrayImageU8::new(8, 8));
        assert!(contours.is_empty());
        assert_eq!(particle_features(&contours, 5.0), ParticleFeatures::default());
    }
}
