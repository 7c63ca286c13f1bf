//! K-means color quantization.
//!
//! Initial centers come from equal-population luma bands, so the result is
//! deterministic for a given image. Lloyd iterations then refine the
//! centers; the per-pixel assignment scan is the hot loop and runs in
//! parallel.

use crate::image::rgb::luma;
use crate::image::RgbImageU8;
use rayon::prelude::*;

const CONVERGENCE_SHIFT: f32 = 0.5;

/// Result of quantizing an RGB image into `k` representative colors.
#[derive(Clone, Debug)]
pub struct Quantization {
    pub centers: Vec<[f32; 3]>,
    /// Per-pixel cluster index, in scan order.
    pub assignments: Vec<u8>,
    /// Pixels assigned to each cluster.
    pub counts: Vec<usize>,
}

impl Quantization {
    /// Index of the cluster with the most assigned pixels (first on ties).
    pub fn dominant_cluster(&self) -> usize {
        let mut best = 0usize;
        for (i, &count) in self.counts.iter().enumerate() {
            if count > self.counts[best] {
                best = i;
            }
        }
        best
    }

    /// Mean channel intensity of a cluster center, normalized to [0, 1].
    pub fn center_brightness(&self, cluster: usize) -> f64 {
        let c = self.centers[cluster];
        ((c[0] + c[1] + c[2]) / 3.0 / 255.0) as f64
    }

    /// Paint the cluster centers back onto the pixel grid.
    pub fn paint(&self, w: usize, h: usize) -> RgbImageU8 {
        let mut data = Vec::with_capacity(w * h * 3);
        for &a in &self.assignments {
            let c = self.centers[a as usize];
            data.push(c[0].round().clamp(0.0, 255.0) as u8);
            data.push(c[1].round().clamp(0.0, 255.0) as u8);
            data.push(c[2].round().clamp(0.0, 255.0) as u8);
        }
        RgbImageU8 { w, h, data }
    }
}

/// Quantize an image into `k` colors with at most `max_iters` Lloyd steps.
pub fn quantize_colors(image: &RgbImageU8, k: usize, max_iters: usize) -> Quantization {
    let pixels = image.w * image.h;
    if k == 0 || pixels == 0 {
        return Quantization {
            centers: Vec::new(),
            assignments: vec![0; pixels],
            counts: vec![0; k],
        };
    }
    let k = k.min(pixels);

    let mut centers = init_centers_by_luma(image, k);
    let mut assignments = vec![0u8; pixels];
    let mut counts = vec![0usize; k];

    for _ in 0..max_iters {
        assignments = assign_pixels(&image.data, &centers);

        let mut sums = vec![[0.0f64; 3]; k];
        counts = vec![0usize; k];
        for (px, &a) in image.data.chunks_exact(3).zip(&assignments) {
            let s = &mut sums[a as usize];
            s[0] += px[0] as f64;
            s[1] += px[1] as f64;
            s[2] += px[2] as f64;
            counts[a as usize] += 1;
        }

        let mut max_shift = 0.0f32;
        for (i, sum) in sums.iter().enumerate() {
            if counts[i] == 0 {
                // Empty cluster keeps its previous center.
                continue;
            }
            let n = counts[i] as f64;
            let updated = [
                (sum[0] / n) as f32,
                (sum[1] / n) as f32,
                (sum[2] / n) as f32,
            ];
            let shift = ((updated[0] - centers[i][0]).powi(2)
                + (updated[1] - centers[i][1]).powi(2)
                + (updated[2] - centers[i][2]).powi(2))
            .sqrt();
            max_shift = max_shift.max(shift);
            centers[i] = updated;
        }

        if max_shift < CONVERGENCE_SHIFT {
            break;
        }
    }

    Quantization {
        centers,
        assignments,
        counts,
    }
}

/// Mean RGB of each of `k` equal-population luma bands.
fn init_centers_by_luma(image: &RgbImageU8, k: usize) -> Vec<[f32; 3]> {
    let mut hist = [0usize; 256];
    for px in image.data.chunks_exact(3) {
        hist[luma(px[0], px[1], px[2]) as usize] += 1;
    }
    let total = image.w * image.h;

    // Band boundaries at population quantiles i/k.
    let mut bounds = Vec::with_capacity(k + 1);
    bounds.push(0usize);
    let mut running = 0usize;
    let mut next_quantile = 1usize;
    for (level, &count) in hist.iter().enumerate() {
        running += count;
        while next_quantile < k && running * k >= next_quantile * total {
            bounds.push(level + 1);
            next_quantile += 1;
        }
    }
    while bounds.len() < k {
        bounds.push(256);
    }
    bounds.push(256);

    let mut sums = vec![[0.0f64; 3]; k];
    let mut counts = vec![0usize; k];
    for px in image.data.chunks_exact(3) {
        let l = luma(px[0], px[1], px[2]) as usize;
        let band = bounds[1..=k]
            .iter()
            .position(|&b| l < b)
            .unwrap_or(k - 1);
        sums[band][0] += px[0] as f64;
        sums[band][1] += px[1] as f64;
        sums[band][2] += px[2] as f64;
        counts[band] += 1;
    }

    (0..k)
        .map(|i| {
            if counts[i] > 0 {
                let n = counts[i] as f64;
                [
                    (sums[i][0] / n) as f32,
                    (sums[i][1] / n) as f32,
                    (sums[i][2] / n) as f32,
                ]
            } else {
                // Empty band: spread along the gray axis.
                let g = (i as f32 + 0.5) * 255.0 / k as f32;
                [g, g, g]
            }
        })
        .collect()
}

fn assign_pixels(data: &[u8], centers: &[[f32; 3]]) -> Vec<u8> {
    data.par_chunks_exact(3)
        .map(|px| {
            let mut best = 0u8;
            let mut best_d = f32::MAX;
            for (i, c) in centers.iter().enumerate() {
                let dr = px[0] as f32 - c[0];
                let dg = px[1] as f32 - c[1];
                let db = px[2] as f32 - c[2];
                let d = dr * dr + dg * dg + db * db;
                if d < best_d {
                    best_d = d;
                    best = i as u8;
                }
            }
            best
        })
        .collect()
}
