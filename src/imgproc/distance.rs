use crate::image::GrayImageU8;

const DIAG: f32 = std::f32::consts::SQRT_2;
const FAR: f32 = f32::MAX / 4.0;

/// Euclidean distance map of a binary mask.
#[derive(Clone, Debug)]
pub struct DistanceMap {
    pub w: usize,
    pub h: usize,
    /// Approximate distance (pixels) to the nearest background pixel;
    /// zero on background.
    pub data: Vec<f32>,
    pub max: f32,
}

impl DistanceMap {
    /// Binary mask of pixels strictly above `threshold`.
    pub fn threshold(&self, threshold: f32) -> GrayImageU8 {
        let data = self
            .data
            .iter()
            .map(|&d| if d > threshold { 255u8 } else { 0u8 })
            .collect();
        GrayImageU8 {
            w: self.w,
            h: self.h,
            data,
        }
    }
}

/// Two-pass chamfer approximation of the Euclidean distance transform
/// (weights 1 and sqrt(2)). Pixels outside the image count as background,
/// so foreground touching the border gets a distance of 1 there.
pub fn distance_transform(mask: &GrayImageU8) -> DistanceMap {
    let (w, h) = (mask.w, mask.h);
    let mut dist = vec![0.0f32; w * h];
    if w == 0 || h == 0 {
        return DistanceMap {
            w,
            h,
            data: dist,
            max: 0.0,
        };
    }

    for (d, &v) in dist.iter_mut().zip(&mask.data) {
        *d = if v > 0 { FAR } else { 0.0 };
    }

    let at = |dist: &[f32], x: isize, y: isize| -> f32 {
        if x < 0 || y < 0 || x >= w as isize || y >= h as isize {
            // Outside counts as background at unit distance from the border.
            0.0
        } else {
            dist[y as usize * w + x as usize]
        }
    };

    // Forward pass: upper-left neighbourhood.
    for y in 0..h as isize {
        for x in 0..w as isize {
            let idx = y as usize * w + x as usize;
            if dist[idx] == 0.0 {
                continue;
            }
            let mut best = dist[idx];
            best = best.min(at(&dist, x - 1, y) + 1.0);
            best = best.min(at(&dist, x, y - 1) + 1.0);
            best = best.min(at(&dist, x - 1, y - 1) + DIAG);
            best = best.min(at(&dist, x + 1, y - 1) + DIAG);
            dist[idx] = best;
        }
    }

    // Backward pass: lower-right neighbourhood.
    let mut max = 0.0f32;
    for y in (0..h as isize).rev() {
        for x in (0..w as isize).rev() {
            let idx = y as usize * w + x as usize;
            if dist[idx] == 0.0 {
                continue;
            }
            let mut best = dist[idx];
            best = best.min(at(&dist, x + 1, y) + 1.0);
            best = best.min(at(&dist, x, y + 1) + 1.0);
            best = best.min(at(&dist, x + 1, y + 1) + DIAG);
            best = best.min(at(&dist, x - 1, y + 1) + DIAG);
            dist[idx] = best;
            if best > max {
                max = best;
            }
        }
    }

    DistanceMap {
        w,
        h,
        data: dist,
        max,
    }
}
