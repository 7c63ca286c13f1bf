use crate::image::GrayImageU8;

/// Otsu's threshold: the level maximizing between-class variance.
///
/// A constant image has no split; the level is then the image's own
/// intensity, so the strict binarization produces an empty mask.
pub fn otsu_level(src: &GrayImageU8) -> u8 {
    let total = src.data.len();
    if total == 0 {
        return 0;
    }

    let mut hist = [0f64; 256];
    for &v in &src.data {
        hist[v as usize] += 1.0;
    }

    let total_f = total as f64;
    let global_sum: f64 = hist.iter().enumerate().map(|(i, &c)| i as f64 * c).sum();

    let mut weight_bg = 0.0f64;
    let mut sum_bg = 0.0f64;
    let mut best_level = 0u8;
    let mut best_variance = 0.0f64;

    for t in 0..256 {
        weight_bg += hist[t];
        if weight_bg == 0.0 {
            continue;
        }
        let weight_fg = total_f - weight_bg;
        if weight_fg == 0.0 {
            break;
        }
        sum_bg += t as f64 * hist[t];
        let mean_bg = sum_bg / weight_bg;
        let mean_fg = (global_sum - sum_bg) / weight_fg;
        let diff = mean_bg - mean_fg;
        let variance = weight_bg * weight_fg * diff * diff;
        if variance > best_variance {
            best_variance = variance;
            best_level = t as u8;
        }
    }

    if best_variance == 0.0 {
        // No split exists (single intensity): threshold at that intensity
        // so the strict comparison yields an empty mask.
        return src.data.iter().copied().max().unwrap_or(0);
    }
    best_level
}

/// Binarize: pixels strictly above `level` become 255, the rest 0.
pub fn threshold_binary(src: &GrayImageU8, level: u8) -> GrayImageU8 {
    let data = src
        .data
        .iter()
        .map(|&v| if v > level { 255u8 } else { 0u8 })
        .collect();
    GrayImageU8 {
        w: src.w,
        h: src.h,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn otsu_separates_a_bimodal_image() {
        let mut data = vec![30u8; 64];
        for v in data.iter_mut().skip(32) {
            *v = 220;
        }
        let img = GrayImageU8::from_raw(8, 8, data).unwrap();
        let level = otsu_level(&img);
        assert!(
            (30..220).contains(&level),
            "threshold should fall between the modes: {level}"
        );
        let mask = threshold_binary(&img, level);
        assert_eq!(mask.data.iter().filter(|&&v| v == 255).count(), 32);
    }

    #[test]
    fn constant_image_yields_empty_mask() {
        let img = GrayImageU8::from_raw(4, 4, vec![77u8; 16]).unwrap();
        let level = otsu_level(&img);
        assert_eq!(level, 77);
        let mask = threshold_binary(&img, level);
        assert!(mask.data.iter().all(|&v| v == 0));
    }
}
