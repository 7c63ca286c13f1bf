use crate::image::GrayImageU8;

/// Global histogram equalization.
///
/// Maps intensities through the cumulative histogram so the output spreads
/// over the full 8-bit range. A constant image is returned unchanged.
pub fn equalize_histogram(src: &GrayImageU8) -> GrayImageU8 {
    let total = src.data.len();
    if total == 0 {
        return src.clone();
    }

    let mut hist = [0usize; 256];
    for &v in &src.data {
        hist[v as usize] += 1;
    }

    let mut cdf = [0usize; 256];
    let mut running = 0usize;
    for (i, &count) in hist.iter().enumerate() {
        running += count;
        cdf[i] = running;
    }

    let cdf_min = cdf
        .iter()
        .copied()
        .find(|&c| c > 0)
        .unwrap_or(0);
    if cdf_min == total {
        // Single-intensity image: equalization is undefined, keep as-is.
        return src.clone();
    }

    let denom = (total - cdf_min) as f64;
    let mut lut = [0u8; 256];
    for i in 0..256 {
        let num = cdf[i].saturating_sub(cdf_min) as f64;
        lut[i] = (num / denom * 255.0).round().clamp(0.0, 255.0) as u8;
    }

    let data = src.data.iter().map(|&v| lut[v as usize]).collect();
    GrayImageU8 {
        w: src.w,
        h: src.h,
        data,
    }
}
