use crate::image::GrayImageU8;

/// Normalised 5-tap Gaussian filter `[1, 4, 6, 4, 1] / 16`.
pub const GAUSSIAN_5TAP: [f32; 5] = [0.0625, 0.25, 0.375, 0.25, 0.0625];

/// Separable 5-tap Gaussian smoothing with clamped borders.
pub fn gaussian_blur_5tap(src: &GrayImageU8) -> GrayImageU8 {
    let (w, h) = (src.w, src.h);
    if w == 0 || h == 0 {
        return src.clone();
    }

    // Horizontal pass into a float scratch buffer, then vertical pass.
    let mut tmp = vec![0.0f32; w * h];
    for y in 0..h {
        let row = src.row(y);
        let out = &mut tmp[y * w..(y + 1) * w];
        for x in 0..w {
            let mut acc = 0.0f32;
            for (k, &tap) in GAUSSIAN_5TAP.iter().enumerate() {
                let xi = (x as isize + k as isize - 2).clamp(0, w as isize - 1) as usize;
                acc += row[xi] as f32 * tap;
            }
            out[x] = acc;
        }
    }

    let mut dst = GrayImageU8::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let mut acc = 0.0f32;
            for (k, &tap) in GAUSSIAN_5TAP.iter().enumerate() {
                let yi = (y as isize + k as isize - 2).clamp(0, h as isize - 1) as usize;
                acc += tmp[yi * w + x] * tap;
            }
            dst.set(x, y, acc.round().clamp(0.0, 255.0) as u8);
        }
    }
    dst
}
