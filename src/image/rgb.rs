use super::GrayImageU8;

/// Owned, tightly packed 8-bit RGB buffer (3 bytes per pixel).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbImageU8 {
    pub w: usize,
    pub h: usize,
    pub data: Vec<u8>,
}

impl RgbImageU8 {
    /// Create a zero-filled (black) image.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0u8; w * h * 3],
        }
    }

    /// Wrap an existing interleaved buffer; `data.len()` must equal `w * h * 3`.
    pub fn from_raw(w: usize, h: usize, data: Vec<u8>) -> Option<Self> {
        (data.len() == w * h * 3).then_some(Self { w, h, data })
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (y * self.w + x) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, px: [u8; 3]) {
        let i = (y * self.w + x) * 3;
        self.data[i..i + 3].copy_from_slice(&px);
    }

    /// Convert to grayscale with BT.601 luma weights.
    pub fn to_gray(&self) -> GrayImageU8 {
        let mut out = Vec::with_capacity(self.w * self.h);
        for px in self.data.chunks_exact(3) {
            out.push(luma(px[0], px[1], px[2]));
        }
        GrayImageU8 {
            w: self.w,
            h: self.h,
            data: out,
        }
    }

    /// Resize to `nw` x `nh` with bilinear sampling.
    ///
    /// Degenerate targets (zero width or height) return an empty image.
    pub fn resize_bilinear(&self, nw: usize, nh: usize) -> RgbImageU8 {
        if nw == 0 || nh == 0 || self.w == 0 || self.h == 0 {
            return RgbImageU8::new(nw, nh);
        }
        if nw == self.w && nh == self.h {
            return self.clone();
        }
        let mut out = RgbImageU8::new(nw, nh);
        let sx = self.w as f32 / nw as f32;
        let sy = self.h as f32 / nh as f32;
        for oy in 0..nh {
            // Sample at pixel centers so edges are not over-weighted.
            let fy = ((oy as f32 + 0.5) * sy - 0.5).max(0.0);
            let y0 = (fy as usize).min(self.h - 1);
            let y1 = (y0 + 1).min(self.h - 1);
            let wy = fy - y0 as f32;
            for ox in 0..nw {
                let fx = ((ox as f32 + 0.5) * sx - 0.5).max(0.0);
                let x0 = (fx as usize).min(self.w - 1);
                let x1 = (x0 + 1).min(self.w - 1);
                let wx = fx - x0 as f32;

                let p00 = self.get(x0, y0);
                let p10 = self.get(x1, y0);
                let p01 = self.get(x0, y1);
                let p11 = self.get(x1, y1);
                let mut px = [0u8; 3];
                for c in 0..3 {
                    let top = p00[c] as f32 * (1.0 - wx) + p10[c] as f32 * wx;
                    let bot = p01[c] as f32 * (1.0 - wx) + p11[c] as f32 * wx;
                    let v = top * (1.0 - wy) + bot * wy;
                    px[c] = v.round().clamp(0.0, 255.0) as u8;
                }
                out.set(ox, oy, px);
            }
        }
        out
    }
}

#[inline]
pub(crate) fn luma(r: u8, g: u8, b: u8) -> u8 {
    let v = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
    v.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_gray_uses_luma_weights() {
        let mut img = RgbImageU8::new(2, 1);
        img.set(0, 0, [255, 255, 255]);
        img.set(1, 0, [0, 128, 0]);
        let gray = img.to_gray();
        assert_eq!(gray.get(0, 0), 255);
        assert_eq!(gray.get(1, 0), (0.587f32 * 128.0).round() as u8);
    }

    #[test]
    fn resize_preserves_uniform_color() {
        let mut img = RgbImageU8::new(8, 8);
        for y in 0..8 {
            for x in 0..8 {
                img.set(x, y, [40, 90, 200]);
            }
        }
        let small = img.resize_bilinear(3, 5);
        assert_eq!(small.w, 3);
        assert_eq!(small.h, 5);
        for y in 0..5 {
            for x in 0..3 {
                assert_eq!(small.get(x, y), [40, 90, 200]);
            }
        }
    }

    #[test]
    fn resize_to_same_size_is_identity() {
        let mut img = RgbImageU8::new(4, 3);
        img.set(2, 1, [1, 2, 3]);
        assert_eq!(img.resize_bilinear(4, 3), img);
    }
}
