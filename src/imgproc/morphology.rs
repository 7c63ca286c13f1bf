use crate::image::GrayImageU8;

/// 3x3 erosion of a binary mask (replicated borders).
pub fn erode3x3(mask: &GrayImageU8) -> GrayImageU8 {
    morph3x3(mask, true)
}

/// 3x3 dilation of a binary mask (replicated borders).
pub fn dilate3x3(mask: &GrayImageU8) -> GrayImageU8 {
    morph3x3(mask, false)
}

/// Morphological opening: one erosion followed by one dilation.
///
/// Removes isolated speckles and thin bridges between touching grains
/// while preserving the bulk of larger regions.
pub fn open3x3(mask: &GrayImageU8) -> GrayImageU8 {
    dilate3x3(&erode3x3(mask))
}

fn morph3x3(mask: &GrayImageU8, erode: bool) -> GrayImageU8 {
    let (w, h) = (mask.w, mask.h);
    let mut out = GrayImageU8::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }
    for y in 0..h {
        let y0 = y.saturating_sub(1);
        let y1 = (y + 1).min(h - 1);
        for x in 0..w {
            let x0 = x.saturating_sub(1);
            let x1 = (x + 1).min(w - 1);
            let mut acc = if erode { 255u8 } else { 0u8 };
            for yy in y0..=y1 {
                for xx in x0..=x1 {
                    let v = mask.get(xx, yy);
                    acc = if erode { acc.min(v) } else { acc.max(v) };
                }
            }
            out.set(x, y, acc);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask_with_blob_and_speckle() -> GrayImageU8 {
        let mut m = GrayImageU8::new(16, 16);
        // 6x6 blob
        for y in 4..10 {
            for x in 4..10 {
                m.set(x, y, 255);
            }
        }
        // isolated single-pixel speckle
        m.set(13, 13, 255);
        m
    }

    #[test]
    fn opening_removes_speckle_but_keeps_blob() {
        let opened = open3x3(&mask_with_blob_and_speckle());
        assert_eq!(opened.get(13, 13), 0, "speckle should vanish");
        assert_eq!(opened.get(6, 6), 255, "blob interior should survive");
    }

    #[test]
    fn opening_does_not_grow_the_mask() {
        let mask = mask_with_blob_and_speckle();
        let opened = open3x3(&mask);
        for (before, after) in mask.data.iter().zip(&opened.data) {
            assert!(after <= before);
        }
    }
}
