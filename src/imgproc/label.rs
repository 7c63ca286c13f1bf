use crate::image::GrayImageU8;

const NEIGH_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Connected-component labels of a binary mask.
#[derive(Clone, Debug)]
pub struct LabelMap {
    pub w: usize,
    pub h: usize,
    /// 0 for background, 1..=regions for foreground components.
    pub labels: Vec<u32>,
    pub regions: usize,
}

/// Label 8-connected foreground components in scan order.
pub fn label_components(mask: &GrayImageU8) -> LabelMap {
    let (w, h) = (mask.w, mask.h);
    let mut labels = vec![0u32; w * h];
    let mut regions = 0usize;
    if w == 0 || h == 0 {
        return LabelMap {
            w,
            h,
            labels,
            regions,
        };
    }

    let mut stack: Vec<usize> = Vec::new();
    for start in 0..w * h {
        if mask.data[start] == 0 || labels[start] != 0 {
            continue;
        }
        regions += 1;
        let label = regions as u32;
        labels[start] = label;
        stack.push(start);
        while let Some(idx) = stack.pop() {
            let x = (idx % w) as isize;
            let y = (idx / w) as isize;
            for (dx, dy) in NEIGH_OFFSETS {
                let nx = x + dx;
                let ny = y + dy;
                if nx < 0 || ny < 0 || nx >= w as isize || ny >= h as isize {
                    continue;
                }
                let nidx = ny as usize * w + nx as usize;
                if mask.data[nidx] != 0 && labels[nidx] == 0 {
                    labels[nidx] = label;
                    stack.push(nidx);
                }
            }
        }
    }

    LabelMap {
        w,
        h,
        labels,
        regions,
    }
}
