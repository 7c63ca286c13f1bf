use grain_grader::image::RgbImageU8;

/// Generates a dark tray with a regular grid of bright circular grains.
pub fn grain_tray_rgb(size: usize, grains_per_row: usize, radius: f32) -> RgbImageU8 {
    assert!(size > 0, "image dimensions must be positive");
    assert!(grains_per_row > 0, "need at least one grain per row");

    let mut img = RgbImageU8::new(size, size);
    for y in 0..size {
        for x in 0..size {
            img.set(x, y, [35, 32, 28]);
        }
    }

    let pitch = size as f32 / grains_per_row as f32;
    for gy in 0..grains_per_row {
        for gx in 0..grains_per_row {
            let cx = (gx as f32 + 0.5) * pitch;
            let cy = (gy as f32 + 0.5) * pitch;
            for y in 0..size {
                for x in 0..size {
                    let dx = x as f32 - cx;
                    let dy = y as f32 - cy;
                    if dx * dx + dy * dy <= radius * radius {
                        img.set(x, y, [205, 195, 175]);
                    }
                }
            }
        }
    }
    img
}

/// A frame with no material at all, just the tray.
pub fn empty_tray_rgb(size: usize) -> RgbImageU8 {
    let mut img = RgbImageU8::new(size, size);
    for y in 0..size {
        for x in 0..size {
            img.set(x, y, [35, 32, 28]);
        }
    }
    img
}
