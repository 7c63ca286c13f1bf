use serde::Serialize;

/// Assumed scale when no usable reference marker is available (mm per px).
pub const FALLBACK_MM_PER_PX: f64 = 0.01;

/// Linear pixel-to-millimetre conversion factor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScaleFactor(pub f64);

impl ScaleFactor {
    /// The raw ratio as computed, possibly zero when the marker length was
    /// zero millimetres.
    pub fn mm_per_px(self) -> f64 {
        self.0
    }

    /// The ratio to use for conversion: falls back to
    /// [`FALLBACK_MM_PER_PX`] when the raw ratio is not positive, so
    /// downstream conversion never multiplies by zero.
    pub fn effective(self) -> f64 {
        if self.0 > 0.0 {
            self.0
        } else {
            FALLBACK_MM_PER_PX
        }
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        ScaleFactor(FALLBACK_MM_PER_PX)
    }
}

/// Convert a reference marker's pixel and real-world lengths into a scale.
///
/// Returns `reference_mm / reference_px`; a non-positive pixel length
/// yields the fallback constant instead of a division by zero.
pub fn pixel_to_mm_scale(reference_px: f64, reference_mm: f64) -> ScaleFactor {
    if reference_px > 0.0 {
        ScaleFactor(reference_mm / reference_px)
    } else {
        ScaleFactor(FALLBACK_MM_PER_PX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_is_mm_over_px() {
        let s = pixel_to_mm_scale(50.0, 30.0);
        assert!((s.mm_per_px() - 0.6).abs() < 1e-12);
        assert!((s.effective() - 0.6).abs() < 1e-12);
    }

    #[test]
    fn zero_pixel_length_falls_back() {
        assert_eq!(pixel_to_mm_scale(0.0, 30.0).mm_per_px(), FALLBACK_MM_PER_PX);
        assert_eq!(pixel_to_mm_scale(-5.0, 30.0).mm_per_px(), FALLBACK_MM_PER_PX);
    }

    #[test]
    fn zero_marker_length_is_kept_raw_but_effective_falls_back() {
        let s = pixel_to_mm_scale(50.0, 0.0);
        assert_eq!(s.mm_per_px(), 0.0);
        assert_eq!(s.effective(), FALLBACK_MM_PER_PX);
    }
}
