/// Owned, tightly packed 8-bit grayscale buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImageU8 {
    pub w: usize,
    pub h: usize,
    pub data: Vec<u8>,
}

impl GrayImageU8 {
    /// Create a zero-filled (black) image.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0u8; w * h],
        }
    }

    /// Wrap an existing buffer; `data.len()` must equal `w * h`.
    pub fn from_raw(w: usize, h: usize, data: Vec<u8>) -> Option<Self> {
        (data.len() == w * h).then_some(Self { w, h, data })
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.w + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: u8) {
        self.data[y * self.w + x] = v;
    }

    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }

    /// Fraction of pixels above zero. Used as a mask-coverage diagnostic.
    pub fn coverage(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        let set = self.data.iter().filter(|&&v| v > 0).count();
        set as f64 / self.data.len() as f64
    }
}
