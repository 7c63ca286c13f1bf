//! Grayscale and color primitives used by the vision and sizing stages.
//!
//! All routines allocate fresh output buffers; the input image is never
//! mutated in place.

pub mod blur;
pub mod distance;
pub mod equalize;
pub mod kmeans;
pub mod label;
pub mod morphology;
pub mod threshold;

pub use self::blur::gaussian_blur_5tap;
pub use self::distance::{distance_transform, DistanceMap};
pub use self::equalize::equalize_histogram;
pub use self::kmeans::{quantize_colors, Quantization};
pub use self::label::{label_components, LabelMap};
pub use self::morphology::{dilate3x3, erode3x3, open3x3};
pub use self::threshold::{otsu_level, threshold_binary};
