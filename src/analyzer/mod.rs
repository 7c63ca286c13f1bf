//! Quality analyzer orchestrating the grading pipeline end-to-end.
//!
//! Overview
//! - Resizes the frame to a working square and quantizes its colors to
//!   derive a vision confidence (dominant-cluster brightness plus a
//!   tanh-compressed blob-area signal).
//! - Calibrates a pixel-to-millimetre scale from the reference marker in the
//!   bench measurements, falling back to a fixed ratio when absent.
//! - Estimates equivalent circular particle diameters from the thresholded
//!   frame and summarizes them as a sieve distribution with a fineness
//!   modulus.
//! - Runs the closed-form property calculators on whichever bench
//!   measurements are present.
//! - Fuses vision confidence with the moisture reading into a single score
//!   and maps it to a three-tier label.
//!
//! Modules
//! - [`params`] – configuration bundle used by the analyzer and CLI.
//! - `pipeline` – the main [`QualityAnalyzer`] implementation.

pub mod params;
mod pipeline;

pub use params::AnalyzerParams;
pub use pipeline::QualityAnalyzer;
