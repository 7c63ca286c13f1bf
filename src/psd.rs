//! Particle-size distribution statistics and the fineness modulus.
//!
//! Follows the sieve-analysis convention: percent passing at each sieve is
//! the cumulative fraction of diameters at or below the sieve size, and
//! percent retained is the step-wise complement, clamped non-negative.
//! Image-derived diameter lists are not physically sieved, so the clamp
//! absorbs non-monotonic passing rates.

use serde::{Deserialize, Serialize};

/// Sieve set used for the distribution, largest first.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct PsdConfig {
    pub sieve_sizes_mm: Vec<f64>,
}

impl Default for PsdConfig {
    fn default() -> Self {
        // Standard fine-aggregate sieve series.
        Self {
            sieve_sizes_mm: vec![4.75, 2.36, 1.18, 0.6, 0.3, 0.15],
        }
    }
}

/// Percent passing at one sieve size.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SievePoint {
    pub sieve_mm: f64,
    pub percent: f64,
}

/// Distribution summary over the configured sieve set.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PsdSummary {
    /// Sum of percent-retained fractions / 100; `None` for an empty sample.
    pub fineness_modulus: Option<f64>,
    /// Percent passing per sieve, in the configured (descending) order.
    pub percent_passing: Vec<SievePoint>,
    /// Percent retained per sieve step, aligned to `percent_passing`.
    pub percent_retained: Vec<f64>,
}

/// Compute percent passing/retained and the fineness modulus.
///
/// An empty diameter list returns the default (empty) summary with no
/// fineness modulus; absence of particles is a valid state.
pub fn compute_psd_and_fm(diameters_mm: &[f64], config: &PsdConfig) -> PsdSummary {
    if diameters_mm.is_empty() {
        return PsdSummary::default();
    }

    let n = diameters_mm.len() as f64;
    let percent_passing: Vec<SievePoint> = config
        .sieve_sizes_mm
        .iter()
        .map(|&sieve_mm| {
            let passing = diameters_mm.iter().filter(|&&d| d <= sieve_mm).count() as f64;
            SievePoint {
                sieve_mm,
                percent: 100.0 * passing / n,
            }
        })
        .collect();

    let mut percent_retained = Vec::with_capacity(percent_passing.len());
    let mut prev_passing = 100.0f64;
    for point in &percent_passing {
        percent_retained.push((prev_passing - point.percent).max(0.0));
        prev_passing = point.percent;
    }

    let fineness_modulus = percent_retained.iter().sum::<f64>() / 100.0;
    PsdSummary {
        fineness_modulus: Some(fineness_modulus),
        percent_passing,
        percent_retained,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sample_has_no_modulus_and_no_points() {
        let summary = compute_psd_and_fm(&[], &PsdConfig::default());
        assert_eq!(summary.fineness_modulus, None);
        assert!(summary.percent_passing.is_empty());
        assert!(summary.percent_retained.is_empty());
    }

    #[test]
    fn all_fine_material_passes_everything() {
        let diameters = [0.05, 0.1, 0.12];
        let summary = compute_psd_and_fm(&diameters, &PsdConfig::default());
        for point in &summary.percent_passing {
            assert_eq!(point.percent, 100.0);
        }
        // Only the largest sieve retains the initial 100 -> 100 step of 0.
        assert!(summary.percent_retained.iter().all(|&r| r == 0.0));
        assert_eq!(summary.fineness_modulus, Some(0.0));
    }

    #[test]
    fn coarse_material_is_retained_on_every_sieve() {
        let summary = compute_psd_and_fm(&[6.0, 7.5], &PsdConfig::default());
        // Nothing passes any sieve, everything retained at the first step.
        assert_eq!(summary.percent_passing[0].percent, 0.0);
        assert_eq!(summary.percent_retained[0], 100.0);
        assert!(summary.percent_retained[1..].iter().all(|&r| r == 0.0));
        assert_eq!(summary.fineness_modulus, Some(1.0));
    }

    #[test]
    fn retained_sum_matches_modulus_and_is_non_negative() {
        let diameters = [0.1, 0.2, 0.5, 0.9, 1.5, 2.0, 3.0, 5.0, 0.4, 0.7];
        let summary = compute_psd_and_fm(&diameters, &PsdConfig::default());
        let fm = summary.fineness_modulus.unwrap();
        let retained_sum: f64 = summary.percent_retained.iter().sum();
        assert!((retained_sum - fm * 100.0).abs() < 1e-9);
        assert!(summary.percent_retained.iter().all(|&r| r >= 0.0));
    }

    #[test]
    fn boundary_diameter_counts_as_passing() {
        // d == sieve passes (<=), so nothing is retained at that sieve.
        let summary = compute_psd_and_fm(&[4.75], &PsdConfig::default());
        assert_eq!(summary.percent_passing[0].percent, 100.0);
        assert_eq!(summary.percent_retained[0], 0.0);
    }

    #[test]
    fn alternate_sieve_sets_are_honored() {
        let config = PsdConfig {
            sieve_sizes_mm: vec![2.0, 1.0],
        };
        let summary = compute_psd_and_fm(&[1.5, 0.5], &config);
        assert_eq!(summary.percent_passing.len(), 2);
        assert_eq!(summary.percent_passing[0].percent, 100.0);
        assert_eq!(summary.percent_passing[1].percent, 50.0);
        assert_eq!(summary.percent_retained, vec![0.0, 50.0]);
        assert_eq!(summary.fineness_modulus, Some(0.5));
    }
}
