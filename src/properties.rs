//! Physical property calculators: closed-form unit conversions from bench
//! measurements. Each returns `None` when its denominator is non-positive;
//! that means "measurement not provided or unusable", never an error.

use serde::Serialize;

/// Bulk density in both common unit systems.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkDensity {
    pub g_cm3: f64,
    pub kg_m3: f64,
}

/// Bulk density of a loose sample filling a container of known volume.
pub fn compute_bulk_density(mass_g: f64, container_volume_ml: f64) -> Option<BulkDensity> {
    if container_volume_ml <= 0.0 {
        return None;
    }
    let g_cm3 = mass_g / container_volume_ml;
    Some(BulkDensity {
        g_cm3,
        kg_m3: g_cm3 * 1000.0,
    })
}

/// Specific gravity from a water-displacement measurement.
pub fn compute_specific_gravity_particle(dry_mass_g: f64, displaced_volume_ml: f64) -> Option<f64> {
    if displaced_volume_ml <= 0.0 {
        return None;
    }
    Some(dry_mass_g / displaced_volume_ml)
}

/// Silt fraction from a jar settlement test.
///
/// The result is not clamped to [0, 100]; out-of-range inputs propagate so
/// the caller can notice implausible measurements.
pub fn silt_fraction_from_settled_height(
    settled_mm: f64,
    total_mm: f64,
    calibration_factor: f64,
) -> Option<f64> {
    if total_mm <= 0.0 {
        return None;
    }
    Some(settled_mm / total_mm * 100.0 * calibration_factor)
}
