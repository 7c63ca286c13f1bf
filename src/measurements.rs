//! Typed boundary for bench measurements arriving from the surrounding
//! service as loose name/value string pairs.
//!
//! Every field is optional: an absent or empty value means "not measured",
//! and each downstream calculator degrades gracefully on `None`. Only a
//! value that is present but not a number is an error.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Parse failures at the measurement boundary.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MeasurementError {
    #[error("measurement `{field}` is not a number: `{value}`")]
    InvalidNumber { field: String, value: String },
    #[error("unknown measurement field `{field}`")]
    UnknownField { field: String },
}

/// Bench measurements accompanying a frame.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Measurements {
    pub temperature_c: Option<f64>,
    pub humidity_percent: Option<f64>,
    /// Direct moisture reading; superseded by `moisture_adc` when both are
    /// present.
    pub moisture_percent: Option<f64>,
    /// Raw ADC value from the moisture probe.
    pub moisture_adc: Option<f64>,
    pub weight_g: Option<f64>,
    pub container_volume_ml: Option<f64>,
    pub displaced_volume_ml: Option<f64>,
    pub jar_settled_mm: Option<f64>,
    pub jar_total_mm: Option<f64>,
    /// Reference marker length in pixels, for scale calibration.
    pub scale_marker_px: Option<f64>,
    /// Real-world length of the same marker in millimetres.
    pub scale_marker_mm: Option<f64>,
}

impl Measurements {
    /// Build from name/value string pairs as they come off the wire.
    ///
    /// Empty values are treated as absent. Field names follow the wire's
    /// snake_case convention; the short sensor names (`temp`, `humidity`,
    /// `moisture`) are accepted alongside the descriptive spellings.
    pub fn parse<'a, I>(pairs: I) -> Result<Self, MeasurementError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut m = Measurements::default();
        for (field, value) in pairs {
            let slot = match field {
                // Short spellings are what the wire actually sends.
                "temp" | "temperature_c" => &mut m.temperature_c,
                "humidity" | "humidity_percent" => &mut m.humidity_percent,
                "moisture" | "moisture_percent" => &mut m.moisture_percent,
                "moisture_adc" => &mut m.moisture_adc,
                "weight_g" => &mut m.weight_g,
                "container_volume_ml" => &mut m.container_volume_ml,
                "displaced_volume_ml" => &mut m.displaced_volume_ml,
                "jar_settled_mm" => &mut m.jar_settled_mm,
                "jar_total_mm" => &mut m.jar_total_mm,
                "scale_marker_px" => &mut m.scale_marker_px,
                "scale_marker_mm" => &mut m.scale_marker_mm,
                _ => {
                    return Err(MeasurementError::UnknownField {
                        field: field.to_string(),
                    })
                }
            };
            let trimmed = value.trim();
            if trimmed.is_empty() {
                continue;
            }
            let parsed = trimmed
                .parse::<f64>()
                .map_err(|_| MeasurementError::InvalidNumber {
                    field: field.to_string(),
                    value: value.to_string(),
                })?;
            *slot = Some(parsed);
        }
        Ok(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_fields_and_skips_empty_values() {
        let m = Measurements::parse([
            ("weight_g", "500"),
            ("container_volume_ml", "1000"),
            ("moisture_adc", ""),
            ("scale_marker_px", " 50.0 "),
        ])
        .unwrap();
        assert_eq!(m.weight_g, Some(500.0));
        assert_eq!(m.container_volume_ml, Some(1000.0));
        assert_eq!(m.moisture_adc, None);
        assert_eq!(m.scale_marker_px, Some(50.0));
        assert_eq!(m.temperature_c, None);
    }

    #[test]
    fn short_wire_names_map_to_the_long_fields() {
        let m = Measurements::parse([
            ("temp", "25"),
            ("humidity", "40"),
            ("moisture", "12"),
        ])
        .unwrap();
        assert_eq!(m.temperature_c, Some(25.0));
        assert_eq!(m.humidity_percent, Some(40.0));
        assert_eq!(m.moisture_percent, Some(12.0));

        // Both spellings land in the same slot.
        let m = Measurements::parse([("moisture_percent", "12")]).unwrap();
        assert_eq!(m.moisture_percent, Some(12.0));
    }

    #[test]
    fn non_numeric_value_is_rejected_with_context() {
        let err = Measurements::parse([("weight_g", "heavy")]).unwrap_err();
        assert_eq!(
            err,
            MeasurementError::InvalidNumber {
                field: "weight_g".into(),
                value: "heavy".into(),
            }
        );
        assert!(err.to_string().contains("weight_g"));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = Measurements::parse([("grit", "1")]).unwrap_err();
        assert_eq!(
            err,
            MeasurementError::UnknownField {
                field: "grit".into()
            }
        );
    }

    #[test]
    fn round_trips_through_json_with_camel_case() {
        let m = Measurements {
            weight_g: Some(250.0),
            jar_total_mm: Some(120.0),
            ..Default::default()
        };
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["weightG"], 250.0);
        assert_eq!(json["jarTotalMm"], 120.0);
        let back: Measurements = serde_json::from_value(json).unwrap();
        assert_eq!(back, m);
    }
}
