//! Deforestation alert records and their map-marker placement.

use serde::{Deserialize, Serialize};

use crate::display::AlertSeverity;

/// A discrete deforestation event detected in the monitored region.
///
/// Rendered both as a positioned map marker and as a list row. Identity is
/// the `id` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeforestationAlert {
    pub id: String,
    pub location: String,
    /// (latitude, longitude) in decimal degrees.
    pub coordinates: (f64, f64),
    pub severity: AlertSeverity,
    /// Calendar date of detection, `YYYY-MM-DD`.
    pub date: String,
    /// Affected area in hectares.
    pub area_ha: f64,
    pub description: String,
}

/// Screen position of an alert marker as `(left_pct, top_pct)`.
///
/// This is a fixed affine transform, not a map projection: it is only valid
/// for the Golfo de Urabá bounding region used by the fixture data.
/// Out-of-range coordinates land off-surface, which is accepted.
pub fn marker_position(coordinates: (f64, f64)) -> (f64, f64) {
    let (lat, lon) = coordinates;
    ((lon + 77.0) * 10.0, (8.5 - lat) * 20.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_transform_constants_are_pinned() {
        let (left, top) = marker_position((8.1, -76.7));
        assert!((left - 3.0).abs() < 1e-9);
        assert!((top - 8.0).abs() < 1e-9);
    }

    #[test]
    fn marker_transform_is_affine_in_both_axes() {
        let (left_a, top_a) = marker_position((8.0, -76.8));
        let (left_b, top_b) = marker_position((8.3, -76.7));
        assert!((left_a - 2.0).abs() < 1e-9);
        assert!((top_a - 10.0).abs() < 1e-9);
        assert!((left_b - 3.0).abs() < 1e-9);
        assert!((top_b - 4.0).abs() < 1e-9);
    }

    #[test]
    fn out_of_region_coordinates_go_off_surface() {
        // Not an error: positions simply fall outside the 0..100% range.
        let (left, _) = marker_position((8.1, 10.0));
        assert!(left > 100.0);
    }
}
