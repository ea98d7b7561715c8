//! Dataset containers owned by the dashboard view state.
//!
//! `Datasets` bundles all four metric datasets into one value so the
//! simulated load can populate everything atomically: consumers never see
//! deforestation alerts without the matching biodiversity data.

use serde::{Deserialize, Serialize};

use crate::alert::DeforestationAlert;
use crate::biodiversity::BiodiversitySpecies;
use crate::co2::Co2MonthlyPoint;
use crate::erosion::CoastalErosionArea;

/// Deforestation totals plus the active alert list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeforestationSummary {
    /// Accumulated deforested area, hectares.
    pub total_ha: f64,
    /// Deforested area in the last month, hectares.
    pub monthly_ha: f64,
    pub alerts: Vec<DeforestationAlert>,
}

/// Species counts plus the monitored species list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BiodiversitySummary {
    pub species_count: u32,
    pub endangered_count: u32,
    pub species: Vec<BiodiversitySpecies>,
}

/// Coastal erosion aggregates plus the monitored area list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErosionSummary {
    /// Average erosion rate, meters per year.
    pub average_rate: f64,
    pub high_risk_areas: u32,
    pub areas: Vec<CoastalErosionArea>,
}

/// CO2 capture totals plus the monthly series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Co2Summary {
    /// Annual capture, tonnes.
    pub total_tonnes: f64,
    /// Capture in the last month, tonnes.
    pub monthly_tonnes: f64,
    pub monthly: Vec<Co2MonthlyPoint>,
}

/// All four dataset containers, populated as one unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Datasets {
    pub deforestation: DeforestationSummary,
    pub biodiversity: BiodiversitySummary,
    pub erosion: ErosionSummary,
    pub co2: Co2Summary,
}

impl Datasets {
    /// True while in the pre-load shape: zeroed totals, empty lists.
    pub fn is_empty(&self) -> bool {
        self.deforestation.alerts.is_empty()
            && self.biodiversity.species.is_empty()
            && self.erosion.areas.is_empty()
            && self.co2.monthly.is_empty()
    }
}

/// Health percentages (0-100) of the three monitoring subsystems.
///
/// Static once set by the load; there is no update path afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemStatus {
    pub satellite: u8,
    pub data_processing: u8,
    pub alerting: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_datasets_are_fully_zeroed() {
        let d = Datasets::default();
        assert!(d.is_empty());
        assert_eq!(d.deforestation.total_ha, 0.0);
        assert_eq!(d.deforestation.monthly_ha, 0.0);
        assert_eq!(d.biodiversity.species_count, 0);
        assert_eq!(d.biodiversity.endangered_count, 0);
        assert_eq!(d.erosion.average_rate, 0.0);
        assert_eq!(d.erosion.high_risk_areas, 0);
        assert_eq!(d.co2.total_tonnes, 0.0);
        assert_eq!(d.co2.monthly_tonnes, 0.0);
    }

    #[test]
    fn default_system_status_is_zeroed() {
        assert_eq!(SystemStatus::default(), SystemStatus {
            satellite: 0,
            data_processing: 0,
            alerting: 0,
        });
    }
}
