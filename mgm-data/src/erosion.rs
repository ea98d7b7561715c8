//! Coastal erosion monitoring records.

use serde::{Deserialize, Serialize};

use crate::display::RiskLevel;

/// A coastal area under erosion monitoring.
///
/// `risk` is independently fixed per area; it is not derived from `rate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoastalErosionArea {
    pub location: String,
    /// Erosion rate in meters per year.
    pub rate_m_per_year: f64,
    pub risk: RiskLevel,
    /// Affected area in hectares.
    pub affected_area_ha: f64,
}
