//! Monitored species records.

use serde::{Deserialize, Serialize};

use crate::display::{PopulationTrend, SpeciesStatus};

/// A monitored species with its population count and conservation status.
///
/// Identity is the species name; list order is display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiodiversitySpecies {
    pub species: String,
    /// Estimated population.
    pub count: u32,
    pub trend: PopulationTrend,
    pub status: SpeciesStatus,
    /// Display glyph shown next to the species name.
    pub icon: String,
}
