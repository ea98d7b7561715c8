//! Monthly CO2 capture series.

use serde::{Deserialize, Serialize};

/// One month of CO2 capture, in tonnes.
///
/// Points form an ordered, chronological twelve-month series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Co2MonthlyPoint {
    /// Short month label ("Ene".."Dic").
    pub month: String,
    pub tonnes: f64,
}
