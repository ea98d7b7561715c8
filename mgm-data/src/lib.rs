//! Domain model and fixture datasets for the Manglar Monitor dashboard.
//!
//! All entities here are transient view-state values: they are created once
//! by the simulated load, never persisted, and never mutated afterwards.
//! Display enumerations carry total lookup tables (color, label, glyph) so
//! every variant resolves to the same visual attributes wherever it is
//! rendered.

pub mod alert;
pub mod biodiversity;
pub mod co2;
pub mod datasets;
pub mod display;
pub mod erosion;
pub mod fixtures;
pub mod notice;

pub use alert::{marker_position, DeforestationAlert};
pub use biodiversity::BiodiversitySpecies;
pub use co2::Co2MonthlyPoint;
pub use datasets::{
    BiodiversitySummary, Co2Summary, Datasets, DeforestationSummary, ErosionSummary, SystemStatus,
};
pub use display::{
    ActionStatus, AlertSeverity, MapLayer, MetricTrend, NoticeKind, PopulationTrend, RiskLevel,
    SpeciesStatus,
};
pub use erosion::CoastalErosionArea;
pub use fixtures::{
    ProgramCard, CONSERVATION_PROGRAMS, IMPROVEMENT_PROJECTS, MITIGATION_ACTIONS, MONTH_LABELS,
    PROTECTION_MEASURES,
};
pub use notice::Notice;
