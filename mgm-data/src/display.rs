//! Display enumerations and their total lookup tables.
//!
//! Every enum here maps each variant to fixed visual attributes (hex color,
//! Spanish label, glyph). The mappings are the behavioral contract of the
//! presentational layer: a severity must resolve to the same color family
//! on a map marker, a popup border and a badge.

use serde::{Deserialize, Serialize};

// Shared color families (slate dashboard palette).
pub const RED: &str = "#ef4444";
pub const AMBER: &str = "#f59e0b";
pub const BLUE: &str = "#3b82f6";
pub const GREEN: &str = "#22c55e";
pub const CYAN: &str = "#06b6d4";

/// Severity of a deforestation alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    High,
    Medium,
    Low,
}

impl AlertSeverity {
    pub const ALL: [AlertSeverity; 3] = [Self::High, Self::Medium, Self::Low];

    /// Color family used for marker glyph, popup border and badge alike.
    pub fn color(self) -> &'static str {
        match self {
            Self::High => RED,
            Self::Medium => AMBER,
            Self::Low => BLUE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::High => "Alta",
            Self::Medium => "Media",
            Self::Low => "Baja",
        }
    }

    /// Notice kind used when an alert is rendered in a notification list.
    pub fn notice_kind(self) -> NoticeKind {
        match self {
            Self::High => NoticeKind::Error,
            Self::Medium => NoticeKind::Warning,
            Self::Low => NoticeKind::Info,
        }
    }
}

/// Kind of a notification-list entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
    Success,
    Update,
}

impl NoticeKind {
    pub fn color(self) -> &'static str {
        match self {
            Self::Info => BLUE,
            Self::Warning => AMBER,
            Self::Error => RED,
            Self::Success => GREEN,
            Self::Update => CYAN,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Info => "ℹ",
            Self::Warning => "⚠",
            Self::Error => "⚠",
            Self::Success => "✓",
            Self::Update => "⭳",
        }
    }
}

/// Population trend of a monitored species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PopulationTrend {
    Increasing,
    Stable,
    Decreasing,
}

impl PopulationTrend {
    pub fn color(self) -> &'static str {
        match self {
            Self::Increasing => GREEN,
            Self::Stable => BLUE,
            Self::Decreasing => RED,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Increasing => "↗",
            Self::Stable => "→",
            Self::Decreasing => "↘",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Increasing => "Aumentando",
            Self::Stable => "Estable",
            Self::Decreasing => "Disminuyendo",
        }
    }
}

/// Conservation status of a monitored species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeciesStatus {
    Endangered,
    Vulnerable,
    Stable,
}

impl SpeciesStatus {
    pub fn color(self) -> &'static str {
        match self {
            Self::Endangered => RED,
            Self::Vulnerable => AMBER,
            Self::Stable => GREEN,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Endangered => "En peligro",
            Self::Vulnerable => "Vulnerable",
            Self::Stable => "Estable",
        }
    }
}

/// Coastal erosion risk level. Independent of the measured erosion rate:
/// both are fixed per area and no derivation rule ties them together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    pub fn color(self) -> &'static str {
        match self {
            Self::High => RED,
            Self::Medium => AMBER,
            Self::Low => GREEN,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::High => "Alto riesgo",
            Self::Medium => "Riesgo medio",
            Self::Low => "Bajo riesgo",
        }
    }

    /// Fill percentage of the risk gauge shown under each area row.
    pub fn gauge_percent(self) -> u8 {
        match self {
            Self::High => 90,
            Self::Medium => 60,
            Self::Low => 30,
        }
    }
}

/// Status badge of a mitigation/conservation action card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStatus {
    Active,
    Completed,
    InProgress,
    Planned,
}

impl ActionStatus {
    pub fn color(self) -> &'static str {
        match self {
            Self::Active | Self::Completed => GREEN,
            Self::InProgress => BLUE,
            Self::Planned => AMBER,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Activo",
            Self::Completed => "Completado",
            Self::InProgress => "En progreso",
            Self::Planned => "Planificado",
        }
    }
}

/// One of the five mutually-exclusive map display modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapLayer {
    Satellite,
    Deforestation,
    Biodiversity,
    Erosion,
    Co2,
}

impl MapLayer {
    pub const ALL: [MapLayer; 5] = [
        Self::Satellite,
        Self::Deforestation,
        Self::Biodiversity,
        Self::Erosion,
        Self::Co2,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Satellite => "Satelital",
            Self::Deforestation => "Deforestación",
            Self::Biodiversity => "Biodiversidad",
            Self::Erosion => "Erosión",
            Self::Co2 => "Captura CO2",
        }
    }

    /// Long title shown in the map's current-layer chip.
    pub fn title(self) -> &'static str {
        match self {
            Self::Satellite => "Vista Satelital",
            Self::Deforestation => "Deforestación",
            Self::Biodiversity => "Biodiversidad",
            Self::Erosion => "Erosión Costera",
            Self::Co2 => "Captura de CO2",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Satellite => "⌖",
            Self::Deforestation => "⚠",
            Self::Biodiversity => "☘",
            Self::Erosion => "≈",
            Self::Co2 => "☁",
        }
    }

    pub fn glyph_color(self) -> &'static str {
        match self {
            Self::Satellite => GREEN,
            Self::Deforestation => RED,
            Self::Biodiversity => GREEN,
            Self::Erosion => BLUE,
            Self::Co2 => CYAN,
        }
    }

    /// Stable identifier used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Satellite => "satellite",
            Self::Deforestation => "deforestation",
            Self::Biodiversity => "biodiversity",
            Self::Erosion => "erosion",
            Self::Co2 => "co2",
        }
    }
}

/// Direction arrow shown in the corner of a metric card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricTrend {
    Up,
    Down,
    Stable,
}

impl MetricTrend {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Up => "▲",
            Self::Down => "▼",
            Self::Stable => "▬",
        }
    }

    /// Trend color depends on whether the metric itself is a "bad" (red
    /// accented) metric: rising deforestation is red, rising capture green.
    pub fn color(self, inverted: bool) -> &'static str {
        match (self, inverted) {
            (Self::Up, false) => GREEN,
            (Self::Up, true) => RED,
            (Self::Down, false) => RED,
            (Self::Down, true) => GREEN,
            (Self::Stable, _) => BLUE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_color_family_is_total_and_fixed() {
        assert_eq!(AlertSeverity::High.color(), RED);
        assert_eq!(AlertSeverity::Medium.color(), AMBER);
        assert_eq!(AlertSeverity::Low.color(), BLUE);
        // Every variant resolves to a non-empty label too.
        for severity in AlertSeverity::ALL {
            assert!(!severity.label().is_empty());
            assert!(!severity.color().is_empty());
        }
    }

    #[test]
    fn severity_maps_onto_notice_kinds() {
        assert_eq!(AlertSeverity::High.notice_kind(), NoticeKind::Error);
        assert_eq!(AlertSeverity::Medium.notice_kind(), NoticeKind::Warning);
        assert_eq!(AlertSeverity::Low.notice_kind(), NoticeKind::Info);
    }

    #[test]
    fn notice_kind_colors() {
        assert_eq!(NoticeKind::Info.color(), BLUE);
        assert_eq!(NoticeKind::Warning.color(), AMBER);
        assert_eq!(NoticeKind::Error.color(), RED);
        assert_eq!(NoticeKind::Success.color(), GREEN);
        assert_eq!(NoticeKind::Update.color(), CYAN);
    }

    #[test]
    fn trend_arrows_and_colors() {
        assert_eq!(PopulationTrend::Increasing.color(), GREEN);
        assert_eq!(PopulationTrend::Stable.color(), BLUE);
        assert_eq!(PopulationTrend::Decreasing.color(), RED);
        assert_eq!(PopulationTrend::Increasing.glyph(), "↗");
        assert_eq!(PopulationTrend::Decreasing.glyph(), "↘");
    }

    #[test]
    fn risk_gauge_percentages() {
        assert_eq!(RiskLevel::High.gauge_percent(), 90);
        assert_eq!(RiskLevel::Medium.gauge_percent(), 60);
        assert_eq!(RiskLevel::Low.gauge_percent(), 30);
    }

    #[test]
    fn action_status_badge_colors() {
        assert_eq!(ActionStatus::Active.color(), GREEN);
        assert_eq!(ActionStatus::Completed.color(), GREEN);
        assert_eq!(ActionStatus::InProgress.color(), BLUE);
        assert_eq!(ActionStatus::Planned.color(), AMBER);
    }

    #[test]
    fn metric_trend_inversion() {
        assert_eq!(MetricTrend::Up.color(false), GREEN);
        assert_eq!(MetricTrend::Up.color(true), RED);
        assert_eq!(MetricTrend::Down.color(true), GREEN);
        assert_eq!(MetricTrend::Stable.color(false), BLUE);
    }

    #[test]
    fn layer_serde_round_trip_uses_lowercase_ids() {
        let json = serde_json::to_string(&MapLayer::Deforestation).unwrap();
        assert_eq!(json, "\"deforestation\"");
        for layer in MapLayer::ALL {
            assert_eq!(
                serde_json::to_string(&layer).unwrap(),
                format!("\"{}\"", layer.as_str())
            );
        }
    }
}
