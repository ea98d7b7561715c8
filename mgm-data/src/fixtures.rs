//! Fixture values standing in for real sensor/dataset output.
//!
//! Everything here is literal data for the Golfo de Urabá region. The
//! simulated load installs the whole bundle at once; nothing is computed.

use crate::alert::DeforestationAlert;
use crate::biodiversity::BiodiversitySpecies;
use crate::co2::Co2MonthlyPoint;
use crate::datasets::{
    BiodiversitySummary, Co2Summary, Datasets, DeforestationSummary, ErosionSummary, SystemStatus,
};
use crate::display::{
    ActionStatus, AlertSeverity, NoticeKind, PopulationTrend, RiskLevel, SpeciesStatus,
};
use crate::erosion::CoastalErosionArea;
use crate::notice::Notice;

/// Short Spanish month labels, chart x-axis order.
pub const MONTH_LABELS: [&str; 12] = [
    "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
];

impl Datasets {
    /// The complete fixture bundle installed by the simulated load.
    pub fn fixture() -> Self {
        Self {
            deforestation: DeforestationSummary {
                total_ha: 245.8,
                monthly_ha: 12.3,
                alerts: vec![
                    DeforestationAlert {
                        id: "DEF-001".into(),
                        location: "Norte del Golfo de Urabá".into(),
                        coordinates: (8.1, -76.7),
                        severity: AlertSeverity::High,
                        date: "2025-03-12".into(),
                        area_ha: 5.2,
                        description: "Tala ilegal detectada por cambios en la firma espectral"
                            .into(),
                    },
                    DeforestationAlert {
                        id: "DEF-002".into(),
                        location: "Bahía Colombia".into(),
                        coordinates: (8.0, -76.8),
                        severity: AlertSeverity::Medium,
                        date: "2025-03-10".into(),
                        area_ha: 3.1,
                        description: "Reducción de cobertura vegetal detectada".into(),
                    },
                    DeforestationAlert {
                        id: "DEF-003".into(),
                        location: "Desembocadura del Río Atrato".into(),
                        coordinates: (8.2, -76.9),
                        severity: AlertSeverity::High,
                        date: "2025-03-08".into(),
                        area_ha: 7.5,
                        description: "Conversión de manglar a zona agrícola".into(),
                    },
                    DeforestationAlert {
                        id: "DEF-004".into(),
                        location: "Punta Caimán".into(),
                        coordinates: (8.3, -76.7),
                        severity: AlertSeverity::Low,
                        date: "2025-03-05".into(),
                        area_ha: 1.8,
                        description: "Posible degradación natural".into(),
                    },
                ],
            },
            biodiversity: BiodiversitySummary {
                species_count: 187,
                endangered_count: 42,
                species: vec![
                    BiodiversitySpecies {
                        species: "Mangle rojo (Rhizophora mangle)".into(),
                        count: 12500,
                        trend: PopulationTrend::Stable,
                        status: SpeciesStatus::Stable,
                        icon: "🌳".into(),
                    },
                    BiodiversitySpecies {
                        species: "Cangrejo azul (Cardisoma guanhumi)".into(),
                        count: 8700,
                        trend: PopulationTrend::Decreasing,
                        status: SpeciesStatus::Vulnerable,
                        icon: "🦀".into(),
                    },
                    BiodiversitySpecies {
                        species: "Garza tigre (Tigrisoma fasciatum)".into(),
                        count: 350,
                        trend: PopulationTrend::Decreasing,
                        status: SpeciesStatus::Endangered,
                        icon: "🐦".into(),
                    },
                    BiodiversitySpecies {
                        species: "Pez sábalo (Megalops atlanticus)".into(),
                        count: 1200,
                        trend: PopulationTrend::Increasing,
                        status: SpeciesStatus::Vulnerable,
                        icon: "🐟".into(),
                    },
                    BiodiversitySpecies {
                        species: "Manatí (Trichechus manatus)".into(),
                        count: 78,
                        trend: PopulationTrend::Stable,
                        status: SpeciesStatus::Endangered,
                        icon: "🐋".into(),
                    },
                ],
            },
            erosion: ErosionSummary {
                average_rate: 2.3,
                high_risk_areas: 5,
                areas: vec![
                    CoastalErosionArea {
                        location: "Playa Turbo".into(),
                        rate_m_per_year: 3.2,
                        risk: RiskLevel::High,
                        affected_area_ha: 12.5,
                    },
                    CoastalErosionArea {
                        location: "Punta Arenas".into(),
                        rate_m_per_year: 2.8,
                        risk: RiskLevel::High,
                        affected_area_ha: 8.7,
                    },
                    CoastalErosionArea {
                        location: "Bahía Colombia".into(),
                        rate_m_per_year: 1.5,
                        risk: RiskLevel::Medium,
                        affected_area_ha: 5.3,
                    },
                    CoastalErosionArea {
                        location: "Boca Tarena".into(),
                        rate_m_per_year: 2.1,
                        risk: RiskLevel::Medium,
                        affected_area_ha: 6.8,
                    },
                    CoastalErosionArea {
                        location: "Necoclí".into(),
                        rate_m_per_year: 3.5,
                        risk: RiskLevel::High,
                        affected_area_ha: 14.2,
                    },
                ],
            },
            co2: Co2Summary {
                total_tonnes: 45280.0,
                monthly_tonnes: 3750.0,
                monthly: [
                    3650.0, 3720.0, 3750.0, 3800.0, 3850.0, 3900.0, 3820.0, 3780.0, 3750.0,
                    3720.0, 3680.0, 3650.0,
                ]
                .iter()
                .zip(MONTH_LABELS)
                .map(|(&tonnes, month)| Co2MonthlyPoint {
                    month: month.into(),
                    tonnes,
                })
                .collect(),
            },
        }
    }
}

impl SystemStatus {
    /// Subsystem health installed by the simulated load.
    pub fn fixture() -> Self {
        Self {
            satellite: 95,
            data_processing: 88,
            alerting: 92,
        }
    }
}

impl Notice {
    /// The "Alertas Recientes" panel rows.
    pub fn recent_fixture() -> Vec<Notice> {
        vec![
            Notice {
                title: "Deforestación Detectada".into(),
                time: "14:32:12".into(),
                description: "5.2 ha en Norte del Golfo de Urabá".into(),
                kind: NoticeKind::Error,
            },
            Notice {
                title: "Erosión Acelerada".into(),
                time: "13:45:06".into(),
                description: "Incremento de erosión en Playa Turbo".into(),
                kind: NoticeKind::Warning,
            },
            Notice {
                title: "Avistamiento de Especies".into(),
                time: "09:12:45".into(),
                description: "Grupo de manatíes detectado en Bahía Colombia".into(),
                kind: NoticeKind::Info,
            },
            Notice {
                title: "Reforestación Completada".into(),
                time: "04:30:00".into(),
                description: "2.5 ha reforestadas en Punta Caimán".into(),
                kind: NoticeKind::Success,
            },
        ]
    }
}

/// A mitigation/conservation/protection/improvement program card.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramCard {
    pub title: &'static str,
    pub description: &'static str,
    pub status: ActionStatus,
    pub progress: u8,
}

/// "Acciones de Mitigación" cards on the deforestation tab.
pub const MITIGATION_ACTIONS: [ProgramCard; 3] = [
    ProgramCard {
        title: "Patrullaje",
        description: "Incrementar patrullajes en áreas de alto riesgo",
        status: ActionStatus::InProgress,
        progress: 65,
    },
    ProgramCard {
        title: "Reforestación",
        description: "Programa de reforestación en áreas degradadas",
        status: ActionStatus::Planned,
        progress: 30,
    },
    ProgramCard {
        title: "Educación",
        description: "Talleres comunitarios sobre conservación",
        status: ActionStatus::Completed,
        progress: 100,
    },
];

/// "Programas de Conservación" cards on the biodiversity tab.
pub const CONSERVATION_PROGRAMS: [ProgramCard; 3] = [
    ProgramCard {
        title: "Monitoreo de Nidos",
        description: "Seguimiento de nidos de aves en manglares",
        status: ActionStatus::Active,
        progress: 85,
    },
    ProgramCard {
        title: "Corredores Biológicos",
        description: "Establecimiento de corredores entre fragmentos",
        status: ActionStatus::InProgress,
        progress: 45,
    },
    ProgramCard {
        title: "Censo de Manatíes",
        description: "Monitoreo de población de manatíes",
        status: ActionStatus::Planned,
        progress: 20,
    },
];

/// "Medidas de Protección" cards on the erosion tab.
pub const PROTECTION_MEASURES: [ProgramCard; 3] = [
    ProgramCard {
        title: "Restauración de Manglares",
        description: "Plantación de manglares en zonas críticas",
        status: ActionStatus::Active,
        progress: 75,
    },
    ProgramCard {
        title: "Barreras Naturales",
        description: "Instalación de barreras de protección",
        status: ActionStatus::InProgress,
        progress: 50,
    },
    ProgramCard {
        title: "Monitoreo Costero",
        description: "Sistema de alerta temprana de erosión",
        status: ActionStatus::Active,
        progress: 90,
    },
];

/// "Proyectos de Mejora" cards on the CO2 tab.
pub const IMPROVEMENT_PROJECTS: [ProgramCard; 3] = [
    ProgramCard {
        title: "Ampliación de Manglares",
        description: "Expansión de áreas de manglar para aumentar captura",
        status: ActionStatus::Planned,
        progress: 25,
    },
    ProgramCard {
        title: "Certificación de Carbono",
        description: "Proceso de certificación para bonos de carbono",
        status: ActionStatus::InProgress,
        progress: 60,
    },
    ProgramCard {
        title: "Monitoreo Avanzado",
        description: "Implementación de sensores de CO2 en tiempo real",
        status: ActionStatus::Active,
        progress: 80,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_bundle_is_fully_populated() {
        let d = Datasets::fixture();
        assert!(!d.is_empty());
        assert_eq!(d.deforestation.alerts.len(), 4);
        assert_eq!(d.biodiversity.species.len(), 5);
        assert_eq!(d.erosion.areas.len(), 5);
        assert_eq!(d.co2.monthly.len(), 12);
        assert_eq!(d.deforestation.total_ha, 245.8);
        assert_eq!(d.biodiversity.species_count, 187);
        assert_eq!(d.erosion.high_risk_areas, 5);
        assert_eq!(d.co2.total_tonnes, 45280.0);
    }

    #[test]
    fn alert_ids_are_unique() {
        let d = Datasets::fixture();
        let mut ids: Vec<&str> = d
            .deforestation
            .alerts
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn co2_series_is_in_month_order() {
        let d = Datasets::fixture();
        let months: Vec<&str> = d.co2.monthly.iter().map(|p| p.month.as_str()).collect();
        assert_eq!(months, MONTH_LABELS);
        assert!(d.co2.monthly.iter().all(|p| p.tonnes >= 0.0));
    }

    #[test]
    fn erosion_risk_is_not_derived_from_rate() {
        // Boca Tarena erodes faster than Bahía Colombia yet both are medium
        // risk, and the slowest high-risk area is slower than some medium
        // ones would allow; the fixture fixes both fields independently.
        let d = Datasets::fixture();
        let medium: Vec<_> = d
            .erosion
            .areas
            .iter()
            .filter(|a| a.risk == RiskLevel::Medium)
            .collect();
        assert_eq!(medium.len(), 2);
        assert!(medium.iter().any(|a| a.rate_m_per_year > 2.0));
    }

    #[test]
    fn system_status_fixture_percentages() {
        let s = SystemStatus::fixture();
        assert_eq!((s.satellite, s.data_processing, s.alerting), (95, 88, 92));
    }

    #[test]
    fn recent_notices_cover_four_kinds() {
        let notices = Notice::recent_fixture();
        assert_eq!(notices.len(), 4);
        let kinds: Vec<_> = notices.iter().map(|n| n.kind).collect();
        assert!(kinds.contains(&NoticeKind::Error));
        assert!(kinds.contains(&NoticeKind::Warning));
        assert!(kinds.contains(&NoticeKind::Info));
        assert!(kinds.contains(&NoticeKind::Success));
    }

    #[test]
    fn program_cards_progress_in_range() {
        for card in MITIGATION_ACTIONS
            .iter()
            .chain(CONSERVATION_PROGRAMS.iter())
            .chain(PROTECTION_MEASURES.iter())
            .chain(IMPROVEMENT_PROJECTS.iter())
        {
            assert!(card.progress <= 100);
            assert!(!card.title.is_empty());
        }
    }
}
