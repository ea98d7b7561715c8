//! Data tabs under the map: one panel per metric family.

use dioxus::prelude::*;

use mgm_chart_ui::components::{
    ActionCard, BiodiversityChart, Co2Chart, DeforestationChart, ErosionChart, NoticeItem,
};
use mgm_chart_ui::state::AppState;
use mgm_chart_ui::theme::{slate, Accent};
use mgm_data::{
    BiodiversitySpecies, CoastalErosionArea, Notice, ProgramCard, CONSERVATION_PROGRAMS,
    IMPROVEMENT_PROJECTS, MITIGATION_ACTIONS, PROTECTION_MEASURES,
};
use mgm_utils::numbers::{format_count, format_number};

/// Shared inner-section chrome.
const SECTION_STYLE: &str = "background: rgba(30, 41, 59, 0.3); border: 1px solid rgba(51, 65, 85, 0.5); border-radius: 8px; padding: 16px;";

/// The four data tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DataTab {
    Deforestation,
    Biodiversity,
    Erosion,
    Co2,
}

impl DataTab {
    const ALL: [DataTab; 4] = [
        Self::Deforestation,
        Self::Biodiversity,
        Self::Erosion,
        Self::Co2,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Deforestation => "Deforestación",
            Self::Biodiversity => "Biodiversidad",
            Self::Erosion => "Erosión Costera",
            Self::Co2 => "Captura de CO2",
        }
    }
}

/// Tab bar plus the active panel.
#[component]
pub fn DataTabs() -> Element {
    let active = use_signal(|| DataTab::Deforestation);
    let current = active();
    let border = slate::BORDER_700;

    rsx! {
        div {
            style: "background: rgba(15, 23, 42, 0.5); border: 1px solid {border}; border-radius: 8px; padding: 24px; backdrop-filter: blur(4px);",
            div {
                style: "display: inline-flex; gap: 4px; background: rgba(30, 41, 59, 0.5); border-radius: 6px; padding: 4px; margin-bottom: 24px;",
                for tab in DataTab::ALL {
                    TabButton { tab, active, }
                }
            }

            match current {
                DataTab::Deforestation => rsx! { DeforestationPanel {} },
                DataTab::Biodiversity => rsx! { BiodiversityPanel {} },
                DataTab::Erosion => rsx! { ErosionPanel {} },
                DataTab::Co2 => rsx! { Co2Panel {} },
            }
        }
    }
}

/// Props for TabButton
#[derive(Props, Clone, PartialEq)]
struct TabButtonProps {
    tab: DataTab,
    active: Signal<DataTab>,
}

#[component]
fn TabButton(props: TabButtonProps) -> Element {
    let tab = props.tab;
    let mut active = props.active;
    let is_active = active() == tab;
    let label = tab.label();
    let (background, color) = if is_active {
        ("#334155", "#4ade80")
    } else {
        ("transparent", slate::TEXT_400)
    };

    rsx! {
        button {
            style: "border: none; border-radius: 4px; padding: 6px 14px; font-size: 13px; cursor: pointer; background: {background}; color: {color};",
            onclick: move |_| active.set(tab),
            "{label}"
        }
    }
}

/// Grid of three program cards under a section title.
#[component]
fn ProgramCardRow(title: String, cards: Vec<ProgramCard>) -> Element {
    let text_title = slate::TEXT_300;

    rsx! {
        div {
            style: "{SECTION_STYLE}",
            h3 {
                style: "margin: 0 0 12px 0; font-size: 13px; font-weight: 500; color: {text_title};",
                "{title}"
            }
            div {
                style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px;",
                for card in cards {
                    ActionCard { card }
                }
            }
        }
    }
}

/// Deforestation tab: alert rows, simulated trend chart, mitigation cards.
#[component]
fn DeforestationPanel() -> Element {
    let state = use_context::<AppState>();
    let alerts = state.datasets.read().deforestation.alerts.clone();
    let rows: Vec<Notice> = alerts
        .iter()
        .map(|alert| Notice {
            title: alert.location.clone(),
            time: alert.date.clone(),
            description: format!("{} ha - {}", alert.area_ha, alert.description),
            kind: alert.severity.notice_kind(),
        })
        .collect();
    let text_title = slate::TEXT_300;

    rsx! {
        div {
            style: "display: grid; gap: 16px;",
            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px;",
                div {
                    style: "{SECTION_STYLE}",
                    h3 {
                        style: "margin: 0 0 12px 0; font-size: 13px; font-weight: 500; color: {text_title};",
                        "Alertas de Deforestación"
                    }
                    div {
                        style: "display: grid; gap: 12px;",
                        for notice in rows {
                            NoticeItem { notice }
                        }
                    }
                }
                div {
                    style: "{SECTION_STYLE}",
                    h3 {
                        style: "margin: 0 0 12px 0; font-size: 13px; font-weight: 500; color: {text_title};",
                        "Tendencia de Deforestación"
                    }
                    div {
                        style: "height: 256px; width: 100%; position: relative;",
                        DeforestationChart {}
                    }
                }
            }
            ProgramCardRow {
                title: "Acciones de Mitigación",
                cards: MITIGATION_ACTIONS.to_vec(),
            }
        }
    }
}

/// Biodiversity tab: species rows, distribution placeholder, programs.
#[component]
fn BiodiversityPanel() -> Element {
    let state = use_context::<AppState>();
    let species = state.datasets.read().biodiversity.species.clone();
    let text_title = slate::TEXT_300;

    rsx! {
        div {
            style: "display: grid; gap: 16px;",
            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px;",
                div {
                    style: "{SECTION_STYLE}",
                    h3 {
                        style: "margin: 0 0 12px 0; font-size: 13px; font-weight: 500; color: {text_title};",
                        "Especies Monitoreadas"
                    }
                    div {
                        style: "display: grid; gap: 12px;",
                        for entry in species {
                            SpeciesRow { entry }
                        }
                    }
                }
                div {
                    style: "{SECTION_STYLE}",
                    h3 {
                        style: "margin: 0 0 12px 0; font-size: 13px; font-weight: 500; color: {text_title};",
                        "Distribución de Especies"
                    }
                    div {
                        style: "height: 256px; width: 100%; position: relative;",
                        BiodiversityChart {}
                    }
                }
            }
            ProgramCardRow {
                title: "Programas de Conservación",
                cards: CONSERVATION_PROGRAMS.to_vec(),
            }
        }
    }
}

/// Props for SpeciesRow
#[derive(Props, Clone, PartialEq)]
struct SpeciesRowProps {
    entry: BiodiversitySpecies,
}

/// One monitored species: icon, name, population, status badge, trend line.
#[component]
fn SpeciesRow(props: SpeciesRowProps) -> Element {
    let population = format_count(props.entry.count);
    let status_color = props.entry.status.color();
    let status_label = props.entry.status.label();
    let trend_color = props.entry.trend.color();
    let trend_glyph = props.entry.trend.glyph();
    let trend_label = props.entry.trend.label();
    let border = slate::BORDER_700;
    let text_name = slate::TEXT_200;
    let text_muted = slate::TEXT_400;

    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: space-between; padding: 8px; border-radius: 6px; background: rgba(30, 41, 59, 0.5); border: 1px solid {border};",
            div {
                style: "display: flex; align-items: center; gap: 8px;",
                div { style: "font-size: 19px;", "{props.entry.icon}" }
                div {
                    div {
                        style: "font-size: 13px; color: {text_name};",
                        "{props.entry.species}"
                    }
                    div {
                        style: "font-size: 11px; color: {text_muted};",
                        "Población: {population}"
                    }
                }
            }
            div {
                style: "display: flex; flex-direction: column; align-items: flex-end; gap: 4px;",
                span {
                    style: "font-size: 11px; padding: 2px 8px; border-radius: 9999px; border: 1px solid {status_color}4d; background: {status_color}33; color: {status_color};",
                    "{status_label}"
                }
                div {
                    style: "font-size: 11px; color: {trend_color};",
                    "{trend_glyph} {trend_label}"
                }
            }
        }
    }
}

/// Erosion tab: risk areas with gauges, trend placeholder, measures.
#[component]
fn ErosionPanel() -> Element {
    let state = use_context::<AppState>();
    let areas = state.datasets.read().erosion.areas.clone();
    let text_title = slate::TEXT_300;

    rsx! {
        div {
            style: "display: grid; gap: 16px;",
            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px;",
                div {
                    style: "{SECTION_STYLE}",
                    h3 {
                        style: "margin: 0 0 12px 0; font-size: 13px; font-weight: 500; color: {text_title};",
                        "Áreas de Riesgo"
                    }
                    div {
                        style: "display: grid; gap: 12px;",
                        for area in areas {
                            ErosionRow { area }
                        }
                    }
                }
                div {
                    style: "{SECTION_STYLE}",
                    h3 {
                        style: "margin: 0 0 12px 0; font-size: 13px; font-weight: 500; color: {text_title};",
                        "Tendencia de Erosión"
                    }
                    div {
                        style: "height: 256px; width: 100%; position: relative;",
                        ErosionChart {}
                    }
                }
            }
            ProgramCardRow {
                title: "Medidas de Protección",
                cards: PROTECTION_MEASURES.to_vec(),
            }
        }
    }
}

/// Props for ErosionRow
#[derive(Props, Clone, PartialEq)]
struct ErosionRowProps {
    area: CoastalErosionArea,
}

/// One monitored coastal area: risk badge, rate, affected area, risk gauge.
#[component]
fn ErosionRow(props: ErosionRowProps) -> Element {
    let risk_color = props.area.risk.color();
    let risk_label = props.area.risk.label();
    let gauge = props.area.risk.gauge_percent();
    let rate = props.area.rate_m_per_year;
    let affected = props.area.affected_area_ha;
    let border = slate::BORDER_700;
    let text_name = slate::TEXT_200;
    let text_muted = slate::TEXT_400;

    rsx! {
        div {
            style: "padding: 12px; border-radius: 6px; background: rgba(30, 41, 59, 0.5); border: 1px solid {border};",
            div {
                style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 8px;",
                div {
                    style: "font-size: 13px; font-weight: 500; color: {text_name};",
                    "{props.area.location}"
                }
                span {
                    style: "font-size: 11px; padding: 2px 8px; border-radius: 9999px; border: 1px solid {risk_color}4d; background: {risk_color}33; color: {risk_color};",
                    "{risk_label}"
                }
            }
            div {
                style: "display: flex; align-items: center; justify-content: space-between; font-size: 11px; color: {text_muted};",
                div { "Tasa de erosión: {rate} m/año" }
                div { "Área afectada: {affected} ha" }
            }
            div {
                style: "margin-top: 8px; height: 6px; background: #334155; border-radius: 9999px; overflow: hidden;",
                div {
                    style: "height: 100%; width: {gauge}%; background: {risk_color}; border-radius: 9999px;",
                }
            }
        }
    }
}

/// CO2 tab: monthly chart, capture statistics, impact note, projects.
#[component]
fn Co2Panel() -> Element {
    let state = use_context::<AppState>();
    let co2 = state.datasets.read().co2.clone();
    let total = format_number(co2.total_tonnes);
    let monthly = format_number(co2.monthly_tonnes);
    let text_title = slate::TEXT_300;

    rsx! {
        div {
            style: "display: grid; gap: 16px;",
            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px;",
                div {
                    style: "{SECTION_STYLE}",
                    h3 {
                        style: "margin: 0 0 12px 0; font-size: 13px; font-weight: 500; color: {text_title};",
                        "Captura de CO2 por Mes"
                    }
                    div {
                        style: "height: 256px; width: 100%; position: relative;",
                        Co2Chart { data: co2.monthly.clone() }
                    }
                }
                div {
                    style: "{SECTION_STYLE}",
                    h3 {
                        style: "margin: 0 0 12px 0; font-size: 13px; font-weight: 500; color: {text_title};",
                        "Estadísticas de Captura"
                    }
                    div {
                        style: "display: grid; gap: 16px;",
                        CaptureStat {
                            label: "Captura Total Anual",
                            value: format!("{total} toneladas"),
                            percent: 85,
                        }
                        CaptureStat {
                            label: "Promedio Mensual",
                            value: format!("{monthly} toneladas"),
                            percent: 75,
                        }
                        CaptureStat {
                            label: "Eficiencia de Captura",
                            value: "3,8 ton/ha",
                            percent: 92,
                        }
                        ImpactNote {}
                    }
                }
            }
            ProgramCardRow {
                title: "Proyectos de Mejora",
                cards: IMPROVEMENT_PROJECTS.to_vec(),
            }
        }
    }
}

/// Props for CaptureStat
#[derive(Props, Clone, PartialEq)]
struct CaptureStatProps {
    label: String,
    value: String,
    percent: u8,
}

/// A labeled capture statistic with a gradient gauge.
#[component]
fn CaptureStat(props: CaptureStatProps) -> Element {
    let fill = Accent::Green.css_gradient();
    let percent = props.percent.min(100);
    let text_muted = slate::TEXT_400;

    rsx! {
        div {
            div {
                style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 4px;",
                div { style: "font-size: 13px; color: {text_muted};", "{props.label}" }
                div { style: "font-size: 13px; color: #4ade80;", "{props.value}" }
            }
            div {
                style: "height: 8px; background: #334155; border-radius: 9999px; overflow: hidden;",
                div {
                    style: "height: 100%; width: {percent}%; background: {fill}; border-radius: 9999px;",
                }
            }
        }
    }
}

/// Fixed equivalence caption under the capture statistics.
#[component]
fn ImpactNote() -> Element {
    let border = slate::BORDER_700;
    let text_name = slate::TEXT_200;
    let text_muted = slate::TEXT_400;

    rsx! {
        div {
            style: "padding: 12px; border-radius: 6px; background: rgba(30, 41, 59, 0.5); border: 1px solid {border}; margin-top: 8px;",
            div {
                style: "font-size: 13px; font-weight: 500; color: {text_name}; margin-bottom: 8px;",
                "Equivalencia de Impacto"
            }
            div {
                style: "font-size: 11px; color: {text_muted};",
                "La captura de CO2 de estos manglares equivale a retirar aproximadamente 9.850 vehículos de circulación durante un año completo."
            }
        }
    }
}
