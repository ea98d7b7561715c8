//! Manglar Monitor
//!
//! Single-page monitoring dashboard for the Golfo de Urabá mangrove
//! ecosystem: deforestation alerts, biodiversity, coastal erosion and CO2
//! capture. All data is fixture data installed by a simulated load; the
//! dashboard root owns the view state and passes read-only slices down.

use chrono::Datelike;
use dioxus::prelude::*;
use dioxus_logger::tracing::{info, Level};
use gloo_timers::future::TimeoutFuture;

use mgm_chart_ui::components::{
    LoadingOverlay, MetricCard, NavItem, ParticleCanvas, StatusItem,
};
use mgm_chart_ui::state::AppState;
use mgm_chart_ui::theme::{slate, Accent};
use mgm_data::{Datasets, MetricTrend, SystemStatus};
use mgm_utils::numbers::{format_count, format_number};

mod map_view;
mod panels;
mod side_panels;

use map_view::MapPanel;
use panels::DataTabs;
use side_panels::RightColumn;

/// Simulated dataset load delay.
const DATA_LOAD_DELAY_MS: u32 = 2_000;

/// Keyframes and base rules the inline styles rely on.
const GLOBAL_CSS: &str = r#"
body { margin: 0; background: #0f172a; font-family: system-ui, -apple-system, sans-serif; }
@keyframes mgm-spin { to { transform: rotate(360deg); } }
@keyframes mgm-ping { 75%, 100% { transform: scale(1.8); opacity: 0; } }
@keyframes mgm-pulse { 50% { opacity: 0.4; } }
.mgm-spin { animation: mgm-spin 1s linear infinite; }
.mgm-spin-slow { animation: mgm-spin 2.5s linear infinite; }
.mgm-spin-slower { animation: mgm-spin 4s linear infinite; }
.mgm-ping { animation: mgm-ping 1.2s cubic-bezier(0, 0, 0.2, 1) infinite; }
.mgm-pulse { animation: mgm-pulse 2s ease-in-out infinite; }
"#;

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("Starting Manglar Monitor dashboard");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Simulated fetch: a single timer installs every dataset, the system
    // status and the loading flag in one block, so no partially-populated
    // state is ever observable. The task dies with the component.
    use_effect(move || {
        spawn(async move {
            TimeoutFuture::new(DATA_LOAD_DELAY_MS).await;
            state.datasets.set(Datasets::fixture());
            state.system_status.set(SystemStatus::fixture());
            state.loading.set(false);
            info!("fixture datasets installed");
        });
    });

    let loading = (state.loading)();
    let bg_900 = slate::BG_900;

    rsx! {
        style { "{GLOBAL_CSS}" }
        div {
            style: "min-height: 100vh; background: linear-gradient(to bottom right, {bg_900}, #1e293b); color: #f1f5f9; position: relative; overflow: hidden; display: flex; flex-direction: column;",

            ParticleCanvas {}

            if loading {
                LoadingOverlay {}
            }

            div {
                style: "max-width: 1400px; margin: 0 auto; padding: 16px; position: relative; z-index: 10; width: 100%; box-sizing: border-box; flex: 1;",

                Header {}

                div {
                    style: "display: grid; grid-template-columns: 2fr 7fr 3fr; gap: 24px; align-items: start;",

                    Sidebar {}

                    div {
                        style: "display: grid; gap: 24px;",
                        MapPanel {}
                        MetricsRow {}
                        DataTabs {}
                    }

                    RightColumn {}
                }
            }

            Footer {}
        }
    }
}

/// Top chrome: brand, search box, alert bell, date picker, avatar.
#[component]
fn Header() -> Element {
    let mut state = use_context::<AppState>();
    let date = (state.selected_date)();
    let border = slate::BORDER_700;
    let text_muted = slate::TEXT_400;
    let avatar = asset!("/assets/placeholder.svg");

    let on_date_change = move |evt: Event<FormData>| {
        let value = evt.value();
        if !value.is_empty() {
            info!("selected date changed: {value}");
            state.selected_date.set(value);
        }
    };

    rsx! {
        header {
            style: "display: flex; align-items: center; justify-content: space-between; padding: 16px 0; border-bottom: 1px solid {border}; margin-bottom: 24px;",
            div {
                style: "display: flex; align-items: center; gap: 8px;",
                span { style: "font-size: 26px; color: #22c55e;", "⬢" }
                span {
                    style: "font-size: 19px; font-weight: 700; background: linear-gradient(to right, #4ade80, #14b8a6); -webkit-background-clip: text; background-clip: text; color: transparent;",
                    "MANGLAR MONITOR"
                }
            }

            div {
                style: "display: flex; align-items: center; gap: 16px;",
                // Search is inert: no filtering is attached to it.
                div {
                    style: "display: flex; align-items: center; gap: 4px; background: rgba(30, 41, 59, 0.5); border: 1px solid {border}; border-radius: 9999px; padding: 6px 12px;",
                    span { style: "color: {text_muted}; font-size: 13px;", "⌕" }
                    input {
                        r#type: "text",
                        placeholder: "Buscar ubicación...",
                        style: "background: transparent; border: none; outline: none; color: #f1f5f9; font-size: 13px; width: 160px;",
                    }
                }

                button {
                    title: "Alertas de deforestación",
                    style: "position: relative; background: transparent; border: none; color: {text_muted}; font-size: 17px; cursor: pointer;",
                    "🔔"
                    span {
                        class: "mgm-pulse",
                        style: "position: absolute; top: -2px; right: -2px; width: 8px; height: 8px; background: #ef4444; border-radius: 9999px;",
                    }
                }

                input {
                    r#type: "date",
                    value: "{date}",
                    onchange: on_date_change,
                    style: "background: rgba(30, 41, 59, 0.5); border: 1px solid {border}; border-radius: 6px; color: #f1f5f9; padding: 6px 10px; font-size: 13px;",
                }

                img {
                    src: avatar,
                    alt: "Usuario",
                    style: "width: 36px; height: 36px; border-radius: 9999px; border: 1px solid {border}; object-fit: cover;",
                }
            }
        }
    }
}

/// Left navigation plus the subsystem status gauges.
#[component]
fn Sidebar() -> Element {
    let state = use_context::<AppState>();
    let status = (state.system_status)();
    let border = slate::BORDER_700;
    let text_faint = slate::TEXT_500;

    rsx! {
        div {
            style: "background: rgba(15, 23, 42, 0.5); border: 1px solid {border}; border-radius: 8px; padding: 16px; backdrop-filter: blur(4px);",
            nav {
                style: "display: grid; gap: 4px;",
                NavItem { glyph: "▣", label: "Dashboard", active: true }
                NavItem { glyph: "⬡", label: "Mapa de Manglares" }
                NavItem { glyph: "⚘", label: "Deforestación" }
                NavItem { glyph: "☘", label: "Biodiversidad" }
                NavItem { glyph: "≈", label: "Erosión Costera" }
                NavItem { glyph: "☁", label: "Captura de CO2" }
                NavItem { glyph: "◉", label: "Monitoreo en Tiempo Real" }
                NavItem { glyph: "✉", label: "Reportes" }
                NavItem { glyph: "⚙", label: "Configuración" }
            }

            div {
                style: "margin-top: 32px; padding-top: 24px; border-top: 1px solid {border};",
                div {
                    style: "font-size: 11px; color: {text_faint}; margin-bottom: 8px; font-family: monospace;",
                    "ESTADO DEL SISTEMA"
                }
                div {
                    style: "display: grid; gap: 12px;",
                    StatusItem {
                        label: "Conexión Satelital",
                        value: status.satellite,
                        accent: Accent::Green,
                    }
                    StatusItem {
                        label: "Procesamiento de Datos",
                        value: status.data_processing,
                        accent: Accent::Cyan,
                    }
                    StatusItem {
                        label: "Sistema de Alertas",
                        value: status.alerting,
                        accent: Accent::Blue,
                    }
                }
            }
        }
    }
}

/// The four headline metric cards.
#[component]
fn MetricsRow() -> Element {
    let state = use_context::<AppState>();
    let datasets = state.datasets.read();

    let deforestation_total = format_number(datasets.deforestation.total_ha);
    let deforestation_detail = format!(
        "{} ha en el último mes",
        format_number(datasets.deforestation.monthly_ha)
    );
    let species_count = format_count(datasets.biodiversity.species_count);
    let species_detail = format!("{} en peligro", datasets.biodiversity.endangered_count);
    let co2_total = format_number(datasets.co2.total_tonnes);
    let co2_detail = format!("{} ton/mes", format_number(datasets.co2.monthly_tonnes));

    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(4, 1fr); gap: 16px;",
            MetricCard {
                title: "Área de Manglares",
                value: format_number(12450.0),
                unit: "hectáreas",
                glyph: "⚘",
                trend: MetricTrend::Stable,
                accent: Accent::Green,
                detail: "Última actualización: 15/03/2025",
            }
            MetricCard {
                title: "Deforestación",
                value: deforestation_total,
                unit: "hectáreas",
                glyph: "▤",
                trend: MetricTrend::Up,
                accent: Accent::Red,
                detail: deforestation_detail,
            }
            MetricCard {
                title: "Especies Monitoreadas",
                value: species_count,
                unit: "especies",
                glyph: "☘",
                trend: MetricTrend::Stable,
                accent: Accent::Cyan,
                detail: species_detail,
            }
            MetricCard {
                title: "Captura de CO2",
                value: co2_total,
                unit: "ton",
                glyph: "☁",
                trend: MetricTrend::Up,
                accent: Accent::Blue,
                detail: co2_detail,
            }
        }
    }
}

/// Static page footer.
#[component]
fn Footer() -> Element {
    let year = chrono::Local::now().year();

    rsx! {
        footer {
            style: "text-align: center; padding: 12px; font-size: 12px; color: rgba(255, 255, 255, 0.6); background: rgba(26, 32, 44, 0.3); backdrop-filter: blur(5px); width: 100%; position: relative; z-index: 10;",
            "© {year} Manglar Monitor. Todos los derechos reservados."
        }
    }
}
