//! Right column: system summary, recent notices, quick actions, report
//! preferences.

use dioxus::prelude::*;

use mgm_chart_ui::components::{ActionButton, NoticeItem, ToggleSwitch};
use mgm_chart_ui::theme::slate;
use mgm_data::Notice;

#[component]
pub fn RightColumn() -> Element {
    rsx! {
        div {
            style: "display: grid; gap: 24px;",
            SummaryCard {}
            RecentNotices {}
            QuickActions {}
            ReportPreferences {}
        }
    }
}

/// Region summary with the fixed capture schedule.
#[component]
fn SummaryCard() -> Element {
    let border = slate::BORDER_700;
    let text_name = slate::TEXT_200;
    let text_muted = slate::TEXT_400;
    let text_faint = slate::TEXT_500;

    rsx! {
        div {
            style: "background: rgba(15, 23, 42, 0.5); border: 1px solid {border}; border-radius: 8px; overflow: hidden; backdrop-filter: blur(4px);",
            div {
                style: "background: linear-gradient(to bottom right, #1e293b, #0f172a); padding: 24px; border-bottom: 1px solid {border}; text-align: center;",
                div {
                    style: "font-size: 11px; color: {text_faint}; margin-bottom: 4px; font-family: monospace;",
                    "RESUMEN DEL SISTEMA"
                }
                div {
                    style: "font-size: 22px; font-family: monospace; color: #4ade80; margin-bottom: 4px;",
                    "Golfo de Urabá"
                }
                div {
                    style: "font-size: 13px; color: {text_muted};",
                    "Monitoreo de Manglares"
                }
            }
            div {
                style: "padding: 16px; display: grid; grid-template-columns: 1fr 1fr; gap: 12px;",
                div {
                    style: "background: rgba(30, 41, 59, 0.5); border: 1px solid {border}; border-radius: 6px; padding: 12px;",
                    div {
                        style: "font-size: 11px; color: {text_faint}; margin-bottom: 4px;",
                        "Última Actualización"
                    }
                    div {
                        style: "font-size: 13px; font-family: monospace; color: {text_name};",
                        "15/03/2025"
                    }
                }
                div {
                    style: "background: rgba(30, 41, 59, 0.5); border: 1px solid {border}; border-radius: 6px; padding: 12px;",
                    div {
                        style: "font-size: 11px; color: {text_faint}; margin-bottom: 4px;",
                        "Próxima Captura"
                    }
                    div {
                        style: "font-size: 13px; font-family: monospace; color: {text_name};",
                        "17/03/2025"
                    }
                }
            }
        }
    }
}

/// Fixed notification rows.
#[component]
fn RecentNotices() -> Element {
    let notices = Notice::recent_fixture();
    let border = slate::BORDER_700;

    rsx! {
        div {
            style: "background: rgba(15, 23, 42, 0.5); border: 1px solid {border}; border-radius: 8px; padding: 16px; backdrop-filter: blur(4px);",
            div {
                style: "display: flex; align-items: center; gap: 8px; font-size: 15px; font-weight: 600; color: #f1f5f9; margin-bottom: 12px;",
                span { style: "color: #f59e0b;", "⚠" }
                "Alertas Recientes"
            }
            div {
                style: "display: grid; gap: 12px;",
                for notice in notices {
                    NoticeItem { notice }
                }
            }
        }
    }
}

/// Quick-action button grid. Presentational only.
#[component]
fn QuickActions() -> Element {
    let border = slate::BORDER_700;

    rsx! {
        div {
            style: "background: rgba(15, 23, 42, 0.5); border: 1px solid {border}; border-radius: 8px; padding: 16px; backdrop-filter: blur(4px);",
            div {
                style: "font-size: 15px; font-weight: 600; color: #f1f5f9; margin-bottom: 12px;",
                "Acciones Rápidas"
            }
            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 12px;",
                ActionButton { glyph: "⭳", label: "Descargar Datos" }
                ActionButton { glyph: "◎", label: "Escaneo Rápido" }
                ActionButton { glyph: "⚑", label: "Marcar Punto" }
                ActionButton { glyph: "👁", label: "Ver Alertas" }
            }
        }
    }
}

/// Scheduled-report toggle rows. Toggles are visual only; they do not feed
/// back into any behavior.
#[component]
fn ReportPreferences() -> Element {
    let border = slate::BORDER_700;

    rsx! {
        div {
            style: "background: rgba(15, 23, 42, 0.5); border: 1px solid {border}; border-radius: 8px; padding: 16px; backdrop-filter: blur(4px);",
            div {
                style: "font-size: 15px; font-weight: 600; color: #f1f5f9; margin-bottom: 12px;",
                "Reportes Programados"
            }
            div {
                style: "display: grid; gap: 12px;",
                ToggleSwitch { glyph: "🗓", label: "Reporte Semanal", default_on: true }
                ToggleSwitch { glyph: "✉", label: "Alertas por Email", default_on: true }
                ToggleSwitch { glyph: "ℹ", label: "Resumen Mensual" }
                ToggleSwitch { glyph: "✓", label: "Verificación de Datos", default_on: true }
            }
        }
    }
}
