//! Simulated map surface: layer selector, alert markers, detail popup.
//!
//! The surface is a static backdrop, not a real map: marker placement uses
//! the fixed affine transform from `mgm_data::marker_position`, valid only
//! for the Golfo de Urabá fixture region.

use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use gloo_timers::future::TimeoutFuture;

use mgm_chart_ui::components::LayerButton;
use mgm_chart_ui::state::AppState;
use mgm_chart_ui::theme::slate;
use mgm_data::{marker_position, DeforestationAlert, MapLayer};

/// Simulated map tile load delay. Independent of the dashboard's own
/// loading flag: the two gates cover different surfaces.
const MAP_LOAD_DELAY_MS: u32 = 1_500;

/// The map card: header, layer selector overlay and the map surface.
#[component]
pub fn MapPanel() -> Element {
    let mut state = use_context::<AppState>();
    let selected_layer = (state.selected_layer)();
    let selected_date = (state.selected_date)();
    let alerts = state.datasets.read().deforestation.alerts.clone();
    let border = slate::BORDER_700;
    let text_muted = slate::TEXT_400;
    let layer_badge = selected_layer.label().to_uppercase();

    let on_layer_change = move |layer: MapLayer| {
        info!("map layer changed: {}", layer.as_str());
        state.selected_layer.set(layer);
    };

    rsx! {
        div {
            style: "background: rgba(15, 23, 42, 0.5); border: 1px solid {border}; border-radius: 8px; overflow: hidden; backdrop-filter: blur(4px);",
            div {
                style: "display: flex; align-items: center; justify-content: space-between; padding: 14px 16px; border-bottom: 1px solid {border};",
                div {
                    style: "display: flex; align-items: center; gap: 8px; color: #f1f5f9; font-size: 15px; font-weight: 600;",
                    span { style: "color: #22c55e;", "⬡" }
                    "Monitoreo de Manglares - Golfo de Urabá"
                }
                div {
                    style: "display: flex; align-items: center; gap: 8px;",
                    span {
                        style: "display: flex; align-items: center; gap: 6px; font-size: 11px; color: #4ade80; border: 1px solid rgba(34, 197, 94, 0.5); border-radius: 9999px; padding: 2px 10px; background: rgba(30, 41, 59, 0.5);",
                        span {
                            class: "mgm-pulse",
                            style: "width: 6px; height: 6px; border-radius: 9999px; background: #22c55e;",
                        }
                        "{layer_badge}"
                    }
                    button {
                        style: "background: transparent; border: none; color: {text_muted}; cursor: pointer; font-size: 14px;",
                        title: "Actualizar",
                        "⟳"
                    }
                }
            }

            div {
                style: "position: relative;",
                // Layer selector overlay
                div {
                    style: "position: absolute; top: 16px; right: 16px; z-index: 20; background: rgba(15, 23, 42, 0.8); backdrop-filter: blur(4px); border: 1px solid {border}; border-radius: 6px; padding: 8px;",
                    div {
                        style: "font-size: 11px; color: {text_muted}; margin-bottom: 6px;",
                        "Capas del Mapa"
                    }
                    div {
                        style: "display: grid; gap: 4px;",
                        for layer in MapLayer::ALL {
                            LayerButton {
                                layer,
                                active: selected_layer == layer,
                                on_select: on_layer_change,
                            }
                        }
                    }
                }

                div {
                    style: "height: 500px; width: 100%;",
                    MapView {
                        selected_date,
                        layer: selected_layer,
                        on_layer_change,
                        alerts,
                    }
                }
            }
        }
    }
}

/// Props for MapView
#[derive(Props, Clone, PartialEq)]
pub struct MapViewProps {
    /// Observation date shown in the current-layer chip (YYYY-MM-DD).
    pub selected_date: String,
    pub layer: MapLayer,
    pub on_layer_change: EventHandler<MapLayer>,
    /// Alerts to render as markers; an empty list renders no markers.
    #[props(default)]
    pub alerts: Vec<DeforestationAlert>,
}

/// The simulated map surface itself.
#[component]
pub fn MapView(props: MapViewProps) -> Element {
    let mut loaded = use_signal(|| false);
    let mut selected_alert = use_signal(|| None::<DeforestationAlert>);

    // Simulated tile load; the task dies with the component, so the flag
    // is never written after teardown.
    use_effect(move || {
        spawn(async move {
            TimeoutFuture::new(MAP_LOAD_DELAY_MS).await;
            loaded.set(true);
            info!("map surface ready");
        });
    });

    let is_loaded = loaded();
    let backdrop = asset!("/assets/placeholder.svg");
    let border = slate::BORDER_700;
    let text_muted = slate::TEXT_400;
    let layer_glyph = props.layer.glyph();
    let layer_glyph_color = props.layer.glyph_color();
    let layer_title = props.layer.title();
    let pulse_class = if is_loaded { "" } else { "mgm-pulse" };
    let show_markers = is_loaded && props.layer == MapLayer::Deforestation;

    rsx! {
        div {
            style: "position: relative; height: 100%; width: 100%; overflow: hidden;",
            div {
                class: "{pulse_class}",
                style: "height: 100%; width: 100%; position: relative; background-color: #1e293b; background-image: url({backdrop}); background-size: cover; background-position: center;",

                if !is_loaded {
                    div {
                        style: "position: absolute; inset: 0; display: flex; align-items: center; justify-content: center;",
                        div {
                            style: "color: {text_muted}; font-size: 14px;",
                            "Cargando mapa..."
                        }
                    }
                }

                if is_loaded {
                    // Current-layer chip
                    div {
                        style: "position: absolute; top: 16px; left: 16px; background: rgba(15, 23, 42, 0.8); backdrop-filter: blur(4px); border: 1px solid {border}; border-radius: 6px; padding: 8px 12px;",
                        div {
                            style: "display: flex; align-items: center; gap: 8px;",
                            span { style: "font-size: 16px; color: {layer_glyph_color};", "{layer_glyph}" }
                            div {
                                div {
                                    style: "font-size: 13px; font-weight: 500; color: #e2e8f0;",
                                    "{layer_title}"
                                }
                                div {
                                    style: "font-size: 11px; color: {text_muted};",
                                    "Fecha: {props.selected_date}"
                                }
                            }
                        }
                    }
                }

                if show_markers {
                    for alert in props.alerts.clone() {
                        AlertMarker {
                            key: "{alert.id}",
                            alert: alert.clone(),
                            on_click: move |picked| selected_alert.set(Some(picked)),
                        }
                    }
                }

                if let Some(alert) = selected_alert() {
                    AlertPopup {
                        alert,
                        on_close: move |_| selected_alert.set(None),
                    }
                }
            }
        }
    }
}

/// Props for AlertMarker
#[derive(Props, Clone, PartialEq)]
struct AlertMarkerProps {
    alert: DeforestationAlert,
    on_click: EventHandler<DeforestationAlert>,
}

/// A positioned, severity-colored marker for one alert.
#[component]
fn AlertMarker(props: AlertMarkerProps) -> Element {
    let (left, top) = marker_position(props.alert.coordinates);
    let color = props.alert.severity.color();
    let tooltip = format!("{} - {} ha", props.alert.location, props.alert.area_ha);
    let picked = props.alert.clone();
    let on_click = props.on_click;

    rsx! {
        button {
            style: "position: absolute; left: {left}%; top: {top}%; transform: translate(-50%, -50%); background: {color}33; color: {color}; border: none; border-radius: 9999px; width: 26px; height: 26px; font-size: 13px; cursor: pointer; display: flex; align-items: center; justify-content: center;",
            title: "{tooltip}",
            onclick: move |_| on_click.call(picked.clone()),
            "⚠"
        }
    }
}

/// Props for AlertPopup
#[derive(Props, Clone, PartialEq)]
struct AlertPopupProps {
    alert: DeforestationAlert,
    on_close: EventHandler<()>,
}

/// Detail popup for the selected alert. One alert at a time; the owner
/// replaces the selection on every marker click.
#[component]
fn AlertPopup(props: AlertPopupProps) -> Element {
    let severity = props.alert.severity;
    let color = severity.color();
    let severity_label = severity.label();
    let on_close = props.on_close;
    let border = slate::BORDER_700;
    let text_muted = slate::TEXT_400;
    let text_value = slate::TEXT_300;

    rsx! {
        div {
            style: "position: absolute; bottom: 16px; left: 16px; max-width: 280px; z-index: 30; background: rgba(15, 23, 42, 0.9); backdrop-filter: blur(4px); border: 1px solid {border}; border-left: 3px solid {color}; border-radius: 6px; padding: 12px;",
            div {
                style: "display: flex; align-items: flex-start; justify-content: space-between; margin-bottom: 8px;",
                div {
                    style: "display: flex; align-items: center; gap: 8px;",
                    span { style: "color: {color}; font-size: 13px;", "⚠" }
                    div {
                        style: "font-size: 13px; font-weight: 500; color: #e2e8f0;",
                        "{props.alert.location}"
                    }
                }
                button {
                    style: "background: transparent; border: none; color: {text_muted}; cursor: pointer; font-size: 14px; line-height: 1;",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
            }
            div {
                style: "display: grid; gap: 6px; font-size: 11px;",
                div {
                    style: "display: flex; justify-content: space-between;",
                    span { style: "color: {text_muted};", "Fecha:" }
                    span { style: "color: {text_value};", "{props.alert.date}" }
                }
                div {
                    style: "display: flex; justify-content: space-between;",
                    span { style: "color: {text_muted};", "Área afectada:" }
                    span { style: "color: {text_value};", "{props.alert.area_ha} hectáreas" }
                }
                div {
                    style: "display: flex; justify-content: space-between; align-items: center;",
                    span { style: "color: {text_muted};", "Severidad:" }
                    span {
                        style: "font-size: 11px; padding: 2px 8px; border-radius: 9999px; border: 1px solid {color}4d; background: {color}33; color: {color};",
                        "{severity_label}"
                    }
                }
                div {
                    style: "color: {text_muted}; margin-top: 2px;",
                    span { style: "display: block; margin-bottom: 2px;", "Descripción:" }
                    span { style: "color: {text_value};", "{props.alert.description}" }
                }
            }
        }
    }
}
