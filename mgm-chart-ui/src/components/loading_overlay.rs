//! Full-page initialization overlay.

use dioxus::prelude::*;

use crate::theme::slate;

/// Blocking overlay shown while the simulated data load is pending:
/// concentric spinner rings plus the boot caption.
#[component]
pub fn LoadingOverlay() -> Element {
    let text_muted = slate::TEXT_400;

    rsx! {
        div {
            style: "position: absolute; inset: 0; background: rgba(0, 0, 0, 0.8); display: flex; align-items: center; justify-content: center; z-index: 50;",
            div {
                style: "display: flex; flex-direction: column; align-items: center;",
                div {
                    style: "position: relative; width: 96px; height: 96px;",
                    div {
                        style: "position: absolute; inset: 0; border: 4px solid rgba(34, 197, 94, 0.3); border-radius: 9999px;",
                        class: "mgm-ping",
                    }
                    div {
                        style: "position: absolute; inset: 8px; border: 4px solid transparent; border-top-color: #22c55e; border-radius: 9999px;",
                        class: "mgm-spin",
                    }
                    div {
                        style: "position: absolute; inset: 16px; border: 4px solid transparent; border-right-color: #06b6d4; border-radius: 9999px;",
                        class: "mgm-spin-slow",
                    }
                    div {
                        style: "position: absolute; inset: 24px; border: 4px solid transparent; border-bottom-color: #3b82f6; border-radius: 9999px;",
                        class: "mgm-spin-slower",
                    }
                    div {
                        style: "position: absolute; inset: 32px; border: 4px solid transparent; border-left-color: #14b8a6; border-radius: 9999px;",
                        class: "mgm-spin",
                    }
                }
                div {
                    style: "margin-top: 16px; color: #22c55e; font-family: monospace; font-size: 13px; letter-spacing: 0.1em;",
                    "INICIALIZANDO SISTEMA"
                }
                div {
                    style: "margin-top: 8px; color: {text_muted}; font-size: 11px;",
                    "Cargando datos de monitoreo de manglares"
                }
            }
        }
    }
}
