//! Program/action card with a status badge and progress gauge.

use dioxus::prelude::*;
use mgm_data::ProgramCard;

use crate::theme::{slate, Accent};

/// Props for ActionCard
#[derive(Props, Clone, PartialEq)]
pub struct ActionCardProps {
    pub card: ProgramCard,
}

/// A mitigation/conservation program card: title, status badge, description
/// and a progress gauge.
#[component]
pub fn ActionCard(props: ActionCardProps) -> Element {
    let status_color = props.card.status.color();
    let status_label = props.card.status.label();
    let progress = props.card.progress.min(100);
    let fill = Accent::Green.css_gradient();
    let border = slate::BORDER_700;
    let text_title = slate::TEXT_200;
    let text_muted = slate::TEXT_400;
    let text_faint = slate::TEXT_500;

    rsx! {
        div {
            style: "background: rgba(30, 41, 59, 0.5); border: 1px solid {border}; border-radius: 6px; padding: 12px;",
            div {
                style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 8px;",
                div {
                    style: "font-size: 13px; font-weight: 500; color: {text_title};",
                    "{props.card.title}"
                }
                span {
                    style: "font-size: 11px; padding: 2px 8px; border-radius: 9999px; border: 1px solid {status_color}4d; background: {status_color}33; color: {status_color};",
                    "{status_label}"
                }
            }
            div {
                style: "font-size: 12px; color: {text_muted}; margin-bottom: 12px;",
                "{props.card.description}"
            }
            div {
                style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 4px;",
                div {
                    style: "font-size: 11px; color: {text_faint};",
                    "Progreso"
                }
                div {
                    style: "font-size: 11px; color: {text_muted};",
                    "{progress}%"
                }
            }
            div {
                style: "height: 6px; background: #334155; border-radius: 9999px; overflow: hidden;",
                div {
                    style: "height: 100%; width: {progress}%; background: {fill}; border-radius: 9999px;",
                }
            }
        }
    }
}
