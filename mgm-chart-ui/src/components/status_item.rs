//! Subsystem status gauge shown in the sidebar.

use dioxus::prelude::*;

use crate::theme::{slate, Accent};

/// Props for StatusItem
#[derive(Props, Clone, PartialEq)]
pub struct StatusItemProps {
    pub label: String,
    /// Health percentage, 0-100.
    pub value: u8,
    pub accent: Accent,
}

/// A labeled percentage gauge with an accent gradient fill.
#[component]
pub fn StatusItem(props: StatusItemProps) -> Element {
    let fill = props.accent.css_gradient();
    let value = props.value.min(100);
    let text_muted = slate::TEXT_400;
    let track = slate::BG_800;

    rsx! {
        div {
            div {
                style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 4px;",
                div {
                    style: "font-size: 12px; color: {text_muted};",
                    "{props.label}"
                }
                div {
                    style: "font-size: 12px; color: {text_muted};",
                    "{value}%"
                }
            }
            div {
                style: "height: 6px; background: {track}; border-radius: 9999px; overflow: hidden;",
                div {
                    style: "height: 100%; width: {value}%; background: {fill}; border-radius: 9999px;",
                }
            }
        }
    }
}
