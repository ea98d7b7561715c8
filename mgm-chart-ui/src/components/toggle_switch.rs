//! Presentational toggle for the report-preference rows.

use dioxus::prelude::*;

use crate::theme::slate;

/// Props for ToggleSwitch
#[derive(Props, Clone, PartialEq)]
pub struct ToggleSwitchProps {
    pub glyph: String,
    pub label: String,
    #[props(default = false)]
    pub default_on: bool,
}

/// A labeled on/off switch. The state is purely visual and local: toggling
/// does not feed back into any application behavior.
#[component]
pub fn ToggleSwitch(props: ToggleSwitchProps) -> Element {
    let mut on = use_signal(|| props.default_on);
    let (track, knob_left) = if on() {
        ("#22c55e", "18px")
    } else {
        ("#334155", "2px")
    };
    let text_muted = slate::TEXT_400;

    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: space-between;",
            div {
                style: "display: flex; align-items: center; gap: 8px;",
                span { style: "color: #22c55e; font-size: 13px;", "{props.glyph}" }
                span { style: "font-size: 13px; color: {text_muted};", "{props.label}" }
            }
            button {
                style: "position: relative; width: 36px; height: 20px; border: none; border-radius: 9999px; background: {track}; cursor: pointer; padding: 0;",
                onclick: move |_| {
                    let next = !on();
                    on.set(next);
                },
                span {
                    style: "position: absolute; top: 2px; left: {knob_left}; width: 16px; height: 16px; border-radius: 9999px; background: #f8fafc; transition: left 0.15s;",
                }
            }
        }
    }
}
