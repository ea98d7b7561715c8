//! Quick-action button for the right panel.

use dioxus::prelude::*;

use crate::theme::slate;

/// Props for ActionButton
#[derive(Props, Clone, PartialEq)]
pub struct ActionButtonProps {
    pub glyph: String,
    pub label: String,
}

/// A stacked glyph + label button. Presentational only: the quick actions
/// carry no behavior.
#[component]
pub fn ActionButton(props: ActionButtonProps) -> Element {
    let text = slate::TEXT_200;

    rsx! {
        button {
            style: "display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 4px; width: 100%; padding: 12px; border: 1px solid #334155; border-radius: 6px; background: rgba(30, 41, 59, 0.5); color: {text}; cursor: pointer;",
            span {
                style: "font-size: 18px; color: #22c55e;",
                "{props.glyph}"
            }
            span {
                style: "font-size: 12px;",
                "{props.label}"
            }
        }
    }
}
