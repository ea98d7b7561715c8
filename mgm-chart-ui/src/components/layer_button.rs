//! Map layer selector button.

use dioxus::prelude::*;
use mgm_data::MapLayer;

use crate::theme::slate;

/// Props for LayerButton
#[derive(Props, Clone, PartialEq)]
pub struct LayerButtonProps {
    pub layer: MapLayer,
    pub active: bool,
    pub on_select: EventHandler<MapLayer>,
}

/// One entry of the map's layer selector; clicking reports the layer to the
/// owner, which holds the selection.
#[component]
pub fn LayerButton(props: LayerButtonProps) -> Element {
    let (background, color, border) = if props.active {
        ("rgba(34, 197, 94, 0.2)", "#4ade80", "1px solid rgba(34, 197, 94, 0.3)")
    } else {
        ("transparent", slate::TEXT_400, "1px solid transparent")
    };
    let layer = props.layer;
    let label = layer.label();

    rsx! {
        button {
            style: "display: flex; align-items: center; gap: 4px; width: 100%; height: 28px; padding: 0 8px; border: {border}; border-radius: 4px; background: {background}; color: {color}; font-size: 12px; text-align: left; cursor: pointer;",
            onclick: move |_| props.on_select.call(layer),
            span { style: "font-size: 10px;", "▦" }
            "{label}"
        }
    }
}
