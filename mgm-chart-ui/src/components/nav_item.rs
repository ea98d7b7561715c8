//! Sidebar navigation entry.

use dioxus::prelude::*;

use crate::theme::slate;

/// Props for NavItem
#[derive(Props, Clone, PartialEq)]
pub struct NavItemProps {
    pub glyph: String,
    pub label: String,
    #[props(default = false)]
    pub active: bool,
}

/// A sidebar navigation row; the active entry gets the green highlight.
#[component]
pub fn NavItem(props: NavItemProps) -> Element {
    let (background, color) = if props.active {
        ("rgba(30, 41, 59, 0.7)", "#4ade80")
    } else {
        ("transparent", slate::TEXT_400)
    };

    rsx! {
        button {
            style: "display: flex; align-items: center; gap: 8px; width: 100%; padding: 8px 12px; border: none; border-radius: 6px; text-align: left; font-size: 13px; cursor: pointer; background: {background}; color: {color};",
            span { "{props.glyph}" }
            "{props.label}"
        }
    }
}
