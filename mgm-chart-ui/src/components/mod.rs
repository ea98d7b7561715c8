//! Reusable Dioxus RSX components for the Manglar Monitor dashboard.

mod action_button;
mod action_card;
mod charts;
mod layer_button;
mod loading_overlay;
mod metric_card;
mod nav_item;
mod notice_item;
mod particle_canvas;
mod status_item;
mod toggle_switch;

pub use action_button::ActionButton;
pub use action_card::ActionCard;
pub use charts::{
    bar_height_pct, random_bar_heights, BiodiversityChart, Co2Chart, DeforestationChart,
    ErosionChart, CO2_SCALE_MAX_TONNES, DEFORESTATION_BAR_COUNT,
};
pub use layer_button::LayerButton;
pub use loading_overlay::LoadingOverlay;
pub use metric_card::MetricCard;
pub use nav_item::NavItem;
pub use notice_item::NoticeItem;
pub use particle_canvas::ParticleCanvas;
pub use status_item::StatusItem;
pub use toggle_switch::ToggleSwitch;
