//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`. The dashboard root is the only writer; every
//! descendant reads.

use dioxus::prelude::*;
use mgm_data::{Datasets, MapLayer, SystemStatus};
use mgm_utils::dates::format_date;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the simulated data load is still pending
    pub loading: Signal<bool>,
    /// Currently selected observation date (YYYY-MM-DD)
    pub selected_date: Signal<String>,
    /// Currently selected map layer
    pub selected_layer: Signal<MapLayer>,
    /// All four metric datasets, populated as one unit by the load
    pub datasets: Signal<Datasets>,
    /// Subsystem health percentages, set once by the load
    pub system_status: Signal<SystemStatus>,
}

impl AppState {
    /// Create a new AppState with pre-load signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            selected_date: Signal::new(format_date(&chrono::Local::now().date_naive())),
            selected_layer: Signal::new(MapLayer::Satellite),
            datasets: Signal::new(Datasets::default()),
            system_status: Signal::new(SystemStatus::default()),
        }
    }
}
