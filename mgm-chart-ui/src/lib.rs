//! Shared Dioxus components and reactive state for the Manglar Monitor
//! dashboard.
//!
//! This crate provides:
//! - `state`: reactive `AppState` with Dioxus Signals
//! - `theme`: accent color lookup shared by the presentational atoms
//! - `particles`: the decorative particle field behind the page
//! - `components`: reusable RSX components (cards, gauges, charts, etc.)

pub mod components;
pub mod particles;
pub mod state;
pub mod theme;
