//! Bar chart renderers for the data tabs.
//!
//! Two real bar charts (the simulated deforestation trend and the fixed
//! CO2 series) plus two placeholder panels. Bars are plain proportional
//! divs against a fixed axis scale; values past the scale maximum overflow
//! the drawing area and clip, which is accepted.

use dioxus::prelude::*;
use mgm_data::{Co2MonthlyPoint, MONTH_LABELS};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::theme::slate;

/// Fixed y-axis maximum of the CO2 capture chart, in tonnes.
pub const CO2_SCALE_MAX_TONNES: f64 = 4000.0;

/// Number of bars in the simulated deforestation trend.
pub const DEFORESTATION_BAR_COUNT: usize = 12;

/// Proportional bar height (percent of the plot area) against a fixed
/// scale. Not clamped: out-of-scale values clip visually instead of
/// raising an error.
pub fn bar_height_pct(value: f64, scale_max: f64) -> f64 {
    value / scale_max * 100.0
}

/// Simulated bar heights for the deforestation trend: `count` percent
/// values in 10..70 drawn from the injected RNG.
pub fn random_bar_heights<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<f64> {
    (0..count)
        .map(|_| f64::from(rng.gen_range(0u32..60) + 10))
        .collect()
}

/// Props for the shared bar chart frame.
#[derive(Props, Clone, PartialEq)]
struct BarFrameProps {
    /// Y-axis labels, top to bottom.
    y_labels: Vec<&'static str>,
    /// Bar heights as percent of the plot area, left to right.
    heights: Vec<f64>,
    /// X-axis labels, left to right.
    x_labels: Vec<String>,
    /// CSS gradient for the bar fill.
    bar_fill: String,
}

/// Axis frame + proportional bars shared by both real charts.
#[component]
fn BarFrame(props: BarFrameProps) -> Element {
    let grid = slate::GRID_700;
    let text_faint = slate::TEXT_500;

    rsx! {
        div {
            style: "height: 100%; width: 100%; position: relative; display: flex; align-items: flex-end; padding: 16px 16px 32px;",
            // Y-axis labels
            div {
                style: "position: absolute; left: 8px; top: 0; height: 100%; display: flex; flex-direction: column; justify-content: space-between; padding: 16px 0;",
                for label in props.y_labels.iter() {
                    div {
                        style: "font-size: 11px; color: {text_faint};",
                        "{label}"
                    }
                }
            }
            // Gridlines
            div {
                style: "position: absolute; left: 0; right: 0; top: 0; height: 100%; display: flex; flex-direction: column; justify-content: space-between; padding: 16px 40px;",
                for i in 0..props.y_labels.len() {
                    div {
                        key: "{i}",
                        style: "border-bottom: 1px solid {grid}; width: 100%;",
                    }
                }
            }
            // Bars
            div {
                style: "flex: 1; height: 100%; display: flex; align-items: flex-end; justify-content: space-between; padding: 0 8px 0 40px; position: relative; z-index: 1;",
                for (i, height) in props.heights.iter().enumerate() {
                    div {
                        key: "{i}",
                        style: "display: flex; flex-direction: column; align-items: center;",
                        div {
                            style: "width: 18px; height: {height}%; background: {props.bar_fill}; border-radius: 2px 2px 0 0;",
                        }
                    }
                }
            }
            // X-axis labels
            div {
                style: "position: absolute; bottom: 4px; left: 0; right: 0; display: flex; justify-content: space-between; padding: 0 16px 0 48px;",
                for label in props.x_labels.iter() {
                    div {
                        style: "font-size: 11px; color: {text_faint};",
                        "{label}"
                    }
                }
            }
        }
    }
}

/// Props for DeforestationChart
#[derive(Props, Clone, PartialEq)]
pub struct DeforestationChartProps {
    /// RNG seed. Defaults to the wall clock, so every render reshuffles;
    /// tests inject a fixed seed.
    #[props(default)]
    pub seed: Option<u64>,
}

/// Simulated deforestation trend: twelve random bars per render.
///
/// Visual placeholder only. Deliberately not wired to the alert dataset;
/// the bars do not represent any real series.
#[component]
pub fn DeforestationChart(props: DeforestationChartProps) -> Element {
    let seed = props.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
    let mut rng = SmallRng::seed_from_u64(seed);
    let heights = random_bar_heights(&mut rng, DEFORESTATION_BAR_COUNT);

    rsx! {
        BarFrame {
            y_labels: vec!["25 ha", "20 ha", "15 ha", "10 ha", "5 ha", "0 ha"],
            heights,
            x_labels: MONTH_LABELS.iter().map(|m| m.to_string()).collect::<Vec<_>>(),
            bar_fill: "linear-gradient(to top, #ef4444, #f87171)".to_string(),
        }
    }
}

/// Props for Co2Chart
#[derive(Props, Clone, PartialEq)]
pub struct Co2ChartProps {
    /// Ordered monthly series; empty renders the empty-state panel.
    pub data: Vec<Co2MonthlyPoint>,
}

/// Monthly CO2 capture bars against the fixed 0-4000 t scale.
#[component]
pub fn Co2Chart(props: Co2ChartProps) -> Element {
    if props.data.is_empty() {
        return rsx! {
            PlaceholderChart {
                title: "Sin datos de captura".to_string(),
                subtitle: "La serie mensual aún no está disponible".to_string(),
            }
        };
    }

    let heights: Vec<f64> = props
        .data
        .iter()
        .map(|p| bar_height_pct(p.tonnes, CO2_SCALE_MAX_TONNES))
        .collect();
    let x_labels: Vec<String> = props.data.iter().map(|p| p.month.clone()).collect();

    rsx! {
        BarFrame {
            y_labels: vec!["4000 ton", "3000 ton", "2000 ton", "1000 ton", "0 ton"],
            heights,
            x_labels,
            bar_fill: "linear-gradient(to top, #22c55e, #2dd4bf)".to_string(),
        }
    }
}

/// Props for PlaceholderChart
#[derive(Props, Clone, PartialEq)]
pub struct PlaceholderChartProps {
    pub title: String,
    pub subtitle: String,
}

/// Centered text panel standing in for a chart.
#[component]
pub fn PlaceholderChart(props: PlaceholderChartProps) -> Element {
    let text_muted = slate::TEXT_400;
    let text_faint = slate::TEXT_500;

    rsx! {
        div {
            style: "height: 100%; width: 100%; display: flex; align-items: center; justify-content: center;",
            div {
                style: "text-align: center; color: {text_muted}; font-size: 13px;",
                "{props.title}"
                div {
                    style: "margin-top: 8px; font-size: 11px; color: {text_faint};",
                    "{props.subtitle}"
                }
            }
        }
    }
}

/// Species distribution placeholder panel.
#[component]
pub fn BiodiversityChart() -> Element {
    rsx! {
        PlaceholderChart {
            title: "Gráfico de distribución de especies".to_string(),
            subtitle: "Visualización de la distribución de especies en el ecosistema de manglares"
                .to_string(),
        }
    }
}

/// Erosion trend placeholder panel.
#[component]
pub fn ErosionChart() -> Element {
    rsx! {
        PlaceholderChart {
            title: "Gráfico de tendencia de erosión costera".to_string(),
            subtitle: "Visualización de la tasa de erosión en diferentes áreas del Golfo de Urabá"
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_height_is_proportional() {
        assert_eq!(bar_height_pct(2000.0, CO2_SCALE_MAX_TONNES), 50.0);
        assert_eq!(bar_height_pct(0.0, CO2_SCALE_MAX_TONNES), 0.0);
        assert_eq!(bar_height_pct(4000.0, CO2_SCALE_MAX_TONNES), 100.0);
    }

    #[test]
    fn out_of_scale_values_overflow_rather_than_clamp() {
        assert!(bar_height_pct(5000.0, CO2_SCALE_MAX_TONNES) > 100.0);
    }

    #[test]
    fn random_heights_stay_in_band() {
        let mut rng = SmallRng::seed_from_u64(99);
        let heights = random_bar_heights(&mut rng, DEFORESTATION_BAR_COUNT);
        assert_eq!(heights.len(), DEFORESTATION_BAR_COUNT);
        for h in heights {
            assert!((10.0..70.0).contains(&h));
        }
    }

    #[test]
    fn random_heights_are_seed_deterministic() {
        let mut a = SmallRng::seed_from_u64(5);
        let mut b = SmallRng::seed_from_u64(5);
        assert_eq!(
            random_bar_heights(&mut a, 12),
            random_bar_heights(&mut b, 12)
        );
    }
}
