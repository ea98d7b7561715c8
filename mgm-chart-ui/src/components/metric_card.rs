//! Headline metric card for the dashboard's top row.

use dioxus::prelude::*;
use mgm_data::MetricTrend;

use crate::theme::{slate, Accent};

/// Props for MetricCard
#[derive(Props, Clone, PartialEq)]
pub struct MetricCardProps {
    pub title: String,
    /// Pre-formatted value string (es-CO grouping).
    pub value: String,
    pub unit: String,
    pub glyph: String,
    pub trend: MetricTrend,
    pub accent: Accent,
    /// Small caption under the value.
    pub detail: String,
}

/// A bordered card with a formatted value, unit, detail line and a trend
/// arrow. A red accent inverts the trend colors: a rising "bad" metric is
/// red, not green.
#[component]
pub fn MetricCard(props: MetricCardProps) -> Element {
    let border = props.accent.solid();
    let inverted = props.accent == Accent::Red;
    let trend_color = props.trend.color(inverted);
    let trend_glyph = props.trend.glyph();
    let text_title = slate::TEXT_100;
    let text_unit = slate::TEXT_300;
    let text_muted = slate::TEXT_400;
    let text_faint = slate::TEXT_500;

    rsx! {
        div {
            style: "background: rgba(30, 41, 59, 0.5); border: 1px solid {border}4d; border-radius: 8px; padding: 16px; position: relative; overflow: hidden;",
            div {
                style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 8px;",
                div {
                    style: "font-size: 13px; color: {text_muted};",
                    "{props.title}"
                }
                span {
                    style: "font-size: 16px; color: {border};",
                    "{props.glyph}"
                }
            }
            div {
                style: "font-size: 24px; font-weight: 700; color: {text_title}; margin-bottom: 4px;",
                "{props.value} "
                span {
                    style: "font-size: 13px; color: {text_unit};",
                    "{props.unit}"
                }
            }
            div {
                style: "font-size: 11px; color: {text_faint};",
                "{props.detail}"
            }
            div {
                style: "position: absolute; bottom: 8px; right: 8px; font-size: 12px; color: {trend_color};",
                "{trend_glyph}"
            }
        }
    }
}
