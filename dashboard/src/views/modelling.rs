//! Modelling section: interval dropdown and button-gated forecast plots.
//!
//! Forecast figures render only after the Search button is pressed; the
//! gate is local to this view, so navigating away and back re-arms it.
//! Only monthly-trained artifacts exist upstream, so the button always
//! renders the monthly prediction set; the dropdown selects the
//! description shown above it.

use crate::config::{forecast_entries, variable_slug, FORECAST_VARIABLES};
use crate::content;
use dioxus::prelude::*;
use paddy_chart_ui::components::{ChartContainer, ErrorDisplay, IntervalSelector};
use paddy_chart_ui::js_bridge;
use paddy_chart_ui::state::AppState;
use paddy_forecast::forecast_figures;

fn forecast_chart_id(variable: &str) -> String {
    format!("forecast-chart-{}", variable_slug(variable))
}

#[component]
pub fn ModellingView() -> Element {
    let state = use_context::<AppState>();
    let mut requested = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let interval = (state.interval)();
    let description = content::MODELLING_OVERVIEW
        .iter()
        .find(|(label, _)| *label == interval.label())
        .map(|(_, text)| *text)
        .unwrap_or_default();

    // Artifacts are loaded fresh on every press; a failure aborts this
    // branch only and the other sections keep rendering.
    use_effect(move || {
        if !requested() {
            return;
        }
        js_bridge::init_charts();
        match forecast_figures(&forecast_entries()) {
            Ok(figures) => {
                for (variable, figure) in FORECAST_VARIABLES.into_iter().zip(figures) {
                    js_bridge::render_forecast_chart(
                        &forecast_chart_id(variable),
                        &figure.to_json(),
                    );
                }
            }
            Err(e) => {
                log::error!("forecast render failed: {}", e);
                error.set(Some(e.to_string()));
            }
        }
    });

    rsx! {
        IntervalSelector {}
        p { "{description}" }
        button {
            style: "padding: 6px 18px; margin: 8px 0; cursor: pointer;",
            onclick: move |_| requested.set(true),
            "Search"
        }
        if let Some(msg) = error() {
            ErrorDisplay { message: msg }
        } else if requested() {
            for variable in FORECAST_VARIABLES {
                ChartContainer { id: forecast_chart_id(variable) }
            }
        }
    }
}
