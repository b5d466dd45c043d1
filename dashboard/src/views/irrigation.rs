//! Dataset → Irrigation Water Need: formulas and the daily variables chart.

use crate::content;
use crate::views::points_json;
use dioxus::prelude::*;
use paddy_chart_ui::components::{ChartContainer, ErrorDisplay, Expander};
use paddy_chart_ui::js_bridge;
use paddy_chart_ui::state::AppState;
use paddy_db::Database;

const DAILY_CHART_ID: &str = "irrigation-daily-chart";

fn render_charts(db: &Database) -> paddy_db::Result<()> {
    let daily = db.query_irrigation_daily()?;
    js_bridge::render_series_chart(
        DAILY_CHART_ID,
        &points_json(&daily),
        &js_bridge::series_config(
            "Irrigation Daily Variables",
            "time",
            "time",
            "value",
            "variable",
            true,
        ),
    );
    Ok(())
}

#[component]
pub fn IrrigationView() -> Element {
    let state = use_context::<AppState>();
    let mut error = use_signal(|| None::<String>);

    use_effect(move || {
        let db = match &*state.db.read() {
            Some(db) => db.clone(),
            None => return,
        };
        js_bridge::init_charts();
        if let Err(e) = render_charts(&db) {
            log::error!("irrigation chart render failed: {}", e);
            error.set(Some(e.to_string()));
        }
    });

    rsx! {
        if let Some(msg) = error() {
            ErrorDisplay { message: msg }
        } else {
            Expander {
                label: "About Irrigation Water Need".to_string(),
                p {
                    b { "For all field crops Formula: " }
                    "{content::IN_FORMULA}"
                }
                p { "Where" }
                ul {
                    for term in content::IN_FORMULA_TERMS {
                        li { "{term}" }
                    }
                }
                p {
                    b { "Special case, Rice Formula: " }
                    "{content::IN_RICE_FORMULA}"
                }
                p { "Where" }
                ul {
                    for term in content::IN_RICE_FORMULA_TERMS {
                        li { "{term}" }
                    }
                }
                p { b { "Reference:" } }
                ul {
                    for url in content::IN_REFERENCES {
                        li { a { href: "{url}", target: "_blank", "{url}" } }
                    }
                }
            }
            Expander {
                label: "Daily Irrigation".to_string(),
                expanded: true,
                ChartContainer { id: DAILY_CHART_ID.to_string() }
            }
        }
    }
}
