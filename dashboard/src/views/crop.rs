//! Dataset → Crop Water Need: INRice and Kc charts.

use crate::content;
use crate::views::{points_json, single_series};
use dioxus::prelude::*;
use paddy_chart_ui::components::{ChartContainer, ErrorDisplay, Expander};
use paddy_chart_ui::js_bridge;
use paddy_chart_ui::state::AppState;
use paddy_db::{Database, Interval};

const DAILY_IN_RICE_ID: &str = "crop-daily-inrice";
const DAILY_KC_ID: &str = "crop-daily-kc";

fn period_chart_id(interval: Interval, series: &str) -> String {
    format!("crop-{}-{}", interval.as_str(), series.to_lowercase())
}

fn render_charts(db: &Database) -> paddy_db::Result<()> {
    // Daily: the wide table feeds two single-line charts side by side.
    let daily = db.query_crop_daily()?;
    let in_rice: Vec<(String, f64)> = daily.iter().map(|p| (p.time.clone(), p.in_rice)).collect();
    let kc: Vec<(String, f64)> = daily.iter().map(|p| (p.time.clone(), p.kc)).collect();
    js_bridge::render_series_chart(
        DAILY_IN_RICE_ID,
        &points_json(&single_series(&in_rice, "INRice")),
        &js_bridge::series_config("ETcrop Daily", "time", "time", "INRice", "variable", true),
    );
    js_bridge::render_series_chart(
        DAILY_KC_ID,
        &points_json(&single_series(&kc, "Kc")),
        &js_bridge::series_config("Kc Daily", "time", "time", "Kc", "variable", true),
    );

    for series in ["INRice", "Kc"] {
        for (interval, interval_title) in
            [(Interval::Weekly, "Weekly"), (Interval::Monthly, "Monthly")]
        {
            let points = db.query_crop_period(interval, series)?;
            js_bridge::render_series_chart(
                &period_chart_id(interval, series),
                &points_json(&points),
                &js_bridge::series_config(
                    &format!("{} {}", series, interval_title),
                    "period",
                    interval.period_label(),
                    series,
                    "year",
                    false,
                ),
            );
        }
    }
    Ok(())
}

#[component]
pub fn CropView() -> Element {
    let state = use_context::<AppState>();
    let mut error = use_signal(|| None::<String>);

    use_effect(move || {
        let db = match &*state.db.read() {
            Some(db) => db.clone(),
            None => return,
        };
        js_bridge::init_charts();
        if let Err(e) = render_charts(&db) {
            log::error!("crop chart render failed: {}", e);
            error.set(Some(e.to_string()));
        }
    });

    rsx! {
        if let Some(msg) = error() {
            ErrorDisplay { message: msg }
        } else {
            Expander {
                label: "About ETcrop".to_string(),
                p { "{content::ETCROP_ABOUT}" }
                p { "{content::ETCROP_COEFFICIENT}" }
                p {
                    b { "Formula: " }
                    "{content::ETCROP_FORMULA}"
                }
                p { "Where" }
                ul {
                    for term in content::ETCROP_FORMULA_TERMS {
                        li { "{term}" }
                    }
                }
                p { b { "References:" } }
                ul {
                    for url in content::ETCROP_REFERENCES {
                        li { a { href: "{url}", target: "_blank", "{url}" } }
                    }
                }
            }
            Expander {
                label: "Daily".to_string(),
                expanded: true,
                div {
                    style: "display: flex; gap: 16px; flex-wrap: wrap;",
                    div {
                        style: "flex: 1; min-width: 480px;",
                        ChartContainer { id: DAILY_IN_RICE_ID.to_string() }
                    }
                    div {
                        style: "flex: 1; min-width: 480px;",
                        ChartContainer { id: DAILY_KC_ID.to_string() }
                    }
                }
            }
            Expander {
                label: "Weekly".to_string(),
                expanded: true,
                ChartContainer { id: period_chart_id(Interval::Weekly, "INRice") }
                ChartContainer { id: period_chart_id(Interval::Weekly, "Kc") }
            }
            Expander {
                label: "Monthly".to_string(),
                expanded: true,
                ChartContainer { id: period_chart_id(Interval::Monthly, "INRice") }
                ChartContainer { id: period_chart_id(Interval::Monthly, "Kc") }
            }
        }
    }
}
