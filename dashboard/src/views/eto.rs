//! Dataset → ETo: reference evapotranspiration charts.
//!
//! One daily chart with a line per variable, then one weekly and one
//! monthly chart per temperature variable with a line per year.

use crate::config::{variable_slug, ETO_CHART_VARIABLES};
use crate::content;
use crate::views::points_json;
use dioxus::prelude::*;
use paddy_chart_ui::components::{ChartContainer, ErrorDisplay, Expander, ImageFigure};
use paddy_chart_ui::js_bridge;
use paddy_chart_ui::state::AppState;
use paddy_db::{Database, Interval};

const DAILY_CHART_ID: &str = "eto-daily-chart";

fn period_chart_id(interval: Interval, variable: &str) -> String {
    format!("eto-{}-{}", interval.as_str(), variable_slug(variable))
}

/// Display title for a weekly/monthly chart. The published dashboard
/// titles the mean series "T_Mean"; the other series keep their data
/// casing.
fn chart_title(variable: &str, interval_title: &str) -> String {
    let display = match variable {
        "T_mean" => "T_Mean",
        other => other,
    };
    format!("{} {}", display, interval_title)
}

/// Query and render every ETo chart for the current database state.
fn render_charts(db: &Database) -> paddy_db::Result<()> {
    let daily = db.query_eto_daily()?;
    js_bridge::render_series_chart(
        DAILY_CHART_ID,
        &points_json(&daily),
        &js_bridge::series_config("ETo Daily Variables", "time", "time", "value", "variable", true),
    );

    for variable in ETO_CHART_VARIABLES {
        for (interval, interval_title) in
            [(Interval::Weekly, "Weekly"), (Interval::Monthly, "Monthly")]
        {
            let points = db.query_eto_period(interval, variable)?;
            js_bridge::render_series_chart(
                &period_chart_id(interval, variable),
                &points_json(&points),
                &js_bridge::series_config(
                    &chart_title(variable, interval_title),
                    "period",
                    interval.period_label(),
                    "value",
                    "year",
                    false,
                ),
            );
        }
    }
    Ok(())
}

#[component]
pub fn EtoView() -> Element {
    let state = use_context::<AppState>();
    let mut error = use_signal(|| None::<String>);

    use_effect(move || {
        let db = match &*state.db.read() {
            Some(db) => db.clone(),
            None => return,
        };
        js_bridge::init_charts();
        if let Err(e) = render_charts(&db) {
            log::error!("ETo chart render failed: {}", e);
            error.set(Some(e.to_string()));
        }
    });

    rsx! {
        if let Some(msg) = error() {
            ErrorDisplay { message: msg }
        } else {
            Expander {
                label: "About ETo".to_string(),
                p {
                    b { "ETo " }
                    "{content::ETO_ABOUT}"
                }
                p {
                    b { "Formula: " }
                    "{content::ETO_FORMULA}"
                }
                div {
                    style: "display: flex; gap: 24px;",
                    div {
                        p { b { "Getting P Values:" } }
                        ul {
                            for item in content::ETO_P_VALUES {
                                li { "{item}" }
                            }
                        }
                        ImageFigure {
                            src: "assets/img/eto_mean_chart.png".to_string(),
                            alt: "Mean daily percentage of annual daytime hours by latitude".to_string(),
                            width: 500,
                        }
                    }
                    div {
                        ImageFigure {
                            src: "assets/img/eto_t_mean_computation.png".to_string(),
                            alt: "T mean computation".to_string(),
                            width: 300,
                            caption: "T Mean Computation:".to_string(),
                        }
                        p { b { "References:" } }
                        ul {
                            for url in content::ETO_REFERENCES {
                                li { a { href: "{url}", target: "_blank", "{url}" } }
                            }
                        }
                    }
                }
            }
            Expander {
                label: "Daily".to_string(),
                expanded: true,
                ChartContainer { id: DAILY_CHART_ID.to_string() }
            }
            Expander {
                label: "Weekly".to_string(),
                expanded: true,
                for variable in ETO_CHART_VARIABLES {
                    ChartContainer { id: period_chart_id(Interval::Weekly, variable) }
                }
            }
            Expander {
                label: "Monthly".to_string(),
                expanded: true,
                for variable in ETO_CHART_VARIABLES {
                    ChartContainer { id: period_chart_id(Interval::Monthly, variable) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_chart_title_uses_display_casing() {
        assert_eq!(chart_title("T_mean", "Weekly"), "T_Mean Weekly");
        assert_eq!(chart_title("T_mean", "Monthly"), "T_Mean Monthly");
    }

    #[test]
    fn other_chart_titles_keep_data_casing() {
        assert_eq!(chart_title("T_min", "Weekly"), "T_min Weekly");
        assert_eq!(chart_title("T_max", "Monthly"), "T_max Monthly");
    }
}
