//! Embedded artifact inventory and forecast configuration.
//!
//! All artifact paths are fixed: `build.rs` copies them from the workspace
//! `fixtures/` directory into `OUT_DIR` (failing the build if any is
//! missing) and `include_str!` embeds them here. Nothing selects alternate
//! sources at runtime.

use paddy_forecast::ForecastEntry;

// ───────────────────── Tabular artifacts ─────────────────────

pub const ETO_DAILY_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/final_daily_melt_eto.csv"));
pub const ETO_WEEKLY_CSV: &str =
    include_str!(concat!(env!("OUT_DIR"), "/final_weekly_melt_eto.csv"));
pub const ETO_MONTHLY_CSV: &str =
    include_str!(concat!(env!("OUT_DIR"), "/final_monthly_melt_eto.csv"));
pub const CROP_DAILY_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/ml_final_df_daily.csv"));
pub const IN_RICE_WEEKLY_CSV: &str =
    include_str!(concat!(env!("OUT_DIR"), "/final_weekly_in_rice.csv"));
pub const KC_WEEKLY_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/final_weekly_kc.csv"));
pub const IN_RICE_MONTHLY_CSV: &str =
    include_str!(concat!(env!("OUT_DIR"), "/final_monthly_in_rice.csv"));
pub const KC_MONTHLY_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/final_monthly_kc.csv"));
pub const IRRIGATION_DAILY_CSV: &str =
    include_str!(concat!(env!("OUT_DIR"), "/final_daily_irrigation.csv"));

/// Pre-rendered Malolos heatmap fragment, embedded verbatim.
pub const HEATMAP_HTML: &str = include_str!(concat!(env!("OUT_DIR"), "/map_malolos.html"));

// ───────────────────── Forecast configuration ─────────────────────

/// The variables the upstream training run exports artifacts for, in
/// render order. This list is configuration: extending the trained set
/// means adding an entry here (and its fixture pair).
pub const FORECAST_VARIABLES: [&str; 3] = ["T_mean", "T_min", "T_max"];

/// The embedded artifact pair for each forecast variable, in
/// [`FORECAST_VARIABLES`] order.
pub fn forecast_entries() -> [ForecastEntry; 3] {
    [
        ForecastEntry {
            variable: "T_mean",
            artifact_json: include_str!(concat!(env!("OUT_DIR"), "/fb_prophet_monthly_T_mean.json")),
            series_csv: include_str!(concat!(env!("OUT_DIR"), "/fb_prophet_monthly_T_mean.csv")),
        },
        ForecastEntry {
            variable: "T_min",
            artifact_json: include_str!(concat!(env!("OUT_DIR"), "/fb_prophet_monthly_T_min.json")),
            series_csv: include_str!(concat!(env!("OUT_DIR"), "/fb_prophet_monthly_T_min.csv")),
        },
        ForecastEntry {
            variable: "T_max",
            artifact_json: include_str!(concat!(env!("OUT_DIR"), "/fb_prophet_monthly_T_max.json")),
            series_csv: include_str!(concat!(env!("OUT_DIR"), "/fb_prophet_monthly_T_max.csv")),
        },
    ]
}

/// Weekly/monthly ETo chart order: one chart per variable.
pub const ETO_CHART_VARIABLES: [&str; 3] = ["T_mean", "T_min", "T_max"];

/// DOM-safe container id fragment for a variable name.
pub fn variable_slug(variable: &str) -> String {
    variable.to_lowercase().replace('_', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_entries_follow_declared_variable_order() {
        let entries = forecast_entries();
        let order: Vec<&str> = entries.iter().map(|e| e.variable).collect();
        assert_eq!(order, FORECAST_VARIABLES.to_vec());
    }

    #[test]
    fn embedded_artifacts_are_not_empty() {
        assert!(!ETO_DAILY_CSV.is_empty());
        assert!(!HEATMAP_HTML.is_empty());
        for entry in forecast_entries() {
            assert!(!entry.artifact_json.is_empty(), "{} artifact", entry.variable);
            assert!(!entry.series_csv.is_empty(), "{} series", entry.variable);
        }
    }

    #[test]
    fn slugs_are_dom_safe() {
        assert_eq!(variable_slug("T_mean"), "t-mean");
    }
}
