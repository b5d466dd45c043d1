//! Query result model structs for the dashboard series.
//!
//! All structs derive `Serialize` so they can be passed to D3.js as JSON
//! from the Dioxus WASM frontend.

use serde::{Deserialize, Serialize};

/// A single daily observation in melt format: one named variable per row.
///
/// Used for the daily ETo and daily irrigation charts, which draw one
/// line per `variable` over a calendar-date x-axis.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VariablePoint {
    /// Calendar date in ISO format (YYYY-MM-DD).
    pub time: String,
    /// Series name (e.g., "T_mean", "ETo", "Pe").
    pub variable: String,
    pub value: f64,
}

/// A single weekly or monthly observation, grouped by year.
///
/// The `period` field is the week number (1-53) or month number (1-12)
/// depending on which table the point came from. Charts draw one line
/// per `year` over the period x-axis.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct YearPoint {
    pub period: i64,
    pub year: i64,
    pub value: f64,
}

/// One row of the wide-format daily crop table: irrigation need and
/// crop coefficient side by side for the same date.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CropDailyPoint {
    /// Calendar date in ISO format (YYYY-MM-DD).
    pub time: String,
    /// Daily rice irrigation need (mm/day).
    pub in_rice: f64,
    /// Crop coefficient (dimensionless).
    pub kc: f64,
}

/// One point of a forecast series accompanying a trained artifact.
///
/// `y` is the observed value and is absent for horizon rows beyond the
/// training window; `yhat` with its lower/upper bounds is the model output.
/// Field names follow the upstream export format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastPoint {
    /// Forecast date stamp in ISO format (YYYY-MM-DD).
    pub ds: String,
    /// Observed value, if the date falls inside the training window.
    pub y: Option<f64>,
    /// Predicted value.
    pub yhat: f64,
    /// Lower bound of the uncertainty interval.
    pub yhat_lower: f64,
    /// Upper bound of the uncertainty interval.
    pub yhat_upper: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variable_point_serializes_to_json() {
        let p = VariablePoint {
            time: "2020-01-01".to_string(),
            variable: "T_mean".to_string(),
            value: 26.4,
        };
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"variable\":\"T_mean\""));
        assert!(json.contains("\"time\":\"2020-01-01\""));
    }

    #[test]
    fn forecast_point_omits_y_cleanly() {
        let p = ForecastPoint {
            ds: "2021-07-01".to_string(),
            y: None,
            yhat: 27.1,
            yhat_lower: 25.9,
            yhat_upper: 28.3,
        };
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"y\":null"), "Horizon rows carry null y: {}", json);
    }
}
