//! The trained-artifact descriptor and its plot capability.

use crate::figure::{BandPoint, FigureSpec, ObservedPoint};
use paddy_db::models::ForecastPoint;
use paddy_db::{Error, Result};
use serde::Deserialize;

/// Model kind this repository knows how to plot.
const PROPHET: &str = "prophet";

/// Narrow capability the renderer depends on.
///
/// The concrete forecasting-model representation stays behind this seam:
/// the modelling view calls `forecast_figure` and nothing else.
pub trait Plottable {
    /// Render a forecast plot description from the artifact's series.
    fn forecast_figure(&self, points: &[ForecastPoint]) -> Result<FigureSpec>;
}

/// Opaque descriptor of one trained forecast model, deserialized from the
/// JSON the upstream training run exports alongside each series CSV.
///
/// Fields beyond `model` and `variable` are carried for display in the
/// figure subtitle; they are never interpreted.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ForecastArtifact {
    /// Model kind, e.g. "prophet". Anything else cannot plot here.
    pub model: String,
    /// Variable this artifact forecasts (e.g. "T_mean").
    pub variable: String,
    /// Aggregation interval the model was trained on.
    pub interval: String,
    /// ISO date the upstream training run finished.
    pub trained_at: String,
    /// Number of periods the exported series extends past the window.
    pub horizon_periods: u32,
    pub growth: String,
    pub n_changepoints: u32,
    pub seasonality_mode: String,
}

/// Deserialize an artifact descriptor, rejecting models without a plot
/// capability up front so the failure names the artifact rather than
/// surfacing later as an empty chart.
pub fn load_artifact(json: &str) -> Result<ForecastArtifact> {
    let artifact: ForecastArtifact = serde_json::from_str(json)
        .map_err(|e| Error::IncompatibleArtifact(format!("unreadable descriptor: {}", e)))?;
    if artifact.model != PROPHET {
        return Err(Error::IncompatibleArtifact(format!(
            "model kind '{}' exposes no plot capability",
            artifact.model
        )));
    }
    Ok(artifact)
}

impl ForecastArtifact {
    /// One-line provenance string shown under the figure title.
    pub fn provenance(&self) -> String {
        format!(
            "{} ({} growth, {} seasonality), trained {}",
            self.model, self.growth, self.seasonality_mode, self.trained_at
        )
    }
}

impl Plottable for ForecastArtifact {
    fn forecast_figure(&self, points: &[ForecastPoint]) -> Result<FigureSpec> {
        if points.is_empty() {
            return Err(Error::IncompatibleArtifact(format!(
                "artifact for '{}' has an empty forecast series",
                self.variable
            )));
        }

        let observed = points
            .iter()
            .filter_map(|p| {
                p.y.map(|y| ObservedPoint {
                    ds: p.ds.clone(),
                    y,
                })
            })
            .collect();
        let band = points
            .iter()
            .map(|p| BandPoint {
                ds: p.ds.clone(),
                yhat: p.yhat,
                yhat_lower: p.yhat_lower,
                yhat_upper: p.yhat_upper,
            })
            .collect();

        Ok(FigureSpec {
            title: format!("{} Monthly Prediction", self.variable),
            subtitle: self.provenance(),
            x_label: "Dates".to_string(),
            y_label: "Mean".to_string(),
            observed,
            band,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "model": "prophet",
        "variable": "T_max",
        "interval": "monthly",
        "trained_at": "2021-05-30",
        "horizon_periods": 12,
        "growth": "linear",
        "n_changepoints": 25,
        "seasonality_mode": "additive"
    }"#;

    fn point(ds: &str, y: Option<f64>) -> ForecastPoint {
        ForecastPoint {
            ds: ds.to_string(),
            y,
            yhat: 27.0,
            yhat_lower: 26.0,
            yhat_upper: 28.0,
        }
    }

    #[test]
    fn loads_prophet_artifact() {
        let artifact = load_artifact(VALID).unwrap();
        assert_eq!(artifact.variable, "T_max");
        assert_eq!(artifact.horizon_periods, 12);
    }

    #[test]
    fn rejects_unknown_model_kind() {
        let json = VALID.replace("prophet", "arima");
        let err = load_artifact(&json).unwrap_err();
        assert!(matches!(err, Error::IncompatibleArtifact(_)));
        assert!(err.to_string().contains("arima"), "Error names the kind: {}", err);
    }

    #[test]
    fn rejects_truncated_descriptor() {
        let err = load_artifact(r#"{"model": "prophet"}"#).unwrap_err();
        assert!(matches!(err, Error::IncompatibleArtifact(_)));
    }

    #[test]
    fn figure_carries_title_and_axis_labels() {
        let artifact = load_artifact(VALID).unwrap();
        let fig = artifact
            .forecast_figure(&[point("2021-04-01", Some(27.2)), point("2021-05-01", None)])
            .unwrap();
        assert_eq!(fig.title, "T_max Monthly Prediction");
        assert_eq!(fig.x_label, "Dates");
        assert_eq!(fig.y_label, "Mean");
    }

    #[test]
    fn figure_splits_observed_from_horizon() {
        let artifact = load_artifact(VALID).unwrap();
        let fig = artifact
            .forecast_figure(&[point("2021-04-01", Some(27.2)), point("2021-05-01", None)])
            .unwrap();
        assert_eq!(fig.observed.len(), 1, "Only in-window rows are observed");
        assert_eq!(fig.band.len(), 2, "Band spans window and horizon");
    }

    #[test]
    fn empty_series_is_incompatible() {
        let artifact = load_artifact(VALID).unwrap();
        let err = artifact.forecast_figure(&[]).unwrap_err();
        assert!(matches!(err, Error::IncompatibleArtifact(_)));
    }
}
