//! Trained forecast artifact handling for the modelling branch.
//!
//! The upstream Prophet training run exports, per forecast variable, a JSON
//! artifact descriptor (`models/fb_prophet_monthly_<var>.json`) and a CSV
//! forecast series (`data/fb_prophet_monthly_<var>.csv`). This crate loads
//! the descriptor read-only and turns it plus its series into a
//! [`FigureSpec`] through the narrow [`Plottable`] capability, so the
//! renderer never touches the concrete model representation.
//!
//! Artifacts are opaque: nothing here re-fits, evaluates, or mutates a
//! model. An artifact that cannot produce a figure (unknown model kind,
//! empty series) fails with `Error::IncompatibleArtifact`, which aborts
//! the forecast branch only.

pub mod artifact;
pub mod figure;

pub use artifact::{load_artifact, ForecastArtifact, Plottable};
pub use figure::{BandPoint, FigureSpec, ObservedPoint};

use paddy_db::models::ForecastPoint;
use paddy_db::{Database, Result};

/// One forecast variable's embedded artifact pair, in render order.
///
/// The variable list itself is configuration owned by the application;
/// this crate renders whatever list it is handed, in the order given.
#[derive(Debug, Clone, Copy)]
pub struct ForecastEntry {
    /// Variable name as used in artifact file names and chart titles.
    pub variable: &'static str,
    /// Contents of the artifact descriptor JSON.
    pub artifact_json: &'static str,
    /// Contents of the accompanying forecast series CSV.
    pub series_csv: &'static str,
}

/// Build one forecast figure per entry, in declared order.
///
/// Each entry's artifact is loaded fresh, its series is parsed through the
/// strict CSV loader, and the artifact's plot capability produces the
/// figure. The first failing entry aborts the whole batch: the forecast
/// branch renders completely or not at all.
pub fn forecast_figures(entries: &[ForecastEntry]) -> Result<Vec<FigureSpec>> {
    let mut figures = Vec::with_capacity(entries.len());
    for entry in entries {
        let artifact = load_artifact(entry.artifact_json)?;
        let points = load_series(entry.variable, entry.series_csv)?;
        figures.push(artifact.forecast_figure(&points)?);
    }
    log::info!("forecast: built {} figures", figures.len());
    Ok(figures)
}

/// Parse one forecast series CSV through the database loader, reusing its
/// strict schema validation, and read the points back in date order.
fn load_series(variable: &str, series_csv: &str) -> Result<Vec<ForecastPoint>> {
    let db = Database::new()?;
    db.load_forecast_points(variable, series_csv)?;
    db.query_forecast(variable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use paddy_db::Error;

    const T_MEAN_ARTIFACT: &str = r#"{
        "model": "prophet",
        "variable": "T_mean",
        "interval": "monthly",
        "trained_at": "2021-05-30",
        "horizon_periods": 12,
        "growth": "linear",
        "n_changepoints": 25,
        "seasonality_mode": "additive"
    }"#;

    const T_MEAN_SERIES: &str = "ds,y,yhat,yhat_lower,yhat_upper\n\
        2021-04-01,27.8,27.5,26.4,28.6\n\
        2021-05-01,28.9,28.6,27.5,29.7\n\
        2021-06-01,,27.9,26.7,29.0\n";

    fn entry_for(variable: &'static str, artifact_json: &'static str) -> ForecastEntry {
        ForecastEntry {
            variable,
            artifact_json,
            series_csv: T_MEAN_SERIES,
        }
    }

    #[test]
    fn one_figure_per_entry_in_declared_order() {
        const T_MIN_ARTIFACT: &str = r#"{"model":"prophet","variable":"T_min","interval":"monthly",
            "trained_at":"2021-05-30","horizon_periods":12,"growth":"linear",
            "n_changepoints":25,"seasonality_mode":"additive"}"#;

        let entries = [
            entry_for("T_mean", T_MEAN_ARTIFACT),
            entry_for("T_min", T_MIN_ARTIFACT),
        ];
        let figures = forecast_figures(&entries).unwrap();
        assert_eq!(figures.len(), 2, "Exactly one figure per configured variable");
        assert_eq!(figures[0].title, "T_mean Monthly Prediction");
        assert_eq!(figures[1].title, "T_min Monthly Prediction");
    }

    #[test]
    fn incompatible_artifact_aborts_the_batch() {
        const GBM_ARTIFACT: &str =
            r#"{"model":"gradient_boosting","variable":"T_mean","interval":"monthly",
            "trained_at":"2021-05-30","horizon_periods":12,"growth":"linear",
            "n_changepoints":0,"seasonality_mode":"additive"}"#;

        let entries = [entry_for("T_mean", GBM_ARTIFACT)];
        let err = forecast_figures(&entries).unwrap_err();
        assert!(
            matches!(err, Error::IncompatibleArtifact(_)),
            "Non-prophet artifacts cannot plot: {}",
            err
        );
    }

    #[test]
    fn malformed_series_aborts_the_batch() {
        let entries = [ForecastEntry {
            variable: "T_mean",
            artifact_json: T_MEAN_ARTIFACT,
            series_csv: "ds,yhat\n2021-04-01,27.5\n",
        }];
        let err = forecast_figures(&entries).unwrap_err();
        assert!(matches!(err, Error::MalformedRow { .. }));
    }
}
