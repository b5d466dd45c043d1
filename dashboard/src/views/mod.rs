//! One view module per content branch.

mod about;
mod collaborators;
mod crop;
mod dataset;
mod eto;
mod irrigation;
mod modelling;

pub use about::AboutView;
pub use collaborators::CollaboratorsView;
pub use dataset::DatasetView;
pub use modelling::ModellingView;

use paddy_db::models::VariablePoint;

/// Serialize chart points for the JS bridge. Serialization of these plain
/// structs cannot fail in practice; an empty array keeps the bridge quiet
/// if it ever does.
pub(crate) fn points_json<T: serde::Serialize>(points: &[T]) -> String {
    serde_json::to_string(points).unwrap_or_else(|_| "[]".to_string())
}

/// Wrap single-series rows as grouped points so `renderSeriesChart` can
/// draw them with a one-entry legend.
pub(crate) fn single_series(points: &[(String, f64)], series: &str) -> Vec<VariablePoint> {
    points
        .iter()
        .map(|(time, value)| VariablePoint {
            time: time.clone(),
            variable: series.to_string(),
            value: *value,
        })
        .collect()
}
