//! Serializable chart description handed to the D3 forecast renderer.
//!
//! A `FigureSpec` is the entire contract between the `Plottable`
//! capability and `forecast-chart.js`: observed scatter points, a
//! predicted line with its uncertainty band, and the fixed labels.

use serde::Serialize;

/// An observed (in-window) data point, drawn as a scatter marker.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ObservedPoint {
    pub ds: String,
    pub y: f64,
}

/// A predicted point with its uncertainty interval, drawn as the
/// forecast line and shaded band.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BandPoint {
    pub ds: String,
    pub yhat: f64,
    pub yhat_lower: f64,
    pub yhat_upper: f64,
}

/// Complete description of one forecast figure.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FigureSpec {
    pub title: String,
    /// Provenance line (model kind, settings, training date).
    pub subtitle: String,
    pub x_label: String,
    pub y_label: String,
    pub observed: Vec<ObservedPoint>,
    pub band: Vec<BandPoint>,
}

impl FigureSpec {
    /// JSON payload for the JS bridge.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn figure_serializes_with_both_series() {
        let fig = FigureSpec {
            title: "T_mean Monthly Prediction".to_string(),
            subtitle: "prophet (linear growth, additive seasonality), trained 2021-05-30"
                .to_string(),
            x_label: "Dates".to_string(),
            y_label: "Mean".to_string(),
            observed: vec![ObservedPoint {
                ds: "2021-04-01".to_string(),
                y: 27.2,
            }],
            band: vec![BandPoint {
                ds: "2021-04-01".to_string(),
                yhat: 27.0,
                yhat_lower: 26.0,
                yhat_upper: 28.0,
            }],
        };
        let json = fig.to_json();
        assert!(json.contains("\"observed\""));
        assert!(json.contains("\"band\""));
        assert!(json.contains("T_mean Monthly Prediction"));
    }
}
