//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`. Each sub-selection lives in its own signal
//! so no widget state leaks between sections; the database signal holds the
//! loaded artifact tables shared by every chart.

use crate::nav::{DatasetTopic, ForecastInterval, NavState, Section};
use dioxus::prelude::*;
use paddy_db::Database;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Database instance (None until artifact loading finishes)
    pub db: Signal<Option<Database>>,
    /// Whether artifact loading is still in progress
    pub loading: Signal<bool>,
    /// Error message if a load or render failed
    pub error_msg: Signal<Option<String>>,
    /// Active sidebar section
    pub section: Signal<Section>,
    /// Dropdown selection under Dataset
    pub dataset_topic: Signal<DatasetTopic>,
    /// Dropdown selection under Modelling
    pub interval: Signal<ForecastInterval>,
}

impl AppState {
    /// Create a new AppState with first-load defaults.
    pub fn new() -> Self {
        Self {
            db: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            section: Signal::new(Section::default()),
            dataset_topic: Signal::new(DatasetTopic::default()),
            interval: Signal::new(ForecastInterval::default()),
        }
    }

    /// Snapshot the current selection signals as a plain [`NavState`].
    pub fn nav(&self) -> NavState {
        NavState {
            section: (self.section)(),
            dataset_topic: (self.dataset_topic)(),
            interval: (self.interval)(),
        }
    }
}
