//! Dropdown selector for the Modelling prediction interval.

use crate::nav::ForecastInterval;
use crate::state::AppState;
use dioxus::prelude::*;

/// Prediction interval dropdown for the Modelling section.
#[component]
pub fn IntervalSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.interval)();

    let on_change = move |evt: Event<FormData>| {
        if let Some(interval) = ForecastInterval::from_label(&evt.value()) {
            state.interval.set(interval);
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "interval-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Prediction Interval: "
            }
            select {
                id: "interval-select",
                onchange: on_change,
                for interval in ForecastInterval::ALL {
                    option {
                        value: "{interval.label()}",
                        selected: interval == selected,
                        "{interval.label()}"
                    }
                }
            }
        }
    }
}
