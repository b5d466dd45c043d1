//! Dropdown selector for the Dataset sub-topic.

use crate::nav::DatasetTopic;
use crate::state::AppState;
use dioxus::prelude::*;

/// Dataset topic dropdown.
/// Reads the current topic from AppState and updates it on change.
#[component]
pub fn TopicSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.dataset_topic)();

    let on_change = move |evt: Event<FormData>| {
        if let Some(topic) = DatasetTopic::from_label(&evt.value()) {
            state.dataset_topic.set(topic);
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            select {
                id: "dataset-topic-select",
                onchange: on_change,
                for topic in DatasetTopic::ALL {
                    option {
                        value: "{topic.label()}",
                        selected: topic == selected,
                        "{topic.label()}"
                    }
                }
            }
        }
    }
}
