//! Dataset section: topic dropdown plus the selected topic's panel.

use crate::content;
use crate::views::{crop::CropView, eto::EtoView, irrigation::IrrigationView};
use dioxus::prelude::*;
use paddy_chart_ui::components::TopicSelector;
use paddy_chart_ui::nav::DatasetTopic;
use paddy_chart_ui::state::AppState;

#[component]
pub fn DatasetView() -> Element {
    let state = use_context::<AppState>();
    let topic_view = match (state.dataset_topic)() {
        DatasetTopic::Introduction => rsx! { IntroductionView {} },
        DatasetTopic::Eto => rsx! { EtoView {} },
        DatasetTopic::CropWaterNeed => rsx! { CropView {} },
        DatasetTopic::IrrigationWaterNeed => rsx! { IrrigationView {} },
    };

    rsx! {
        h4 { "Dataset" }
        TopicSelector {}
        {topic_view}
    }
}

#[component]
fn IntroductionView() -> Element {
    rsx! {
        p {
            b { "Evapotranspiration (ET) " }
            "{content::ET_INTRO}"
        }
        p { "The following nomenclature is often used for reference ET data:" }
        ul {
            for item in content::ET_NOMENCLATURE {
                li { "{item}" }
            }
        }
        p { "{content::ET_COEFFICIENT_NOTE}" }
    }
}
