//! About the Project: background prose and the Malolos heatmap embed.

use crate::config;
use crate::content;
use dioxus::prelude::*;
use paddy_chart_ui::components::HtmlEmbed;

#[component]
pub fn AboutView() -> Element {
    rsx! {
        h3 { "{content::PROJECT_TITLE}" }

        h4 { "The Background" }
        p { "{content::BACKGROUND}" }

        h4 { "The Problem" }
        p { "{content::PROBLEM}" }

        HtmlEmbed {
            html: config::HEATMAP_HTML.to_string(),
            width: 900,
            height: 500,
        }
    }
}
