//! Sidebar radio control for the top-level section choice.

use crate::nav::Section;
use crate::state::AppState;
use dioxus::prelude::*;

/// Sidebar with the project heading and one radio per section.
/// Updates only the `section` signal; sub-selections keep their values.
#[component]
pub fn SectionSidebar() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.section)();

    rsx! {
        div {
            style: "width: 230px; min-height: 100vh; background: #a9dfbf; padding: 16px; box-sizing: border-box;",
            h1 {
                style: "margin-left: 8%; color: #1a5276; font-size: 20px;",
                "Omdena Philippines"
                br {}
                "Smart Farming"
            }
            div {
                style: "margin-top: 16px;",
                for section in Section::ALL {
                    label {
                        style: "display: block; margin: 6px 0; cursor: pointer;",
                        input {
                            r#type: "radio",
                            name: "section",
                            value: "{section.label()}",
                            checked: section == selected,
                            onchange: move |evt: Event<FormData>| {
                                if let Some(s) = Section::from_label(&evt.value()) {
                                    state.section.set(s);
                                }
                            },
                        }
                        " {section.label()}"
                    }
                }
            }
        }
    }
}
