//! Collapsible panel grouping related prose and charts.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ExpanderProps {
    /// Panel header shown next to the disclosure arrow.
    pub label: String,
    /// Whether the panel starts open.
    #[props(default = false)]
    pub expanded: bool,
    pub children: Element,
}

/// A `<details>`-based expander panel. The open/closed flag lives in the
/// DOM element itself, so toggling never re-runs the content render.
#[component]
pub fn Expander(props: ExpanderProps) -> Element {
    rsx! {
        details {
            open: props.expanded,
            style: "margin: 10px 0; border: 1px solid #ddd; border-radius: 4px; padding: 8px 12px; background: #fff;",
            summary {
                style: "cursor: pointer; font-weight: bold; padding: 4px 0;",
                "{props.label}"
            }
            div {
                style: "padding-top: 8px;",
                {props.children}
            }
        }
    }
}
