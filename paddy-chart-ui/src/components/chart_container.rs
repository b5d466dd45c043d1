//! Target div a D3 chart renders into.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id the js_bridge polling loop looks up before rendering.
    pub id: String,
}

/// An empty, id'd div claimed by a D3 render call. The chart scripts
/// clear and redraw its contents on every render, so the div itself
/// carries no state; the fixed min-height keeps the expander from
/// collapsing while the render poll waits for D3.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    rsx! {
        div {
            id: "{props.id}",
            style: "min-height: 400px; width: 100%;",
        }
    }
}
