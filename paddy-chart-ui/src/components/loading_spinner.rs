//! Loading indicator shown while artifacts load on mount.

use dioxus::prelude::*;

/// Simple centered loading message.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; min-height: 200px; color: #666;",
            "Loading data..."
        }
    }
}
