//! Verbatim embedding of a pre-rendered HTML fragment.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct HtmlEmbedProps {
    /// The full fragment contents, captured at compile time.
    pub html: String,
    #[props(default = 900)]
    pub width: u32,
    #[props(default = 500)]
    pub height: u32,
}

/// Embeds an externally produced HTML fragment in an isolated frame of
/// fixed dimensions via `srcdoc`. The fragment is passed through as-is;
/// the sandbox keeps its scripts from reaching the host page, while
/// `allow-scripts` lets the fragment's own map rendering run.
#[component]
pub fn HtmlEmbed(props: HtmlEmbedProps) -> Element {
    rsx! {
        iframe {
            srcdoc: "{props.html}",
            width: "{props.width}",
            height: "{props.height}",
            style: "border: none;",
            "sandbox": "allow-scripts",
        }
    }
}
