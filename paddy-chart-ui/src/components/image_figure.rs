//! Static image with an optional bold caption above it.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ImageFigureProps {
    /// Image path served from the app's assets directory.
    pub src: String,
    pub alt: String,
    #[props(default = 500)]
    pub width: u32,
    #[props(default = String::new())]
    pub caption: String,
}

/// A fixed raster image embedded as-is from the assets directory.
#[component]
pub fn ImageFigure(props: ImageFigureProps) -> Element {
    rsx! {
        div {
            style: "margin: 8px 0;",
            if !props.caption.is_empty() {
                p {
                    style: "margin: 0 0 4px 0;",
                    b { "{props.caption}" }
                }
            }
            img {
                src: "{props.src}",
                alt: "{props.alt}",
                width: "{props.width}",
            }
        }
    }
}
