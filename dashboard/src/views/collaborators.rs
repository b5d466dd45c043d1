//! Collaborators: project logo and the linked roster.

use crate::content;
use dioxus::prelude::*;
use paddy_chart_ui::components::ImageFigure;

#[component]
pub fn CollaboratorsView() -> Element {
    let (manager, manager_url) = content::PROJECT_MANAGER;

    rsx! {
        div {
            style: "display: flex; gap: 40px;",
            div {
                ImageFigure {
                    src: "assets/img/logo.png".to_string(),
                    alt: "Omdena Philippines logo".to_string(),
                    width: 250,
                }
                p {
                    style: "text-align: center;",
                    a {
                        href: "{content::PROJECT_LINK}",
                        target: "_blank",
                        "Omdena Philippines"
                    }
                }
            }
            div {
                p {
                    b { "Project Manager: " }
                    a { href: "{manager_url}", target: "_blank", "{manager}" }
                }
                p { b { "Collaborators:" } }
                ul {
                    for (name, url) in content::COLLABORATORS {
                        li {
                            if url.is_empty() {
                                "{name}"
                            } else {
                                a { href: "{url}", target: "_blank", "{name}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
