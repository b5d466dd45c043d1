//! Reusable Dioxus RSX components for the dashboard.

mod chart_container;
mod error_display;
mod expander;
mod html_embed;
mod image_figure;
mod interval_selector;
mod loading_spinner;
mod section_sidebar;
mod topic_selector;

pub use chart_container::ChartContainer;
pub use error_display::ErrorDisplay;
pub use expander::Expander;
pub use html_embed::HtmlEmbed;
pub use image_figure::ImageFigure;
pub use interval_selector::IntervalSelector;
pub use loading_spinner::LoadingSpinner;
pub use section_sidebar::SectionSidebar;
pub use topic_selector::TopicSelector;
