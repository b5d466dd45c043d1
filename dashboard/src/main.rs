//! Rice irrigation advisory dashboard.
//!
//! Single-page Dioxus app for the Malolos smart-farming project: static
//! background prose, pre-computed CSV series rendered as D3.js line
//! charts, a pre-rendered heatmap embedded verbatim, and pre-trained
//! forecast artifacts plotted on demand.
//!
//! Data flow:
//! 1. `build.rs` copies the fixture artifacts into `OUT_DIR`; a missing
//!    artifact fails the build (no fallback content).
//! 2. `include_str!` embeds the artifacts into the WASM binary (`config`).
//! 3. On mount, the CSVs are loaded into an in-memory SQLite database.
//! 4. The sidebar/dropdown selection resolves to a content branch
//!    (`NavState::resolve`) and the branch view queries and renders.
//!
//! Every render re-derives its output from the embedded artifacts; no
//! state is carried between renders beyond the selection signals.

mod config;
mod content;
mod views;

use dioxus::prelude::*;
use paddy_chart_ui::components::{ErrorDisplay, LoadingSpinner, SectionSidebar};
use paddy_chart_ui::nav::Branch;
use paddy_chart_ui::state::AppState;
use paddy_db::{Database, Interval};

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("dashboard-root"))
        .launch(App);
}

/// Load every embedded tabular artifact into a fresh database.
fn load_artifacts() -> anyhow::Result<Database> {
    let db = Database::new()?;
    db.load_eto_daily(config::ETO_DAILY_CSV)?;
    db.load_eto_period(Interval::Weekly, config::ETO_WEEKLY_CSV)?;
    db.load_eto_period(Interval::Monthly, config::ETO_MONTHLY_CSV)?;
    db.load_crop_daily(config::CROP_DAILY_CSV)?;
    db.load_crop_period(Interval::Weekly, "INRice", config::IN_RICE_WEEKLY_CSV)?;
    db.load_crop_period(Interval::Weekly, "Kc", config::KC_WEEKLY_CSV)?;
    db.load_crop_period(Interval::Monthly, "INRice", config::IN_RICE_MONTHLY_CSV)?;
    db.load_crop_period(Interval::Monthly, "Kc", config::KC_MONTHLY_CSV)?;
    db.load_irrigation_daily(config::IRRIGATION_DAILY_CSV)?;
    Ok(db)
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load artifact tables once on mount. A failure here is fatal to
    // every tabular branch, so it lands in the shared error signal.
    use_effect(move || {
        match load_artifacts() {
            Ok(db) => {
                web_sys::console::log_1(&"dashboard: artifact tables loaded".into());
                state.db.set(Some(db));
            }
            Err(e) => {
                log::error!("artifact load failed: {}", e);
                state.error_msg.set(Some(format!("Failed to load data: {}", e)));
            }
        }
        state.loading.set(false);
    });

    rsx! {
        div {
            style: "display: flex; font-family: sans-serif;",
            SectionSidebar {}
            main {
                style: "flex: 1; padding: 20px 28px; box-sizing: border-box;",
                if (state.loading)() {
                    LoadingSpinner {}
                } else if let Some(msg) = (state.error_msg)() {
                    ErrorDisplay { message: msg }
                } else {
                    ContentView {}
                }
            }
        }
    }
}

/// Dispatch the resolved branch to its view. Each view re-renders fresh
/// when the selection signals change; nothing is cached across branches.
#[component]
fn ContentView() -> Element {
    let state = use_context::<AppState>();

    match state.nav().resolve() {
        Branch::About => rsx! { views::AboutView {} },
        Branch::DatasetIntroduction
        | Branch::DatasetEto
        | Branch::DatasetCropWaterNeed
        | Branch::DatasetIrrigationWaterNeed => rsx! { views::DatasetView {} },
        Branch::Modelling(_) => rsx! { views::ModellingView {} },
        Branch::Collaborators => rsx! { views::CollaboratorsView {} },
    }
}
