use dioxus::prelude::*;

use crate::{app::regenerate_snapshot, domain::AppState, ui::components::toast::Toasts};

pub mod cargo_analysis;
pub mod dashboard;
pub mod optimization;
pub mod report;
pub mod settings;

pub use cargo_analysis::CargoAnalysisPage;
pub use dashboard::DashboardPage;
pub use optimization::OptimizationPage;
pub use report::ReportPage;
pub use settings::SettingsPage;

/// Shown by snapshot-backed pages when generation failed or the cache was cleared.
#[component]
pub fn SnapshotMissing() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Toasts>();

    rsx! {
        div { class: "rounded-xl border border-rose-500/40 bg-rose-500/10 p-6 text-rose-100",
            h2 { class: "text-lg font-semibold", "No fleet data available" }
            p { class: "mt-2 text-sm text-rose-200/80",
                "The fleet snapshot could not be generated for this session."
            }
            button {
                class: "mt-4 rounded-lg border border-rose-400/60 px-4 py-2 text-xs font-semibold uppercase tracking-wide hover:bg-rose-500/20",
                onclick: move |_| regenerate_snapshot(state, toasts),
                "Try again"
            }
        }
    }
}
