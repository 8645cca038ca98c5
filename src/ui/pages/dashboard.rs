use dioxus::prelude::*;

use crate::{
    app::regenerate_snapshot,
    domain::{fleet_overview, status_distribution, AppState, ShipStatus},
    ui::{
        components::{
            charts::{ChartDatum, PieChart},
            kpi_card::KpiCard,
            toast::Toasts,
            voyage_table::{voyage_rows, VoyageTable},
        },
        pages::SnapshotMissing,
        theme,
    },
    util::format_thousands,
};

const STATUS_CARDS: [(ShipStatus, &str); 3] = [
    (ShipStatus::Underway, "Sailing to discharge ports"),
    (ShipStatus::Waiting, "Anchored, waiting for berth"),
    (ShipStatus::Loading, "Cargo operations in progress"),
];

#[component]
pub fn DashboardPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Toasts>();

    let Some(cached) = state.with(|st| st.current_snapshot().cloned()) else {
        return rsx! { SnapshotMissing {} };
    };
    let snapshot = cached.snapshot;

    let overview = fleet_overview(&snapshot);
    let status_data: Vec<ChartDatum> = status_distribution(&snapshot.ships)
        .into_iter()
        .map(|(status, count)| ChartDatum::new(status.label(), count as f64, theme::status_color(status)))
        .collect();
    let rows = voyage_rows(&snapshot);
    let generated = snapshot
        .generated_at
        .format(time::macros::format_description!("[year]-[month]-[day] [hour]:[minute] UTC"))
        .unwrap_or_default();

    let on_refresh = move |_| regenerate_snapshot(state, toasts);

    rsx! {
        div { class: "space-y-8",
            div { class: "flex items-center justify-between",
                div {
                    h2 { class: "text-lg font-semibold text-slate-200", "Fleet status" }
                    p { class: "text-xs {theme::TEXT_MUTED}", "Snapshot generated {generated}" }
                }
                button { class: theme::BTN_SECONDARY, onclick: on_refresh, "🔄 Refresh data" }
            }

            section { class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-4",
                for (status, description) in STATUS_CARDS {
                    KpiCard {
                        title: status.label().to_string(),
                        value: format!("{} ships", overview.count(status)),
                        description: Some(description.to_string()),
                        icon: Some(status.emoji()),
                    }
                }
                KpiCard {
                    title: "Total cargo".to_string(),
                    value: format!("{}t", format_thousands(overview.total_cargo)),
                    description: Some(format!("Across {} voyages", snapshot.voyages.len())),
                    icon: Some("📦"),
                }
            }

            section { class: "grid gap-6 lg:grid-cols-[2fr,1fr]",
                div { class: "space-y-3",
                    h3 { class: "{theme::SECTION_TITLE}", "Voyages by ship" }
                    VoyageTable { rows }
                }
                PieChart { title: "Ship status".to_string(), data: status_data }
            }
        }
    }
}
