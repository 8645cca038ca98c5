use dioxus::prelude::*;

use crate::{
    domain::{commodity_totals, pattern_frequency, AppState},
    ui::{
        components::{
            cargo_table::{CargoRow, CargoTable},
            charts::{BarChart, ChartDatum, PieChart},
        },
        pages::SnapshotMissing,
        theme,
    },
};

#[component]
pub fn CargoAnalysisPage() -> Element {
    let state = use_context::<Signal<AppState>>();

    let Some(cached) = state.with(|st| st.current_snapshot().cloned()) else {
        return rsx! { SnapshotMissing {} };
    };
    let voyages = cached.snapshot.voyages;

    let pattern_bars: Vec<ChartDatum> = pattern_frequency(&voyages)
        .into_iter()
        .enumerate()
        .map(|(idx, (pattern, count))| ChartDatum::new(pattern, count as f64, theme::pattern_color(idx)))
        .collect();

    let commodity_slices: Vec<ChartDatum> = commodity_totals(&voyages)
        .iter()
        .map(|(commodity, tons)| {
            ChartDatum::new(commodity.label(), tons as f64, theme::commodity_color(commodity))
        })
        .collect();

    let rows: Vec<CargoRow> = voyages.iter().map(CargoRow::from).collect();

    rsx! {
        div { class: "space-y-8",
            h2 { class: "text-lg font-semibold text-slate-200", "Cargo mix analysis" }

            section { class: "grid gap-6 lg:grid-cols-2",
                BarChart {
                    title: "Voyages per cargo pattern".to_string(),
                    data: pattern_bars,
                    unit: "voyages",
                }
                PieChart {
                    title: "Tonnage by commodity".to_string(),
                    data: commodity_slices,
                }
            }

            section { class: "space-y-3",
                h3 { class: "{theme::SECTION_TITLE}", "🔍 Cargo per voyage" }
                CargoTable { rows }
            }
        }
    }
}
