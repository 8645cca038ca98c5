use dioxus::prelude::*;

use crate::domain::{FleetSnapshot, ShipStatus};
use crate::ui::theme;
use crate::util::format_thousands;

#[derive(Clone, PartialEq)]
pub struct VoyageRow {
    pub ship_name: String,
    pub status: Option<ShipStatus>,
    pub pattern: String,
    pub total_cargo: u32,
    pub loading_port: String,
    pub eta: String,
    pub discharge: String,
}

pub fn voyage_rows(snapshot: &FleetSnapshot) -> Vec<VoyageRow> {
    snapshot
        .voyages
        .iter()
        .map(|voyage| VoyageRow {
            ship_name: voyage.ship_name.clone(),
            status: snapshot.ship_for(voyage).map(|ship| ship.status),
            pattern: voyage.cargo_pattern.clone(),
            total_cargo: voyage.total_cargo,
            loading_port: voyage.loading_port.clone(),
            eta: voyage.eta_label(),
            discharge: voyage.discharge_route(),
        })
        .collect()
}

#[component]
pub fn VoyageTable(rows: Vec<VoyageRow>) -> Element {
    rsx! {
        div {
            class: "{theme::TABLE_CONTAINER}",
            table {
                class: "min-w-full {theme::TABLE_DIVIDER} text-sm",
                thead {
                    class: "{theme::TABLE_HEADER} text-left tracking-wide",
                    tr {
                        th { class: "px-4 py-3 font-medium", "Ship" }
                        th { class: "px-4 py-3 font-medium", "Status" }
                        th { class: "px-4 py-3 font-medium", "Cargo" }
                        th { class: "px-4 py-3 font-medium text-right", "Load (t)" }
                        th { class: "px-4 py-3 font-medium", "Loading port" }
                        th { class: "px-4 py-3 font-medium", "ETA" }
                        th { class: "px-4 py-3 font-medium", "Discharge" }
                    }
                }
                tbody {
                    class: "{theme::TABLE_DIVIDER}",
                    for row in rows {
                        tr {
                            class: "hover:bg-slate-800/40",
                            td { class: "px-4 py-3 font-medium {theme::TEXT_SECONDARY}", "{row.ship_name}" }
                            td { class: "px-4 py-3",
                                if let Some(status) = row.status {
                                    span {
                                        class: "rounded-full border px-2 py-0.5 text-xs {theme::status_badge(status)}",
                                        "{status.label()}"
                                    }
                                }
                            }
                            td { class: "px-4 py-3 {theme::TEXT_SECONDARY}", "{row.pattern}" }
                            td { class: "px-4 py-3 text-right {theme::TEXT_SECONDARY}", {format_thousands(row.total_cargo as u64)} }
                            td { class: "px-4 py-3 {theme::TEXT_MUTED}", "{row.loading_port}" }
                            td { class: "px-4 py-3 font-mono {theme::TEXT_MUTED}", "{row.eta}" }
                            td { class: "px-4 py-3 {theme::TEXT_MUTED}", "{row.discharge}" }
                        }
                    }
                }
            }
        }
    }
}
