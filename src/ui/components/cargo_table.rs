use dioxus::prelude::*;

use crate::domain::{Commodity, Voyage};
use crate::ui::theme;
use crate::util::format_thousands;

#[derive(Clone, PartialEq)]
pub struct CargoRow {
    pub voyage_id: String,
    pub ship_name: String,
    pub pattern: String,
    pub corn_tons: u32,
    pub milo_tons: u32,
    pub barley_tons: u32,
    pub total_cargo: u32,
}

impl From<&Voyage> for CargoRow {
    fn from(voyage: &Voyage) -> Self {
        Self {
            voyage_id: voyage.voyage_id.clone(),
            ship_name: voyage.ship_name.clone(),
            pattern: voyage.cargo_pattern.clone(),
            corn_tons: voyage.tons(Commodity::Corn),
            milo_tons: voyage.tons(Commodity::Milo),
            barley_tons: voyage.tons(Commodity::Barley),
            total_cargo: voyage.total_cargo,
        }
    }
}

/// Per-voyage tonnage breakdown.
#[component]
pub fn CargoTable(rows: Vec<CargoRow>) -> Element {
    let is_empty = rows.is_empty();
    rsx! {
        div {
            class: "{theme::TABLE_CONTAINER}",
            table {
                class: "min-w-full {theme::TABLE_DIVIDER} text-sm",
                thead {
                    class: "{theme::TABLE_HEADER} text-left tracking-wide",
                    tr {
                        th { class: "px-4 py-3 font-medium", "Voyage" }
                        th { class: "px-4 py-3 font-medium", "Ship" }
                        th { class: "px-4 py-3 font-medium", "Pattern" }
                        th { class: "px-4 py-3 font-medium text-right", "Corn (t)" }
                        th { class: "px-4 py-3 font-medium text-right", "Milo (t)" }
                        th { class: "px-4 py-3 font-medium text-right", "Barley (t)" }
                        th { class: "px-4 py-3 font-medium text-right", "Total (t)" }
                    }
                }
                tbody {
                    class: "{theme::TABLE_DIVIDER}",
                    for row in rows {
                        tr {
                            class: "hover:bg-slate-800/40",
                            td { class: "px-4 py-3 font-mono {theme::TEXT_MUTED}", "{row.voyage_id}" }
                            td { class: "px-4 py-3 font-medium {theme::TEXT_SECONDARY}", "{row.ship_name}" }
                            td { class: "px-4 py-3 {theme::TEXT_SECONDARY}", "{row.pattern}" }
                            td { class: "px-4 py-3 text-right {theme::TEXT_SECONDARY}", {format_thousands(row.corn_tons as u64)} }
                            td { class: "px-4 py-3 text-right {theme::TEXT_SECONDARY}", {format_thousands(row.milo_tons as u64)} }
                            td { class: "px-4 py-3 text-right {theme::TEXT_SECONDARY}", {format_thousands(row.barley_tons as u64)} }
                            td { class: "px-4 py-3 text-right font-semibold {theme::TEXT_SECONDARY}", {format_thousands(row.total_cargo as u64)} }
                        }
                    }
                    if is_empty {
                        tr {
                            td {
                                class: "px-4 py-6 text-center text-sm {theme::TEXT_MUTED}",
                                colspan: "7",
                                "No voyages in this snapshot."
                            }
                        }
                    }
                }
            }
        }
    }
}
