use dioxus::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use time::OffsetDateTime;

use crate::{
    domain::{
        monthly_trend, report_summary, trend_seed, AppState, ReportPeriod, MONTHLY_VOLUME_RANGE,
    },
    ui::{
        components::{charts::LineChart, kpi_card::KpiCard},
        pages::SnapshotMissing,
        theme,
    },
    util::format_thousands,
};

/// Flips `name` in the selection, keeping catalog order.
fn toggle_pattern(all: &[String], selected: &[String], name: &str) -> Vec<String> {
    let now_selected = !selected.iter().any(|s| s == name);
    all.iter()
        .filter(|candidate| {
            if candidate.as_str() == name {
                now_selected
            } else {
                selected.contains(candidate)
            }
        })
        .cloned()
        .collect()
}

#[component]
pub fn ReportPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();

    let Some(cached) = state.with(|st| st.current_snapshot().cloned()) else {
        return rsx! { SnapshotMissing {} };
    };
    let (period, all_patterns, selected) = state.with(|st| {
        (
            st.report_period,
            st.generator.config().pattern_names(),
            st.selected_patterns(),
        )
    });

    let mut rng = StdRng::seed_from_u64(trend_seed(cached.seed, period));
    let trend = monthly_trend(
        &mut rng,
        period,
        OffsetDateTime::now_utc().date(),
        MONTHLY_VOLUME_RANGE,
    );
    let labels: Vec<String> = trend.iter().map(|m| m.label()).collect();
    let values: Vec<f64> = trend.iter().map(|m| f64::from(m.tons)).collect();

    let summary = report_summary(&cached.snapshot, &selected);
    let average = summary
        .average_cargo
        .map(|avg| format!("{}t", format_thousands(avg.round() as u64)))
        .unwrap_or_else(|| "—".to_string());
    let utilization = summary
        .utilization_pct
        .map(|pct| format!("{pct:.1}%"))
        .unwrap_or_else(|| "—".to_string());

    let checkboxes: Vec<(String, bool)> = all_patterns
        .iter()
        .map(|name| (name.clone(), selected.contains(name)))
        .collect();

    rsx! {
        div { class: "space-y-8",
            h2 { class: "text-lg font-semibold text-slate-200", "Performance report" }

            section { class: "grid gap-6 lg:grid-cols-[1fr,3fr]",
                div { class: "{theme::PANEL} space-y-5",
                    h3 { class: "{theme::SECTION_TITLE}", "📅 Period" }
                    select {
                        class: theme::INPUT,
                        value: period.key(),
                        onchange: move |evt| {
                            if let Some(next) = ReportPeriod::from_key(&evt.value()) {
                                state.with_mut(|st| st.report_period = next);
                            }
                        },
                        for choice in ReportPeriod::ALL {
                            option {
                                value: choice.key(),
                                selected: choice == period,
                                "{choice.label()}"
                            }
                        }
                    }
                    div { class: "space-y-2",
                        label { class: theme::LABEL, "Cargo filter" }
                        for (name, checked) in checkboxes {
                            label { class: "flex items-center gap-2 text-sm {theme::TEXT_SECONDARY}",
                                input {
                                    r#type: "checkbox",
                                    class: "accent-sky-500",
                                    checked: checked,
                                    onchange: {
                                        let all = all_patterns.clone();
                                        let name = name.clone();
                                        move |_| {
                                            state.with_mut(|st| {
                                                let next = toggle_pattern(&all, &st.selected_patterns(), &name);
                                                st.report_patterns = Some(next);
                                            });
                                        }
                                    },
                                }
                                "{name}"
                            }
                        }
                    }
                }

                LineChart {
                    title: format!("Monthly handled volume ({})", period.label()),
                    labels,
                    values,
                    color: theme::TREND_LINE,
                }
            }

            section { class: "space-y-3",
                h3 { class: "{theme::SECTION_TITLE}", "📋 Period summary" }
                div { class: "grid gap-4 sm:grid-cols-3",
                    KpiCard {
                        title: "Voyages".to_string(),
                        value: format!("{}", summary.voyage_count),
                        description: Some(format!("{} of {} patterns selected", selected.len(), all_patterns.len())),
                        icon: Some("🚢"),
                    }
                    KpiCard {
                        title: "Average cargo".to_string(),
                        value: average,
                        description: None,
                        icon: Some("📦"),
                    }
                    KpiCard {
                        title: "Capacity utilization".to_string(),
                        value: utilization,
                        description: Some("Loaded tons over ship capacity".to_string()),
                        icon: Some("⚓"),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn toggling_off_removes_only_that_pattern() {
        let all = names(&["CORN+MILO", "CORN+BARLEY", "MILO+BARLEY"]);
        let next = toggle_pattern(&all, &all, "CORN+BARLEY");
        assert_eq!(next, names(&["CORN+MILO", "MILO+BARLEY"]));
    }

    #[test]
    fn toggling_on_restores_catalog_order() {
        let all = names(&["CORN+MILO", "CORN+BARLEY", "MILO+BARLEY"]);
        let next = toggle_pattern(&all, &names(&["MILO+BARLEY"]), "CORN+MILO");
        assert_eq!(next, names(&["CORN+MILO", "MILO+BARLEY"]));
    }

    #[test]
    fn everything_can_be_deselected() {
        let all = names(&["CORN+MILO"]);
        assert!(toggle_pattern(&all, &all, "CORN+MILO").is_empty());
    }
}
