use dioxus::prelude::*;

use crate::{
    app::{regenerate_snapshot, reload_config},
    domain::{AppState, FleetConfig},
    ui::{
        components::toast::{push_error, push_toast, ToastKind, Toasts},
        theme,
    },
    util::config::{config_file, save_fleet_config},
};

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Toasts>();

    let (session, source, cache_empty, cached_count, config) = state.with(|st| {
        (
            st.session.to_string(),
            st.config_source.label(),
            st.snapshots.is_empty(),
            st.snapshots.len(),
            st.generator.config().clone(),
        )
    });
    let snapshot_info = state.with(|st| {
        st.current_snapshot().map(|cached| {
            let generated = cached
                .snapshot
                .generated_at
                .format(time::macros::format_description!(
                    "[year]-[month]-[day] [hour]:[minute]:[second] UTC"
                ))
                .unwrap_or_default();
            (cached.seed, generated, cached.snapshot.voyages.len())
        })
    });
    let config_path = config_file()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "unavailable on this platform".to_string());
    let seed_mode = match config.seed {
        Some(seed) => format!("fixed ({seed})"),
        None => "random per session".to_string(),
    };

    let on_reload = move |_| reload_config(state, toasts);
    let on_regenerate = move |_| regenerate_snapshot(state, toasts);

    let on_write_default = move |_| {
        if config_file().is_some_and(|path| path.exists()) {
            push_toast(
                toasts,
                ToastKind::Warning,
                "fleet.json already exists; edit it and reload instead.",
            );
            return;
        }
        match save_fleet_config(&FleetConfig::default()) {
            Ok(path) => push_toast(
                toasts,
                ToastKind::Success,
                format!("Wrote default fleet config to {}", path.display()),
            ),
            Err(err) => push_error(toasts, "Failed to write fleet config", &err),
        }
    };

    let on_clear_cache = {
        let mut state = state;
        move |_| {
            state.with_mut(|st| st.snapshots.clear());
            push_toast(
                toasts,
                ToastKind::Info,
                "Cleared cached snapshots. Regenerate to draw new data.",
            );
        }
    };

    rsx! {
        div { class: "space-y-8",
            section {
                class: theme::PANEL,
                h2 { class: theme::SECTION_TITLE, "Session" }
                dl { class: "mt-4 grid gap-3 text-sm sm:grid-cols-[10rem,1fr]",
                    dt { class: theme::TEXT_MUTED, "Session id" }
                    dd { class: "font-mono {theme::TEXT_SECONDARY}", "{session}" }
                    if let Some((seed, generated, voyages)) = snapshot_info {
                        dt { class: theme::TEXT_MUTED, "Seed" }
                        dd { class: "font-mono {theme::TEXT_SECONDARY}", "{seed}" }
                        dt { class: theme::TEXT_MUTED, "Generated" }
                        dd { class: theme::TEXT_SECONDARY, "{generated}" }
                        dt { class: theme::TEXT_MUTED, "Voyages" }
                        dd { class: theme::TEXT_SECONDARY, "{voyages}" }
                    } else {
                        dt { class: theme::TEXT_MUTED, "Snapshot" }
                        dd { class: theme::TEXT_SECONDARY, "not generated" }
                    }
                }
                div { class: "mt-4 flex gap-3",
                    button { class: theme::BTN_PRIMARY, onclick: on_regenerate, "Regenerate Data" }
                }
            }

            section {
                class: theme::PANEL,
                h2 { class: theme::SECTION_TITLE, "Fleet Configuration" }
                dl { class: "mt-4 grid gap-3 text-sm sm:grid-cols-[10rem,1fr]",
                    dt { class: theme::TEXT_MUTED, "Active source" }
                    dd { class: "break-all {theme::TEXT_SECONDARY}", "{source}" }
                    dt { class: theme::TEXT_MUTED, "Config file" }
                    dd { class: "break-all font-mono text-xs {theme::TEXT_SECONDARY}", "{config_path}" }
                    dt { class: theme::TEXT_MUTED, "Seed mode" }
                    dd { class: theme::TEXT_SECONDARY, "{seed_mode}" }
                    dt { class: theme::TEXT_MUTED, "Ships" }
                    dd { class: theme::TEXT_SECONDARY, "{config.ships.len()}" }
                }
                div { class: "{theme::TABLE_CONTAINER} mt-4",
                    table { class: "min-w-full text-left text-sm",
                        thead { class: theme::TABLE_HEADER,
                            tr {
                                th { class: "px-4 py-2", "Pattern" }
                                th { class: "px-4 py-2 text-right", "Corn" }
                                th { class: "px-4 py-2 text-right", "Milo" }
                                th { class: "px-4 py-2 text-right", "Barley" }
                            }
                        }
                        tbody { class: theme::TABLE_DIVIDER,
                            for pattern in config.cargo_patterns.iter() {
                                tr { key: "{pattern.name}",
                                    td { class: "px-4 py-2 font-semibold {theme::TEXT_SECONDARY}", "{pattern.name}" }
                                    td { class: "px-4 py-2 text-right", {format!("{:.0}%", pattern.corn_ratio * 100.0)} }
                                    td { class: "px-4 py-2 text-right", {format!("{:.0}%", pattern.milo_ratio * 100.0)} }
                                    td { class: "px-4 py-2 text-right", {format!("{:.0}%", pattern.barley_ratio * 100.0)} }
                                }
                            }
                        }
                    }
                }
                div { class: "mt-4 flex flex-wrap gap-3",
                    button { class: theme::BTN_SECONDARY, onclick: on_reload, "Reload fleet.json" }
                    button { class: theme::BTN_SECONDARY, onclick: on_write_default, "Write Default Config" }
                }
            }

            section {
                class: theme::PANEL,
                h2 { class: theme::SECTION_TITLE, "Snapshot Cache" }
                if cache_empty {
                    p { class: "mt-3 text-sm text-slate-400", "No cached snapshots." }
                } else {
                    p { class: "mt-3 text-sm text-slate-400", "{cached_count} cached snapshot(s)." }
                }
                button { class: "mt-4 {theme::BTN_WARNING}", onclick: on_clear_cache, "Clear Cache" }
            }
        }
    }
}
