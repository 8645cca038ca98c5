use dioxus::{prelude::*, signals::Signal};
use tracing::info;

use crate::{
    domain::{AppState, ConfigSource, FleetConfig},
    ui::{
        components::toast::{push_error, push_toast, ToastHost, ToastKind, ToastMessage, Toasts},
        pages::{CargoAnalysisPage, DashboardPage, OptimizationPage, ReportPage, SettingsPage},
        shell::Shell,
    },
    util::{assets, config::load_fleet_config},
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Dashboard {},
    #[route("/cargo")]
    CargoAnalysis {},
    #[route("/optimize")]
    Optimization {},
    #[route("/report")]
    Report {},
    #[route("/settings")]
    Settings {},
}

#[component]
pub fn App() -> Element {
    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    let state = use_signal(AppState::default);
    use_context_provider(|| state);

    use_hook(move || bootstrap(state, toasts));

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::tailwind_css()}" }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        ToastHost {}
    }
}

/// Loads `fleet.json` if present, then generates this session's snapshot.
fn bootstrap(mut state: Signal<AppState>, toasts: Toasts) {
    let session = state.with(|st| st.session);
    info!(%session, "starting dashboard session");

    match load_fleet_config() {
        Ok(Some((config, path))) => {
            let source = ConfigSource::File(path.display().to_string());
            if let Err(err) = state.with_mut(|st| st.apply_config(config, source)) {
                push_error(toasts, "Fleet config rejected", &err);
            }
        }
        Ok(None) => {}
        Err(err) => push_error(toasts, "Failed to load fleet config; using defaults", &err),
    }

    if let Err(err) = state.with_mut(|st| st.ensure_snapshot().map(|_| ())) {
        push_error(toasts, "Failed to generate fleet data", &err);
    }
}

/// Manual refresh: drops the session snapshot and draws a new one.
pub fn regenerate_snapshot(mut state: Signal<AppState>, toasts: Toasts) {
    match state.with_mut(|st| st.refresh().map(|cached| cached.seed)) {
        Ok(seed) => push_toast(
            toasts,
            ToastKind::Success,
            format!("Generated a new fleet snapshot (seed {seed})."),
        ),
        Err(err) => push_error(toasts, "Failed to generate fleet data", &err),
    }
}

/// Re-reads `fleet.json`; a missing file restores the built-in catalog.
pub fn reload_config(mut state: Signal<AppState>, toasts: Toasts) {
    let (config, source) = match load_fleet_config() {
        Ok(Some((config, path))) => (config, ConfigSource::File(path.display().to_string())),
        Ok(None) => (FleetConfig::default(), ConfigSource::BuiltIn),
        Err(err) => {
            push_error(toasts, "Failed to load fleet config", &err);
            return;
        }
    };

    let applied = state.with_mut(|st| {
        st.apply_config(config, source)?;
        st.ensure_snapshot().map(|_| ())
    });
    match applied {
        Ok(()) => push_toast(toasts, ToastKind::Info, "Fleet configuration reloaded."),
        Err(err) => push_error(toasts, "Fleet config rejected", &err),
    }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! { Shell { DashboardPage {} } }
}

#[component]
pub fn CargoAnalysis() -> Element {
    rsx! { Shell { CargoAnalysisPage {} } }
}

#[component]
pub fn Optimization() -> Element {
    rsx! { Shell { OptimizationPage {} } }
}

#[component]
pub fn Report() -> Element {
    rsx! { Shell { ReportPage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}
