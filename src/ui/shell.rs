use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::AppState;
use crate::ui::theme;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    let session_label = state.with(|st| {
        let full = st.session.to_string();
        full.chars().take(8).collect::<String>()
    });

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
            header {
                class: "border-b border-slate-900/60 bg-slate-950/90 px-6 py-4",
                div { class: "mx-auto flex max-w-6xl items-center justify-between gap-4",
                    div { class: "flex items-center gap-3",
                        span { class: "text-2xl", "🚢" }
                        div {
                            h1 { class: "text-xl font-semibold tracking-tight text-sky-200", "{APP_NAME}" }
                            p { class: "text-xs text-slate-500 italic", "Session {session_label}" }
                        }
                    }
                    nav { class: "flex gap-2 text-sm",
                        NavButton { active: matches!(current_route, Route::Dashboard {}), onclick: move |_| { nav.push(Route::Dashboard {}); }, label: "🏠 Dashboard" }
                        NavButton { active: matches!(current_route, Route::CargoAnalysis {}), onclick: move |_| { nav.push(Route::CargoAnalysis {}); }, label: "📊 Cargo Mix" }
                        NavButton { active: matches!(current_route, Route::Optimization {}), onclick: move |_| { nav.push(Route::Optimization {}); }, label: "🎯 Simulation" }
                        NavButton { active: matches!(current_route, Route::Report {}), onclick: move |_| { nav.push(Route::Report {}); }, label: "📈 Report" }
                        NavButton { active: matches!(current_route, Route::Settings {}), onclick: move |_| { nav.push(Route::Settings {}); }, label: "⚙️" }
                    }
                }
            }
            main { class: "mx-auto max-w-6xl px-6 py-10",
                {children}
            }
            footer { class: "mx-auto max-w-6xl px-6 pb-8 text-xs text-slate-600",
                "{APP_NAME} {version_label()} · synthetic data, not for operational use"
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    let class = if active { theme::BTN_ACTIVE } else { theme::BTN_INACTIVE };

    rsx! {
        button {
            class: "min-w-[5.5rem] transition {class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
