use dioxus::prelude::*;

use crate::ui::theme;

#[component]
pub fn KpiCard(
    title: String,
    value: String,
    description: Option<String>,
    icon: Option<&'static str>,
) -> Element {
    rsx! {
        div {
            class: "{theme::PANEL} shadow-sm",
            div { class: "flex items-center justify-between",
                h3 { class: "{theme::LABEL}", "{title}" }
                if let Some(icon) = icon {
                    span { class: "text-lg", "{icon}" }
                }
            }
            p { class: "mt-2 text-2xl font-semibold {theme::TEXT_SECONDARY}", "{value}" }
            if let Some(desc) = description {
                p { class: "mt-1 text-xs {theme::TEXT_MUTED}", "{desc}" }
            }
        }
    }
}
