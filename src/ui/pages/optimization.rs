use dioxus::prelude::*;
use tracing::info;

use crate::{
    domain::{AppState, Commodity, MixInputs, MixResult},
    ui::{
        components::{
            charts::{BarChart, ChartDatum},
            kpi_card::KpiCard,
            toast::{push_error, push_toast, ToastKind, Toasts},
        },
        theme,
    },
    util::{format_thousands, format_usd},
};

pub const CAPACITY_MIN: u32 = 50_000;
pub const CAPACITY_MAX: u32 = 70_000;
pub const CAPACITY_STEP: u32 = 1_000;
/// Ratio sliders move in tenths.
const RATIO_STEPS: u8 = 10;

fn to_tenths(ratio: f64) -> u8 {
    (ratio * f64::from(RATIO_STEPS)).round().clamp(0.0, f64::from(RATIO_STEPS)) as u8
}

fn from_tenths(tenths: u8) -> f64 {
    f64::from(tenths) / f64::from(RATIO_STEPS)
}

/// Snaps a typed capacity onto the allowed range and step.
pub fn clamp_capacity(value: u32) -> u32 {
    let snapped = value.saturating_add(CAPACITY_STEP / 2) / CAPACITY_STEP * CAPACITY_STEP;
    snapped.clamp(CAPACITY_MIN, CAPACITY_MAX)
}

fn parse_price(commodity: Commodity, raw: &str) -> Result<f64, String> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| format!("{} price must be a number", commodity.display_name()))
}

pub fn parse_mix_inputs(
    capacity: u32,
    corn_tenths: u8,
    milo_tenths: u8,
    prices: [&str; 3],
) -> Result<MixInputs, String> {
    let [corn, milo, barley] = prices;
    Ok(MixInputs {
        capacity,
        corn_ratio: from_tenths(corn_tenths),
        milo_ratio: from_tenths(milo_tenths),
        corn_price: parse_price(Commodity::Corn, corn)?,
        milo_price: parse_price(Commodity::Milo, milo)?,
        barley_price: parse_price(Commodity::Barley, barley)?,
    })
}

#[component]
pub fn OptimizationPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Toasts>();

    let initial = state.with(|st| st.mix_inputs);
    let mut capacity = use_signal(|| initial.capacity);
    let mut corn_tenths = use_signal(|| to_tenths(initial.corn_ratio));
    let mut milo_tenths = use_signal(|| to_tenths(initial.milo_ratio));
    let mut corn_price = use_signal(|| format!("{:.1}", initial.corn_price));
    let mut milo_price = use_signal(|| format!("{:.1}", initial.milo_price));
    let mut barley_price = use_signal(|| format!("{:.1}", initial.barley_price));

    let milo_max = RATIO_STEPS - corn_tenths();
    let slider_mix = MixInputs {
        corn_ratio: from_tenths(corn_tenths()),
        milo_ratio: from_tenths(milo_tenths()),
        ..initial
    };
    let barley_ratio = slider_mix.barley_ratio().max(0.0);

    let (last_inputs, last_result) = state.with(|st| (st.mix_inputs, st.last_mix));

    let on_run = {
        let mut state = state;
        move |_| {
            let parsed = parse_mix_inputs(
                capacity(),
                corn_tenths(),
                milo_tenths(),
                [&corn_price(), &milo_price(), &barley_price()],
            );
            let inputs = match parsed {
                Ok(inputs) => inputs,
                Err(message) => {
                    push_toast(toasts, ToastKind::Error, message);
                    return;
                }
            };
            match inputs.compute() {
                Ok(result) => {
                    info!(
                        capacity = inputs.capacity,
                        total_revenue = result.total_revenue,
                        "cargo mix simulated"
                    );
                    state.with_mut(|st| {
                        st.mix_inputs = inputs;
                        st.last_mix = Some(result);
                    });
                    push_toast(toasts, ToastKind::Success, "Simulation complete.");
                }
                Err(err) => push_error(toasts, "Simulation failed", &err),
            }
        }
    };

    rsx! {
        div { class: "space-y-8",
            div {
                h2 { class: "text-lg font-semibold text-slate-200", "Cargo mix simulation" }
                p { class: "mt-1 text-sm {theme::TEXT_MUTED}",
                    "💡 Compare revenue for different cargo splits of one ship."
                }
            }

            section { class: "grid gap-6 lg:grid-cols-2",
                div { class: "{theme::PANEL} space-y-5",
                    h3 { class: "{theme::SECTION_TITLE}", "📋 Inputs" }
                    div {
                        label { class: theme::LABEL, "Ship capacity (t)" }
                        input {
                            class: theme::INPUT,
                            r#type: "number",
                            min: "{CAPACITY_MIN}",
                            max: "{CAPACITY_MAX}",
                            step: "{CAPACITY_STEP}",
                            value: "{capacity}",
                            onchange: move |evt| {
                                if let Ok(v) = evt.value().trim().parse::<u32>() {
                                    capacity.set(clamp_capacity(v));
                                }
                            },
                        }
                    }
                    div {
                        label { class: theme::LABEL, {format!("Corn ratio: {:.1}", from_tenths(corn_tenths()))} }
                        input {
                            class: theme::RANGE,
                            r#type: "range",
                            min: "0",
                            max: "{RATIO_STEPS}",
                            step: "1",
                            value: "{corn_tenths}",
                            oninput: move |evt| {
                                if let Ok(v) = evt.value().parse::<u8>() {
                                    let corn = v.min(RATIO_STEPS);
                                    corn_tenths.set(corn);
                                    if milo_tenths() > RATIO_STEPS - corn {
                                        milo_tenths.set(RATIO_STEPS - corn);
                                    }
                                }
                            },
                        }
                    }
                    div {
                        label { class: theme::LABEL, {format!("Milo ratio: {:.1}", from_tenths(milo_tenths()))} }
                        input {
                            class: theme::RANGE,
                            r#type: "range",
                            min: "0",
                            max: "{milo_max}",
                            step: "1",
                            value: "{milo_tenths}",
                            disabled: milo_max == 0,
                            oninput: move |evt| {
                                if let Ok(v) = evt.value().parse::<u8>() {
                                    milo_tenths.set(v.min(milo_max));
                                }
                            },
                        }
                    }
                    p { class: "text-sm {theme::TEXT_SECONDARY}",
                        span { class: "font-semibold", "Feed barley ratio: " }
                        {format!("{barley_ratio:.1}")}
                    }
                    div { class: "grid gap-4 sm:grid-cols-3",
                        div {
                            label { class: theme::LABEL, "Corn $/t" }
                            input { class: theme::INPUT, inputmode: "decimal", value: corn_price(), oninput: move |evt| corn_price.set(evt.value()) }
                        }
                        div {
                            label { class: theme::LABEL, "Milo $/t" }
                            input { class: theme::INPUT, inputmode: "decimal", value: milo_price(), oninput: move |evt| milo_price.set(evt.value()) }
                        }
                        div {
                            label { class: theme::LABEL, "Barley $/t" }
                            input { class: theme::INPUT, inputmode: "decimal", value: barley_price(), oninput: move |evt| barley_price.set(evt.value()) }
                        }
                    }
                    button { class: theme::BTN_PRIMARY, onclick: on_run, "🔍 Run simulation" }
                }

                div { class: "space-y-4",
                    h3 { class: "{theme::SECTION_TITLE}", "📊 Result" }
                    if let Some(result) = last_result {
                        MixResultView { inputs: last_inputs, result }
                    } else {
                        p { class: "text-sm {theme::TEXT_MUTED}", "Set the inputs and run the simulation." }
                    }
                }
            }
        }
    }
}

#[component]
fn MixResultView(inputs: MixInputs, result: MixResult) -> Element {
    let ratios = [inputs.corn_ratio, inputs.milo_ratio, result.barley_ratio];
    let cards: Vec<(Commodity, f64)> = Commodity::ALL.into_iter().zip(ratios).collect();
    let bars: Vec<ChartDatum> = Commodity::ALL
        .into_iter()
        .map(|c| ChartDatum::new(c.display_name(), result.tons(c) as f64, theme::commodity_color(c)))
        .collect();

    rsx! {
        div { class: "grid gap-4 sm:grid-cols-2",
            for (commodity, ratio) in cards {
                KpiCard {
                    title: commodity.display_name().to_string(),
                    value: format!("{}t", format_thousands(result.tons(commodity) as u64)),
                    description: Some(format!("{:.1}% · {}", ratio * 100.0, format_usd(result.revenue(commodity)))),
                    icon: None,
                }
            }
            KpiCard {
                title: "Total revenue".to_string(),
                value: format_usd(result.total_revenue),
                description: Some(format!("{}t capacity", format_thousands(inputs.capacity as u64))),
                icon: Some("💰"),
            }
            KpiCard {
                title: "Average unit price".to_string(),
                value: format!("{}/t", format_usd(result.average_unit_price)),
                description: None,
                icon: None,
            }
        }
        BarChart { title: "Simulated cargo split".to_string(), data: bars, unit: "t" }
    }
}
