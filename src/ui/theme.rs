//! Shared class strings and chart colours.

use crate::domain::{Commodity, ShipStatus};

// ============================================
// BUTTONS & INPUTS
// ============================================

pub const BTN_PRIMARY: &str =
    "rounded-lg bg-sky-500 px-4 py-2 text-sm font-semibold text-white hover:bg-sky-400";
pub const BTN_SECONDARY: &str =
    "rounded-lg border border-slate-600 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-slate-200 hover:bg-slate-800";
pub const BTN_WARNING: &str =
    "rounded-lg border border-amber-500/40 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-amber-200 hover:bg-amber-500/10";
pub const BTN_ACTIVE: &str =
    "rounded-lg px-4 py-2 text-sm font-semibold bg-sky-500/20 text-sky-300 border border-sky-500/40";
pub const BTN_INACTIVE: &str =
    "rounded-lg px-4 py-2 text-sm text-slate-400 border border-slate-700 hover:border-sky-600 hover:text-sky-300";

pub const INPUT: &str =
    "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-sky-500 focus:outline-none";
pub const RANGE: &str = "mt-2 w-full accent-sky-500";

// ============================================
// PANELS, TABLES, TEXT
// ============================================

pub const PANEL: &str = "rounded-xl border border-slate-800 bg-slate-900/40 p-6";
pub const TABLE_CONTAINER: &str = "rounded-xl border border-slate-800 bg-slate-900/40 overflow-hidden";
pub const TABLE_HEADER: &str = "border-b border-slate-800 bg-slate-900/80 text-xs uppercase text-slate-400";
pub const TABLE_DIVIDER: &str = "divide-y divide-slate-800";
pub const SECTION_TITLE: &str = "text-sm font-semibold uppercase tracking-wide text-slate-500";
pub const LABEL: &str = "block text-xs font-semibold uppercase text-slate-500";
pub const TEXT_SECONDARY: &str = "text-slate-300";
pub const TEXT_MUTED: &str = "text-slate-500";

// ============================================
// CHART PALETTES
// ============================================

pub fn status_color(status: ShipStatus) -> &'static str {
    match status {
        ShipStatus::Underway => "#4ECDC4",
        ShipStatus::Loading => "#FFD93D",
        ShipStatus::Waiting => "#FF6B6B",
        ShipStatus::PreparingToDock => "#45B7D1",
    }
}

pub fn status_badge(status: ShipStatus) -> &'static str {
    match status {
        ShipStatus::Underway => "border-emerald-500/40 bg-emerald-500/10 text-emerald-200",
        ShipStatus::Loading => "border-amber-500/40 bg-amber-500/10 text-amber-200",
        ShipStatus::Waiting => "border-rose-500/40 bg-rose-500/10 text-rose-200",
        ShipStatus::PreparingToDock => "border-sky-500/40 bg-sky-500/10 text-sky-200",
    }
}

pub fn commodity_color(commodity: Commodity) -> &'static str {
    match commodity {
        Commodity::Corn => "#FFD93D",
        Commodity::Milo => "#6BCF7F",
        Commodity::Barley => "#4D96FF",
    }
}

const PATTERN_COLORS: [&str; 3] = ["#FF6B6B", "#4ECDC4", "#45B7D1"];

/// Bar colour for the n-th cargo pattern; cycles past the palette.
pub fn pattern_color(index: usize) -> &'static str {
    PATTERN_COLORS[index % PATTERN_COLORS.len()]
}

pub const TREND_LINE: &str = "#FF6B6B";
