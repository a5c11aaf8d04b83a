//! Stat Card Components
//!
//! Cards and tiles for derived rows and summary highlights.

use leptos::*;
use statboard::metrics::{display_name, Category};
use statboard::view::{format_value, Highlight, StatRow, TrendDirection};

use super::visuals::visual_for;

/// Overview card: human name, icon, value
#[component]
pub fn StatCard(category: Category, row: StatRow) -> impl IntoView {
    let visual = visual_for(&row.label);
    let name = display_name(category, &row.label).to_string();

    view! {
        <div class="bg-white rounded-lg shadow p-4">
            <div class="flex flex-row items-center justify-between pb-2">
                <span class="text-sm font-medium">{name}</span>
                <span class="h-4 w-4 text-gray-400">{visual.icon}</span>
            </div>
            <div class="text-2xl font-bold">{format_value(row.value)}</div>
        </div>
    }
}

/// Colored tile used on the blockchain page
#[component]
pub fn StatTile(category: Category, row: StatRow) -> impl IntoView {
    let visual = visual_for(&row.label);
    let name = display_name(category, &row.label).to_string();

    view! {
        <div class=format!("{} overflow-hidden rounded-lg shadow", visual.color)>
            <div class="px-4 py-5 sm:p-6 flex items-center">
                <div class="flex-shrink-0 rounded-md p-3 text-white text-2xl">{visual.icon}</div>
                <dl class="ml-5 w-0 flex-1">
                    <dt class="truncate text-sm font-medium text-gray-100">{name}</dt>
                    <dd class="text-3xl font-semibold text-white">{format_value(row.value)}</dd>
                </dl>
            </div>
        </div>
    }
}

/// Details card: raw key, value, optional growth
#[component]
pub fn DetailCard(row: StatRow) -> impl IntoView {
    let trend = row.trend.map(|trend| {
        let color = match trend.direction {
            TrendDirection::Up => "text-green-500",
            TrendDirection::Down => "text-red-500",
            TrendDirection::Flat => "text-gray-500",
        };
        view! {
            <div class=format!("flex items-center mt-2 {}", color)>
                <span class="mr-1">{trend.direction.arrow()}</span>
                <span>{format!("{:.2}%", trend.percent)}</span>
            </div>
        }
    });

    view! {
        <div class="bg-white rounded-lg shadow p-4">
            <div class="text-sm font-medium">{row.label.clone()}</div>
            <div class="text-2xl font-bold">{format_value(row.value)}</div>
            {trend}
        </div>
    }
}

/// Summary card on the users page
#[component]
pub fn HighlightCard(highlight: Highlight) -> impl IntoView {
    let value = highlight
        .value
        .map(format_value)
        .unwrap_or_else(|| "n/a".to_string());
    let note = highlight.note.map(|note| note.to_string());

    view! {
        <div class="bg-white rounded-lg shadow p-4">
            <div class="flex flex-row items-center justify-between pb-2">
                <span class="text-sm font-medium">{highlight.label}</span>
                <span class="text-gray-400">{visual_for(highlight.key).icon}</span>
            </div>
            <div class="text-2xl font-bold">{value}</div>
            {note.map(|note| view! { <p class="text-xs text-gray-500">{note}</p> })}
        </div>
    }
}
