//! Selection Controls
//!
//! Time frame select, growth switch and tab bar. Each writes into the page's
//! own `ViewSelection`; changing them never triggers a fetch.

use leptos::*;
use statboard::metrics::TimeFrame;
use statboard::view::{Tab, ViewSelection};

/// Time frame dropdown
#[component]
pub fn TimeFrameSelect(selection: RwSignal<ViewSelection>) -> impl IntoView {
    view! {
        <select
            class="w-[180px] bg-white rounded-lg px-4 py-2 border border-gray-300"
            prop:value=move || selection.get().time_frame.wire_key()
            on:change=move |ev| {
                if let Ok(frame) = event_target_value(&ev).parse::<TimeFrame>() {
                    selection.update(|s| s.time_frame = frame);
                }
            }
        >
            {TimeFrame::all()
                .iter()
                .map(|frame| view! { <option value=frame.wire_key()>{frame.label()}</option> })
                .collect_view()}
        </select>
    }
}

/// "Show growth percentages" switch
#[component]
pub fn TrendSwitch(selection: RwSignal<ViewSelection>) -> impl IntoView {
    view! {
        <label class="flex items-center space-x-2 cursor-pointer">
            <input
                type="checkbox"
                id="show-percentages"
                prop:checked=move || selection.get().show_trend
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    selection.update(|s| s.show_trend = checked);
                }
            />
            <span>"Show growth percentages"</span>
        </label>
    }
}

/// Overview / Detailed Stats tabs
#[component]
pub fn TabBar(selection: RwSignal<ViewSelection>) -> impl IntoView {
    view! {
        <div class="inline-flex rounded-lg bg-gray-100 p-1">
            {[Tab::Overview, Tab::Details]
                .into_iter()
                .map(|tab| {
                    let class = move || {
                        if selection.get().tab == tab {
                            "px-3 py-1.5 rounded-md bg-white shadow text-sm font-medium"
                        } else {
                            "px-3 py-1.5 rounded-md text-sm text-gray-500"
                        }
                    };
                    view! {
                        <button class=class on:click=move |_| selection.update(|s| s.tab = tab)>
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
