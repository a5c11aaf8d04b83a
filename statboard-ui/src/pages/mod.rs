//! Pages
//!
//! One page per metrics category. Every page fetches on mount and keeps its
//! own selection; switching controls only re-derives rows.

pub mod blockchain;
pub mod content;
pub mod users;

pub use blockchain::BlockchainPage;
pub use content::ContentPage;
pub use users::UsersPage;

use leptos::*;
use statboard::metrics::Category;
use statboard::view::{StatRow, Tab};

use crate::components::{DetailCard, TabBar, TimeFrameSelect, TrendSwitch};
use crate::state::PageHandle;

/// Title row with the time frame select
#[component]
fn PageHeader(category: Category, handle: PageHandle) -> impl IntoView {
    view! {
        <div class="flex justify-between items-center mb-6">
            <h1 class="text-3xl font-bold">{category.title()}</h1>
            <TimeFrameSelect selection=handle.selection />
        </div>
    }
}

/// Tabs, growth switch and the rows of the active tab.
/// `overview` renders one row on the Overview tab.
#[component]
fn RowSection(
    handle: PageHandle,
    overview: fn(StatRow) -> View,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between mb-4">
            <TabBar selection=handle.selection />
            <Show when=move || handle.selection.get().tab == Tab::Details>
                <TrendSwitch selection=handle.selection />
            </Show>
        </div>
        <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-3">
            {move || {
                let tab = handle.selection.get().tab;
                handle
                    .rows()
                    .into_iter()
                    .map(|row| match tab {
                        Tab::Overview => overview(row),
                        Tab::Details => view! { <DetailCard row=row /> }.into_view(),
                    })
                    .collect_view()
            }}
        </div>
    }
}
