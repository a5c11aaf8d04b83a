//! User Metrics Page
//!
//! Summary cards on top, then the user rows for the selected frame.

use leptos::*;
use statboard::metrics::Category;
use statboard::view::{StatRow, ViewSelection};

use super::{PageHeader, RowSection};
use crate::components::{HighlightCard, PageBody, StatCard};
use crate::state::use_page;

#[component]
pub fn UsersPage() -> impl IntoView {
    let handle = use_page(Category::User, ViewSelection::default());

    view! {
        <div class="space-y-6">
            <PageHeader category=Category::User handle=handle />
            <PageBody handle=handle>
                <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-4">
                    {move || {
                        handle
                            .highlights()
                            .into_iter()
                            .map(|highlight| view! { <HighlightCard highlight=highlight /> })
                            .collect_view()
                    }}
                </div>
                <RowSection handle=handle overview=card />
            </PageBody>
        </div>
    }
}

fn card(row: StatRow) -> View {
    view! { <StatCard category=Category::User row=row /> }.into_view()
}
