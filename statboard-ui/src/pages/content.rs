//! Content Management Page

use leptos::*;
use statboard::metrics::Category;
use statboard::view::{StatRow, ViewSelection};

use super::{PageHeader, RowSection};
use crate::components::{PageBody, StatCard};
use crate::state::use_page;

#[component]
pub fn ContentPage() -> impl IntoView {
    let handle = use_page(Category::Content, ViewSelection::default());

    view! {
        <div class="space-y-6">
            <PageHeader category=Category::Content handle=handle />
            <PageBody handle=handle>
                <RowSection handle=handle overview=card />
            </PageBody>
        </div>
    }
}

fn card(row: StatRow) -> View {
    view! { <StatCard category=Category::Content row=row /> }.into_view()
}
