//! Blockchain Page

use leptos::*;
use statboard::metrics::Category;
use statboard::view::{StatRow, ViewSelection};

use super::{PageHeader, RowSection};
use crate::components::{PageBody, StatTile};
use crate::state::use_page;

#[component]
pub fn BlockchainPage() -> impl IntoView {
    let handle = use_page(Category::Blockchain, ViewSelection::default());

    view! {
        <div class="space-y-6">
            <PageHeader category=Category::Blockchain handle=handle />
            <PageBody handle=handle>
                <RowSection handle=handle overview=tile />
            </PageBody>
        </div>
    }
}

fn tile(row: StatRow) -> View {
    view! { <StatTile category=Category::Blockchain row=row /> }.into_view()
}
