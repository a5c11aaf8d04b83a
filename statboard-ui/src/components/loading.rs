//! Loading Component
//!
//! Placeholder states shown before or instead of page content.

use leptos::*;
use statboard::view::PageState;

use crate::state::PageHandle;

/// Skeleton loader for cards
#[component]
pub fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg p-4 shadow animate-pulse">
            <div class="h-4 bg-gray-200 rounded w-1/3 mb-4" />
            <div class="h-8 bg-gray-200 rounded w-1/2" />
        </div>
    }
}

/// Shows skeletons while loading, the page message on error, and the
/// children once the page is ready
#[component]
pub fn PageBody(handle: PageHandle, children: ChildrenFn) -> impl IntoView {
    move || {
        let (loading, error) = handle.page.with(|page| match page.state() {
            PageState::Loading => (true, None),
            PageState::Ready { .. } => (false, None),
            PageState::Error(e) => (false, Some((e.is_no_data(), page.message()))),
        });

        match (loading, error) {
            (true, _) => view! {
                <div class="grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-4">
                    <CardSkeleton />
                    <CardSkeleton />
                    <CardSkeleton />
                    <CardSkeleton />
                </div>
            }
            .into_view(),
            (false, Some((no_data, message))) => {
                let class = if no_data {
                    "text-center text-gray-500"
                } else {
                    "text-center text-red-500"
                };
                view! { <div class=class>{message}</div> }.into_view()
            }
            (false, None) => children().into_view(),
        }
    }
}
