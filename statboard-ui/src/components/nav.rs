//! Navigation Component
//!
//! Header navigation bar with links to each dashboard page.

use leptos::*;
use leptos_router::*;
use statboard::metrics::Category;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-white border-b border-gray-200">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"📊"</span>
                        <span class="text-xl font-bold">"Statboard"</span>
                    </A>

                    <div class="flex items-center space-x-1">
                        {Category::all()
                            .iter()
                            .map(|category| view! { <NavLink category=*category /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Link to a category page
#[component]
fn NavLink(category: Category) -> impl IntoView {
    let label = match category {
        Category::Blockchain => "Blockchain",
        Category::Content => "Content",
        Category::User => "Users",
    };

    view! {
        <A
            href=format!("/dashboard/{}", category.slug())
            class="px-4 py-2 rounded-lg text-gray-600 hover:text-gray-900 hover:bg-gray-100 transition-colors"
            active_class="bg-gray-100 text-gray-900"
        >
            {label}
        </A>
    }
}
