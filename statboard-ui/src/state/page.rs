//! Page State
//!
//! Reactive wrapper around the core `Page`: mounts when the component is
//! created, fetches once, and unmounts on cleanup so a late response is
//! dropped instead of applied.

use leptos::*;
use statboard::metrics::Category;
use statboard::view::{Highlight, Page, StatRow, ViewSelection};

use crate::api;

/// Signals owned by one mounted page
#[derive(Clone, Copy)]
pub struct PageHandle {
    pub page: RwSignal<Page>,
    pub selection: RwSignal<ViewSelection>,
}

impl PageHandle {
    /// Rows for the current selection (reactive)
    pub fn rows(&self) -> Vec<StatRow> {
        let selection = self.selection.get();
        self.page.with(|page| page.rows(&selection))
    }

    /// Summary cards (reactive)
    pub fn highlights(&self) -> Vec<Highlight> {
        self.page.with(|page| page.highlights())
    }
}

/// Mount a page for `category` and start its fetch
pub fn use_page(category: Category, initial: ViewSelection) -> PageHandle {
    let mut fresh = Page::new(category);
    let ticket = fresh.mount();

    let page = create_rw_signal(fresh);
    let selection = create_rw_signal(initial);

    spawn_local(async move {
        let result = api::fetch_dashboard_data().await;
        if let Err(e) = &result {
            web_sys::console::error_1(&format!("Failed to fetch metrics: {}", e).into());
        }
        // The signal is gone if the page was disposed meanwhile
        let applied = page.try_update(|page| page.resolve(ticket, result));
        if applied != Some(true) {
            web_sys::console::warn_1(&"Discarded metrics response for unmounted page".into());
        }
    });

    on_cleanup(move || {
        page.try_update_untracked(|page| page.unmount());
    });

    PageHandle { page, selection }
}
