//! Statboard Dashboard
//!
//! Platform metrics dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Blockchain token and wallet tiles
//! - Content overview and detailed stats with growth percentages
//! - User summary cards
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Every page fetches the metrics document once when it mounts
//! and derives its rows with the `statboard` core.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
