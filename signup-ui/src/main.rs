//! Activity Signup Page
//!
//! Client-side rendered (CSR) Leptos application compiled to WebAssembly.
//! It lists the activities served by `GET /activities`, lets a student sign
//! up through a form and removes participants from the list, re-fetching
//! the catalog after every change.

use leptos::*;

mod api;
mod app;
mod components;
mod logging;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();
    logging::init();

    mount_to_body(|| view! { <app::App /> });
}
