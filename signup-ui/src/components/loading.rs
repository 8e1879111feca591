//! Loading Component

use activity_signup::view::LOADING_TEXT;
use leptos::*;

/// Placeholder until the first catalog arrives
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading">
            <span class="loading-spinner" />
            <p>{LOADING_TEXT}</p>
        </div>
    }
}
