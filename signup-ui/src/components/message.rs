//! Message Area Component
//!
//! Shows the latest success or error notice until its timer hides it.

use leptos::*;

use crate::state::SignupState;

#[component]
pub fn MessageArea() -> impl IntoView {
    let state = use_context::<SignupState>().expect("SignupState not found");

    let class = move || {
        state.notice.with(|notice| match notice {
            Some(notice) => notice.kind.css_class(),
            None => "hidden",
        })
    };
    let text = move || {
        state
            .notice
            .with(|notice| notice.as_ref().map(|n| n.text.clone()).unwrap_or_default())
    };

    view! {
        <div id="message" class=class role="status">{text}</div>
    }
}
