//! Activity List Component
//!
//! Activity cards with their participants. Removal buttons are regenerated
//! on every load, so one delegated click listener on the container serves
//! all of them.

use activity_signup::view::LOAD_FAILURE_TEXT;
use activity_signup::{ActivityCard, ViewState};
use leptos::*;
use wasm_bindgen::JsCast;

use crate::components::Loading;
use crate::state::{Controller, SignupState};

/// Attribute carrying a removal button's identifier
const REMOVAL_ATTR: &str = "data-removal";

#[component]
pub fn ActivityList() -> impl IntoView {
    let state = use_context::<SignupState>().expect("SignupState not found");
    let controller = use_context::<Controller>().expect("Controller not found");

    let on_click = move |ev: web_sys::MouseEvent| {
        let Some(id) = removal_id(&ev) else {
            return;
        };

        let controller = controller.clone();
        spawn_local(async move {
            controller.handle_removal_click(&id).await;
        });
    };

    view! {
        <div id="activities-list" on:click=on_click>
            {move || match state.view.get() {
                ViewState::Loading => view! { <Loading /> }.into_view(),
                ViewState::Failed => view! { <p>{LOAD_FAILURE_TEXT}</p> }.into_view(),
                ViewState::Ready(catalog) => catalog
                    .cards
                    .into_iter()
                    .map(|card| view! { <ActivityCardView card=card /> })
                    .collect_view(),
            }}
        </div>
    }
}

/// Identifier of the removal button the click landed on, if any
fn removal_id(ev: &web_sys::MouseEvent) -> Option<String> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    removal_id_for(&target)
}

/// Walks up from `target`, so a click on the button's glyph still counts
fn removal_id_for(target: &web_sys::Element) -> Option<String> {
    let button = target.closest(&format!("[{}]", REMOVAL_ATTR)).ok()??;
    button.get_attribute(REMOVAL_ATTR)
}

#[component]
fn ActivityCardView(card: ActivityCard) -> impl IntoView {
    let availability = card.availability_label();

    let participants = card
        .participants
        .into_iter()
        .map(|row| {
            let id = row.removal.id();
            view! {
                <li class="participant-item">
                    {row.email}
                    " "
                    <button
                        type="button"
                        class="participant-delete"
                        data-removal=id
                        aria-label="Remove participant"
                    >
                        "✕"
                    </button>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="activity-card">
            <h4>{card.name}</h4>
            <p>{card.description}</p>
            <p><strong>"Schedule:"</strong> " " {card.schedule}</p>
            <p><strong>"Availability:"</strong> " " {availability}</p>
            <p><strong>"Participants:"</strong></p>
            <ul class="participants-list-ul">{participants}</ul>
        </div>
    }
}
