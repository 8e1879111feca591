//! Signup Form Component

use leptos::*;

use crate::state::{Controller, SignupState};

#[component]
pub fn SignupForm() -> impl IntoView {
    let state = use_context::<SignupState>().expect("SignupState not found");
    let controller = use_context::<Controller>().expect("Controller not found");

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let email = state.email.get_untracked();
        let activity = state.activity.get_untracked();

        let controller = controller.clone();
        spawn_local(async move {
            controller.submit_signup(&email, &activity).await;
        });
    };

    view! {
        <form id="signup-form" on:submit=on_submit>
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    required
                    placeholder="your-email@school.edu"
                    prop:value=move || state.email.get()
                    on:input=move |ev| state.email.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <select
                    id="activity"
                    required
                    prop:value=move || state.activity.get()
                    on:change=move |ev| state.activity.set(event_target_value(&ev))
                >
                    <option value="">"-- Select an activity --"</option>
                    {move || {
                        state
                            .options()
                            .into_iter()
                            .map(|name| {
                                let value = name.clone();
                                view! {
                                    <option
                                        value=name.clone()
                                        prop:selected=move || state.activity.with(|a| *a == value)
                                    >
                                        {name}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </div>
            <button type="submit">"Sign Up"</button>
        </form>
    }
}
