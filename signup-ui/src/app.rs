//! App Root Component
//!
//! Builds the page controller once, provides it to the components and
//! detaches it when the page is torn down.

use activity_signup::{ActivityController, NoticeConfig};
use leptos::*;
use std::rc::Rc;

use crate::api::{self, GlooActivityApi};
use crate::components::{ActivityList, MessageArea, SignupForm};
use crate::state::{provide_signup_state, Controller};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = provide_signup_state();

    let controller: Controller = Rc::new(ActivityController::new(
        GlooActivityApi::new(api::get_api_base()),
        state,
        NoticeConfig::default().timings(),
    ));
    provide_context(controller.clone());

    {
        let controller = controller.clone();
        spawn_local(async move {
            controller.start().await;
        });
    }

    on_cleanup(move || controller.detach());

    view! {
        <header>
            <h1>"Extracurricular Activities"</h1>
        </header>

        <main>
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <ActivityList />
            </section>

            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupForm />
                <MessageArea />
            </section>
        </main>
    }
}
