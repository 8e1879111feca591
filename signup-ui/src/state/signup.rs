//! Page State
//!
//! Reactive state behind the signup page. Implements the controller's
//! rendering surface with Leptos signals.

use activity_signup::{ActivityController, Notice, Surface, ViewState};
use leptos::*;
use std::rc::Rc;

use crate::api::GlooActivityApi;

/// Controller shared by every handler on the page
pub type Controller = Rc<ActivityController<GlooActivityApi, SignupState>>;

/// Signals the page renders from
#[derive(Clone, Copy)]
pub struct SignupState {
    /// Activities container contents
    pub view: RwSignal<ViewState>,
    /// Message area contents; `None` hides it
    pub notice: RwSignal<Option<Notice>>,
    /// Signup form: email field
    pub email: RwSignal<String>,
    /// Signup form: selected activity
    pub activity: RwSignal<String>,
}

/// Provide page state to the component tree
pub fn provide_signup_state() -> SignupState {
    let state = SignupState {
        view: create_rw_signal(ViewState::Loading),
        notice: create_rw_signal(None),
        email: create_rw_signal(String::new()),
        activity: create_rw_signal(String::new()),
    };

    provide_context(state);
    state
}

impl SignupState {
    /// Activity names for the selection control
    pub fn options(&self) -> Vec<String> {
        self.view.with(|view| {
            view.catalog()
                .map(|catalog| catalog.options.clone())
                .unwrap_or_default()
        })
    }

    fn offers(&self, name: &str) -> bool {
        self.view.with_untracked(|view| {
            view.catalog()
                .is_some_and(|catalog| catalog.options.iter().any(|o| o == name))
        })
    }
}

impl Surface for SignupState {
    fn render(&self, state: &ViewState) {
        self.view.set(state.clone());

        // The rebuilt select falls back to the placeholder when the choice is gone
        let selected = self.activity.get_untracked();
        if !selected.is_empty() && !self.offers(&selected) {
            self.activity.set(String::new());
        }
    }

    fn show_notice(&self, notice: Notice) {
        let millis = u32::try_from(notice.dismiss_after.as_millis()).unwrap_or(u32::MAX);
        self.notice.set(Some(notice));

        // Each notice arms its own timer; an older one may hide a newer message
        let notice_signal = self.notice;
        gloo_timers::callback::Timeout::new(millis, move || {
            notice_signal.set(None);
        })
        .forget();
    }

    fn reset_signup_form(&self) {
        self.email.set(String::new());
        self.activity.set(String::new());
    }
}
