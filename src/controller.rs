//! Activity Controller
//!
//! Keeps a surface in sync with the server's catalog and relays signup and
//! unregister intents.
//!
//! Every mutation that succeeds is followed by a full re-fetch of the
//! catalog; the surface is never patched incrementally. Overlapping
//! re-fetches are not ordered, so whichever response arrives last is what
//! stays on screen.
//!
//! ```rust,ignore
//! let controller = ActivityController::new(api, surface, NoticeTimings::default());
//! controller.start().await;
//! controller.submit_signup("a@x.com", "Chess Club").await;
//! ```

use std::cell::{Cell, RefCell};

use crate::api::ActivityApi;
use crate::notice::{self, Notice, NoticeTimings};
use crate::surface::Surface;
use crate::view::{CatalogView, RemovalTarget, ViewState};

/// One per page. Owns the API handle and the surface it draws on.
pub struct ActivityController<A, S> {
    api: A,
    surface: S,
    timings: NoticeTimings,
    /// Removal affordances of the latest render, for click dispatch
    rendered: RefCell<Vec<RemovalTarget>>,
    detached: Cell<bool>,
}

impl<A: ActivityApi, S: Surface> ActivityController<A, S> {
    pub fn new(api: A, surface: S, timings: NoticeTimings) -> Self {
        Self {
            api,
            surface,
            timings,
            rendered: RefCell::new(Vec::new()),
            detached: Cell::new(false),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn timings(&self) -> NoticeTimings {
        self.timings
    }

    /// Page-ready: show the loading placeholder, then fetch
    pub async fn start(&self) {
        self.surface.render(&ViewState::Loading);
        self.load_catalog().await;
    }

    /// Re-fetch the catalog and replace whatever is rendered.
    ///
    /// Failures end here: they are logged and the list is replaced with the
    /// failure text.
    pub async fn load_catalog(&self) {
        tracing::debug!("Fetching activity catalog");
        let result = self.api.fetch_catalog().await;

        if self.is_detached() {
            tracing::debug!("Controller detached, dropping catalog response");
            return;
        }

        match result {
            Ok(catalog) => {
                let view = CatalogView::from_catalog(&catalog);
                *self.rendered.borrow_mut() = view.removal_targets().cloned().collect();
                tracing::debug!(activities = catalog.len(), "Rendering activity catalog");
                self.surface.render(&ViewState::Ready(view));
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching activities");
                self.rendered.borrow_mut().clear();
                self.surface.render(&ViewState::Failed);
            }
        }
    }

    /// Sign `email` up for `activity`.
    ///
    /// Values are sent as given; the form controls are the only validation.
    pub async fn submit_signup(&self, email: &str, activity: &str) {
        tracing::debug!(%activity, %email, "Submitting signup");
        let result = self.api.signup(activity, email).await;

        if self.is_detached() {
            tracing::debug!("Controller detached, dropping signup response");
            return;
        }

        let ttl = self.timings.signup;
        match result {
            Ok(receipt) => {
                self.surface
                    .show_notice(Notice::success(receipt.message.unwrap_or_default(), ttl));
                self.surface.reset_signup_form();
                self.load_catalog().await;
            }
            Err(e) if e.is_transport() => {
                tracing::error!(error = %e, %activity, "Error signing up");
                self.surface
                    .show_notice(Notice::error(notice::SIGNUP_TRANSPORT_FAILURE, ttl));
            }
            Err(e) => {
                tracing::warn!(error = %e, %activity, "Signup rejected");
                let text = e.detail().unwrap_or(notice::SIGNUP_REJECTED_FALLBACK);
                self.surface.show_notice(Notice::error(text, ttl));
            }
        }
    }

    /// Dispatch a click on a rendered removal affordance.
    ///
    /// Returns false when `id` does not belong to the current render (a
    /// stale click after a re-render, or a click elsewhere in the list).
    pub async fn handle_removal_click(&self, id: &str) -> bool {
        let target = self
            .rendered
            .borrow()
            .iter()
            .find(|target| target.id() == id)
            .cloned();

        match target {
            Some(target) => {
                self.remove_participant(&target.activity, &target.email).await;
                true
            }
            None => {
                tracing::debug!(%id, "Click did not match a rendered participant");
                false
            }
        }
    }

    /// Unregister `email` from `activity`
    pub async fn remove_participant(&self, activity: &str, email: &str) {
        tracing::debug!(%activity, %email, "Removing participant");
        let result = self.api.unregister(activity, email).await;

        if self.is_detached() {
            tracing::debug!("Controller detached, dropping unregister response");
            return;
        }

        let ttl = self.timings.removal;
        match result {
            Ok(receipt) => {
                let text = receipt
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| notice::REMOVAL_SUCCESS_FALLBACK.to_string());
                self.surface.show_notice(Notice::success(text, ttl));
                self.load_catalog().await;
            }
            Err(e) if e.is_transport() => {
                tracing::error!(error = %e, %activity, "Error removing participant");
                self.surface
                    .show_notice(Notice::error(notice::REMOVAL_TRANSPORT_FAILURE, ttl));
            }
            Err(e) => {
                tracing::warn!(error = %e, %activity, "Unregister rejected");
                let text = e.detail().unwrap_or(notice::REMOVAL_REJECTED_FALLBACK);
                self.surface.show_notice(Notice::error(text, ttl));
            }
        }
    }

    /// Identifiers of the removal affordances currently on screen
    pub fn rendered_removals(&self) -> Vec<RemovalTarget> {
        self.rendered.borrow().clone()
    }

    /// Teardown. Responses still in flight are dropped instead of rendered.
    pub fn detach(&self) {
        tracing::debug!("Detaching activity controller");
        self.detached.set(true);
        self.rendered.borrow_mut().clear();
    }

    pub fn is_detached(&self) -> bool {
        self.detached.get()
    }
}
