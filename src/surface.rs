//! Rendering Surface
//!
//! Where the controller's output lands: the activities container, the
//! message area and the signup form.

use std::cell::{Cell, RefCell};

use crate::notice::Notice;
use crate::view::ViewState;

/// A place the controller can draw on.
///
/// Methods take `&self`; implementations use interior mutability (signals
/// in the browser, cells here) since the controller is shared between
/// in-flight handlers on one thread.
pub trait Surface {
    /// Replace the activities container and selection options wholesale
    fn render(&self, state: &ViewState);

    /// Show a message. The surface hides it after `notice.dismiss_after`.
    fn show_notice(&self, notice: Notice);

    /// Clear the signup form fields
    fn reset_signup_form(&self);
}

/// Surface that keeps the latest output in memory.
///
/// Backs the command-line client and the controller tests.
#[derive(Debug, Default)]
pub struct MemorySurface {
    state: RefCell<ViewState>,
    renders: Cell<usize>,
    notices: RefCell<Vec<Notice>>,
    form_resets: Cell<usize>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view_state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Number of times the container was re-rendered
    pub fn render_count(&self) -> usize {
        self.renders.get()
    }

    pub fn last_notice(&self) -> Option<Notice> {
        self.notices.borrow().last().cloned()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    pub fn form_resets(&self) -> usize {
        self.form_resets.get()
    }
}

impl Surface for MemorySurface {
    fn render(&self, state: &ViewState) {
        *self.state.borrow_mut() = state.clone();
        self.renders.set(self.renders.get() + 1);
    }

    fn show_notice(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }

    fn reset_signup_form(&self) {
        self.form_resets.set(self.form_resets.get() + 1);
    }
}
