//! UI Components

pub mod activity_list;
pub mod loading;
pub mod message;
pub mod signup_form;

pub use activity_list::ActivityList;
pub use loading::Loading;
pub use message::MessageArea;
pub use signup_form::SignupForm;
