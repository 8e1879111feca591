//! State Management

pub mod signup;

pub use signup::{provide_signup_state, Controller, SignupState};
