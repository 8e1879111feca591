//! Activities API
//!
//! Browser implementation of the activities endpoint seam.

pub mod client;

pub use client::{get_api_base, GlooActivityApi};
