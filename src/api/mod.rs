//! Activities API
//!
//! The collaborator endpoint the controller talks to.
//!
//! # Endpoints
//!
//! - `GET /activities` - Full catalog
//! - `POST /activities/{name}/signup?email={email}` - Sign a participant up
//! - `DELETE /activities/{name}/unregister?email={email}` - Remove a participant
//!
//! [`ActivityApi`] is the seam; [`HttpActivityApi`] implements it with
//! reqwest on native targets and the browser frontend supplies its own.

pub mod error;
pub mod routes;

#[cfg(feature = "native")]
pub mod http;

pub use error::{ApiError, ApiResult};
#[cfg(feature = "native")]
pub use http::HttpActivityApi;

use async_trait::async_trait;
use serde::Deserialize;

use crate::catalog::Catalog;

/// Read and mutate the activity catalog.
///
/// Futures are `?Send` so implementations can sit on the browser's
/// single-threaded event loop.
#[async_trait(?Send)]
pub trait ActivityApi {
    /// `GET /activities`
    async fn fetch_catalog(&self) -> ApiResult<Catalog>;

    /// `POST /activities/{activity}/signup?email={email}`
    async fn signup(&self, activity: &str, email: &str) -> ApiResult<Receipt>;

    /// `DELETE /activities/{activity}/unregister?email={email}`
    async fn unregister(&self, activity: &str, email: &str) -> ApiResult<Receipt>;
}

/// Success body of a mutation
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Receipt {
    #[serde(default)]
    pub message: Option<String>,
}

impl Receipt {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}
