//! # Activity Signup
//!
//! Client for an activity-signup service: shows the activity catalog, signs
//! participants up and removes them, re-fetching the catalog after every
//! change.
//!
//! ## Modules
//!
//! - [`catalog`]: Wire model of the `GET /activities` payload
//! - [`view`]: What a surface draws for a catalog
//! - [`notice`]: Transient success/error messages
//! - [`api`]: The HTTP+JSON collaborator seam and its reqwest implementation
//! - [`surface`]: The rendering seam
//! - [`controller`]: Ties the two seams together
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use activity_signup::{ActivityController, Config, HttpActivityApi, MemorySurface};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let api = HttpActivityApi::new(&config.api)?;
//!     let controller = ActivityController::new(api, MemorySurface::new(), config.notices.timings());
//!
//!     controller.start().await;
//!     controller.submit_signup("a@x.com", "Chess Club").await;
//!
//!     println!("{}", controller.surface().view_state().text_content());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod notice;
pub mod surface;
pub mod view;

pub use api::{ActivityApi, ApiError, ApiResult, Receipt};
#[cfg(feature = "native")]
pub use api::HttpActivityApi;

pub use catalog::{Activity, Catalog};

pub use config::{ApiConfig, Config, ConfigError, LoadReport, LoggingConfig, NoticeConfig};

pub use controller::ActivityController;

pub use notice::{Notice, NoticeKind, NoticeTimings};

pub use surface::{MemorySurface, Surface};

pub use view::{ActivityCard, CatalogView, ParticipantRow, RemovalTarget, ViewState};
