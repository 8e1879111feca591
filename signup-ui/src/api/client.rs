//! HTTP API Client
//!
//! `ActivityApi` over the browser's fetch, via gloo-net.

use activity_signup::api::routes;
use activity_signup::{ActivityApi, ApiError, ApiResult, Catalog, Receipt};
use async_trait::async_trait;
use gloo_net::http::{Request, Response};

/// Default API base URL: the page's own origin
pub const DEFAULT_API_BASE: &str = "";

/// Local storage key that overrides the API base URL
pub const API_URL_KEY: &str = "signup_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    routes::normalize_base(&url)
}

/// Activities endpoint client for the browser
#[derive(Debug, Clone)]
pub struct GlooActivityApi {
    base_url: String,
}

impl GlooActivityApi {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: routes::normalize_base(base_url.as_ref()),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn check(response: Response) -> ApiResult<Response> {
        if response.ok() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::rejected(response.status(), &body))
    }

    async fn receipt(response: Response) -> ApiResult<Receipt> {
        Self::check(response)
            .await?
            .json::<Receipt>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(format!("Network error: {}", e))
}

#[async_trait(?Send)]
impl ActivityApi for GlooActivityApi {
    async fn fetch_catalog(&self) -> ApiResult<Catalog> {
        let response = Request::get(&self.url(routes::CATALOG_PATH))
            .send()
            .await
            .map_err(network)?;

        Self::check(response)
            .await?
            .json::<Catalog>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn signup(&self, activity: &str, email: &str) -> ApiResult<Receipt> {
        let response = Request::post(&self.url(&routes::signup_path(activity, email)))
            .send()
            .await
            .map_err(network)?;

        Self::receipt(response).await
    }

    async fn unregister(&self, activity: &str, email: &str) -> ApiResult<Receipt> {
        let response = Request::delete(&self.url(&routes::unregister_path(activity, email)))
            .send()
            .await
            .map_err(network)?;

        Self::receipt(response).await
    }
}
