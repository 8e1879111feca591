//! reqwest-backed Activities Client

use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;

use super::error::{ApiError, ApiResult};
use super::routes;
use super::{ActivityApi, Receipt};
use crate::catalog::Catalog;
use crate::config::ApiConfig;

/// HTTP client for the activities endpoint
pub struct HttpActivityApi {
    client: Client,
    base_url: String,
}

impl HttpActivityApi {
    /// Create a client with the given configuration
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: routes::normalize_base(&config.base_url),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn receipt(response: Response) -> ApiResult<Receipt> {
        let response = Self::check(response).await?;
        response
            .json::<Receipt>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Turn a non-success status into a rejection carrying the server detail
    async fn check(response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::rejected(status.as_u16(), &body))
    }
}

fn transport(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Transport("request timed out".to_string())
    } else {
        ApiError::Transport(e.to_string())
    }
}

#[async_trait(?Send)]
impl ActivityApi for HttpActivityApi {
    async fn fetch_catalog(&self) -> ApiResult<Catalog> {
        let response = self
            .client
            .get(self.url(routes::CATALOG_PATH))
            .send()
            .await
            .map_err(transport)?;

        Self::check(response)
            .await?
            .json::<Catalog>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn signup(&self, activity: &str, email: &str) -> ApiResult<Receipt> {
        let response = self
            .client
            .post(self.url(&routes::signup_path(activity, email)))
            .send()
            .await
            .map_err(transport)?;

        Self::receipt(response).await
    }

    async fn unregister(&self, activity: &str, email: &str) -> ApiResult<Receipt> {
        let response = self
            .client
            .delete(self.url(&routes::unregister_path(activity, email)))
            .send()
            .await
            .map_err(transport)?;

        Self::receipt(response).await
    }
}
