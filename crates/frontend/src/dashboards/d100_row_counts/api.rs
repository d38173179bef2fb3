use crate::dashboards::d100_row_counts::config::PanelConfig;
use crate::shared::timeout::with_timeout;
use async_trait::async_trait;
use contracts::dashboards::d100_row_counts::RowCountResponse;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use std::time::Duration;
use thiserror::Error;

/// Failure to obtain a usable payload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Failed to read response body: {0}")]
    Body(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Request timed out after {0} ms")]
    Timeout(u32),
}

/// Where the panel gets its data from
#[async_trait(?Send)]
pub trait RowCountSource {
    async fn fetch_row_counts(&self) -> Result<RowCountResponse, TransportError>;
}

#[async_trait(?Send)]
impl<S: RowCountSource + ?Sized> RowCountSource for &S {
    async fn fetch_row_counts(&self) -> Result<RowCountResponse, TransportError> {
        (**self).fetch_row_counts().await
    }
}

/// Decode a response body into the typed payload
pub fn decode_row_counts(body: &str) -> Result<RowCountResponse, TransportError> {
    serde_json::from_str(body).map_err(|e| TransportError::Decode(e.to_string()))
}

/// GET of the row-counts endpoint through `fetch`
#[derive(Debug, Clone)]
pub struct HttpRowCountSource {
    url: String,
    timeout: Option<Duration>,
}

impl HttpRowCountSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: None,
        }
    }

    pub fn from_config(config: &PanelConfig) -> Self {
        Self {
            url: config.request_url(),
            timeout: config.request_timeout,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn request(&self) -> Result<RowCountResponse, TransportError> {
        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        // The body decides between success and error, the status is informational
        if !response.ok() {
            log::warn!("GET {} answered HTTP {}", self.url, response.status());
        }

        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        decode_row_counts(&body)
    }
}

#[async_trait(?Send)]
impl RowCountSource for HttpRowCountSource {
    async fn fetch_row_counts(&self) -> Result<RowCountResponse, TransportError> {
        let Some(limit) = self.timeout else {
            return self.request().await;
        };

        let millis = u32::try_from(limit.as_millis()).unwrap_or(u32::MAX);
        with_timeout(self.request(), TimeoutFuture::new(millis))
            .await
            .unwrap_or(Err(TransportError::Timeout(millis)))
    }
}
