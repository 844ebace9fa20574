//! Reqwest-backed recommendation service adapter.
//!
//! Owns transport details only: URL building, the GET itself, and JSON
//! decoding. Status codes are passed through untouched.

use super::{RecommendationService, ServiceReply, HEALTH_PATH, RECOMMENDATIONS_PATH};
use crate::model::{AppError, MemberId, TransportError};
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::debug;

/// Parse and normalise the configured base URL.
///
/// Only `http` and `https` are accepted. The path always ends with `/` so
/// that endpoint paths join below it instead of replacing its last segment.
pub fn parse_base_url(raw: &str) -> Result<Url, AppError> {
    let mut url = Url::parse(raw.trim()).map_err(|e| AppError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme {:?}", url.scheme()),
        });
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Recommendation service reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpRecommendationService {
    client: Client,
    base_url: Url,
}

impl HttpRecommendationService {
    /// Build an adapter for `base_url`.
    ///
    /// `timeout` of `None` means requests may wait forever, leaving the
    /// controller busy until the server answers.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    /// Normalised root that endpoint paths are joined onto.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/recommendations/{member_id}`
    pub fn recommendations_url(&self, member_id: MemberId) -> Result<Url, TransportError> {
        self.endpoint(&format!("{RECOMMENDATIONS_PATH}/{member_id}"))
    }

    /// `{base}/health`
    pub fn health_url(&self) -> Result<Url, TransportError> {
        self.endpoint(HEALTH_PATH)
    }

    fn endpoint(&self, path: &str) -> Result<Url, TransportError> {
        self.base_url
            .join(path)
            .map_err(|e| TransportError::Request {
                url: format!("{}{path}", self.base_url),
                reason: e.to_string(),
            })
    }

    async fn get_json(&self, url: Url) -> Result<ServiceReply, TransportError> {
        debug!(%url, "GET");
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| map_transport_error(&url, e))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| map_transport_error(&url, e))?;

        let body = serde_json::from_slice(&body).map_err(|e| TransportError::Decode {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        debug!(%url, status, "reply decoded");
        Ok(ServiceReply::new(status, body))
    }
}

#[async_trait]
impl RecommendationService for HttpRecommendationService {
    async fn fetch_recommendations(
        &self,
        member_id: MemberId,
    ) -> Result<ServiceReply, TransportError> {
        let url = self.recommendations_url(member_id)?;
        self.get_json(url).await
    }

    async fn fetch_health(&self) -> Result<ServiceReply, TransportError> {
        let url = self.health_url()?;
        self.get_json(url).await
    }
}

fn map_transport_error(url: &Url, error: reqwest::Error) -> TransportError {
    let reason = if error.is_timeout() {
        format!("timed out: {error}")
    } else {
        error.to_string()
    };
    TransportError::Request {
        url: url.to_string(),
        reason,
    }
}
