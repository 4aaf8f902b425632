//! HTTP transport — blocking reqwest client with timeouts and error mapping.

pub mod protocol;

use std::time::Duration;

use serde::de::DeserializeOwned;

use causeway_core::errors::ClientError;
use causeway_core::{PanelResult, ServiceConfig};

/// Blocking HTTP client bound to the inference service's base URL.
#[derive(Debug)]
pub struct HttpClient {
    inner: reqwest::blocking::Client,
    base_url: String,
}

impl HttpClient {
    /// Build a client from service config. Fails on an unusable TLS or
    /// timeout configuration.
    pub fn new(config: &ServiceConfig) -> PanelResult<Self> {
        let inner = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| ClientError::InvalidConfig {
                reason: e.to_string(),
            })?;
        Ok(Self {
            inner,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL this client posts to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST form fields to `path`, decoding the JSON response body.
    ///
    /// Network failures, non-success statuses, and undecodable bodies each
    /// map to their own `ClientError` variant so the caller can surface a
    /// retryable error instead of dropping it.
    pub fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        fields: &[(String, String)],
    ) -> PanelResult<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("client: POST {url} ({} fields)", fields.len());

        let response = self
            .inner
            .post(&url)
            .form(fields)
            .send()
            .map_err(|e| ClientError::NetworkError {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("client: POST {url} returned {status}");
            return Err(ClientError::ServiceError {
                status: status.as_u16(),
                reason: response.text().unwrap_or_default(),
            }
            .into());
        }

        response.json::<T>().map_err(|e| {
            ClientError::DecodeError {
                reason: e.to_string(),
            }
            .into()
        })
    }
}
