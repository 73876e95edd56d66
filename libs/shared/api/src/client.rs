use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client, Method, StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error};

use shared_config::AppConfig;

/// Failure talking to the turnero REST API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API answered with a non-success status. `message` is the
    /// human-readable text extracted from the error body.
    #[error("API error ({status}): {message}")]
    Api { status: StatusCode, message: String },

    /// The request never produced a usable answer: connection refused,
    /// malformed body, and similar.
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
}

impl ApiError {
    /// Text suitable for a user-facing toast. Transport failures carry no
    /// server message, so those fall back to the caller's wording.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Api { message, .. } => message.clone(),
            ApiError::Request(_) => fallback.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ApiError::Api {
                status: StatusCode::NOT_FOUND,
                ..
            }
        )
    }
}

pub struct TurneroClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl TurneroClient {
    pub fn new(config: &AppConfig) -> Self {
        let token = if config.turnero_api_token.is_empty() {
            None
        } else {
            Some(config.turnero_api_token.clone())
        };

        Self {
            client: Client::new(),
            base_url: config.turnero_api_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = &self.token {
            if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", token)) {
                headers.insert(AUTHORIZATION, value);
            }
        }

        headers
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<reqwest::Response, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("Making request to {}", url);

        let mut req = self.client.request(method, &url).headers(self.headers());

        if let Some(body_data) = body {
            req = req.json(&body_data);
        }

        let response = req.send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("API error ({}): {}", status, error_text);

            return Err(ApiError::Api {
                status,
                message: extract_detail(&error_text, status),
            });
        }

        Ok(response)
    }

    pub async fn request<T>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = self.send(method, path, body).await?;
        let data = response.json::<T>().await?;
        Ok(data)
    }

    /// Like [`request`](Self::request) but discards the response body.
    /// DELETE endpoints answer with ad-hoc ack payloads we do not model.
    pub async fn request_empty(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<(), ApiError> {
        self.send(method, path, body).await?;
        Ok(())
    }
}

/// FastAPI error bodies look like `{"detail": "..."}`. Anything else falls
/// back to the raw body, then to the status line.
fn extract_detail(body: &str, status: StatusCode) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Some(detail) = value.get("detail").and_then(|d| d.as_str()) {
            return detail.to_string();
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {}", status)
    } else {
        trimmed.to_string()
    }
}
