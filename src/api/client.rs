use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use crate::credentials::CredentialStore;

/// The one failure shape every API call produces. Callers match on `status`:
/// `0` means the request never reached the backend (connection or encoding
/// failure), anything else is the real HTTP status code.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub status: u16,
    /// Parsed response body, kept for diagnostics when the backend sent one.
    pub body: Option<Value>,
}

impl ApiError {
    fn before_send(message: String) -> Self {
        Self {
            message,
            status: 0,
            body: None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
    credentials: Arc<dyn CredentialStore>,
}

impl ApiClient {
    pub fn new(base_url: &str, credentials: Arc<dyn CredentialStore>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            credentials,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::GET, path, None, None)
    }

    pub fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(Method::POST, path, Some(encode_body(body)?), None)
    }

    pub fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(Method::PUT, path, Some(encode_body(body)?), None)
    }

    pub fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(Method::PATCH, path, Some(encode_body(body)?), None)
    }

    pub fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::DELETE, path, None, None)
    }

    /// Issue a request and resolve to the unwrapped payload.
    ///
    /// `headers` are merged on top of the defaults, so a caller can override
    /// anything but the bearer token, which is always taken from the
    /// credential store when present.
    pub fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        headers: Option<HeaderMap>,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(target: "api", "{} {}", method, url);

        let mut request = self
            .client
            .request(method, url.as_str())
            .header(CONTENT_TYPE, "application/json");
        if let Some(overrides) = headers {
            request = request.headers(overrides);
        }
        if let Some(token) = self.credentials.token() {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(body) = body {
            let wire = serde_json::to_string(&body)
                .map_err(|e| ApiError::before_send(format!("Failed to encode request body: {e}")))?;
            request = request.body(wire);
        }

        let response = request.send().map_err(|e| self.transport_error(e))?;
        let status = response.status().as_u16();
        let text = response.text().map_err(|e| ApiError {
            message: format!("Failed to read response body: {e}"),
            status,
            body: None,
        })?;

        if !(200..300).contains(&status) {
            return Err(http_error(status, &text));
        }

        let parsed: Value = serde_json::from_str(&text).map_err(|_| ApiError {
            message: if text.trim().is_empty() {
                format!("Request failed with status {status}")
            } else {
                text.clone()
            },
            status,
            body: None,
        })?;

        serde_json::from_value(unwrap_payload(parsed)).map_err(|e| ApiError {
            message: format!("Unexpected response shape: {e}"),
            status,
            body: None,
        })
    }

    fn transport_error(&self, err: reqwest::Error) -> ApiError {
        let detail = err.to_string();
        let message = if err.is_connect() || detail.contains("Connection refused") {
            format!(
                "Cannot connect to the server at {} (connection refused)",
                self.base_url
            )
        } else {
            format!("Network error while contacting {}: {detail}", self.base_url)
        };
        ApiError {
            message,
            status: 0,
            body: None,
        }
    }
}

fn encode_body<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body)
        .map_err(|e| ApiError::before_send(format!("Failed to encode request body: {e}")))
}

/// Build the typed error for a non-2xx reply. The backend's own `error` or
/// `message` field wins; an unparseable body is passed through verbatim.
fn http_error(status: u16, text: &str) -> ApiError {
    match serde_json::from_str::<Value>(text) {
        Ok(body) => {
            let message = body
                .get("error")
                .and_then(Value::as_str)
                .or_else(|| body.get("message").and_then(Value::as_str))
                .unwrap_or("Request failed")
                .to_string();
            ApiError {
                message,
                status,
                body: Some(body),
            }
        }
        Err(_) => ApiError {
            message: if text.trim().is_empty() {
                format!("Request failed with status {status}")
            } else {
                text.to_string()
            },
            status,
            body: None,
        },
    }
}

/// Unwrap the backend's response envelope.
///
/// Replies come in two shapes: `{success, data, message, error}` or the bare
/// payload itself. A `data` key under a declared success wins, then a `data`
/// key regardless of the flag, then the parsed body as-is.
fn unwrap_payload(parsed: Value) -> Value {
    let Some(envelope) = parsed.as_object() else {
        return parsed;
    };
    if matches!(envelope.get("success"), Some(Value::Bool(true))) {
        if let Some(data) = envelope.get("data") {
            return data.clone();
        }
    }
    if let Some(data) = envelope.get("data") {
        return data.clone();
    }
    parsed
}
