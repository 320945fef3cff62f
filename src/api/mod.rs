//! Single choke point for talking to the QuestionGen backend.
//!
//! Every request goes through [`ApiClient`] so request construction stays in
//! one place: base-address resolution, the JSON content type, and the bearer
//! credential when a session token exists. Responses are negotiated by their
//! declared content type (JSON is parsed, anything else is raw text) and
//! non-success statuses collapse into a single [`ApiError::Status`] message
//! regardless of which error shape the backend chose.
//!
//! The token is a constructor input, never read from ambient storage here;
//! callers decide where it comes from. The client does not retry, cache, or
//! queue anything.

pub mod download;
pub mod error;

pub use download::Download;
pub use error::ApiError;

use reqwest::header::{HeaderMap, CONTENT_DISPOSITION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use url::Url;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
// Question generation waits on an AI provider; allow it to take a while.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Response body after content-type negotiation.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiBody {
    Json(Value),
    Text(String),
}

impl ApiBody {
    /// Convert into a JSON value; raw text becomes a JSON string.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Json(value) => value,
            Self::Text(text) => Value::String(text),
        }
    }

}

/// HTTP client for the backend API.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<SecretString>,
}

impl ApiClient {
    /// Build a client for the given base address.
    ///
    /// The session token, when present, is attached to every request as a
    /// bearer credential. With no token the Authorization header is omitted
    /// entirely.
    ///
    /// # Errors
    /// Returns an error if the base address is not an http(s) URL or the
    /// underlying HTTP client cannot be constructed.
    pub fn new(base_url: &str, token: Option<SecretString>) -> Result<Self, ApiError> {
        let parsed = Url::parse(base_url).map_err(|err| ApiError::InvalidUrl(err.to_string()))?;
        match parsed.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(ApiError::InvalidUrl(format!(
                    "unsupported scheme {scheme}"
                )))
            }
        }

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Resolve a relative path against the configured base address.
    #[must_use]
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Execute a JSON request.
    ///
    /// # Errors
    /// Returns [`ApiError::Status`] for non-2xx responses, with the message
    /// resolved from the body (`error`, then `message`), the status phrase,
    /// or the fixed fallback.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<ApiBody, ApiError> {
        self.request_with_headers(method, path, body, None).await
    }

    /// Execute a JSON request with extra headers merged over the defaults.
    ///
    /// Caller headers win on conflict; the JSON content type and the bearer
    /// credential stay in place otherwise.
    ///
    /// # Errors
    /// Same failure surface as [`ApiClient::request`].
    pub async fn request_with_headers(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        headers: Option<HeaderMap>,
    ) -> Result<ApiBody, ApiError> {
        let url = self.endpoint_url(path);
        debug!("api request: {} {}", method, url);

        let response = self.build_request(method, &url, body, headers).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = read_error_body(response).await;
            return Err(error::status_error(status, &body));
        }

        if is_json_response(&response) {
            let text = response.text().await?;
            Ok(ApiBody::Json(serde_json::from_str(&text)?))
        } else {
            Ok(ApiBody::Text(response.text().await?))
        }
    }

    /// GET a path and negotiate the body.
    ///
    /// # Errors
    /// Same failure surface as [`ApiClient::request`].
    pub async fn get(&self, path: &str) -> Result<ApiBody, ApiError> {
        self.request(Method::GET, path, None).await
    }

    /// POST a serializable payload and negotiate the body.
    ///
    /// # Errors
    /// Same failure surface as [`ApiClient::request`], plus encoding errors
    /// for the payload itself.
    pub async fn post<B>(&self, path: &str, body: &B) -> Result<ApiBody, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let value = serde_json::to_value(body)?;
        self.request(Method::POST, path, Some(&value)).await
    }

    /// Fetch a binary artifact, preserving its bytes unmodified.
    ///
    /// Shares request construction with the JSON path; the result carries the
    /// `Content-Disposition` filename hint when the server sent one.
    ///
    /// # Errors
    /// Non-2xx responses resolve to the same [`ApiError::Status`] message as
    /// JSON requests.
    pub async fn fetch_binary(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Download, ApiError> {
        let url = self.endpoint_url(path);
        debug!("api download: {} {}", method, url);

        let response = self.build_request(method, &url, body, None).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = read_error_body(response).await;
            return Err(error::status_error(status, &body));
        }

        let filename = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok())
            .and_then(download::filename_from_disposition);

        let bytes = response.bytes().await?;

        Ok(Download { filename, bytes })
    }

    fn build_request(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
        headers: Option<HeaderMap>,
    ) -> RequestBuilder {
        let mut request = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = &self.token {
            request = request.bearer_auth(token.expose_secret());
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        if let Some(headers) = headers {
            request = request.headers(headers);
        }

        request
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("has_token", &self.token.is_some())
            .finish()
    }
}

fn is_json_response(response: &Response) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.contains("application/json"))
}

// Error bodies are read best-effort: a JSON content type that fails to parse
// degrades to text so the status phrase still wins.
async fn read_error_body(response: Response) -> ApiBody {
    let is_json = is_json_response(&response);
    let text = response.text().await.unwrap_or_default();

    if is_json {
        serde_json::from_str(&text)
            .map(ApiBody::Json)
            .unwrap_or(ApiBody::Text(text))
    } else {
        ApiBody::Text(text)
    }
}
