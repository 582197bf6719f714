//! reqwest wrapper used for every call to the vendor platform

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response, StatusCode};
use shiftboard_domain::constants::{DEFAULT_API_MAX_ATTEMPTS, DEFAULT_API_TIMEOUT_SECS};
use shiftboard_domain::{ApiConfig, ShiftboardError};
use tracing::{debug, warn};

use crate::errors::InfraError;

const USER_AGENT: &str = concat!("shiftboard/", env!("CARGO_PKG_VERSION"));
const DEFAULT_BASE_BACKOFF: Duration = Duration::from_millis(200);
// Caps the backoff doubling at base * 2^8.
const MAX_BACKOFF_DOUBLINGS: u32 = 8;

/// How many times a request is tried and how long to wait in between
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: usize,
    pub base_backoff: Duration,
}

impl RetryPolicy {
    /// Delay before retry number `retry` (1-based): base, 2*base, 4*base, ...
    pub fn delay(&self, retry: usize) -> Duration {
        let doublings = (retry.saturating_sub(1) as u32).min(MAX_BACKOFF_DOUBLINGS);
        self.base_backoff.saturating_mul(1u32 << doublings)
    }

    fn retries_status(status: StatusCode) -> bool {
        status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
    }

    fn retries_error(err: &reqwest::Error) -> bool {
        err.is_timeout() || err.is_connect() || err.is_request()
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_attempts: DEFAULT_API_MAX_ATTEMPTS, base_backoff: DEFAULT_BASE_BACKOFF }
    }
}

/// HTTP client that retries transient platform failures.
///
/// 5xx, 429, timeouts and refused connections are retried under the
/// [`RetryPolicy`]. Any other response is returned to the caller, including
/// 4xx, so the caller can report the status.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
    policy: RetryPolicy,
}

impl HttpClient {
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Client for the platform API: configured timeout and attempts, and
    /// `Accept: application/json` on every request.
    pub fn for_api(config: &ApiConfig) -> Result<Self, ShiftboardError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Self::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .max_attempts(config.max_attempts)
            .default_headers(headers)
            .build()
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    pub fn request<U: reqwest::IntoUrl>(&self, method: Method, url: U) -> RequestBuilder {
        self.client.request(method, url)
    }

    /// Send `builder`, retrying under the client's policy.
    ///
    /// The final response is returned whatever its status; only transport
    /// failures become errors.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, ShiftboardError> {
        let attempts = self.policy.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            let request = builder
                .try_clone()
                .ok_or_else(|| {
                    ShiftboardError::Internal("streaming request bodies cannot be retried".into())
                })?
                .build()
                .map_err(|err| ShiftboardError::from(InfraError::from(err)))?;
            let method = request.method().clone();
            let path = request.url().path().to_string();
            let retry_allowed = attempt < attempts;

            match self.client.execute(request).await {
                Ok(response) if retry_allowed && RetryPolicy::retries_status(response.status()) => {
                    warn!(attempt, %method, %path, status = %response.status(), "platform busy, retrying");
                }
                Ok(response) => {
                    debug!(attempt, %method, %path, status = %response.status(), "HTTP response");
                    return Ok(response);
                }
                Err(err) if retry_allowed && RetryPolicy::retries_error(&err) => {
                    warn!(attempt, %method, %path, error = %err, "HTTP transport failure, retrying");
                }
                Err(err) => {
                    debug!(attempt, %method, %path, error = %err, "HTTP request failed");
                    return Err(InfraError::from(err).into());
                }
            }

            let delay = self.policy.delay(attempt);
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            attempt += 1;
        }
    }
}

/// Builder for [`HttpClient`]
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    policy: RetryPolicy,
    default_headers: Option<HeaderMap>,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_API_TIMEOUT_SECS),
            policy: RetryPolicy::default(),
            default_headers: None,
        }
    }
}

impl HttpClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Total attempts including the first one; at least 1.
    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.policy.max_attempts = attempts.max(1);
        self
    }

    pub fn base_backoff(mut self, backoff: Duration) -> Self {
        self.policy.base_backoff = backoff;
        self
    }

    pub fn default_headers(mut self, headers: HeaderMap) -> Self {
        self.default_headers = Some(headers);
        self
    }

    pub fn build(self) -> Result<HttpClient, ShiftboardError> {
        let mut builder =
            ReqwestClient::builder().timeout(self.timeout).user_agent(USER_AGENT).no_proxy();
        if let Some(headers) = self.default_headers {
            builder = builder.default_headers(headers);
        }

        let client = builder.build().map_err(|err| ShiftboardError::from(InfraError::from(err)))?;
        Ok(HttpClient { client, policy: self.policy })
    }
}
