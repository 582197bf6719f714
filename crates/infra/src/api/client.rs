//! Platform API client

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shiftboard_core::FeedProvider;
use shiftboard_domain::{ApiConfig, FeedPage, Measurement, Result, ShiftboardError, Upload};
use tracing::{debug, info, instrument, warn};
use url::Url;

use super::errors::ApiError;
use crate::http::HttpClient;

/// The two feeds exposed by the platform's data store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformResource {
    Uploads,
    Measurements,
}

impl PlatformResource {
    fn path_segment(self) -> &'static str {
        match self {
            Self::Uploads => "data_source_uploads",
            Self::Measurements => "consolidated_measurements",
        }
    }

    /// Uploads are read with GET; the measurements listing is a PUT with an
    /// empty JSON body.
    fn method(self) -> Method {
        match self {
            Self::Uploads => Method::GET,
            Self::Measurements => Method::PUT,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Uploads => "data uploads",
            Self::Measurements => "consolidated measurements",
        }
    }
}

/// Client for the vendor platform's data store endpoints
pub struct PlatformClient {
    http: HttpClient,
    config: ApiConfig,
    base_url: Url,
}

impl PlatformClient {
    /// Create a client from the API settings.
    ///
    /// # Errors
    ///
    /// Returns `ShiftboardError::Config` if the base URL or group is invalid,
    /// or the HTTP client cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let http = HttpClient::for_api(&config)?;
        Self::with_http_client(config, http)
    }

    /// Create a client around an existing [`HttpClient`]
    pub fn with_http_client(config: ApiConfig, http: HttpClient) -> Result<Self> {
        let base_url = Url::parse(config.base_url.trim_end_matches('/')).map_err(|err| {
            ShiftboardError::Config(format!("Invalid API base URL '{}': {err}", config.base_url))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ShiftboardError::Config(format!(
                "API base URL cannot carry a path: {}",
                config.base_url
            )));
        }
        if config.group_uuid.trim().is_empty() {
            return Err(ShiftboardError::Config("API group uuid is empty".into()));
        }

        Ok(Self { http, config, base_url })
    }

    /// Full URL of a feed listing, including paging and sort parameters
    pub fn endpoint(&self, resource: PlatformResource) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend([
                "data_store",
                self.config.group_uuid.as_str(),
                resource.path_segment(),
            ]);
        }

        url.query_pairs_mut()
            .append_pair("skip", "0")
            .append_pair("limit", &self.config.page_size.to_string())
            .append_pair("column", "date_created")
            .append_pair("direction", "desc")
            .append_pair("maintenance_mode", "false")
            .append_pair("language", "en");
        url
    }

    /// Fetch a feed listing as untyped JSON, exactly as the platform sent it
    #[instrument(skip_all, fields(resource = resource.label()))]
    pub async fn fetch_raw(&self, resource: PlatformResource) -> std::result::Result<Value, ApiError> {
        let url = self.endpoint(resource);
        debug!(path = url.path(), "requesting platform feed");

        let mut request = self
            .http
            .request(resource.method(), url)
            .header(AUTHORIZATION, format!("Bearer {}", self.config.auth_token));
        if resource.method() == Method::PUT {
            request = request.header(CONTENT_TYPE, "application/json").body("{}");
        }

        let response = self.http.send(request).await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "platform rejected feed request");
            return Err(ApiError::Status { status: status.as_u16(), body });
        }

        let value: Value =
            response.json().await.map_err(|err| ApiError::Decode(err.to_string()))?;
        info!("platform feed received");
        Ok(value)
    }

    pub async fn uploads_raw(&self) -> std::result::Result<Value, ApiError> {
        self.fetch_raw(PlatformResource::Uploads).await
    }

    pub async fn measurements_raw(&self) -> std::result::Result<Value, ApiError> {
        self.fetch_raw(PlatformResource::Measurements).await
    }

    async fn fetch_page<T: DeserializeOwned>(
        &self,
        resource: PlatformResource,
    ) -> std::result::Result<FeedPage<T>, ApiError> {
        let value = self.fetch_raw(resource).await?;
        serde_json::from_value(value).map_err(|err| ApiError::Decode(err.to_string()))
    }
}

#[async_trait]
impl FeedProvider for PlatformClient {
    async fn fetch_uploads(&self) -> Result<FeedPage<Upload>> {
        Ok(self.fetch_page(PlatformResource::Uploads).await?)
    }

    async fn fetch_measurements(&self) -> Result<FeedPage<Measurement>> {
        Ok(self.fetch_page(PlatformResource::Measurements).await?)
    }
}
