use crate::error::{ApiError, Result};
use crate::model::CarRecord;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use url::Url;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Thin client over the catalog REST surface: `GET /cars` and `GET /cars/{id}`.
#[derive(Debug, Clone)]
pub struct ShowroomClient {
    client: Client,
    base_url: String,
}

impl ShowroomClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidUrl(format!(
                "{}: unsupported scheme '{}'",
                base_url,
                parsed.scheme()
            )));
        }

        let client = Client::builder()
            .user_agent(concat!("Showroom/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs((timeout_secs / 2).max(1)))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn catalog_url(&self) -> String {
        format!("{}/cars", self.base_url)
    }

    pub fn detail_url(&self, id: u32) -> String {
        format!("{}/cars/{}", self.base_url, id)
    }

    /// Fetch the full catalog.
    pub async fn fetch_catalog(&self) -> Result<Vec<CarRecord>> {
        let url = self.catalog_url();
        let body = self.get_body(&url).await?;
        let cars: Vec<CarRecord> = serde_json::from_str(&body)?;
        info!("Loaded {} cars from {}", cars.len(), url);
        Ok(cars)
    }

    /// Fetch a single car. A 404 maps to [`ApiError::NotFound`].
    pub async fn fetch_detail(&self, id: u32) -> Result<CarRecord> {
        let url = self.detail_url(id);
        let body = match self.get_body(&url).await {
            Err(ApiError::Status { status: 404, .. }) => return Err(ApiError::NotFound(id)),
            other => other?,
        };
        let car: CarRecord = serde_json::from_str(&body)?;
        Ok(car)
    }

    async fn get_body(&self, url: &str) -> Result<String> {
        debug!("Fetching {}", url);

        let start = Instant::now();
        let response = self.client.get(url).send().await?;
        let status = response.status();
        debug!("{} -> {} in {:?}", url, status, start.elapsed());

        if !status.is_success() {
            warn!("Request to {} failed with status {}", url, status);
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
