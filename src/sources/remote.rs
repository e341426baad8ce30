use crate::models::PropertyRecord;
use crate::sources::decode::{decode_record, decode_records};
use crate::sources::error::SourceError;
use crate::sources::traits::DataSource;
use crate::sources::types::RemoteParams;
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::{debug, info, warn};

/// Listing API over HTTP
pub struct RemoteSource {
    client: Client,
    base: Url,
}

impl RemoteSource {
    /// Create a source with custom connection parameters
    pub fn with_params(params: RemoteParams) -> Result<Self, SourceError> {
        let base = Url::parse(params.base_url.trim()).map_err(|e| SourceError::InvalidUrl {
            url: params.base_url.clone(),
            reason: e.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(SourceError::InvalidUrl {
                url: params.base_url,
                reason: "not a hierarchical URL".into(),
            });
        }

        let client = Client::builder()
            .timeout(params.timeout)
            .user_agent(concat!("estate-tracker/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(SourceError::Client)?;

        Ok(Self { client, base })
    }

    pub fn collection_url(&self) -> Url {
        self.endpoint(&[])
    }

    /// The id is one percent-encoded path segment, so `/` or `?` in it
    /// cannot reach another resource.
    pub fn record_url(&self, id: &str) -> Url {
        self.endpoint(&[id])
    }

    fn endpoint(&self, extra: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("properties").extend(extra);
        }
        url
    }

    async fn get_text(&self, url: &Url) -> Result<(StatusCode, String), SourceError> {
        debug!("Fetching URL: {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| SourceError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|source| SourceError::Request {
            url: url.to_string(),
            source,
        })?;

        debug!("Downloaded {} bytes ({})", body.len(), status);
        Ok((status, body))
    }
}

/// Decode a single-record body, treating a record for another id as missing.
fn decode_requested(id: &str, body: &str) -> Result<PropertyRecord, SourceError> {
    let record = decode_record(body)?;
    if record.id != id {
        warn!("Asked for property {} but got {}", id, record.id);
        return Err(SourceError::NotFound(id.to_string()));
    }
    Ok(record)
}

#[async_trait]
impl DataSource for RemoteSource {
    async fn fetch_all(&self) -> Result<Vec<PropertyRecord>, SourceError> {
        let url = self.collection_url();
        info!("Fetching property listing from {}", url);

        let (status, body) = self.get_text(&url).await?;
        if !status.is_success() {
            warn!("Listing API returned status: {}", status);
            return Err(SourceError::Status {
                url: url.to_string(),
                status,
            });
        }

        let records = decode_records(&body)?;
        info!("Fetched {} properties", records.len());
        Ok(records)
    }

    async fn fetch_one(&self, id: &str) -> Result<PropertyRecord, SourceError> {
        // dot segments are dropped from paths, so these would name the collection
        if matches!(id, "" | "." | "..") {
            return Err(SourceError::NotFound(id.to_string()));
        }

        let url = self.record_url(id);
        let (status, body) = self.get_text(&url).await?;

        if status == StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound(id.to_string()));
        }
        if !status.is_success() {
            warn!("Listing API returned status {} for {}", status, id);
            return Err(SourceError::Status {
                url: url.to_string(),
                status,
            });
        }

        decode_requested(id, &body)
    }

    fn source_name(&self) -> &'static str {
        "Remote API"
    }
}
