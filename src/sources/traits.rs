use crate::models::PropertyRecord;
use crate::sources::error::SourceError;
use async_trait::async_trait;

/// Common trait for everything that can supply the raw listing collection.
/// The engine always receives the full set; no filtering happens here.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch every record for the current view
    async fn fetch_all(&self) -> Result<Vec<PropertyRecord>, SourceError>;

    /// Fetch a single record for the detail view
    async fn fetch_one(&self, id: &str) -> Result<PropertyRecord, SourceError>;

    /// Get the name of the source
    fn source_name(&self) -> &'static str;
}
