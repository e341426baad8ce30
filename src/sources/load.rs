use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::models::PropertyRecord;
use crate::sources::traits::DataSource;

/// The collection as it was fetched for one view
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub records: Vec<PropertyRecord>,
    pub source: &'static str,
    pub fetched_at: DateTime<Utc>,
}

/// Where the one-shot fetch for a view stands
#[derive(Debug, Clone)]
pub enum LoadState {
    Loading,
    Loaded(Snapshot),
    /// The fetch failed; distinct from a successful load with no records
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        match self {
            LoadState::Loaded(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn into_records(self) -> Option<Vec<PropertyRecord>> {
        match self {
            LoadState::Loaded(snapshot) => Some(snapshot.records),
            _ => None,
        }
    }
}

/// Run the fetch and fold any failure into `LoadState::Failed`.
pub async fn load(source: &dyn DataSource) -> LoadState {
    match source.fetch_all().await {
        Ok(records) => {
            info!(
                "Loaded {} properties from {}",
                records.len(),
                source.source_name()
            );
            LoadState::Loaded(Snapshot {
                records,
                source: source.source_name(),
                fetched_at: Utc::now(),
            })
        }
        Err(e) => {
            warn!("Failed to load properties from {}: {}", source.source_name(), e);
            LoadState::Failed(e.to_string())
        }
    }
}
