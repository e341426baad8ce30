use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Mock listing API the dashboard reads from
pub const DEFAULT_API_URL: &str = "https://6845deaafc51878754dc6a46.mockapi.io";

/// Connection parameters for the remote listing API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteParams {
    /// Base URL; `/properties` is appended
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for RemoteParams {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Parameters for the generated mock collection
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeneratorParams {
    /// How many records to generate
    pub count: usize,
    /// Seed, so the same parameters always give the same listing
    pub seed: u64,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self { count: 48, seed: 7 }
    }
}

/// Which source the application reads from
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SourceKind {
    Remote(RemoteParams),
    Mock(GeneratorParams),
}

impl Default for SourceKind {
    fn default() -> Self {
        SourceKind::Remote(RemoteParams::default())
    }
}
