//! Runtime configuration read from `ESTATE_*` environment variables.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::engine::{Filters, SortKey, SortOrder, ViewState, DEFAULT_PAGE_SIZE};
use crate::sources::{GeneratorParams, RemoteParams, SourceKind};

/// Initial listing query. Malformed parts degrade to "no constraint".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryInputs {
    pub search: String,
    pub city: String,
    pub bedrooms: String,
    pub property_type: String,
    pub min_price: String,
    pub max_price: String,
    pub sort: String,
    pub order: String,
    pub page: String,
}

impl QueryInputs {
    pub fn view_state(&self, page_size: usize) -> ViewState {
        let mut state = ViewState::with_page_size(page_size);
        // matched verbatim, so a leading space narrows to word starts
        state.search_term = self.search.clone();
        state.filters = Filters::from_inputs(
            &self.city,
            &self.bedrooms,
            &self.property_type,
            &self.min_price,
            &self.max_price,
        );
        state.sort_key = SortKey::parse(&self.sort);
        state.sort_order = SortOrder::parse(&self.order);
        state.page = self.page.trim().parse().unwrap_or(1);
        state
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub source: SourceKind,
    pub page_size: usize,
    pub settings_path: Option<PathBuf>,
    pub query: QueryInputs,
    /// Ids to show side by side
    pub compare: Vec<String>,
    /// Id to show in full
    pub detail: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let text = |key: &str| get(key).unwrap_or_default();

        let source_name = get("ESTATE_SOURCE").map(|s| s.trim().to_ascii_lowercase());
        let source = match source_name.as_deref() {
            None | Some("remote") => {
                let mut params = RemoteParams::default();
                if let Some(url) = get("ESTATE_API_URL") {
                    params.base_url = url.trim().to_string();
                }
                if let Some(secs) = get("ESTATE_TIMEOUT_SECS") {
                    let secs: u64 = secs
                        .trim()
                        .parse()
                        .with_context(|| format!("ESTATE_TIMEOUT_SECS is not a number: {}", secs))?;
                    params.timeout = Duration::from_secs(secs);
                }
                SourceKind::Remote(params)
            }
            Some("mock") => {
                let mut params = GeneratorParams::default();
                if let Some(count) = get("ESTATE_MOCK_COUNT") {
                    params.count = count
                        .trim()
                        .parse()
                        .with_context(|| format!("ESTATE_MOCK_COUNT is not a number: {}", count))?;
                }
                if let Some(seed) = get("ESTATE_MOCK_SEED") {
                    params.seed = seed
                        .trim()
                        .parse()
                        .with_context(|| format!("ESTATE_MOCK_SEED is not a number: {}", seed))?;
                }
                SourceKind::Mock(params)
            }
            Some(other) => bail!("ESTATE_SOURCE must be `remote` or `mock`, got `{}`", other),
        };

        let page_size = match get("ESTATE_PAGE_SIZE") {
            Some(raw) => {
                let size: usize = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("ESTATE_PAGE_SIZE is not a number: {}", raw))?;
                if size == 0 {
                    bail!("ESTATE_PAGE_SIZE must be positive");
                }
                size
            }
            None => DEFAULT_PAGE_SIZE,
        };

        let query = QueryInputs {
            search: lookup("ESTATE_SEARCH").unwrap_or_default(),
            city: text("ESTATE_CITY"),
            bedrooms: text("ESTATE_BEDROOMS"),
            property_type: text("ESTATE_TYPE"),
            min_price: text("ESTATE_MIN_PRICE"),
            max_price: text("ESTATE_MAX_PRICE"),
            sort: text("ESTATE_SORT"),
            order: text("ESTATE_ORDER"),
            page: text("ESTATE_PAGE"),
        };

        let compare = text("ESTATE_COMPARE")
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(String::from)
            .collect();

        Ok(Self {
            source,
            page_size,
            settings_path: get("ESTATE_SETTINGS").map(PathBuf::from),
            query,
            compare,
            detail: get("ESTATE_DETAIL").map(|id| id.trim().to_string()),
        })
    }

    pub fn view_state(&self) -> ViewState {
        self.query.view_state(self.page_size)
    }
}
