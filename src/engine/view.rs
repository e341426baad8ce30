use serde::Serialize;
use tracing::debug;

use crate::engine::filter::filter;
use crate::engine::paginate::{paginate, total_pages};
use crate::engine::sort::sort;
use crate::engine::state::{ViewIntent, ViewState};
use crate::models::PropertyRecord;

/// What the presentation layer renders
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewResult {
    pub items: Vec<PropertyRecord>,
    pub total_matched: usize,
    pub total_pages: usize,
    pub current_page: usize,
}

impl ViewResult {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Run filter, sort and paginate in that order. The requested page is
/// clamped into the valid range before slicing.
pub fn compute_view(records: &[PropertyRecord], state: &ViewState) -> ViewResult {
    let matched = filter(records, state);
    let sorted = sort(matched, state.sort_key, state.sort_order);

    let total_pages = total_pages(sorted.len(), state.page_size);
    let current_page = state.page.clamp(1, total_pages);
    let page = paginate(&sorted, current_page, state.page_size);

    ViewResult {
        items: page.items.iter().map(|r| (*r).clone()).collect(),
        total_matched: sorted.len(),
        total_pages: page.total_pages,
        current_page,
    }
}

/// A loaded collection plus the view state browsing it
#[derive(Debug, Clone)]
pub struct ListingEngine {
    records: Vec<PropertyRecord>,
    state: ViewState,
}

impl ListingEngine {
    pub fn new(records: Vec<PropertyRecord>, state: ViewState) -> Self {
        let mut engine = Self { records, state };
        engine.clamp_page();
        engine
    }

    pub fn records(&self) -> &[PropertyRecord] {
        &self.records
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Swap in a freshly fetched collection. The view state is kept but the
    /// page is pulled back into range.
    pub fn replace_records(&mut self, records: Vec<PropertyRecord>) {
        debug!("Replacing {} records with {}", self.records.len(), records.len());
        self.records = records;
        self.clamp_page();
    }

    pub fn apply(&mut self, intent: ViewIntent) {
        debug!(?intent, "Applying view intent");
        let page_only = intent.is_page_only();
        self.state.apply(intent);
        if page_only {
            self.clamp_page();
        }
    }

    pub fn view(&self) -> ViewResult {
        compute_view(&self.records, &self.state)
    }

    pub fn matched_count(&self) -> usize {
        filter(&self.records, &self.state).len()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.matched_count(), self.state.page_size)
    }

    fn clamp_page(&mut self) {
        let total_pages = self.total_pages();
        self.state.page = self.state.page.clamp(1, total_pages);
    }
}
