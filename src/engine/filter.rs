use crate::engine::state::{Filters, ViewState};
use crate::models::PropertyRecord;

/// Keep the records that satisfy the search term and every active filter,
/// in their original order.
pub fn filter<'a, I>(records: I, state: &ViewState) -> Vec<&'a PropertyRecord>
where
    I: IntoIterator<Item = &'a PropertyRecord>,
{
    let needle = state.search_term.to_lowercase();
    records
        .into_iter()
        .filter(|record| matches_search(record, &needle) && matches_filters(record, &state.filters))
        .collect()
}

fn matches_search(record: &PropertyRecord, needle: &str) -> bool {
    needle.is_empty() || record.title.to_lowercase().contains(needle)
}

fn matches_filters(record: &PropertyRecord, filters: &Filters) -> bool {
    if let Some(city) = &filters.city {
        if &record.city != city {
            return false;
        }
    }

    if let Some(bedrooms) = filters.bedrooms {
        if record.bedrooms != bedrooms {
            return false;
        }
    }

    if let Some(wanted) = &filters.property_type {
        // records without a type never match an active type filter
        let Some(kind) = &record.property_type else {
            return false;
        };
        if !kind.to_lowercase().contains(&wanted.to_lowercase()) {
            return false;
        }
    }

    filters.price_range.contains(record.price)
}
