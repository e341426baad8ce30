use std::cmp::Ordering;

use crate::engine::state::{SortKey, SortOrder};
use crate::models::PropertyRecord;

/// Order records by `key`. The sort is stable in both directions: descending
/// reverses the comparison, never the output, so equal keys keep input order.
pub fn sort<'a>(
    mut records: Vec<&'a PropertyRecord>,
    key: SortKey,
    order: SortOrder,
) -> Vec<&'a PropertyRecord> {
    if key == SortKey::None {
        return records;
    }
    records.sort_by(|a, b| {
        let ordering = compare(a, b, key);
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
    records
}

pub fn compare(a: &PropertyRecord, b: &PropertyRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::None => Ordering::Equal,
        SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortKey::City => a.city.to_lowercase().cmp(&b.city.to_lowercase()),
        SortKey::Price => compare_amounts(a.price, b.price),
        SortKey::Area => compare_amounts(a.size, b.size),
        SortKey::Bedrooms => a.bedrooms.cmp(&b.bedrooms),
        // unrated records sort lowest
        SortKey::Rating => match (a.rating, b.rating) {
            (Some(x), Some(y)) => compare_amounts(x, y),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        },
    }
}

/// Total order on amounts where -0.0 and 0.0 are equal.
fn compare_amounts(a: f64, b: f64) -> Ordering {
    (a + 0.0).total_cmp(&(b + 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(records: &[&PropertyRecord]) -> Vec<String> {
        records.iter().map(|r| r.title.clone()).collect()
    }

    fn trio() -> Vec<PropertyRecord> {
        vec![
            PropertyRecord::new("a", "Alpha", 100.0),
            PropertyRecord::new("b", "Beta", 50.0),
            PropertyRecord::new("g", "Gamma", 100.0),
        ]
    }

    #[test]
    fn price_ascending_keeps_ties_in_input_order() {
        let records = trio();
        let sorted = sort(records.iter().collect(), SortKey::Price, SortOrder::Ascending);
        assert_eq!(titles(&sorted), vec!["Beta", "Alpha", "Gamma"]);
    }

    #[test]
    fn price_descending_keeps_ties_in_input_order() {
        let records = trio();
        let sorted = sort(records.iter().collect(), SortKey::Price, SortOrder::Descending);
        assert_eq!(titles(&sorted), vec!["Alpha", "Gamma", "Beta"]);
    }

    #[test]
    fn signed_zero_prices_are_ties() {
        let records = vec![
            PropertyRecord::new("a", "Zero", 0.0),
            PropertyRecord::new("b", "Negative zero", -0.0),
        ];
        for order in [SortOrder::Ascending, SortOrder::Descending] {
            let sorted = sort(records.iter().collect(), SortKey::Price, order);
            assert_eq!(titles(&sorted), vec!["Zero", "Negative zero"]);
        }
    }

    #[test]
    fn none_preserves_input_order() {
        let records = vec![
            PropertyRecord::new("z", "Zulu", 1.0),
            PropertyRecord::new("a", "alpha", 2.0),
        ];
        let sorted = sort(records.iter().collect(), SortKey::None, SortOrder::Descending);
        assert_eq!(titles(&sorted), vec!["Zulu", "alpha"]);
    }

    #[test]
    fn strings_compare_case_insensitively() {
        let records = vec![
            PropertyRecord::new("1", "beach hut", 1.0),
            PropertyRecord::new("2", "Apartment", 1.0),
            PropertyRecord::new("3", "Cottage", 1.0),
        ];
        let sorted = sort(records.iter().collect(), SortKey::Title, SortOrder::Ascending);
        assert_eq!(titles(&sorted), vec!["Apartment", "beach hut", "Cottage"]);
    }

    #[test]
    fn missing_rating_sorts_lowest() {
        let mut rated = PropertyRecord::new("1", "Rated", 1.0);
        rated.rating = Some(1.5);
        let unrated = PropertyRecord::new("2", "Unrated", 1.0);
        let mut top = PropertyRecord::new("3", "Top", 1.0);
        top.rating = Some(4.9);
        let records = vec![rated, unrated, top];

        let asc = sort(records.iter().collect(), SortKey::Rating, SortOrder::Ascending);
        assert_eq!(titles(&asc), vec!["Unrated", "Rated", "Top"]);
        let desc = sort(records.iter().collect(), SortKey::Rating, SortOrder::Descending);
        assert_eq!(titles(&desc), vec!["Top", "Rated", "Unrated"]);
    }

    #[test]
    fn area_sorts_by_size() {
        let mut small = PropertyRecord::new("1", "Small", 1.0);
        small.size = 400.0;
        let mut large = PropertyRecord::new("2", "Large", 1.0);
        large.size = 2500.0;
        let records = vec![large, small];
        let sorted = sort(records.iter().collect(), SortKey::Area, SortOrder::Ascending);
        assert_eq!(titles(&sorted), vec!["Small", "Large"]);
    }
}
