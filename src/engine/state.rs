use serde::{Deserialize, Serialize};

/// Page size used by the dashboard grid
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Field the listing is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    None,
    Title,
    City,
    Price,
    #[serde(alias = "size")]
    Area,
    Bedrooms,
    Rating,
}

impl SortKey {
    /// Unknown or blank input means "no sort".
    pub fn parse(input: &str) -> Self {
        match input.trim().to_ascii_lowercase().as_str() {
            "title" => SortKey::Title,
            "city" | "location" => SortKey::City,
            "price" => SortKey::Price,
            "area" | "size" => SortKey::Area,
            "bedrooms" => SortKey::Bedrooms,
            "rating" => SortKey::Rating,
            _ => SortKey::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn parse(input: &str) -> Self {
        match input.trim().to_ascii_lowercase().as_str() {
            "desc" | "descending" => SortOrder::Descending,
            _ => SortOrder::Ascending,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// Inclusive price bounds. A missing bound does not constrain.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Build from raw text inputs; a bound that does not parse is dropped.
    pub fn parse(min: &str, max: &str) -> Self {
        Self {
            min: parse_bound(min),
            max: parse_bound(max),
        }
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min.map_or(true, |min| price >= min) && self.max.map_or(true, |max| price <= max)
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

fn parse_bound(input: &str) -> Option<f64> {
    input
        .trim()
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Structured constraints on top of the free-text search
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    pub city: Option<String>,
    pub bedrooms: Option<u32>,
    pub property_type: Option<String>,
    pub price_range: PriceRange,
}

impl Filters {
    /// Build filters from raw form inputs. Blank, `any` and `all` leave a
    /// filter unset, as does a bedroom count that is not a whole number.
    pub fn from_inputs(
        city: &str,
        bedrooms: &str,
        property_type: &str,
        min_price: &str,
        max_price: &str,
    ) -> Self {
        Self {
            city: selection(city),
            bedrooms: selection(bedrooms).and_then(|b| parse_count(&b)),
            property_type: selection(property_type),
            price_range: PriceRange::parse(min_price, max_price),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.city.is_none()
            && self.bedrooms.is_none()
            && self.property_type.is_none()
            && self.price_range.is_unbounded()
    }
}

/// Whole, non-negative numbers only; `3.0` counts as 3.
fn parse_count(input: &str) -> Option<u32> {
    let value = parse_bound(input)?;
    if value < 0.0 || value.fract() != 0.0 || value > u32::MAX as f64 {
        return None;
    }
    Some(value as u32)
}

fn selection(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("any")
        || trimmed.eq_ignore_ascii_case("all")
    {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Everything that decides what the listing shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub search_term: String,
    pub filters: Filters,
    pub sort_key: SortKey,
    pub sort_order: SortOrder,
    pub page: usize,
    pub page_size: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl ViewState {
    /// A zero page size is bumped to one.
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            search_term: String::new(),
            filters: Filters::default(),
            sort_key: SortKey::None,
            sort_order: SortOrder::Ascending,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.page = 1;
    }

    pub fn set_filters(&mut self, filters: Filters) {
        self.filters = filters;
        self.page = 1;
    }

    pub fn set_sort(&mut self, key: SortKey, order: SortOrder) {
        self.sort_key = key;
        self.sort_order = order;
        self.page = 1;
    }

    /// Same key flips the order, a new key starts ascending.
    pub fn toggle_sort(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.sort_order = self.sort_order.flipped();
        } else {
            self.sort_key = key;
            self.sort_order = SortOrder::Ascending;
        }
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn apply(&mut self, intent: ViewIntent) {
        match intent {
            ViewIntent::Search(term) => self.set_search_term(term),
            ViewIntent::Filter(filters) => self.set_filters(filters),
            ViewIntent::City(city) => {
                self.filters.city = city.as_deref().and_then(selection);
                self.page = 1;
            }
            ViewIntent::Bedrooms(bedrooms) => {
                self.filters.bedrooms = bedrooms;
                self.page = 1;
            }
            ViewIntent::PropertyType(kind) => {
                self.filters.property_type = kind.as_deref().and_then(selection);
                self.page = 1;
            }
            ViewIntent::PriceRange(range) => {
                self.filters.price_range = range;
                self.page = 1;
            }
            ViewIntent::Sort { key, order } => self.set_sort(key, order),
            ViewIntent::ToggleSort(key) => self.toggle_sort(key),
            ViewIntent::Page(page) => self.set_page(page),
        }
    }
}

/// Input events emitted by the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub enum ViewIntent {
    Search(String),
    Filter(Filters),
    City(Option<String>),
    Bedrooms(Option<u32>),
    PropertyType(Option<String>),
    PriceRange(PriceRange),
    Sort { key: SortKey, order: SortOrder },
    ToggleSort(SortKey),
    Page(usize),
}

impl ViewIntent {
    pub fn is_page_only(&self) -> bool {
        matches!(self, ViewIntent::Page(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_key_parsing_falls_back_to_none() {
        assert_eq!(SortKey::parse("Price"), SortKey::Price);
        assert_eq!(SortKey::parse("size"), SortKey::Area);
        assert_eq!(SortKey::parse(" area "), SortKey::Area);
        assert_eq!(SortKey::parse("colour"), SortKey::None);
        assert_eq!(SortKey::parse(""), SortKey::None);
    }

    #[test]
    fn malformed_price_bound_is_unconstrained() {
        let range = PriceRange::parse("abc", "200000");
        assert_eq!(range.min, None);
        assert_eq!(range.max, Some(200_000.0));
        assert!(range.contains(0.0));
        assert!(!range.contains(200_001.0));
        assert!(PriceRange::parse("", "NaN").is_unbounded());
    }

    #[test]
    fn filter_inputs_treat_any_and_all_as_unset() {
        let filters = Filters::from_inputs("Any", "ALL", "all", "", "");
        assert!(filters.is_empty());

        let filters = Filters::from_inputs("Pune", "3", "villa", "1,000", "5000");
        assert_eq!(filters.city.as_deref(), Some("Pune"));
        assert_eq!(filters.bedrooms, Some(3));
        assert_eq!(filters.property_type.as_deref(), Some("villa"));
        assert_eq!(filters.price_range, PriceRange::new(1000.0, 5000.0));

        assert_eq!(Filters::from_inputs("", "three", "", "", "").bedrooms, None);
    }

    #[test]
    fn bedroom_input_is_coerced_like_record_counts() {
        assert_eq!(Filters::from_inputs("", "3.0", "", "", "").bedrooms, Some(3));
        assert_eq!(Filters::from_inputs("", " 2 ", "", "", "").bedrooms, Some(2));
        assert_eq!(Filters::from_inputs("", "2.5", "", "", "").bedrooms, None);
        assert_eq!(Filters::from_inputs("", "-1", "", "", "").bedrooms, None);
    }

    #[test]
    fn toggling_the_same_key_flips_order() {
        let mut state = ViewState::default();
        state.toggle_sort(SortKey::Price);
        assert_eq!(state.sort_order, SortOrder::Ascending);
        state.toggle_sort(SortKey::Price);
        assert_eq!(state.sort_order, SortOrder::Descending);
        state.toggle_sort(SortKey::Title);
        assert_eq!(state.sort_key, SortKey::Title);
        assert_eq!(state.sort_order, SortOrder::Ascending);
    }

    #[test]
    fn non_page_intents_reset_the_page() {
        let intents = vec![
            ViewIntent::Search("villa".into()),
            ViewIntent::Filter(Filters::default()),
            ViewIntent::City(Some("Delhi".into())),
            ViewIntent::Bedrooms(Some(2)),
            ViewIntent::PropertyType(None),
            ViewIntent::PriceRange(PriceRange::new(1.0, 2.0)),
            ViewIntent::Sort {
                key: SortKey::Rating,
                order: SortOrder::Descending,
            },
            ViewIntent::ToggleSort(SortKey::City),
        ];
        for intent in intents {
            let mut state = ViewState::default();
            state.set_page(4);
            state.apply(intent.clone());
            assert_eq!(state.page, 1, "{:?} should reset the page", intent);
        }
    }

    #[test]
    fn page_intent_leaves_everything_else_alone() {
        let mut state = ViewState::default();
        state.set_search_term("house");
        state.set_sort(SortKey::Price, SortOrder::Descending);
        let before = state.clone();
        state.apply(ViewIntent::Page(3));
        assert_eq!(state.page, 3);
        assert_eq!(state.search_term, before.search_term);
        assert_eq!(state.filters, before.filters);
        assert_eq!(state.sort_key, before.sort_key);
        assert_eq!(state.sort_order, before.sort_order);
    }

    #[test]
    fn zero_page_size_is_bumped() {
        assert_eq!(ViewState::with_page_size(0).page_size, 1);
    }
}
