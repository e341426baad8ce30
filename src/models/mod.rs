use serde::{Deserialize, Serialize};

mod lenient;

/// One property listing as supplied by a data source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    #[serde(deserialize_with = "lenient::id")]
    pub id: String,
    pub title: String,
    #[serde(deserialize_with = "lenient::amount")]
    pub price: f64,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub size: f64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub bedrooms: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub bathrooms: u32,
    #[serde(alias = "location")]
    pub city: String,
    #[serde(default)]
    pub image: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::optional_amount"
    )]
    pub rating: Option<f64>,
    /// Free-form kind: villa, apartment, townhouse, penthouse...
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_built: Option<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub price_history: Vec<f64>,
}

impl PropertyRecord {
    /// Minimal record, mostly useful for building fixtures
    pub fn new(id: impl Into<String>, title: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            size: 0.0,
            bedrooms: 0,
            bathrooms: 0,
            city: String::new(),
            image: String::new(),
            rating: None,
            property_type: None,
            year_built: None,
            features: Vec::new(),
            price_history: Vec::new(),
        }
    }
}

/// Format an amount the way the listing cards show it: `₹1,250,000`
pub fn format_price(amount: f64) -> String {
    let whole = amount.round().max(0.0) as u64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("₹{}", grouped)
}
