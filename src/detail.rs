//! Single-property view with its monthly price history.

use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::models::PropertyRecord;
use crate::sources::generated::PRICE_BOUNDS;
use crate::sources::{DataSource, SourceError};

const FALLBACK_MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricePoint {
    pub month: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDetail {
    pub record: PropertyRecord,
    pub price_history: Vec<PricePoint>,
}

/// Fetch one record and attach its price history. Records without samples
/// get a generated six-month history.
pub async fn load_detail<R: Rng>(
    source: &dyn DataSource,
    id: &str,
    rng: &mut R,
) -> Result<PropertyDetail, SourceError> {
    let record = source.fetch_one(id).await?;
    info!("Loaded details for {} ({})", record.title, record.id);

    let price_history = if record.price_history.is_empty() {
        debug!("No price history for {}, generating one", record.id);
        generated_history(rng)
    } else {
        labelled_history(&record.price_history, Utc::now())
    };

    Ok(PropertyDetail {
        record,
        price_history,
    })
}

/// Label samples with month names, the last sample being `as_of`'s month.
pub fn labelled_history(samples: &[f64], as_of: DateTime<Utc>) -> Vec<PricePoint> {
    let current = as_of.date_naive().with_day(1).unwrap_or(as_of.date_naive());
    let len = samples.len();

    samples
        .iter()
        .enumerate()
        .map(|(i, price)| {
            let back = (len - 1 - i) as u32;
            PricePoint {
                month: month_label(current, back),
                price: *price,
            }
        })
        .collect()
}

fn month_label(current: NaiveDate, months_back: u32) -> String {
    current
        .checked_sub_months(Months::new(months_back))
        .map(|d| d.format("%b").to_string())
        .unwrap_or_default()
}

pub fn generated_history<R: Rng>(rng: &mut R) -> Vec<PricePoint> {
    FALLBACK_MONTHS
        .iter()
        .map(|month| PricePoint {
            month: month.to_string(),
            price: rng.gen_range(PRICE_BOUNDS.0..=PRICE_BOUNDS.1) as f64,
        })
        .collect()
}
