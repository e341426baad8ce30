//! Side-by-side comparison of a few selected listings.

use serde::Serialize;
use tracing::{debug, warn};

use crate::models::PropertyRecord;

/// Most listings shown side by side
pub const MAX_COMPARED: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    pub id: String,
    pub title: String,
    pub location: String,
    pub price: f64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub size: f64,
    pub tags: Vec<String>,
}

impl From<&PropertyRecord> for ComparisonRow {
    fn from(record: &PropertyRecord) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            location: record.city.clone(),
            price: record.price,
            bedrooms: record.bedrooms,
            bathrooms: record.bathrooms,
            size: record.size,
            tags: record.features.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonTable {
    pub rows: Vec<ComparisonRow>,
    /// Id of the lowest priced row; first wins on ties
    pub cheapest: Option<String>,
    /// Id of the row with the most floor area; first wins on ties
    pub largest: Option<String>,
}

impl ComparisonTable {
    /// Rows follow the order of `ids`. Unknown or repeated ids are skipped
    /// and anything past `MAX_COMPARED` is dropped.
    pub fn build<S: AsRef<str>>(records: &[PropertyRecord], ids: &[S]) -> Self {
        let mut rows: Vec<ComparisonRow> = Vec::new();

        for id in ids {
            let id = id.as_ref();
            if rows.iter().any(|row| row.id == id) {
                continue;
            }
            if rows.len() == MAX_COMPARED {
                warn!("Only {} properties can be compared, ignoring {}", MAX_COMPARED, id);
                continue;
            }
            match records.iter().find(|r| r.id == id) {
                Some(record) => rows.push(record.into()),
                None => debug!("No property {} to compare", id),
            }
        }

        let cheapest = best_by(&rows, |a, b| b.price < a.price);
        let largest = best_by(&rows, |a, b| b.size > a.size);

        Self {
            rows,
            cheapest,
            largest,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn best_by<F>(rows: &[ComparisonRow], better: F) -> Option<String>
where
    F: Fn(&ComparisonRow, &ComparisonRow) -> bool,
{
    let mut best: Option<&ComparisonRow> = None;
    for row in rows {
        best = match best {
            Some(current) if !better(current, row) => Some(current),
            _ => Some(row),
        };
    }
    best.map(|row| row.id.clone())
}
