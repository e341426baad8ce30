use std::collections::HashSet;

use crate::models::PropertyRecord;
use crate::sources::error::SourceError;
use tracing::warn;

/// Decode a JSON array of listings. Entries that do not decode are skipped,
/// and a repeated id keeps only its first record. Anything other than an
/// array is an error.
pub fn decode_records(body: &str) -> Result<Vec<PropertyRecord>, SourceError> {
    let raw: Vec<serde_json::Value> = serde_json::from_str(body)?;
    Ok(collect_records(raw))
}

pub fn decode_record(body: &str) -> Result<PropertyRecord, SourceError> {
    Ok(serde_json::from_str(body)?)
}

fn collect_records(raw: Vec<serde_json::Value>) -> Vec<PropertyRecord> {
    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(raw.len());

    for (index, value) in raw.into_iter().enumerate() {
        let record: PropertyRecord = match serde_json::from_value(value) {
            Ok(record) => record,
            Err(e) => {
                warn!("Skipped entry {}: {}", index, e);
                continue;
            }
        };
        if !seen.insert(record.id.clone()) {
            warn!("Skipped entry {}: duplicate id {}", index, record.id);
            continue;
        }
        records.push(record);
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_bad_entries_and_duplicates() {
        let body = r#"[
            {"id": "1", "title": "Lake House", "price": 120000, "city": "Udaipur"},
            {"id": "2", "title": "Broken", "price": "call us", "city": "Udaipur"},
            {"id": "3", "title": "Negative", "price": -1, "city": "Udaipur"},
            {"id": "1", "title": "Lake House again", "price": 1, "city": "Udaipur"},
            {"id": "4", "title": "Studio", "price": "65000", "city": "Pune"}
        ]"#;
        let records = decode_records(body).unwrap();
        let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);
        assert_eq!(records[0].title, "Lake House");
    }

    #[test]
    fn empty_array_is_fine() {
        assert!(decode_records("[]").unwrap().is_empty());
    }

    #[test]
    fn non_array_payload_is_an_error() {
        let err = decode_records(r#"{"error": "rate limited"}"#).unwrap_err();
        assert!(matches!(err, SourceError::Decode(_)));
    }
}
