pub mod attendance;
pub mod events;
pub mod news;
pub mod reports;

pub use attendance::AttendanceRecord;
pub use events::EventRecord;
pub use news::NewsRecord;
pub use reports::ReportRecord;

use crate::filter::matchers::parse_record_date;
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// Turn the raw JSON items from the backend into typed records. Items that
/// don't fit the record shape are logged and skipped.
pub fn decode_records<T: DeserializeOwned>(items: Vec<Value>, resource: &str) -> Vec<T> {
    let total = items.len();
    let records: Vec<T> = items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<T>(item) {
            Ok(r) => Some(r),
            Err(e) => {
                warn!("Skipping {resource} record due to validation error: {e}");
                None
            }
        })
        .collect();

    if records.len() < total {
        warn!("{} of {total} {resource} records were skipped", total - records.len());
    }
    records
}

/// Flags arrive as `true`/`false`, `0`/`1` or `"0"`/`"1"` depending on the
/// backend table. Use with `#[serde(default, deserialize_with = "flag")]`.
pub fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawFlag {
        Bool(bool),
        Int(i64),
        Text(String),
    }

    match Option::<RawFlag>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawFlag::Bool(b)) => Ok(Some(b)),
        Some(RawFlag::Int(0)) => Ok(Some(false)),
        Some(RawFlag::Int(1)) => Ok(Some(true)),
        Some(RawFlag::Int(n)) => Err(de::Error::custom(format!("invalid flag value: {n}"))),
        Some(RawFlag::Text(s)) => match s.trim() {
            "true" | "1" => Ok(Some(true)),
            "false" | "0" => Ok(Some(false)),
            other => Err(de::Error::custom(format!("invalid flag value: {other}"))),
        },
    }
}

/// dd/mm/yyyy for tables; unparsable dates are shown as sent.
pub fn display_date(raw: &Option<String>) -> String {
    match raw.as_deref() {
        None => String::new(),
        Some(s) => parse_record_date(s)
            .map(|d| d.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|| s.to_string()),
    }
}

pub fn display_flag(v: Option<bool>) -> &'static str {
    match v {
        Some(true) => "Sí",
        Some(false) => "No",
        None => "",
    }
}
