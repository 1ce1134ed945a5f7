// src/filter/matchers.rs
//
// Per-field comparison rules. Every matcher is total: a missing or oddly
// typed field never panics, it just doesn't match an active criterion.

use crate::filter::value::{FieldValue, Record};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::fmt;

/// Case-insensitive substring search across several fields (OR).
/// An empty or whitespace-only query matches everything.
pub fn text_matches<R: Record + ?Sized>(record: &R, fields: &[&str], query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();

    fields.iter().any(|f| {
        record
            .field(f)
            .as_text()
            .to_lowercase()
            .contains(&needle)
    })
}

/// Exact match of a text field against the selected value. No coercion:
/// a numeric field never equals a selected string.
pub fn choice_matches<R: Record + ?Sized>(record: &R, field: &str, selected: Option<&str>) -> bool {
    match selected {
        None | Some("") => true,
        Some(sel) => record.field(field).as_str() == Some(sel),
    }
}

/// Inclusive day-granularity range check. Either bound may be unset; with
/// any bound set an unparsable record date fails.
pub fn date_in_range<R: Record + ?Sized>(
    record: &R,
    field: &str,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> bool {
    if from.is_none() && to.is_none() {
        return true;
    }

    let Some(date) = record.field(field).as_str().and_then(parse_record_date) else {
        return false;
    };

    from.map_or(true, |f| date >= f) && to.map_or(true, |t| date <= t)
}

/// Tri-state flag. Records may carry the flag as a bool, as 0/1, or as
/// the strings "true"/"false"/"1"/"0".
pub fn flag_matches<R: Record + ?Sized>(record: &R, field: &str, selected: Option<bool>) -> bool {
    match selected {
        None => true,
        Some(want) => read_flag(record.field(field)) == Some(want),
    }
}

pub fn read_flag(value: FieldValue<'_>) -> Option<bool> {
    match value {
        FieldValue::Bool(b) => Some(b),
        FieldValue::Int(0) => Some(false),
        FieldValue::Int(1) => Some(true),
        FieldValue::Text(s) => match s.trim() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Where a dated record sits relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStatus {
    Past,
    Today,
    Upcoming,
}

impl DateStatus {
    pub const ALL: [DateStatus; 3] = [DateStatus::Past, DateStatus::Today, DateStatus::Upcoming];

    /// Request parameter form.
    pub fn as_param(&self) -> &'static str {
        match self {
            DateStatus::Past => "pasado",
            DateStatus::Today => "hoy",
            DateStatus::Upcoming => "proximo",
        }
    }

    pub fn from_param(raw: &str) -> Option<Self> {
        match raw.trim() {
            "pasado" => Some(DateStatus::Past),
            "hoy" => Some(DateStatus::Today),
            "proximo" => Some(DateStatus::Upcoming),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DateStatus::Past => "Pasados",
            DateStatus::Today => "Hoy",
            DateStatus::Upcoming => "Próximos",
        }
    }
}

impl fmt::Display for DateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn derive_date_status(date: NaiveDate, today: NaiveDate) -> DateStatus {
    if date < today {
        DateStatus::Past
    } else if date == today {
        DateStatus::Today
    } else {
        DateStatus::Upcoming
    }
}

/// Matches against a status computed from the record date. `today` must be
/// read fresh for every pass.
pub fn status_matches<R: Record + ?Sized>(
    record: &R,
    field: &str,
    selected: Option<DateStatus>,
    today: NaiveDate,
) -> bool {
    let Some(want) = selected else {
        return true;
    };
    record
        .field(field)
        .as_str()
        .and_then(parse_record_date)
        .map(|d| derive_date_status(d, today) == want)
        .unwrap_or(false)
}

/// Parse the date formats the backend is known to send, truncated to day.
pub fn parse_record_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
}
