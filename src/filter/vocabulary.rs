use crate::filter::criteria::{ChoiceOptions, FilterDef, FilterKind};
use crate::filter::value::Record;
use std::collections::HashSet;

/// Distinct non-empty text values of `field`, in first-seen order.
pub fn distinct_values<R: Record>(records: &[R], field: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for r in records {
        // kept verbatim: choice matching is exact
        if let Some(v) = r.field(field).as_str().filter(|v| !v.trim().is_empty()) {
            if seen.insert(v.to_string()) {
                out.push(v.to_string());
            }
        }
    }
    out
}

/// `(value, label)` options for a choice filter's dropdown. Empty for
/// any other kind of filter.
pub fn choice_options<R: Record>(def: &FilterDef, records: &[R]) -> Vec<(String, String)> {
    match def.kind {
        FilterKind::Choice { options: ChoiceOptions::Fixed(opts), .. } => opts
            .iter()
            .map(|(v, l)| (v.to_string(), l.to_string()))
            .collect(),
        FilterKind::Choice { field, options: ChoiceOptions::FromRecords } => distinct_values(records, field)
            .into_iter()
            .map(|v| (v.clone(), v))
            .collect(),
        _ => Vec::new(),
    }
}
