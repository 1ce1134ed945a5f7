// src/filter/evaluator.rs

use crate::filter::criteria::{Criterion, FilterCriteria, FilterDef, FilterKind, FilterSet};
use crate::filter::matchers::{
    choice_matches, date_in_range, flag_matches, status_matches, text_matches,
};
use crate::filter::value::Record;
use chrono::{Local, NaiveDate};
use tracing::debug;

/// Inputs that change between passes without being part of the criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterContext {
    pub today: NaiveDate,
}

impl FilterContext {
    /// Reads the clock. Build one per pass; never keep it around.
    pub fn now() -> Self {
        Self {
            today: Local::now().date_naive(),
        }
    }

    pub fn on(today: NaiveDate) -> Self {
        Self { today }
    }
}

/// A record passes when it satisfies every filter of the set (AND).
/// Filters with no entry in `criteria` impose nothing.
pub fn record_matches<R: Record + ?Sized>(
    set: &FilterSet,
    record: &R,
    criteria: &FilterCriteria,
    ctx: &FilterContext,
) -> bool {
    set.defs().iter().all(|def| match criteria.get(def.name) {
        Some(c) => criterion_matches(def, c, record, ctx),
        None => true,
    })
}

fn criterion_matches<R: Record + ?Sized>(
    def: &FilterDef,
    criterion: &Criterion,
    record: &R,
    ctx: &FilterContext,
) -> bool {
    match (def.kind, criterion) {
        (FilterKind::Text { fields }, Criterion::Text(q)) => text_matches(record, fields, q),
        (FilterKind::Choice { field, .. }, Criterion::Choice(sel)) => {
            choice_matches(record, field, sel.as_deref())
        }
        (FilterKind::DateRange { field, .. }, Criterion::DateRange { from, to }) => {
            date_in_range(record, field, *from, *to)
        }
        (FilterKind::Flag { field }, Criterion::Flag(v)) => flag_matches(record, field, *v),
        (FilterKind::Timing { field }, Criterion::Timing(s)) => {
            status_matches(record, field, *s, ctx.today)
        }
        // FilterSet::update never stores a mismatched kind
        _ => true,
    }
}

/// Stable filter: the matching records, in source order, borrowed from
/// `records`. Neither input is modified.
pub fn apply_filters<'r, R: Record>(
    set: &FilterSet,
    records: &'r [R],
    criteria: &FilterCriteria,
    ctx: &FilterContext,
) -> Vec<&'r R> {
    let shown: Vec<&R> = records
        .iter()
        .filter(|r| record_matches(set, *r, criteria, ctx))
        .collect();

    debug!(total = records.len(), shown = shown.len(), "filter pass");
    shown
}
