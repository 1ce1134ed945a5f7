// src/filter/summary.rs

use crate::filter::criteria::{ChoiceOptions, Criterion, FilterCriteria, FilterDef, FilterKind, FilterSet};

/// One constraining filter, ready to render as a chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveFilter {
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSummary {
    pub active: Vec<ActiveFilter>,
}

impl FilterSummary {
    pub fn any_active(&self) -> bool {
        !self.active.is_empty()
    }

    pub fn count(&self) -> usize {
        self.active.len()
    }
}

/// Active filters in set order. A date range counts once, whichever of its
/// bounds are set.
pub fn summarize(set: &FilterSet, criteria: &FilterCriteria) -> FilterSummary {
    let active = set
        .defs()
        .iter()
        .filter_map(|def| {
            let c = criteria.get(def.name).filter(|c| c.is_active())?;
            Some(ActiveFilter {
                name: def.name,
                label: def.label,
                value: display_value(def, c),
            })
        })
        .collect();

    FilterSummary { active }
}

fn display_value(def: &FilterDef, criterion: &Criterion) -> String {
    const DAY: &str = "%d/%m/%Y";

    match criterion {
        Criterion::Text(q) => format!("\"{}\"", q.trim()),
        Criterion::Choice(Some(sel)) => match def.kind {
            FilterKind::Choice { options: ChoiceOptions::Fixed(opts), .. } => opts
                .iter()
                .find(|(v, _)| *v == sel.as_str())
                .map(|(_, label)| label.to_string())
                .unwrap_or_else(|| sel.clone()),
            _ => sel.clone(),
        },
        Criterion::DateRange { from: Some(f), to: Some(t) } => {
            format!("{} – {}", f.format(DAY), t.format(DAY))
        }
        Criterion::DateRange { from: Some(f), to: None } => format!("desde {}", f.format(DAY)),
        Criterion::DateRange { from: None, to: Some(t) } => format!("hasta {}", t.format(DAY)),
        Criterion::Flag(Some(true)) => "Sí".to_string(),
        Criterion::Flag(Some(false)) => "No".to_string(),
        Criterion::Timing(Some(s)) => s.label().to_string(),
        _ => String::new(),
    }
}
