// templates/components/filters.rs

use crate::filter::{Criterion, DateStatus, FilterCriteria, FilterDef, FilterKind, FilterSet, FilterSummary};
use maud::{html, Markup};

/// Options of every choice filter, keyed by filter name.
pub type ChoiceLists = [(&'static str, Vec<(String, String)>)];

/// GET form with one control per filter, pre-filled from `criteria`.
pub fn filter_bar(path: &str, set: &FilterSet, criteria: &FilterCriteria, choices: &ChoiceLists) -> Markup {
    html! {
        form class="filter-bar" method="get" action=(path) {
            @for def in set.defs() {
                (control(def, criteria.get(def.name), choices))
            }
            button type="submit" class="btn" { "Filtrar" }
        }
    }
}

fn control(def: &FilterDef, current: Option<&Criterion>, choices: &ChoiceLists) -> Markup {
    match (def.kind, current) {
        (FilterKind::Text { .. }, c) => {
            let q = match c {
                Some(Criterion::Text(q)) => q.as_str(),
                _ => "",
            };
            html! {
                label {
                    (def.label)
                    input type="search" name=(def.name) value=(q) placeholder=(def.label);
                }
            }
        }
        (FilterKind::Choice { .. }, c) => {
            let sel = match c {
                Some(Criterion::Choice(Some(s))) => s.as_str(),
                _ => "",
            };
            let options = choices
                .iter()
                .find(|(name, _)| *name == def.name)
                .map(|(_, opts)| opts.as_slice())
                .unwrap_or(&[]);
            html! {
                label {
                    (def.label)
                    select name=(def.name) {
                        option value="" selected[sel.is_empty()] { "Todos" }
                        @for (value, label) in options {
                            option value=(value) selected[value == sel] { (label) }
                        }
                    }
                }
            }
        }
        (FilterKind::DateRange { from_param, to_param, .. }, c) => {
            let (from, to) = match c {
                Some(Criterion::DateRange { from, to }) => (*from, *to),
                _ => (None, None),
            };
            let fmt = |d: Option<chrono::NaiveDate>| d.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default();
            html! {
                fieldset class="date-range" {
                    legend { (def.label) }
                    label { "Desde" input type="date" name=(from_param) value=(fmt(from)); }
                    label { "Hasta" input type="date" name=(to_param) value=(fmt(to)); }
                }
            }
        }
        (FilterKind::Flag { .. }, c) => {
            let v = match c {
                Some(Criterion::Flag(v)) => *v,
                _ => None,
            };
            html! {
                label {
                    (def.label)
                    select name=(def.name) {
                        option value="" selected[v.is_none()] { "Todos" }
                        option value="true" selected[v == Some(true)] { "Sí" }
                        option value="false" selected[v == Some(false)] { "No" }
                    }
                }
            }
        }
        (FilterKind::Timing { .. }, c) => {
            let v = match c {
                Some(Criterion::Timing(v)) => *v,
                _ => None,
            };
            html! {
                label {
                    (def.label)
                    select name=(def.name) {
                        option value="" selected[v.is_none()] { "Todos" }
                        @for s in DateStatus::ALL {
                            option value=(s.as_param()) selected[v == Some(s)] { (s.label()) }
                        }
                    }
                }
            }
        }
    }
}

/// One chip per active filter, each linking to the same view without it,
/// plus the "clear filters" link.
pub fn active_filters(path: &str, set: &FilterSet, criteria: &FilterCriteria, summary: &FilterSummary) -> Markup {
    let href = |c: &FilterCriteria| {
        let q = set.to_query(c);
        if q.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{q}")
        }
    };

    html! {
        div class="active-filters" {
            @for f in &summary.active {
                span class="chip" {
                    (f.label) ": " (f.value)
                    a href=(href(&criteria.without(f.name))) aria-label=(format!("Quitar {}", f.label)) { "×" }
                }
            }
            @if summary.any_active() {
                a class="clear-filters" href=(href(&criteria.cleared())) {
                    "Limpiar filtros (" (summary.count()) ")"
                }
            } @else {
                span class="clear-filters disabled" aria-disabled="true" { "Limpiar filtros" }
            }
        }
    }
}
