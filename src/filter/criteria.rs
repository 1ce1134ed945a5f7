// src/filter/criteria.rs

use crate::filter::error::FilterError;
use crate::filter::matchers::DateStatus;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::warn;
use url::form_urlencoded;

/// Where a choice filter gets its vocabulary from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceOptions {
    /// `(value, label)` pairs known up front.
    Fixed(&'static [(&'static str, &'static str)]),
    /// Distinct values of the field across the loaded records.
    FromRecords,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Text {
        fields: &'static [&'static str],
    },
    Choice {
        field: &'static str,
        options: ChoiceOptions,
    },
    DateRange {
        field: &'static str,
        from_param: &'static str,
        to_param: &'static str,
    },
    Flag {
        field: &'static str,
    },
    Timing {
        field: &'static str,
    },
}

impl FilterKind {
    fn empty(&self) -> Criterion {
        match self {
            FilterKind::Text { .. } => Criterion::Text(String::new()),
            FilterKind::Choice { .. } => Criterion::Choice(None),
            FilterKind::DateRange { .. } => Criterion::DateRange {
                from: None,
                to: None,
            },
            FilterKind::Flag { .. } => Criterion::Flag(None),
            FilterKind::Timing { .. } => Criterion::Timing(None),
        }
    }

    fn expected(&self) -> &'static str {
        self.empty().kind_name()
    }
}

/// One declarative filter of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterDef {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FilterKind,
}

impl FilterDef {
    pub const fn text(name: &'static str, label: &'static str, fields: &'static [&'static str]) -> Self {
        Self { name, label, kind: FilterKind::Text { fields } }
    }

    pub const fn choice(
        name: &'static str,
        label: &'static str,
        field: &'static str,
        options: ChoiceOptions,
    ) -> Self {
        Self { name, label, kind: FilterKind::Choice { field, options } }
    }

    pub const fn date_range(
        name: &'static str,
        label: &'static str,
        field: &'static str,
        from_param: &'static str,
        to_param: &'static str,
    ) -> Self {
        Self {
            name,
            label,
            kind: FilterKind::DateRange { field, from_param, to_param },
        }
    }

    pub const fn flag(name: &'static str, label: &'static str, field: &'static str) -> Self {
        Self { name, label, kind: FilterKind::Flag { field } }
    }

    pub const fn timing(name: &'static str, label: &'static str, field: &'static str) -> Self {
        Self { name, label, kind: FilterKind::Timing { field } }
    }

    /// Request parameters that address this filter.
    pub fn params(&self) -> Vec<&'static str> {
        match self.kind {
            FilterKind::DateRange { from_param, to_param, .. } => vec![from_param, to_param],
            _ => vec![self.name],
        }
    }
}

/// Current value of a single filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion {
    Text(String),
    Choice(Option<String>),
    DateRange {
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
    Flag(Option<bool>),
    Timing(Option<DateStatus>),
}

impl Criterion {
    /// True when the value differs from its kind's empty default.
    pub fn is_active(&self) -> bool {
        match self {
            Criterion::Text(q) => !q.trim().is_empty(),
            Criterion::Choice(sel) => sel.as_deref().is_some_and(|s| !s.is_empty()),
            Criterion::DateRange { from, to } => from.is_some() || to.is_some(),
            Criterion::Flag(v) => v.is_some(),
            Criterion::Timing(v) => v.is_some(),
        }
    }

    pub fn cleared(&self) -> Criterion {
        match self {
            Criterion::Text(_) => Criterion::Text(String::new()),
            Criterion::Choice(_) => Criterion::Choice(None),
            Criterion::DateRange { .. } => Criterion::DateRange { from: None, to: None },
            Criterion::Flag(_) => Criterion::Flag(None),
            Criterion::Timing(_) => Criterion::Timing(None),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Criterion::Text(_) => "text",
            Criterion::Choice(_) => "choice",
            Criterion::DateRange { .. } => "date range",
            Criterion::Flag(_) => "flag",
            Criterion::Timing(_) => "timing",
        }
    }

    fn normalized(self) -> Criterion {
        match self {
            Criterion::Choice(Some(s)) if s.trim().is_empty() => Criterion::Choice(None),
            other => other,
        }
    }
}

/// The criteria snapshot of one view. Created from a [`FilterSet`] with
/// every filter at its empty default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    values: BTreeMap<&'static str, Criterion>,
}

impl FilterCriteria {
    pub fn get(&self, name: &str) -> Option<&Criterion> {
        self.values.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Criterion)> + '_ {
        self.values.iter().map(|(k, v)| (*k, v))
    }

    /// Every filter back to its empty default.
    pub fn cleared(&self) -> FilterCriteria {
        FilterCriteria {
            values: self.values.iter().map(|(k, v)| (*k, v.cleared())).collect(),
        }
    }

    /// Copy with a single filter reset.
    pub fn without(&self, name: &str) -> FilterCriteria {
        let mut next = self.clone();
        if let Some(v) = next.values.get_mut(name) {
            *v = v.cleared();
        }
        next
    }
}

/// Ordered, declarative list of the filters a view offers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSet {
    defs: Vec<FilterDef>,
}

impl FilterSet {
    pub fn new(defs: Vec<FilterDef>) -> Self {
        Self { defs }
    }

    pub fn defs(&self) -> &[FilterDef] {
        &self.defs
    }

    pub fn get(&self, name: &str) -> Option<&FilterDef> {
        self.defs.iter().find(|d| d.name == name)
    }

    pub fn empty_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            values: self.defs.iter().map(|d| (d.name, d.kind.empty())).collect(),
        }
    }

    /// Replace one filter's value. The value must match the filter's kind.
    pub fn update(
        &self,
        criteria: &mut FilterCriteria,
        name: &str,
        value: Criterion,
    ) -> Result<(), FilterError> {
        let def = self
            .get(name)
            .ok_or_else(|| FilterError::UnknownFilter(name.to_string()))?;

        if std::mem::discriminant(&def.kind.empty()) != std::mem::discriminant(&value) {
            return Err(FilterError::KindMismatch {
                name: name.to_string(),
                expected: def.kind.expected(),
            });
        }

        if let (
            Criterion::Choice(Some(sel)),
            FilterKind::Choice {
                options: ChoiceOptions::Fixed(opts),
                ..
            },
        ) = (&value, def.kind)
        {
            if !sel.is_empty() && !opts.iter().any(|(v, _)| *v == sel.as_str()) {
                return Err(invalid(name, sel));
            }
        }

        criteria.values.insert(def.name, value.normalized());
        Ok(())
    }

    /// Apply one raw request/UI parameter. Date bounds are addressed by
    /// their own parameter names and only touch their half of the range.
    pub fn set_param(
        &self,
        criteria: &mut FilterCriteria,
        key: &str,
        raw: &str,
    ) -> Result<(), FilterError> {
        let def = self
            .defs
            .iter()
            .find(|d| d.params().contains(&key))
            .ok_or_else(|| FilterError::UnknownFilter(key.to_string()))?;

        let value = match def.kind {
            FilterKind::Text { .. } => Criterion::Text(raw.to_string()),
            FilterKind::Choice { .. } => {
                Criterion::Choice((!raw.trim().is_empty()).then(|| raw.to_string()))
            }
            FilterKind::DateRange { from_param, .. } => {
                let bound = parse_bound(raw).map_err(|_| invalid(key, raw))?;
                let (mut from, mut to) = match criteria.get(def.name) {
                    Some(Criterion::DateRange { from, to }) => (*from, *to),
                    _ => (None, None),
                };
                if key == from_param {
                    from = bound;
                } else {
                    to = bound;
                }
                Criterion::DateRange { from, to }
            }
            FilterKind::Flag { .. } => Criterion::Flag(parse_flag(raw).ok_or_else(|| invalid(key, raw))?),
            FilterKind::Timing { .. } => {
                let raw_t = raw.trim();
                if raw_t.is_empty() {
                    Criterion::Timing(None)
                } else {
                    Criterion::Timing(Some(
                        DateStatus::from_param(raw_t).ok_or_else(|| invalid(key, raw))?,
                    ))
                }
            }
        };

        self.update(criteria, def.name, value)
    }

    /// Build a snapshot from request pairs. Pairs this set does not know
    /// or cannot parse are skipped.
    pub fn criteria_from_query<I, K, V>(&self, pairs: I) -> FilterCriteria
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut criteria = self.empty_criteria();
        for (k, v) in pairs {
            match self.set_param(&mut criteria, k.as_ref(), v.as_ref()) {
                Ok(()) => {}
                Err(FilterError::UnknownFilter(_)) => {}
                Err(e) => warn!("Ignoring filter parameter: {e}"),
            }
        }
        criteria
    }

    /// Active criteria as request pairs, in set order.
    pub fn query_pairs(&self, criteria: &FilterCriteria) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        for def in &self.defs {
            let Some(c) = criteria.get(def.name).filter(|c| c.is_active()) else {
                continue;
            };
            match (def.kind, c) {
                (FilterKind::DateRange { from_param, to_param, .. }, Criterion::DateRange { from, to }) => {
                    if let Some(f) = from {
                        out.push((from_param, f.format("%Y-%m-%d").to_string()));
                    }
                    if let Some(t) = to {
                        out.push((to_param, t.format("%Y-%m-%d").to_string()));
                    }
                }
                (_, Criterion::Text(q)) => out.push((def.name, q.clone())),
                (_, Criterion::Choice(Some(s))) => out.push((def.name, s.clone())),
                (_, Criterion::Flag(Some(b))) => out.push((def.name, b.to_string())),
                (_, Criterion::Timing(Some(t))) => out.push((def.name, t.as_param().to_string())),
                _ => {}
            }
        }
        out
    }

    /// URL-encoded form of [`FilterSet::query_pairs`], without the leading `?`.
    pub fn to_query(&self, criteria: &FilterCriteria) -> String {
        let mut ser = form_urlencoded::Serializer::new(String::new());
        for (k, v) in self.query_pairs(criteria) {
            ser.append_pair(k, &v);
        }
        ser.finish()
    }
}

fn invalid(name: &str, raw: &str) -> FilterError {
    FilterError::InvalidValue {
        name: name.to_string(),
        raw: raw.to_string(),
    }
}

fn parse_bound(raw: &str) -> Result<Option<NaiveDate>, chrono::ParseError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map(Some)
}

/// `Some(None)` is an explicit "any".
fn parse_flag(raw: &str) -> Option<Option<bool>> {
    match raw.trim().to_lowercase().as_str() {
        "" => Some(None),
        "true" | "1" | "si" | "sí" => Some(Some(true)),
        "false" | "0" | "no" => Some(Some(false)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIPOS: &[(&str, &str)] = &[("concierto", "Concierto"), ("ensayo", "Ensayo")];

    fn set() -> FilterSet {
        FilterSet::new(vec![
            FilterDef::text("q", "Buscar", &["nombre", "lugar"]),
            FilterDef::choice("tipo", "Tipo", "tipo", ChoiceOptions::Fixed(TIPOS)),
            FilterDef::date_range("fecha", "Fecha", "fecha", "fechaDesde", "fechaHasta"),
            FilterDef::flag("publico", "Público", "publico"),
            FilterDef::timing("estado", "Estado", "fecha"),
        ])
    }

    #[test]
    fn empty_criteria_has_every_filter_inactive() {
        let c = set().empty_criteria();
        assert_eq!(c.iter().count(), 5);
        assert!(c.iter().all(|(_, v)| !v.is_active()));
    }

    #[test]
    fn update_rejects_unknown_and_mismatched() {
        let s = set();
        let mut c = s.empty_criteria();

        assert_eq!(
            s.update(&mut c, "nope", Criterion::Text("x".into())),
            Err(FilterError::UnknownFilter("nope".into()))
        );
        assert_eq!(
            s.update(&mut c, "tipo", Criterion::Flag(Some(true))),
            Err(FilterError::KindMismatch { name: "tipo".into(), expected: "choice" })
        );
        assert!(s.update(&mut c, "tipo", Criterion::Choice(Some("gala".into()))).is_err());
        assert!(s.update(&mut c, "tipo", Criterion::Choice(Some("ensayo".into()))).is_ok());
        assert_eq!(c.get("tipo"), Some(&Criterion::Choice(Some("ensayo".into()))));
    }

    #[test]
    fn date_params_fill_one_combined_range() {
        let s = set();
        let c = s.criteria_from_query([("fechaDesde", "2025-06-05"), ("fechaHasta", "2025-06-15")]);

        assert_eq!(
            c.get("fecha"),
            Some(&Criterion::DateRange {
                from: NaiveDate::from_ymd_opt(2025, 6, 5),
                to: NaiveDate::from_ymd_opt(2025, 6, 15),
            })
        );
    }

    #[test]
    fn bad_params_are_skipped() {
        let s = set();
        let c = s.criteria_from_query([
            ("fechaDesde", "ayer"),
            ("publico", "quizas"),
            ("estado", "luego"),
            ("pagina", "2"),
            ("q", "verano"),
        ]);

        assert!(!c.get("fecha").unwrap().is_active());
        assert!(!c.get("publico").unwrap().is_active());
        assert!(!c.get("estado").unwrap().is_active());
        assert_eq!(c.get("q"), Some(&Criterion::Text("verano".into())));
    }

    #[test]
    fn set_param_reports_invalid_values() {
        let s = set();
        let mut c = s.empty_criteria();
        assert_eq!(
            s.set_param(&mut c, "publico", "quizas"),
            Err(FilterError::InvalidValue { name: "publico".into(), raw: "quizas".into() })
        );
        assert!(s.set_param(&mut c, "publico", "sí").is_ok());
        assert_eq!(c.get("publico"), Some(&Criterion::Flag(Some(true))));
    }

    #[test]
    fn blank_choice_is_unset() {
        let s = set();
        let c = s.criteria_from_query([("tipo", "  ")]);
        assert_eq!(c.get("tipo"), Some(&Criterion::Choice(None)));
    }

    #[test]
    fn query_round_trips() {
        let s = set();
        let c = s.criteria_from_query([
            ("q", "gran concierto"),
            ("tipo", "concierto"),
            ("fechaHasta", "2025-12-31"),
            ("publico", "false"),
            ("estado", "proximo"),
        ]);

        let q = s.to_query(&c);
        assert_eq!(
            q,
            "q=gran+concierto&tipo=concierto&fechaHasta=2025-12-31&publico=false&estado=proximo"
        );

        let again = s.criteria_from_query(form_urlencoded::parse(q.as_bytes()));
        assert_eq!(again, c);
    }

    #[test]
    fn without_resets_only_one() {
        let s = set();
        let c = s.criteria_from_query([("q", "x"), ("tipo", "ensayo")]);
        let c2 = c.without("q");

        assert!(!c2.get("q").unwrap().is_active());
        assert!(c2.get("tipo").unwrap().is_active());
    }

    #[test]
    fn cleared_resets_everything() {
        let s = set();
        let c = s.criteria_from_query([("q", "x"), ("fechaDesde", "2025-01-01"), ("publico", "1")]);
        assert_eq!(c.cleared(), s.empty_criteria());
    }
}
