//! List views. Each one is a declarative [`ListView`]: which backend
//! collection it shows, the filters it offers and its table columns. The
//! request handling is shared.

pub mod attendance;
pub mod events;
pub mod news;
pub mod reports;

use crate::api::{AuthContext, LoadState, RecordSource, Resource, SessionAuth};
use crate::domain::decode_records;
use crate::errors::ServerError;
use crate::filter::{
    apply_filters, choice_options, summarize, FilterContext, FilterCriteria, FilterSet, Record,
};
use crate::responses::{html_response, ResultResp};
use crate::router::parse_query;
use crate::templates::pages::{list_page, ListPageVm};
use astra::Request;
use serde::de::DeserializeOwned;
use tracing::info;

pub struct Column<R> {
    pub header: &'static str,
    pub cell: fn(&R, &FilterContext) -> String,
}

pub struct ListView<R> {
    pub title: &'static str,
    pub path: &'static str,
    pub resource: Resource,
    pub requires_login: bool,
    pub filters: FilterSet,
    pub columns: Vec<Column<R>>,
    pub export_path: Option<&'static str>,
}

impl<R: Record + DeserializeOwned> ListView<R> {
    /// Fetch and validate the whole collection. Nothing is filtered until
    /// the load has settled as ready.
    pub fn load(&self, source: &dyn RecordSource, auth: &dyn AuthContext) -> Result<Vec<R>, ServerError> {
        if self.requires_login && auth.token().is_none() {
            return Err(ServerError::Unauthorized(
                "Inicia sesión para ver esta sección.".to_string(),
            ));
        }

        let state = LoadState::Idle.start().finish(
            source
                .fetch(self.resource, auth)
                .map(|items| decode_records::<R>(items, self.resource.path())),
        );
        match state {
            LoadState::Ready(records) => Ok(records),
            LoadState::Failed(e) => Err(e.into()),
            LoadState::Idle | LoadState::Loading => Err(ServerError::InternalError),
        }
    }

    pub fn criteria(&self, req: &Request) -> FilterCriteria {
        self.filters.criteria_from_query(parse_query(req))
    }

    pub fn render(&self, req: &Request, source: &dyn RecordSource) -> ResultResp {
        let auth = SessionAuth::from_request(req);
        let records = self.load(source, &auth)?;
        let criteria = self.criteria(req);

        // fresh per request so "today" never goes stale
        let ctx = FilterContext::now();
        let shown = apply_filters(&self.filters, &records, &criteria, &ctx);
        let summary = summarize(&self.filters, &criteria);
        info!(
            "{}: {} of {} records, {} filters active",
            self.path,
            shown.len(),
            records.len(),
            summary.count()
        );

        let choices: Vec<_> = self
            .filters
            .defs()
            .iter()
            .map(|d| (d.name, choice_options(d, &records)))
            .collect();

        let rows: Vec<Vec<String>> = shown
            .iter()
            .map(|r| self.columns.iter().map(|c| (c.cell)(r, &ctx)).collect())
            .collect();

        let export_href = self.export_path.map(|p| {
            let q = self.filters.to_query(&criteria);
            if q.is_empty() {
                p.to_string()
            } else {
                format!("{p}?{q}")
            }
        });

        html_response(list_page(&ListPageVm {
            title: self.title,
            path: self.path,
            user: auth.current_user(),
            filters: &self.filters,
            criteria: &criteria,
            summary: &summary,
            choices: &choices,
            headers: self.columns.iter().map(|c| c.header).collect(),
            rows,
            total: records.len(),
            export_href,
        }))
    }
}
