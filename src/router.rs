use crate::api::{AuthContext, RecordSource, SessionAuth};
use crate::errors::ServerError;
use crate::responses::{html_response, ResultResp};
use crate::templates;
use crate::views;
use astra::Request;
use tracing::debug;

pub fn handle(req: Request, source: &dyn RecordSource) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    debug!("{method} {path}");

    match (method, path) {
        ("GET", "/") => {
            let auth = SessionAuth::from_request(&req);
            html_response(templates::pages::home_page(auth.current_user()))
        }
        ("GET", "/eventos") => views::events::view().render(&req, source),
        ("GET", "/noticias") => views::news::view().render(&req, source),
        ("GET", "/asistencias") => views::attendance::view().render(&req, source),
        ("GET", "/informes") => views::reports::view().render(&req, source),
        ("GET", "/informes/export") => views::reports::export(&req, source),
        _ => Err(ServerError::NotFound),
    }
}

/// Decoded query pairs, in request order.
pub fn parse_query(req: &Request) -> Vec<(String, String)> {
    req.uri()
        .query()
        .map(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .into_owned()
                .collect()
        })
        .unwrap_or_default()
}
