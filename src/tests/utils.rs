use crate::api::{ApiError, AuthContext, RecordSource, Resource};
use crate::responses::error_to_response;
use crate::router::handle;
use astra::{Body, Request, Response};
use http::Method;
use serde_json::Value;
use std::collections::HashMap;
use std::io::Read;
use std::sync::Mutex;

/// In-memory backend: canned JSON per resource, or a canned failure.
#[derive(Default)]
pub struct FixtureSource {
    data: HashMap<Resource, Vec<Value>>,
    failure: Option<ApiError>,
    /// Token seen on each fetch, in order
    pub tokens: Mutex<Vec<Option<String>>>,
}

impl FixtureSource {
    pub fn with(mut self, resource: Resource, items: Value) -> Self {
        self.data
            .insert(resource, items.as_array().cloned().unwrap_or_default());
        self
    }

    pub fn failing(err: ApiError) -> Self {
        Self {
            failure: Some(err),
            ..Self::default()
        }
    }
}

impl RecordSource for FixtureSource {
    fn fetch(&self, resource: Resource, auth: &dyn AuthContext) -> Result<Vec<Value>, ApiError> {
        self.tokens
            .lock()
            .unwrap()
            .push(auth.token().map(str::to_string));

        if let Some(e) = &self.failure {
            return Err(e.clone());
        }
        Ok(self.data.get(&resource).cloned().unwrap_or_default())
    }
}

pub fn get(uri: &str, token: Option<&str>) -> Request {
    let mut builder = http::Request::builder().method(Method::GET).uri(uri);
    if let Some(t) = token {
        builder = builder.header("Cookie", format!("token={t}"));
    }
    builder.body(Body::empty()).unwrap()
}

/// Runs the request through the router, turning errors into their pages
/// the same way the server does.
pub fn send(req: Request, source: &FixtureSource) -> Response {
    match handle(req, source) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    }
}

pub fn body_string(resp: &mut Response) -> String {
    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();
    String::from_utf8(body_bytes).unwrap()
}
