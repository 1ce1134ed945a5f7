// src/api/client.rs

use crate::api::{ApiError, AuthContext};
use crate::config::ApiConfig;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

const USER_AGENT: &str = concat!("orquesta_admin/", env!("CARGO_PKG_VERSION"));

/// Collections exposed by the orchestra backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Events,
    News,
    Attendance,
    Reports,
}

impl Resource {
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Events => "eventos",
            Resource::News => "noticias",
            Resource::Attendance => "asistencias",
            Resource::Reports => "informes",
        }
    }
}

/// Where list views get their raw records from.
pub trait RecordSource: Send + Sync {
    fn fetch(&self, resource: Resource, auth: &dyn AuthContext) -> Result<Vec<Value>, ApiError>;
}

pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(cfg: &ApiConfig) -> Result<Self, ApiError> {
        // join() drops the last segment unless the base ends with '/'
        let mut base = cfg.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base).map_err(|e| ApiError::Url(format!("{base}: {e}")))?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        info!("API client ready for {base_url}");
        Ok(Self { client, base_url })
    }

    pub fn url_for(&self, resource: Resource) -> Result<Url, ApiError> {
        self.base_url
            .join(resource.path())
            .map_err(|e| ApiError::Url(e.to_string()))
    }
}

impl RecordSource for ApiClient {
    fn fetch(&self, resource: Resource, auth: &dyn AuthContext) -> Result<Vec<Value>, ApiError> {
        let url = self.url_for(resource)?;
        debug!("GET {url}");

        let mut request = self.client.get(url.clone());
        if let Some(token) = auth.token() {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            warn!("Backend refused {url}: {status}");
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            // the body stays in the logs; error pages only get the status
            let body = response.text().unwrap_or_default();
            warn!("Backend error for {url}: {status}: {}", body_excerpt(&body));
            return Err(ApiError::Status(status.as_u16()));
        }

        let body: Value = response
            .json()
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        unwrap_collection(body)
    }
}

const LOGGED_BODY_CHARS: usize = 200;

fn body_excerpt(body: &str) -> &str {
    match body.char_indices().nth(LOGGED_BODY_CHARS) {
        Some((i, _)) => &body[..i],
        None => body,
    }
}

/// The backend returns either a bare array or `{ "data": [...] }`.
pub(crate) fn unwrap_collection(body: Value) -> Result<Vec<Value>, ApiError> {
    match body {
        Value::Array(items) => Ok(items),
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => Ok(items),
            _ => Err(ApiError::Decode("expected an array of records".into())),
        },
        _ => Err(ApiError::Decode("expected an array of records".into())),
    }
}
