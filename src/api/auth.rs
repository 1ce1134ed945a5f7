// src/api/auth.rs

use astra::Request;
use base64::Engine;
use serde::Deserialize;

pub const TOKEN_COOKIE: &str = "token";

/// Claims we read out of the backend's JWT payload.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CurrentUser {
    pub nombre: Option<String>,
    pub email: Option<String>,
    pub rol: Option<String>,
}

impl CurrentUser {
    pub fn display_name(&self) -> &str {
        self.nombre
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("Usuario")
    }

    pub fn is_admin(&self) -> bool {
        self.rol.as_deref() == Some("admin")
    }
}

/// Access to the caller's credentials, handed to whatever needs them.
pub trait AuthContext {
    fn token(&self) -> Option<&str>;
    fn current_user(&self) -> Option<&CurrentUser>;
}

/// Credentials carried by one incoming request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionAuth {
    token: Option<String>,
    user: Option<CurrentUser>,
}

impl SessionAuth {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn from_token(token: impl Into<String>) -> Self {
        let token = token.into();
        let user = decode_claims(&token);
        Self {
            token: Some(token),
            user,
        }
    }

    /// Reads the `token` cookie, falling back to an `Authorization: Bearer`
    /// header.
    pub fn from_request(req: &Request) -> Self {
        let from_cookie = req
            .headers()
            .get_all("Cookie")
            .iter()
            .filter_map(|v| v.to_str().ok())
            .flat_map(|v| v.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(k, _)| *k == TOKEN_COOKIE)
            .map(|(_, v)| v.trim().to_string());

        let from_header = || {
            req.headers()
                .get("Authorization")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.strip_prefix("Bearer "))
                .map(|v| v.trim().to_string())
        };

        match from_cookie.or_else(from_header).filter(|t| !t.is_empty()) {
            Some(token) => Self::from_token(token),
            None => Self::anonymous(),
        }
    }
}

impl AuthContext for SessionAuth {
    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn current_user(&self) -> Option<&CurrentUser> {
        self.user.as_ref()
    }
}

/// Decodes the payload segment without verifying the signature; the
/// backend does that on every call.
fn decode_claims(token: &str) -> Option<CurrentUser> {
    let payload = token.split('.').nth(1)?;
    let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .ok()?;
    serde_json::from_slice(&bytes).ok()
}
