/*
[INPUT]:  Validated sessions and incoming request headers
[OUTPUT]: Session cookie values and Set-Cookie headers
[POS]:    Auth layer - session cookie encoding
[UPDATE]: When cookie attributes or the cookie payload change
*/

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{Duration, Utc};
use reqwest::header::{COOKIE, HeaderMap};
use serde::{Deserialize, Serialize};

use crate::http::{PlassoError, Result};
use crate::types::Session;

/// Name of the cookie holding the member session
pub const SESSION_COOKIE: &str = "plasso";

/// Payload stored in the session cookie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCookie {
    pub token: String,
    pub logout_url: String,
}

impl SessionCookie {
    /// Encode as a cookie-safe value (base64url of the JSON payload)
    pub fn encode(&self) -> Result<String> {
        let json = serde_json::to_vec(self)?;
        Ok(URL_SAFE_NO_PAD.encode(json))
    }

    /// Decode a value produced by [`SessionCookie::encode`]
    pub fn decode(value: &str) -> Result<Self> {
        let bytes = URL_SAFE_NO_PAD
            .decode(value.trim())
            .map_err(|e| PlassoError::Cookie(format!("invalid base64: {e}")))?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// `Set-Cookie` header value persisting this session for `max_age`
    pub fn set_cookie_header(&self, max_age: Duration) -> Result<String> {
        let value = self.encode()?;
        let expires = (Utc::now() + max_age).format("%a, %d %b %Y %H:%M:%S GMT");
        Ok(format!(
            "{SESSION_COOKIE}={value}; Path=/; Max-Age={}; Expires={expires}; HttpOnly; SameSite=Lax",
            max_age.num_seconds()
        ))
    }
}

impl Session {
    /// Cookie payload for this session
    pub fn cookie(&self) -> SessionCookie {
        SessionCookie {
            token: self.token.clone(),
            logout_url: self.space.logout_url.clone(),
        }
    }
}

/// `Set-Cookie` header value removing the session cookie
pub fn clear_cookie_header() -> String {
    format!("{SESSION_COOKIE}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax")
}

/// Raw values of every `plasso` pair across the request's `Cookie` headers
fn session_cookie_values(headers: &HeaderMap) -> impl Iterator<Item = &str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .filter(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value)
}

/// Whether the request carries a `plasso` cookie at all, decodable or not
pub fn has_session_cookie(headers: &HeaderMap) -> bool {
    session_cookie_values(headers).next().is_some()
}

/// Find the session cookie among the request's `Cookie` headers.
///
/// The first value that decodes wins; malformed values are skipped.
pub fn read_cookie(headers: &HeaderMap) -> Option<SessionCookie> {
    session_cookie_values(headers).find_map(|raw| match SessionCookie::decode(raw) {
        Ok(cookie) => Some(cookie),
        Err(err) => {
            tracing::warn!(error = %err, "ignoring malformed session cookie");
            None
        }
    })
}
