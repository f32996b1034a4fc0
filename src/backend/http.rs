//! Header builders for backend requests

use crate::Result;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, COOKIE};

/// Cookie Keystone reads the session token from.
pub const SESSION_COOKIE: &str = "keystonejs-session";

/// Build JSON headers, plus the session cookie when a token is known.
pub fn session_header_map(token: Option<&str>) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if let Some(token) = token {
        let cookie = format!("{}={}", SESSION_COOKIE, token);
        h.insert(COOKIE, HeaderValue::from_str(&cookie)?);
    }
    Ok(h)
}

/// Headers PostgREST expects on every Supabase call.
pub fn supabase_header_map(api_key: &str) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h.insert(HeaderName::from_static("apikey"), HeaderValue::from_str(api_key)?);
    h.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", api_key))?,
    );
    Ok(h)
}
