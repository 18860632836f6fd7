//! Request headers the portal insists on.
//!
//! The service rejects or misroutes requests that do not look like the
//! portal's own XHR calls from a desktop Firefox, so these values are fixed.

use url::Url;

use crate::error::{Error, Result};

pub const ACCEPT: &str = "application/json, text/javascript, */*; q=0.01";
pub const ACCEPT_ENCODING: &str = "gzip, deflate, br";
pub const ACCEPT_LANGUAGE: &str = "ru-RU,ru;q=0.8,en-US;q=0.5,en;q=0.3";
pub const CACHE_CONTROL: &str = "no-cache";
pub const PRAGMA: &str = "no-cache";
pub const CONNECTION: &str = "keep-alive";
pub const CONTENT_TYPE: &str = "application/json";
pub const X_REQUESTED_WITH: &str = "XMLHttpRequest";

/// Name of the servlet session cookie captured from the portal root.
pub const SESSION_COOKIE: &str = "JSESSIONID";

/// Full header set for one request. `Host`, `Origin` and `Referer` follow
/// the configured base URL.
pub fn browser_headers(base_url: &Url, user_agent: &str) -> Result<Vec<(String, String)>> {
    let host = base_url
        .host_str()
        .ok_or_else(|| Error::InvalidUrl(format!("no host in {}", base_url)))?;
    let host = match base_url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    };
    let origin = base_url.origin().ascii_serialization();

    let headers = [
        ("Accept", ACCEPT.to_string()),
        ("Accept-Encoding", ACCEPT_ENCODING.to_string()),
        ("Accept-Language", ACCEPT_LANGUAGE.to_string()),
        ("Cache-Control", CACHE_CONTROL.to_string()),
        ("Pragma", PRAGMA.to_string()),
        ("Connection", CONNECTION.to_string()),
        ("Content-Type", CONTENT_TYPE.to_string()),
        ("Host", host),
        ("Referer", format!("{}/", origin)),
        ("Origin", origin),
        ("User-Agent", user_agent.to_string()),
        ("X-Requested-With", X_REQUESTED_WITH.to_string()),
    ];

    Ok(headers
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect())
}

/// Pull `name=value` out of a `Set-Cookie` header if it sets `cookie_name`.
///
/// # Examples
/// ```
/// use intermed_client::headers::parse_set_cookie;
/// assert_eq!(
///     parse_set_cookie("JSESSIONID=abc123; Path=/intermed; HttpOnly", "JSESSIONID"),
///     Some("abc123".to_string())
/// );
/// assert_eq!(parse_set_cookie("other=1", "JSESSIONID"), None);
/// ```
pub fn parse_set_cookie(header: &str, cookie_name: &str) -> Option<String> {
    let pair = header.split(';').next()?;
    let (name, value) = pair.split_once('=')?;
    if name.trim() == cookie_name {
        Some(value.trim().trim_matches('"').to_string())
    } else {
        None
    }
}
