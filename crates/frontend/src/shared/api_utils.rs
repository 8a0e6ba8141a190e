//! REST client shared by every view.
//!
//! All helpers resolve to `Result<T, String>` where the error is already the
//! message shown to the user. Failed calls are logged at `warn` level.
//! A 401 clears the stored session.

use contracts::shared::api_error::extract_error_message;
use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::config::{config, resolve_api_base};
use crate::system::auth::{context::expire_session, storage};

/// Get the base URL for API requests
///
/// Configured `base_url` wins; otherwise the current page's protocol and
/// hostname with the configured port (3000 by default).
pub fn api_base() -> String {
    let (protocol, hostname) = match web_sys::window() {
        Some(w) => {
            let location = w.location();
            (
                location.protocol().unwrap_or_else(|_| "http:".to_string()),
                location
                    .hostname()
                    .unwrap_or_else(|_| "127.0.0.1".to_string()),
            )
        }
        None => ("http:".to_string(), "127.0.0.1".to_string()),
    };
    resolve_api_base(&config().api, &protocol, &hostname)
}

/// Build a full API URL from a path starting with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Failed request with the HTTP status when the server answered.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestFailure {
    pub status: Option<u16>,
    pub message: String,
}

impl RequestFailure {
    pub fn is_not_found(&self) -> bool {
        self.status == Some(404)
    }

    /// User-facing message where a 404 means the endpoint is not deployed yet.
    pub fn or_unavailable(self, unavailable: &str) -> String {
        if self.is_not_found() {
            unavailable.to_string()
        } else {
            self.message
        }
    }
}

impl From<RequestFailure> for String {
    fn from(value: RequestFailure) -> Self {
        value.message
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    Bearer,
    Public,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }

    fn builder(&self, url: &str) -> RequestBuilder {
        match self {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Delete => Request::delete(url),
        }
    }
}

/// Decode a response body; an empty body decodes as JSON `null`.
pub fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T, String> {
    let text = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(text).map_err(|e| format!("Unexpected response from server: {}", e))
}

/// Lowest-level call. Prefer the typed wrappers below.
pub async fn request<B, T>(
    method: Method,
    path: &str,
    body: Option<&B>,
    auth: Auth,
) -> Result<T, RequestFailure>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let label = method.as_str();
    let fail = |status: Option<u16>, message: String| {
        log::warn!("{} {} failed: {}", label, path, message);
        RequestFailure { status, message }
    };

    let mut builder = method
        .builder(&api_url(path))
        .header("Accept", "application/json");
    if auth == Auth::Bearer {
        if let Some(token) = storage::get_access_token() {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }
    }

    let request = match body {
        Some(b) => builder.json(b),
        None => builder.build(),
    }
    .map_err(|e| fail(None, format!("Failed to prepare request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| fail(None, format!("Network error: {}", e)))?;

    let status = response.status();
    let text = response.text().await.unwrap_or_default();

    if !response.ok() {
        if status == 401 && auth == Auth::Bearer {
            storage::clear_tokens();
            expire_session();
        }
        return Err(fail(Some(status), extract_error_message(status, &text)));
    }

    decode_body(&text).map_err(|e| fail(Some(status), e))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    request::<(), T>(Method::Get, path, None, Auth::Bearer)
        .await
        .map_err(String::from)
}

pub async fn get_public<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    request::<(), T>(Method::Get, path, None, Auth::Public)
        .await
        .map_err(String::from)
}

pub async fn post_json<B, T>(path: &str, body: &B) -> Result<T, String>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    request(Method::Post, path, Some(body), Auth::Bearer)
        .await
        .map_err(String::from)
}

pub async fn post_public<B, T>(path: &str, body: &B) -> Result<T, String>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    request(Method::Post, path, Some(body), Auth::Public)
        .await
        .map_err(String::from)
}

pub async fn put_json<B, T>(path: &str, body: &B) -> Result<T, String>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    request(Method::Put, path, Some(body), Auth::Bearer)
        .await
        .map_err(String::from)
}

pub async fn delete(path: &str) -> Result<(), String> {
    request::<(), serde_json::Value>(Method::Delete, path, None, Auth::Bearer)
        .await
        .map(|_| ())
        .map_err(String::from)
}

/// Path segment escaping for ids and slugs
pub fn seg(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_empty_body() {
        let unit: () = decode_body("").unwrap();
        assert_eq!(unit, ());
        let v: Option<u32> = decode_body("  ").unwrap();
        assert_eq!(v, None);
        let n: u32 = decode_body("42").unwrap();
        assert_eq!(n, 42);
        assert!(decode_body::<u32>("{oops").is_err());
    }

    #[test]
    fn test_failure_message() {
        let f = RequestFailure {
            status: Some(404),
            message: "Not found".into(),
        };
        assert!(f.is_not_found());
        assert_eq!(f.clone().or_unavailable("Later."), "Later.");
        assert_eq!(String::from(f), "Not found");

        let server_error = RequestFailure {
            status: Some(500),
            message: "Boom".into(),
        };
        assert_eq!(server_error.or_unavailable("Later."), "Boom");
    }

    #[test]
    fn test_seg() {
        assert_eq!(seg("a b/c"), "a%20b%2Fc");
    }
}
