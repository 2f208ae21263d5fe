//! Async HTTP client for the LibreNMS REST API
//!
//! Thin wrapper over reqwest that pins the `/api/v0` prefix, sends the
//! `X-Auth-Token` header on every request, and decodes JSON bodies.
//! Error bodies are preserved verbatim so callers can surface what the
//! API actually said.

use crate::config::LibreNmsConfig;
use lnms_domain::{Error, Result};
use reqwest::Method;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Query-string parameters for an API request
pub type Query = serde_json::Map<String, Value>;

/// LibreNMS API client
#[derive(Clone)]
pub struct LibreNmsClient {
    http: reqwest::Client,
    base_url: String,
}

impl LibreNmsClient {
    /// Build a client from connection settings
    pub fn new(config: &LibreNmsConfig) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        let mut token = reqwest::header::HeaderValue::from_str(&config.token)
            .map_err(|e| Error::configuration_with_source("Invalid API token", e))?;
        token.set_sensitive(true);
        headers.insert("X-Auth-Token", token);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(!config.verify_ssl)
            .build()
            .map_err(|e| Error::network_with_source("Failed to build HTTP client", e))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET an API path, e.g. `devices/42`
    pub async fn get(&self, path: &str, query: Option<&Query>) -> Result<Value> {
        self.request(Method::GET, path, query, None).await
    }

    pub async fn post(&self, path: &str, body: Option<&Value>) -> Result<Value> {
        self.request(Method::POST, path, None, body).await
    }

    pub async fn put(&self, path: &str, body: Option<&Value>) -> Result<Value> {
        self.request(Method::PUT, path, None, body).await
    }

    pub async fn patch(&self, path: &str, body: Option<&Value>) -> Result<Value> {
        self.request(Method::PATCH, path, None, body).await
    }

    /// DELETE an API path; some endpoints take a JSON body
    pub async fn delete(&self, path: &str, body: Option<&Value>) -> Result<Value> {
        self.request(Method::DELETE, path, None, body).await
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        query: Option<&Query>,
        body: Option<&Value>,
    ) -> Result<Value> {
        let url = format!("{}/api/v0/{}", self.base_url, path);
        debug!(method = %method, url = %url, "LibreNMS API request");

        let mut request = self.http.request(method, &url);
        if let Some(query) = query {
            let pairs: Vec<(&str, String)> = query
                .iter()
                .map(|(k, v)| (k.as_str(), query_value(v)))
                .collect();
            request = request.query(&pairs);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::network_with_source(format!("Request to {url} failed"), e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::api(status.as_u16(), body));
        }

        response
            .json()
            .await
            .map_err(|e| Error::network_with_source("Invalid JSON in API response", e))
    }
}

/// Render a JSON value as a query-string value
///
/// Strings pass through unquoted; everything else keeps its JSON form.
fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Percent-encode a value for use as a single URL path segment
///
/// Matches RFC 3986 unreserved characters, so `/`, spaces, and other
/// delimiters in hostnames or interface names are escaped.
pub fn encode_segment(segment: &str) -> String {
    let mut encoded = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                encoded.push(byte as char);
            }
            other => {
                encoded.push('%');
                encoded.push(char::from_digit(u32::from(other >> 4), 16).unwrap_or('0').to_ascii_uppercase());
                encoded.push(char::from_digit(u32::from(other & 0x0f), 16).unwrap_or('0').to_ascii_uppercase());
            }
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_segment_passes_unreserved() {
        assert_eq!(encode_segment("router-01.example_net~x"), "router-01.example_net~x");
    }

    #[test]
    fn encode_segment_escapes_delimiters() {
        assert_eq!(encode_segment("GigabitEthernet0/1"), "GigabitEthernet0%2F1");
        assert_eq!(encode_segment("port 1"), "port%201");
        assert_eq!(encode_segment("a&b=c"), "a%26b%3Dc");
    }

    #[test]
    fn query_value_strips_string_quotes() {
        assert_eq!(query_value(&Value::String("up".into())), "up");
        assert_eq!(query_value(&Value::from(7)), "7");
        assert_eq!(query_value(&Value::Bool(true)), "true");
    }
}
