use std::collections::HashMap;
use std::convert::Infallible;
use std::net::SocketAddr;

use axum::extract::{ConnectInfo, FromRequestParts, Query};
use axum::http::header::HOST;
use axum::http::request::Parts;
use serde_json::{Map, Value};

/// Snapshot of the incoming request taken before the handler runs: method,
/// path, root URL, full URL, the query parameter mapping, and the client
/// address when connect-info is available. Every field tolerates absence.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub method: String,
    pub path: String,
    pub domain: Option<String>,
    pub full_url: Option<String>,
    pub client_ip: Option<String>,
    pub params: Map<String, Value>,
}

impl RequestContext {
    pub fn param(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    pub fn param_str(&self, key: &str) -> Option<&str> {
        self.params.get(key).and_then(Value::as_str)
    }

    pub fn sort_key(&self) -> Option<&str> {
        self.param_str("sortKey")
    }

    pub fn sort_dir(&self) -> Option<&str> {
        self.param_str("sortDir")
    }

    /// Client-supplied proxy flag; `false` when the parameter is absent.
    pub fn proxy_flag(&self) -> Value {
        self.params.get("proxy").cloned().unwrap_or(Value::Bool(false))
    }
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Unparsable query strings degrade to an empty mapping rather than
        // rejecting the request.
        let params: Map<String, Value> = Query::<HashMap<String, String>>::try_from_uri(&parts.uri)
            .map(|Query(map)| map)
            .unwrap_or_default()
            .into_iter()
            .map(|(key, value)| (key, Value::String(value)))
            .collect();

        let host = parts
            .headers
            .get(HOST)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        let domain = host.as_deref().map(|host| format!("http://{host}"));
        let full_url = host.as_deref().map(|host| format!("http://{host}{}", parts.uri));

        let client_ip = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string());

        Ok(Self {
            method: parts.method.to_string(),
            path: parts.uri.path().to_string(),
            domain,
            full_url,
            client_ip,
            params,
        })
    }
}
