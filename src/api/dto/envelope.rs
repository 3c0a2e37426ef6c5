//! Response envelope DTOs
//!
//! Every API response carries the same `{data, metadata, status}` shape.
//! Wire keys are camelCase, matching the published contract.

use serde::Serialize;
use serde_json::{Map, Value};

/// One result record: a JSON object keyed by field name.
pub type Record = Map<String, Value>;

#[derive(Serialize, Debug, Clone)]
pub struct Envelope {
    pub data: Vec<Record>,
    pub metadata: Metadata,
    pub status: Status,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub count: usize,
    pub total_count: usize,
    pub page: u32,
    /// Echo of the full request parameter mapping, for client-side correlation.
    pub input: Map<String, Value>,
    /// Diagnostic snapshot, omitted in production-like environments.
    pub debug: Option<DebugInfo>,
    pub auto_sorting: AutoSorting,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub code: u16,
    pub message: String,
}

impl Default for Status {
    fn default() -> Self {
        Self {
            code: 200,
            message: "ok".into(),
        }
    }
}

impl Status {
    /// Merge overrides onto the `{200, "ok"}` defaults; a set field wins.
    pub fn merged(overrides: StatusOverride) -> Self {
        let defaults = Self::default();
        Self {
            code: overrides.code.unwrap_or(defaults.code),
            message: overrides.message.unwrap_or(defaults.message),
        }
    }
}

/// Caller-supplied status fields; unset fields fall back to the defaults.
#[derive(Debug, Clone, Default)]
pub struct StatusOverride {
    pub code: Option<u16>,
    pub message: Option<String>,
}

impl StatusOverride {
    pub fn with(code: u16, message: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            message: Some(message.into()),
        }
    }
}

/// Caller-supplied metadata fields; a set field wins over the computed value.
/// `input` and `debug` are always computed from the request.
#[derive(Debug, Clone, Default)]
pub struct MetadataOverrides {
    pub count: Option<usize>,
    pub total_count: Option<usize>,
    pub page: Option<u32>,
    pub auto_sorting: Option<AutoSorting>,
}

/// Outcome of the opportunistic query-parameter-driven sort.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AutoSorting {
    pub status: SortStatus,
    pub error: Option<String>,
}

impl AutoSorting {
    pub fn not_attempted() -> Self {
        Self {
            status: SortStatus::False,
            error: None,
        }
    }

    pub fn applied() -> Self {
        Self {
            status: SortStatus::True,
            error: None,
        }
    }

    pub fn failed(err: impl ToString) -> Self {
        Self {
            status: SortStatus::Failed,
            error: Some(err.to_string()),
        }
    }
}

/// Serialized as the strings "true" / "false" / "failed".
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortStatus {
    True,
    False,
    Failed,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DebugInfo {
    #[serde(rename = "clientIP")]
    pub client_ip: Option<String>,
    #[serde(rename = "serverIP")]
    pub server_ip: Option<String>,
    pub server_name: Option<String>,
    pub server_sig: Option<String>,
    pub request: DebugRequestInfo,
    pub environment: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct DebugRequestInfo {
    pub method: String,
    pub path: String,
    pub domain: Option<String>,
    pub full_url: Option<String>,
    /// Client-supplied proxy flag, `false` when absent.
    pub proxy: Value,
    pub params: Map<String, Value>,
    /// Placeholder, not wired to any cache.
    #[serde(rename = "cacheHit")]
    pub cache_hit: Option<bool>,
}
