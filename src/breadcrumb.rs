//! The diagnostic event produced for every request.

use serde::Serialize;

/// Severity of a breadcrumb. Failed requests are recorded at `Info` too: the
/// breadcrumb is context for a later event, not an event of its own.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Info,
}

/// What a breadcrumb describes. Collectors render `http` crumbs specially.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Http,
}

/// Request/response details attached to a breadcrumb.
///
/// Every field is optional and is serialized only when present, in
/// declaration order: `method`, `uri`, `requestBody`, `statusCode`,
/// `responseBody`, `time`. Presence is explicit: an empty summary or a zero
/// status would still be kept if a producer ever yielded one.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl Metadata {
    /// Keys that are present, in serialization order.
    pub fn keys(&self) -> Vec<&'static str> {
        [
            ("method", self.method.is_some()),
            ("uri", self.uri.is_some()),
            ("requestBody", self.request_body.is_some()),
            ("statusCode", self.status_code.is_some()),
            ("responseBody", self.response_body.is_some()),
            ("time", self.time.is_some()),
        ]
        .into_iter()
        .filter_map(|(key, present)| present.then_some(key))
        .collect()
    }
}

/// A record of one HTTP exchange, handed to a [`Hub`](crate::Hub).
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Breadcrumb {
    level: Level,
    #[serde(rename = "type")]
    kind: Kind,
    category: String,
    message: String,
    #[serde(rename = "data")]
    metadata: Metadata,
}

impl Breadcrumb {
    pub fn new(
        level: Level,
        kind: Kind,
        category: impl Into<String>,
        message: impl Into<String>,
        metadata: Metadata,
    ) -> Self {
        Self {
            level,
            kind,
            category: category.into(),
            message: message.into(),
            metadata,
        }
    }

    pub fn level(&self) -> Level { self.level }
    pub fn kind(&self) -> Kind { self.kind }
    pub fn category(&self) -> &str { &self.category }
    pub fn message(&self) -> &str { &self.message }
    pub fn metadata(&self) -> &Metadata { &self.metadata }

    /// The JSON shape collectors ingest.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
