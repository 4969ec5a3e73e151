//! Middleware configuration.
//!
//! Usually set through [`BreadcrumbMiddleware::builder`](crate::BreadcrumbMiddleware::builder).
//! [`MiddlewareConfig`] is the same settings as plain data, deserializable
//! from whatever configuration format the application already loads:
//!
//! ```rust
//! use crumbs::MiddlewareConfig;
//!
//! let config: MiddlewareConfig = serde_json::from_str(r#"{
//!     "category": "payments-api",
//!     "redacted_strings": ["sk_live_123"]
//! }"#).unwrap();
//!
//! assert_eq!(config.message, "HTTP request");
//! assert_eq!(config.truncate_body_at, Some(512));
//! ```

use std::num::NonZeroUsize;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::summarizer::DEFAULT_TRUNCATE_AT;

/// Settings shared read-only by every request the middleware instruments.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct MiddlewareConfig {
    /// Breadcrumb category. Default `"http"`.
    pub category: String,
    /// Breadcrumb message. Default `"HTTP request"`.
    pub message: String,
    /// Secrets replaced by `[Filtered]` in URIs and body summaries, in order.
    pub redacted_strings: Vec<String>,
    /// Body summary length in characters; `None` disables body summaries.
    pub truncate_body_at: Option<usize>,
}

impl MiddlewareConfig {
    /// Checks the settings, returning the truncation length to summarize with.
    pub fn validate(&self) -> Result<Option<NonZeroUsize>> {
        if let Some(i) = self.redacted_strings.iter().position(String::is_empty) {
            return Err(Error::EmptyRedactedString(i));
        }
        match self.truncate_body_at {
            None => Ok(None),
            Some(n) => NonZeroUsize::new(n).map(Some).ok_or(Error::InvalidTruncation),
        }
    }
}

impl Default for MiddlewareConfig {
    fn default() -> Self {
        Self {
            category: "http".to_owned(),
            message: "HTTP request".to_owned(),
            redacted_strings: Vec::new(),
            truncate_body_at: Some(DEFAULT_TRUNCATE_AT),
        }
    }
}
