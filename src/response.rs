//! Incoming HTTP response type.
//!
//! Transports hand back a [`Response`] with its body already buffered. That is
//! what makes summaries safe to take: reading a [`Bytes`] handle leaves it
//! intact for whoever reads it next.

use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use http_body_util::{BodyExt, Full};

// ── Response ─────────────────────────────────────────────────────────────────

/// An HTTP response received from the transport.
///
/// ```rust
/// use crumbs::Response;
/// use http::StatusCode;
///
/// Response::new(StatusCode::OK);
/// Response::text(StatusCode::NOT_FOUND, "no such user");
///
/// Response::builder()
///     .status(StatusCode::CREATED)
///     .header("location", "/users/42")
///     .body(r#"{"id":42}"#);
/// ```
#[derive(Clone, Debug)]
pub struct Response {
    pub(crate) status: StatusCode,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Bytes,
}

impl Response {
    /// Response with no body.
    pub fn new(status: StatusCode) -> Self {
        Self { status, headers: HeaderMap::new(), body: Bytes::new() }
    }

    /// Response with a `text/plain; charset=utf-8` body.
    pub fn text(status: StatusCode, body: impl Into<String>) -> Self {
        Self::builder()
            .status(status)
            .header("content-type", "text/plain; charset=utf-8")
            .body(body.into())
    }

    /// Builder for responses that need a custom status, headers or body.
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder { headers: HeaderMap::new(), status: StatusCode::OK }
    }

    pub fn status(&self) -> StatusCode { self.status }
    pub fn headers(&self) -> &HeaderMap { &self.headers }
    pub fn body(&self) -> &Bytes { &self.body }

    /// Buffers an `http::Response` into a [`Response`].
    pub async fn from_http<B>(resp: http::Response<B>) -> Result<Self, B::Error>
    where
        B: hyper::body::Body,
    {
        let (parts, body) = resp.into_parts();
        let body = body.collect().await?.to_bytes();
        Ok(Self { status: parts.status, headers: parts.headers, body })
    }

    /// Converts back into an `http::Response` that replays the buffered body.
    pub fn into_http(self) -> http::Response<Full<Bytes>> {
        let mut resp = http::Response::new(Full::new(self.body));
        *resp.status_mut() = self.status;
        *resp.headers_mut() = self.headers;
        resp
    }
}

impl From<http::Response<Bytes>> for Response {
    fn from(resp: http::Response<Bytes>) -> Self {
        let (parts, body) = resp.into_parts();
        Self { status: parts.status, headers: parts.headers, body }
    }
}

// ── ResponseBuilder ───────────────────────────────────────────────────────────

/// Fluent builder for [`Response`].
///
/// Obtain via [`Response::builder()`]. Defaults to `200 OK`. Terminated by
/// [`body`](ResponseBuilder::body) or [`no_body`](ResponseBuilder::no_body).
pub struct ResponseBuilder {
    headers: HeaderMap,
    status: StatusCode,
}

impl ResponseBuilder {
    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Appends a header.
    ///
    /// # Panics
    ///
    /// Panics if `name` or `value` is not a valid header component.
    pub fn header(mut self, name: &'static str, value: &str) -> Self {
        let value = HeaderValue::from_str(value)
            .unwrap_or_else(|e| panic!("invalid header value for `{name}`: {e}"));
        self.headers.append(HeaderName::from_static(name), value);
        self
    }

    pub fn body(self, body: impl Into<Bytes>) -> Response {
        Response { status: self.status, headers: self.headers, body: body.into() }
    }

    pub fn no_body(self) -> Response {
        self.body(Bytes::new())
    }
}
