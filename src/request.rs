//! Outgoing HTTP request type.

use bytes::Bytes;
use http::uri::InvalidUri;
use http::{HeaderMap, HeaderName, HeaderValue, Method, Uri};
use http_body_util::{BodyExt, Full};

/// An outgoing HTTP request with a fully buffered body.
///
/// The body is a [`Bytes`] handle: summarizers borrow it, the transport gets
/// the very same bytes afterwards. Nothing in this crate ever consumes it.
///
/// Besides the parsed [`Uri`], a request keeps its target as text. Requests
/// built from a string keep that string verbatim; `http::Uri` renders an empty
/// path as `/`, which would turn `https://example.com?a=b` into
/// `https://example.com/?a=b` in breadcrumbs.
#[derive(Clone, Debug)]
pub struct Request {
    pub(crate) method: Method,
    pub(crate) uri: Uri,
    pub(crate) target: String,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Bytes,
}

impl Request {
    pub fn new(method: Method, uri: Uri) -> Self {
        let target = render_target(&uri);
        Self { method, uri, target, headers: HeaderMap::new(), body: Bytes::new() }
    }

    /// Parses `target` and keeps it verbatim for [`target`](Self::target).
    pub fn parse(method: Method, target: &str) -> Result<Self, InvalidUri> {
        let uri = target.parse()?;
        Ok(Self {
            method,
            uri,
            target: target.to_owned(),
            headers: HeaderMap::new(),
            body: Bytes::new(),
        })
    }

    /// `GET` request for `uri`.
    ///
    /// # Panics
    ///
    /// Panics if `uri` does not parse.
    pub fn get(uri: &str) -> Self {
        Self::parse(Method::GET, uri).expect("invalid request uri")
    }

    /// `POST` request for `uri` with the given body.
    ///
    /// # Panics
    ///
    /// Panics if `uri` does not parse.
    pub fn post(uri: &str, body: impl Into<Bytes>) -> Self {
        Self::parse(Method::POST, uri).expect("invalid request uri").with_body(body)
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    pub fn method(&self) -> &Method { &self.method }
    pub fn uri(&self) -> &Uri { &self.uri }
    pub fn headers(&self) -> &HeaderMap { &self.headers }
    pub fn body(&self) -> &Bytes { &self.body }

    /// The request target as text: the caller's string when the request was
    /// built from one, otherwise the rendered [`Uri`].
    pub fn target(&self) -> &str { &self.target }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Buffers an `http::Request` into a [`Request`].
    ///
    /// The whole body stream is collected up front so later readers replay it
    /// from memory instead of racing for a single-use stream.
    pub async fn from_http<B>(req: http::Request<B>) -> Result<Self, B::Error>
    where
        B: hyper::body::Body,
    {
        let (parts, body) = req.into_parts();
        let body = body.collect().await?.to_bytes();
        let target = render_target(&parts.uri);
        Ok(Self { method: parts.method, uri: parts.uri, target, headers: parts.headers, body })
    }

    /// Converts back into an `http::Request` that replays the buffered body.
    pub fn into_http(self) -> http::Request<Full<Bytes>> {
        let mut req = http::Request::new(Full::new(self.body));
        *req.method_mut() = self.method;
        *req.uri_mut() = self.uri;
        *req.headers_mut() = self.headers;
        req
    }
}

impl From<http::Request<Bytes>> for Request {
    fn from(req: http::Request<Bytes>) -> Self {
        let (parts, body) = req.into_parts();
        let target = render_target(&parts.uri);
        Self { method: parts.method, uri: parts.uri, target, headers: parts.headers, body }
    }
}

// `scheme://authority` followed by the stored path and query. A query with no
// path stays as given; only a uri with neither renders its path as `/`.
fn render_target(uri: &Uri) -> String {
    let mut out = String::new();
    if let Some(scheme) = uri.scheme_str() {
        out.push_str(scheme);
        out.push_str("://");
    }
    if let Some(authority) = uri.authority() {
        out.push_str(authority.as_str());
    }
    if let Some(path_and_query) = uri.path_and_query() {
        out.push_str(path_and_query.as_str());
    }
    out
}
