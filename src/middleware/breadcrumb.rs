//! Breadcrumb middleware.
//!
//! # Per-request flow
//!
//! ```text
//! Instrumented::call(req, opts)
//!   ├─ method, redacted uri, request summary      ← read before sending
//!   ├─ start = now
//!   ├─ inner.call(req, opts).await                ← pending
//!   ├─ elapsed = start.elapsed()                  ← settled
//!   ├─ response = Ok(resp) | Err(e).response()
//!   ├─ hub.add_breadcrumb(..)                     ← exactly once
//!   └─ return the outcome untouched
//! ```
//!
//! Both outcomes go through the same completion path, so a request that fails
//! gets the same breadcrumb as one that succeeds, minus whatever response data
//! its error could not provide. The error itself is handed back as-is.
//!
//! Nothing is mutated per request: concurrent calls share the configuration
//! through one `Arc` and never take a lock. If the returned future is dropped
//! before it settles, no breadcrumb is recorded.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, warn};

use crate::breadcrumb::{Breadcrumb, Kind, Level, Metadata};
use crate::config::MiddlewareConfig;
use crate::error::{ResponseCarrier, Result};
use crate::handler::{BoxFuture, Handler};
use crate::hub::Hub;
use crate::message::Message;
use crate::request::Request;
use crate::response::Response;
use crate::summarizer::{BodySummarizer, DefaultSummarizer};

use super::duration::format_duration;
use super::redact::Redactor;

// ── BreadcrumbMiddleware ──────────────────────────────────────────────────────

/// Leaves one breadcrumb on a [`Hub`] for every request sent through the
/// handlers it wraps.
///
/// Cloning is cheap: clones share the same configuration and hub.
///
/// ```rust
/// use crumbs::{BreadcrumbMiddleware, Handler, MemoryHub, Request, Response};
/// use http::StatusCode;
///
/// # async fn run() {
/// let hub = MemoryHub::new();
/// let middleware = BreadcrumbMiddleware::builder()
///     .category("github")
///     .redact("ghp_secret")
///     .build(hub.clone())
///     .unwrap();
///
/// let send = |_req: Request, _opts: ()| async {
///     Ok::<_, std::io::Error>(Response::new(StatusCode::OK))
/// };
/// let client = middleware.wrap(send);
///
/// client.call(Request::get("https://api.github.com/?token=ghp_secret"), ()).await.unwrap();
///
/// let crumb = &hub.breadcrumbs()[0];
/// assert_eq!(crumb.metadata().uri.as_deref(), Some("https://api.github.com/?token=[Filtered]"));
/// # }
/// ```
#[derive(Clone)]
pub struct BreadcrumbMiddleware {
    inner: Arc<Inner>,
}

struct Inner {
    category: String,
    message: String,
    redactor: Redactor,
    /// `None` when body summaries are disabled.
    summarizer: Option<Arc<dyn BodySummarizer>>,
    hub: Arc<dyn Hub>,
}

/// Request-side fields, captured before the request is sent.
struct RequestFields {
    method: String,
    uri: String,
    body: Option<String>,
}

impl BreadcrumbMiddleware {
    /// Builds a middleware from a ready-made configuration.
    pub fn new(config: MiddlewareConfig, hub: impl Hub) -> Result<Self> {
        BreadcrumbMiddlewareBuilder::from(config).build(hub)
    }

    /// Builder starting from [`MiddlewareConfig::default`].
    pub fn builder() -> BreadcrumbMiddlewareBuilder {
        BreadcrumbMiddlewareBuilder::from(MiddlewareConfig::default())
    }

    /// Returns a handler of the same shape as `handler` that records a
    /// breadcrumb for every request it sends.
    pub fn wrap<H>(&self, handler: H) -> Instrumented<H> {
        Instrumented { handler, middleware: self.clone() }
    }

    pub fn category(&self) -> &str {
        &self.inner.category
    }

    pub fn message(&self) -> &str {
        &self.inner.message
    }

    fn describe_request(&self, req: &Request) -> RequestFields {
        RequestFields {
            method: req.method().to_string(),
            uri: self.inner.redactor.filter(req.target()),
            body: self.summarize(Message::Request(req)),
        }
    }

    /// Runs the configured summarizer, redacting its output.
    ///
    /// A panicking summarizer costs the breadcrumb this one field, never the
    /// request.
    fn summarize(&self, message: Message<'_>) -> Option<String> {
        let summarizer = self.inner.summarizer.as_ref()?;
        match catch_unwind(AssertUnwindSafe(|| summarizer.summarize(message))) {
            Ok(summary) => summary.map(|s| self.inner.redactor.filter(&s)),
            Err(_) => {
                let side = match message {
                    Message::Request(_) => "request",
                    Message::Response(_) => "response",
                };
                warn!(side, "body summarizer panicked, summary omitted");
                None
            }
        }
    }

    fn record(&self, request: RequestFields, response: Option<&Response>, elapsed: Duration) {
        let metadata = Metadata {
            method: Some(request.method),
            uri: Some(request.uri),
            request_body: request.body,
            status_code: response.map(|resp| resp.status().as_u16()),
            response_body: response.and_then(|resp| self.summarize(Message::Response(resp))),
            time: Some(format_duration(elapsed)),
        };

        debug!(
            method = metadata.method.as_deref(),
            uri = metadata.uri.as_deref(),
            status = metadata.status_code,
            time = metadata.time.as_deref(),
            "recording breadcrumb",
        );

        let breadcrumb = Breadcrumb::new(
            Level::Info,
            Kind::Http,
            &self.inner.category,
            &self.inner.message,
            metadata,
        );
        if catch_unwind(AssertUnwindSafe(|| self.inner.hub.add_breadcrumb(breadcrumb))).is_err() {
            warn!("hub panicked while recording a breadcrumb");
        }
    }
}

impl std::fmt::Debug for BreadcrumbMiddleware {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BreadcrumbMiddleware")
            .field("category", &self.inner.category)
            .field("message", &self.inner.message)
            .field("summaries", &self.inner.summarizer.is_some())
            .finish_non_exhaustive()
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Fluent builder for [`BreadcrumbMiddleware`].
///
/// Obtain via [`BreadcrumbMiddleware::builder()`]. Validation happens once, in
/// [`build`](BreadcrumbMiddlewareBuilder::build).
pub struct BreadcrumbMiddlewareBuilder {
    config: MiddlewareConfig,
    summarizer: Option<Arc<dyn BodySummarizer>>,
}

impl BreadcrumbMiddlewareBuilder {
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.config.category = category.into();
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.config.message = message.into();
        self
    }

    /// Adds one secret to filter out of URIs and body summaries.
    pub fn redact(mut self, secret: impl Into<String>) -> Self {
        self.config.redacted_strings.push(secret.into());
        self
    }

    /// Replaces the list of secrets.
    pub fn redacted_strings<I, S>(mut self, secrets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.redacted_strings = secrets.into_iter().map(Into::into).collect();
        self
    }

    /// Summary length for error response bodies, in characters. Must be at least 1.
    pub fn truncate_body_at(mut self, chars: usize) -> Self {
        self.config.truncate_body_at = Some(chars);
        self
    }

    /// Never put request or response bodies into breadcrumbs.
    ///
    /// Takes precedence over [`summarizer`](Self::summarizer).
    pub fn without_body_summaries(mut self) -> Self {
        self.config.truncate_body_at = None;
        self
    }

    /// Replaces the [`DefaultSummarizer`]. Used for both requests and responses.
    pub fn summarizer(mut self, summarizer: impl BodySummarizer) -> Self {
        self.summarizer = Some(Arc::new(summarizer));
        self
    }

    pub fn build(self, hub: impl Hub) -> Result<BreadcrumbMiddleware> {
        let truncate_at = self.config.validate()?;
        let summarizer = truncate_at.map(|n| {
            self.summarizer
                .unwrap_or_else(|| Arc::new(DefaultSummarizer::new(n)) as Arc<dyn BodySummarizer>)
        });

        let MiddlewareConfig { category, message, redacted_strings, .. } = self.config;
        let inner = Inner {
            category,
            message,
            redactor: Redactor::new(redacted_strings),
            summarizer,
            hub: Arc::new(hub),
        };
        Ok(BreadcrumbMiddleware { inner: Arc::new(inner) })
    }
}

impl From<MiddlewareConfig> for BreadcrumbMiddlewareBuilder {
    fn from(config: MiddlewareConfig) -> Self {
        Self { config, summarizer: None }
    }
}

// ── Instrumented ──────────────────────────────────────────────────────────────

/// A handler wrapped by [`BreadcrumbMiddleware::wrap`].
///
/// Has the same [`Handler`] shape as the handler it wraps.
#[derive(Clone, Debug)]
pub struct Instrumented<H> {
    handler: H,
    middleware: BreadcrumbMiddleware,
}

impl<H> Instrumented<H> {
    pub fn get_ref(&self) -> &H {
        &self.handler
    }

    pub fn into_inner(self) -> H {
        self.handler
    }
}

impl<H, O, E> Handler<O, E> for Instrumented<H>
where
    H: Handler<O, E>,
    E: ResponseCarrier + Send + 'static,
{
    fn call(&self, request: Request, options: O) -> BoxFuture<Result<Response, E>> {
        let middleware = self.middleware.clone();
        let fields = middleware.describe_request(&request);

        let start = Instant::now();
        let pending = self.handler.call(request, options);

        Box::pin(async move {
            let outcome = pending.await;
            let elapsed = start.elapsed();

            let response = match &outcome {
                Ok(resp) => Some(resp),
                Err(e) => e.response(),
            };
            middleware.record(fields, response, elapsed);

            outcome
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use http::StatusCode;

    use super::*;
    use crate::error::RequestError;
    use crate::hub::MemoryHub;

    const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit.";

    fn respond(resp: Response) -> impl Handler<(), RequestError> {
        move |_req: Request, _opts: ()| {
            let resp = resp.clone();
            async move { Ok::<_, RequestError>(resp) }
        }
    }

    fn fail<F>(make: F) -> impl Handler<(), RequestError>
    where
        F: Fn() -> RequestError + Send + Sync + 'static,
    {
        move |_req: Request, _opts: ()| {
            let err = make();
            async move { Err::<Response, _>(err) }
        }
    }

    async fn send<H: Handler<(), RequestError>>(
        handler: &H,
        req: Request,
    ) -> std::result::Result<Response, RequestError> {
        handler.call(req, ()).await
    }

    fn single(hub: &MemoryHub) -> Breadcrumb {
        let mut crumbs = hub.take();
        assert_eq!(crumbs.len(), 1, "expected exactly one breadcrumb");
        crumbs.remove(0)
    }

    // ── outcomes ──────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn leaves_a_breadcrumb_for_successful_requests() {
        let hub = MemoryHub::new();
        let middleware = BreadcrumbMiddleware::builder().build(hub.clone()).unwrap();
        let original = Response::text(StatusCode::OK, LOREM);
        let client = middleware.wrap(respond(original.clone()));

        let resp = send(&client, Request::get("https://example.com")).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        // Same allocation: the body was borrowed, never copied or drained.
        assert_eq!(resp.body().as_ptr(), original.body().as_ptr());
        assert_eq!(resp.body(), LOREM);
        let crumb = single(&hub);
        assert_eq!(crumb.metadata().keys(), ["method", "uri", "statusCode", "time"]);
    }

    #[tokio::test]
    async fn leaves_a_breadcrumb_for_unsuccessful_requests() {
        let hub = MemoryHub::new();
        let middleware = BreadcrumbMiddleware::builder().build(hub.clone()).unwrap();
        let client = middleware.wrap(fail(|| RequestError::Timeout));

        let err = send(&client, Request::get("https://example.com")).await.unwrap_err();

        assert!(matches!(err, RequestError::Timeout));
        let crumb = single(&hub);
        assert_eq!(crumb.metadata().status_code, None);
        assert_eq!(crumb.metadata().response_body, None);
        assert_eq!(crumb.metadata().keys(), ["method", "uri", "time"]);
    }

    #[derive(Debug, PartialEq)]
    struct Marked(u64);

    impl ResponseCarrier for Marked {}

    #[tokio::test]
    async fn propagates_the_original_error_value() {
        let hub = MemoryHub::new();
        let middleware = BreadcrumbMiddleware::builder().build(hub.clone()).unwrap();
        let client = middleware
            .wrap(|_req: Request, _opts: ()| async { Err::<Response, _>(Marked(0xC0FFEE)) });

        let outcome = Handler::<(), Marked>::call(&client, Request::get("https://example.com"), ())
            .await;

        assert_eq!(outcome.unwrap_err(), Marked(0xC0FFEE));
        assert_eq!(hub.len(), 1);
    }

    #[tokio::test]
    async fn uses_the_response_attached_to_an_error() {
        let hub = MemoryHub::new();
        let middleware = BreadcrumbMiddleware::builder().build(hub.clone()).unwrap();
        let client = middleware.wrap(fail(|| {
            RequestError::Status(Response::text(StatusCode::UNPROCESSABLE_ENTITY, "name is required"))
        }));

        let err = send(&client, Request::get("https://example.com")).await.unwrap_err();

        assert_eq!(err.response().map(Response::status), Some(StatusCode::UNPROCESSABLE_ENTITY));
        let crumb = single(&hub);
        assert_eq!(crumb.metadata().status_code, Some(422));
        assert_eq!(crumb.metadata().response_body.as_deref(), Some("name is required"));
    }

    #[tokio::test]
    async fn no_breadcrumb_if_the_request_is_dropped_before_settling() {
        let hub = MemoryHub::new();
        let middleware = BreadcrumbMiddleware::builder().build(hub.clone()).unwrap();
        let client = middleware.wrap(|_req: Request, _opts: ()| async {
            std::future::pending::<std::result::Result<Response, RequestError>>().await
        });

        let pending = send(&client, Request::get("https://example.com"));
        drop(pending);

        assert!(hub.is_empty());
    }

    // ── fixed and configured fields ───────────────────────────────────────────

    #[tokio::test]
    async fn sets_level_type_category_and_message() {
        let hub = MemoryHub::new();
        let middleware = BreadcrumbMiddleware::builder()
            .category("foo-bar")
            .message("baz")
            .build(hub.clone())
            .unwrap();
        let client = middleware.wrap(respond(Response::new(StatusCode::OK)));

        send(&client, Request::get("https://example.com")).await.unwrap();

        let crumb = single(&hub);
        assert_eq!(crumb.level(), Level::Info);
        assert_eq!(crumb.kind(), Kind::Http);
        assert_eq!(crumb.category(), "foo-bar");
        assert_eq!(crumb.message(), "baz");
    }

    #[tokio::test]
    async fn defaults_to_http_category_and_message() {
        let hub = MemoryHub::new();
        let middleware = BreadcrumbMiddleware::builder().build(hub.clone()).unwrap();
        let client = middleware.wrap(respond(Response::new(StatusCode::OK)));

        send(&client, Request::get("https://example.com")).await.unwrap();

        let crumb = single(&hub);
        assert_eq!(crumb.category(), "http");
        assert_eq!(crumb.message(), "HTTP request");
    }

    #[tokio::test]
    async fn sets_method_uri_and_status_code() {
        let hub = MemoryHub::new();
        let middleware = BreadcrumbMiddleware::builder().build(hub.clone()).unwrap();
        let client = middleware.wrap(respond(Response::new(StatusCode::ACCEPTED)));

        send(&client, Request::post("https://example.com/jobs", "{}")).await.unwrap();

        let metadata = single(&hub).metadata().clone();
        assert_eq!(metadata.method.as_deref(), Some("POST"));
        assert_eq!(metadata.uri.as_deref(), Some("https://example.com/jobs"));
        assert_eq!(metadata.status_code, Some(202));
    }

    // ── body summaries ────────────────────────────────────────────────────────

    #[tokio::test]
    async fn custom_summarizer_sets_request_and_response_bodies() {
        let hub = MemoryHub::new();
        let middleware = BreadcrumbMiddleware::builder()
            .summarizer(|_: Message<'_>| Some("foo-bar".to_owned()))
            .build(hub.clone())
            .unwrap();
        let client = middleware.wrap(respond(Response::new(StatusCode::OK)));

        send(&client, Request::post("https://example.com", "foo-bar")).await.unwrap();

        let metadata = single(&hub).metadata().clone();
        assert_eq!(metadata.request_body.as_deref(), Some("foo-bar"));
        assert_eq!(metadata.response_body.as_deref(), Some("foo-bar"));
    }

    #[tokio::test]
    async fn error_response_bodies_are_truncated() {
        let hub = MemoryHub::new();
        let middleware = BreadcrumbMiddleware::builder()
            .truncate_body_at(25)
            .build(hub.clone())
            .unwrap();
        let client = middleware.wrap(respond(Response::text(StatusCode::BAD_GATEWAY, LOREM)));

        let resp = send(&client, Request::get("https://example.com")).await.unwrap();

        assert_eq!(resp.body(), LOREM);
        let metadata = single(&hub).metadata().clone();
        assert_eq!(metadata.request_body, None);
        assert_eq!(
            metadata.response_body.as_deref(),
            Some("Lorem ipsum dolor sit ame (truncated...)"),
        );
    }

    #[tokio::test]
    async fn disabled_summaries_omit_bodies_even_for_errors() {
        let hub = MemoryHub::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let middleware = BreadcrumbMiddleware::builder()
            .summarizer(move |_: Message<'_>| {
                counter.fetch_add(1, Ordering::SeqCst);
                Some("never".to_owned())
            })
            .without_body_summaries()
            .build(hub.clone())
            .unwrap();
        let client = middleware.wrap(respond(Response::text(StatusCode::INTERNAL_SERVER_ERROR, LOREM)));

        send(&client, Request::post("https://example.com", "payload")).await.unwrap();

        let metadata = single(&hub).metadata().clone();
        assert_eq!(metadata.request_body, None);
        assert_eq!(metadata.response_body, None);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn panicking_summarizer_only_costs_its_field() {
        let hub = MemoryHub::new();
        let middleware = BreadcrumbMiddleware::builder()
            .summarizer(|msg: Message<'_>| match msg {
                Message::Request(_) => Some("request".to_owned()),
                Message::Response(_) => panic!("unreadable body"),
            })
            .build(hub.clone())
            .unwrap();
        let client = middleware.wrap(respond(Response::new(StatusCode::INTERNAL_SERVER_ERROR)));

        let resp = send(&client, Request::get("https://example.com")).await.unwrap();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let metadata = single(&hub).metadata().clone();
        assert_eq!(metadata.request_body.as_deref(), Some("request"));
        assert_eq!(metadata.response_body, None);
        assert_eq!(metadata.status_code, Some(500));
    }

    struct OfflineHub;

    impl Hub for OfflineHub {
        fn add_breadcrumb(&self, _: Breadcrumb) {
            panic!("collector offline");
        }
    }

    #[tokio::test]
    async fn panicking_hub_does_not_fail_the_request() {
        let middleware = BreadcrumbMiddleware::builder().build(OfflineHub).unwrap();
        let client = middleware.wrap(respond(Response::new(StatusCode::OK)));

        let resp = send(&client, Request::get("https://example.com")).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
    }

    // ── redaction ─────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn redacts_uri_and_body_summaries() {
        let hub = MemoryHub::new();
        let middleware = BreadcrumbMiddleware::builder()
            .redacted_strings(["secret", "api-key"])
            .summarizer(|msg: Message<'_>| Some(String::from_utf8_lossy(msg.body()).into_owned()))
            .build(hub.clone())
            .unwrap();
        let client = middleware.wrap(respond(Response::text(StatusCode::FORBIDDEN, "bad secret")));

        send(&client, Request::post("https://example.com?auth=api-key", "foo-bar secret"))
            .await
            .unwrap();

        let metadata = single(&hub).metadata().clone();
        assert_eq!(metadata.uri.as_deref(), Some("https://example.com?auth=[Filtered]"));
        assert_eq!(metadata.request_body.as_deref(), Some("foo-bar [Filtered]"));
        assert_eq!(metadata.response_body.as_deref(), Some("bad [Filtered]"));
        assert_eq!(metadata.method.as_deref(), Some("POST"));
    }

    #[tokio::test]
    async fn uri_is_recorded_as_the_caller_wrote_it() {
        let hub = MemoryHub::new();
        let middleware = BreadcrumbMiddleware::builder()
            .redact("example.com?auth=api-key")
            .build(hub.clone())
            .unwrap();
        let client = middleware.wrap(respond(Response::new(StatusCode::OK)));

        send(&client, Request::get("https://example.com")).await.unwrap();
        send(&client, Request::get("https://example.com?auth=api-key")).await.unwrap();

        let uris: Vec<_> = hub.take().into_iter().filter_map(|b| b.metadata().uri.clone()).collect();
        assert_eq!(uris, ["https://example.com", "https://[Filtered]"]);
    }

    // ── timing ────────────────────────────────────────────────────────────────

    #[tokio::test(start_paused = true)]
    async fn time_covers_the_wrapped_handler() {
        let hub = MemoryHub::new();
        let middleware = BreadcrumbMiddleware::builder().build(hub.clone()).unwrap();
        let slow = |_req: Request, _opts: ()| async {
            tokio::time::sleep(Duration::from_millis(250)).await;
            Ok::<_, RequestError>(Response::new(StatusCode::OK))
        };
        let slower = |_req: Request, _opts: ()| async {
            tokio::time::sleep(Duration::from_millis(1_500)).await;
            Err::<Response, _>(RequestError::Timeout)
        };

        send(&middleware.wrap(slow), Request::get("https://example.com")).await.unwrap();
        send(&middleware.wrap(slower), Request::get("https://example.com")).await.unwrap_err();

        let times: Vec<_> = hub.take().into_iter().filter_map(|b| b.metadata().time.clone()).collect();
        assert_eq!(times, ["250ms", "1.5s"]);
    }

    // ── composition and concurrency ───────────────────────────────────────────

    #[tokio::test]
    async fn instrumented_handlers_can_be_wrapped_again() {
        let outer_hub = MemoryHub::new();
        let inner_hub = MemoryHub::new();
        let outer = BreadcrumbMiddleware::builder().category("outer").build(outer_hub.clone()).unwrap();
        let inner = BreadcrumbMiddleware::builder().category("inner").build(inner_hub.clone()).unwrap();
        let client = outer.wrap(inner.wrap(respond(Response::new(StatusCode::OK))));

        send(&client, Request::get("https://example.com")).await.unwrap();

        assert_eq!(single(&outer_hub).category(), "outer");
        assert_eq!(single(&inner_hub).category(), "inner");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_requests_each_leave_one_breadcrumb() {
        let hub = MemoryHub::new();
        let middleware = BreadcrumbMiddleware::builder().build(hub.clone()).unwrap();
        let client = Arc::new(middleware.wrap(|req: Request, _opts: ()| async move {
            tokio::task::yield_now().await;
            if req.uri().path() == "/fail" {
                return Err(RequestError::Timeout);
            }
            Ok(Response::new(StatusCode::OK))
        }));

        let mut tasks = tokio::task::JoinSet::new();
        for i in 0..32 {
            let client = Arc::clone(&client);
            let path = if i % 4 == 0 { "/fail" } else { "/ok" };
            tasks.spawn(async move {
                send(&*client, Request::get(&format!("https://example.com{path}"))).await
            });
        }
        let mut failures = 0;
        while let Some(outcome) = tasks.join_next().await {
            if outcome.unwrap().is_err() {
                failures += 1;
            }
        }

        assert_eq!(failures, 8);
        let crumbs = hub.take();
        assert_eq!(crumbs.len(), 32);
        let with_status = crumbs.iter().filter(|b| b.metadata().status_code.is_some()).count();
        assert_eq!(with_status, 24);
    }

    // ── construction ──────────────────────────────────────────────────────────

    #[test]
    fn zero_truncation_is_a_build_error() {
        let result = BreadcrumbMiddleware::builder().truncate_body_at(0).build(MemoryHub::new());
        assert!(matches!(result, Err(crate::Error::InvalidTruncation)));
    }

    #[test]
    fn new_accepts_a_config() {
        let config = MiddlewareConfig { category: "from-config".into(), ..Default::default() };
        let middleware = BreadcrumbMiddleware::new(config, MemoryHub::new()).unwrap();
        assert_eq!(middleware.category(), "from-config");
        assert_eq!(middleware.message(), "HTTP request");
    }
}
