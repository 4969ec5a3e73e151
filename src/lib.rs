//! # crumbs
//!
//! HTTP client middleware that leaves a diagnostic breadcrumb for every
//! request it sees, and otherwise stays out of the way.
//!
//! ## The contract
//!
//! Every request sent through an instrumented handler produces exactly one
//! [`Breadcrumb`], whether it succeeds or fails:
//!
//! - **method** and **URI**, with configured secrets replaced by `[Filtered]`
//! - **request / response body summaries**, error responses only by default,
//!   truncated to 512 characters
//! - **status code**, when there is a response (also one carried by an error)
//! - **elapsed time**, formatted as `500μs`, `12.5ms` or `1.5s`
//!
//! The breadcrumb goes to a [`Hub`] you pass in. The response or error goes
//! back to the caller untouched. The middleware observes; it never retries,
//! never swallows an error, never reads a body in a way the caller could notice.
//!
//! What crumbs intentionally leaves to others:
//!
//! - **Sending requests** — any async function `(Request, O) -> Result<Response, E>`
//! - **Storing and shipping breadcrumbs** — your [`Hub`]
//! - **Spans, retries, circuit breaking** — other layers
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use crumbs::{BreadcrumbMiddleware, Handler, Request, RequestError, Response, TracingHub};
//! use http::StatusCode;
//!
//! #[tokio::main]
//! async fn main() {
//!     let middleware = BreadcrumbMiddleware::builder()
//!         .category("billing-api")
//!         .redact("sk_live_4242")
//!         .build(TracingHub)
//!         .unwrap();
//!
//!     let client = middleware.wrap(send);
//!
//!     let outcome = client
//!         .call(Request::get("https://billing.example.com/invoices?key=sk_live_4242"), ())
//!         .await;
//!     // One breadcrumb has been logged, with `key=[Filtered]`.
//!     # let _ = outcome;
//! }
//!
//! async fn send(_req: Request, _opts: ()) -> Result<Response, RequestError> {
//!     // A real transport goes here: hyper, reqwest, a test double...
//!     Ok(Response::new(StatusCode::OK))
//! }
//! ```

mod breadcrumb;
mod config;
mod error;
mod handler;
mod hub;
mod message;
mod request;
mod response;
mod summarizer;

pub mod middleware;

pub use breadcrumb::{Breadcrumb, Kind, Level, Metadata};
pub use config::MiddlewareConfig;
pub use error::{Error, RequestError, ResponseCarrier, Result};
pub use handler::{BoxFuture, Handler};
pub use hub::{Hub, MemoryHub, TracingHub};
pub use message::Message;
pub use middleware::{BreadcrumbMiddleware, Instrumented};
pub use request::Request;
pub use response::{Response, ResponseBuilder};
pub use summarizer::{
    BodySummarizer, DEFAULT_TRUNCATE_AT, DefaultSummarizer, TRUNCATION_SUFFIX, body_summary,
};
