//! Middleware layer.
//!
//! Middleware sits between client code and the transport. It sees every
//! request on the way out and every outcome on the way back, which makes it
//! the right place for cross-cutting concerns that must not change behavior.
//!
//! - [`BreadcrumbMiddleware`] — one diagnostic breadcrumb per request: method,
//!   redacted URI, body summaries, status and elapsed time.
//! - [`Redactor`] — literal secret filtering for anything put in a breadcrumb.
//! - [`format_duration`] — `500μs` / `12.5ms` / `1.5s` elapsed-time strings.

mod breadcrumb;
mod duration;
mod redact;

pub use breadcrumb::{BreadcrumbMiddleware, BreadcrumbMiddlewareBuilder, Instrumented};
pub use duration::format_duration;
pub use redact::{FILTERED, Redactor};
