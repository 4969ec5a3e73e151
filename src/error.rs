//! Error types.

use std::convert::Infallible;

use crate::response::Response;

/// Configuration error, returned when a [`BreadcrumbMiddleware`](crate::BreadcrumbMiddleware)
/// is built. Requests themselves never fail because of the middleware.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("body truncation length must be at least 1; disable body summaries instead")]
    InvalidTruncation,

    #[error("redacted string #{0} is empty")]
    EmptyRedactedString(usize),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that may carry the response that caused them.
///
/// HTTP clients often turn a `4xx`/`5xx` into an error; when they keep the
/// response around, the breadcrumb for the failed request can still report
/// its status and body. The default is "no response".
pub trait ResponseCarrier {
    fn response(&self) -> Option<&Response> {
        None
    }
}

impl ResponseCarrier for Infallible {}

impl ResponseCarrier for std::io::Error {}

/// Failure of a request in flight.
///
/// A reference error type for transports plugged behind the middleware.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// No connection could be made; there is no response.
    #[error("connect: {0}")]
    Connect(#[source] std::io::Error),

    #[error("request timed out")]
    Timeout,

    /// The server answered with a status the client treats as a failure.
    #[error("unsuccessful response: {}", .0.status())]
    Status(Response),
}

impl ResponseCarrier for RequestError {
    fn response(&self) -> Option<&Response> {
        match self {
            Self::Status(resp) => Some(resp),
            Self::Connect(_) | Self::Timeout => None,
        }
    }
}
