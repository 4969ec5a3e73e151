//! Borrowed view over either side of an HTTP exchange.

use bytes::Bytes;

use crate::request::Request;
use crate::response::Response;

/// A request or a response, as seen by a [`BodySummarizer`](crate::BodySummarizer).
///
/// Summarizers are invoked once per message, not once per exchange, so the
/// same summarizer sees the request first and the response (if any) second.
#[derive(Clone, Copy, Debug)]
pub enum Message<'a> {
    Request(&'a Request),
    Response(&'a Response),
}

impl<'a> Message<'a> {
    pub fn body(&self) -> &'a Bytes {
        match *self {
            Self::Request(req) => req.body(),
            Self::Response(resp) => resp.body(),
        }
    }

    pub fn as_response(&self) -> Option<&'a Response> {
        match *self {
            Self::Response(resp) => Some(resp),
            Self::Request(_) => None,
        }
    }
}

impl<'a> From<&'a Request> for Message<'a> {
    fn from(req: &'a Request) -> Self { Self::Request(req) }
}

impl<'a> From<&'a Response> for Message<'a> {
    fn from(resp: &'a Response) -> Self { Self::Response(resp) }
}
