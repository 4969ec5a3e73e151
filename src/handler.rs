//! The request handler abstraction middleware wraps.
//!
//! A handler is whatever actually sends the request: a transport, or another
//! middleware in front of one. Its shape is
//!
//! ```text
//! (Request, O) -> future of Result<Response, E>
//! ```
//!
//! where `O` is the per-request options type of the client and `E` its error
//! type. The middleware is generic over both and never inspects `O`.
//!
//! Wrapping keeps the shape, so wrapped handlers wrap again:
//!
//! ```text
//! async fn send(req, opts) -> Result<Response, E> { … }   ← transport
//!        ↓ middleware.wrap(send)
//! Instrumented<send>                                     ← Handler<O, E>
//!        ↓ other.wrap(…)
//! Instrumented<Instrumented<send>>                       ← still Handler<O, E>
//! ```

use std::future::Future;
use std::pin::Pin;

use crate::request::Request;
use crate::response::Response;

/// A heap-allocated, type-erased future.
///
/// `Send + 'static` so the client can drive it on any tokio worker.
pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;

/// Sends one request and resolves to its response or failure.
///
/// Implemented for every async closure or function with the signature:
///
/// ```text
/// async fn name(req: Request, options: O) -> Result<Response, E>
/// ```
pub trait Handler<O, E>: Send + Sync + 'static {
    fn call(&self, request: Request, options: O) -> BoxFuture<Result<Response, E>>;
}

impl<F, Fut, O, E> Handler<O, E> for F
where
    F: Fn(Request, O) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Response, E>> + Send + 'static,
{
    fn call(&self, request: Request, options: O) -> BoxFuture<Result<Response, E>> {
        Box::pin(self(request, options))
    }
}
