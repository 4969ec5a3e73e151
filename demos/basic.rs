//! Minimal crumbs demo — a fake transport, three requests, three breadcrumbs.
//!
//! Run with:
//!   RUST_LOG=info cargo run --example basic
//!
//! The transport below never touches the network: `/users/{id}` answers 200,
//! `/orders` answers 422 with a JSON error, `/slow` times out. Each call leaves
//! exactly one breadcrumb on the `crumbs::breadcrumb` target.

use std::time::Duration;

use crumbs::{BreadcrumbMiddleware, Handler, Request, RequestError, Response, TracingHub};
use http::StatusCode;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let middleware = BreadcrumbMiddleware::builder()
        .category("shop-api")
        .redact("sk_test_123")
        .truncate_body_at(40)
        .build(TracingHub)
        .expect("invalid middleware configuration");

    let client = middleware.wrap(transport);

    let _ = client.call(Request::get("https://shop.example.com/users/42?key=sk_test_123"), ()).await;
    let _ = client
        .call(Request::post("https://shop.example.com/orders", r#"{"sku":""}"#), ())
        .await;
    let _ = client.call(Request::get("https://shop.example.com/slow"), ()).await;
}

// Stands in for hyper / reqwest. Treats 4xx and 5xx as errors, keeping the
// response so the breadcrumb can still report status and body.
async fn transport(req: Request, _opts: ()) -> Result<Response, RequestError> {
    match req.uri().path() {
        "/slow" => {
            tokio::time::sleep(Duration::from_millis(120)).await;
            Err(RequestError::Timeout)
        }
        "/orders" => Err(RequestError::Status(
            Response::builder()
                .status(StatusCode::UNPROCESSABLE_ENTITY)
                .header("content-type", "application/json")
                .body(r#"{"error":"sku must not be empty","field":"sku","code":"empty"}"#),
        )),
        _ => Ok(Response::text(StatusCode::OK, r#"{"id":"42","name":"alice"}"#)),
    }
}
