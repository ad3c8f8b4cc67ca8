//! Response construction.
//!
//! Every response the gateway produces — proxied content, the contract
//! not-found page, and OPTIONS preflights — carries the same fixed CORS
//! headers; dispatched responses additionally carry a content-type chosen by
//! route kind. Headers returned by the content backend are never forwarded.

use axum::http::header::{
    ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_MAX_AGE,
    CONTENT_TYPE,
};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::resolve::RouteKind;

const ALLOW_ORIGIN: HeaderValue = HeaderValue::from_static("*");
const ALLOW_METHODS: HeaderValue = HeaderValue::from_static("GET,HEAD,POST,OPTIONS");
const MAX_AGE: HeaderValue = HeaderValue::from_static("86400");

const HTML: &str = "text/html;charset=UTF-8";
const JAVASCRIPT: &str = "application/javascript;charset=UTF-8";

/// Headers applied uniformly to a request's success and failure responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseEnvelope {
    content_type: &'static str,
}

impl ResponseEnvelope {
    /// Pick the envelope for a route kind: the dependency bundle is served as
    /// JavaScript, everything else as HTML.
    pub fn for_kind(kind: RouteKind) -> Self {
        let content_type = match kind {
            RouteKind::Dependency => JAVASCRIPT,
            RouteKind::Primary | RouteKind::Gated => HTML,
        };
        Self { content_type }
    }

    /// The content-type this envelope applies.
    pub fn content_type(&self) -> &'static str {
        self.content_type
    }

    /// A 200 response wrapping proxied content.
    pub fn ok(&self, body: String) -> Response {
        self.build(StatusCode::OK, body)
    }

    /// The 404 page for a contract that is missing or failed validation,
    /// linking back to the transaction on the content gateway.
    pub fn not_found(&self, tx_id: &str, gateway_url: &str) -> Response {
        self.build(StatusCode::NOT_FOUND, not_found_page(tx_id, gateway_url))
    }

    fn build(&self, status: StatusCode, body: String) -> Response {
        let mut response = (status, body).into_response();
        let headers = response.headers_mut();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(self.content_type));
        apply_cors(&mut response);
        response
    }
}

/// The OPTIONS short-circuit: 200, empty body, CORS headers, no dispatch.
pub fn preflight() -> Response {
    let mut response = StatusCode::OK.into_response();
    apply_cors(&mut response);
    response
}

fn apply_cors(response: &mut Response) {
    let headers = response.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW_ORIGIN);
    headers.insert(ACCESS_CONTROL_ALLOW_METHODS, ALLOW_METHODS);
    headers.insert(ACCESS_CONTROL_MAX_AGE, MAX_AGE);
}

/// Render the contract not-found page.
///
/// Shown both when the transaction does not exist yet (Arweave finality can
/// lag the publishing flow) and when its tags fail validation, so the wording
/// stays neutral and points the visitor at the raw transaction.
fn not_found_page(tx_id: &str, gateway_url: &str) -> String {
    let id = html_escape(tx_id);
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Contract not found</title></head>\n<body>\n\
         <h1>Contract not found</h1>\n\
         <p>The contract <code>{id}</code> could not be served. It may still be \
         awaiting confirmation, or it is not a valid Ricardian Fabric contract.</p>\n\
         <p><a href=\"{gateway_url}/{id}\">View the raw transaction</a></p>\n\
         </body>\n</html>\n"
    )
}

/// HTML-escape a string for safe output.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
