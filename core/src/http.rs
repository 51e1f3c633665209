//! HTTP transport types shared by the request builder and the executor.
//!
//! # Design
//! These types describe HTTP traffic as plain data. The recipe service is
//! GET-only — no request bodies, no custom headers — so a request reduces to
//! the URL to fetch. `MealClient` builds `HttpRequest` values and parses
//! `HttpResponse` values without touching the network; `Transport` is the
//! only code that performs I/O between the two.
//!
//! All fields use owned types so values can be moved freely between the
//! builder, the executor, and test fixtures.

/// A GET request described as plain data.
///
/// Built by `MealClient::build_*` methods and executed by `Transport::get`
/// (or compared against an expected URL in tests).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
}

/// An HTTP response described as plain data.
///
/// Constructed by `Transport` after executing an `HttpRequest`, or by a
/// test fixture, then passed to `MealClient::parse_*` methods for decoding.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}
