//! Error types for the recipe API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because the service reports "no such
//! meal" as a well-formed `200` body whose result list is null, and callers
//! frequently distinguish that from a transport or decoding failure. All
//! non-2xx responses land in `Http` with the raw status code and body for
//! debugging.

use std::fmt;

/// Errors returned by `MealClient` parse methods and `MealApi::try_*`
/// operations.
#[derive(Debug)]
pub enum ApiError {
    /// The request never produced a usable response: DNS, connect, TLS, or
    /// read failure.
    Transport(String),

    /// The server answered with a non-2xx status.
    Http { status: u16, body: String },

    /// The response body could not be decoded as the expected envelope.
    Decode(String),

    /// The envelope was well-formed but its result list was null, missing,
    /// or empty — the service's way of saying "no data".
    NotFound,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "transport failed: {msg}"),
            ApiError::Http { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::Decode(msg) => write!(f, "decoding failed: {msg}"),
            ApiError::NotFound => write!(f, "no data for this query"),
        }
    }
}

impl std::error::Error for ApiError {}
