//! Synchronous client for TheMealDB recipe API.
//!
//! # Overview
//! Every operation is a single blocking GET against one of the service's
//! fixed endpoints, decoded from the `{"<key>": [row] | null}` envelope
//! into typed records. At the [`MealApi`] surface, "no data", a transport
//! failure, and an undecodable body all collapse into an absent result;
//! the `try_*` variants keep them distinguishable.
//!
//! # Design
//! - `MealClient` is stateless — it holds only `base_url` — and splits
//!   every operation into `build_*` (produces a request) and `parse_*`
//!   (consumes a response), so decoding is testable against canned bodies.
//! - `Transport` wraps one reusable blocking agent; `MealApi` composes the
//!   two into one-call operations.
//! - DTOs are defined independently from the mock-server crate; the
//!   integration tests catch schema drift.

pub mod api;
pub mod client;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use api::MealApi;
pub use client::{MealClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{HttpRequest, HttpResponse};
pub use transport::Transport;
pub use types::{Category, Ingredient, Meal, MealSummary};
