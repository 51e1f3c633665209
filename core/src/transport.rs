//! Blocking HTTP executor for the recipe API.
//!
//! # Design
//! One reusable [`ureq::Agent`] per transport, configured to hand non-2xx
//! statuses back as data so status interpretation stays in the parse layer.
//! Each call performs exactly one blocking GET with the agent's default
//! timeouts; there is no retry, no caching, and no request state shared
//! between calls.

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

/// Reusable blocking executor for [`HttpRequest`] values.
#[derive(Clone)]
pub struct Transport {
    agent: ureq::Agent,
}

impl Transport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Perform one blocking GET and return the response as plain data.
    ///
    /// Fails only when no response could be read at all; a non-2xx status
    /// is returned as data for the parse layer to interpret.
    pub fn get(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut response = self
            .agent
            .get(&request.url)
            .call()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

impl Default for Transport {
    fn default() -> Self {
        Self::new()
    }
}
