//! Executes `HttpRequest`s built by `ApiClient`.
//!
//! # Design
//! The core never opens a socket itself. Anything that can turn an
//! `HttpRequest` into an `HttpResponse` can drive the facade: the bundled
//! `ReqwestTransport`, a host application's own HTTP stack, or a canned
//! responder in tests. No retries or timeouts are applied at this layer.

use std::future::Future;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

/// Performs one HTTP round-trip.
///
/// Implementations report connection-level failures as
/// `ApiError::Transport` and return every received response as data,
/// whatever its status.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse, ApiError>> + Send;
}

#[cfg(feature = "reqwest")]
pub use self::reqwest_transport::ReqwestTransport;

#[cfg(feature = "reqwest")]
mod reqwest_transport {
    use super::*;

    /// `Transport` backed by a shared `reqwest::Client`.
    #[derive(Debug, Clone, Default)]
    pub struct ReqwestTransport {
        client: reqwest::Client,
    }

    impl ReqwestTransport {
        pub fn new() -> Self {
            Self::default()
        }

        /// Reuse an existing client, e.g. one with a proxy or timeout set.
        pub fn with_client(client: reqwest::Client) -> Self {
            Self { client }
        }
    }

    impl Transport for ReqwestTransport {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            let mut builder = self.client.get(&request.url);
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }

            let response = builder
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;

            let status = response.status().as_u16();
            let headers = response
                .headers()
                .iter()
                .filter_map(|(name, value)| {
                    value.to_str().ok().map(|value| (name.to_string(), value.to_string()))
                })
                .collect();

            let body = response
                .bytes()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .to_vec();

            Ok(HttpResponse { status, headers, body })
        }
    }
}
