//! Error types for the Tanki Online API client.
//!
//! # Design
//! The APIs report most failures inside a successful HTTP response (a
//! `responseType` string or a `success` flag), so those get their own
//! variants per operation family. `UserNotFound` is kept apart from
//! `UserFailed` because callers routinely branch on "no such player".
//! `MalformedPayload` covers a body that is valid JSON but does not have the
//! keys and shapes the converters require.

use serde_json::error::Category;

/// Errors returned by `ApiClient` parse methods and the `TankiOnline` facade.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connection, TLS, body read).
    #[error("transport failed: {0}")]
    Transport(String),

    /// A non-2xx response whose body could not be interpreted.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body is not JSON at all.
    #[error("response is not valid JSON: {0}")]
    Decode(String),

    /// The JSON is missing a required key or has an unexpected shape.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    #[error("failed to get the tops (responseType: {response_type})")]
    TopsFailed { response_type: String },

    #[error("failed to find player with \"{name}\" name")]
    UserNotFound { name: String },

    #[error("failed to get player \"{name}\" (responseType: {response_type})")]
    UserFailed { name: String, response_type: String },

    #[error("{0}")]
    ArticlesFailed(String),

    /// A configured base URL could not be turned into a request URL.
    #[error("invalid url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Rejected before any request was issued.
    #[error("value of \"{name}\" parameter must be more than 0, got {value}")]
    InvalidArgument { name: &'static str, value: u32 },
}

impl ApiError {
    /// Sort a `serde_json` failure into "not JSON" and "JSON of the wrong shape".
    pub(crate) fn from_json(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => ApiError::MalformedPayload(err.to_string()),
            Category::Syntax | Category::Eof | Category::Io => ApiError::Decode(err.to_string()),
        }
    }

    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        ApiError::MalformedPayload(msg.into())
    }
}
