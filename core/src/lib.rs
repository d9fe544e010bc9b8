//! Async client for the Tanki Online web APIs.
//!
//! # Overview
//! Fetches leaderboards, player profiles, server status and eSports articles
//! and turns the loosely shaped JSON into typed records with derived fields
//! (rank names, grade offsets, durations, kill/death ratios).
//!
//! # Design
//! - `ApiClient` builds `HttpRequest` values and parses `HttpResponse`
//!   values without touching the network (host-does-IO pattern).
//! - `TankiOnline` drives an `ApiClient` through any `Transport`;
//!   `ReqwestTransport` is bundled behind the default `reqwest` feature.
//! - `schema` mirrors the wire format; `types` holds the records and the
//!   converters between the two.
//! - Display language is passed explicitly as a `Locale` wherever a derived
//!   value depends on it. There is no process-wide locale state.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod facade;
pub mod http;
pub mod locale;
pub mod schema;
pub mod transport;
pub mod types;

pub use client::ApiClient;
pub use endpoints::Endpoints;
pub use error::ApiError;
pub use facade::TankiOnline;
pub use http::{HttpRequest, HttpResponse};
pub use locale::Locale;
pub use transport::Transport;
#[cfg(feature = "reqwest")]
pub use transport::ReqwestTransport;
pub use types::*;
