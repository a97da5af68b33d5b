//! HTTP API layer: gateway trait, client, and failure taxonomy.
//!
//! This module maps the five event operations (list, get, create, update,
//! delete) onto REST calls against a configured base endpoint, with JSON
//! encoding/decoding and a typed failure taxonomy.
//!
//! # Organization
//!
//! - [`gateway`]: The [`EventsGateway`] trait the worker programs against
//! - [`client`]: [`HttpEventsClient`], the reqwest-backed implementation
//! - [`error`]: [`ApiError`] and user-facing message derivation

pub mod client;
pub mod error;
pub mod gateway;

pub use client::HttpEventsClient;
pub use error::ApiError;
pub use gateway::EventsGateway;
